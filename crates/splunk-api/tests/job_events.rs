use serde::Deserialize;
use splunk_api::search::{JobEvents, JobEventsArgs, OutputMode, TruncationMode};
use splunk_common::error::{EncodeError, UnknownVariant};
use splunk_common::request::{AuthorizationToken, CallOptions, Namespace, build_http_request};
use splunk_common::smol_str::SmolStr;
use url::Url;

fn base() -> Url {
    Url::parse("https://localhost:8089").unwrap()
}

// Shape of the query a server would parse back out of the request
#[derive(Deserialize, Debug, PartialEq)]
struct EventsQuery {
    count: i64,
    earliest_time: String,
    f: Vec<String>,
    latest_time: String,
    max_lines: i64,
    offset: i64,
    output_mode: String,
    output_time_format: String,
    search: String,
    segmentation: String,
    time_format: String,
    truncation_mode: String,
}

#[test]
fn unset_args_leave_no_query() -> miette::Result<()> {
    let events = JobEvents::new().sid("1712345678.42").build();
    let req = build_http_request(&base(), &events, &CallOptions::default())?;

    assert_eq!(req.method(), http::Method::GET);
    assert_eq!(
        req.uri(),
        "https://localhost:8089/services/search/jobs/1712345678.42/events"
    );
    assert!(req.uri().query().is_none());
    assert!(req.body().is_empty());
    Ok(())
}

#[test]
fn full_query_round_trips() -> miette::Result<()> {
    let mut args = JobEventsArgs::new();
    args.count(50)
        .earliest_time("-24h@h")
        .field_list(["host", "source", "_raw"])
        .latest_time("now")
        .maximum_lines(5)
        .offset(5)
        .offset(-10)
        .output_mode(OutputMode::JsonRows)
        .output_time_format("%s.%Q")
        .search("search status>=500 | head 20")
        .segmentation("raw")
        .time_format("%m/%d/%Y:%H:%M:%S")
        .truncation_mode(TruncationMode::Abstract);

    let events = JobEvents::new().sid("admin__search_1").args(args).build();
    let req = build_http_request(&base(), &events, &CallOptions::default())?;

    let query = req.uri().query().expect("query string");
    assert_eq!(
        query,
        "count=50\
         &earliest_time=-24h%40h\
         &f=host&f=source&f=_raw\
         &latest_time=now\
         &max_lines=5\
         &offset=-10\
         &output_mode=json_rows\
         &output_time_format=%25s.%25Q\
         &search=search+status%3E%3D500+%7C+head+20\
         &segmentation=raw\
         &time_format=%25m%2F%25d%2F%25Y%3A%25H%3A%25M%3A%25S\
         &truncation_mode=abstract"
    );

    let parsed: EventsQuery = serde_html_form::from_str(query).unwrap();
    assert_eq!(
        parsed,
        EventsQuery {
            count: 50,
            earliest_time: "-24h@h".into(),
            f: vec!["host".into(), "source".into(), "_raw".into()],
            latest_time: "now".into(),
            max_lines: 5,
            offset: -10,
            output_mode: "json_rows".into(),
            output_time_format: "%s.%Q".into(),
            search: "search status>=500 | head 20".into(),
            segmentation: "raw".into(),
            time_format: "%m/%d/%Y:%H:%M:%S".into(),
            truncation_mode: "abstract".into(),
        }
    );
    Ok(())
}

#[test]
fn sid_with_backslash_stays_one_segment() -> miette::Result<()> {
    let events = JobEvents::new().sid("a\\b").build();
    let req = build_http_request(&base(), &events, &CallOptions::default())?;
    assert_eq!(req.uri().path(), "/services/search/jobs/a%5Cb/events");
    Ok(())
}

#[test]
fn dot_and_empty_sids_are_rejected() {
    for sid in ["", ".", ".."] {
        let events = JobEvents::new().sid(sid).build();
        let err = build_http_request(&base(), &events, &CallOptions::default()).unwrap_err();
        assert!(matches!(err, EncodeError::PathSegment(_)), "{sid:?}");
    }

    let events = JobEvents::new().sid("x").build();
    let opts = CallOptions::new()
        .namespace(Namespace::new("..", ".."))
        .build();
    let err = build_http_request(&base(), &events, &opts).unwrap_err();
    assert!(matches!(err, EncodeError::PathSegment(_)));
}

#[test]
fn namespaced_authorized_request() -> miette::Result<()> {
    let mut args = JobEventsArgs::new();
    args.output_mode(OutputMode::Xml);
    let events = JobEvents::new().sid("rt_md_1.3").args(args).build();
    let opts = CallOptions::new()
        .auth(AuthorizationToken::Splunk(SmolStr::new("session-key")))
        .namespace(Namespace::new("nobody", "search"))
        .build();

    let req = build_http_request(&base(), &events, &opts)?;
    assert_eq!(
        req.uri().path(),
        "/servicesNS/nobody/search/search/jobs/rt_md_1.3/events"
    );
    assert_eq!(req.uri().query(), Some("output_mode=xml"));
    assert_eq!(req.headers()[http::header::AUTHORIZATION], "Splunk session-key");
    Ok(())
}

#[test]
fn enums_parse_from_wire_values() {
    for mode in OutputMode::ALL {
        let parsed: OutputMode = mode.to_string().parse().unwrap();
        assert_eq!(parsed, *mode);
    }
    for mode in TruncationMode::ALL {
        let parsed: TruncationMode = mode.as_str().parse().unwrap();
        assert_eq!(parsed, *mode);
    }

    let err = "JSON_COLS".parse::<OutputMode>().unwrap_err();
    assert_eq!(err, UnknownVariant::new("OutputMode", "JSON_COLS"));
    assert_eq!(err.to_string(), "unknown OutputMode value \"JSON_COLS\"");
}

#[test]
fn enums_serialize_as_wire_values() {
    assert_eq!(
        serde_json::to_string(&OutputMode::JsonCols).unwrap(),
        "\"json_cols\""
    );
    assert_eq!(
        serde_json::from_str::<TruncationMode>("\"truncate\"").unwrap(),
        TruncationMode::Truncate
    );
}

#[test]
fn args_json_view() {
    let mut args = JobEventsArgs::new();
    args.count(0).field_list(["host"]).output_mode(OutputMode::Raw);
    assert_eq!(
        serde_json::to_value(&args).unwrap(),
        serde_json::json!({"count": 0, "f": ["host"], "output_mode": "raw"})
    );
}
