use smol_str::SmolStr;
use splunk_common::error::EncodeResult;
use splunk_common::request::{Endpoint, Method, encode_path_segment};
use splunk_common::{Args, args_struct, wire_enum};

wire_enum! {
    /// Format of the returned events.
    pub enum OutputMode {
        /// Atom feed
        Atom = "atom",
        /// Comma separated values
        Csv = "csv",
        /// JSON, one object per event
        Json = "json",
        /// JSON, column-major
        JsonCols = "json_cols",
        /// JSON, row-major
        JsonRows = "json_rows",
        /// Raw event text
        Raw = "raw",
        /// XML
        Xml = "xml",
    }
}

wire_enum! {
    /// How lines are cut down to fit [`JobEventsArgs::maximum_lines`].
    pub enum TruncationMode {
        /// Keep a summary of the event
        Abstract = "abstract",
        /// Cut the event off after the line limit
        Truncate = "truncate",
    }
}

args_struct! {
    /// Arguments for listing the events of a search job.
    ///
    /// Nothing is validated locally: unset keys are left off the request and
    /// the server fills in its own defaults for them.
    pub struct JobEventsArgs {
        /// Maximum number of events to return. `0` returns every available
        /// event; the server default is 100.
        fn count(int) => "count";
        /// Start of the time range: a UTC time (fractional seconds allowed), a
        /// time relative to now, or a string in [`time_format`](Self::time_format).
        fn earliest_time(str) => "earliest_time";
        /// Fields to return for each event, in order.
        fn field_list(list) => "f";
        /// End of the time range, in the same forms as `earliest_time`.
        fn latest_time(str) => "latest_time";
        /// Maximum number of lines in any single event's `_raw` field. `0`
        /// means no limit.
        fn maximum_lines(int) => "max_lines";
        /// Zero-based index of the first event to return. Negative offsets
        /// count back from the end, so `-1` is the last event.
        fn offset(int) => "offset";
        /// Format of the response.
        fn output_mode(wire: OutputMode) => "output_mode";
        /// UTC time format used for times in the response.
        fn output_time_format(str) => "output_time_format";
        /// Post-processing search applied to the events.
        fn search(str) => "search";
        /// Segmentation to apply to the data, including k/v segmentation.
        fn segmentation(str) => "segmentation";
        /// Format used to parse time strings in `earliest_time` and
        /// `latest_time`. The server default is `%m/%d/%Y:%H:%M:%S`.
        fn time_format(str) => "time_format";
        /// How to truncate lines to fit [`maximum_lines`](Self::maximum_lines).
        fn truncation_mode(wire: TruncationMode) => "truncation_mode";
    }
}

/// List events from the search job `sid`.
///
/// ```
/// use splunk_api::search::{JobEvents, JobEventsArgs, OutputMode};
/// use splunk_common::request::{CallOptions, build_http_request};
///
/// let mut args = JobEventsArgs::new();
/// args.count(10).output_mode(OutputMode::Json);
///
/// let request = build_http_request(
///     &"https://localhost:8089".parse().unwrap(),
///     &JobEvents::new().sid("1712345678.42").args(args).build(),
///     &CallOptions::default(),
/// )
/// .unwrap();
/// assert_eq!(
///     request.uri(),
///     "https://localhost:8089/services/search/jobs/1712345678.42/events?count=10&output_mode=json"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, bon::Builder)]
#[builder(start_fn = new)]
pub struct JobEvents {
    /// Search job id
    #[builder(into)]
    pub sid: SmolStr,
    /// Arguments for the listing
    #[builder(default)]
    pub args: JobEventsArgs,
}

impl Endpoint for JobEvents {
    const METHOD: Method = Method::Get;

    fn path(&self) -> EncodeResult<String> {
        Ok(format!(
            "search/jobs/{}/events",
            encode_path_segment(&self.sid)?
        ))
    }

    fn args(&self) -> &Args {
        self.args.args()
    }
}
