//! Turning typed endpoints into HTTP requests
//!
//! Nothing here talks to the network. [`build_http_request`] produces an
//! [`http::Request`] value that any HTTP client can send.

use http::{
    HeaderName, HeaderValue, Request,
    header::{AUTHORIZATION, CONTENT_TYPE},
};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use smol_str::SmolStr;
use url::Url;

use crate::args::Args;
use crate::error::{EncodeError, EncodeResult};

/// Content type of form-encoded POST bodies
pub const FORM_ENCODING: &str = "application/x-www-form-urlencoded";

/// Characters escaped inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Percent-encode `segment` so it stays a single path segment.
///
/// Empty, `.` and `..` segments are rejected: the URL parser collapses them,
/// escaped or not, which would point the request at a different resource.
pub fn encode_path_segment(segment: &str) -> EncodeResult<String> {
    if matches!(segment, "" | "." | "..") {
        return Err(EncodeError::PathSegment(SmolStr::new(segment)));
    }
    Ok(utf8_percent_encode(segment, PATH_SEGMENT).to_string())
}

/// HTTP method used by an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Arguments go in the query string
    Get,
    /// Arguments go in a form-encoded body
    Post,
}

impl Method {
    /// Get the HTTP method string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl From<Method> for http::Method {
    fn from(value: Method) -> Self {
        match value {
            Method::Get => http::Method::GET,
            Method::Post => http::Method::POST,
        }
    }
}

/// A REST endpoint together with the arguments for one call to it.
pub trait Endpoint {
    /// HTTP method for this endpoint
    const METHOD: Method;

    /// Path relative to the service root, e.g. `search/jobs/{sid}/events`.
    ///
    /// Dynamic segments must be escaped with [`encode_path_segment`].
    fn path(&self) -> EncodeResult<String>;

    /// Arguments to send with the call.
    fn args(&self) -> &Args;
}

/// Authorization token types for REST requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationToken {
    /// Session key from `auth/login`, sent as `Splunk <key>`
    Splunk(SmolStr),
    /// Authentication token, sent as `Bearer <token>`
    Bearer(SmolStr),
}

impl AuthorizationToken {
    fn header_value(&self) -> EncodeResult<HeaderValue> {
        let mut value = match self {
            AuthorizationToken::Splunk(key) => HeaderValue::from_str(&format!("Splunk {key}")),
            AuthorizationToken::Bearer(token) => {
                HeaderValue::from_str(&format!("Bearer {token}"))
            }
        }?;
        value.set_sensitive(true);
        Ok(value)
    }
}

/// Owner and app context for a request.
///
/// With a namespace, paths are rooted at `servicesNS/{owner}/{app}`;
/// without one they are rooted at `services`. Use `-` for either part to
/// match any owner or app.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace {
    /// User that owns the resource
    pub owner: SmolStr,
    /// App the resource belongs to
    pub app: SmolStr,
}

impl Namespace {
    /// Create a namespace for `owner` within `app`.
    pub fn new(owner: impl Into<SmolStr>, app: impl Into<SmolStr>) -> Self {
        Self {
            owner: owner.into(),
            app: app.into(),
        }
    }

    /// Namespace matching every owner and app.
    pub fn wildcard() -> Self {
        Self::new("-", "-")
    }

    fn path_prefix(&self) -> EncodeResult<String> {
        Ok(format!(
            "servicesNS/{}/{}",
            encode_path_segment(&self.owner)?,
            encode_path_segment(&self.app)?
        ))
    }
}

/// Per-request options for REST calls.
#[derive(Debug, Default, Clone, bon::Builder)]
#[builder(start_fn = new)]
pub struct CallOptions {
    /// Optional Authorization to apply (`Splunk` or `Bearer`).
    pub auth: Option<AuthorizationToken>,
    /// Owner/app namespace. Requests use the plain `services` root without one.
    pub namespace: Option<Namespace>,
    /// Extra headers to attach to this request.
    #[builder(default)]
    pub extra_headers: Vec<(HeaderName, HeaderValue)>,
}

/// HTTP headers set by the request builder
pub enum Header {
    /// Content-Type header
    ContentType,
    /// Authorization header
    Authorization,
}

impl From<Header> for HeaderName {
    fn from(value: Header) -> Self {
        match value {
            Header::ContentType => CONTENT_TYPE,
            Header::Authorization => AUTHORIZATION,
        }
    }
}

/// Build an HTTP request for `endpoint` against the service at `base`.
///
/// GET arguments are encoded into the query string, which is left off
/// entirely when no argument was set. POST arguments become a form body.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all, fields(method = E::METHOD.as_str())))]
pub fn build_http_request<E: Endpoint>(
    base: &Url,
    endpoint: &E,
    opts: &CallOptions,
) -> EncodeResult<Request<Vec<u8>>> {
    if base.cannot_be_a_base() {
        return Err(EncodeError::Url(
            url::ParseError::RelativeUrlWithCannotBeABaseBase,
        ));
    }

    let mut url = base.clone();
    let mut path = url.path().trim_end_matches('/').to_owned();
    path.push('/');
    match &opts.namespace {
        Some(namespace) => path.push_str(&namespace.path_prefix()?),
        None => path.push_str("services"),
    }
    path.push('/');
    path.push_str(endpoint.path()?.trim_start_matches('/'));
    url.set_path(&path);

    let encoded = endpoint.args().to_query_string()?;
    if E::METHOD == Method::Get && !encoded.is_empty() {
        url.set_query(Some(&encoded));
    } else {
        url.set_query(None);
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(url = %url, args = endpoint.args().len(), "built request url");

    let mut builder = Request::builder()
        .method(http::Method::from(E::METHOD))
        .uri(url.as_str());

    if E::METHOD == Method::Post {
        builder = builder.header(Header::ContentType, FORM_ENCODING);
    }

    if let Some(token) = &opts.auth {
        builder = builder.header(Header::Authorization, token.header_value()?);
    }

    for (name, value) in &opts.extra_headers {
        builder = builder.header(name, value);
    }

    let body = match E::METHOD {
        Method::Get => vec![],
        Method::Post => encoded.into_bytes(),
    };

    Ok(builder.body(body)?)
}
