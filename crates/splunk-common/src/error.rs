//! Error types for request encoding

use smol_str::SmolStr;

/// Error type for turning an endpoint and its arguments into an HTTP request
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum EncodeError {
    /// Failed to serialize query parameters
    #[error("Failed to serialize query: {0}")]
    #[diagnostic(code(splunk_common::encode::query))]
    Query(
        #[from]
        #[source]
        serde_html_form::ser::Error,
    ),

    /// Base URL can't have an endpoint path joined onto it
    #[error("Invalid base URL: {0}")]
    #[diagnostic(
        code(splunk_common::encode::url),
        help("the base URL should look like https://localhost:8089")
    )]
    Url(
        #[from]
        #[source]
        url::ParseError,
    ),

    /// Authorization token or extra header isn't a valid header value
    #[error("Invalid header value: {0}")]
    #[diagnostic(code(splunk_common::encode::header))]
    Header(
        #[from]
        #[source]
        http::header::InvalidHeaderValue,
    ),

    /// Path segment would be dropped or resolved away by the URL parser
    #[error("Invalid path segment: {0:?}")]
    #[diagnostic(
        code(splunk_common::encode::path_segment),
        help("path segments can't be empty, \".\" or \"..\"")
    )]
    PathSegment(SmolStr),

    /// Request construction failed (malformed URI, etc.)
    #[error("Invalid request: {0}")]
    #[diagnostic(code(splunk_common::encode::request))]
    Request(
        #[from]
        #[source]
        http::Error,
    ),
}

/// A string that isn't the wire value of any variant of an enumeration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
#[error("unknown {kind} value {value:?}")]
#[diagnostic(code(splunk_common::unknown_variant))]
pub struct UnknownVariant {
    /// Name of the enumeration being parsed
    pub kind: &'static str,
    /// The rejected input
    pub value: SmolStr,
}

impl UnknownVariant {
    /// Record a rejected input for the enumeration `kind`.
    pub fn new(kind: &'static str, value: impl AsRef<str>) -> Self {
        Self {
            kind,
            value: SmolStr::new(value.as_ref()),
        }
    }
}

/// Result type for request encoding
pub type EncodeResult<T> = std::result::Result<T, EncodeError>;
