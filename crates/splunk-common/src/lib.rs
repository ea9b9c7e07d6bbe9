//! Common types for the splunk-args crates
//!
//! Holds the key/value [`Args`] map that typed endpoint arguments are built
//! on, the macros those typed sets are generated with, and the code that turns
//! an endpoint plus its arguments into an [`http::Request`].

#![warn(missing_docs)]
extern crate self as splunk_common;

pub use args::{ArgValue, Args};
pub use serde;
pub use smol_str;
pub use url;

/// Ordered argument maps and their values.
pub mod args;
pub mod error;
/// Declarative generators for wire enums and typed argument sets.
#[macro_use]
pub mod macros;
pub mod request;
