//! Typed arguments for Splunk REST endpoints
//!
//! Endpoints are grouped by namespace, each behind a Cargo feature of the same
//! name. Argument sets are generated from setter tables with
//! [`splunk_common::args_struct!`].

#![warn(missing_docs)]
pub use splunk_common;

/// `search/*` endpoints
#[cfg(feature = "search")]
pub mod search;
