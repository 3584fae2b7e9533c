//! Download RFC texts from the IETF archive.
//!
//! The library half of the `getrfc` binary: URL construction, the single
//! GET request, and rendering of HTTP error diagnostics.

pub mod error;
pub mod fetch;

pub use error::{FetchError, Result};
pub use fetch::{rfc_url, write_http_error, RfcFetcher, RFC_URL_TEMPLATE};
