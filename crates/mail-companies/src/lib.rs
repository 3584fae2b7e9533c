//! Tally company names found in job-alert emails.
//!
//! Walks an `.emlx` mail archive, repairs the quoted-printable damage in each
//! message, pulls the text of every `<span>`, drops boilerplate with a
//! denylist, and counts what is left. The counts are written as CSV.

pub mod config;
pub mod discover;
pub mod error;
pub mod extract;
pub mod filter;
pub mod output;
pub mod pipeline;
pub mod repair;
pub mod tally;

pub use config::{ExtractorConfig, Repair};
pub use error::{Result, TallyError};
pub use filter::{Denylist, Exclusion};
pub use pipeline::{run, Extractor, RunSummary, TallyReport};
pub use tally::Tally;
