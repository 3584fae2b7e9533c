//! RFC URL construction and retrieval.
//!
//! An `RfcFetcher` turns an RFC identifier into a URL by substituting it into
//! a template, performs one GET, and hands back the decoded body. Any non-2xx
//! answer becomes [`FetchError::Status`] so the caller can report it.

use crate::error::{FetchError, Result};
use std::io::Write;
use tracing::{debug, warn};

/// Where the IETF serves plaintext RFCs. `{}` is replaced by the identifier.
pub const RFC_URL_TEMPLATE: &str = "http://www.ietf.org/rfc/rfc{}.txt";

const PLACEHOLDER: &str = "{}";

/// Substitute `identifier` verbatim into every `{}` of `template`.
pub fn rfc_url(template: &str, identifier: &str) -> String {
    template.replace(PLACEHOLDER, identifier)
}

/// Fetches RFC documents over HTTP.
pub struct RfcFetcher {
    client: reqwest::Client,
    template: String,
}

impl Default for RfcFetcher {
    fn default() -> Self {
        Self {
            client: reqwest::Client::new(),
            template: RFC_URL_TEMPLATE.to_string(),
        }
    }
}

impl RfcFetcher {
    /// Create a fetcher for a custom URL template.
    ///
    /// The template must contain at least one `{}` placeholder.
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        if !template.contains(PLACEHOLDER) {
            return Err(FetchError::InvalidTemplate(template));
        }
        Ok(Self {
            template,
            ..Self::default()
        })
    }

    /// Use a preconfigured HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// The URL requested for `identifier`.
    pub fn url_for(&self, identifier: &str) -> String {
        rfc_url(&self.template, identifier)
    }

    /// Download the document for `identifier` and decode it as UTF-8.
    pub async fn fetch(&self, identifier: &str) -> Result<String> {
        let url = self.url_for(identifier);
        debug!(url = %url, "fetching RFC");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let reason = reason_phrase(&response);
            // Final URL, after any redirects the client followed.
            let url = response.url().to_string();
            warn!(status = status.as_u16(), url = %url, "RFC request rejected");
            return Err(FetchError::Status {
                status: status.as_u16(),
                reason,
                url,
            });
        }

        let body = response.bytes().await?;
        debug!(url = %url, bytes = body.len(), "RFC downloaded");

        String::from_utf8(body.to_vec()).map_err(|source| FetchError::Decode { url, source })
    }
}

/// The reason phrase the server sent, or the standard one for the status.
///
/// hyper only records the phrase when it differs from the canonical text.
fn reason_phrase(response: &reqwest::Response) -> String {
    match response.extensions().get::<hyper::ext::ReasonPhrase>() {
        Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
        None => response
            .status()
            .canonical_reason()
            .unwrap_or("Unknown")
            .to_string(),
    }
}

/// Render the three-line diagnostic printed when the server rejects a request.
pub fn write_http_error<W: Write>(
    out: &mut W,
    status: u16,
    reason: &str,
    url: &str,
) -> std::io::Result<()> {
    writeln!(out, "status: {status}")?;
    writeln!(out, "reason: {reason}")?;
    writeln!(out, "url: {url}")
}
