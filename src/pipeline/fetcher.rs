//! HTTP fetcher for show and episode pages
//!
//! One shared client, one GET per call, no retry. Connection and timeout
//! failures map to `Error::Network`; any non-success status maps to
//! `Error::Status` before the body is read.

use crate::config::FetchConfig;
use crate::Error;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// A fetched page, alive only until its metadata is extracted
#[derive(Debug, Clone)]
pub struct EpisodePage {
    /// URL the page was fetched from
    pub url: Url,
    /// Raw HTML body
    pub body: String,
}

/// Builds the HTTP client shared by every pipeline request
///
/// Both deadlines come from `FetchConfig`; every call through this client is
/// bounded even when the remote end stops responding mid-transfer.
pub fn build_http_client(fetch: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(fetch.request_timeout))
        .connect_timeout(Duration::from_secs(fetch.connect_timeout))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one page with a single attempt
pub async fn fetch_page(client: &Client, url: &Url) -> Result<EpisodePage, Error> {
    tracing::debug!("Fetching {}", url);

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| classify(url, source))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status {
            url: url.to_string(),
            code: status.as_u16(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|source| classify(url, source))?;

    Ok(EpisodePage {
        url: url.clone(),
        body,
    })
}

/// Maps a transport failure onto the pipeline error taxonomy
fn classify(url: &Url, source: reqwest::Error) -> Error {
    if source.is_timeout() {
        tracing::debug!("Request to {} timed out", url);
    } else if source.is_connect() {
        tracing::debug!("Connection to {} failed", url);
    }

    Error::Network {
        url: url.to_string(),
        source,
    }
}
