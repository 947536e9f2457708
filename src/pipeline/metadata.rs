//! Embedded player configuration extraction
//!
//! Episode pages embed a JSON configuration blob in a data attribute on a
//! marked node. Only the first matching node is considered; the selector is
//! assumed unique per page, so any further matches are ignored.

use crate::pipeline::fetcher::EpisodePage;
use crate::Error;
use scraper::{Html, Selector};
use serde::Deserialize;

/// CSS selector for the node carrying the embedded player configuration
pub const CONSOLE_MARKER: &str = ".audio-video-console";

/// Attribute on the marker node holding the JSON blob
pub const CONSOLE_ATTR: &str = "data-console-info";

/// Player configuration embedded in an episode page
///
/// Only the fields the pipeline consumes are modelled; the vendor blob
/// carries many more (analytics tags, player chrome flags, imagery).
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerConfig {
    #[serde(rename = "appCode", default)]
    pub app_code: String,

    /// Opaque key identifying the playable asset to the validation API
    #[serde(rename = "idMedia", default)]
    pub id_media: String,

    #[serde(default)]
    pub params: PlaybackParams,
}

/// Playback parameters nested in the configuration blob
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaybackParams {
    #[serde(rename = "autoPlay", default)]
    pub auto_play: bool,

    #[serde(default)]
    pub lang: Option<String>,
}

/// Extracts the player configuration from an episode page
///
/// Fails with `SelectorMiss` when no node carries the marker (or the marked
/// node lacks the data attribute), `PlayerConfig` when the blob is not
/// well-formed JSON, and `EmptyMediaId` when the blob parses but names no
/// media. The caller must never reach the resolver in any of those cases.
pub fn extract_player_config(page: &EpisodePage) -> Result<PlayerConfig, Error> {
    let url = page.url.to_string();
    let document = Html::parse_document(&page.body);

    let selector = Selector::parse(CONSOLE_MARKER).map_err(|_| Error::SelectorMiss {
        url: url.clone(),
        selector: CONSOLE_MARKER.to_string(),
    })?;

    // First match only; the selector is assumed unique per page.
    let node = document
        .select(&selector)
        .next()
        .ok_or_else(|| Error::SelectorMiss {
            url: url.clone(),
            selector: CONSOLE_MARKER.to_string(),
        })?;

    let blob = node
        .value()
        .attr(CONSOLE_ATTR)
        .ok_or_else(|| Error::SelectorMiss {
            url: url.clone(),
            selector: format!("{}[{}]", CONSOLE_MARKER, CONSOLE_ATTR),
        })?;

    let config: PlayerConfig = serde_json::from_str(blob).map_err(|source| Error::PlayerConfig {
        url: url.clone(),
        source,
    })?;

    if config.id_media.is_empty() {
        return Err(Error::EmptyMediaId { url });
    }

    tracing::debug!("Extracted media {} from {}", config.id_media, page.url);
    Ok(config)
}
