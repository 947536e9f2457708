//! The three-stage resolution pipeline
//!
//! - `fetcher`: HTTP client construction and single-attempt page GETs
//! - `discovery`: episode link extraction from the show page
//! - `metadata`: embedded player configuration extraction
//! - `resolver`: media identifier to stream URL exchange
//! - `coordinator`: per-episode sequencing and engine hand-off

mod coordinator;
mod discovery;
mod fetcher;
mod metadata;
mod resolver;

pub use coordinator::{episode_filename, Coordinator, EpisodeReport, RunSummary};
pub use discovery::{extract_episode_links, EPISODE_LINK_MARKER};
pub use fetcher::{build_http_client, fetch_page, EpisodePage};
pub use metadata::{extract_player_config, PlaybackParams, PlayerConfig, CONSOLE_ATTR, CONSOLE_MARKER};
pub use resolver::{build_validation_url, resolve, BitrateVariant, ResolvedStream};
