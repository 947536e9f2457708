//! Pipeline coordinator - per-show orchestration
//!
//! The coordinator sequences the three stages for every discovered episode:
//! fetch the episode page, extract the embedded player configuration, resolve
//! the media identifier into a stream URL, then submit a download job to the
//! engine intake. Episodes are processed one at a time to keep load on the
//! source site and the validation API low; a failed episode is recorded and
//! skipped, never fatal for the batch. Only a failed show-page fetch or an
//! empty discovery aborts the run.

use crate::config::Config;
use crate::engine::{DownloadJob, Intake, JobKind};
use crate::pipeline::discovery::{extract_episode_links, EPISODE_LINK_MARKER};
use crate::pipeline::fetcher::{build_http_client, fetch_page};
use crate::pipeline::metadata::extract_player_config;
use crate::pipeline::resolver::resolve;
use crate::state::{EpisodeState, Stage};
use crate::Error;
use reqwest::Client;
use std::sync::Arc;
use url::Url;

/// Outcome of one discovered episode
#[derive(Debug, Clone)]
pub struct EpisodeReport {
    /// Link attribute as found on the show page (possibly relative)
    pub url: String,
    pub state: EpisodeState,
}

/// Outcome of a whole run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub show_url: String,
    /// Episodes whose download job was accepted by the engine
    pub submitted: usize,
    /// Episodes that failed at some pipeline stage
    pub failed: usize,
    pub episodes: Vec<EpisodeReport>,
}

/// Sequences the pipeline stages for every episode of one show
pub struct Coordinator {
    config: Arc<Config>,
    client: Client,
    intake: Intake,
}

impl Coordinator {
    /// Creates a coordinator with a fresh HTTP client
    pub fn new(config: Config, intake: Intake) -> Result<Self, Error> {
        let client = build_http_client(&config.fetch)?;
        Ok(Self {
            config: Arc::new(config),
            client,
            intake,
        })
    }

    /// Runs the full pipeline for one show URL
    ///
    /// Fatal conditions: the show page cannot be fetched, or discovery finds
    /// zero episodes. Everything else is per-episode: the failure is logged
    /// with the offending URL and stage, recorded in the summary, and the
    /// next episode is processed.
    pub async fn run(&self, show_url: &str) -> Result<RunSummary, Error> {
        let show_url = Url::parse(show_url)?;
        tracing::info!("Discovering episodes at {}", show_url);

        let show_page = fetch_page(&self.client, &show_url).await?;
        let links = extract_episode_links(&show_page.body, EPISODE_LINK_MARKER);
        if links.is_empty() {
            return Err(Error::NoEpisodes {
                url: show_url.to_string(),
            });
        }
        tracing::info!("Discovered {} episodes", links.len());

        let mut episodes: Vec<EpisodeReport> = links
            .into_iter()
            .map(|url| EpisodeReport {
                url,
                state: EpisodeState::Pending,
            })
            .collect();

        for (index, report) in episodes.iter_mut().enumerate() {
            if let Err((stage, error)) = self.process_episode(&show_url, index, report).await {
                tracing::warn!("Episode {} failed while {}: {}", report.url, stage, error);
                report.state = EpisodeState::Failed {
                    stage,
                    reason: error.to_string(),
                };
            }
        }

        let submitted = episodes.iter().filter(|r| r.state.is_success()).count();
        let failed = episodes.len() - submitted;
        tracing::info!("Run complete: {} submitted, {} failed", submitted, failed);

        Ok(RunSummary {
            show_url: show_url.to_string(),
            submitted,
            failed,
            episodes,
        })
    }

    /// Advances one episode through the pipeline stages
    ///
    /// The report's state tracks the stage currently in flight, so a failure
    /// can name where the episode died.
    async fn process_episode(
        &self,
        show_url: &Url,
        index: usize,
        report: &mut EpisodeReport,
    ) -> Result<(), (Stage, Error)> {
        report.state = EpisodeState::Fetching;
        // Episode links may be relative to the show page.
        let episode_url = show_url
            .join(&report.url)
            .map_err(|e| (Stage::Fetching, Error::UrlParse(e)))?;
        let page = fetch_page(&self.client, &episode_url)
            .await
            .map_err(|e| (Stage::Fetching, e))?;

        report.state = EpisodeState::ExtractingMetadata;
        let player = extract_player_config(&page).map_err(|e| (Stage::ExtractingMetadata, e))?;

        report.state = EpisodeState::Resolving;
        let stream = resolve(
            &self.client,
            &self.config.resolver,
            episode_url.as_str(),
            &player.id_media,
        )
        .await
        .map_err(|e| (Stage::Resolving, e))?;

        let job = DownloadJob {
            kind: JobKind::ListDownload,
            url: stream.stream_url.clone(),
            dest_path: self.config.download.dest_path.clone(),
            filename: episode_filename(&episode_url, index, &self.config.download.filename),
            skip_converter: self.config.download.skip_converter,
        };
        self.intake
            .submit(job)
            .await
            .map_err(|e| (Stage::Submitting, e))?;

        tracing::info!("Submitted {} -> {}", episode_url, stream.stream_url);
        report.state = EpisodeState::Submitted;
        Ok(())
    }
}

/// Derives a per-episode filename from the episode's position and URL
///
/// The zero-padded index keeps files sorted in episode order; the slug is the
/// last non-empty path segment of the episode URL, sanitized for the
/// filesystem. Episodes without a usable slug fall back to the configured
/// stem, still disambiguated by index.
pub fn episode_filename(episode_url: &Url, index: usize, fallback: &str) -> String {
    let slug = episode_url
        .path_segments()
        .and_then(|segments| {
            segments
                .filter(|s| !s.is_empty())
                .last()
                .map(sanitize_segment)
        })
        .filter(|s| !s.is_empty());

    match slug {
        Some(slug) => format!("{:02}-{}", index + 1, slug),
        None => format!("{:02}-{}", index + 1, fallback),
    }
}

/// Replaces characters unsafe in filenames
fn sanitize_segment(segment: &str) -> String {
    segment
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '-'
            }
        })
        .collect()
}
