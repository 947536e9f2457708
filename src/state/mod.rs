//! State module for tracking pipeline progress
//!
//! Each discovered episode carries an `EpisodeState` that advances through
//! the pipeline stages and ends in either `Submitted` or `Failed`.

mod episode_state;

pub use episode_state::{EpisodeState, Stage};
