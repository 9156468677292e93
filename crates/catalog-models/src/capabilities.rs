/// Capability traits for catalog content
///
/// These traits let content variants declare optional behaviors without
/// forcing everything into one base type. A variant implements the subset
/// that applies to it (a series is downloadable, a documentary takes
/// per-user ratings) and callers reach a capability through the `as_*`
/// accessors on [`crate::Content`] instead of downcasting.
use serde::Serialize;

use crate::error::ValidationError;
use crate::ids::ProfileId;

/// Playback control. Transitions carry no error conditions and repeated
/// calls are idempotent: `play` while playing stays playing.
pub trait Playable {
    fn play(&mut self);

    fn pause(&mut self);

    fn stop(&mut self);

    fn is_playing(&self) -> bool;
}

/// Streaming metadata. Quality and subtitles are fixed per instance; there
/// is no negotiation logic here.
pub trait Streamable {
    /// Vertical resolution this title streams at.
    fn stream_quality(&self) -> u32;

    /// Whether the title can be streamed from `region`.
    fn is_available_in_region(&self, region: &str) -> bool;

    fn available_subtitles(&self) -> &[String];
}

/// Offline downloads. The transitions only track state; no transfer happens
/// and no bytes are counted across pause/resume.
pub trait Downloadable {
    /// Read-only capability flag.
    fn can_download(&self) -> bool {
        true
    }

    /// Estimated size of a full download, in bytes.
    fn download_size(&self) -> u64;

    fn download_quality(&self) -> &str;

    fn start_download(&mut self);

    fn pause_download(&mut self);

    fn resume_download(&mut self);

    fn download_state(&self) -> DownloadState;
}

/// Per-user ratings, independent from the catalog-wide rating aggregate on
/// [`crate::ContentCore`]. Each user holds at most one rating; re-rating
/// overwrites instead of averaging with the previous value.
pub trait Ratable {
    /// Mean of all stored per-user ratings, or 0 when nobody has rated yet.
    fn average_rating(&self) -> f64;

    /// Store `value` as `user`'s rating, replacing any previous one.
    /// Fails when `value` is outside 0 to 5.
    fn add_user_rating(&mut self, user: &ProfileId, value: f64) -> Result<(), ValidationError>;

    fn has_user_rated(&self, user: &ProfileId) -> bool;

    /// Editorial review blurbs. Fixed text, not derived from stored ratings.
    fn user_reviews(&self) -> Vec<String>;
}

/// Observational download state driven by the [`Downloadable`] transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DownloadState {
    Idle,
    Downloading,
    Paused,
}

impl DownloadState {
    pub fn label(&self) -> &'static str {
        match self {
            DownloadState::Idle => "Idle",
            DownloadState::Downloading => "Downloading",
            DownloadState::Paused => "Paused",
        }
    }
}

/// Streaming parameters shared by every `Streamable` variant. An empty
/// region list means the title is available everywhere.
#[derive(Debug, Clone, Serialize)]
pub struct StreamProfile {
    pub quality: u32,
    pub subtitles: Vec<String>,
    pub regions: Vec<String>,
}

impl StreamProfile {
    pub fn is_available_in_region(&self, region: &str) -> bool {
        if self.regions.is_empty() {
            return true;
        }
        self.regions.iter().any(|r| r.eq_ignore_ascii_case(region))
    }
}

impl Default for StreamProfile {
    fn default() -> Self {
        Self {
            quality: 1080,
            subtitles: vec![
                "English".to_string(),
                "French".to_string(),
                "Spanish".to_string(),
            ],
            regions: Vec::new(),
        }
    }
}
