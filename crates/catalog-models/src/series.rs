use serde::Serialize;

use crate::capabilities::{DownloadState, Downloadable, Playable, StreamProfile, Streamable};
use crate::content::ContentCore;
use crate::error::ValidationError;
use crate::ids::ContentId;

// Flat per-episode download estimate, independent of episode length.
const DOWNLOAD_BYTES_PER_EPISODE: u64 = 500 * 1024 * 1024;

/// A multi-season title. The only variant that supports downloads.
#[derive(Debug, Clone, Serialize)]
pub struct Series {
    core: ContentCore,
    seasons: u32,
    episodes_per_season: u32,
    episode_minutes: u32,
    stream: StreamProfile,
    playing: bool,
    download: DownloadState,
}

impl Series {
    pub fn new(
        id: impl Into<ContentId>,
        title: impl Into<String>,
        description: impl Into<String>,
        release_year: u16,
        genres: Vec<String>,
        seasons: u32,
        episodes_per_season: u32,
        episode_minutes: u32,
    ) -> Result<Self, ValidationError> {
        if seasons == 0 {
            return Err(ValidationError::NonPositive { field: "seasons" });
        }
        if episodes_per_season == 0 {
            return Err(ValidationError::NonPositive {
                field: "episodes_per_season",
            });
        }
        if episode_minutes == 0 {
            return Err(ValidationError::NonPositive {
                field: "episode_minutes",
            });
        }
        Ok(Self {
            core: ContentCore::new(id, title, description, release_year, genres)?,
            seasons,
            episodes_per_season,
            episode_minutes,
            stream: StreamProfile::default(),
            playing: false,
            download: DownloadState::Idle,
        })
    }

    pub fn with_stream(mut self, stream: StreamProfile) -> Self {
        self.stream = stream;
        self
    }

    pub fn core(&self) -> &ContentCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut ContentCore {
        &mut self.core
    }

    pub fn seasons(&self) -> u32 {
        self.seasons
    }

    pub fn episodes_per_season(&self) -> u32 {
        self.episodes_per_season
    }

    pub fn episode_minutes(&self) -> u32 {
        self.episode_minutes
    }

    /// Total runtime across all seasons, as hours and minutes.
    pub fn duration(&self) -> String {
        let total_minutes = self.seasons * self.episodes_per_season * self.episode_minutes;
        let hours = total_minutes / 60;
        let minutes = total_minutes % 60;
        format!("{}h {}m Total", hours, minutes)
    }

    pub fn info(&self) -> String {
        format!(
            "{} - {} Seasons, {} Episodes per Season",
            self.core.info(),
            self.seasons,
            self.episodes_per_season
        )
    }
}

impl Playable for Series {
    fn play(&mut self) {
        self.playing = true;
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn stop(&mut self) {
        self.playing = false;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

impl Streamable for Series {
    fn stream_quality(&self) -> u32 {
        self.stream.quality
    }

    fn is_available_in_region(&self, region: &str) -> bool {
        self.stream.is_available_in_region(region)
    }

    fn available_subtitles(&self) -> &[String] {
        &self.stream.subtitles
    }
}

impl Downloadable for Series {
    fn download_size(&self) -> u64 {
        self.seasons as u64 * self.episodes_per_season as u64 * DOWNLOAD_BYTES_PER_EPISODE
    }

    fn download_quality(&self) -> &str {
        "1080p"
    }

    fn start_download(&mut self) {
        self.download = DownloadState::Downloading;
    }

    fn pause_download(&mut self) {
        self.download = DownloadState::Paused;
    }

    fn resume_download(&mut self) {
        self.download = DownloadState::Downloading;
    }

    fn download_state(&self) -> DownloadState {
        self.download
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_series(seasons: u32, episodes_per_season: u32, episode_minutes: u32) -> Series {
        Series::new(
            "S001",
            "Stranger Things",
            "A group of kids encounter supernatural forces and secret government exploits.",
            2016,
            vec![
                "Drama".to_string(),
                "Fantasy".to_string(),
                "Horror".to_string(),
            ],
            seasons,
            episodes_per_season,
            episode_minutes,
        )
        .unwrap()
    }

    #[test]
    fn test_duration_converts_to_hours_and_minutes() {
        // 2 * 8 * 45 = 720 minutes
        let series = create_series(2, 8, 45);
        assert_eq!(series.duration(), "12h 0m Total");
    }

    #[test]
    fn test_duration_keeps_minute_remainder() {
        // 4 * 8 * 50 = 1600 minutes
        let series = create_series(4, 8, 50);
        assert_eq!(series.duration(), "26h 40m Total");
    }

    #[test]
    fn test_info_appends_season_layout() {
        let series = create_series(4, 8, 50);
        assert_eq!(
            series.info(),
            "Stranger Things (2016) - Drama, Fantasy, Horror - 4 Seasons, 8 Episodes per Season"
        );
    }

    #[test]
    fn test_download_size_scales_with_episode_count() {
        let series = create_series(2, 8, 45);
        assert_eq!(series.download_size(), 2 * 8 * 500 * 1024 * 1024);
    }

    #[test]
    fn test_download_quality_is_fixed() {
        let series = create_series(2, 8, 45);
        assert!(series.can_download());
        assert_eq!(series.download_quality(), "1080p");
    }

    #[test]
    fn test_download_state_transitions() {
        let mut series = create_series(2, 8, 45);
        assert_eq!(series.download_state(), DownloadState::Idle);

        series.start_download();
        assert_eq!(series.download_state(), DownloadState::Downloading);

        series.pause_download();
        assert_eq!(series.download_state(), DownloadState::Paused);

        series.resume_download();
        assert_eq!(series.download_state(), DownloadState::Downloading);
    }

    #[test]
    fn test_zero_counts_rejected() {
        assert_eq!(
            Series::new("S1", "X", "", 2020, vec![], 0, 8, 45).unwrap_err(),
            ValidationError::NonPositive { field: "seasons" }
        );
        assert_eq!(
            Series::new("S1", "X", "", 2020, vec![], 2, 0, 45).unwrap_err(),
            ValidationError::NonPositive {
                field: "episodes_per_season"
            }
        );
        assert_eq!(
            Series::new("S1", "X", "", 2020, vec![], 2, 8, 0).unwrap_err(),
            ValidationError::NonPositive {
                field: "episode_minutes"
            }
        );
    }
}
