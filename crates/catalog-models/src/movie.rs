use serde::Serialize;

use crate::capabilities::{Playable, StreamProfile, Streamable};
use crate::content::ContentCore;
use crate::error::ValidationError;
use crate::ids::ContentId;

/// A single feature-length title. Playable and streamable, not downloadable.
#[derive(Debug, Clone, Serialize)]
pub struct Movie {
    core: ContentCore,
    duration_minutes: u32,
    stream: StreamProfile,
    playing: bool,
}

impl Movie {
    pub fn new(
        id: impl Into<ContentId>,
        title: impl Into<String>,
        description: impl Into<String>,
        release_year: u16,
        genres: Vec<String>,
        duration_minutes: u32,
    ) -> Result<Self, ValidationError> {
        if duration_minutes == 0 {
            return Err(ValidationError::NonPositive {
                field: "duration_minutes",
            });
        }
        Ok(Self {
            core: ContentCore::new(id, title, description, release_year, genres)?,
            duration_minutes,
            stream: StreamProfile::default(),
            playing: false,
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

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn duration(&self) -> String {
        format!("{} minutes", self.duration_minutes)
    }

    pub fn info(&self) -> String {
        format!("{} - {}", self.core.info(), self.duration())
    }
}

impl Playable for Movie {
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

impl Streamable for Movie {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn create_movie(duration_minutes: u32) -> Movie {
        Movie::new(
            "M001",
            "The Matrix",
            "A computer programmer discovers a mysterious world.",
            1999,
            vec!["Action".to_string(), "Sci-Fi".to_string()],
            duration_minutes,
        )
        .unwrap()
    }

    #[test]
    fn test_duration_reports_raw_minutes() {
        let movie = create_movie(136);
        assert_eq!(movie.duration(), "136 minutes");
    }

    #[test]
    fn test_info_appends_duration_to_base() {
        let movie = create_movie(136);
        assert_eq!(
            movie.info(),
            "The Matrix (1999) - Action, Sci-Fi - 136 minutes"
        );
    }

    #[test]
    fn test_zero_duration_rejected() {
        let result = Movie::new("M001", "Short", "", 2020, vec![], 0);
        assert_eq!(
            result.unwrap_err(),
            ValidationError::NonPositive {
                field: "duration_minutes"
            }
        );
    }

    #[test]
    fn test_play_pause_stop_are_idempotent() {
        let mut movie = create_movie(136);
        assert!(!movie.is_playing());

        movie.play();
        assert!(movie.is_playing());
        movie.play();
        assert!(movie.is_playing());

        movie.pause();
        assert!(!movie.is_playing());
        movie.pause();
        assert!(!movie.is_playing());

        movie.play();
        movie.stop();
        assert!(!movie.is_playing());
        movie.stop();
        assert!(!movie.is_playing());
    }

    #[test]
    fn test_streams_with_default_profile() {
        let movie = create_movie(136);
        assert_eq!(movie.stream_quality(), 1080);
        assert_eq!(movie.available_subtitles(), ["English", "French", "Spanish"]);
        assert!(movie.is_available_in_region("US"));
    }

    #[test]
    fn test_custom_stream_profile() {
        let movie = create_movie(136).with_stream(StreamProfile {
            quality: 2160,
            subtitles: vec!["German".to_string()],
            regions: vec!["DE".to_string()],
        });
        assert_eq!(movie.stream_quality(), 2160);
        assert!(movie.is_available_in_region("de"));
        assert!(!movie.is_available_in_region("US"));
    }
}
