use serde::Serialize;
use std::collections::BTreeMap;

use crate::capabilities::{Playable, Ratable, StreamProfile, Streamable};
use crate::content::ContentCore;
use crate::error::ValidationError;
use crate::ids::{ContentId, ProfileId};

const USER_REVIEWS: [&str; 3] = ["Great documentary!", "I learned a lot.", "Not my favorite"];

/// A documentary title with a topic. The only variant that keeps per-user
/// ratings alongside the catalog-wide aggregate.
#[derive(Debug, Clone, Serialize)]
pub struct Documentary {
    core: ContentCore,
    duration_minutes: u32,
    topic: String,
    stream: StreamProfile,
    playing: bool,
    user_ratings: BTreeMap<ProfileId, f64>,
}

impl Documentary {
    pub fn new(
        id: impl Into<ContentId>,
        title: impl Into<String>,
        description: impl Into<String>,
        release_year: u16,
        genres: Vec<String>,
        duration_minutes: u32,
        topic: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        if duration_minutes == 0 {
            return Err(ValidationError::NonPositive {
                field: "duration_minutes",
            });
        }
        Ok(Self {
            core: ContentCore::new(id, title, description, release_year, genres)?,
            duration_minutes,
            topic: topic.into(),
            stream: StreamProfile::default(),
            playing: false,
            user_ratings: BTreeMap::new(),
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

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn duration(&self) -> String {
        format!("{} minutes", self.duration_minutes)
    }

    pub fn info(&self) -> String {
        format!(
            "{} - Topic: {}, Duration: {}",
            self.core.info(),
            self.topic,
            self.duration()
        )
    }
}

impl Playable for Documentary {
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

impl Streamable for Documentary {
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

impl Ratable for Documentary {
    fn average_rating(&self) -> f64 {
        if self.user_ratings.is_empty() {
            return 0.0;
        }
        self.user_ratings.values().sum::<f64>() / self.user_ratings.len() as f64
    }

    fn add_user_rating(&mut self, user: &ProfileId, value: f64) -> Result<(), ValidationError> {
        if !(0.0..=5.0).contains(&value) {
            return Err(ValidationError::RatingOutOfRange { value });
        }
        self.user_ratings.insert(user.clone(), value);
        Ok(())
    }

    fn has_user_rated(&self, user: &ProfileId) -> bool {
        self.user_ratings.contains_key(user)
    }

    fn user_reviews(&self) -> Vec<String> {
        USER_REVIEWS.iter().map(|review| review.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_documentary() -> Documentary {
        Documentary::new(
            "D001",
            "Planet Earth",
            "An amazing look at nature and wildlife.",
            2006,
            vec!["Nature".to_string(), "Educational".to_string()],
            550,
            "Nature & Wildlife",
        )
        .unwrap()
    }

    #[test]
    fn test_info_appends_topic_and_duration() {
        let documentary = create_documentary();
        assert_eq!(
            documentary.info(),
            "Planet Earth (2006) - Nature, Educational - Topic: Nature & Wildlife, Duration: 550 minutes"
        );
    }

    #[test]
    fn test_average_rating_is_zero_without_ratings() {
        let documentary = create_documentary();
        assert_eq!(documentary.average_rating(), 0.0);
    }

    #[test]
    fn test_rerating_overwrites_instead_of_averaging() {
        let mut documentary = create_documentary();
        let user = ProfileId::new("P1");

        documentary.add_user_rating(&user, 5.0).unwrap();
        documentary.add_user_rating(&user, 2.0).unwrap();
        assert_eq!(documentary.average_rating(), 2.0);
    }

    #[test]
    fn test_average_over_multiple_users() {
        let mut documentary = create_documentary();
        documentary.add_user_rating(&ProfileId::new("P1"), 4.0).unwrap();
        documentary.add_user_rating(&ProfileId::new("P2"), 2.0).unwrap();
        assert!((documentary.average_rating() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_user_rating_rejected() {
        let mut documentary = create_documentary();
        let user = ProfileId::new("P1");
        documentary.add_user_rating(&user, 4.0).unwrap();

        let err = documentary.add_user_rating(&user, 6.0).unwrap_err();
        assert_eq!(err, ValidationError::RatingOutOfRange { value: 6.0 });
        assert_eq!(documentary.average_rating(), 4.0);
    }

    #[test]
    fn test_has_user_rated_is_a_pure_lookup() {
        let mut documentary = create_documentary();
        let rater = ProfileId::new("P1");
        let other = ProfileId::new("P2");

        assert!(!documentary.has_user_rated(&rater));
        documentary.add_user_rating(&rater, 3.5).unwrap();
        assert!(documentary.has_user_rated(&rater));
        assert!(!documentary.has_user_rated(&other));
    }

    #[test]
    fn test_user_reviews_are_canned() {
        let documentary = create_documentary();
        assert_eq!(
            documentary.user_reviews(),
            vec!["Great documentary!", "I learned a lot.", "Not my favorite"]
        );
    }

    #[test]
    fn test_user_ratings_independent_from_catalog_aggregate() {
        let mut documentary = create_documentary();
        documentary.core_mut().add_rating(5.0).unwrap();
        documentary.add_user_rating(&ProfileId::new("P1"), 1.0).unwrap();

        assert_eq!(documentary.core().rating(), 5.0);
        assert_eq!(documentary.average_rating(), 1.0);
    }
}
