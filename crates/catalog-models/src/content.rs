use serde::Serialize;

use crate::capabilities::{Downloadable, Playable, Ratable, Streamable};
use crate::documentary::Documentary;
use crate::error::ValidationError;
use crate::ids::ContentId;
use crate::movie::Movie;
use crate::series::Series;

/// Fields and behavior shared by every content variant. The rating aggregate
/// is a running mean and can only move through [`ContentCore::add_rating`].
#[derive(Debug, Clone, Serialize)]
pub struct ContentCore {
    id: ContentId,
    title: String,
    description: String,
    release_year: u16,
    genres: Vec<String>,
    rating: f64,
    rating_count: u32,
}

impl ContentCore {
    pub fn new(
        id: impl Into<ContentId>,
        title: impl Into<String>,
        description: impl Into<String>,
        release_year: u16,
        genres: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let id = id.into();
        let title = title.into();
        if id.as_str().is_empty() {
            return Err(ValidationError::EmptyField { field: "id" });
        }
        if title.is_empty() {
            return Err(ValidationError::EmptyField { field: "title" });
        }
        Ok(Self {
            id,
            title,
            description: description.into(),
            release_year,
            genres,
            rating: 0.0,
            rating_count: 0,
        })
    }

    pub fn id(&self) -> &ContentId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn release_year(&self) -> u16 {
        self.release_year
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn rating_count(&self) -> u32 {
        self.rating_count
    }

    /// Fold `value` into the running mean. Rejects values outside 0 to 5
    /// without touching the aggregate.
    pub fn add_rating(&mut self, value: f64) -> Result<(), ValidationError> {
        if !(0.0..=5.0).contains(&value) {
            return Err(ValidationError::RatingOutOfRange { value });
        }
        let total = self.rating * self.rating_count as f64 + value;
        self.rating_count += 1;
        self.rating = total / self.rating_count as f64;
        Ok(())
    }

    /// Base info line. Variants append their own detail to this.
    pub fn info(&self) -> String {
        format!(
            "{} ({}) - {}",
            self.title,
            self.release_year,
            self.genres.join(", ")
        )
    }
}

/// One watchable catalog entry. Variant-specific fields live on the variant
/// structs; common operations dispatch through here.
#[derive(Debug, Clone, Serialize)]
pub enum Content {
    Movie(Movie),
    Series(Series),
    Documentary(Documentary),
}

impl Content {
    pub fn core(&self) -> &ContentCore {
        match self {
            Content::Movie(movie) => movie.core(),
            Content::Series(series) => series.core(),
            Content::Documentary(documentary) => documentary.core(),
        }
    }

    fn core_mut(&mut self) -> &mut ContentCore {
        match self {
            Content::Movie(movie) => movie.core_mut(),
            Content::Series(series) => series.core_mut(),
            Content::Documentary(documentary) => documentary.core_mut(),
        }
    }

    pub fn id(&self) -> &ContentId {
        self.core().id()
    }

    pub fn title(&self) -> &str {
        self.core().title()
    }

    pub fn description(&self) -> &str {
        self.core().description()
    }

    pub fn release_year(&self) -> u16 {
        self.core().release_year()
    }

    pub fn genres(&self) -> &[String] {
        self.core().genres()
    }

    pub fn rating(&self) -> f64 {
        self.core().rating()
    }

    pub fn rating_count(&self) -> u32 {
        self.core().rating_count()
    }

    pub fn add_rating(&mut self, value: f64) -> Result<(), ValidationError> {
        self.core_mut().add_rating(value)
    }

    /// Display label for the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Content::Movie(_) => "Movie",
            Content::Series(_) => "Series",
            Content::Documentary(_) => "Documentary",
        }
    }

    /// Human-readable duration. Movies and documentaries report raw minutes,
    /// a series reports its total runtime in hours and minutes.
    pub fn duration(&self) -> String {
        match self {
            Content::Movie(movie) => movie.duration(),
            Content::Series(series) => series.duration(),
            Content::Documentary(documentary) => documentary.duration(),
        }
    }

    /// Info line: the shared base string with variant detail appended.
    pub fn info(&self) -> String {
        match self {
            Content::Movie(movie) => movie.info(),
            Content::Series(series) => series.info(),
            Content::Documentary(documentary) => documentary.info(),
        }
    }

    /// Get the Playable capability (every variant has one).
    pub fn as_playable(&self) -> Option<&dyn Playable> {
        match self {
            Content::Movie(movie) => Some(movie),
            Content::Series(series) => Some(series),
            Content::Documentary(documentary) => Some(documentary),
        }
    }

    pub fn as_playable_mut(&mut self) -> Option<&mut dyn Playable> {
        match self {
            Content::Movie(movie) => Some(movie),
            Content::Series(series) => Some(series),
            Content::Documentary(documentary) => Some(documentary),
        }
    }

    /// Get the Streamable capability (every variant has one).
    pub fn as_streamable(&self) -> Option<&dyn Streamable> {
        match self {
            Content::Movie(movie) => Some(movie),
            Content::Series(series) => Some(series),
            Content::Documentary(documentary) => Some(documentary),
        }
    }

    /// Get the Downloadable capability if this variant supports it.
    pub fn as_downloadable(&self) -> Option<&dyn Downloadable> {
        match self {
            Content::Series(series) => Some(series),
            _ => None,
        }
    }

    pub fn as_downloadable_mut(&mut self) -> Option<&mut dyn Downloadable> {
        match self {
            Content::Series(series) => Some(series),
            _ => None,
        }
    }

    /// Get the Ratable capability if this variant supports it.
    pub fn as_ratable(&self) -> Option<&dyn Ratable> {
        match self {
            Content::Documentary(documentary) => Some(documentary),
            _ => None,
        }
    }

    pub fn as_ratable_mut(&mut self) -> Option<&mut dyn Ratable> {
        match self {
            Content::Documentary(documentary) => Some(documentary),
            _ => None,
        }
    }

    pub fn supports_download(&self) -> bool {
        self.as_downloadable().is_some()
    }

    pub fn supports_user_ratings(&self) -> bool {
        self.as_ratable().is_some()
    }
}

impl From<Movie> for Content {
    fn from(movie: Movie) -> Self {
        Content::Movie(movie)
    }
}

impl From<Series> for Content {
    fn from(series: Series) -> Self {
        Content::Series(series)
    }
}

impl From<Documentary> for Content {
    fn from(documentary: Documentary) -> Self {
        Content::Documentary(documentary)
    }
}
