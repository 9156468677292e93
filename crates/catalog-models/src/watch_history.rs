use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::ids::ContentId;

/// One viewing session of one title. The timestamp is fixed at creation;
/// only the watched percentage may change afterwards, and it is clamped to
/// 0..=100 both here and in [`WatchHistoryEntry::update_progress`].
#[derive(Debug, Clone, Serialize)]
pub struct WatchHistoryEntry {
    content_id: ContentId,
    watched_at: DateTime<Utc>,
    watched_percent: f64,
}

impl WatchHistoryEntry {
    pub fn new(content_id: ContentId, watched_percent: f64) -> Self {
        Self {
            content_id,
            watched_at: Utc::now(),
            watched_percent: watched_percent.clamp(0.0, 100.0),
        }
    }

    pub fn content_id(&self) -> &ContentId {
        &self.content_id
    }

    pub fn watched_at(&self) -> DateTime<Utc> {
        self.watched_at
    }

    pub fn watched_percent(&self) -> f64 {
        self.watched_percent
    }

    /// Overwrite the watched percentage, clamped. The creation timestamp
    /// stays as it was.
    pub fn update_progress(&mut self, new_percent: f64) {
        self.watched_percent = new_percent.clamp(0.0, 100.0);
    }
}
