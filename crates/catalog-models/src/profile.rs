use serde::Serialize;

use crate::error::ValidationError;
use crate::ids::{ContentId, ProfileId};
use crate::watch_history::WatchHistoryEntry;

pub const DEFAULT_AVATAR: &str = "default-avatar.png";

/// A named viewer context. Owns its watchlist and watch history; content is
/// referenced by id, never owned, so titles outlive any profile that lists
/// them.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    id: ProfileId,
    name: String,
    avatar: String,
    kids_profile: bool,
    watchlist: Vec<ContentId>,
    watch_history: Vec<WatchHistoryEntry>,
}

impl Profile {
    pub fn new(id: impl Into<ProfileId>, name: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        let name = name.into();
        if id.as_str().is_empty() {
            return Err(ValidationError::EmptyField { field: "id" });
        }
        if name.is_empty() {
            return Err(ValidationError::EmptyField { field: "name" });
        }
        Ok(Self {
            id,
            name,
            avatar: DEFAULT_AVATAR.to_string(),
            kids_profile: false,
            watchlist: Vec::new(),
            watch_history: Vec::new(),
        })
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    pub fn with_kids_profile(mut self, kids_profile: bool) -> Self {
        self.kids_profile = kids_profile;
        self
    }

    pub fn id(&self) -> &ProfileId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    pub fn is_kids_profile(&self) -> bool {
        self.kids_profile
    }

    /// Append `content_id` to the watchlist unless it is already there.
    /// Returns whether the list changed.
    pub fn add_to_watchlist(&mut self, content_id: &ContentId) -> bool {
        if self.watchlist.contains(content_id) {
            return false;
        }
        self.watchlist.push(content_id.clone());
        true
    }

    /// Remove `content_id` from the watchlist. Absent ids are a no-op.
    /// Returns whether the list changed.
    pub fn remove_from_watchlist(&mut self, content_id: &ContentId) -> bool {
        let before = self.watchlist.len();
        self.watchlist.retain(|id| id != content_id);
        self.watchlist.len() != before
    }

    /// Watchlist in insertion order, read-only.
    pub fn watchlist(&self) -> &[ContentId] {
        &self.watchlist
    }

    /// Record a viewing session. Always appends a fresh entry, so a title
    /// watched twice shows up twice. The percentage is clamped to 0..=100.
    pub fn add_to_watch_history(&mut self, content_id: ContentId, watched_percent: f64) {
        self.watch_history
            .push(WatchHistoryEntry::new(content_id, watched_percent));
    }

    /// Watch history in chronological (insertion) order, read-only.
    pub fn watch_history(&self) -> &[WatchHistoryEntry] {
        &self.watch_history
    }

    /// Progress of the most recent session for `content_id`, or 0 when the
    /// title was never watched. Most recent means last appended.
    pub fn watch_progress(&self, content_id: &ContentId) -> f64 {
        self.watch_history
            .iter()
            .rev()
            .find(|entry| entry.content_id() == content_id)
            .map(|entry| entry.watched_percent())
            .unwrap_or(0.0)
    }

    /// Update the most recent session for `content_id` in place (clamped).
    /// Returns false when no session exists for that title.
    pub fn update_watch_progress(&mut self, content_id: &ContentId, new_percent: f64) -> bool {
        match self
            .watch_history
            .iter_mut()
            .rev()
            .find(|entry| entry.content_id() == content_id)
        {
            Some(entry) => {
                entry.update_progress(new_percent);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_profile() -> Profile {
        Profile::new("P1", "Adult Profile").unwrap()
    }

    #[test]
    fn test_new_profile_defaults() {
        let profile = create_profile();
        assert_eq!(profile.name(), "Adult Profile");
        assert_eq!(profile.avatar(), DEFAULT_AVATAR);
        assert!(!profile.is_kids_profile());
        assert!(profile.watchlist().is_empty());
        assert!(profile.watch_history().is_empty());
    }

    #[test]
    fn test_builder_overrides() {
        let profile = Profile::new("P2", "Kids Profile")
            .unwrap()
            .with_kids_profile(true)
            .with_avatar("kids.png");
        assert!(profile.is_kids_profile());
        assert_eq!(profile.avatar(), "kids.png");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(
            Profile::new("P1", "").unwrap_err(),
            ValidationError::EmptyField { field: "name" }
        );
        assert_eq!(
            Profile::new("", "Someone").unwrap_err(),
            ValidationError::EmptyField { field: "id" }
        );
    }

    #[test]
    fn test_watchlist_add_is_idempotent() {
        let mut profile = create_profile();
        let movie = ContentId::new("M001");

        assert!(profile.add_to_watchlist(&movie));
        assert!(!profile.add_to_watchlist(&movie));
        assert_eq!(profile.watchlist().len(), 1);
    }

    #[test]
    fn test_watchlist_preserves_insertion_order() {
        let mut profile = create_profile();
        profile.add_to_watchlist(&ContentId::new("S001"));
        profile.add_to_watchlist(&ContentId::new("M001"));
        profile.add_to_watchlist(&ContentId::new("D001"));

        let ids: Vec<&str> = profile.watchlist().iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["S001", "M001", "D001"]);
    }

    #[test]
    fn test_remove_absent_watchlist_item_is_noop() {
        let mut profile = create_profile();
        profile.add_to_watchlist(&ContentId::new("M001"));

        assert!(!profile.remove_from_watchlist(&ContentId::new("S001")));
        assert_eq!(profile.watchlist().len(), 1);

        assert!(profile.remove_from_watchlist(&ContentId::new("M001")));
        assert!(profile.watchlist().is_empty());
    }

    #[test]
    fn test_watch_progress_defaults_to_zero() {
        let profile = create_profile();
        assert_eq!(profile.watch_progress(&ContentId::new("M001")), 0.0);
    }

    #[test]
    fn test_watch_progress_takes_most_recent_entry() {
        let mut profile = create_profile();
        let movie = ContentId::new("M001");

        profile.add_to_watch_history(movie.clone(), 40.0);
        profile.add_to_watch_history(movie.clone(), 90.0);

        assert_eq!(profile.watch_progress(&movie), 90.0);
        assert_eq!(profile.watch_history().len(), 2);
    }

    #[test]
    fn test_repeat_sessions_append_instead_of_replacing() {
        let mut profile = create_profile();
        let movie = ContentId::new("M001");
        let series = ContentId::new("S001");

        profile.add_to_watch_history(movie.clone(), 10.0);
        profile.add_to_watch_history(series.clone(), 55.0);
        profile.add_to_watch_history(movie.clone(), 75.0);

        assert_eq!(profile.watch_history().len(), 3);
        assert_eq!(profile.watch_progress(&movie), 75.0);
        assert_eq!(profile.watch_progress(&series), 55.0);
    }

    #[test]
    fn test_history_percentages_are_clamped() {
        let mut profile = create_profile();
        let movie = ContentId::new("M001");

        profile.add_to_watch_history(movie.clone(), 150.0);
        assert_eq!(profile.watch_progress(&movie), 100.0);

        profile.add_to_watch_history(movie.clone(), -10.0);
        assert_eq!(profile.watch_progress(&movie), 0.0);
    }

    #[test]
    fn test_update_watch_progress_touches_latest_session() {
        let mut profile = create_profile();
        let movie = ContentId::new("M001");

        profile.add_to_watch_history(movie.clone(), 40.0);
        profile.add_to_watch_history(movie.clone(), 50.0);

        assert!(profile.update_watch_progress(&movie, 95.0));
        assert_eq!(profile.watch_progress(&movie), 95.0);
        // The earlier session keeps its value.
        assert_eq!(profile.watch_history()[0].watched_percent(), 40.0);
    }

    #[test]
    fn test_update_watch_progress_without_history_reports_false() {
        let mut profile = create_profile();
        assert!(!profile.update_watch_progress(&ContentId::new("M001"), 50.0));
    }
}
