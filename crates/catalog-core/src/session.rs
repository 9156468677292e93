use catalog_models::{Profile, ProfileId, ValidationError};
use tracing::{debug, info};

use crate::catalog::Catalog;

/// Browsing state for one run: the catalog plus all known profiles and the
/// currently selected one. Every menu action the presentation layer offers
/// goes through here.
#[derive(Debug, Default)]
pub struct Session {
    catalog: Catalog,
    profiles: Vec<Profile>,
    current: Option<ProfileId>,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            profiles: Vec::new(),
            current: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    /// Register a profile. Fails on a duplicate profile id. The first
    /// profile ever added becomes the current one.
    pub fn add_profile(&mut self, profile: Profile) -> Result<(), ValidationError> {
        if self.profiles.iter().any(|p| p.id() == profile.id()) {
            return Err(ValidationError::DuplicateId {
                id: profile.id().to_string(),
            });
        }
        info!(
            "add_profile: id={}, name={}, kids={}",
            profile.id(),
            profile.name(),
            profile.is_kids_profile()
        );
        if self.current.is_none() {
            self.current = Some(profile.id().clone());
        }
        self.profiles.push(profile);
        Ok(())
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn profile(&self, id: &ProfileId) -> Option<&Profile> {
        self.profiles.iter().find(|profile| profile.id() == id)
    }

    /// Make `id` the current profile. Unknown ids leave the selection as it
    /// was and report false.
    pub fn switch_profile(&mut self, id: &ProfileId) -> bool {
        let known = self.profiles.iter().any(|profile| profile.id() == id);
        debug!("switch_profile: id={}, known={}", id, known);
        if known {
            self.current = Some(id.clone());
        }
        known
    }

    pub fn current_profile(&self) -> Option<&Profile> {
        let current = self.current.as_ref()?;
        self.profiles.iter().find(|profile| profile.id() == current)
    }

    pub fn current_profile_mut(&mut self) -> Option<&mut Profile> {
        let current = self.current.as_ref()?;
        self.profiles
            .iter_mut()
            .find(|profile| profile.id() == current)
    }
}
