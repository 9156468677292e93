// In-memory registry of all catalog content, in insertion order.

use catalog_models::{Content, ContentId, ValidationError};
use serde::Serialize;
use tracing::debug;

/// Owns every content entry for the lifetime of a session. Ids are unique
/// within the catalog; insertion order is kept so listings stay stable.
#[derive(Debug, Default, Serialize)]
pub struct Catalog {
    items: Vec<Content>,
}

impl Catalog {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add an entry. Fails when an entry with the same id already exists.
    pub fn add(&mut self, content: Content) -> Result<(), ValidationError> {
        if self.contains(content.id()) {
            return Err(ValidationError::DuplicateId {
                id: content.id().to_string(),
            });
        }
        debug!(
            "catalog_add: id={}, kind={}, title={}",
            content.id(),
            content.kind(),
            content.title()
        );
        self.items.push(content);
        Ok(())
    }

    pub fn get(&self, id: &ContentId) -> Option<&Content> {
        self.items.iter().find(|content| content.id() == id)
    }

    pub fn get_mut(&mut self, id: &ContentId) -> Option<&mut Content> {
        self.items.iter_mut().find(|content| content.id() == id)
    }

    pub fn contains(&self, id: &ContentId) -> bool {
        self.get(id).is_some()
    }

    /// All entries in insertion order, read-only.
    pub fn items(&self) -> &[Content] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
