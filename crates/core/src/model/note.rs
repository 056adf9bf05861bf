use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AccessControlled, Entity, EntityId, Scoped};

/// A free-form note written about a progeny.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Note {
    pub note_id: EntityId,
    /// The progeny this note belongs to.
    pub progeny_id: EntityId,
    /// Minimum access level required to read the note (0 = admins only).
    pub access_level: i32,
    pub category: String,
    pub content: String,
    pub created_date: DateTime<Utc>,
    /// Position of the note in the progeny's timeline.
    pub note_number: i32,
    /// Identifier of the user who wrote the note.
    pub owner: String,
    pub title: String,
}

impl Default for Note {
    fn default() -> Self {
        Self {
            note_id: 0,
            progeny_id: 0,
            access_level: 0,
            category: String::new(),
            content: String::new(),
            created_date: Utc::now(),
            note_number: 0,
            owner: String::new(),
            title: String::new(),
        }
    }
}

impl Note {
    /// Creates a new, not yet persisted note for a progeny.
    pub fn new(progeny_id: EntityId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            progeny_id,
            content: content.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_access_level(mut self, access_level: i32) -> Self {
        self.access_level = access_level;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    pub fn with_note_number(mut self, note_number: i32) -> Self {
        self.note_number = note_number;
        self
    }

    /// Sets the creation timestamp (useful for testing).
    pub fn with_created_date(mut self, created_date: DateTime<Utc>) -> Self {
        self.created_date = created_date;
        self
    }
}

impl Entity for Note {
    const KIND: &'static str = "note";
    const SCOPED: bool = true;

    fn id(&self) -> EntityId {
        self.note_id
    }

    fn set_id(&mut self, id: EntityId) {
        self.note_id = id;
    }

    fn parent_id(&self) -> Option<EntityId> {
        Some(self.progeny_id)
    }
}

impl Scoped for Note {}

impl AccessControlled for Note {
    fn access_level(&self) -> i32 {
        self.access_level
    }
}
