use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AccessControlled, Entity, EntityId, Scoped};

/// A skill a progeny has picked up (e.g. "Rides a bike").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub skill_id: EntityId,
    /// The progeny this skill belongs to.
    pub progeny_id: EntityId,
    pub author: String,
    pub access_level: i32,
    pub name: String,
    pub description: String,
    pub category: String,
    pub added_date: DateTime<Utc>,
    pub first_observation_date: Option<DateTime<Utc>>,
    pub skill_number: i32,
}

impl Default for Skill {
    fn default() -> Self {
        Self {
            skill_id: 0,
            progeny_id: 0,
            author: String::new(),
            access_level: 0,
            name: String::new(),
            description: String::new(),
            category: String::new(),
            added_date: Utc::now(),
            first_observation_date: None,
            skill_number: 0,
        }
    }
}

impl Skill {
    /// Creates a new, not yet persisted skill for a progeny.
    pub fn new(progeny_id: EntityId, name: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            progeny_id,
            author: author.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_access_level(mut self, access_level: i32) -> Self {
        self.access_level = access_level;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the date the skill was first seen.
    pub fn with_first_observation(mut self, date: DateTime<Utc>) -> Self {
        self.first_observation_date = Some(date);
        self
    }

    /// Sets the timestamp the skill was recorded (useful for testing).
    pub fn with_added_date(mut self, added_date: DateTime<Utc>) -> Self {
        self.added_date = added_date;
        self
    }
}

impl Entity for Skill {
    const KIND: &'static str = "skill";
    const SCOPED: bool = true;

    fn id(&self) -> EntityId {
        self.skill_id
    }

    fn set_id(&mut self, id: EntityId) {
        self.skill_id = id;
    }

    fn parent_id(&self) -> Option<EntityId> {
        Some(self.progeny_id)
    }
}

impl Scoped for Skill {}

impl AccessControlled for Skill {
    fn access_level(&self) -> i32 {
        self.access_level
    }
}
