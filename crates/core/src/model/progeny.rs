use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, EntityId};

/// A child profile. Notes and skills are scoped to a progeny.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Progeny {
    pub id: EntityId,
    pub birth_day: Option<DateTime<Utc>>,
    /// Email addresses of the users allowed to administer this profile.
    pub admins: Vec<String>,
    pub name: String,
    pub nick_name: String,
    pub picture_link: String,
    /// IANA time zone name used to display dates for this progeny.
    pub time_zone: String,
}

impl Progeny {
    /// Creates a new, not yet persisted progeny.
    pub fn new(name: impl Into<String>, nick_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nick_name: nick_name.into(),
            time_zone: "UTC".to_string(),
            ..Self::default()
        }
    }

    pub fn with_birth_day(mut self, birth_day: DateTime<Utc>) -> Self {
        self.birth_day = Some(birth_day);
        self
    }

    /// Adds an administrator email address.
    pub fn with_admin(mut self, email: impl Into<String>) -> Self {
        self.admins.push(email.into());
        self
    }

    pub fn with_picture_link(mut self, link: impl Into<String>) -> Self {
        self.picture_link = link.into();
        self
    }

    pub fn with_time_zone(mut self, time_zone: impl Into<String>) -> Self {
        self.time_zone = time_zone.into();
        self
    }

    /// Returns true if `email` is one of the admins (case-insensitive).
    pub fn is_admin(&self, email: &str) -> bool {
        let email = email.trim();
        self.admins
            .iter()
            .any(|admin| admin.trim().eq_ignore_ascii_case(email))
    }
}

impl Entity for Progeny {
    const KIND: &'static str = "progeny";

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}
