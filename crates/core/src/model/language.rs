use serde::{Deserialize, Serialize};

use super::{Entity, EntityId};

/// A language the UI can be displayed in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageItem {
    pub id: EntityId,
    pub name: String,
    /// Language code (e.g. `"en-US"`).
    pub code: String,
    /// Icon reference (flag image or emoji).
    pub icon: String,
}

impl LanguageItem {
    /// Creates a new, not yet persisted language.
    pub fn new(name: impl Into<String>, code: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            code: code.into(),
            icon: icon.into(),
        }
    }

    /// Sets a specific ID for this language (useful for testing).
    pub fn with_id(mut self, id: EntityId) -> Self {
        self.id = id;
        self
    }
}

impl Entity for LanguageItem {
    const KIND: &'static str = "language";

    fn id(&self) -> EntityId {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_language_is_not_persisted() {
        let language = LanguageItem::new("Language1", "A", "A");

        assert_eq!(language.id, 0);
        assert!(!language.is_persisted());
        assert_eq!(language.parent_id(), None);
    }

    #[test]
    fn test_language_serializes_camel_case() {
        let language = LanguageItem::new("Dansk", "da", "dk.png").with_id(3);
        let json = serde_json::to_string(&language).unwrap();

        assert_eq!(json, r#"{"id":3,"name":"Dansk","code":"da","icon":"dk.png"}"#);
    }
}
