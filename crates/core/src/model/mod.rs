mod entity;
mod language;
mod note;
mod progeny;
mod skill;

pub use entity::{AccessControlled, Entity, EntityId, Scoped};
pub use language::LanguageItem;
pub use note::Note;
pub use progeny::Progeny;
pub use skill::Skill;
