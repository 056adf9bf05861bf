//! Per-kind SQL bindings.
//!
//! [`SqlRecord`] ties an entity kind to its statements in [`schema`] and its
//! row conversion in [`conversions`], so one generic store serves every
//! kind.
//!
//! [`schema`]: super::schema
//! [`conversions`]: super::conversions

use rusqlite::types::Value;
use rusqlite::Row;

use kinlog_core::model::{Entity, LanguageItem, Note, Progeny, Scoped, Skill};

use super::conversions::{
    encode_admins, format_datetime, row_to_language, row_to_note, row_to_progeny, row_to_skill,
};
use super::schema;

/// An entity kind that can be stored in SQLite.
pub trait SqlRecord: Entity {
    const INSERT: &'static str;
    const SELECT_BY_ID: &'static str;
    const SELECT_ALL: &'static str;
    const UPDATE: &'static str;
    const DELETE: &'static str;
    const COUNT: &'static str;

    /// Builds the entity from a row selected by `SELECT_BY_ID` / `SELECT_ALL`.
    fn from_row(row: &Row) -> rusqlite::Result<Self>;

    /// Column values in `INSERT` order, identifier excluded.
    fn to_values(&self) -> rusqlite::Result<Vec<Value>>;
}

/// A progeny-scoped kind that can be listed by parent.
pub trait ScopedSqlRecord: SqlRecord + Scoped {
    const SELECT_BY_PARENT: &'static str;
}

fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

impl SqlRecord for LanguageItem {
    const INSERT: &'static str = schema::INSERT_LANGUAGE;
    const SELECT_BY_ID: &'static str = schema::SELECT_LANGUAGE_BY_ID;
    const SELECT_ALL: &'static str = schema::SELECT_LANGUAGES;
    const UPDATE: &'static str = schema::UPDATE_LANGUAGE;
    const DELETE: &'static str = schema::DELETE_LANGUAGE;
    const COUNT: &'static str = schema::COUNT_LANGUAGES;

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        row_to_language(row)
    }

    fn to_values(&self) -> rusqlite::Result<Vec<Value>> {
        Ok(vec![text(&self.name), text(&self.code), text(&self.icon)])
    }
}

impl SqlRecord for Progeny {
    const INSERT: &'static str = schema::INSERT_PROGENY;
    const SELECT_BY_ID: &'static str = schema::SELECT_PROGENY_BY_ID;
    const SELECT_ALL: &'static str = schema::SELECT_PROGENIES;
    const UPDATE: &'static str = schema::UPDATE_PROGENY;
    const DELETE: &'static str = schema::DELETE_PROGENY;
    const COUNT: &'static str = schema::COUNT_PROGENIES;

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        row_to_progeny(row)
    }

    fn to_values(&self) -> rusqlite::Result<Vec<Value>> {
        Ok(vec![
            self.birth_day
                .as_ref()
                .map_or(Value::Null, |d| Value::Text(format_datetime(d))),
            Value::Text(encode_admins(&self.admins)?),
            text(&self.name),
            text(&self.nick_name),
            text(&self.picture_link),
            text(&self.time_zone),
        ])
    }
}

impl SqlRecord for Note {
    const INSERT: &'static str = schema::INSERT_NOTE;
    const SELECT_BY_ID: &'static str = schema::SELECT_NOTE_BY_ID;
    const SELECT_ALL: &'static str = schema::SELECT_NOTES;
    const UPDATE: &'static str = schema::UPDATE_NOTE;
    const DELETE: &'static str = schema::DELETE_NOTE;
    const COUNT: &'static str = schema::COUNT_NOTES;

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        row_to_note(row)
    }

    fn to_values(&self) -> rusqlite::Result<Vec<Value>> {
        Ok(vec![
            Value::Integer(self.progeny_id),
            Value::Integer(self.access_level.into()),
            text(&self.category),
            text(&self.content),
            Value::Text(format_datetime(&self.created_date)),
            Value::Integer(self.note_number.into()),
            text(&self.owner),
            text(&self.title),
        ])
    }
}

impl ScopedSqlRecord for Note {
    const SELECT_BY_PARENT: &'static str = schema::SELECT_NOTES_BY_PROGENY;
}

impl SqlRecord for Skill {
    const INSERT: &'static str = schema::INSERT_SKILL;
    const SELECT_BY_ID: &'static str = schema::SELECT_SKILL_BY_ID;
    const SELECT_ALL: &'static str = schema::SELECT_SKILLS;
    const UPDATE: &'static str = schema::UPDATE_SKILL;
    const DELETE: &'static str = schema::DELETE_SKILL;
    const COUNT: &'static str = schema::COUNT_SKILLS;

    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        row_to_skill(row)
    }

    fn to_values(&self) -> rusqlite::Result<Vec<Value>> {
        Ok(vec![
            Value::Integer(self.progeny_id),
            text(&self.author),
            Value::Integer(self.access_level.into()),
            text(&self.name),
            text(&self.description),
            text(&self.category),
            Value::Text(format_datetime(&self.added_date)),
            self.first_observation_date
                .as_ref()
                .map_or(Value::Null, |d| Value::Text(format_datetime(d))),
            Value::Integer(self.skill_number.into()),
        ])
    }
}

impl ScopedSqlRecord for Skill {
    const SELECT_BY_PARENT: &'static str = schema::SELECT_SKILLS_BY_PROGENY;
}
