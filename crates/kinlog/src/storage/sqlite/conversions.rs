//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! These are testable in isolation without database access.

use chrono::{DateTime, Utc};
use rusqlite::Row;

use kinlog_core::model::{LanguageItem, Note, Progeny, Skill};

/// Convert a SQLite row to a LanguageItem.
///
/// Expected columns: id, name, code, icon
pub fn row_to_language(row: &Row) -> rusqlite::Result<LanguageItem> {
    Ok(LanguageItem {
        id: row.get(0)?,
        name: row.get(1)?,
        code: row.get(2)?,
        icon: row.get(3)?,
    })
}

/// Convert a SQLite row to a Progeny.
///
/// Expected columns: id, birth_day, admins, name, nick_name, picture_link, time_zone
pub fn row_to_progeny(row: &Row) -> rusqlite::Result<Progeny> {
    let birth_day: Option<String> = row.get(1)?;
    let admins: String = row.get(2)?;

    Ok(Progeny {
        id: row.get(0)?,
        birth_day: parse_optional_datetime(birth_day.as_deref())?,
        admins: decode_admins(&admins)?,
        name: row.get(3)?,
        nick_name: row.get(4)?,
        picture_link: row.get(5)?,
        time_zone: row.get(6)?,
    })
}

/// Convert a SQLite row to a Note.
///
/// Expected columns: note_id, progeny_id, access_level, category, content,
/// created_date, note_number, owner, title
pub fn row_to_note(row: &Row) -> rusqlite::Result<Note> {
    let created_date: String = row.get(5)?;

    Ok(Note {
        note_id: row.get(0)?,
        progeny_id: row.get(1)?,
        access_level: row.get(2)?,
        category: row.get(3)?,
        content: row.get(4)?,
        created_date: parse_datetime(&created_date)?,
        note_number: row.get(6)?,
        owner: row.get(7)?,
        title: row.get(8)?,
    })
}

/// Convert a SQLite row to a Skill.
///
/// Expected columns: skill_id, progeny_id, author, access_level, name,
/// description, category, added_date, first_observation_date, skill_number
pub fn row_to_skill(row: &Row) -> rusqlite::Result<Skill> {
    let added_date: String = row.get(7)?;
    let first_observation_date: Option<String> = row.get(8)?;

    Ok(Skill {
        skill_id: row.get(0)?,
        progeny_id: row.get(1)?,
        author: row.get(2)?,
        access_level: row.get(3)?,
        name: row.get(4)?,
        description: row.get(5)?,
        category: row.get(6)?,
        added_date: parse_datetime(&added_date)?,
        first_observation_date: parse_optional_datetime(first_observation_date.as_deref())?,
        skill_number: row.get(9)?,
    })
}

// ============================================================================
// Helper functions
// ============================================================================

/// Encodes the admin list as a JSON array of strings.
pub fn encode_admins(admins: &[String]) -> rusqlite::Result<String> {
    serde_json::to_string(admins).map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// Decodes the admins column written by [`encode_admins`].
fn decode_admins(admins: &str) -> rusqlite::Result<Vec<String>> {
    serde_json::from_str(admins).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(2, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Format a DateTime<Utc> for SQLite storage (RFC 3339).
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}

fn parse_optional_datetime(s: Option<&str>) -> rusqlite::Result<Option<DateTime<Utc>>> {
    s.map(parse_datetime).transpose()
}
