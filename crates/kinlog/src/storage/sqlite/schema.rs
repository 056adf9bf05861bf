//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O. Every kind follows the same column order: the
//! identifier first, then the columns bound by `INSERT` as `?1..?n`.
//! `UPDATE` binds the same columns as `?1..?n` and the identifier as
//! `?n+1`.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Languages table
CREATE TABLE IF NOT EXISTS languages (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    code TEXT NOT NULL,
    icon TEXT NOT NULL
);

-- Progeny table
CREATE TABLE IF NOT EXISTS progeny (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    birth_day TEXT,
    admins TEXT NOT NULL,
    name TEXT NOT NULL,
    nick_name TEXT NOT NULL,
    picture_link TEXT NOT NULL,
    time_zone TEXT NOT NULL
);

-- Notes table
CREATE TABLE IF NOT EXISTS notes (
    note_id INTEGER PRIMARY KEY AUTOINCREMENT,
    progeny_id INTEGER NOT NULL,
    access_level INTEGER NOT NULL,
    category TEXT NOT NULL,
    content TEXT NOT NULL,
    created_date TEXT NOT NULL,
    note_number INTEGER NOT NULL,
    owner TEXT NOT NULL,
    title TEXT NOT NULL
);

-- Skills table
CREATE TABLE IF NOT EXISTS skills (
    skill_id INTEGER PRIMARY KEY AUTOINCREMENT,
    progeny_id INTEGER NOT NULL,
    author TEXT NOT NULL,
    access_level INTEGER NOT NULL,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    category TEXT NOT NULL,
    added_date TEXT NOT NULL,
    first_observation_date TEXT,
    skill_number INTEGER NOT NULL
);

-- Indexes for list-by-progeny queries
CREATE INDEX IF NOT EXISTS idx_notes_progeny_id ON notes(progeny_id);
CREATE INDEX IF NOT EXISTS idx_skills_progeny_id ON skills(progeny_id);
"#;

// Language queries
pub const INSERT_LANGUAGE: &str = r#"
INSERT INTO languages (name, code, icon)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_LANGUAGE_BY_ID: &str = r#"
SELECT id, name, code, icon
FROM languages
WHERE id = ?1
"#;

pub const SELECT_LANGUAGES: &str = r#"
SELECT id, name, code, icon
FROM languages
ORDER BY id
"#;

pub const UPDATE_LANGUAGE: &str = r#"
UPDATE languages
SET name = ?1, code = ?2, icon = ?3
WHERE id = ?4
"#;

pub const DELETE_LANGUAGE: &str = "DELETE FROM languages WHERE id = ?1";

pub const COUNT_LANGUAGES: &str = "SELECT COUNT(*) FROM languages";

// Progeny queries
pub const INSERT_PROGENY: &str = r#"
INSERT INTO progeny (birth_day, admins, name, nick_name, picture_link, time_zone)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)
"#;

pub const SELECT_PROGENY_BY_ID: &str = r#"
SELECT id, birth_day, admins, name, nick_name, picture_link, time_zone
FROM progeny
WHERE id = ?1
"#;

pub const SELECT_PROGENIES: &str = r#"
SELECT id, birth_day, admins, name, nick_name, picture_link, time_zone
FROM progeny
ORDER BY id
"#;

pub const UPDATE_PROGENY: &str = r#"
UPDATE progeny
SET birth_day = ?1, admins = ?2, name = ?3, nick_name = ?4, picture_link = ?5, time_zone = ?6
WHERE id = ?7
"#;

pub const DELETE_PROGENY: &str = "DELETE FROM progeny WHERE id = ?1";

pub const COUNT_PROGENIES: &str = "SELECT COUNT(*) FROM progeny";

// Note queries
pub const INSERT_NOTE: &str = r#"
INSERT INTO notes (progeny_id, access_level, category, content, created_date, note_number, owner, title)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
"#;

pub const SELECT_NOTE_BY_ID: &str = r#"
SELECT note_id, progeny_id, access_level, category, content, created_date, note_number, owner, title
FROM notes
WHERE note_id = ?1
"#;

pub const SELECT_NOTES: &str = r#"
SELECT note_id, progeny_id, access_level, category, content, created_date, note_number, owner, title
FROM notes
ORDER BY note_id
"#;

pub const SELECT_NOTES_BY_PROGENY: &str = r#"
SELECT note_id, progeny_id, access_level, category, content, created_date, note_number, owner, title
FROM notes
WHERE progeny_id = ?1
ORDER BY note_id
"#;

pub const UPDATE_NOTE: &str = r#"
UPDATE notes
SET progeny_id = ?1, access_level = ?2, category = ?3, content = ?4, created_date = ?5,
    note_number = ?6, owner = ?7, title = ?8
WHERE note_id = ?9
"#;

pub const DELETE_NOTE: &str = "DELETE FROM notes WHERE note_id = ?1";

pub const COUNT_NOTES: &str = "SELECT COUNT(*) FROM notes";

// Skill queries
pub const INSERT_SKILL: &str = r#"
INSERT INTO skills (progeny_id, author, access_level, name, description, category, added_date,
                    first_observation_date, skill_number)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
"#;

pub const SELECT_SKILL_BY_ID: &str = r#"
SELECT skill_id, progeny_id, author, access_level, name, description, category, added_date,
       first_observation_date, skill_number
FROM skills
WHERE skill_id = ?1
"#;

pub const SELECT_SKILLS: &str = r#"
SELECT skill_id, progeny_id, author, access_level, name, description, category, added_date,
       first_observation_date, skill_number
FROM skills
ORDER BY skill_id
"#;

pub const SELECT_SKILLS_BY_PROGENY: &str = r#"
SELECT skill_id, progeny_id, author, access_level, name, description, category, added_date,
       first_observation_date, skill_number
FROM skills
WHERE progeny_id = ?1
ORDER BY skill_id
"#;

pub const UPDATE_SKILL: &str = r#"
UPDATE skills
SET progeny_id = ?1, author = ?2, access_level = ?3, name = ?4, description = ?5, category = ?6,
    added_date = ?7, first_observation_date = ?8, skill_number = ?9
WHERE skill_id = ?10
"#;

pub const DELETE_SKILL: &str = "DELETE FROM skills WHERE skill_id = ?1";

pub const COUNT_SKILLS: &str = "SELECT COUNT(*) FROM skills";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_creates_in_memory() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(CREATE_TABLES).unwrap();

        // Running it twice must be harmless.
        conn.execute_batch(CREATE_TABLES).unwrap();
    }

    #[test]
    fn test_all_statements_prepare() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(CREATE_TABLES).unwrap();

        let statements = [
            INSERT_LANGUAGE,
            SELECT_LANGUAGE_BY_ID,
            SELECT_LANGUAGES,
            UPDATE_LANGUAGE,
            DELETE_LANGUAGE,
            COUNT_LANGUAGES,
            INSERT_PROGENY,
            SELECT_PROGENY_BY_ID,
            SELECT_PROGENIES,
            UPDATE_PROGENY,
            DELETE_PROGENY,
            COUNT_PROGENIES,
            INSERT_NOTE,
            SELECT_NOTE_BY_ID,
            SELECT_NOTES,
            SELECT_NOTES_BY_PROGENY,
            UPDATE_NOTE,
            DELETE_NOTE,
            COUNT_NOTES,
            INSERT_SKILL,
            SELECT_SKILL_BY_ID,
            SELECT_SKILLS,
            SELECT_SKILLS_BY_PROGENY,
            UPDATE_SKILL,
            DELETE_SKILL,
            COUNT_SKILLS,
        ];

        for sql in statements {
            assert!(conn.prepare(sql).is_ok(), "failed to prepare: {sql}");
        }
    }
}
