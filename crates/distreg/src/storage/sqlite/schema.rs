//! SQLite schema definitions and SQL query constants.
//!
//! All SQL used by the repository lives here as constants, pure data with
//! no I/O.

/// SQL statement to create all tables.
///
/// Run once at startup; every statement is idempotent. The UNIQUE constraint
/// on `(distributor_id, question_number)` backs the upsert in
/// [`UPSERT_ANSWER`], so resubmitting a questionnaire overwrites instead of
/// duplicating rows.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

-- Distributor registrations
CREATE TABLE IF NOT EXISTS distributor_info (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    distributor_name TEXT NOT NULL,
    contact_person TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NOT NULL,
    address TEXT NOT NULL
);

-- Survey answers, one row per (distributor, question)
CREATE TABLE IF NOT EXISTS distributor_answers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    distributor_id INTEGER NOT NULL,
    question_number INTEGER NOT NULL,
    answer TEXT,
    UNIQUE (distributor_id, question_number),
    FOREIGN KEY (distributor_id) REFERENCES distributor_info(id)
);

-- Index for per-distributor answer lookups
CREATE INDEX IF NOT EXISTS idx_answers_distributor_id ON distributor_answers(distributor_id);
"#;

// Distributor queries
pub const INSERT_DISTRIBUTOR: &str = r#"
INSERT INTO distributor_info (distributor_name, contact_person, email, phone, address)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub const SELECT_ALL_DISTRIBUTORS: &str = r#"
SELECT id, distributor_name, contact_person, email, phone, address
FROM distributor_info
ORDER BY id ASC
"#;

pub const SELECT_DISTRIBUTOR_EXISTS: &str = r#"
SELECT EXISTS(SELECT 1 FROM distributor_info WHERE id = ?1)
"#;

// Answer queries
pub const UPSERT_ANSWER: &str = r#"
INSERT INTO distributor_answers (distributor_id, question_number, answer)
VALUES (?1, ?2, ?3)
ON CONFLICT (distributor_id, question_number) DO UPDATE SET answer = excluded.answer
"#;

pub const SELECT_ALL_ANSWERS: &str = r#"
SELECT id, distributor_id, question_number, answer
FROM distributor_answers
ORDER BY id ASC
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_valid_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS distributor_info"));
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS distributor_answers"));
        assert!(CREATE_TABLES.contains("PRAGMA foreign_keys = ON"));
        assert!(CREATE_TABLES.contains("UNIQUE (distributor_id, question_number)"));
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        assert!(INSERT_DISTRIBUTOR.contains("INSERT"));
        assert!(SELECT_ALL_DISTRIBUTORS.contains("ORDER BY id ASC"));
        assert!(SELECT_DISTRIBUTOR_EXISTS.contains("EXISTS"));

        assert!(UPSERT_ANSWER.contains("ON CONFLICT"));
        assert!(SELECT_ALL_ANSWERS.contains("ORDER BY id ASC"));
    }
}
