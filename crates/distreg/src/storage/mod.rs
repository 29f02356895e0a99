mod sqlite;

pub use sqlite::SqliteRepository;
