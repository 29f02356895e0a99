//! SQLite storage backend.
//!
//! Implements the repository traits from `distreg_core::storage` using
//! `rusqlite` for synchronous operations and `tokio-rusqlite` for async
//! wrapping.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::SqliteRepository;
