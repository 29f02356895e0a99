//! Core domain logic for the distributor registration service.
//!
//! Pure data types, validation, repository traits, and the spreadsheet
//! builder. No I/O happens here; the `distreg` binary wires these into
//! axum handlers and a SQLite backend.

pub mod export;
pub mod registration;
pub mod storage;
