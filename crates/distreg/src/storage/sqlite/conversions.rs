//! Row-to-entity conversions for the SQLite repository.

use rusqlite::Row;

use distreg_core::registration::{Distributor, DistributorAnswer};

/// Converts a `distributor_info` row into a [`Distributor`].
///
/// Column order must match [`super::schema::SELECT_ALL_DISTRIBUTORS`].
pub fn row_to_distributor(row: &Row<'_>) -> rusqlite::Result<Distributor> {
    Ok(Distributor {
        id: row.get(0)?,
        distributor_name: row.get(1)?,
        contact_person: row.get(2)?,
        email: row.get(3)?,
        phone: row.get(4)?,
        address: row.get(5)?,
    })
}

/// Converts a `distributor_answers` row into a [`DistributorAnswer`].
///
/// Column order must match [`super::schema::SELECT_ALL_ANSWERS`].
pub fn row_to_answer(row: &Row<'_>) -> rusqlite::Result<DistributorAnswer> {
    Ok(DistributorAnswer {
        id: row.get(0)?,
        distributor_id: row.get(1)?,
        question_number: row.get(2)?,
        answer: row.get(3)?,
    })
}
