//! Two-sheet spreadsheet export of the registration tables.
//!
//! Builds the workbook entirely in memory from already-fetched rows; callers
//! decide where the bytes go (a file on disk, an HTTP response body).

use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};
use thiserror::Error;

use crate::registration::{Distributor, DistributorAnswer};

/// File name offered to downloading clients.
pub const EXPORT_FILE_NAME: &str = "distributor_data.xlsx";

/// Sheet holding one row per distributor.
pub const DISTRIBUTOR_SHEET: &str = "Distributor Info";

/// Sheet holding one row per recorded answer.
pub const ANSWER_SHEET: &str = "Answers";

/// Column headers for the distributor sheet, matching the stored field names.
pub const DISTRIBUTOR_COLUMNS: [&str; 6] = [
    "id",
    "distributor_name",
    "contact_person",
    "email",
    "phone",
    "address",
];

/// Column headers for the answer sheet, matching the stored field names.
pub const ANSWER_COLUMNS: [&str; 4] = ["id", "distributor_id", "question_number", "answer"];

/// Errors that can occur while building the spreadsheet.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to build workbook: {0}")]
    Workbook(#[from] XlsxError),
}

/// Builds the two-sheet xlsx workbook and returns its serialized bytes.
///
/// Row order matches the order of the input slices, which the repositories
/// return in storage (id) order.
pub fn build_workbook(
    distributors: &[Distributor],
    answers: &[DistributorAnswer],
) -> Result<Vec<u8>, ExportError> {
    let mut workbook = Workbook::new();

    let sheet = workbook.add_worksheet();
    sheet.set_name(DISTRIBUTOR_SHEET)?;
    write_headers(sheet, &DISTRIBUTOR_COLUMNS)?;
    for (i, distributor) in distributors.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_number(row, 0, distributor.id as f64)?;
        sheet.write_string(row, 1, &distributor.distributor_name)?;
        sheet.write_string(row, 2, &distributor.contact_person)?;
        sheet.write_string(row, 3, &distributor.email)?;
        sheet.write_string(row, 4, &distributor.phone)?;
        sheet.write_string(row, 5, &distributor.address)?;
    }

    let sheet = workbook.add_worksheet();
    sheet.set_name(ANSWER_SHEET)?;
    write_headers(sheet, &ANSWER_COLUMNS)?;
    for (i, answer) in answers.iter().enumerate() {
        let row = (i + 1) as u32;
        sheet.write_number(row, 0, answer.id as f64)?;
        sheet.write_number(row, 1, answer.distributor_id as f64)?;
        sheet.write_number(row, 2, f64::from(answer.question_number))?;
        if let Some(text) = &answer.answer {
            sheet.write_string(row, 3, text)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

fn write_headers(sheet: &mut Worksheet, columns: &[&str]) -> Result<(), ExportError> {
    for (col, header) in columns.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }
    Ok(())
}
