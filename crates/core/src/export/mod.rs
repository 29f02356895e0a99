mod xlsx;

pub use xlsx::{
    build_workbook, ExportError, ANSWER_COLUMNS, ANSWER_SHEET, DISTRIBUTOR_COLUMNS,
    DISTRIBUTOR_SHEET, EXPORT_FILE_NAME,
};
