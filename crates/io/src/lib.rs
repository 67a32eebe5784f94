// File I/O: loads spreadsheet files into the engine's workbook model

pub mod error;
pub mod xlsx;

use std::path::Path;

use billgen_engine::ProcessedResult;

pub use error::ReadError;
pub use xlsx::read_workbook;

/// Read a workbook from disk and derive its billing result.
///
/// The file is closed before derivation starts. Only failing to open the
/// file is an error.
pub fn process_file(path: &Path) -> Result<ProcessedResult, ReadError> {
    let workbook = read_workbook(path)?;
    Ok(billgen_engine::process(&workbook))
}
