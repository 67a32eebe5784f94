use std::fmt;
use std::path::PathBuf;

/// Failures that stop a workbook from being processed at all.
///
/// Problems inside a readable workbook (a broken sheet, a bad cell) are not
/// errors; they degrade to empty values.
#[derive(Debug)]
pub enum ReadError {
    /// The file is missing, unreadable, or not a spreadsheet container.
    Open { path: PathBuf, message: String },
    /// The container opened but lists no sheets.
    NoSheets { path: PathBuf },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, message } => {
                write!(f, "cannot open workbook {}: {message}", path.display())
            }
            Self::NoSheets { path } => write!(f, "workbook {} contains no sheets", path.display()),
        }
    }
}

impl std::error::Error for ReadError {}
