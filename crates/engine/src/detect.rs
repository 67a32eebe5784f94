use serde::{Deserialize, Serialize};

pub const TITLE_SHEET: &str = "Title";
pub const WORK_ORDER_SHEET: &str = "Work Order";
pub const BILL_QUANTITY_SHEET: &str = "Bill Quantity";
pub const EXTRA_ITEMS_SHEET: &str = "Extra Items";

/// Input layout family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileFormat {
    /// No Title sheet; metadata is unavailable.
    #[serde(rename = "Old Pattern")]
    OldPattern,
    /// Has a Title sheet with label/value metadata.
    #[serde(rename = "New Pattern")]
    NewPattern,
}

impl std::fmt::Display for FileFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OldPattern => write!(f, "Old Pattern"),
            Self::NewPattern => write!(f, "New Pattern"),
        }
    }
}

/// Classify a workbook by its sheet names. A sheet named exactly `Title`
/// means New Pattern; nothing else is considered.
pub fn detect_format<S: AsRef<str>>(sheet_names: &[S]) -> FileFormat {
    if sheet_names.iter().any(|n| n.as_ref() == TITLE_SHEET) {
        FileFormat::NewPattern
    } else {
        FileFormat::OldPattern
    }
}
