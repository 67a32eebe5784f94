use std::collections::HashMap;

use crate::cell::parse_amount;
use crate::detect::{FileFormat, TITLE_SHEET};
use crate::model::{TitleInfo, NOT_AVAILABLE};
use crate::sheet::Grid;
use crate::workbook::Workbook;

/// Title sheet labels, matched exactly.
pub mod labels {
    pub const AGREEMENT_NO: &str = "Agreement No.";
    pub const CONTRACTOR_NAME: &str = "Name of Contractor";
    pub const WORK_NAME: &str = "Name of Work";
    pub const WORK_ORDER_AMOUNT: &str = "Work Order Amount";
    pub const DATE_OF_COMMENCEMENT: &str = "Date of Commencement";
    pub const DATE_OF_COMPLETION: &str = "Date of Completion";
    pub const MEASUREMENT_BOOK_NO: &str = "M.B No.";
    pub const CHARGEABLE_HEAD: &str = "Chargeable Head";
    pub const ADMINISTRATIVE_SECTION: &str = "Administrative Section";
    pub const TECHNICAL_SECTION: &str = "Technical Section";
    pub const SUBDIVISION_NAME: &str = "Name of Sub Division";
}

/// Resolve the workbook's title metadata.
///
/// Old Pattern files never carry metadata. For New Pattern files, a Title
/// sheet that is listed but unreadable degrades to the defaults.
pub fn extract_title(workbook: &Workbook, format: FileFormat) -> TitleInfo {
    match format {
        FileFormat::OldPattern => TitleInfo::default(),
        FileFormat::NewPattern => match workbook.grid(TITLE_SHEET) {
            Some(grid) => title_from_grid(grid),
            None => {
                tracing::warn!("Title sheet could not be read, using default title metadata");
                TitleInfo::default()
            }
        },
    }
}

/// Collect `(label, value)` pairs from the first two columns. Rows without
/// both a label and a value are ignored; a repeated label keeps its last value.
pub fn title_labels(grid: &Grid) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for row in grid.rows() {
        let (label, value) = (row.get(0), row.get(1));
        if label.is_empty() || value.is_empty() {
            continue;
        }
        map.insert(label.as_text(), value.as_text());
    }
    map
}

pub fn title_from_grid(grid: &Grid) -> TitleInfo {
    let map = title_labels(grid);
    tracing::debug!(labels = map.len(), "read title labels");
    title_from_labels(&map)
}

pub fn title_from_labels(map: &HashMap<String, String>) -> TitleInfo {
    let text = |label: &str| {
        map.get(label)
            .cloned()
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())
    };

    TitleInfo {
        agreement_no: text(labels::AGREEMENT_NO),
        contractor_name: text(labels::CONTRACTOR_NAME),
        work_name: text(labels::WORK_NAME),
        work_order_amount: map
            .get(labels::WORK_ORDER_AMOUNT)
            .map(|v| parse_amount(v))
            .unwrap_or(0.0),
        date_of_commencement: text(labels::DATE_OF_COMMENCEMENT),
        date_of_completion: text(labels::DATE_OF_COMPLETION),
        measurement_book_no: text(labels::MEASUREMENT_BOOK_NO),
        chargeable_head: text(labels::CHARGEABLE_HEAD),
        administrative_section: text(labels::ADMINISTRATIVE_SECTION),
        technical_section: text(labels::TECHNICAL_SECTION),
        subdivision_name: text(labels::SUBDIVISION_NAME),
    }
}
