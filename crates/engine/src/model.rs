use serde::{Deserialize, Serialize};

use crate::detect::FileFormat;

/// Placeholder for metadata that the workbook did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

// ---------------------------------------------------------------------------
// Title metadata
// ---------------------------------------------------------------------------

/// Contract metadata from the Title sheet. Every field is always present;
/// missing text is `"N/A"` and a missing amount is 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleInfo {
    pub agreement_no: String,
    pub contractor_name: String,
    pub work_name: String,
    pub work_order_amount: f64,
    pub date_of_commencement: String,
    pub date_of_completion: String,
    pub measurement_book_no: String,
    pub chargeable_head: String,
    pub administrative_section: String,
    pub technical_section: String,
    pub subdivision_name: String,
}

impl Default for TitleInfo {
    fn default() -> Self {
        let na = || NOT_AVAILABLE.to_string();
        Self {
            agreement_no: na(),
            contractor_name: na(),
            work_name: na(),
            work_order_amount: 0.0,
            date_of_commencement: na(),
            date_of_completion: na(),
            measurement_book_no: na(),
            chargeable_head: na(),
            administrative_section: na(),
            technical_section: na(),
            subdivision_name: na(),
        }
    }
}

// ---------------------------------------------------------------------------
// Line items
// ---------------------------------------------------------------------------

/// One billing line from the Work Order, Bill Quantity or Extra Items sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub item_no: String,
    pub description: String,
    pub unit: String,
    pub quantity: f64,
    pub rate: f64,
    pub amount: f64,
}

// ---------------------------------------------------------------------------
// Deviation
// ---------------------------------------------------------------------------

/// Planned vs executed figures for one work-order item.
///
/// At most one of excess/saving is non-zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviationRow {
    pub item_no: String,
    pub description: String,
    pub unit: String,
    pub wo_quantity: f64,
    pub wo_rate: f64,
    pub wo_amount: f64,
    pub exec_quantity: f64,
    pub exec_rate: f64,
    pub exec_amount: f64,
    pub excess_quantity: f64,
    pub excess_amount: f64,
    pub saving_quantity: f64,
    pub saving_amount: f64,
}

// ---------------------------------------------------------------------------
// Deductions
// ---------------------------------------------------------------------------

/// Statutory deductions on the billed total. Rates are percentages; amounts
/// are whole units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deductions {
    pub sd_rate: f64,
    pub it_rate: f64,
    pub gst_rate: f64,
    pub lc_rate: f64,
    pub sd_amount: f64,
    pub it_amount: f64,
    pub gst_amount: f64,
    pub lc_amount: f64,
    pub total_deductions: f64,
}

// ---------------------------------------------------------------------------
// Result
// ---------------------------------------------------------------------------

/// Everything derived from one workbook. This is what renderers consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedResult {
    pub file_format: FileFormat,
    pub title_info: TitleInfo,
    pub work_order_items: Vec<LineItem>,
    pub bill_quantity_items: Vec<LineItem>,
    pub extra_items: Vec<LineItem>,
    pub total_amount: f64,
    pub work_order_amount: f64,
    pub deviation_data: Vec<DeviationRow>,
    pub deductions: Deductions,
    pub net_payable: f64,
}

impl ProcessedResult {
    /// Deviation rows where more was executed than ordered.
    pub fn excess_rows(&self) -> usize {
        self.deviation_data.iter().filter(|d| d.excess_quantity > 0.0).count()
    }

    /// Deviation rows where less was executed than ordered.
    pub fn saving_rows(&self) -> usize {
        self.deviation_data.iter().filter(|d| d.saving_quantity > 0.0).count()
    }
}
