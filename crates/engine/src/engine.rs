use crate::deductions::{compute_deductions, net_payable};
use crate::detect::{detect_format, BILL_QUANTITY_SHEET, EXTRA_ITEMS_SHEET, WORK_ORDER_SHEET};
use crate::deviation::build_deviation;
use crate::items::extract_sheet_items;
use crate::model::ProcessedResult;
use crate::title::extract_title;
use crate::totals::compute_totals;
use crate::workbook::Workbook;

/// Derive the full billing result from a loaded workbook.
///
/// Infallible: missing sheets, unreadable cells and malformed metadata all
/// degrade to empty/default values.
pub fn process(workbook: &Workbook) -> ProcessedResult {
    tracing::info!(sheets = ?workbook.sheet_names(), "processing workbook");

    let file_format = detect_format(workbook.sheet_names());
    tracing::info!(%file_format, "detected file format");

    let title_info = extract_title(workbook, file_format);

    let work_order_items = extract_sheet_items(workbook, WORK_ORDER_SHEET);
    let bill_quantity_items = extract_sheet_items(workbook, BILL_QUANTITY_SHEET);
    let extra_items = extract_sheet_items(workbook, EXTRA_ITEMS_SHEET);

    let totals = compute_totals(&title_info, &work_order_items, &bill_quantity_items, &extra_items);
    let deviation_data = build_deviation(&work_order_items, &bill_quantity_items);
    let deductions = compute_deductions(totals.total_amount);
    let net_payable = net_payable(totals.total_amount, &deductions);

    tracing::debug!(
        total_amount = totals.total_amount,
        total_deductions = deductions.total_deductions,
        net_payable,
        "derived totals"
    );

    ProcessedResult {
        file_format,
        title_info,
        work_order_items,
        bill_quantity_items,
        extra_items,
        total_amount: totals.total_amount,
        work_order_amount: totals.work_order_amount,
        deviation_data,
        deductions,
        net_payable,
    }
}
