use crate::model::LineItem;
use crate::sheet::{Grid, Row};
use crate::workbook::Workbook;

/// Item sheets put a banner on row 0 and the column header on row 1.
pub const HEADER_ROW: usize = 1;

// Column positions below the header.
const COL_ITEM_NO: usize = 0;
const COL_DESCRIPTION: usize = 1;
const COL_UNIT: usize = 2;
const COL_QUANTITY: usize = 3;
const COL_RATE: usize = 4;
const COL_AMOUNT: usize = 5;

/// Build a line item from one data row.
///
/// Returns `None` for rows that carry neither a quantity nor an amount
/// (section headings, separators, zero-quantity placeholders).
pub fn item_from_row(row: &Row) -> Option<LineItem> {
    let quantity = row.number(COL_QUANTITY);
    let rate = row.number(COL_RATE);
    let mut amount = row.number(COL_AMOUNT);

    if amount == 0.0 && quantity > 0.0 && rate > 0.0 {
        let derived = quantity * rate;
        // An overflowing product leaves the amount unset.
        if derived.is_finite() {
            amount = derived;
        }
    }

    if quantity <= 0.0 && amount <= 0.0 {
        return None;
    }

    Some(LineItem {
        item_no: row.text(COL_ITEM_NO),
        description: row.text(COL_DESCRIPTION),
        unit: row.text(COL_UNIT),
        quantity,
        rate,
        amount,
    })
}

/// All line items below the header row, in sheet order.
pub fn extract_items(grid: &Grid) -> Vec<LineItem> {
    grid.rows_below(HEADER_ROW)
        .iter()
        .filter(|row| !row.is_blank())
        .filter_map(|row| {
            let item = item_from_row(row);
            if item.is_none() {
                tracing::trace!(item_no = %row.text(COL_ITEM_NO), "row has no quantity or amount, skipped");
            }
            item
        })
        .collect()
}

/// Line items of the named sheet; an absent or unreadable sheet has none.
pub fn extract_sheet_items(workbook: &Workbook, sheet_name: &str) -> Vec<LineItem> {
    match workbook.grid(sheet_name) {
        Some(grid) => {
            let items = extract_items(grid);
            tracing::debug!(sheet = sheet_name, items = items.len(), "extracted line items");
            items
        }
        None => {
            if workbook.has_sheet(sheet_name) {
                tracing::warn!(sheet = sheet_name, "sheet could not be read, treating as empty");
            }
            Vec::new()
        }
    }
}
