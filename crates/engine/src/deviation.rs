use std::collections::HashMap;

use crate::model::{DeviationRow, LineItem};

/// Compare planned against executed quantities, one row per work-order item.
///
/// Executed items are matched by exact item number; when several share a
/// number the last one wins. Work-order items with no executed counterpart
/// get zero quantity at the work-order rate. Executed items that are not in
/// the work order do not appear.
///
/// Amounts are recomputed from quantity × rate rather than taken from the
/// sheet's amount column.
pub fn build_deviation(work_order: &[LineItem], bill_quantity: &[LineItem]) -> Vec<DeviationRow> {
    let executed: HashMap<&str, &LineItem> = bill_quantity
        .iter()
        .map(|item| (item.item_no.as_str(), item))
        .collect();

    work_order
        .iter()
        .map(|wo| {
            let (exec_quantity, exec_rate) = match executed.get(wo.item_no.as_str()) {
                Some(bill) => (bill.quantity, bill.rate),
                None => (0.0, wo.rate),
            };
            deviation_row(wo, exec_quantity, exec_rate)
        })
        .collect()
}

/// `quantity * rate`, or 0 when the product overflows.
fn finite_product(quantity: f64, rate: f64) -> f64 {
    let product = quantity * rate;
    if product.is_finite() {
        product
    } else {
        0.0
    }
}

fn deviation_row(wo: &LineItem, exec_quantity: f64, exec_rate: f64) -> DeviationRow {
    let excess_quantity = (exec_quantity - wo.quantity).max(0.0);
    let saving_quantity = (wo.quantity - exec_quantity).max(0.0);

    DeviationRow {
        item_no: wo.item_no.clone(),
        description: wo.description.clone(),
        unit: wo.unit.clone(),
        wo_quantity: wo.quantity,
        wo_rate: wo.rate,
        wo_amount: finite_product(wo.quantity, wo.rate),
        exec_quantity,
        exec_rate,
        exec_amount: finite_product(exec_quantity, exec_rate),
        excess_quantity,
        excess_amount: finite_product(excess_quantity, exec_rate),
        saving_quantity,
        saving_amount: finite_product(saving_quantity, exec_rate),
    }
}
