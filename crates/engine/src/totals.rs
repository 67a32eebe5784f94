use crate::model::{LineItem, TitleInfo};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    /// Billed amount: executed items plus extra items.
    pub total_amount: f64,
    /// Contract value: the Title figure, or the sum of work-order items when
    /// the Title sheet gave none.
    pub work_order_amount: f64,
}

/// Sum of item amounts; a sum that overflows counts as 0.
pub fn sum_amounts(items: &[LineItem]) -> f64 {
    let total: f64 = items.iter().map(|i| i.amount).sum();
    if total.is_finite() {
        total
    } else {
        tracing::warn!(items = items.len(), "amount sum overflowed, using 0");
        0.0
    }
}

/// Work-order items are planned work and never count towards the billed total.
pub fn compute_totals(
    title: &TitleInfo,
    work_order: &[LineItem],
    bill_quantity: &[LineItem],
    extra: &[LineItem],
) -> Totals {
    let total_amount = sum_amounts(bill_quantity) + sum_amounts(extra);

    let work_order_amount = if title.work_order_amount != 0.0 {
        title.work_order_amount
    } else {
        sum_amounts(work_order)
    };

    Totals {
        total_amount,
        work_order_amount,
    }
}
