use crate::model::Deductions;

/// Statutory rates, in percent of the billed total.
pub const SD_RATE: f64 = 10.0; // Security Deposit
pub const IT_RATE: f64 = 2.0; // Income Tax
pub const GST_RATE: f64 = 2.0;
pub const LC_RATE: f64 = 1.0; // Labour Cess

/// Round to the nearest whole unit; exact halves go to the even neighbour.
pub fn round_half_even(value: f64) -> f64 {
    value.round_ties_even()
}

/// Whole-unit deduction at `rate` percent.
fn deduction(total_amount: f64, rate: f64) -> f64 {
    let mut amount = total_amount * rate / 100.0;
    if !amount.is_finite() {
        // Only near f64::MAX; dividing first cannot overflow.
        amount = total_amount / 100.0 * rate;
    }
    round_half_even(amount)
}

/// GST is always deducted as an even whole amount; an odd result is bumped up.
fn gst_deduction(total_amount: f64) -> f64 {
    let gst = deduction(total_amount, GST_RATE);
    if gst % 2.0 != 0.0 {
        gst + 1.0
    } else {
        gst
    }
}

pub fn compute_deductions(total_amount: f64) -> Deductions {
    let sd_amount = deduction(total_amount, SD_RATE);
    let it_amount = deduction(total_amount, IT_RATE);
    let gst_amount = gst_deduction(total_amount);
    let lc_amount = deduction(total_amount, LC_RATE);

    Deductions {
        sd_rate: SD_RATE,
        it_rate: IT_RATE,
        gst_rate: GST_RATE,
        lc_rate: LC_RATE,
        sd_amount,
        it_amount,
        gst_amount,
        lc_amount,
        total_deductions: sd_amount + it_amount + gst_amount + lc_amount,
    }
}

pub fn net_payable(total_amount: f64, deductions: &Deductions) -> f64 {
    total_amount - deductions.total_deductions
}
