//! Payment breakdown calculator
//!
//! Splits a gross payment into company commission, VAT on that commission,
//! and the net remainder owed to the property owner. The three outputs are
//! computed once when a payment is recorded (or explicitly edited) and are
//! persisted with it; reporting never recomputes them.

use rust_decimal::Decimal;

/// Scale used for all monetary values (currency cents).
pub const MONEY_SCALE: u32 = 2;

/// Default company commission rate (5%).
pub fn default_company_rate() -> Decimal {
    Decimal::new(5, 2)
}

/// Default VAT rate applied to the commission (15%).
pub fn default_vat_rate() -> Decimal {
    Decimal::new(15, 2)
}

/// Result of splitting a gross payment.
///
/// Invariant: `commission + vat + net` equals the gross amount to within
/// 0.01, since each step rounds to two decimal places independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Breakdown {
    pub commission: Decimal,
    pub vat: Decimal,
    pub net: Decimal,
}

/// Compute the commission/VAT/net split for a gross payment.
///
/// The commission is deducted from the gross total:
///
/// ```text
/// commission = round(amount * company_rate, 2)
/// vat        = round(commission * vat_rate, 2)
/// net        = round(amount - commission - vat, 2)
/// ```
///
/// Rounding is banker's rounding at two decimal places after every step, which
/// matches the historically stored values exactly. Inputs outside the
/// documented ranges (negative amounts, rates above 1) are accepted as-is.
///
/// An alternative policy where the commission is deducted from the owner's
/// share only is referenced in the business rules but has never been defined;
/// this function implements only the deducted-from-total policy.
pub fn compute_breakdown(amount: Decimal, company_rate: Decimal, vat_rate: Decimal) -> Breakdown {
    let commission = (amount * company_rate).round_dp(MONEY_SCALE);
    let vat = (commission * vat_rate).round_dp(MONEY_SCALE);
    let net = (amount - commission - vat).round_dp(MONEY_SCALE);
    Breakdown {
        commission,
        vat,
        net,
    }
}
