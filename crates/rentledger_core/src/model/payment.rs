//! Payment records
//!
//! A payment is recorded once per transaction event. Its commission/VAT/net
//! fields are fixed at creation time (or on explicit edit) via
//! [`compute_breakdown`] and are the source of truth for all reporting.

use jiff::civil::DateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::breakdown::compute_breakdown;
use crate::model::reference::UnitId;

/// Unique identifier for a payment record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PaymentId(pub u32);

/// Opaque reference to the paying party (owner or tenant row in storage).
/// Not validated by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayerId(pub u32);

/// Who made a payment: the unit's owner or its tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayerType {
    Owner,
    Tenant,
}

impl fmt::Display for PayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayerType::Owner => write!(f, "owner"),
            PayerType::Tenant => write!(f, "tenant"),
        }
    }
}

/// A recorded payment with its persisted financial breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub unit_id: UnitId,
    pub payer_type: PayerType,
    pub payer_id: PayerId,
    /// Gross amount paid
    pub amount: Decimal,
    pub date: DateTime,
    pub description: Option<String>,

    /// Commission rate in [0, 1], fixed when the payment was recorded
    pub company_rate: Decimal,
    /// VAT rate in [0, 1], fixed when the payment was recorded
    pub vat_rate: Decimal,

    // Computed at creation and persisted; reporting never recomputes these.
    pub company_commission: Decimal,
    pub vat_on_commission: Decimal,
    pub net_to_owner: Decimal,
}

impl Payment {
    /// Record a new payment, computing its breakdown from the given rates.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: PaymentId,
        unit_id: UnitId,
        payer_type: PayerType,
        payer_id: PayerId,
        amount: Decimal,
        date: DateTime,
        description: Option<String>,
        company_rate: Decimal,
        vat_rate: Decimal,
    ) -> Self {
        let b = compute_breakdown(amount, company_rate, vat_rate);
        Self {
            id,
            unit_id,
            payer_type,
            payer_id,
            amount,
            date,
            description,
            company_rate,
            vat_rate,
            company_commission: b.commission,
            vat_on_commission: b.vat,
            net_to_owner: b.net,
        }
    }

    /// Explicitly edit the financial inputs, recomputing the stored breakdown.
    ///
    /// This is the only path that recomputes the persisted breakdown fields.
    pub fn reprice(&mut self, amount: Decimal, company_rate: Decimal, vat_rate: Decimal) {
        let b = compute_breakdown(amount, company_rate, vat_rate);
        self.amount = amount;
        self.company_rate = company_rate;
        self.vat_rate = vat_rate;
        self.company_commission = b.commission;
        self.vat_on_commission = b.vat;
        self.net_to_owner = b.net;
    }
}
