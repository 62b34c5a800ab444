//! Derived report types
//!
//! Everything here is ephemeral: built fresh for each report invocation from
//! an immutable snapshot of payment records, never persisted, never shared
//! across invocations.

use jiff::civil::{Date, DateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::payment::PayerType;

/// Filters as they were applied, with the project filter resolved to its
/// display name for presentation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppliedFilters {
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub project: Option<String>,
    pub payer_type: Option<PayerType>,
}

impl AppliedFilters {
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none()
            && self.end_date.is_none()
            && self.project.is_none()
            && self.payer_type.is_none()
    }
}

/// Portfolio-wide totals and averages over the filtered record set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_amount: Decimal,
    pub total_commission: Decimal,
    pub total_vat: Decimal,
    pub net_to_owners: Decimal,
    /// `total_commission / total_amount * 100`; 0 when there are no payments
    pub commission_pct: Decimal,
    pub avg_payment: Decimal,
    pub avg_commission: Decimal,
    /// Payments per day over the span from the oldest analyzed payment to the
    /// report timestamp; 0 when there are no payments
    pub deals_per_day: f64,
}

/// Count/total/average statistics for one payer type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayerBucket {
    pub count: usize,
    pub total: Decimal,
    pub average: Decimal,
    /// Share of the total record count, in percent
    pub count_pct: Decimal,
}

/// Owner/tenant statistics computed independently over the same record set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PayerSplit {
    pub owners: PayerBucket,
    pub tenants: PayerBucket,
}

/// Per-project accumulation, presented descending by total amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub name: String,
    pub count: usize,
    pub total: Decimal,
    pub commission: Decimal,
}

/// One calendar month of activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyBucket {
    pub year: i16,
    pub month: i8,
    pub count: usize,
    pub total: Decimal,
    pub commission: Decimal,
    pub owners: usize,
    pub tenants: usize,
}

impl MonthlyBucket {
    /// Period key in `YYYY-MM` form.
    pub fn label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}

/// One calendar quarter of activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuarterlyBucket {
    pub year: i16,
    pub quarter: i8,
    pub count: usize,
    pub total: Decimal,
    pub commission: Decimal,
}

impl QuarterlyBucket {
    /// Period key in `YYYY-Qn` form.
    pub fn label(&self) -> String {
        format!("{:04}-Q{}", self.year, self.quarter)
    }
}

/// Month-over-month growth of the two most recent monthly buckets.
/// Omitted entirely when fewer than two months exist or the previous
/// month's total is zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Trend {
    pub growth_pct: Decimal,
}

/// Display slice of one of the largest filtered payments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTransaction {
    pub amount: Decimal,
    pub date: DateTime,
    pub payer_type: PayerType,
    pub description: Option<String>,
}

/// Advisory note derived from fixed business thresholds. These are hints for
/// the reader of the report, not alerts requiring action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    CommissionRateHigh,
    CommissionRateLow,
    WellDiversified,
    ConcentratedProjects,
    StrongGrowth,
    RevenueDecline,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Recommendation::CommissionRateHigh => {
                "Commission rate is relatively high and may warrant review"
            }
            Recommendation::CommissionRateLow => {
                "Commission rate is low; verify that operations remain profitable"
            }
            Recommendation::WellDiversified => {
                "Payments are spread across many projects, reducing concentration risk"
            }
            Recommendation::ConcentratedProjects => {
                "Payments are concentrated in a small number of projects, increasing risk"
            }
            Recommendation::StrongGrowth => "Strong revenue growth over the most recent month",
            Recommendation::RevenueDecline => {
                "Revenue declined versus the prior month and deserves a closer look"
            }
        };
        f.write_str(text)
    }
}

/// Complete structured report over one filtered snapshot.
///
/// Produced by [`crate::report`] and rendered to text by
/// [`Report::to_text`](crate::render).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Timestamp supplied by the caller; carried for rendering and the
    /// deals-per-day KPI so generation stays deterministic
    pub generated_at: DateTime,
    pub filters: AppliedFilters,
    /// Number of records after filtering
    pub record_count: usize,
    pub summary: ReportSummary,
    pub payer_split: PayerSplit,
    /// Descending by total amount
    pub projects: Vec<ProjectSummary>,
    /// Most recent six months, descending by period
    pub monthly: Vec<MonthlyBucket>,
    /// All quarters, descending by period
    pub quarterly: Vec<QuarterlyBucket>,
    pub trend: Option<Trend>,
    /// At most five payments, descending by amount
    pub top_transactions: Vec<TopTransaction>,
    pub recommendations: Vec<Recommendation>,
}
