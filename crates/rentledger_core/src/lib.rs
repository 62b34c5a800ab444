//! Payment accounting and reporting engine for rental portfolios
//!
//! This crate is the computational core of a property-management back office:
//! - Breakdown of a gross payment into company commission, VAT on that
//!   commission, and the net amount owed to the owner
//! - Aggregation of a payment snapshot into grouped statistics (payer type,
//!   project, month, quarter), trend analysis, and rule-based recommendations
//! - Plain-text and CSV renderings of the aggregated report
//!
//! All monetary arithmetic uses [`rust_decimal::Decimal`] rounded to two
//! decimal places at each step, so recomputed values always match what was
//! persisted at payment creation time.
//!
//! The crate performs no I/O of its own beyond writing CSV to a caller-supplied
//! writer: callers fetch a snapshot of payment records, apply filters, and hand
//! everything to [`Report::generate`].

#![warn(clippy::all)]

pub mod breakdown;
pub mod export;
pub mod format;
pub mod model;
pub mod render;
pub mod report;

#[cfg(test)]
mod tests;

pub use breakdown::{Breakdown, compute_breakdown};
pub use model::{
    MonthlyBucket, PayerSplit, PayerType, Payment, PaymentId, Project, ProjectId, ProjectSummary,
    QuarterlyBucket, Recommendation, ReferenceData, Report, ReportSummary, Trend, Unit, UnitId,
};
pub use report::ReportFilters;
