//! Data model for the payment accounting core
//!
//! Split into:
//! - `payment` - the stored payment record and its identifiers
//! - `reference` - the slice of project/unit reference data the aggregator
//!   needs to resolve payments to project names
//! - `report` - ephemeral derived types produced by report generation

mod payment;
mod reference;
mod report;

pub use payment::{PayerId, PayerType, Payment, PaymentId};
pub use reference::{Project, ProjectId, ReferenceData, Unit, UnitId};
pub use report::{
    AppliedFilters, MonthlyBucket, PayerBucket, PayerSplit, ProjectSummary, QuarterlyBucket,
    Recommendation, Report, ReportSummary, TopTransaction, Trend,
};
