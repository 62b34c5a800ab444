//! Report aggregation over a filtered payment snapshot
//!
//! [`Report::generate`] is a bounded, synchronous computation: it filters the
//! snapshot, accumulates grouped statistics into per-call maps, and returns a
//! fully structured [`Report`]. All monetary figures come straight from the
//! breakdown fields persisted on each record; nothing is recomputed from the
//! raw amounts and rates here.

use jiff::civil::{Date, DateTime};
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::model::{
    AppliedFilters, MonthlyBucket, PayerBucket, PayerSplit, PayerType, Payment, ProjectId,
    ProjectSummary, QuarterlyBucket, Recommendation, ReferenceData, Report, ReportSummary,
    TopTransaction, Trend,
};

/// Commission percentage above which the rate is flagged as high.
pub const COMMISSION_PCT_HIGH: i64 = 10;
/// Commission percentage below which the rate is flagged as low.
pub const COMMISSION_PCT_LOW: i64 = 3;
/// Project count above which the portfolio counts as well diversified.
pub const PROJECT_SPREAD_WIDE: usize = 5;
/// Project count at or below which the portfolio counts as concentrated.
pub const PROJECT_SPREAD_NARROW: usize = 2;
/// Month-over-month growth percentage considered strong.
pub const GROWTH_PCT_STRONG: i64 = 10;
/// Month-over-month growth percentage considered a decline.
pub const GROWTH_PCT_DECLINE: i64 = -5;

/// Number of monthly buckets presented (most recent first).
pub const MONTHLY_BUCKETS_PRESENTED: usize = 6;
/// Number of top transactions presented.
pub const TOP_TRANSACTIONS_PRESENTED: usize = 5;

/// Record filters. Date bounds are inclusive on the payment's calendar date;
/// the project filter matches through the unit -> project link.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportFilters {
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub project_id: Option<ProjectId>,
    pub payer_type: Option<PayerType>,
}

impl ReportFilters {
    /// Whether a payment passes every configured filter.
    pub fn matches(&self, payment: &Payment, reference: &ReferenceData) -> bool {
        let date = payment.date.date();
        if let Some(start) = self.start_date
            && date < start
        {
            return false;
        }
        if let Some(end) = self.end_date
            && date > end
        {
            return false;
        }
        if let Some(project_id) = self.project_id
            && reference.project_of_unit(payment.unit_id) != Some(project_id)
        {
            return false;
        }
        if let Some(payer_type) = self.payer_type
            && payment.payer_type != payer_type
        {
            return false;
        }
        true
    }

    fn applied(&self, reference: &ReferenceData) -> AppliedFilters {
        AppliedFilters {
            start_date: self.start_date,
            end_date: self.end_date,
            project: self
                .project_id
                .and_then(|id| reference.project_name(id).map(str::to_owned)),
            payer_type: self.payer_type,
        }
    }
}

impl Report {
    /// Aggregate a snapshot of payment records into a structured report.
    ///
    /// `records` should be ordered newest-first (as the storage layer returns
    /// them); ties in the top-transactions list keep that order. `generated_at`
    /// is injected by the caller so repeated generation over the same snapshot
    /// is deterministic.
    pub fn generate(
        records: &[Payment],
        reference: &ReferenceData,
        filters: &ReportFilters,
        generated_at: DateTime,
    ) -> Report {
        let payments: Vec<&Payment> = records
            .iter()
            .filter(|p| filters.matches(p, reference))
            .collect();
        let record_count = payments.len();

        let summary = summarize(&payments, generated_at);
        let payer_split = PayerSplit {
            owners: payer_bucket(&payments, PayerType::Owner),
            tenants: payer_bucket(&payments, PayerType::Tenant),
        };
        let projects = project_summaries(&payments, reference);
        let (monthly, quarterly, trend) = period_buckets(&payments);
        let top_transactions = top_transactions(&payments);
        let recommendations = recommend(&summary, projects.len(), trend.as_ref());

        Report {
            generated_at,
            filters: filters.applied(reference),
            record_count,
            summary,
            payer_split,
            projects,
            monthly,
            quarterly,
            trend,
            top_transactions,
            recommendations,
        }
    }
}

fn summarize(payments: &[&Payment], generated_at: DateTime) -> ReportSummary {
    let total_amount: Decimal = payments.iter().map(|p| p.amount).sum();
    let total_commission: Decimal = payments.iter().map(|p| p.company_commission).sum();
    let total_vat: Decimal = payments.iter().map(|p| p.vat_on_commission).sum();
    let net_to_owners: Decimal = payments.iter().map(|p| p.net_to_owner).sum();

    let count = payments.len();
    let commission_pct = if total_amount.is_zero() {
        Decimal::ZERO
    } else {
        total_commission / total_amount * Decimal::ONE_HUNDRED
    };
    let (avg_payment, avg_commission) = if count == 0 {
        (Decimal::ZERO, Decimal::ZERO)
    } else {
        let n = Decimal::from(count as u64);
        (total_amount / n, total_commission / n)
    };

    // Span from the oldest analyzed payment through the report date, inclusive
    let deals_per_day = match payments.iter().map(|p| p.date.date()).min() {
        Some(oldest) => {
            let days = (generated_at.date() - oldest).get_days() + 1;
            count as f64 / days.max(1) as f64
        }
        None => 0.0,
    };

    ReportSummary {
        total_amount,
        total_commission,
        total_vat,
        net_to_owners,
        commission_pct,
        avg_payment,
        avg_commission,
        deals_per_day,
    }
}

fn payer_bucket(payments: &[&Payment], payer_type: PayerType) -> PayerBucket {
    let mut count = 0usize;
    let mut total = Decimal::ZERO;
    for p in payments.iter().filter(|p| p.payer_type == payer_type) {
        count += 1;
        total += p.amount;
    }
    let average = if count == 0 {
        Decimal::ZERO
    } else {
        total / Decimal::from(count as u64)
    };
    let count_pct = if payments.is_empty() {
        Decimal::ZERO
    } else {
        Decimal::from(count as u64) / Decimal::from(payments.len() as u64) * Decimal::ONE_HUNDRED
    };
    PayerBucket {
        count,
        total,
        average,
        count_pct,
    }
}

fn project_summaries(payments: &[&Payment], reference: &ReferenceData) -> Vec<ProjectSummary> {
    let mut stats: FxHashMap<&str, (usize, Decimal, Decimal)> = FxHashMap::default();
    for p in payments {
        let label = reference.project_label_for_unit(p.unit_id);
        let entry = stats
            .entry(label)
            .or_insert((0, Decimal::ZERO, Decimal::ZERO));
        entry.0 += 1;
        entry.1 += p.amount;
        entry.2 += p.company_commission;
    }

    let mut projects: Vec<ProjectSummary> = stats
        .into_iter()
        .map(|(name, (count, total, commission))| ProjectSummary {
            name: name.to_owned(),
            count,
            total,
            commission,
        })
        .collect();
    // Descending by total; name as tiebreak so output is deterministic
    projects.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.name.cmp(&b.name)));
    projects
}

fn period_buckets(
    payments: &[&Payment],
) -> (Vec<MonthlyBucket>, Vec<QuarterlyBucket>, Option<Trend>) {
    let mut monthly: FxHashMap<(i16, i8), MonthlyBucket> = FxHashMap::default();
    let mut quarterly: FxHashMap<(i16, i8), QuarterlyBucket> = FxHashMap::default();

    for p in payments {
        let year = p.date.year();
        let month = p.date.month();
        let quarter = (month - 1) / 3 + 1;

        let m = monthly.entry((year, month)).or_insert(MonthlyBucket {
            year,
            month,
            count: 0,
            total: Decimal::ZERO,
            commission: Decimal::ZERO,
            owners: 0,
            tenants: 0,
        });
        m.count += 1;
        m.total += p.amount;
        m.commission += p.company_commission;
        match p.payer_type {
            PayerType::Owner => m.owners += 1,
            PayerType::Tenant => m.tenants += 1,
        }

        let q = quarterly.entry((year, quarter)).or_insert(QuarterlyBucket {
            year,
            quarter,
            count: 0,
            total: Decimal::ZERO,
            commission: Decimal::ZERO,
        });
        q.count += 1;
        q.total += p.amount;
        q.commission += p.company_commission;
    }

    let mut monthly: Vec<MonthlyBucket> = monthly.into_values().collect();
    monthly.sort_by(|a, b| (b.year, b.month).cmp(&(a.year, a.month)));

    let mut quarterly: Vec<QuarterlyBucket> = quarterly.into_values().collect();
    quarterly.sort_by(|a, b| (b.year, b.quarter).cmp(&(a.year, a.quarter)));

    // Trend compares the two most recent months before presentation trimming
    let trend = if monthly.len() >= 2 && !monthly[1].total.is_zero() {
        let growth_pct =
            (monthly[0].total - monthly[1].total) / monthly[1].total * Decimal::ONE_HUNDRED;
        Some(Trend { growth_pct })
    } else {
        None
    };

    monthly.truncate(MONTHLY_BUCKETS_PRESENTED);
    (monthly, quarterly, trend)
}

fn top_transactions(payments: &[&Payment]) -> Vec<TopTransaction> {
    let mut by_amount: Vec<&&Payment> = payments.iter().collect();
    // Stable sort: equal amounts keep their snapshot order
    by_amount.sort_by(|a, b| b.amount.cmp(&a.amount));
    by_amount
        .into_iter()
        .take(TOP_TRANSACTIONS_PRESENTED)
        .map(|p| TopTransaction {
            amount: p.amount,
            date: p.date,
            payer_type: p.payer_type,
            description: p.description.clone(),
        })
        .collect()
}

fn recommend(
    summary: &ReportSummary,
    project_count: usize,
    trend: Option<&Trend>,
) -> Vec<Recommendation> {
    let mut notes = Vec::new();

    if summary.commission_pct > Decimal::from(COMMISSION_PCT_HIGH) {
        notes.push(Recommendation::CommissionRateHigh);
    } else if summary.commission_pct < Decimal::from(COMMISSION_PCT_LOW) {
        notes.push(Recommendation::CommissionRateLow);
    }

    if project_count > PROJECT_SPREAD_WIDE {
        notes.push(Recommendation::WellDiversified);
    } else if project_count <= PROJECT_SPREAD_NARROW {
        notes.push(Recommendation::ConcentratedProjects);
    }

    if let Some(trend) = trend {
        if trend.growth_pct > Decimal::from(GROWTH_PCT_STRONG) {
            notes.push(Recommendation::StrongGrowth);
        } else if trend.growth_pct < Decimal::from(GROWTH_PCT_DECLINE) {
            notes.push(Recommendation::RevenueDecline);
        }
    }

    notes
}
