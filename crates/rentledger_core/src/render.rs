//! Plain-text rendering of a generated report
//!
//! Section order is fixed: header, applied filters, executive summary, payer
//! breakdown, project breakdown, monthly table, quarterly breakdown, KPIs,
//! top transactions, recommendations, footer. Sections whose data is empty
//! are omitted rather than rendered as placeholders.

use std::fmt::Write;

use crate::format::{format_amount, format_pct1, format_pct2, format_signed_pct2};
use crate::model::{PayerType, Report};

const BOX_WIDTH: usize = 78;
const RULE_WIDTH: usize = 50;
const TABLE_RULE_WIDTH: usize = 70;

fn boxed_title(out: &mut String, title: &str) {
    let _ = writeln!(out, "+{}+", "=".repeat(BOX_WIDTH));
    let _ = writeln!(out, "|{title:^BOX_WIDTH$}|");
    let _ = writeln!(out, "+{}+", "=".repeat(BOX_WIDTH));
}

fn section(out: &mut String, title: &str, rule: char) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(
        out,
        "{}",
        rule.to_string().repeat(RULE_WIDTH)
    );
}

impl Report {
    /// Render the report as a human-readable text document, suitable for
    /// direct inclusion in downloadable report files.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        // Header
        boxed_title(&mut out, "COMPREHENSIVE PAYMENT REPORT");
        out.push('\n');
        let _ = writeln!(
            out,
            "Generated: {}",
            self.generated_at.strftime("%Y-%m-%d %H:%M:%S")
        );
        let _ = writeln!(out, "Records analyzed: {}", self.record_count);
        out.push('\n');

        // Applied filters
        if !self.filters.is_empty() {
            section(&mut out, "Applied filters:", '-');
            if let Some(start) = self.filters.start_date {
                let _ = writeln!(out, "  From: {start}");
            }
            if let Some(end) = self.filters.end_date {
                let _ = writeln!(out, "  To: {end}");
            }
            if let Some(project) = &self.filters.project {
                let _ = writeln!(out, "  Project: {project}");
            }
            if let Some(payer_type) = self.filters.payer_type {
                let _ = writeln!(out, "  Payer type: {payer_type}");
            }
            out.push('\n');
        }

        // Executive summary
        let s = &self.summary;
        section(&mut out, "EXECUTIVE SUMMARY", '=');
        let _ = writeln!(out, "Total payments:     {}", format_amount(s.total_amount));
        let _ = writeln!(
            out,
            "Total commissions:  {} ({})",
            format_amount(s.total_commission),
            format_pct1(s.commission_pct)
        );
        let _ = writeln!(out, "Total VAT:          {}", format_amount(s.total_vat));
        let _ = writeln!(out, "Net to owners:      {}", format_amount(s.net_to_owners));
        out.push('\n');
        let _ = writeln!(out, "Average payment:    {}", format_amount(s.avg_payment));
        let _ = writeln!(
            out,
            "Average commission: {}",
            format_amount(s.avg_commission)
        );
        if let Some(trend) = &self.trend {
            let _ = writeln!(
                out,
                "Month-over-month growth: {}",
                format_signed_pct2(trend.growth_pct)
            );
        }
        out.push('\n');

        // Payer breakdown
        section(&mut out, "PAYER BREAKDOWN", '-');
        let owners = &self.payer_split.owners;
        let _ = writeln!(
            out,
            "Owner payments: {} ({})",
            owners.count,
            format_pct1(owners.count_pct)
        );
        if owners.count > 0 {
            let _ = writeln!(out, "   Total:   {}", format_amount(owners.total));
            let _ = writeln!(out, "   Average: {}", format_amount(owners.average));
        }
        let tenants = &self.payer_split.tenants;
        let _ = writeln!(
            out,
            "Tenant payments: {} ({})",
            tenants.count,
            format_pct1(tenants.count_pct)
        );
        if tenants.count > 0 {
            let _ = writeln!(out, "   Total:   {}", format_amount(tenants.total));
            let _ = writeln!(out, "   Average: {}", format_amount(tenants.average));
        }
        out.push('\n');

        // Project breakdown
        if !self.projects.is_empty() {
            section(&mut out, "PROJECT BREAKDOWN", '-');
            for project in &self.projects {
                let share = if s.total_amount.is_zero() {
                    rust_decimal::Decimal::ZERO
                } else {
                    project.total / s.total_amount * rust_decimal::Decimal::ONE_HUNDRED
                };
                let _ = writeln!(out, "{}", project.name);
                let _ = writeln!(out, "   Payments:    {}", project.count);
                let _ = writeln!(
                    out,
                    "   Total:       {} ({})",
                    format_amount(project.total),
                    format_pct1(share)
                );
                let _ = writeln!(out, "   Commissions: {}", format_amount(project.commission));
                out.push('\n');
            }
        }

        // Monthly table
        if !self.monthly.is_empty() {
            section(&mut out, "MONTHLY ANALYSIS", '-');
            let _ = writeln!(
                out,
                "Month      | Count  | Owners  | Tenants   |        Amount | Commission"
            );
            let _ = writeln!(out, "{}", "-".repeat(TABLE_RULE_WIDTH));
            for bucket in &self.monthly {
                let _ = writeln!(
                    out,
                    "{:<10} | {:<6} | {:<7} | {:<9} | {:>13} | {:>10}",
                    bucket.label(),
                    bucket.count,
                    bucket.owners,
                    bucket.tenants,
                    format_amount(bucket.total),
                    format_amount(bucket.commission)
                );
            }
            out.push('\n');
        }

        // Quarterly breakdown
        if !self.quarterly.is_empty() {
            section(&mut out, "QUARTERLY ANALYSIS", '-');
            for bucket in &self.quarterly {
                let _ = writeln!(out, "{}", bucket.label());
                let _ = writeln!(out, "   Payments:    {}", bucket.count);
                let _ = writeln!(out, "   Total:       {}", format_amount(bucket.total));
                let _ = writeln!(out, "   Commissions: {}", format_amount(bucket.commission));
                out.push('\n');
            }
        }

        // KPIs
        section(&mut out, "KEY PERFORMANCE INDICATORS", '-');
        let _ = writeln!(out, "Commission rate:   {}", format_pct2(s.commission_pct));
        let _ = writeln!(out, "Average deal size: {}", format_amount(s.avg_payment));
        let _ = writeln!(out, "Deals per day:     {:.1}", s.deals_per_day);
        let _ = writeln!(out, "Project diversity: {} projects", self.projects.len());
        out.push('\n');

        // Top transactions
        if !self.top_transactions.is_empty() {
            section(&mut out, "TOP TRANSACTIONS", '-');
            for (i, tx) in self.top_transactions.iter().enumerate() {
                let _ = writeln!(out, "{}. {}", i + 1, format_amount(tx.amount));
                let _ = writeln!(out, "   {}", tx.date.strftime("%Y-%m-%d"));
                let _ = writeln!(
                    out,
                    "   {}",
                    match tx.payer_type {
                        PayerType::Owner => "Owner",
                        PayerType::Tenant => "Tenant",
                    }
                );
                if let Some(description) = &tx.description {
                    let _ = writeln!(out, "   {description}");
                }
                out.push('\n');
            }
        }

        // Recommendations
        section(&mut out, "RECOMMENDATIONS", '-');
        for note in &self.recommendations {
            let _ = writeln!(out, "- {note}");
        }
        out.push('\n');

        // Footer
        boxed_title(&mut out, "END OF REPORT");
        out.push('\n');
        let _ = writeln!(out, "Report reflects the ledger snapshot at generation time.");
        let _ = writeln!(
            out,
            "Generated at {}",
            self.generated_at.strftime("%H:%M:%S")
        );

        out
    }
}
