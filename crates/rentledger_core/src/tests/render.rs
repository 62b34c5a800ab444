//! Text rendering: section ordering, value formatting, empty-data omission

use jiff::civil::date;
use rust_decimal_macros::dec;

use super::{reference, report_time, two_record_fixture};
use crate::model::{PayerType, Report};
use crate::report::ReportFilters;

fn section_positions(text: &str, sections: &[&str]) -> Vec<usize> {
    sections
        .iter()
        .map(|s| text.find(s).unwrap_or_else(|| panic!("missing section {s}")))
        .collect()
}

#[test]
fn test_sections_appear_in_fixed_order() {
    let records = two_record_fixture();
    let filters = ReportFilters {
        start_date: Some(date(2024, 1, 1)),
        ..Default::default()
    };
    let report = Report::generate(&records, &reference(), &filters, report_time());
    let text = report.to_text();

    let positions = section_positions(
        &text,
        &[
            "COMPREHENSIVE PAYMENT REPORT",
            "Applied filters:",
            "EXECUTIVE SUMMARY",
            "PAYER BREAKDOWN",
            "PROJECT BREAKDOWN",
            "MONTHLY ANALYSIS",
            "QUARTERLY ANALYSIS",
            "KEY PERFORMANCE INDICATORS",
            "TOP TRANSACTIONS",
            "RECOMMENDATIONS",
            "END OF REPORT",
        ],
    );
    for pair in positions.windows(2) {
        assert!(pair[0] < pair[1], "sections out of order");
    }
}

#[test]
fn test_empty_report_omits_data_sections() {
    let report = Report::generate(&[], &reference(), &ReportFilters::default(), report_time());
    let text = report.to_text();

    assert!(text.contains("Records analyzed: 0"));
    assert!(text.contains("Total payments:     0.00"));
    assert!(!text.contains("Applied filters:"));
    assert!(!text.contains("PROJECT BREAKDOWN"));
    assert!(!text.contains("MONTHLY ANALYSIS"));
    assert!(!text.contains("QUARTERLY ANALYSIS"));
    assert!(!text.contains("TOP TRANSACTIONS"));
    assert!(!text.contains("Month-over-month growth"));
    // Fixed sections are always present
    assert!(text.contains("EXECUTIVE SUMMARY"));
    assert!(text.contains("PAYER BREAKDOWN"));
    assert!(text.contains("KEY PERFORMANCE INDICATORS"));
}

#[test]
fn test_values_use_thousands_separators() {
    let records = two_record_fixture();
    let report = Report::generate(
        &records,
        &reference(),
        &ReportFilters::default(),
        report_time(),
    );
    let text = report.to_text();

    assert!(text.contains("9,500.00"));
    assert!(text.contains("4,500.00"));
    assert!(text.contains("(5.0%)"));
}

#[test]
fn test_filters_are_echoed() {
    let records = two_record_fixture();
    let filters = ReportFilters {
        start_date: Some(date(2024, 1, 1)),
        end_date: Some(date(2024, 12, 31)),
        project_id: Some(crate::model::ProjectId(2)),
        payer_type: Some(PayerType::Owner),
    };
    let report = Report::generate(&records, &reference(), &filters, report_time());
    let text = report.to_text();

    assert!(text.contains("From: 2024-01-01"));
    assert!(text.contains("To: 2024-12-31"));
    assert!(text.contains("Project: Palm Cluster"));
    assert!(text.contains("Payer type: owner"));
}

#[test]
fn test_growth_line_carries_sign() {
    let records = two_record_fixture();
    let report = Report::generate(
        &records,
        &reference(),
        &ReportFilters::default(),
        report_time(),
    );
    let text = report.to_text();

    assert!(text.contains("Month-over-month growth: +11.11%"));
    assert_eq!(report.trend.unwrap().growth_pct.round_dp(2), dec!(11.11));
}
