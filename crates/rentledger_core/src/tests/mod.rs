//! Integration tests for the payment accounting core
//!
//! Tests are organized by topic:
//! - `aggregate` - report generation, filtering, grouping, recommendations
//! - `render` - text rendering, section ordering, empty-data omission
//!
//! Shared fixtures live here.

mod render;

use jiff::civil::{DateTime, datetime};
use rust_decimal::Decimal;

use crate::model::{
    PayerId, PayerType, Payment, PaymentId, Project, ProjectId, ReferenceData, Unit, UnitId,
};

pub fn rate() -> Decimal {
    Decimal::new(5, 2) // 5%
}

pub fn vat() -> Decimal {
    Decimal::new(15, 2) // 15%
}

/// Two projects, three units; unit 3 intentionally points at a missing
/// project so fallback labelling is exercised.
pub fn reference() -> ReferenceData {
    let projects = vec![
        Project {
            id: ProjectId(1),
            name: "Harborview".into(),
        },
        Project {
            id: ProjectId(2),
            name: "Palm Cluster".into(),
        },
    ];
    let units = vec![
        Unit {
            id: UnitId(1),
            project_id: ProjectId(1),
        },
        Unit {
            id: UnitId(2),
            project_id: ProjectId(2),
        },
        Unit {
            id: UnitId(3),
            project_id: ProjectId(99),
        },
    ];
    ReferenceData::new(&projects, &units)
}

pub fn payment(
    id: u32,
    unit: u32,
    payer_type: PayerType,
    amount: Decimal,
    date: DateTime,
) -> Payment {
    Payment::new(
        PaymentId(id),
        UnitId(unit),
        payer_type,
        PayerId(1),
        amount,
        date,
        None,
        rate(),
        vat(),
    )
}

/// The canonical two-record fixture: one tenant payment in January, one owner
/// payment in February, newest first.
pub fn two_record_fixture() -> Vec<Payment> {
    vec![
        payment(
            2,
            2,
            PayerType::Owner,
            Decimal::from(5000),
            datetime(2024, 2, 10, 12, 0, 0, 0),
        ),
        payment(
            1,
            1,
            PayerType::Tenant,
            Decimal::from(4500),
            datetime(2024, 1, 15, 12, 0, 0, 0),
        ),
    ]
}

pub fn report_time() -> DateTime {
    datetime(2024, 2, 29, 8, 0, 0, 0)
}
