//! Ledger snapshot storage
//!
//! The CLI works over a single JSON snapshot file holding the payment history
//! plus the project/unit reference slice. Payments carry their persisted
//! breakdown fields; loading never recomputes them.

use std::fs;
use std::io;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use jiff::civil::datetime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use rentledger_core::breakdown::{default_company_rate, default_vat_rate};
use rentledger_core::model::{
    PayerId, PayerType, Payment, PaymentId, Project, ProjectId, ReferenceData, Unit, UnitId,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ledger {
    pub projects: Vec<Project>,
    pub units: Vec<Unit>,
    pub payments: Vec<Payment>,
}

impl Ledger {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read ledger file {}", path.display()))?;
        let ledger: Ledger = serde_json::from_str(&text)
            .wrap_err_with(|| format!("failed to parse ledger file {}", path.display()))?;
        tracing::debug!(
            payments = ledger.payments.len(),
            projects = ledger.projects.len(),
            "ledger loaded"
        );
        Ok(ledger)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        atomic_write(path, &text)
            .wrap_err_with(|| format!("failed to write ledger file {}", path.display()))?;
        Ok(())
    }

    /// Lookup tables for report generation.
    pub fn reference(&self) -> ReferenceData {
        ReferenceData::new(&self.projects, &self.units)
    }

    /// Payments ordered newest-first, the ordering the reporting layer
    /// expects from storage.
    pub fn payments_desc(&self) -> Vec<Payment> {
        let mut payments = self.payments.clone();
        payments.sort_by(|a, b| b.date.cmp(&a.date));
        payments
    }

    /// A small demo ledger: three projects, six units, six payments over six
    /// months at the default 5%/15% rates.
    pub fn seed() -> Self {
        let projects = vec![
            Project {
                id: ProjectId(1),
                name: "Harborview Residences".into(),
            },
            Project {
                id: ProjectId(2),
                name: "Palm Cluster".into(),
            },
            Project {
                id: ProjectId(3),
                name: "Sunrise Tower".into(),
            },
        ];
        let units = (1..=6u32)
            .map(|i| Unit {
                id: UnitId(i),
                project_id: ProjectId((i - 1) / 2 + 1),
            })
            .collect();

        let mut payments: Vec<Payment> = (1..=6u32)
            .map(|i| {
                let payer_type = if i % 2 == 1 {
                    PayerType::Tenant
                } else {
                    PayerType::Owner
                };
                Payment::new(
                    PaymentId(i),
                    UnitId(i),
                    payer_type,
                    PayerId(1),
                    Decimal::from(4000 + 500 * i as i64),
                    datetime(2024, i as i8, 15, 10, 0, 0, 0),
                    Some(format!("Demo payment {i}")),
                    default_company_rate(),
                    default_vat_rate(),
                )
            })
            .collect();
        payments.sort_by(|a, b| b.date.cmp(&a.date));

        Self {
            projects,
            units,
            payments,
        }
    }
}

/// Write content to a file via write-then-rename so an interrupted run never
/// leaves a truncated snapshot behind.
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}
