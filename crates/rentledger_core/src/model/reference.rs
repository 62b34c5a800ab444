//! Project and unit reference data
//!
//! The aggregator only needs enough reference data to resolve a payment's
//! unit to a project name. Payments whose unit or project cannot be resolved
//! fall back to [`ReferenceData::UNASSIGNED`] rather than failing.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Unique identifier for a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub u32);

/// Unique identifier for a rental unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnitId(pub u32);

/// A development project grouping rental units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
}

/// A rental unit belonging to a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub project_id: ProjectId,
}

/// Indexed lookup tables built once per report invocation.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    unit_projects: FxHashMap<UnitId, ProjectId>,
    project_names: FxHashMap<ProjectId, String>,
}

impl ReferenceData {
    /// Label used when a payment's project cannot be resolved.
    pub const UNASSIGNED: &'static str = "Unassigned";

    pub fn new(projects: &[Project], units: &[Unit]) -> Self {
        let unit_projects = units.iter().map(|u| (u.id, u.project_id)).collect();
        let project_names = projects
            .iter()
            .map(|p| (p.id, p.name.clone()))
            .collect();
        Self {
            unit_projects,
            project_names,
        }
    }

    /// Project a unit belongs to, if known.
    pub fn project_of_unit(&self, unit_id: UnitId) -> Option<ProjectId> {
        self.unit_projects.get(&unit_id).copied()
    }

    /// Display name of a project, if known.
    pub fn project_name(&self, project_id: ProjectId) -> Option<&str> {
        self.project_names.get(&project_id).map(String::as_str)
    }

    /// Resolve a unit straight to its project's display name, falling back
    /// to [`Self::UNASSIGNED`] when either link is missing.
    pub fn project_label_for_unit(&self, unit_id: UnitId) -> &str {
        self.project_of_unit(unit_id)
            .and_then(|pid| self.project_name(pid))
            .unwrap_or(Self::UNASSIGNED)
    }
}
