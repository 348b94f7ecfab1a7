// Report assembly: frequency tables -> ranked sections -> text

mod ranking;
mod render;

pub use ranking::{rank, rank_table};
pub use render::{ConsoleRenderer, PlainRenderer, Renderer, render};

use crate::aggregator::FleetTables;
use crate::models::{FrequencyTable, NestedFrequencyTable};

/// Report sections, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    NonNormalByMode,
    NonIncome,
    FreezeEnv,
    Maintenance,
    MaintenanceByType,
}

impl SectionKind {
    pub const ALL: [SectionKind; 5] = [
        SectionKind::NonNormalByMode,
        SectionKind::NonIncome,
        SectionKind::FreezeEnv,
        SectionKind::Maintenance,
        SectionKind::MaintenanceByType,
    ];

    /// Header text; the grand total is appended after a colon.
    pub fn header(&self) -> &'static str {
        match self {
            SectionKind::NonNormalByMode => "Total servers with non-normal mode",
            SectionKind::NonIncome => "Total Servers that CANNOT generate Income",
            SectionKind::FreezeEnv => "Total servers in AGENT_MODE_FREEZE_ENV empty",
            SectionKind::Maintenance => "Total servers in AGENT_MODE_MAINTENANCE",
            SectionKind::MaintenanceByType => "Total servers in AGENT_MODE_MAINTENANCE by type",
        }
    }

    pub fn subheading(&self) -> &'static str {
        match self {
            SectionKind::NonNormalByMode => "Breakdown by location and mode:",
            SectionKind::NonIncome | SectionKind::FreezeEnv => "Breakdown by location:",
            SectionKind::Maintenance => "Servers in AGENT_MODE_MAINTENANCE per location:",
            SectionKind::MaintenanceByType => {
                "Servers in AGENT_MODE_MAINTENANCE per location and type:"
            }
        }
    }

    pub fn is_nested(&self) -> bool {
        matches!(
            self,
            SectionKind::NonNormalByMode | SectionKind::MaintenanceByType
        )
    }
}

/// One ranked location. `breakdown` is empty for flat sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub key: String,
    pub count: u64,
    pub breakdown: Vec<(String, u64)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub total: u64,
    pub entries: Vec<RankedEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetReport {
    pub sections: Vec<Section>,
}

impl FleetReport {
    pub fn from_tables(tables: &FleetTables) -> Self {
        let sections = SectionKind::ALL
            .iter()
            .map(|&kind| match kind {
                SectionKind::NonNormalByMode => nested_section(
                    kind,
                    &tables.non_normal_by_location,
                    &tables.non_normal_by_location_and_mode,
                ),
                SectionKind::NonIncome => flat_section(kind, &tables.non_income_by_location),
                SectionKind::FreezeEnv => flat_section(kind, &tables.freeze_env_by_location),
                SectionKind::Maintenance => flat_section(kind, &tables.maintenance_by_location),
                SectionKind::MaintenanceByType => nested_section(
                    kind,
                    tables.maintenance_by_location_and_type.totals(),
                    &tables.maintenance_by_location_and_type,
                ),
            })
            .collect();
        Self { sections }
    }

    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }
}

fn flat_section(kind: SectionKind, table: &FrequencyTable) -> Section {
    let entries = rank_table(table)
        .into_iter()
        .map(|(key, count)| RankedEntry {
            key,
            count,
            breakdown: Vec::new(),
        })
        .collect();
    Section {
        kind,
        total: table.total(),
        entries,
    }
}

/// Locations are ranked by `totals`; each carries its own ranked submetrics.
fn nested_section(
    kind: SectionKind,
    totals: &FrequencyTable,
    nested: &NestedFrequencyTable,
) -> Section {
    let entries = rank_table(totals)
        .into_iter()
        .map(|(key, count)| {
            let breakdown = nested.get(&key).map(rank_table).unwrap_or_default();
            RankedEntry {
                key,
                count,
                breakdown,
            }
        })
        .collect();
    Section {
        kind,
        total: totals.total(),
        entries,
    }
}
