// Single-pass fold of classified records into the six report tables

use crate::classifier::classify;
use crate::models::{FrequencyTable, NestedFrequencyTable, ServerRecord};

/// All tables for one run. Built by `aggregate`, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FleetTables {
    pub non_normal_by_location: FrequencyTable,
    pub non_normal_by_location_and_mode: NestedFrequencyTable,
    pub maintenance_by_location: FrequencyTable,
    pub maintenance_by_location_and_type: NestedFrequencyTable,
    pub non_income_by_location: FrequencyTable,
    pub freeze_env_by_location: FrequencyTable,
}

impl FleetTables {
    /// Fold step: accumulate one record.
    pub fn record(mut self, server: &ServerRecord) -> Self {
        let categories = classify(server);
        let location = server.location.as_str();

        if categories.non_normal {
            self.non_normal_by_location.increment(location);
            self.non_normal_by_location_and_mode
                .increment(location, &server.mode);
        }
        if categories.maintenance {
            self.maintenance_by_location.increment(location);
            self.maintenance_by_location_and_type
                .increment(location, &server.kind);
        }
        if categories.non_income {
            self.non_income_by_location.increment(location);
        }
        if categories.freeze_env_empty {
            self.freeze_env_by_location.increment(location);
        }
        self
    }

    /// Combine tables built from disjoint inputs (e.g. one shard per location).
    pub fn merge(&mut self, other: FleetTables) {
        self.non_normal_by_location
            .merge(other.non_normal_by_location);
        self.non_normal_by_location_and_mode
            .merge(other.non_normal_by_location_and_mode);
        self.maintenance_by_location
            .merge(other.maintenance_by_location);
        self.maintenance_by_location_and_type
            .merge(other.maintenance_by_location_and_type);
        self.non_income_by_location
            .merge(other.non_income_by_location);
        self.freeze_env_by_location
            .merge(other.freeze_env_by_location);
    }
}

/// Aggregates every record exactly once. Order-independent.
pub fn aggregate<'a, I>(records: I) -> FleetTables
where
    I: IntoIterator<Item = &'a ServerRecord>,
{
    records
        .into_iter()
        .fold(FleetTables::default(), FleetTables::record)
}
