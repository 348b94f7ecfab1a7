// Frequency tables: flat (key -> count) and nested (key -> submetric -> count)

use std::collections::HashMap;

/// Count per key. Keys appear on first increment; absent keys read as 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: &str) {
        self.add(key, 1);
    }

    pub fn add(&mut self, key: &str, n: u64) {
        if let Some(count) = self.counts.get_mut(key) {
            *count += n;
        } else {
            self.counts.insert(key.to_string(), n);
        }
    }

    pub fn get(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Sum over all keys.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Unordered; use `report::rank` for a deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn merge(&mut self, other: FrequencyTable) {
        for (key, n) in other.counts {
            *self.counts.entry(key).or_insert(0) += n;
        }
    }
}

/// Two-level table. `totals` always equals the per-key sum of `cells`, since both are only
/// ever bumped together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NestedFrequencyTable {
    totals: FrequencyTable,
    cells: HashMap<String, FrequencyTable>,
}

impl NestedFrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, key: &str, submetric: &str) {
        self.totals.increment(key);
        if let Some(inner) = self.cells.get_mut(key) {
            inner.increment(submetric);
        } else {
            let mut inner = FrequencyTable::new();
            inner.increment(submetric);
            self.cells.insert(key.to_string(), inner);
        }
    }

    /// Per-key totals (sum of each key's submetric counts).
    pub fn totals(&self) -> &FrequencyTable {
        &self.totals
    }

    pub fn get(&self, key: &str) -> Option<&FrequencyTable> {
        self.cells.get(key)
    }

    /// Sum over all keys and submetrics.
    pub fn total(&self) -> u64 {
        self.totals.total()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Unordered `(key, submetrics)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FrequencyTable)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn merge(&mut self, other: NestedFrequencyTable) {
        self.totals.merge(other.totals);
        for (key, inner) in other.cells {
            self.cells.entry(key).or_default().merge(inner);
        }
    }
}
