// Deterministic ordering shared by every table: count descending, then key ascending.

use std::cmp::Ordering;

use crate::models::FrequencyTable;

fn by_count_then_key<K: Ord, C: Ord>(a: &(K, C), b: &(K, C)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

/// Sorts `(key, count)` pairs by count descending; equal counts fall back to key order.
pub fn rank<K, C, I>(pairs: I) -> Vec<(K, C)>
where
    I: IntoIterator<Item = (K, C)>,
    K: Ord,
    C: Ord,
{
    let mut out: Vec<(K, C)> = pairs.into_iter().collect();
    out.sort_by(by_count_then_key);
    out
}

pub fn rank_table(table: &FrequencyTable) -> Vec<(String, u64)> {
    rank(table.iter().map(|(k, n)| (k.to_string(), n)))
}
