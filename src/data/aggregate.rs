use std::collections::{BTreeMap, HashMap};

use super::model::{CatalogDataset, CatalogRecord};

/// Multi-valued fields join their items with this literal.
const ITEM_DELIMITER: &str = ", ";

// ---------------------------------------------------------------------------
// Multi-value explosion
// ---------------------------------------------------------------------------

/// Top-`k` frequency table over a `", "`-joined multi-value field.
///
/// Every record in the view contributes one occurrence per non-empty item in
/// its field value; absent values contribute nothing. Entries come back
/// ordered by count descending; among equal counts the item seen first in
/// the view wins (stable sort over first-seen order), so the result is
/// deterministic. At most `k` entries, never one with count 0.
pub fn top_k_exploded<F>(
    dataset: &CatalogDataset,
    indices: &[usize],
    field: F,
    k: usize,
) -> Vec<(String, u64)>
where
    F: Fn(&CatalogRecord) -> Option<&str>,
{
    // Tally in first-seen order so the later stable sort breaks ties by it.
    let mut tally: Vec<(String, u64)> = Vec::new();
    let mut slot: HashMap<String, usize> = HashMap::new();

    for &i in indices {
        let Some(raw) = field(&dataset.records[i]) else {
            continue;
        };
        for item in raw.split(ITEM_DELIMITER).filter(|s| !s.is_empty()) {
            match slot.get(item) {
                Some(&at) => tally[at].1 += 1,
                None => {
                    slot.insert(item.to_string(), tally.len());
                    tally.push((item.to_string(), 1));
                }
            }
        }
    }

    tally.sort_by(|a, b| b.1.cmp(&a.1));
    tally.truncate(k);
    tally
}

// ---------------------------------------------------------------------------
// Single-value counting
// ---------------------------------------------------------------------------

/// Frequency table over a scalar key, ordered by key ascending.
///
/// Used for the per-year time series: each distinct key in the view appears
/// exactly once, and keys absent from the view are absent from the result
/// (gaps are preserved, not zero-filled).
pub fn count_by_key<K, F>(dataset: &CatalogDataset, indices: &[usize], key: F) -> Vec<(K, u64)>
where
    K: Ord,
    F: Fn(&CatalogRecord) -> K,
{
    let mut counts: BTreeMap<K, u64> = BTreeMap::new();
    for &i in indices {
        *counts.entry(key(&dataset.records[i])).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::testing::record;

    fn dataset() -> CatalogDataset {
        CatalogDataset::from_records(vec![
            record("Movie", None, Some("USA, Canada"), 2019),
            record("Movie", None, Some("USA"), 2020),
            record("TV Show", None, None, 2020),
            record("Movie", None, Some("India, Canada, USA"), 2022),
        ])
        .unwrap()
    }

    fn all_indices(ds: &CatalogDataset) -> Vec<usize> {
        (0..ds.len()).collect()
    }

    #[test]
    fn explodes_and_counts_items() {
        let ds = dataset();
        let top = top_k_exploded(&ds, &all_indices(&ds), |r| r.country.as_deref(), 10);
        assert_eq!(
            top,
            vec![
                ("USA".to_string(), 3),
                ("Canada".to_string(), 2),
                ("India".to_string(), 1),
            ]
        );
    }

    #[test]
    fn ties_break_by_first_seen_order() {
        let ds = CatalogDataset::from_records(vec![
            record("Movie", None, Some("Japan, France"), 2020),
            record("Movie", None, Some("France, Japan"), 2020),
            record("Movie", None, Some("Spain"), 2020),
        ])
        .unwrap();
        let top = top_k_exploded(&ds, &all_indices(&ds), |r| r.country.as_deref(), 10);
        assert_eq!(
            top,
            vec![
                ("Japan".to_string(), 2),
                ("France".to_string(), 2),
                ("Spain".to_string(), 1),
            ]
        );
    }

    #[test]
    fn at_most_k_entries() {
        let ds = dataset();
        let top = top_k_exploded(&ds, &all_indices(&ds), |r| r.country.as_deref(), 2);
        assert_eq!(top.len(), 2);
        assert!(top.iter().all(|(_, n)| *n > 0));
    }

    #[test]
    fn counts_conserve_total_items() {
        let ds = dataset();
        let total_items: u64 = ds
            .records
            .iter()
            .filter_map(|r| r.country.as_deref())
            .map(|raw| raw.split(", ").filter(|s| !s.is_empty()).count() as u64)
            .sum();
        let full = top_k_exploded(&ds, &all_indices(&ds), |r| r.country.as_deref(), usize::MAX);
        assert_eq!(full.iter().map(|(_, n)| n).sum::<u64>(), total_items);
    }

    #[test]
    fn absent_values_contribute_nothing() {
        let ds = dataset();
        // Only record 2 (no country) selected: nothing to tally.
        assert!(top_k_exploded(&ds, &[2], |r| r.country.as_deref(), 10).is_empty());
    }

    #[test]
    fn count_by_key_orders_by_key_and_keeps_gaps() {
        let ds = dataset();
        let per_year = count_by_key(&ds, &all_indices(&ds), |r| r.year_added);
        // 2021 is absent from the data and stays absent from the series.
        assert_eq!(per_year, vec![(2019, 1), (2020, 2), (2022, 1)]);
    }
}
