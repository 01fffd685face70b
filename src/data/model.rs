use std::collections::BTreeSet;

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// CatalogRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single catalog entry (one row of the source dataset).
///
/// Rows whose `date_added` could not be parsed are dropped at load time, so
/// `date_added` / `year_added` are always present here. The multi-valued
/// fields (`country`, `listed_in`, `cast`, `director`) keep their raw
/// `", "`-joined form; splitting happens in the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRecord {
    /// Display title. Not used by any filter.
    pub title: String,
    /// Content type, e.g. "Movie" or "TV Show".
    pub content_type: String,
    /// Rating code ("TV-MA", "PG", ...); absent when the source cell is empty.
    pub rating: Option<String>,
    /// Zero or more country names joined by `", "`.
    pub country: Option<String>,
    /// Zero or more genre names joined by `", "`.
    pub listed_in: Option<String>,
    /// Zero or more actor names joined by `", "`.
    pub cast: Option<String>,
    /// Zero or more director names joined by `", "`.
    pub director: Option<String>,
    /// Date the title was added to the catalog.
    pub date_added: NaiveDate,
    /// Calendar year of `date_added`.
    pub year_added: i32,
}

// ---------------------------------------------------------------------------
// CatalogDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed derived columns.
///
/// Built once at startup and shared by reference into every query; nothing
/// mutates it afterwards, so unsynchronized concurrent reads are fine.
#[derive(Debug, Clone)]
pub struct CatalogDataset {
    /// All records (rows), in source order.
    pub records: Vec<CatalogRecord>,
    /// Smallest `year_added` across all records.
    pub min_year: i32,
    /// Largest `year_added` across all records.
    pub max_year: i32,
    /// Sorted distinct `content_type` values, for the type selector.
    pub content_types: Vec<String>,
    /// Sorted distinct rating codes present in the data, for the rating
    /// selector. Records without a rating contribute nothing.
    pub ratings: Vec<String>,
}

impl CatalogDataset {
    /// Build the dataset and its derived columns from loaded records.
    /// Returns `None` for an empty record set (no min/max year exists).
    pub fn from_records(records: Vec<CatalogRecord>) -> Option<Self> {
        let first_year = records.first()?.year_added;
        let (mut min_year, mut max_year) = (first_year, first_year);

        let mut content_types: BTreeSet<String> = BTreeSet::new();
        let mut ratings: BTreeSet<String> = BTreeSet::new();

        for rec in &records {
            min_year = min_year.min(rec.year_added);
            max_year = max_year.max(rec.year_added);
            content_types.insert(rec.content_type.clone());
            if let Some(rating) = &rec.rating {
                ratings.insert(rating.clone());
            }
        }

        Some(CatalogDataset {
            records,
            min_year,
            max_year,
            content_types: content_types.into_iter().collect(),
            ratings: ratings.into_iter().collect(),
        })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------


#[cfg(test)]
mod tests {
    use super::testing::record;
    use super::*;

    #[test]
    fn from_records_rejects_empty() {
        assert!(CatalogDataset::from_records(Vec::new()).is_none());
    }

    #[test]
    fn derived_columns() {
        let ds = CatalogDataset::from_records(vec![
            record("Movie", Some("PG"), None, 2019),
            record("TV Show", Some("TV-MA"), None, 2016),
            record("Movie", None, None, 2021),
        ])
        .unwrap();

        assert_eq!(ds.len(), 3);
        assert_eq!((ds.min_year, ds.max_year), (2016, 2021));
        assert_eq!(ds.content_types, vec!["Movie", "TV Show"]);
        // Missing ratings contribute nothing to the selector options.
        assert_eq!(ds.ratings, vec!["PG", "TV-MA"]);
    }
}
