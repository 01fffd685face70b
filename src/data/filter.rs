use super::model::CatalogDataset;

// ---------------------------------------------------------------------------
// Filter selection: which predicates are active for one query
// ---------------------------------------------------------------------------

/// The active filter predicates for a single query, as an immutable value.
/// Built fresh from the user's selections each time; never ambient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    /// Exact match on `content_type`; `None` means "All" (no constraint).
    pub content_type: Option<String>,
    /// Exact match on the rating code; `None` means no constraint.
    pub rating_code: Option<String>,
    /// Closed interval on `year_added`. An inverted or out-of-range
    /// interval simply matches fewer rows; it is never an error.
    pub year_range: (i32, i32),
}

impl FilterSelection {
    /// The no-filter selection: everything, over the full year span.
    pub fn unfiltered(dataset: &CatalogDataset) -> Self {
        FilterSelection {
            content_type: None,
            rating_code: None,
            year_range: (dataset.min_year, dataset.max_year),
        }
    }

    /// The default selection: no type or rating constraint, year window
    /// `(2010, 2021)` clamped into the dataset's span.
    pub fn default_for(dataset: &CatalogDataset) -> Self {
        let lo = 2010_i32.clamp(dataset.min_year, dataset.max_year);
        let hi = 2021_i32.clamp(dataset.min_year, dataset.max_year);
        FilterSelection {
            content_type: None,
            rating_code: None,
            year_range: (lo, hi),
        }
    }
}

/// Return indices of records that pass all active filters, in source order.
///
/// A record passes when:
/// * `content_type` is unset, or equals the record's type
/// * `rating_code` is unset, or equals the record's rating (records without
///   a rating never match an active rating filter)
/// * `year_added` lies inside the closed `year_range`
///
/// An empty result is valid output, not a failure.
pub fn filtered_indices(dataset: &CatalogDataset, selection: &FilterSelection) -> Vec<usize> {
    let (lo, hi) = selection.year_range;
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            if let Some(wanted) = &selection.content_type {
                if rec.content_type != *wanted {
                    return false;
                }
            }
            if let Some(wanted) = &selection.rating_code {
                if rec.rating.as_deref() != Some(wanted.as_str()) {
                    return false;
                }
            }
            lo <= rec.year_added && rec.year_added <= hi
        })
        .map(|(i, _)| i)
        .collect()
}
