use std::fmt;

use crate::data::aggregate::{count_by_key, top_k_exploded};
use crate::data::filter::FilterSelection;
use crate::data::model::CatalogDataset;
use crate::data::ratings;

/// Table depth used by every display dimension.
pub const TOP_K: usize = 10;

// ---------------------------------------------------------------------------
// Filter summary
// ---------------------------------------------------------------------------

/// The active filters as display strings, shown above the tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSummary {
    /// Selected content type, or "All".
    pub content_type: String,
    /// Selected rating label, or "All".
    pub rating: String,
    /// Selected year window.
    pub year_range: (i32, i32),
}

impl FilterSummary {
    fn for_selection(selection: &FilterSelection) -> Self {
        FilterSummary {
            content_type: selection
                .content_type
                .clone()
                .unwrap_or_else(|| "All".to_string()),
            rating: selection
                .rating_code
                .as_deref()
                .map(ratings::code_to_label)
                .unwrap_or_else(|| "All".to_string()),
            year_range: selection.year_range,
        }
    }
}

impl fmt::Display for FilterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Currently showing: {} | Rating: {} | Year Range: {} – {}",
            self.content_type, self.rating, self.year_range.0, self.year_range.1
        )
    }
}

// ---------------------------------------------------------------------------
// Trend report – all tables for one filtered view
// ---------------------------------------------------------------------------

/// The five display tables for one filtered view, ready for whatever
/// presentation layer consumes them. Pure data, no rendering instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendsReport {
    pub summary: FilterSummary,
    /// Titles added per year, ordered by year ascending, gaps preserved.
    pub releases_per_year: Vec<(i32, u64)>,
    /// Top producing countries, count descending.
    pub top_countries: Vec<(String, u64)>,
    /// Top genres, count descending.
    pub top_genres: Vec<(String, u64)>,
    /// Most frequent actors, count descending.
    pub top_actors: Vec<(String, u64)>,
    /// Most frequent directors, count descending.
    pub top_directors: Vec<(String, u64)>,
}

/// Assemble every table for the given filtered view. Each aggregation runs
/// independently over the same indices.
pub fn build_report(
    dataset: &CatalogDataset,
    indices: &[usize],
    selection: &FilterSelection,
) -> TrendsReport {
    TrendsReport {
        summary: FilterSummary::for_selection(selection),
        releases_per_year: count_by_key(dataset, indices, |r| r.year_added),
        top_countries: top_k_exploded(dataset, indices, |r| r.country.as_deref(), TOP_K),
        top_genres: top_k_exploded(dataset, indices, |r| r.listed_in.as_deref(), TOP_K),
        top_actors: top_k_exploded(dataset, indices, |r| r.cast.as_deref(), TOP_K),
        top_directors: top_k_exploded(dataset, indices, |r| r.director.as_deref(), TOP_K),
    }
}
