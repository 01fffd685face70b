use crate::data::filter::{filtered_indices, FilterSelection};
use crate::data::model::CatalogDataset;
use crate::data::ratings;
use crate::report::{build_report, TrendsReport};

// ---------------------------------------------------------------------------
// Query state
// ---------------------------------------------------------------------------

/// The full query state, independent of any presentation layer: the loaded
/// dataset, the current filter selection, and the cached filtered view.
///
/// The dataset is loaded once and never mutated; only the selection and its
/// derived indices change between queries.
pub struct TrendsState {
    dataset: CatalogDataset,
    selection: FilterSelection,
    /// Indices of records passing the current selection (cached).
    visible_indices: Vec<usize>,
}

impl TrendsState {
    /// Take ownership of a freshly loaded dataset, starting from the
    /// default selection.
    pub fn new(dataset: CatalogDataset) -> Self {
        let selection = FilterSelection::default_for(&dataset);
        let visible_indices = filtered_indices(&dataset, &selection);
        TrendsState {
            dataset,
            selection,
            visible_indices,
        }
    }

    pub fn dataset(&self) -> &CatalogDataset {
        &self.dataset
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// How many records pass the current selection.
    pub fn visible_len(&self) -> usize {
        self.visible_indices.len()
    }

    /// Replace the whole selection at once.
    pub fn set_selection(&mut self, selection: FilterSelection) {
        self.selection = selection;
        self.refilter();
    }

    /// Select a content type by its selector choice; `"All"` clears the
    /// type filter.
    pub fn set_content_type(&mut self, choice: &str) {
        self.selection.content_type = match choice {
            "All" => None,
            other => Some(other.to_string()),
        };
        self.refilter();
    }

    /// Select a rating by its display *label*, as a selector hands it over.
    /// Labels that do not resolve to a known code — `"All"`, but also the
    /// synthesized `"(Unknown)"` labels — clear the rating filter.
    pub fn set_rating_label(&mut self, label: &str) {
        self.selection.rating_code = ratings::label_to_code(label).map(str::to_string);
        self.refilter();
    }

    /// Set the year window. Values outside the dataset span just match
    /// fewer rows.
    pub fn set_year_range(&mut self, lo: i32, hi: i32) {
        self.selection.year_range = (lo, hi);
        self.refilter();
    }

    /// Restore the default selection (the reset control).
    pub fn reset_filters(&mut self) {
        self.set_selection(FilterSelection::default_for(&self.dataset));
    }

    /// Recompute `visible_indices` after a selection change.
    fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.dataset, &self.selection);
    }

    /// Choices for the content-type selector: "All" plus the distinct types.
    pub fn content_type_options(&self) -> Vec<String> {
        let mut options = vec!["All".to_string()];
        options.extend(self.dataset.content_types.iter().cloned());
        options
    }

    /// Choices for the rating selector: "All" plus the labels of the rating
    /// codes present in the data.
    pub fn rating_label_options(&self) -> Vec<String> {
        let mut options = vec!["All".to_string()];
        options.extend(ratings::labels_for(&self.dataset.ratings));
        options
    }

    /// All trend tables for the current selection.
    pub fn report(&self) -> TrendsReport {
        build_report(&self.dataset, &self.visible_indices, &self.selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::testing::record;

    fn state() -> TrendsState {
        TrendsState::new(
            CatalogDataset::from_records(vec![
                record("Movie", Some("PG"), Some("USA"), 2019),
                record("Movie", Some("XX"), Some("USA"), 2020),
                record("TV Show", Some("TV-MA"), Some("India"), 2021),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn starts_with_default_selection() {
        let st = state();
        assert_eq!(st.selection().year_range, (2019, 2021));
        assert_eq!(st.visible_len(), 3);
    }

    #[test]
    fn selector_choices_drive_the_filters() {
        let mut st = state();
        st.set_content_type("Movie");
        assert_eq!(st.visible_len(), 2);
        st.set_rating_label("PG (Parental Guidance)");
        assert_eq!(st.visible_len(), 1);
        st.set_content_type("All");
        assert_eq!(st.visible_len(), 1);
    }

    #[test]
    fn unknown_rating_labels_clear_the_filter() {
        let mut st = state();
        st.set_rating_label("PG (Parental Guidance)");
        assert_eq!(st.visible_len(), 1);
        // Selecting a synthesized label silently applies no rating filter.
        st.set_rating_label("XX (Unknown)");
        assert_eq!(st.selection().rating_code, None);
        assert_eq!(st.visible_len(), 3);
    }

    #[test]
    fn reset_restores_the_default_selection() {
        let mut st = state();
        st.set_content_type("TV Show");
        st.set_year_range(2021, 2021);
        st.reset_filters();
        assert_eq!(st.selection(), &FilterSelection::default_for(st.dataset()));
        assert_eq!(st.visible_len(), 3);
    }

    #[test]
    fn options_include_the_all_sentinel() {
        let st = state();
        assert_eq!(st.content_type_options(), vec!["All", "Movie", "TV Show"]);
        assert_eq!(
            st.rating_label_options(),
            vec![
                "All",
                "PG (Parental Guidance)",
                "TV-MA (Mature Audience 18+)",
                "XX (Unknown)",
            ]
        );
    }
}
