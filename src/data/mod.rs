/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file, derive year_added → CatalogDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ CatalogDataset │  Vec<CatalogRecord>, min/max year, selector options
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply FilterSelection predicates → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  explode multi-value fields, tally → (item, count) tables
///   └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
pub mod ratings;
