mod data;
mod report;
mod state;

use std::fmt::Display;
use std::path::Path;

use anyhow::{Context, Result};

use state::TrendsState;

fn main() -> Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "catalog_titles.csv".to_string());
    let dataset = data::loader::load_file(Path::new(&path))
        .with_context(|| format!("loading catalog from {path}"))?;
    log::info!(
        "loaded {} titles spanning {}–{}",
        dataset.len(),
        dataset.min_year,
        dataset.max_year
    );

    let state = TrendsState::new(dataset);
    let report = state.report();

    println!("{}", report.summary);
    print_table("Releases per Year", &report.releases_per_year);
    print_table("Top Countries", &report.top_countries);
    print_table("Top Genres", &report.top_genres);
    print_table("Top Actors", &report.top_actors);
    print_table("Top Directors", &report.top_directors);

    Ok(())
}

fn print_table<L: Display>(title: &str, rows: &[(L, u64)]) {
    println!("\n{title}");
    if rows.is_empty() {
        println!("  (no data for the current filters)");
    }
    for (label, count) in rows {
        println!("  {:<40} {}", label.to_string(), count);
    }
}
