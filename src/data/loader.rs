use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use thiserror::Error;

use super::model::{CatalogDataset, CatalogRecord};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Load-time failures. All of these are fatal for the process: queries can
/// only be served once a dataset has loaded successfully.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no usable rows: every record lacks a parseable date_added")]
    EmptyDataset,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a catalog dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row, one record per line (the usual catalog dump)
/// * `.json` – records-oriented array `[{ "type": ..., "date_added": ... }, ...]`
///
/// Rows whose `date_added` does not parse are dropped; a dataset where no
/// row survives is [`LoadError::EmptyDataset`]. Call this once at startup
/// and hand the result by reference into every query.
pub fn load_file(path: &Path) -> Result<CatalogDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let open_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    match ext.as_str() {
        "csv" => {
            let file = File::open(path).map_err(open_err)?;
            from_csv_reader(file)
        }
        "json" => {
            let text = std::fs::read_to_string(path).map_err(open_err)?;
            from_json_str(&text)
        }
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// Raw record – common to both loaders
// ---------------------------------------------------------------------------

/// One source row before date parsing. Every field is optional at this
/// stage; [`RawRecord::into_record`] decides what survives.
#[derive(Debug, Default, Deserialize)]
struct RawRecord {
    #[serde(default)]
    title: Option<String>,
    #[serde(rename = "type", default)]
    content_type: Option<String>,
    #[serde(default)]
    rating: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    listed_in: Option<String>,
    #[serde(default)]
    cast: Option<String>,
    #[serde(default)]
    director: Option<String>,
    #[serde(default)]
    date_added: Option<String>,
}

impl RawRecord {
    /// Derive the typed record. `None` when `date_added` is missing or
    /// unparseable; such rows are dropped from the dataset entirely.
    fn into_record(self) -> Option<CatalogRecord> {
        let date_added = parse_date_added(self.date_added.as_deref()?)?;
        Some(CatalogRecord {
            title: self.title.unwrap_or_default(),
            content_type: self.content_type.unwrap_or_default(),
            rating: non_empty(self.rating),
            country: non_empty(self.country),
            listed_in: non_empty(self.listed_in),
            cast: non_empty(self.cast),
            director: non_empty(self.director),
            year_added: date_added.year(),
            date_added,
        })
    }
}

/// Empty source cells mean "absent", not an empty value.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// The catalog dumps dates as `"September 9, 2019"`, occasionally with stray
/// padding; ISO dates are accepted too.
fn parse_date_added(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    ["%B %d, %Y", "%Y-%m-%d"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

fn finish(records: Vec<CatalogRecord>, dropped: usize) -> Result<CatalogDataset, LoadError> {
    if dropped > 0 {
        log::debug!("dropped {dropped} rows without a parseable date_added");
    }
    CatalogDataset::from_records(records).ok_or(LoadError::EmptyDataset)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names. The columns
/// `type, rating, country, listed_in, cast, director, date_added` are
/// required (a missing header is a load failure); `title` is read when
/// present. Missing cells within a row are tolerated.
pub fn from_csv_reader<R: Read>(rdr: R) -> Result<CatalogDataset, LoadError> {
    let mut reader = csv::Reader::from_reader(rdr);
    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let col = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))
    };
    let type_idx = col("type")?;
    let rating_idx = col("rating")?;
    let country_idx = col("country")?;
    let listed_in_idx = col("listed_in")?;
    let cast_idx = col("cast")?;
    let director_idx = col("director")?;
    let date_added_idx = col("date_added")?;
    let title_idx = headers.iter().position(|h| h == "title");

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for result in reader.records() {
        let row = result?;
        let cell = |idx: usize| row.get(idx).map(str::to_string);
        let raw = RawRecord {
            title: title_idx.and_then(|i| cell(i)),
            content_type: cell(type_idx),
            rating: cell(rating_idx),
            country: cell(country_idx),
            listed_in: cell(listed_in_idx),
            cast: cell(cast_idx),
            director: cell(director_idx),
            date_added: cell(date_added_idx),
        };
        match raw.into_record() {
            Some(rec) => records.push(rec),
            None => dropped += 1,
        }
    }

    finish(records, dropped)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "title": "...", "type": "Movie", "rating": "PG",
///     "country": "USA, Canada", "date_added": "September 9, 2019", ... },
///   ...
/// ]
/// ```
///
/// Fields absent or `null` in a record are treated like empty CSV cells.
pub fn from_json_str(text: &str) -> Result<CatalogDataset, LoadError> {
    let raw: Vec<RawRecord> = serde_json::from_str(text)?;

    let mut records = Vec::with_capacity(raw.len());
    let mut dropped = 0usize;
    for rec in raw {
        match rec.into_record() {
            Some(rec) => records.push(rec),
            None => dropped += 1,
        }
    }

    finish(records, dropped)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "title,type,rating,country,listed_in,cast,director,date_added";

    fn load(csv: &str) -> Result<CatalogDataset, LoadError> {
        from_csv_reader(Cursor::new(csv.to_string()))
    }

    #[test]
    fn parses_catalog_date_formats() {
        let d = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert_eq!(parse_date_added("September 9, 2019"), Some(d(2019, 9, 9)));
        assert_eq!(parse_date_added(" January 1, 2021"), Some(d(2021, 1, 1)));
        assert_eq!(parse_date_added("2020-07-15"), Some(d(2020, 7, 15)));
        assert_eq!(parse_date_added(""), None);
        assert_eq!(parse_date_added("soon"), None);
    }

    #[test]
    fn csv_drops_rows_without_parseable_date() {
        let ds = load(&format!(
            "{HEADER}\n\
             A,Movie,PG,USA,Dramas,,,\"September 9, 2019\"\n\
             B,Movie,PG,USA,Dramas,,,not a date\n\
             C,TV Show,TV-MA,India,Comedies,,,\"March 2, 2021\"\n"
        ))
        .unwrap();

        assert_eq!(ds.len(), 2);
        assert_eq!((ds.min_year, ds.max_year), (2019, 2021));
        assert_eq!(ds.records[0].title, "A");
        assert_eq!(ds.records[1].year_added, 2021);
    }

    #[test]
    fn csv_empty_cells_become_absent() {
        let ds = load(&format!(
            "{HEADER}\nA,Movie,,,,,,\"May 5, 2020\"\n"
        ))
        .unwrap();

        let rec = &ds.records[0];
        assert_eq!(rec.rating, None);
        assert_eq!(rec.country, None);
        assert_eq!(rec.cast, None);
    }

    #[test]
    fn csv_missing_column_fails() {
        let err = load("title,type,rating\nA,Movie,PG\n").unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("country")));
    }

    #[test]
    fn all_rows_dropped_is_empty_dataset() {
        let err = load(&format!("{HEADER}\nA,Movie,PG,USA,Dramas,,,\n")).unwrap_err();
        assert!(matches!(err, LoadError::EmptyDataset));
    }

    #[test]
    fn json_records_load() {
        let ds = from_json_str(
            r#"[
                {"title": "A", "type": "Movie", "rating": "PG",
                 "country": "USA, Canada", "date_added": "September 9, 2019"},
                {"title": "B", "type": "TV Show", "rating": null,
                 "date_added": "2020-01-02"},
                {"title": "C", "type": "Movie"}
            ]"#,
        )
        .unwrap();

        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].country.as_deref(), Some("USA, Canada"));
        assert_eq!(ds.records[1].rating, None);
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = load_file(Path::new("catalog.parquet")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedExtension(ext) if ext == "parquet"));
    }
}
