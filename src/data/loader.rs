use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{Dataset, Record};

/// Single-year excerpt of the penguins table, compiled into the binary so the
/// chart can still be drawn when `data/penguins.csv` is unavailable.
pub const EMBEDDED_CSV: &str = include_str!("penguins_embedded.csv");

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a single data source could not produce a dataset.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Loading failed for every configured source.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no data sources configured")]
    NoSources,
    #[error("all {attempts} data sources failed, last error: {last}")]
    Exhausted {
        attempts: usize,
        #[source]
        last: SourceError,
    },
}

// ---------------------------------------------------------------------------
// Data sources
// ---------------------------------------------------------------------------

/// One place a dataset can come from. Sources are tried in list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// A CSV file on disk, resolved relative to the working directory.
    File(PathBuf),
    /// CSV text built into the program.
    Embedded(&'static str),
}

impl DataSource {
    /// Read and parse this source.
    pub fn open(&self) -> Result<Dataset, SourceError> {
        match self {
            DataSource::File(path) => {
                let file = std::fs::File::open(path).map_err(|source| SourceError::Io {
                    path: path.clone(),
                    source,
                })?;
                parse_csv(file)
            }
            DataSource::Embedded(text) => parse_csv(text.as_bytes()),
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(path) => write!(f, "{}", path.display()),
            DataSource::Embedded(_) => write!(f, "embedded sample"),
        }
    }
}

/// The external file first, then the embedded excerpt.
pub fn default_sources(path: impl AsRef<Path>) -> Vec<DataSource> {
    vec![
        DataSource::File(path.as_ref().to_path_buf()),
        DataSource::Embedded(EMBEDDED_CSV),
    ]
}

/// A dataset together with the source that produced it.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    pub source: DataSource,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Try each source in order and return the first dataset that parses.
///
/// Later sources are never opened once one succeeds, and results are never
/// merged. Failures are logged and only surface if every source fails.
pub fn load(sources: &[DataSource]) -> Result<LoadedDataset, LoadError> {
    let mut last = None;

    for source in sources {
        match source.open() {
            Ok(dataset) => {
                if dataset.is_empty() {
                    log::warn!("{source} has a header but no records");
                }
                log::info!("Loaded {} records from {source}", dataset.len());
                return Ok(LoadedDataset {
                    dataset,
                    source: source.clone(),
                });
            }
            Err(e) => {
                log::warn!("Data source {source} unavailable: {e}");
                last = Some(e);
            }
        }
    }

    match last {
        Some(last) => Err(LoadError::Exhausted {
            attempts: sources.len(),
            last,
        }),
        None => Err(LoadError::NoSources),
    }
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse penguins CSV text. Columns are matched by header name; a missing
/// column or a malformed row fails the whole parse.
pub fn parse_csv<R: Read>(reader: R) -> Result<Dataset, SourceError> {
    let mut reader = csv::Reader::from_reader(reader);
    let records = reader
        .deserialize::<Record>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Dataset::new(records))
}
