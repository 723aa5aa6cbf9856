//! Dataset store: one-time CSV load into an immutable launch-record table.

use crate::record::LaunchRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// CSV columns the dataset source must provide. Extra columns are ignored.
const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "Booster Version Category",
    "class",
];

/// Immutable, ordered table of launch records.
///
/// Loaded once at process start and never mutated afterwards, so it can be
/// shared freely (e.g., behind an `Arc`) without locking. Payload bounds
/// and the distinct-site list are computed at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    payload_min: f64,
    payload_max: f64,
}

impl Dataset {
    /// Loads the dataset from a CSV file on disk.
    ///
    /// # Arguments
    /// * `path` - Path to the launch-records CSV file
    ///
    /// # Errors
    /// Returns `DataLoadError` if the file is unreadable, a required column
    /// is missing, any record violates the dataset invariants, or the file
    /// contains no records.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, DataLoadError> {
        let file = File::open(path.as_ref()).map_err(DataLoadError::Io)?;
        Self::from_reader(file)
    }

    /// Loads the dataset from any CSV byte source.
    ///
    /// Same contract as [`Dataset::from_csv_path`]; used for in-memory CSV
    /// data (tests, downloaded content).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataLoadError> {
        let mut csv_reader = csv::Reader::from_reader(reader);

        // Validate the schema up front so a missing column is reported by
        // name rather than as a per-row deserialization failure.
        let headers = csv_reader
            .headers()
            .map_err(|e| DataLoadError::Csv(e.to_string()))?
            .clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DataLoadError::MissingColumn(column.to_string()));
            }
        }

        let mut records = Vec::new();
        for (index, result) in csv_reader.deserialize::<LaunchRecord>().enumerate() {
            // Row numbering is 1-based and counts the header line.
            let row = index + 2;
            let record = result.map_err(|e| DataLoadError::Csv(format!("row {}: {}", row, e)))?;
            validate_record(&record).map_err(|reason| DataLoadError::InvalidRecord {
                row,
                reason,
            })?;
            records.push(record);
        }

        Self::from_records(records)
    }

    /// Builds a dataset from already-constructed records.
    ///
    /// Applies the same invariant checks as the CSV path. Primarily useful
    /// for tests and programmatic construction.
    ///
    /// # Errors
    /// Returns `DataLoadError::Empty` for an empty record list (payload
    /// bounds cannot be seeded), or `DataLoadError::InvalidRecord` if a
    /// record violates the dataset invariants.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, DataLoadError> {
        if records.is_empty() {
            return Err(DataLoadError::Empty);
        }

        for (index, record) in records.iter().enumerate() {
            validate_record(record).map_err(|reason| DataLoadError::InvalidRecord {
                row: index + 1,
                reason,
            })?;
        }

        // Distinct sites in first-appearance order; also the observed
        // payload bounds used to seed the range control.
        let mut sites: Vec<String> = Vec::new();
        let mut payload_min = f64::INFINITY;
        let mut payload_max = f64::NEG_INFINITY;
        for record in &records {
            if !sites.iter().any(|s| s == &record.launch_site) {
                sites.push(record.launch_site.clone());
            }
            payload_min = payload_min.min(record.payload_mass_kg);
            payload_max = payload_max.max(record.payload_mass_kg);
        }

        Ok(Dataset {
            records,
            sites,
            payload_min,
            payload_max,
        })
    }

    /// Returns all records in their original order.
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Returns the distinct launch sites in first-appearance order.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Returns true if the dataset contains the given site.
    pub fn has_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    /// Returns the observed (min, max) payload mass, computed at load time.
    pub fn payload_bounds(&self) -> (f64, f64) {
        (self.payload_min, self.payload_max)
    }

    /// Returns the number of records in the dataset.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the dataset holds no records. Always false for a
    /// successfully loaded dataset.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn validate_record(record: &LaunchRecord) -> Result<(), String> {
    if record.launch_site.is_empty() {
        return Err("launch site is empty".to_string());
    }
    if record.payload_mass_kg < 0.0 || record.payload_mass_kg.is_nan() {
        return Err(format!(
            "payload mass must be non-negative, got {}",
            record.payload_mass_kg
        ));
    }
    if record.outcome_class > 1 {
        return Err(format!(
            "outcome class must be 0 or 1, got {}",
            record.outcome_class
        ));
    }
    Ok(())
}

/// Errors that can occur while loading the dataset.
///
/// All of these are fatal at startup: the process must not start without a
/// well-formed dataset.
#[derive(Debug)]
pub enum DataLoadError {
    /// Source file could not be read
    Io(std::io::Error),
    /// CSV parsing or deserialization failed
    Csv(String),
    /// A required column is absent from the header
    MissingColumn(String),
    /// A record violates the dataset invariants
    InvalidRecord { row: usize, reason: String },
    /// The source contains no records
    Empty,
}

impl std::fmt::Display for DataLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataLoadError::Io(err) => write!(f, "failed to read dataset: {}", err),
            DataLoadError::Csv(msg) => write!(f, "failed to parse dataset: {}", msg),
            DataLoadError::MissingColumn(column) => {
                write!(f, "dataset is missing required column '{}'", column)
            }
            DataLoadError::InvalidRecord { row, reason } => {
                write!(f, "invalid record at row {}: {}", row, reason)
            }
            DataLoadError::Empty => write!(f, "dataset contains no records"),
        }
    }
}

impl std::error::Error for DataLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataLoadError::Io(err) => Some(err),
            _ => None,
        }
    }
}
