//! Shared application state for the API server

use crate::dataset::Dataset;
use std::sync::Arc;

/// Shared application state
///
/// The dataset is loaded once at startup and never replaced, so it is
/// shared as a plain `Arc` with no lock: every handler reads the same
/// immutable table.
#[derive(Clone)]
pub struct AppState {
    /// The launch-record dataset, immutable after load
    pub dataset: Arc<Dataset>,
}

impl AppState {
    /// Creates a new application state
    pub fn new(dataset: Dataset) -> Self {
        AppState {
            dataset: Arc::new(dataset),
        }
    }
}
