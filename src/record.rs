use serde::{Deserialize, Serialize};

/// A single launch record: one observed launch attempt from the dataset.
///
/// Field names map onto the CSV columns of the launch-records file via
/// serde renames, so a record deserializes directly from a CSV row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    /// Launch site identifier (e.g., "KSC LC-39A")
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    /// Payload mass in kilograms, non-negative
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    /// Label grouping booster variants (e.g., "FT", "B4", "B5")
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
    /// Binary launch outcome: 1 = success, 0 = failure
    #[serde(rename = "class")]
    pub outcome_class: u8,
}

impl LaunchRecord {
    /// Creates a new LaunchRecord.
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        booster_version_category: impl Into<String>,
        outcome_class: u8,
    ) -> Self {
        LaunchRecord {
            launch_site: launch_site.into(),
            payload_mass_kg,
            booster_version_category: booster_version_category.into(),
            outcome_class,
        }
    }

    /// Returns true if this launch was a success (`outcome_class == 1`).
    pub fn is_success(&self) -> bool {
        self.outcome_class == 1
    }
}
