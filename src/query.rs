//! Query Functions
//!
//! This module provides the two stateless query functions behind the
//! dashboard charts: outcome aggregation (proportions chart) and
//! payload/success correlation filtering (scatter chart). Both are pure
//! functions of `(dataset, selection)` and return plain tabular data for
//! the presentation layer to render.

use crate::dataset::Dataset;
use crate::selection::{PayloadRange, SiteSelection};
use serde::Serialize;
use std::collections::HashMap;

/// One row of the all-sites proportions table: a site and its total
/// number of successful launches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteSuccessRow {
    pub site: String,
    pub success_count: u32,
}

/// One row of the per-site proportions table: an outcome class and how
/// many launches at the selected site had it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeCountRow {
    pub outcome_class: u8,
    pub count: u32,
}

/// Output of [`aggregate_outcomes`]: the table shape depends on whether a
/// single site or all sites were selected, matching what the proportions
/// chart slices on in each mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "breakdown", content = "rows", rename_all = "snake_case")]
pub enum OutcomeBreakdown {
    /// One row per distinct site with its success total (all-sites mode)
    BySite(Vec<SiteSuccessRow>),
    /// One row per observed outcome class (single-site mode)
    ByOutcome(Vec<OutcomeCountRow>),
}

/// One point of the correlation table: payload mass against outcome, with
/// the booster category carried along for color-coded rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationPoint {
    pub payload_mass_kg: f64,
    pub outcome_class: u8,
    pub booster_version_category: String,
}

/// Aggregates launch outcomes for the proportions chart.
///
/// # Arguments
/// * `dataset` - The loaded launch-record dataset
/// * `site` - Site selection: all sites or one exact site
///
/// # Returns
/// For [`SiteSelection::All`], one [`SiteSuccessRow`] per distinct site
/// with the sum of `outcome_class` over that site's records. For a single
/// site, one [`OutcomeCountRow`] per outcome class actually observed at
/// that site.
///
/// # Behavior
/// - All-sites rows come back in first-appearance order of the site in the
///   dataset; the order is stable across repeated calls.
/// - In single-site mode an outcome class with zero occurrences is omitted
///   rather than zero-filled, because the chart legend shows only observed
///   classes.
/// - Deterministic and side-effect free: the dataset is never mutated.
///
/// # Errors
/// Returns `QueryError::UnknownSite` if a single site is selected that
/// does not exist in the dataset. A proportions chart cannot render with a
/// zero total, so this case is an error rather than an empty table.
///
/// # Examples
/// ```
/// use launchdash::{aggregate_outcomes, Dataset, LaunchRecord, OutcomeBreakdown, SiteSelection};
///
/// let dataset = Dataset::from_records(vec![
///     LaunchRecord::new("KSC", 500.0, "B4", 1),
///     LaunchRecord::new("KSC", 4000.0, "B5", 0),
///     LaunchRecord::new("VAFB", 2000.0, "B4", 1),
/// ]).unwrap();
///
/// let breakdown = aggregate_outcomes(&dataset, &SiteSelection::All).unwrap();
/// match breakdown {
///     OutcomeBreakdown::BySite(rows) => {
///         assert_eq!(rows.len(), 2);
///         assert_eq!(rows[0].site, "KSC");
///         assert_eq!(rows[0].success_count, 1);
///     }
///     _ => unreachable!(),
/// }
/// ```
pub fn aggregate_outcomes(
    dataset: &Dataset,
    site: &SiteSelection,
) -> Result<OutcomeBreakdown, QueryError> {
    match site {
        SiteSelection::All => {
            // Group by site, keeping first-appearance order for stability.
            let mut index: HashMap<&str, usize> = HashMap::new();
            let mut rows: Vec<SiteSuccessRow> = Vec::new();
            for record in dataset.records() {
                let position = *index.entry(record.launch_site.as_str()).or_insert_with(|| {
                    rows.push(SiteSuccessRow {
                        site: record.launch_site.clone(),
                        success_count: 0,
                    });
                    rows.len() - 1
                });
                rows[position].success_count += u32::from(record.outcome_class);
            }
            Ok(OutcomeBreakdown::BySite(rows))
        }
        SiteSelection::Site(name) => {
            if !dataset.has_site(name) {
                return Err(QueryError::UnknownSite(name.clone()));
            }

            // Count observed outcome classes only; absent classes are not
            // zero-filled.
            let mut rows: Vec<OutcomeCountRow> = Vec::new();
            for record in dataset.records() {
                if &record.launch_site != name {
                    continue;
                }
                match rows
                    .iter_mut()
                    .find(|row| row.outcome_class == record.outcome_class)
                {
                    Some(row) => row.count += 1,
                    None => rows.push(OutcomeCountRow {
                        outcome_class: record.outcome_class,
                        count: 1,
                    }),
                }
            }
            Ok(OutcomeBreakdown::ByOutcome(rows))
        }
    }
}

/// Filters records for the payload/success correlation chart.
///
/// # Arguments
/// * `dataset` - The loaded launch-record dataset
/// * `payload_range` - Closed interval of payload mass in kilograms
/// * `site` - Site selection: all sites or one exact site
///
/// # Returns
/// One [`CorrelationPoint`] per record with
/// `low <= payload_mass_kg <= high` that also matches the site selection,
/// in the dataset's original relative order (stable filter, no resort).
///
/// # Behavior
/// - An unknown site yields an EMPTY result, not an error: a scatter plot
///   tolerates "no points", unlike the proportions chart. This asymmetry
///   with [`aggregate_outcomes`] is intentional.
/// - A range that matches nothing (including negative bounds) is a valid
///   empty result.
/// - Deterministic and side-effect free: the dataset is never mutated.
///
/// # Errors
/// Returns `QueryError::InvalidRange` if the interval is inverted
/// (`low > high`).
///
/// # Examples
/// ```
/// use launchdash::{filter_correlation, Dataset, LaunchRecord, PayloadRange, SiteSelection};
///
/// let dataset = Dataset::from_records(vec![
///     LaunchRecord::new("KSC", 500.0, "B4", 1),
///     LaunchRecord::new("KSC", 4000.0, "B5", 0),
///     LaunchRecord::new("VAFB", 2000.0, "B4", 1),
/// ]).unwrap();
///
/// let range = PayloadRange::new(0.0, 3000.0);
/// let points = filter_correlation(&dataset, &range, &SiteSelection::All).unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[0].payload_mass_kg, 500.0);
/// assert_eq!(points[1].payload_mass_kg, 2000.0);
/// ```
pub fn filter_correlation(
    dataset: &Dataset,
    payload_range: &PayloadRange,
    site: &SiteSelection,
) -> Result<Vec<CorrelationPoint>, QueryError> {
    payload_range.validate()?;

    let points = dataset
        .records()
        .iter()
        .filter(|record| payload_range.contains(record.payload_mass_kg))
        .filter(|record| match site {
            SiteSelection::All => true,
            SiteSelection::Site(name) => &record.launch_site == name,
        })
        .map(|record| CorrelationPoint {
            payload_mass_kg: record.payload_mass_kg,
            outcome_class: record.outcome_class,
            booster_version_category: record.booster_version_category.clone(),
        })
        .collect();

    Ok(points)
}

/// Errors that can occur when executing a query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryError {
    /// Site selected for outcome aggregation does not exist in the dataset
    UnknownSite(String),
    /// Payload range is inverted (low > high)
    InvalidRange { low: f64, high: f64 },
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::UnknownSite(site) => write!(f, "unknown launch site: {}", site),
            QueryError::InvalidRange { low, high } => {
                write!(f, "invalid payload range: low {} exceeds high {}", low, high)
            }
        }
    }
}

impl std::error::Error for QueryError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::LaunchRecord;

    fn sample_dataset() -> Dataset {
        Dataset::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 0.0, "v1.0", 0),
            LaunchRecord::new("CCAFS LC-40", 525.0, "v1.0", 0),
            LaunchRecord::new("VAFB SLC-4E", 500.0, "v1.1", 1),
            LaunchRecord::new("KSC LC-39A", 5300.0, "FT", 1),
            LaunchRecord::new("KSC LC-39A", 9600.0, "B4", 0),
            LaunchRecord::new("KSC LC-39A", 2500.0, "B5", 1),
        ])
        .unwrap()
    }

    #[test]
    fn test_aggregate_all_sites_one_row_per_site() {
        let dataset = sample_dataset();
        let breakdown = aggregate_outcomes(&dataset, &SiteSelection::All).unwrap();
        let rows = match breakdown {
            OutcomeBreakdown::BySite(rows) => rows,
            other => panic!("expected BySite, got {:?}", other),
        };

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].site, "CCAFS LC-40");
        assert_eq!(rows[0].success_count, 0);
        assert_eq!(rows[1].site, "VAFB SLC-4E");
        assert_eq!(rows[1].success_count, 1);
        assert_eq!(rows[2].site, "KSC LC-39A");
        assert_eq!(rows[2].success_count, 2);
    }

    #[test]
    fn test_aggregate_single_site_counts_both_classes() {
        let dataset = sample_dataset();
        let selection = SiteSelection::Site("KSC LC-39A".to_string());
        let breakdown = aggregate_outcomes(&dataset, &selection).unwrap();
        let rows = match breakdown {
            OutcomeBreakdown::ByOutcome(rows) => rows,
            other => panic!("expected ByOutcome, got {:?}", other),
        };

        // First-appearance order: KSC's first record is a success
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].outcome_class, 1);
        assert_eq!(rows[0].count, 2);
        assert_eq!(rows[1].outcome_class, 0);
        assert_eq!(rows[1].count, 1);

        // Total across rows equals the number of records at the site
        let total: u32 = rows.iter().map(|row| row.count).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_aggregate_single_site_omits_absent_class() {
        let dataset = sample_dataset();
        let selection = SiteSelection::Site("CCAFS LC-40".to_string());
        let breakdown = aggregate_outcomes(&dataset, &selection).unwrap();
        let rows = match breakdown {
            OutcomeBreakdown::ByOutcome(rows) => rows,
            other => panic!("expected ByOutcome, got {:?}", other),
        };

        // Only failures observed at this site: no zero-filled success row
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].outcome_class, 0);
        assert_eq!(rows[0].count, 2);
    }

    #[test]
    fn test_aggregate_unknown_site_is_an_error() {
        let dataset = sample_dataset();
        let selection = SiteSelection::Site("BOCA CHICA".to_string());
        let result = aggregate_outcomes(&dataset, &selection);
        assert_eq!(
            result,
            Err(QueryError::UnknownSite("BOCA CHICA".to_string()))
        );
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let dataset = sample_dataset();
        let first = aggregate_outcomes(&dataset, &SiteSelection::All).unwrap();
        let second = aggregate_outcomes(&dataset, &SiteSelection::All).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_filter_range_is_inclusive_both_ends() {
        let dataset = sample_dataset();
        let range = PayloadRange::new(500.0, 5300.0);
        let points = filter_correlation(&dataset, &range, &SiteSelection::All).unwrap();

        let masses: Vec<f64> = points.iter().map(|p| p.payload_mass_kg).collect();
        assert_eq!(masses, vec![525.0, 500.0, 5300.0, 2500.0]);
    }

    #[test]
    fn test_filter_preserves_original_order() {
        let dataset = sample_dataset();
        let range = PayloadRange::new(0.0, 10000.0);
        let points = filter_correlation(&dataset, &range, &SiteSelection::All).unwrap();

        assert_eq!(points.len(), dataset.len());
        for (point, record) in points.iter().zip(dataset.records()) {
            assert_eq!(point.payload_mass_kg, record.payload_mass_kg);
            assert_eq!(point.outcome_class, record.outcome_class);
            assert_eq!(
                point.booster_version_category,
                record.booster_version_category
            );
        }
    }

    #[test]
    fn test_filter_site_restriction() {
        let dataset = sample_dataset();
        let range = PayloadRange::new(0.0, 10000.0);
        let selection = SiteSelection::Site("KSC LC-39A".to_string());
        let points = filter_correlation(&dataset, &range, &selection).unwrap();

        assert_eq!(points.len(), 3);
        assert!(points
            .iter()
            .all(|p| p.booster_version_category != "v1.0" && p.booster_version_category != "v1.1"));
    }

    #[test]
    fn test_filter_unknown_site_yields_empty_not_error() {
        let dataset = sample_dataset();
        let range = PayloadRange::new(0.0, 10000.0);
        let selection = SiteSelection::Site("BOCA CHICA".to_string());
        let points = filter_correlation(&dataset, &range, &selection).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_filter_inverted_range_is_an_error() {
        let dataset = sample_dataset();
        let range = PayloadRange::new(6000.0, 100.0);
        let result = filter_correlation(&dataset, &range, &SiteSelection::All);
        assert_eq!(
            result,
            Err(QueryError::InvalidRange {
                low: 6000.0,
                high: 100.0
            })
        );
    }

    #[test]
    fn test_filter_non_overlapping_range_yields_empty() {
        let dataset = sample_dataset();
        let range = PayloadRange::new(20000.0, 30000.0);
        let points = filter_correlation(&dataset, &range, &SiteSelection::All).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_filter_negative_range_yields_empty() {
        let dataset = sample_dataset();
        let range = PayloadRange::new(-500.0, -100.0);
        let points = filter_correlation(&dataset, &range, &SiteSelection::All).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let dataset = sample_dataset();
        let range = PayloadRange::new(0.0, 6000.0);
        let first = filter_correlation(&dataset, &range, &SiteSelection::All).unwrap();
        let second = filter_correlation(&dataset, &range, &SiteSelection::All).unwrap();
        assert_eq!(first, second);
    }
}
