//! Selection types: the user's current filter choice driving both charts.

use crate::query::QueryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel value meaning "no site filter".
pub const ALL_SITES: &str = "ALL";

/// Site choice for a query: either every site or one exact site name.
///
/// The wire form uses the `"ALL"` sentinel for [`SiteSelection::All`];
/// any other string is taken verbatim as a site name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SiteSelection {
    /// All launch sites
    All,
    /// One exact launch site
    Site(String),
}

impl SiteSelection {
    /// Parses the wire form of a site selection.
    ///
    /// `"ALL"` (exact, case-sensitive) maps to [`SiteSelection::All`];
    /// anything else becomes a site filter for that exact name.
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    /// Returns true if this selection covers all sites.
    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelection::All)
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => write!(f, "{}", ALL_SITES),
            SiteSelection::Site(site) => write!(f, "{}", site),
        }
    }
}

/// Closed payload-mass interval `[low, high]`, both ends inclusive.
///
/// Negative bounds are accepted: no record can match them (payload mass is
/// non-negative), so they simply yield an empty result. Only an inverted
/// interval (`low > high`) is an error, checked by [`PayloadRange::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    /// Lower bound in kilograms (inclusive)
    pub low: f64,
    /// Upper bound in kilograms (inclusive)
    pub high: f64,
}

impl PayloadRange {
    /// Creates a new PayloadRange.
    pub fn new(low: f64, high: f64) -> Self {
        PayloadRange { low, high }
    }

    /// Checks that the interval is not inverted.
    ///
    /// # Errors
    /// Returns `QueryError::InvalidRange` if `low > high`.
    pub fn validate(&self) -> Result<(), QueryError> {
        if self.low > self.high {
            return Err(QueryError::InvalidRange {
                low: self.low,
                high: self.high,
            });
        }
        Ok(())
    }

    /// Returns true if `mass` falls within `[low, high]`.
    pub fn contains(&self, mass: f64) -> bool {
        mass >= self.low && mass <= self.high
    }
}
