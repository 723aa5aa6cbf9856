//! HTTP request handlers for API endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::error::ApiError;
use super::state::AppState;
use crate::query::{aggregate_outcomes, filter_correlation, CorrelationPoint, OutcomeBreakdown};
use crate::selection::{PayloadRange, SiteSelection, ALL_SITES};

/// Health check endpoint
///
/// Returns a simple status response to verify the server is running
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}

/// Response for site listing
#[derive(Debug, Serialize)]
pub struct SitesResponse {
    pub sites: Vec<String>,
}

/// GET /sites - List site dropdown options
///
/// The "ALL" sentinel comes first, followed by the distinct sites in the
/// dataset's first-appearance order.
pub async fn list_sites(State(state): State<AppState>) -> Json<SitesResponse> {
    let mut sites = Vec::with_capacity(state.dataset.sites().len() + 1);
    sites.push(ALL_SITES.to_string());
    sites.extend(state.dataset.sites().iter().cloned());

    Json(SitesResponse { sites })
}

/// Response for payload bounds query
#[derive(Debug, Serialize)]
pub struct PayloadBoundsResponse {
    pub min_kg: f64,
    pub max_kg: f64,
}

/// GET /payload-bounds - Observed payload mass bounds
///
/// Seeds the range slider's absolute bounds and the default selection.
pub async fn payload_bounds(State(state): State<AppState>) -> Json<PayloadBoundsResponse> {
    let (min_kg, max_kg) = state.dataset.payload_bounds();
    Json(PayloadBoundsResponse { min_kg, max_kg })
}

/// Query parameters for the outcomes chart endpoint
#[derive(Debug, Deserialize)]
pub struct OutcomesQueryParams {
    /// Site selection; defaults to "ALL" when omitted
    pub site: Option<String>,
}

/// Response for the outcomes chart query
#[derive(Debug, Serialize)]
pub struct OutcomesResponse {
    pub site: String,
    #[serde(flatten)]
    pub breakdown: OutcomeBreakdown,
}

/// GET /charts/outcomes - Outcome aggregation for the proportions chart
pub async fn get_outcomes(
    State(state): State<AppState>,
    Query(params): Query<OutcomesQueryParams>,
) -> Result<Json<OutcomesResponse>, ApiError> {
    let site = SiteSelection::parse(params.site.as_deref().unwrap_or(ALL_SITES));
    let breakdown = aggregate_outcomes(&state.dataset, &site)?;

    Ok(Json(OutcomesResponse {
        site: site.to_string(),
        breakdown,
    }))
}

/// Query parameters for the correlation chart endpoint
#[derive(Debug, Deserialize)]
pub struct CorrelationQueryParams {
    /// Site selection; defaults to "ALL" when omitted
    pub site: Option<String>,
    /// Lower payload bound in kg; defaults to the dataset minimum
    pub low: Option<f64>,
    /// Upper payload bound in kg; defaults to the dataset maximum
    pub high: Option<f64>,
}

/// Response for the correlation chart query
#[derive(Debug, Serialize)]
pub struct CorrelationResponse {
    pub site: String,
    pub low_kg: f64,
    pub high_kg: f64,
    pub points: Vec<CorrelationPoint>,
}

/// GET /charts/correlation - Payload/success points for the scatter chart
pub async fn get_correlation(
    State(state): State<AppState>,
    Query(params): Query<CorrelationQueryParams>,
) -> Result<Json<CorrelationResponse>, ApiError> {
    let site = SiteSelection::parse(params.site.as_deref().unwrap_or(ALL_SITES));

    // Omitted bounds fall back to the dataset's observed payload bounds,
    // the same default the range slider starts with.
    let (dataset_min, dataset_max) = state.dataset.payload_bounds();
    let range = PayloadRange::new(
        params.low.unwrap_or(dataset_min),
        params.high.unwrap_or(dataset_max),
    );

    let points = filter_correlation(&state.dataset, &range, &site)?;

    Ok(Json(CorrelationResponse {
        site: site.to_string(),
        low_kg: range.low,
        high_kg: range.high,
        points,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::record::LaunchRecord;

    fn test_state() -> AppState {
        let dataset = Dataset::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 500.0, "v1.0", 0),
            LaunchRecord::new("KSC LC-39A", 5300.0, "FT", 1),
            LaunchRecord::new("VAFB SLC-4E", 2000.0, "v1.1", 1),
        ])
        .unwrap();
        AppState::new(dataset)
    }

    #[tokio::test]
    async fn test_list_sites_prepends_sentinel() {
        let response = list_sites(State(test_state())).await;
        assert_eq!(
            response.0.sites,
            vec!["ALL", "CCAFS LC-40", "KSC LC-39A", "VAFB SLC-4E"]
        );
    }

    #[tokio::test]
    async fn test_payload_bounds_endpoint() {
        let response = payload_bounds(State(test_state())).await;
        assert_eq!(response.0.min_kg, 500.0);
        assert_eq!(response.0.max_kg, 5300.0);
    }

    #[tokio::test]
    async fn test_outcomes_defaults_to_all_sites() {
        let params = OutcomesQueryParams { site: None };
        let response = get_outcomes(State(test_state()), Query(params)).await.unwrap();
        assert_eq!(response.0.site, "ALL");
        match &response.0.breakdown {
            OutcomeBreakdown::BySite(rows) => assert_eq!(rows.len(), 3),
            other => panic!("expected BySite, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_outcomes_unknown_site_is_api_error() {
        let params = OutcomesQueryParams {
            site: Some("BOCA CHICA".to_string()),
        };
        let result = get_outcomes(State(test_state()), Query(params)).await;
        assert!(matches!(result, Err(ApiError::UnknownSite(_))));
    }

    #[tokio::test]
    async fn test_correlation_defaults_to_dataset_bounds() {
        let params = CorrelationQueryParams {
            site: None,
            low: None,
            high: None,
        };
        let response = get_correlation(State(test_state()), Query(params))
            .await
            .unwrap();
        assert_eq!(response.0.low_kg, 500.0);
        assert_eq!(response.0.high_kg, 5300.0);
        assert_eq!(response.0.points.len(), 3);
    }

    #[tokio::test]
    async fn test_correlation_unknown_site_yields_empty() {
        let params = CorrelationQueryParams {
            site: Some("BOCA CHICA".to_string()),
            low: None,
            high: None,
        };
        let response = get_correlation(State(test_state()), Query(params))
            .await
            .unwrap();
        assert!(response.0.points.is_empty());
    }

    #[tokio::test]
    async fn test_correlation_inverted_range_is_api_error() {
        let params = CorrelationQueryParams {
            site: None,
            low: Some(4000.0),
            high: Some(100.0),
        };
        let result = get_correlation(State(test_state()), Query(params)).await;
        assert!(matches!(result, Err(ApiError::InvalidRange(_))));
    }
}
