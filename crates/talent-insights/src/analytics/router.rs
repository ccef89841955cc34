use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};

use super::candidates::{
    above_bar_discrepancies, AboveBarBasis, CandidateColumn, CandidateId, CandidateSummary,
    Recommendation, RecommendationCounts, RecommendationDistribution,
};
use super::domain::PricingTier;
use super::market::{GeographyColumn, RateCardColumn};
use super::period::TimePeriod;
use super::table::{TableViewState, VendorColumn};
use crate::dataset::Dataset;

#[derive(Debug, Clone)]
struct AnalyticsState {
    dataset: Arc<Dataset>,
    default_period: TimePeriod,
}

/// Router exposing the table pipelines over a shared, read-only dataset. Requests that omit
/// `selected_period` are viewed through `default_period`.
pub fn analytics_router(dataset: Arc<Dataset>, default_period: TimePeriod) -> Router {
    Router::new()
        .route("/api/v1/vendors/table", post(vendor_table_handler))
        .route("/api/v1/roles/table", post(role_table_handler))
        .route("/api/v1/job-families/table", post(job_family_table_handler))
        .route("/api/v1/candidates/table", post(candidate_table_handler))
        .route("/api/v1/candidates/summary", get(candidate_summary_handler))
        .route("/api/v1/rate-cards/table", post(rate_card_table_handler))
        .route("/api/v1/geography/table", post(geography_table_handler))
        .with_state(AnalyticsState {
            dataset,
            default_period,
        })
}

#[derive(Debug, Deserialize)]
pub struct CandidateTableRequest {
    #[serde(flatten)]
    pub state: TableViewState<CandidateColumn>,
    #[serde(default)]
    pub basis: AboveBarBasis,
    #[serde(default)]
    pub recommendation: Option<Recommendation>,
}

#[derive(Debug, Deserialize)]
pub struct RateCardTableRequest {
    #[serde(flatten)]
    pub state: TableViewState<RateCardColumn>,
    #[serde(default)]
    pub tier: Option<PricingTier>,
    /// Planned hires, used to price volume discounts.
    #[serde(default)]
    pub volume: u32,
}

/// Candidate headline numbers on both above-bar bases.
#[derive(Debug, Serialize)]
pub struct CandidateOverview {
    pub stored: CandidateSummary,
    pub derived: CandidateSummary,
    pub normalized_distribution: RecommendationDistribution,
    pub discrepancies: Vec<CandidateId>,
}

/// Decode a table request, filling in the configured period when the body leaves it out.
fn decode<T: DeserializeOwned>(
    mut body: Value,
    default_period: TimePeriod,
) -> Result<T, Response> {
    if let Value::Object(fields) = &mut body {
        fields
            .entry("selected_period")
            .or_insert_with(|| Value::from(default_period.key()));
    }
    serde_json::from_value(body).map_err(|err| {
        let payload = json!({ "error": err.to_string() });
        (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
    })
}

async fn vendor_table_handler(
    State(app): State<AnalyticsState>,
    Json(body): Json<Value>,
) -> Response {
    match decode::<TableViewState<VendorColumn>>(body, app.default_period) {
        Ok(state) => (StatusCode::OK, Json(app.dataset.vendor_table(&state))).into_response(),
        Err(rejection) => rejection,
    }
}

async fn role_table_handler(
    State(app): State<AnalyticsState>,
    Json(body): Json<Value>,
) -> Response {
    match decode::<TableViewState<VendorColumn>>(body, app.default_period) {
        Ok(state) => (StatusCode::OK, Json(app.dataset.role_table(&state))).into_response(),
        Err(rejection) => rejection,
    }
}

async fn job_family_table_handler(
    State(app): State<AnalyticsState>,
    Json(body): Json<Value>,
) -> Response {
    match decode::<TableViewState<VendorColumn>>(body, app.default_period) {
        Ok(state) => (StatusCode::OK, Json(app.dataset.job_family_table(&state))).into_response(),
        Err(rejection) => rejection,
    }
}

async fn candidate_table_handler(
    State(app): State<AnalyticsState>,
    Json(body): Json<Value>,
) -> Response {
    match decode::<CandidateTableRequest>(body, app.default_period) {
        Ok(request) => {
            let view = app.dataset.candidate_table(
                &request.state,
                request.basis,
                request.recommendation,
            );
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(rejection) => rejection,
    }
}

async fn candidate_summary_handler(State(app): State<AnalyticsState>) -> Response {
    let candidates = &app.dataset.candidates;
    let overview = CandidateOverview {
        stored: CandidateSummary::from_candidates(candidates, AboveBarBasis::Stored),
        derived: CandidateSummary::from_candidates(candidates, AboveBarBasis::Derived),
        normalized_distribution: RecommendationCounts::tally(candidates)
            .normalized_distribution(),
        discrepancies: above_bar_discrepancies(candidates)
            .into_iter()
            .map(|candidate| candidate.id.clone())
            .collect(),
    };
    (StatusCode::OK, Json(overview)).into_response()
}

async fn rate_card_table_handler(
    State(app): State<AnalyticsState>,
    Json(body): Json<Value>,
) -> Response {
    match decode::<RateCardTableRequest>(body, app.default_period) {
        Ok(request) => {
            let view = app
                .dataset
                .rate_card_table(&request.state, request.tier, request.volume);
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(rejection) => rejection,
    }
}

async fn geography_table_handler(
    State(app): State<AnalyticsState>,
    Json(body): Json<Value>,
) -> Response {
    match decode::<TableViewState<GeographyColumn>>(body, app.default_period) {
        Ok(state) => (StatusCode::OK, Json(app.dataset.geography_table(&state))).into_response(),
        Err(rejection) => rejection,
    }
}
