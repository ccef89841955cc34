use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use talent_insights::analytics::{
    analytics_router, TimePeriod, ALL_JOB_FAMILIES, ALL_LOCATIONS, ALL_ROLES, ALL_VENDORS,
};
use talent_insights::dataset::Dataset;

#[derive(Debug, Serialize)]
pub(crate) struct PeriodOption {
    pub(crate) key: &'static str,
    pub(crate) label: &'static str,
}

/// Dropdown contents, each list led by its "All ..." sentinel.
#[derive(Debug, Serialize)]
pub(crate) struct FilterOptions {
    pub(crate) periods: Vec<PeriodOption>,
    pub(crate) vendors: Vec<String>,
    pub(crate) roles: Vec<String>,
    pub(crate) job_families: Vec<String>,
    pub(crate) locations: Vec<String>,
}

impl FilterOptions {
    fn from_dataset(dataset: &Dataset) -> Self {
        fn with_sentinel<'a>(
            sentinel: &'a str,
            names: impl Iterator<Item = &'a str>,
        ) -> Vec<String> {
            std::iter::once(sentinel)
                .chain(names)
                .map(str::to_string)
                .collect()
        }

        Self {
            periods: TimePeriod::ordered()
                .into_iter()
                .map(|period| PeriodOption {
                    key: period.key(),
                    label: period.label(),
                })
                .collect(),
            vendors: with_sentinel(
                ALL_VENDORS,
                dataset.vendors.iter().map(|vendor| vendor.name.as_str()),
            ),
            roles: with_sentinel(ALL_ROLES, dataset.roles.iter().map(|role| role.name.as_str())),
            job_families: with_sentinel(
                ALL_JOB_FAMILIES,
                dataset.job_families.iter().map(|family| family.name.as_str()),
            ),
            locations: with_sentinel(ALL_LOCATIONS, dataset.locations().into_iter()),
        }
    }
}

pub(crate) fn with_analytics_routes(
    dataset: Arc<Dataset>,
    default_period: TimePeriod,
) -> axum::Router {
    analytics_router(dataset, default_period)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/filter-options",
            axum::routing::get(filter_options_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn filter_options_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<FilterOptions> {
    Json(FilterOptions::from_dataset(&state.dataset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn app(ready: bool) -> axum::Router {
        let dataset = Arc::new(Dataset::seed());
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            dataset: dataset.clone(),
        };
        with_analytics_routes(dataset, TimePeriod::default()).layer(Extension(state))
    }

    async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
            .await
            .expect("router call");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let (status, body) = get(app(false), "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "initializing");

        let (status, body) = get(app(true), "/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
    }

    #[tokio::test]
    async fn health_is_always_ok() {
        let (status, body) = get(app(false), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn filter_options_lead_with_sentinels() {
        let (status, body) = get(app(true), "/api/v1/filter-options").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["vendors"][0], ALL_VENDORS);
        assert_eq!(body["vendors"].as_array().expect("vendors").len(), 6);
        assert_eq!(body["roles"][0], ALL_ROLES);
        assert_eq!(body["job_families"][1], "Software Engineering");
        assert_eq!(body["locations"][0], ALL_LOCATIONS);
        assert_eq!(body["periods"][3]["key"], "1year");
    }

    #[tokio::test]
    async fn analytics_routes_are_mounted() {
        let response = app(true)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/vendors/table")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"selected_vendor":"CodeHire Partners"}"#))
                    .expect("request"),
            )
            .await
            .expect("router call");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
