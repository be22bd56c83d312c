use std::collections::HashSet;
use std::str::FromStr;
use std::sync::atomic::Ordering;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;

use careerbridge::catalog::domain::{OpportunityId, SortKey};
use careerbridge::catalog::{FacetIndex, FacetKind, SessionView};
use careerbridge::error::AppError;

use crate::infra::{split_multi, AppState};

pub(crate) fn catalog_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/jobs", get(jobs_endpoint))
        .route("/api/v1/jobs/facets", get(facets_endpoint))
        .route("/api/v1/saved", get(saved_endpoint))
        .route("/api/v1/saved/:job_id", post(toggle_saved_endpoint))
        .with_state(state)
}

/// Search parameters for the jobs listing. Multi-value facets arrive as
/// pipe-separated lists (`jobType=Internship|Contract`).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct JobsQuery {
    pub(crate) q: Option<String>,
    pub(crate) job_type: Option<String>,
    pub(crate) location: Option<String>,
    pub(crate) experience: Option<String>,
    pub(crate) sort: Option<String>,
    pub(crate) page: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(crate) struct JobsResponse {
    #[serde(flatten)]
    pub(crate) view: SessionView,
    pub(crate) message: String,
}

/// Apply the request's criteria to the shared session and return the visible
/// page. Criteria application and recomputation happen under one lock hold,
/// so concurrent requests never observe a half-updated view.
pub(crate) async fn jobs_endpoint(
    State(state): State<AppState>,
    Query(params): Query<JobsQuery>,
) -> Result<Json<JobsResponse>, AppError> {
    let sort = params
        .sort
        .as_deref()
        .map(SortKey::from_str)
        .transpose()?
        .unwrap_or_default();

    let mut session = state.session.lock().expect("session mutex poisoned");
    session.clear_all_filters()?;
    if let Some(text) = params.q.as_deref() {
        session.set_text(text)?;
    }
    for value in split_multi(params.job_type.as_deref()) {
        session.toggle_facet_value(FacetKind::JobType, &value)?;
    }
    for value in split_multi(params.location.as_deref()) {
        session.toggle_facet_value(FacetKind::Location, &value)?;
    }
    for value in split_multi(params.experience.as_deref()) {
        session.toggle_facet_value(FacetKind::Experience, &value)?;
    }
    session.set_sort(sort)?;
    // Page is applied last: criteria changes reset to page 1.
    session.set_page(params.page.unwrap_or(1))?;

    Ok(Json(JobsResponse {
        view: session.view(),
        message: session.found_summary(),
    }))
}

pub(crate) async fn facets_endpoint(State(state): State<AppState>) -> Json<FacetIndex> {
    let session = state.session.lock().expect("session mutex poisoned");
    Json(session.facet_index().clone())
}

pub(crate) async fn saved_endpoint(State(state): State<AppState>) -> Json<serde_json::Value> {
    let session = state.session.lock().expect("session mutex poisoned");
    Json(json!({ "savedIds": sorted_ids(session.saved().ids()) }))
}

pub(crate) async fn toggle_saved_endpoint(
    State(state): State<AppState>,
    Path(job_id): Path<u32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let mut session = state.session.lock().expect("session mutex poisoned");
    let saved = session.toggle_saved(OpportunityId(job_id))?;
    let message = if saved {
        "Job saved to your list!"
    } else {
        "Job removed from saved list"
    };

    Ok(Json(json!({
        "id": job_id,
        "saved": saved,
        "savedIds": sorted_ids(session.saved().ids()),
        "message": message,
    })))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
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

pub(crate) async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

fn sorted_ids(ids: &HashSet<OpportunityId>) -> Vec<u32> {
    let mut ids: Vec<u32> = ids.iter().map(|id| id.0).collect();
    ids.sort_unstable();
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{ready_session, AppState};
    use axum::body::Body;
    use axum::http::Request;
    use careerbridge::catalog::sample_catalog;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use std::sync::atomic::AtomicBool;
    use std::sync::{Arc, Mutex};
    use tower::ServiceExt;

    fn test_router() -> Router {
        let session = ready_session(5, sample_catalog()).expect("session builds");
        let handle = PrometheusBuilder::new().build_recorder().handle();
        catalog_router(AppState {
            session: Arc::new(Mutex::new(session)),
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: Arc::new(handle),
        })
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request builds"))
            .await
            .expect("router responds");
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        (status, serde_json::from_slice(&body).expect("json payload"))
    }

    fn item_ids(payload: &Value) -> Vec<u64> {
        payload["page"]["items"]
            .as_array()
            .expect("items array")
            .iter()
            .map(|item| item["id"].as_u64().expect("numeric id"))
            .collect()
    }

    #[tokio::test]
    async fn jobs_endpoint_returns_first_page_of_recent_results() {
        let (status, payload) = get_json(test_router(), "/api/v1/jobs").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(item_ids(&payload), vec![1, 2, 3, 4, 5]);
        assert_eq!(payload["page"]["totalPages"], 2);
        assert_eq!(payload["activeFilterCount"], 0);
        assert_eq!(payload["message"], "Found 7 jobs matching your criteria");
    }

    #[tokio::test]
    async fn jobs_endpoint_applies_text_and_facets() {
        let router = test_router();
        let (status, payload) = get_json(router.clone(), "/api/v1/jobs?q=intern").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(item_ids(&payload), vec![2, 6]);

        let (status, payload) = get_json(
            router,
            "/api/v1/jobs?jobType=Internship&location=New%20York,%20NY",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(item_ids(&payload), vec![2]);
        assert_eq!(payload["activeFilterCount"], 2);
    }

    #[tokio::test]
    async fn pipe_separated_values_widen_within_a_facet() {
        let (status, payload) =
            get_json(test_router(), "/api/v1/jobs?jobType=Internship%7CContract").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(item_ids(&payload), vec![2, 5, 6]);
        assert_eq!(payload["activeFilterCount"], 1);
    }

    #[tokio::test]
    async fn jobs_endpoint_paginates_and_sorts() {
        let router = test_router();
        let (_, payload) = get_json(router.clone(), "/api/v1/jobs?page=2").await;
        assert_eq!(item_ids(&payload), vec![6, 7]);

        let (_, payload) = get_json(router, "/api/v1/jobs?sort=salary-high").await;
        assert_eq!(item_ids(&payload), vec![1, 5, 6, 2, 3]);
    }

    #[tokio::test]
    async fn unknown_sort_key_is_a_bad_request() {
        let (status, payload) = get_json(test_router(), "/api/v1/jobs?sort=banana").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(payload["error"]
            .as_str()
            .expect("error message")
            .contains("banana"));
    }

    #[tokio::test]
    async fn toggle_saved_round_trips() {
        let router = test_router();

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/saved/3")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        let payload: Value = serde_json::from_slice(&body).expect("json payload");
        assert_eq!(payload["saved"], true);
        assert_eq!(payload["savedIds"], serde_json::json!([3]));
        assert_eq!(payload["message"], "Job saved to your list!");

        let (status, payload) = get_json(router, "/api/v1/saved").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["savedIds"], serde_json::json!([3]));
    }

    #[tokio::test]
    async fn facets_endpoint_lists_filter_options() {
        let (status, payload) = get_json(test_router(), "/api/v1/jobs/facets").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            payload["jobType"],
            serde_json::json!(["Full-time", "Internship", "Contract"])
        );
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let (status, payload) = get_json(test_router(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["status"], "ok");
    }
}
