//! Dashboard HTTP Routes
//!
//! - `GET  /overview`
//! - `GET  /students?search=&sort=&direction=`
//! - `GET  /students/new`
//! - `GET  /students/:id/form`
//! - `POST /students`, `PUT /students/:id`

use std::sync::Arc;

use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    routing::{get, put},
    Router,
};
use serde::{Deserialize, Serialize};

use super::errors::ApiResult;
use crate::dashboard::{Dashboard, DashboardError, Notice, SubmitOutcome};
use crate::roster::{Overview, RosterQuery};
use crate::student::{StudentForm, StudentId, StudentRecord};

/// Dashboard routes with shared state
pub fn student_routes(dashboard: Arc<Dashboard>) -> Router {
    Router::new()
        .route("/overview", get(overview_handler))
        .route("/students", get(list_handler).post(create_handler))
        .route("/students/new", get(blank_form_handler))
        .route("/students/:id", put(update_handler))
        .route("/students/:id/form", get(edit_form_handler))
        .with_state(dashboard)
}

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub search: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub data: Vec<StudentRecord>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub id: StudentId,
    pub notice: Notice,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<StudentRecord>,
    /// Refreshed collection; null when the re-fetch failed
    pub data: Option<Vec<StudentRecord>>,
}

impl From<SubmitOutcome> for SubmitResponse {
    fn from(outcome: SubmitOutcome) -> Self {
        Self {
            id: outcome.id,
            notice: outcome.notice,
            record: outcome.record,
            data: outcome.students,
        }
    }
}

async fn overview_handler(State(dashboard): State<Arc<Dashboard>>) -> ApiResult<Json<Overview>> {
    Ok(Json(dashboard.overview().await?))
}

async fn list_handler(
    State(dashboard): State<Arc<Dashboard>>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<ListResponse>> {
    let query = RosterQuery::parse(
        params.search.as_deref(),
        params.sort.as_deref(),
        params.direction.as_deref(),
    )
    .map_err(DashboardError::from)?;

    let data = dashboard.list(&query).await?;
    let count = data.len();
    Ok(Json(ListResponse { data, count }))
}

async fn blank_form_handler(State(dashboard): State<Arc<Dashboard>>) -> Json<StudentForm> {
    Json(dashboard.blank_form())
}

async fn edit_form_handler(
    State(dashboard): State<Arc<Dashboard>>,
    Path(id): Path<String>,
) -> ApiResult<Json<StudentForm>> {
    Ok(Json(dashboard.edit_form(&StudentId::new(id)).await?))
}

async fn create_handler(
    State(dashboard): State<Arc<Dashboard>>,
    Json(form): Json<StudentForm>,
) -> ApiResult<(StatusCode, Json<SubmitResponse>)> {
    let outcome = dashboard.submit(&form, None).await?;
    Ok((StatusCode::CREATED, Json(outcome.into())))
}

async fn update_handler(
    State(dashboard): State<Arc<Dashboard>>,
    Path(id): Path<String>,
    Json(form): Json<StudentForm>,
) -> ApiResult<Json<SubmitResponse>> {
    let outcome = dashboard.submit(&form, Some(StudentId::new(id))).await?;
    Ok(Json(outcome.into()))
}
