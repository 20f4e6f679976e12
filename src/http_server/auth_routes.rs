//! Auth HTTP Routes
//!
//! Sign-in gate for the dashboard. The session lives server-side in the
//! configured auth provider.

use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use super::errors::ApiResult;
use crate::auth::UserRef;
use crate::dashboard::{Dashboard, DashboardError};

/// Auth routes with shared state
pub fn auth_routes(dashboard: Arc<Dashboard>) -> Router {
    Router::new()
        .route("/sign-in", post(sign_in_handler))
        .route("/sign-out", post(sign_out_handler))
        .route("/user", get(current_user_handler))
        .with_state(dashboard)
}

#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: UserRef,
}

async fn sign_in_handler(
    State(dashboard): State<Arc<Dashboard>>,
    Json(request): Json<SignInRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = dashboard.sign_in(&request.email, &request.password).await?;
    Ok(Json(UserResponse { user }))
}

async fn sign_out_handler(State(dashboard): State<Arc<Dashboard>>) -> ApiResult<StatusCode> {
    dashboard.sign_out().await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn current_user_handler(
    State(dashboard): State<Arc<Dashboard>>,
) -> ApiResult<Json<UserResponse>> {
    let user = dashboard
        .current_user()
        .ok_or(DashboardError::AuthenticationRequired)?;
    Ok(Json(UserResponse { user }))
}
