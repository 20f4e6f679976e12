//! # HTTP Server
//!
//! Combines the health, auth, and dashboard routers behind CORS and
//! request tracing.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::auth_routes::auth_routes;
use super::student_routes::student_routes;
use crate::config::ListenConfig;
use crate::dashboard::Dashboard;
use crate::observability::Event;

/// HTTP server for the dashboard
pub struct HttpServer {
    config: ListenConfig,
    router: Router,
}

impl HttpServer {
    pub fn new(config: ListenConfig, dashboard: Arc<Dashboard>) -> Self {
        let router = Self::build_router(&config, dashboard);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    pub fn build_router(config: &ListenConfig, dashboard: Arc<Dashboard>) -> Router {
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/health", get(health_handler))
            .nest("/auth", auth_routes(dashboard.clone()))
            .nest("/api", student_routes(dashboard))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serves until Ctrl-C
    pub async fn start(self) -> io::Result<()> {
        let addr = self.config.socket_addr();

        let listener = TcpListener::bind(addr).await?;
        info!(event = %Event::Serving, addr = %addr, "dashboard API listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
            })
            .await?;

        info!(event = %Event::ShutdownComplete, "server stopped");
        Ok(())
    }
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok", "service": "rosterdesk" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::InMemoryAuthProvider;
    use crate::store::InMemoryStudentStore;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn server(config: ListenConfig) -> HttpServer {
        let dashboard = Dashboard::new(
            Arc::new(InMemoryStudentStore::new()),
            Arc::new(InMemoryAuthProvider::new()),
        );
        HttpServer::new(config, Arc::new(dashboard))
    }

    #[test]
    fn test_server_with_custom_port() {
        let server = server(ListenConfig::local(8080));
        assert_eq!(server.socket_addr(), SocketAddr::from(([127, 0, 0, 1], 8080)));
    }

    #[tokio::test]
    async fn test_health() {
        let router = server(ListenConfig::default()).router();
        let response = router
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["status"], "ok");
    }

    #[tokio::test]
    async fn test_permissive_cors_when_no_origins() {
        let mut config = ListenConfig::default();
        config.cors_origins.clear();
        let router = server(config).router();

        let response = router
            .oneshot(
                Request::get("/health")
                    .header("origin", "http://anywhere.test")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }
}
