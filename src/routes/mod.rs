//! Routers: common probes and the superhero endpoints.

mod common;
mod hero;

pub use common::common_routes;
pub use hero::{hero_routes, HERO_ROUTE_PREFIX};

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application router: probes at the root, heroes under `/api/superhero`,
/// request bodies capped at `body_limit` bytes.
pub fn app_router(state: AppState, body_limit: usize) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest(HERO_ROUTE_PREFIX, hero_routes(state))
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::HeroService;
    use crate::store::memory::MemoryHeroStore;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(body_limit: usize) -> Router {
        app_router(
            AppState {
                heroes: HeroService::new(Arc::new(MemoryHeroStore::default())),
            },
            body_limit,
        )
    }

    #[tokio::test]
    async fn mounts_probes_and_heroes() {
        let response = app(1024)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app(1024)
            .oneshot(Request::builder().uri("/api/superhero").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let name = "x".repeat(256);
        let body = format!(
            r#"{{"name":"{name}","firstName":"a","lastName":"b","place":"c"}}"#
        );
        let response = app(64)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/superhero")
                    .header("content-type", "application/json")
                    .header("content-length", body.len())
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
