// ABOUTME: Route definitions for the caterd HTTP API, public and admin.
// ABOUTME: Admin routes sit behind the bearer-token layer; everything else is open.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post, put};

use crate::api;
use crate::app_state::SharedState;
use crate::auth::AuthLayer;

/// Build the complete Axum router with all routes and shared state.
pub fn create_router(state: SharedState) -> Router {
    let public = Router::new()
        .route("/menu", get(api::menu::public_menu))
        .route("/menu/categories", get(api::menu::category_summary))
        .route("/site-settings", get(api::settings::public_settings))
        .route("/auth/login", post(api::auth::login));

    let admin = Router::new()
        .route(
            "/admin/menu",
            get(api::menu::admin_menu).post(api::menu::create_item),
        )
        .route(
            "/admin/menu/{id}",
            put(api::menu::update_item).delete(api::menu::delete_item),
        )
        .route(
            "/admin/site-settings",
            get(api::settings::admin_settings).put(api::settings::update_settings),
        )
        .route_layer(AuthLayer::new(Arc::clone(&state.tokens)));

    Router::new()
        .route("/health", get(health))
        // Nested routers can't match the prefix with a trailing slash, so the
        // `/api/` greeting is registered on the outer router.
        .route("/api/", get(api::root))
        .nest("/api", public.merge(admin))
        .with_state(state)
}

/// Health check handler. Returns 200 OK with a simple JSON body.
async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::AppState;
    use crate::auth::TokenService;
    use axum::body::Body;
    use caterd_store::MemoryStore;
    use http::Request;
    use tower::ServiceExt;

    fn test_state() -> SharedState {
        Arc::new(AppState::new(
            Arc::new(MemoryStore::new()),
            TokenService::new("test-secret"),
        ))
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let app = create_router(test_state());
        let resp = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), 200);

        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn root_greeting_is_public() {
        let app = create_router(test_state());
        let resp = app
            .oneshot(Request::get("/api/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), 200);
    }

    #[tokio::test]
    async fn every_admin_route_requires_a_token() {
        let routes = [
            ("GET", "/api/admin/menu"),
            ("POST", "/api/admin/menu"),
            ("PUT", "/api/admin/menu/some-id"),
            ("DELETE", "/api/admin/menu/some-id"),
            ("GET", "/api/admin/site-settings"),
            ("PUT", "/api/admin/site-settings"),
        ];

        for (method, path) in routes {
            let app = create_router(test_state());
            let resp = app
                .oneshot(
                    Request::builder()
                        .method(method)
                        .uri(path)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(resp.status(), 401, "{method} {path} should be protected");
        }
    }
}
