// ABOUTME: Site settings handlers: public read and the admin partial update.
// ABOUTME: The store materializes defaults on first touch, so these never 404.

use axum::Json;
use axum::extract::State;
use caterd_core::{SiteSettings, SiteSettingsPatch};

use crate::app_state::SharedState;
use crate::error::ApiError;

/// GET /api/site-settings - the singleton, created from defaults if absent.
pub async fn public_settings(
    State(state): State<SharedState>,
) -> Result<Json<SiteSettings>, ApiError> {
    Ok(Json(state.store.site_settings().await?))
}

/// GET /api/admin/site-settings - same record, behind the auth gate.
pub async fn admin_settings(
    State(state): State<SharedState>,
) -> Result<Json<SiteSettings>, ApiError> {
    Ok(Json(state.store.site_settings().await?))
}

/// PUT /api/admin/site-settings - partial update of the singleton.
pub async fn update_settings(
    State(state): State<SharedState>,
    Json(patch): Json<SiteSettingsPatch>,
) -> Result<Json<SiteSettings>, ApiError> {
    Ok(Json(state.store.update_site_settings(&patch).await?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::AppState;
    use crate::auth::TokenService;
    use crate::routes::create_router;
    use axum::body::Body;
    use caterd_store::MemoryStore;
    use http::Request;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> SharedState {
        Arc::new(AppState::new(
            Arc::new(MemoryStore::new()),
            TokenService::new("test-secret"),
        ))
    }

    fn bearer(state: &SharedState) -> String {
        format!("Bearer {}", state.tokens.issue("admin").unwrap())
    }

    async fn json_body(resp: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn first_read_returns_defaults() {
        let resp = create_router(test_state())
            .oneshot(Request::get("/api/site-settings").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);

        let settings = json_body(resp).await;
        assert_eq!(settings["business_name"], "Gourmet Catering");
        assert_eq!(settings["menu_title"], "Our Menu");
    }

    #[tokio::test]
    async fn patch_overwrites_named_field_and_keeps_the_rest() {
        let state = test_state();

        let resp = create_router(Arc::clone(&state))
            .oneshot(
                Request::put("/api/admin/site-settings")
                    .header("authorization", bearer(&state))
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"business_name":"X"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);

        let updated = json_body(resp).await;
        assert_eq!(updated["business_name"], "X");
        assert_eq!(updated["hero_title"], "Exquisite Catering Services");

        // Public read reflects the patch.
        let resp = create_router(Arc::clone(&state))
            .oneshot(Request::get("/api/site-settings").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let reread = json_body(resp).await;
        assert_eq!(reread["business_name"], "X");
        assert_eq!(reread["contact_email1"], "info@gourmetcatering.com");
    }

    #[tokio::test]
    async fn update_before_any_read_materializes_defaults_first() {
        let state = test_state();

        let resp = create_router(Arc::clone(&state))
            .oneshot(
                Request::put("/api/admin/site-settings")
                    .header("authorization", bearer(&state))
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"footer_text":"new footer"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);

        let updated = json_body(resp).await;
        assert_eq!(updated["footer_text"], "new footer");
        assert_eq!(updated["business_name"], "Gourmet Catering");
    }

    #[tokio::test]
    async fn admin_read_matches_public_read() {
        let state = test_state();

        let resp = create_router(Arc::clone(&state))
            .oneshot(
                Request::get("/api/admin/site-settings")
                    .header("authorization", bearer(&state))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);

        let admin_view = json_body(resp).await;
        assert_eq!(admin_view["business_name"], "Gourmet Catering");
    }
}
