// ABOUTME: Handler modules for the caterd API.
// ABOUTME: Split by surface: login, menu catalog, and the site settings singleton.

pub mod auth;
pub mod menu;
pub mod settings;

/// GET /api/ - greeting for the API root.
pub async fn root() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "message": "Catering Service API" }))
}
