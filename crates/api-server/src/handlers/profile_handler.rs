//! Protected profile handler.

use axum::{extract::Extension, response::Json, routing::get, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use domain::{welcome_message, Claims};

use crate::state::AppState;

/// Profile response echoing the verified token claims
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    #[schema(example = "Welcome Alice")]
    pub message: String,
    pub user: Claims,
}

/// Create profile routes. Callers must layer `auth_middleware` on top.
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/profile", get(get_profile))
}

/// Get the authenticated user's profile
#[utoipa::path(
    get,
    path = "/profile",
    tag = "Profile",
    security(("token" = [])),
    responses(
        (status = 200, description = "Token claims of the caller", body = ProfileResponse),
        (status = 401, description = "Invalid or expired token"),
        (status = 403, description = "Token is required")
    )
)]
pub async fn get_profile(Extension(claims): Extension<Claims>) -> Json<ProfileResponse> {
    Json(ProfileResponse {
        message: welcome_message(&claims.name),
        user: claims,
    })
}
