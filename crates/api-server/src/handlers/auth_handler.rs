//! Registration and login handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use common::AppResult;
use domain::{MSG_LOGIN_SUCCESSFUL, MSG_REGISTERED};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// User display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Alice")]
    pub name: String,
    /// User email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "a@x.com")]
    pub email: String,
    /// User password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "pw123")]
    pub password: String,
}

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// User email address
    #[validate(length(min = 1, message = "Email is required"))]
    #[schema(example = "a@x.com")]
    pub email: String,
    /// User password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "pw123")]
    pub password: String,
}

/// Plain message body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "User registered successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Login response carrying the session token
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Login successful")]
    pub message: String,
    /// Signed session token; send it verbatim in the `authorization` header
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = MessageResponse),
        (status = 400, description = "User already exists or invalid input", body = MessageResponse)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state
        .auth_service
        .register(payload.name, payload.email, payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(MessageResponse::new(MSG_REGISTERED))))
}

/// Login and get a session token
#[utoipa::path(
    post,
    path = "/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "User not found or invalid password", body = MessageResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let result = state
        .auth_service
        .login(payload.email, payload.password)
        .await?;

    Ok(Json(LoginResponse {
        message: MSG_LOGIN_SUCCESSFUL.to_string(),
        token: result.token,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let valid = RegisterRequest {
            name: "Alice".into(),
            email: "a@x.com".into(),
            password: "pw123".into(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = RegisterRequest {
            email: "not-an-email".into(),
            ..valid
        };
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn test_login_request_requires_password() {
        let request = LoginRequest {
            email: "a@x.com".into(),
            password: String::new(),
        };
        assert!(request.validate().is_err());
    }
}
