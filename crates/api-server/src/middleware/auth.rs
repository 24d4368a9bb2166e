//! Token gate for protected routes.

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};

use common::{AppError, AppResult};

use crate::state::AppState;

/// Authentication middleware that validates session tokens.
///
/// The `authorization` header carries the raw token with no scheme prefix.
/// A missing or empty header is a 403; anything that fails verification is
/// a 401. On success the token's `Claims` are inserted into the request
/// extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_token(&request)?;

    let claims = state.auth_service.verify_token(&token)?;

    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

/// Extract the raw token from the `authorization` header.
fn extract_token(request: &Request<Body>) -> AppResult<String> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .filter(|value| !value.is_empty())
        .ok_or(AppError::MissingToken)?;

    // Present but not visible ASCII: cannot be a valid token
    let token = header.to_str().map_err(|_| AppError::InvalidToken)?;

    Ok(token.to_string())
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn request_with(value: Option<HeaderValue>) -> Request<Body> {
        let mut builder = Request::builder().uri("/profile");
        if let Some(value) = value {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_missing_header() {
        let result = extract_token(&request_with(None));
        assert!(matches!(result, Err(AppError::MissingToken)));
    }

    #[test]
    fn test_empty_header_counts_as_missing() {
        let result = extract_token(&request_with(Some(HeaderValue::from_static(""))));
        assert!(matches!(result, Err(AppError::MissingToken)));
    }

    #[test]
    fn test_raw_token_is_not_stripped() {
        let token = extract_token(&request_with(Some(HeaderValue::from_static(
            "Bearer abc.def.ghi",
        ))))
        .unwrap();

        assert_eq!(token, "Bearer abc.def.ghi");
    }

    #[test]
    fn test_non_ascii_header_is_invalid() {
        let value = HeaderValue::from_bytes(&[0xC3, 0xA9]).unwrap();
        let result = extract_token(&request_with(Some(value)));

        assert!(matches!(result, Err(AppError::InvalidToken)));
    }
}
