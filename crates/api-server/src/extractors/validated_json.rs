//! Validated JSON extractor.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use common::AppError;

/// JSON extractor that automatically validates the payload.
///
/// Bodies that are not JSON, miss a field, or fail validation are rejected
/// with 400 and a `{ "message": ... }` body.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Extract JSON
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        value.validate().map_err(|e| AppError::validation(first_message(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Message of the first failing field, by field name so the choice is stable.
fn first_message(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.iter().collect();
    fields.sort_by_key(|(field, _)| field.to_string());

    fields
        .into_iter()
        .find_map(|(field, errors)| {
            let error = errors.first()?;
            Some(match &error.message {
                Some(msg) => msg.to_string(),
                None => format!("Invalid {}", field),
            })
        })
        .unwrap_or_else(|| "Validation failed".to_string())
}
