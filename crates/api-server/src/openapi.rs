//! OpenAPI documentation.

use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};

use crate::handlers::auth_handler::{
    LoginRequest, LoginResponse, MessageResponse, RegisterRequest,
};
use crate::handlers::profile_handler::ProfileResponse;
use domain::{Claims, TOKEN_HEADER};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::auth_handler::register,
        crate::handlers::auth_handler::login,
        crate::handlers::profile_handler::get_profile,
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            MessageResponse,
            LoginResponse,
            ProfileResponse,
            Claims,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration and login"),
        (name = "Profile", description = "Token-protected endpoints"),
    )
)]
pub struct ApiDoc;

/// Security scheme modifier.
///
/// The token travels as the raw `authorization` header value, so it is
/// described as an API key rather than an HTTP bearer scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(TOKEN_HEADER))),
            );
        }
    }
}
