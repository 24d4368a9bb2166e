//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Credentials
// =============================================================================

/// Default bcrypt work factor for new password hashes
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Lowest work factor bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;

/// Highest work factor bcrypt accepts
pub const MAX_BCRYPT_COST: u32 = 31;

/// Check if a bcrypt work factor is within the supported range
pub fn is_valid_bcrypt_cost(cost: u32) -> bool {
    (MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost)
}

// =============================================================================
// Authentication
// =============================================================================

/// Default session token lifetime in hours
pub const DEFAULT_TOKEN_EXPIRATION_HOURS: i64 = 3;

/// Seconds per hour (for token expiration calculation)
pub const SECONDS_PER_HOUR: i64 = 3600;

/// Header carrying the raw session token (no scheme prefix)
pub const TOKEN_HEADER: &str = "authorization";

// =============================================================================
// Messages
// =============================================================================

/// Returned after a successful registration
pub const MSG_REGISTERED: &str = "User registered successfully";

/// Returned after a successful login
pub const MSG_LOGIN_SUCCESSFUL: &str = "Login successful";

/// Greeting returned by the profile endpoint
pub fn welcome_message(name: &str) -> String {
    format!("Welcome {}", name)
}
