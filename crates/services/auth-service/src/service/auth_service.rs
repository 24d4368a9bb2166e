//! Authentication service - Registration, login and token verification.
//!
//! SOLID (SRP): Handles authentication concerns only.
//! DDD: Uses domain Password value object for hashing.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use common::{AppError, AppResult};
use domain::{Claims, Password, User};

use crate::store::UserStore;
use crate::token::TokenService;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Successful login outcome
#[derive(Debug, Clone)]
pub struct LoginResult {
    /// Signed session token
    pub token: String,
    /// The authenticated user
    pub user: User,
}

/// Authentication service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user
    async fn register(&self, name: String, email: String, password: String) -> AppResult<User>;

    /// Check credentials and issue a session token
    async fn login(&self, email: String, password: String) -> AppResult<LoginResult>;

    /// Verify a session token and extract its claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;

    /// Number of registered users
    async fn user_count(&self) -> AppResult<usize>;
}

/// Concrete implementation of AuthService over a user store.
pub struct Authenticator {
    store: Arc<dyn UserStore>,
    tokens: TokenService,
    bcrypt_cost: u32,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(store: Arc<dyn UserStore>, tokens: TokenService, bcrypt_cost: u32) -> Self {
        Self {
            store,
            tokens,
            bcrypt_cost,
        }
    }

    /// Hash on the blocking pool; bcrypt is deliberately slow.
    async fn hash_password(&self, password: String) -> AppResult<String> {
        let cost = self.bcrypt_cost;
        let password = tokio::task::spawn_blocking(move || Password::with_cost(&password, cost))
            .await
            .map_err(|e| AppError::internal(format!("Hashing task failed: {}", e)))??;

        Ok(password.into_string())
    }

    async fn verify_password(&self, password: String, hash: String) -> AppResult<bool> {
        let valid =
            tokio::task::spawn_blocking(move || Password::from_hash(hash).try_verify(&password))
                .await
                .map_err(|e| AppError::internal(format!("Verification task failed: {}", e)))??;

        Ok(valid)
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, name: String, email: String, password: String) -> AppResult<User> {
        // Cheap early exit; the store re-checks under its lock
        if self.store.find_by_email(&email).await?.is_some() {
            warn!(%email, "Registration rejected: email already registered");
            return Err(AppError::UserExists);
        }

        let password_hash = self.hash_password(password).await?;
        let user = self.store.add(name, email, password_hash).await?;

        info!(user_id = user.id, email = %user.email, "User registered");
        Ok(user)
    }

    async fn login(&self, email: String, password: String) -> AppResult<LoginResult> {
        let user = match self.store.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                warn!(%email, "Login rejected: unknown email");
                return Err(AppError::UserNotFound);
            }
        };

        if !self
            .verify_password(password, user.password_hash.clone())
            .await?
        {
            warn!(user_id = user.id, "Login rejected: invalid password");
            return Err(AppError::InvalidPassword);
        }

        let token = self.tokens.issue(&user)?;
        info!(user_id = user.id, "User logged in");

        Ok(LoginResult { token, user })
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        self.tokens.verify(token)
    }

    async fn user_count(&self) -> AppResult<usize> {
        self.store.count().await
    }
}
