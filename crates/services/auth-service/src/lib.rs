//! Auth Service Library
//!
//! User store, credential hashing and session tokens behind the
//! `AuthService` trait.

pub mod config;
pub mod service;
pub mod store;
pub mod token;

use std::sync::Arc;

use crate::config::AuthServiceConfig;
use crate::service::{AuthService, Authenticator};
use crate::store::{InMemoryUserStore, UserStore};
use crate::token::TokenService;

/// Build an auth service over a fresh in-memory store.
pub fn build_service(config: &AuthServiceConfig) -> Arc<dyn AuthService> {
    build_service_with_store(config, Arc::new(InMemoryUserStore::new()))
}

/// Build an auth service over the given store.
pub fn build_service_with_store(
    config: &AuthServiceConfig,
    store: Arc<dyn UserStore>,
) -> Arc<dyn AuthService> {
    Arc::new(Authenticator::new(
        store,
        TokenService::from_config(&config.jwt),
        config.credentials.bcrypt_cost,
    ))
}
