//! Session token issuance and verification.

mod token_service;

pub use token_service::TokenService;
