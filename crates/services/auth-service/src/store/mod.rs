//! User storage.

mod user_store;

pub use user_store::{InMemoryUserStore, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use user_store::MockUserStore;
