//! Directory store implementations
//!
//! Provides the static fixture store behind [`fetch_users`] and
//! [`fetch_groups`]. The fixture lists are built once per process and only
//! read afterwards.

use crate::error::FetchError;
use crate::models::{Group, User};
use crate::traits::DirectoryStore;
use async_trait::async_trait;
use once_cell::sync::Lazy;

static USERS: Lazy<Vec<User>> = Lazy::new(|| {
    vec![
        User::new("Erik", 1),
        User::new("Lisa", 2),
        User::new("Hampus", 2),
        User::new("Linda", 3),
        User::new("Eva", 1),
        User::new("Anna", 3),
    ]
});

static GROUPS: Lazy<Vec<Group>> = Lazy::new(|| {
    vec![
        Group::new(1, "Hajarna"),
        Group::new(2, "Valarna"),
        Group::new(3, "Zebrorna"),
    ]
});

/// In-memory store serving fixed user and group lists
///
/// Stands in for a real data source. Fetches never fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticDirectoryStore;

#[async_trait]
impl DirectoryStore for StaticDirectoryStore {
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError> {
        tracing::debug!(count = USERS.len(), "serving static users");
        Ok(USERS.clone())
    }

    async fn fetch_groups(&self) -> Result<Vec<Group>, FetchError> {
        tracing::debug!(count = GROUPS.len(), "serving static groups");
        Ok(GROUPS.clone())
    }
}

/// Fetches all users from the default store
///
/// # Errors
/// Returns [`FetchError::Users`] if the store cannot be read. The static
/// store never fails.
pub async fn fetch_users() -> Result<Vec<User>, FetchError> {
    StaticDirectoryStore.fetch_users().await
}

/// Fetches all groups from the default store
///
/// # Errors
/// Returns [`FetchError::Groups`] if the store cannot be read. The static
/// store never fails.
pub async fn fetch_groups() -> Result<Vec<Group>, FetchError> {
    StaticDirectoryStore.fetch_groups().await
}
