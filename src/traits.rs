//! Common trait definitions
//!
//! Defines the `DirectoryStore` abstraction over wherever users and groups
//! come from. The static fixture store implements it today; a real data
//! source can be dropped in later without touching callers.

use crate::error::FetchError;
use crate::models::{Group, User};
use async_trait::async_trait;

/// Read access to users and groups
///
/// Implementations return records in a stable order. The provided helpers
/// are built on the two fetches and do not enforce that a user's group
/// exists.
#[async_trait]
pub trait DirectoryStore: Send + Sync {
    /// Fetch every user
    async fn fetch_users(&self) -> Result<Vec<User>, FetchError>;

    /// Fetch every group
    async fn fetch_groups(&self) -> Result<Vec<Group>, FetchError>;

    /// Look up a group by id
    async fn find_group(&self, id: u32) -> Result<Option<Group>, FetchError> {
        Ok(self
            .fetch_groups()
            .await?
            .into_iter()
            .find(|group| group.id == id))
    }

    /// Users belonging to the given group, in store order
    async fn users_in_group(&self, id: u32) -> Result<Vec<User>, FetchError> {
        let mut users = self.fetch_users().await?;
        users.retain(|user| user.group == id);
        Ok(users)
    }
}
