//! Capability contracts for user lookup.
//!
//! Handlers depend on [`UserService`]; a service depends on a
//! [`UserRepository`] for its backing store. Both are injected as trait
//! objects when the application is constructed.

use crate::error::AppResult;
use crate::id::UserId;
use crate::user::User;

/// Business-level user operations.
#[async_trait::async_trait]
pub trait UserService: Send + Sync {
    /// Get a user by uid.
    ///
    /// A missing user is reported as `AppError::not_found("uid", uid)`.
    async fn get(&self, uid: UserId) -> AppResult<User>;
}

/// Storage-level user access.
#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    /// Get a user by uid.
    async fn find_by_id(&self, uid: UserId) -> AppResult<User>;
}
