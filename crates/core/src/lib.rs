//! `account-core` — error taxonomy and user model for the account service.
//!
//! This crate has no HTTP or storage dependencies. The HTTP layer turns an
//! [`AppError`] into a response by asking [`status_of`] for the status code.

pub mod error;
pub mod id;
pub mod interfaces;
pub mod user;

pub use error::{AppError, AppResult, ErrorKind, find_app_error, status_for_tag, status_of};
pub use id::UserId;
pub use interfaces::{UserRepository, UserService};
pub use user::User;
