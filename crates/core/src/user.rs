//! User account record.

use serde::{Deserialize, Serialize};

use crate::id::UserId;

/// A user account as exposed to handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub uid: UserId,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "imageUrl")]
    pub image_url: String,
    #[serde(default)]
    pub website: String,
}

impl User {
    pub fn new(uid: UserId, email: impl Into<String>) -> Self {
        Self {
            uid,
            email: email.into(),
            name: String::new(),
            image_url: String::new(),
            website: String::new(),
        }
    }
}
