use serde::{Deserialize, Serialize};

use crate::domain::types::{AvatarUrl, DisplayName, Username};

/// A registered user. Users own reviews and author comments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub username: Username,
    pub name: DisplayName,
    pub avatar_url: AvatarUrl,
}
