use serde::Serialize;

use crate::domain::user::User;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct UserDto {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        Self {
            username: value.username.into_inner(),
            name: value.name.into_inner(),
            avatar_url: value.avatar_url.into_inner(),
        }
    }
}

/// `GET /api/users`
#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<UserDto>,
}
