use diesel::prelude::*;

use crate::domain::types::{AvatarUrl, DisplayName, TypeConstraintError, Username};
use crate::domain::user::User as DomainUser;

/// Diesel model representing the `users` table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

impl TryFrom<User> for DomainUser {
    type Error = TypeConstraintError;

    fn try_from(user: User) -> Result<Self, Self::Error> {
        Ok(Self {
            username: Username::new(user.username)?,
            name: DisplayName::new(user.name)?,
            avatar_url: AvatarUrl::new(user.avatar_url)?,
        })
    }
}

impl From<DomainUser> for User {
    fn from(user: DomainUser) -> Self {
        Self {
            username: user.username.into_inner(),
            name: user.name.into_inner(),
            avatar_url: user.avatar_url.into_inner(),
        }
    }
}
