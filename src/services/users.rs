use crate::dto::users::UserDto;
use crate::repository::UserReader;

use super::{ServiceError, ServiceResult};

pub fn show_users<R>(repo: &R) -> ServiceResult<Vec<UserDto>>
where
    R: UserReader,
{
    repo.list_users()
        .map(|users| users.into_iter().map(UserDto::from).collect())
        .map_err(|e| {
            log::error!("Failed to list users: {e}");
            ServiceError::Internal
        })
}
