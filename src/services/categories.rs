use crate::dto::categories::CategoryDto;
use crate::repository::CategoryReader;

use super::{ServiceError, ServiceResult};

pub fn show_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(categories.into_iter().map(CategoryDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}
