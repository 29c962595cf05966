use diesel::prelude::*;

use crate::domain::category::Category as DomainCategory;
use crate::domain::types::{CategoryDescription, CategorySlug, TypeConstraintError};

/// Diesel model representing the `categories` table.
#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = crate::schema::categories)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Category {
    pub slug: String,
    pub description: String,
}

impl TryFrom<Category> for DomainCategory {
    type Error = TypeConstraintError;

    fn try_from(category: Category) -> Result<Self, Self::Error> {
        Ok(Self {
            slug: CategorySlug::new(category.slug)?,
            description: CategoryDescription::new(category.description)?,
        })
    }
}

impl From<DomainCategory> for Category {
    fn from(category: DomainCategory) -> Self {
        Self {
            slug: category.slug.into_inner(),
            description: category.description.into_inner(),
        }
    }
}
