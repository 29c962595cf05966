use serde::Serialize;

use crate::domain::category::Category;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryDto {
    pub slug: String,
    pub description: String,
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        Self {
            slug: value.slug.into_inner(),
            description: value.description.into_inner(),
        }
    }
}

/// `GET /api/categories`
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub category: Vec<CategoryDto>,
}
