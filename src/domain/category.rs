use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryDescription, CategorySlug};

/// Game category a review is filed under.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub slug: CategorySlug,
    pub description: CategoryDescription,
}
