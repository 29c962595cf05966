use diesel::prelude::*;

use crate::domain::category::Category;
use crate::models::category::Category as DbCategory;
use crate::repository::{CategoryReader, DieselRepository, RepositoryResult};

impl CategoryReader for DieselRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        use crate::schema::categories;

        let mut conn = self.conn()?;

        let items = categories::table
            .order(categories::slug.asc())
            .select(DbCategory::as_select())
            .load::<DbCategory>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Category>, _>>()?;

        Ok(items)
    }
}
