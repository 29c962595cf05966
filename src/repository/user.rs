use diesel::prelude::*;

use crate::domain::types::Username;
use crate::domain::user::User;
use crate::models::user::User as DbUser;
use crate::repository::{DieselRepository, RepositoryResult, UserReader};

impl UserReader for DieselRepository {
    fn list_users(&self) -> RepositoryResult<Vec<User>> {
        use crate::schema::users;

        let mut conn = self.conn()?;

        let items = users::table
            .order(users::username.asc())
            .select(DbUser::as_select())
            .load::<DbUser>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<User>, _>>()?;

        Ok(items)
    }

    fn get_user_by_username(&self, username: &Username) -> RepositoryResult<Option<User>> {
        use crate::schema::users;

        let mut conn = self.conn()?;

        let user = users::table
            .find(username.as_str())
            .select(DbUser::as_select())
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(user.map(TryInto::try_into).transpose()?)
    }
}
