use diesel::prelude::*;

use crate::domain::comment::{Comment, NewComment};
use crate::domain::types::ReviewId;
use crate::models::comment::{Comment as DbComment, NewComment as DbNewComment};
use crate::repository::{CommentReader, CommentWriter, DieselRepository, RepositoryResult};

impl CommentReader for DieselRepository {
    fn list_comments_for_review(&self, review_id: ReviewId) -> RepositoryResult<Vec<Comment>> {
        use crate::schema::comments;

        let mut conn = self.conn()?;

        let items = comments::table
            .filter(comments::review_id.eq(review_id.get()))
            .order((comments::created_at.desc(), comments::comment_id.desc()))
            .select(DbComment::as_select())
            .load::<DbComment>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Comment>, _>>()?;

        Ok(items)
    }
}

impl CommentWriter for DieselRepository {
    fn create_comment(&self, comment: &NewComment) -> RepositoryResult<Comment> {
        use crate::schema::comments;

        let mut conn = self.conn()?;
        let db_comment: DbNewComment = comment.clone().into();

        let inserted = diesel::insert_into(comments::table)
            .values(&db_comment)
            .returning(DbComment::as_returning())
            .get_result::<DbComment>(&mut conn)?;

        Ok(inserted.try_into()?)
    }
}
