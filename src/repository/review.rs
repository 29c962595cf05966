use std::collections::HashMap;

use diesel::prelude::*;

use crate::domain::review::{Review, ReviewWithCommentCount};
use crate::domain::types::{CommentCount, ReviewId};
use crate::models::review::Review as DbReview;
use crate::repository::{
    DieselRepository, RepositoryError, RepositoryResult, ReviewReader, ReviewWriter,
};

fn with_comment_count(row: DbReview, count: i64) -> RepositoryResult<ReviewWithCommentCount> {
    Ok(ReviewWithCommentCount {
        review: row.try_into()?,
        comment_count: CommentCount::new(count)?,
    })
}

impl ReviewReader for DieselRepository {
    fn list_reviews(&self) -> RepositoryResult<Vec<ReviewWithCommentCount>> {
        use crate::schema::{comments, reviews};

        let mut conn = self.conn()?;

        let rows = reviews::table
            .order((reviews::created_at.desc(), reviews::review_id.desc()))
            .select(DbReview::as_select())
            .load::<DbReview>(&mut conn)?;

        let counts: HashMap<i32, i64> = comments::table
            .group_by(comments::review_id)
            .select((comments::review_id, diesel::dsl::count_star()))
            .load::<(i32, i64)>(&mut conn)?
            .into_iter()
            .collect();

        rows.into_iter()
            .map(|row| {
                let count = counts.get(&row.review_id).copied().unwrap_or(0);
                with_comment_count(row, count)
            })
            .collect()
    }

    fn get_review_by_id(&self, id: ReviewId) -> RepositoryResult<Option<ReviewWithCommentCount>> {
        use crate::schema::{comments, reviews};

        let mut conn = self.conn()?;

        let Some(row) = reviews::table
            .find(id.get())
            .select(DbReview::as_select())
            .first::<DbReview>(&mut conn)
            .optional()?
        else {
            return Ok(None);
        };

        let count = comments::table
            .filter(comments::review_id.eq(id.get()))
            .count()
            .get_result::<i64>(&mut conn)?;

        with_comment_count(row, count).map(Some)
    }
}

impl ReviewWriter for DieselRepository {
    fn increment_review_votes(
        &self,
        id: ReviewId,
        delta: i32,
    ) -> RepositoryResult<Option<Review>> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;

        // Rows whose total would leave the i32 range are not matched.
        let (low, high) = if delta >= 0 {
            (i32::MIN, i32::MAX - delta)
        } else {
            (i32::MIN - delta, i32::MAX)
        };

        // Single statement so concurrent increments are never lost.
        let updated = diesel::update(
            reviews::table
                .find(id.get())
                .filter(reviews::votes.between(low, high)),
        )
        .set(reviews::votes.eq(reviews::votes + delta))
        .returning(DbReview::as_returning())
        .get_result::<DbReview>(&mut conn)
        .optional()?;

        if let Some(row) = updated {
            return Ok(Some(row.try_into()?));
        }

        let exists = diesel::select(diesel::dsl::exists(reviews::table.find(id.get())))
            .get_result::<bool>(&mut conn)?;
        if exists {
            return Err(RepositoryError::ConstraintViolation(format!(
                "votes of review {id} changed by {delta} would overflow"
            )));
        }
        Ok(None)
    }
}
