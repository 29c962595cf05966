use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::comment::{Comment as DomainComment, NewComment as DomainNewComment};
use crate::domain::types::{CommentBody, TypeConstraintError, Username};

/// Diesel model representing the `comments` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::comments)]
#[diesel(primary_key(comment_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Comment {
    pub comment_id: i32,
    pub body: String,
    pub review_id: i32,
    pub author: String,
    pub votes: i32,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`Comment`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::comments)]
pub struct NewComment {
    pub body: String,
    pub review_id: i32,
    pub author: String,
    pub votes: i32,
    pub created_at: NaiveDateTime,
}

impl TryFrom<Comment> for DomainComment {
    type Error = TypeConstraintError;

    fn try_from(comment: Comment) -> Result<Self, Self::Error> {
        Ok(Self {
            comment_id: comment.comment_id.try_into()?,
            body: CommentBody::new(comment.body)?,
            review_id: comment.review_id.try_into()?,
            author: Username::new(comment.author)?,
            votes: comment.votes,
            created_at: comment.created_at,
        })
    }
}

impl From<DomainNewComment> for NewComment {
    fn from(comment: DomainNewComment) -> Self {
        Self {
            body: comment.body.into_inner(),
            review_id: comment.review_id.get(),
            author: comment.author.into_inner(),
            votes: comment.votes,
            created_at: comment.created_at,
        }
    }
}
