use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::comment::Comment;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CommentDto {
    pub comment_id: i32,
    pub body: String,
    pub review_id: i32,
    pub author: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentDto {
    fn from(value: Comment) -> Self {
        Self {
            comment_id: value.comment_id.get(),
            body: value.body.into_inner(),
            review_id: value.review_id.get(),
            author: value.author.into_inner(),
            votes: value.votes,
            created_at: value.created_at.and_utc(),
        }
    }
}

/// `GET /api/reviews/{review_id}/comments`
#[derive(Debug, Serialize)]
pub struct CommentsResponse {
    pub comments: Vec<CommentDto>,
}

/// `POST /api/reviews/{review_id}/comments`; the new row is wrapped in a one-element list.
#[derive(Debug, Serialize)]
pub struct CreatedCommentResponse {
    pub comment: Vec<CommentDto>,
}
