use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CommentBody, CommentId, ReviewId, Username};

/// A user-authored reply attached to a review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub comment_id: CommentId,
    pub body: CommentBody,
    pub review_id: ReviewId,
    pub author: Username,
    pub votes: i32,
    pub created_at: NaiveDateTime,
}

/// Data required to insert a new [`Comment`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewComment {
    pub body: CommentBody,
    pub review_id: ReviewId,
    pub author: Username,
    pub votes: i32,
    pub created_at: NaiveDateTime,
}
