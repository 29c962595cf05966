use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CategorySlug, CommentCount, Designer, ImageUrl, ReviewBody, ReviewId, ReviewTitle, Username,
};

/// A stored game review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub review_id: ReviewId,
    pub title: ReviewTitle,
    pub category: CategorySlug,
    pub designer: Designer,
    pub owner: Username,
    pub review_body: ReviewBody,
    pub review_img_url: ImageUrl,
    /// Stored as UTC without an offset.
    pub created_at: NaiveDateTime,
    /// Signed; decrements may take it below zero.
    pub votes: i32,
}

/// A review together with the number of comments attached to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewWithCommentCount {
    pub review: Review,
    pub comment_count: CommentCount,
}

/// Data required to insert a new [`Review`]. Only used when seeding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewReview {
    pub title: ReviewTitle,
    pub category: CategorySlug,
    pub designer: Designer,
    pub owner: Username,
    pub review_body: ReviewBody,
    pub review_img_url: ImageUrl,
    pub created_at: NaiveDateTime,
    pub votes: i32,
}
