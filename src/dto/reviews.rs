use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::review::{Review, ReviewWithCommentCount};

/// A review row as stored.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReviewDto {
    pub review_id: i32,
    pub title: String,
    pub category: String,
    pub designer: String,
    pub owner: String,
    pub review_body: String,
    pub review_img_url: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
}

/// A review row with its derived comment count appended.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReviewWithCommentCountDto {
    #[serde(flatten)]
    pub review: ReviewDto,
    pub comment_count: i64,
}

impl From<Review> for ReviewDto {
    fn from(value: Review) -> Self {
        Self {
            review_id: value.review_id.get(),
            title: value.title.into_inner(),
            category: value.category.into_inner(),
            designer: value.designer.into_inner(),
            owner: value.owner.into_inner(),
            review_body: value.review_body.into_inner(),
            review_img_url: value.review_img_url.into_inner(),
            created_at: value.created_at.and_utc(),
            votes: value.votes,
        }
    }
}

impl From<ReviewWithCommentCount> for ReviewWithCommentCountDto {
    fn from(value: ReviewWithCommentCount) -> Self {
        Self {
            review: value.review.into(),
            comment_count: value.comment_count.get(),
        }
    }
}

/// `GET /api/reviews`
#[derive(Debug, Serialize)]
pub struct ReviewsResponse {
    pub reviews: Vec<ReviewWithCommentCountDto>,
}

/// `GET /api/reviews/{review_id}`
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub review: ReviewWithCommentCountDto,
}

/// `PATCH /api/reviews/{review_id}`; the updated row is wrapped in a one-element list.
#[derive(Debug, Serialize)]
pub struct UpdatedReviewResponse {
    pub review: Vec<ReviewDto>,
}
