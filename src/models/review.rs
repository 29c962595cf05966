use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::review::{NewReview as DomainNewReview, Review as DomainReview};
use crate::domain::types::{
    CategorySlug, Designer, ImageUrl, ReviewBody, ReviewTitle, TypeConstraintError, Username,
};

/// Diesel model representing the `reviews` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::reviews)]
#[diesel(primary_key(review_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Review {
    pub review_id: i32,
    pub title: String,
    pub category: String,
    pub designer: String,
    pub owner: String,
    pub review_body: String,
    pub review_img_url: String,
    pub created_at: NaiveDateTime,
    pub votes: i32,
}

/// Insertable form of [`Review`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::reviews)]
pub struct NewReview {
    pub title: String,
    pub category: String,
    pub designer: String,
    pub owner: String,
    pub review_body: String,
    pub review_img_url: String,
    pub created_at: NaiveDateTime,
    pub votes: i32,
}

impl TryFrom<Review> for DomainReview {
    type Error = TypeConstraintError;

    fn try_from(review: Review) -> Result<Self, Self::Error> {
        Ok(Self {
            review_id: review.review_id.try_into()?,
            title: ReviewTitle::new(review.title)?,
            category: CategorySlug::new(review.category)?,
            designer: Designer::new(review.designer)?,
            owner: Username::new(review.owner)?,
            review_body: ReviewBody::new(review.review_body)?,
            review_img_url: ImageUrl::new(review.review_img_url)?,
            created_at: review.created_at,
            votes: review.votes,
        })
    }
}

impl From<DomainNewReview> for NewReview {
    fn from(review: DomainNewReview) -> Self {
        Self {
            title: review.title.into_inner(),
            category: review.category.into_inner(),
            designer: review.designer.into_inner(),
            owner: review.owner.into_inner(),
            review_body: review.review_body.into_inner(),
            review_img_url: review.review_img_url.into_inner(),
            created_at: review.created_at,
            votes: review.votes,
        }
    }
}
