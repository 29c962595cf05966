use chrono::Utc;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::comment::NewComment;
use crate::domain::types::{CommentBody, ReviewId, TypeConstraintError, Username};

/// Body accepted by `POST /api/reviews/{review_id}/comments`.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AddCommentForm {
    pub author: String,
    #[validate(length(min = 1))]
    pub body: String,
}

/// Validated comment content. The author is resolved against the users table
/// by the service, so it stays a raw string here.
#[derive(Debug, Clone, PartialEq)]
pub struct AddCommentFormPayload {
    pub author: String,
    pub body: CommentBody,
}

impl AddCommentFormPayload {
    pub fn into_new_comment(self, review_id: ReviewId, author: Username) -> NewComment {
        NewComment {
            body: self.body,
            review_id,
            author,
            votes: 0,
            created_at: Utc::now().naive_utc(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddCommentFormError {
    #[error("request body must contain exactly `author` and `body`")]
    InvalidShape,
    #[error("comment body cannot be empty")]
    EmptyBody,
}

impl From<ValidationErrors> for AddCommentFormError {
    fn from(_: ValidationErrors) -> Self {
        Self::EmptyBody
    }
}

impl From<TypeConstraintError> for AddCommentFormError {
    fn from(_: TypeConstraintError) -> Self {
        Self::EmptyBody
    }
}

impl AddCommentForm {
    /// Check the body against the declared shape.
    pub fn from_json(body: Value) -> Result<Self, AddCommentFormError> {
        serde_json::from_value(body).map_err(|_| AddCommentFormError::InvalidShape)
    }
}

impl TryFrom<AddCommentForm> for AddCommentFormPayload {
    type Error = AddCommentFormError;

    fn try_from(value: AddCommentForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            author: value.author,
            body: CommentBody::new(value.body)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(body: Value) -> Result<AddCommentFormPayload, AddCommentFormError> {
        AddCommentForm::from_json(body)?.try_into()
    }

    #[test]
    fn accepts_author_and_body() {
        let payload = parse(json!({"author": "mallionaire", "body": "testbody"})).unwrap();
        assert_eq!(payload.author, "mallionaire");
        assert_eq!(payload.body, "testbody");
    }

    #[test]
    fn empty_or_blank_body_is_rejected() {
        assert_eq!(
            parse(json!({"author": "TEST", "body": ""})),
            Err(AddCommentFormError::EmptyBody)
        );
        assert_eq!(
            parse(json!({"author": "TEST", "body": "  \n "})),
            Err(AddCommentFormError::EmptyBody)
        );
    }

    #[test]
    fn wrong_shape_is_rejected() {
        assert_eq!(
            parse(json!({"username": "mallionaire", "body": "x"})),
            Err(AddCommentFormError::InvalidShape)
        );
        assert_eq!(
            parse(json!({"author": "mallionaire"})),
            Err(AddCommentFormError::InvalidShape)
        );
        assert_eq!(
            parse(json!({"author": "mallionaire", "body": 5})),
            Err(AddCommentFormError::InvalidShape)
        );
        assert_eq!(
            parse(json!({"author": "mallionaire", "body": "x", "votes": 3})),
            Err(AddCommentFormError::InvalidShape)
        );
    }

    #[test]
    fn new_comment_starts_with_zero_votes() {
        let payload = parse(json!({"author": "mallionaire", "body": "testbody"})).unwrap();
        let comment = payload.into_new_comment(
            ReviewId::new(2).unwrap(),
            Username::new("mallionaire").unwrap(),
        );
        assert_eq!(comment.votes, 0);
        assert_eq!(comment.review_id, 2);
    }
}
