use serde_json::Value;

use crate::domain::types::{IdParseError, ReviewId, Username};
use crate::dto::comments::CommentDto;
use crate::forms::comments::{AddCommentForm, AddCommentFormPayload};
use crate::repository::{CommentReader, CommentWriter, ReviewReader, UserReader};

use super::{ServiceError, ServiceResult, messages};

/// List the comments attached to a review.
///
/// A review without comments (or one that does not exist) is reported as
/// not found rather than as an empty list.
pub fn show_review_comments<R>(raw_id: &str, repo: &R) -> ServiceResult<Vec<CommentDto>>
where
    R: CommentReader,
{
    let review_id = match ReviewId::parse(raw_id) {
        Ok(id) => id,
        Err(IdParseError::NotANumber) => {
            return Err(ServiceError::BadRequest(messages::ID_NOT_A_NUMBER.to_string()));
        }
        Err(IdParseError::OutOfRange) => {
            return Err(ServiceError::NotFound(messages::no_comments(raw_id)));
        }
    };

    let comments = repo.list_comments_for_review(review_id).map_err(|e| {
        log::error!("Failed to list comments for review {review_id}: {e}");
        ServiceError::Internal
    })?;

    if comments.is_empty() {
        return Err(ServiceError::NotFound(messages::no_comments(raw_id)));
    }

    Ok(comments.into_iter().map(CommentDto::from).collect())
}

/// Attach a new comment to a review.
///
/// Checks run in this order and stop at the first failure: numeric id,
/// review exists, body shape, non-empty body, known author. Nothing is
/// written unless every check passes.
pub fn add_comment<R>(raw_id: &str, body: Value, repo: &R) -> ServiceResult<CommentDto>
where
    R: ReviewReader + UserReader + CommentWriter,
{
    let review_id = match ReviewId::parse(raw_id) {
        Ok(id) => id,
        Err(IdParseError::NotANumber) => {
            return Err(ServiceError::BadRequest(
                messages::COMMENT_ID_NOT_A_NUMBER.to_string(),
            ));
        }
        Err(IdParseError::OutOfRange) => {
            return Err(ServiceError::NotFound(messages::review_not_in_database(
                raw_id,
            )));
        }
    };

    match repo.get_review_by_id(review_id) {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Err(ServiceError::NotFound(messages::review_not_in_database(
                raw_id,
            )));
        }
        Err(e) => {
            log::error!("Failed to get review {review_id}: {e}");
            return Err(ServiceError::Internal);
        }
    }

    let payload: AddCommentFormPayload = AddCommentForm::from_json(body)?.try_into()?;

    let author = match Username::new(payload.author.as_str()) {
        Ok(username) => username,
        Err(_) => {
            return Err(ServiceError::NotFound(messages::unknown_author(
                &payload.author,
            )));
        }
    };

    match repo.get_user_by_username(&author) {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Err(ServiceError::NotFound(messages::unknown_author(
                &payload.author,
            )));
        }
        Err(e) => {
            log::error!("Failed to get user {author}: {e}");
            return Err(ServiceError::Internal);
        }
    }

    let new_comment = payload.into_new_comment(review_id, author);
    match repo.create_comment(&new_comment) {
        Ok(comment) => {
            log::info!(
                "Comment {} added to review {review_id} by {}",
                comment.comment_id,
                comment.author
            );
            Ok(comment.into())
        }
        Err(e) => {
            log::error!("Failed to create comment for review {review_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}
