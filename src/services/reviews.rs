use serde_json::Value;

use crate::domain::types::{IdParseError, ReviewId};
use crate::dto::reviews::{ReviewDto, ReviewWithCommentCountDto};
use crate::forms::reviews::{UpdateVotesForm, UpdateVotesPayload};
use crate::repository::{RepositoryError, ReviewReader, ReviewWriter};

use super::{ServiceError, ServiceResult, messages};

/// List every review with its comment count, newest first.
pub fn show_reviews<R>(repo: &R) -> ServiceResult<Vec<ReviewWithCommentCountDto>>
where
    R: ReviewReader,
{
    match repo.list_reviews() {
        Ok(reviews) => Ok(reviews.into_iter().map(Into::into).collect()),
        Err(e) => {
            log::error!("Failed to list reviews: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Fetch a single review by the raw `review_id` path segment.
pub fn show_review<R>(raw_id: &str, repo: &R) -> ServiceResult<ReviewWithCommentCountDto>
where
    R: ReviewReader,
{
    let review_id = match ReviewId::parse(raw_id) {
        Ok(id) => id,
        Err(IdParseError::NotANumber) => {
            return Err(ServiceError::BadRequest(messages::ID_NOT_A_NUMBER.to_string()));
        }
        Err(IdParseError::OutOfRange) => {
            return Err(ServiceError::NotFound(messages::review_not_found(raw_id)));
        }
    };

    match repo.get_review_by_id(review_id) {
        Ok(Some(review)) => Ok(review.into()),
        Ok(None) => Err(ServiceError::NotFound(messages::review_not_found(raw_id))),
        Err(e) => {
            log::error!("Failed to get review {review_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Apply a vote change to a review.
///
/// The body is checked before the id, and the id before the review's
/// existence; the first failing step decides the response.
pub fn update_review_votes<R>(raw_id: &str, body: Value, repo: &R) -> ServiceResult<ReviewDto>
where
    R: ReviewWriter,
{
    let payload: UpdateVotesPayload = UpdateVotesForm::from_json(body)?.try_into()?;

    let review_id = match ReviewId::parse(raw_id) {
        Ok(id) => id,
        Err(IdParseError::NotANumber) => {
            return Err(ServiceError::BadRequest(
                messages::VOTES_ID_NOT_A_NUMBER.to_string(),
            ));
        }
        Err(IdParseError::OutOfRange) => {
            return Err(ServiceError::NotFound(messages::review_not_updated(raw_id)));
        }
    };

    match repo.increment_review_votes(review_id, payload.inc_votes) {
        Ok(Some(review)) => {
            log::info!(
                "Review {review_id} votes changed by {} to {}",
                payload.inc_votes,
                review.votes
            );
            Ok(review.into())
        }
        Ok(None) => Err(ServiceError::NotFound(messages::review_not_updated(raw_id))),
        Err(RepositoryError::ConstraintViolation(e)) => {
            log::warn!("Rejected vote change: {e}");
            Err(ServiceError::BadRequest(
                messages::VOTES_OUT_OF_RANGE.to_string(),
            ))
        }
        Err(e) => {
            log::error!("Failed to update votes for review {review_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::repository::test::TestRepository;
    use crate::repository::test::fixtures::{sample_repository, sample_review, timestamp};

    #[test]
    fn lists_reviews_newest_first_with_comment_counts() {
        let repo = sample_repository();

        let reviews = show_reviews(&repo).unwrap();

        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].review.review_id, 2);
        assert_eq!(reviews[0].comment_count, 3);
        assert_eq!(reviews[1].review.review_id, 1);
        assert_eq!(reviews[1].comment_count, 0);
        assert!(reviews[0].review.created_at >= reviews[1].review.created_at);
    }

    #[test]
    fn shows_review_with_comment_count() {
        let repo = sample_repository();

        assert_eq!(show_review("2", &repo).unwrap().comment_count, 3);
        assert_eq!(show_review("1", &repo).unwrap().comment_count, 0);
    }

    #[test]
    fn show_review_rejects_non_numeric_id() {
        let repo = sample_repository();

        assert_eq!(
            show_review("banana", &repo),
            Err(ServiceError::BadRequest("ID entered is not a number".into()))
        );
    }

    #[test]
    fn show_review_reports_unknown_id() {
        let repo = sample_repository();

        assert_eq!(
            show_review("1234", &repo),
            Err(ServiceError::NotFound(
                "No review found for review_id: 1234".into()
            ))
        );
        assert_eq!(
            show_review("0", &repo),
            Err(ServiceError::NotFound("No review found for review_id: 0".into()))
        );
    }

    #[test]
    fn votes_can_go_up_and_below_zero() {
        let repo = sample_repository();

        let up = update_review_votes("1", json!({"inc_votes": 100}), &repo).unwrap();
        assert_eq!(up.votes, 101);

        let down = update_review_votes("1", json!({"inc_votes": -200}), &repo).unwrap();
        assert_eq!(down.votes, -99);

        assert_eq!(show_review("1", &repo).unwrap().review.votes, -99);
    }

    #[test]
    fn reviews_created_together_are_ordered_by_id() {
        let created_at = timestamp(1_610_964_020);
        let repo = TestRepository::new(
            vec![],
            vec![],
            vec![
                sample_review(3, 0, created_at),
                sample_review(7, 0, created_at),
                sample_review(5, 0, created_at),
            ],
            vec![],
        );

        let ids: Vec<i32> = show_reviews(&repo)
            .unwrap()
            .iter()
            .map(|r| r.review.review_id)
            .collect();

        assert_eq!(ids, [7, 5, 3]);
    }

    #[test]
    fn votes_total_must_stay_in_range() {
        let repo = sample_repository();

        assert_eq!(
            update_review_votes("1", json!({"inc_votes": i32::MAX}), &repo),
            Err(ServiceError::BadRequest(
                "Incremental votes take the total out of range. There has been no update.".into()
            ))
        );
        assert_eq!(show_review("1", &repo).unwrap().review.votes, 1);

        let top = update_review_votes("1", json!({"inc_votes": i32::MAX - 1}), &repo).unwrap();
        assert_eq!(top.votes, i32::MAX);

        let bottom = update_review_votes("2", json!({"inc_votes": i32::MIN}), &repo).unwrap();
        assert_eq!(bottom.votes, i32::MIN + 5);
    }

    #[test]
    fn body_shape_is_checked_before_the_id() {
        let repo = sample_repository();

        assert_eq!(
            update_review_votes("banana", json!({"inc votes": 100}), &repo),
            Err(ServiceError::BadRequest(
                "Invalid Request Body. There has been no update.".into()
            ))
        );
        assert_eq!(
            update_review_votes("banana", json!({"inc_votes": "banana"}), &repo),
            Err(ServiceError::BadRequest(
                "Incremental votes entered is not a number. There has been no update.".into()
            ))
        );
    }

    #[test]
    fn id_is_checked_before_existence() {
        let repo = sample_repository();

        assert_eq!(
            update_review_votes("banana", json!({"inc_votes": 100}), &repo),
            Err(ServiceError::BadRequest(
                "ID entered is not a number, There has been no update.".into()
            ))
        );
        assert_eq!(
            update_review_votes("1234", json!({"inc_votes": 100}), &repo),
            Err(ServiceError::NotFound(
                "No review found for review_id: 1234. There has been no update.".into()
            ))
        );
    }
}
