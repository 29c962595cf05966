use chrono::Utc;
use game_reviews::domain::comment::NewComment;
use game_reviews::domain::types::{CommentBody, ReviewId, Username};
use game_reviews::repository::{
    CategoryReader, CommentReader, CommentWriter, DieselRepository, RepositoryError,
    ReviewReader, ReviewWriter, UserReader,
};

mod common;

fn new_comment(review_id: i32, author: &str, body: &str) -> NewComment {
    NewComment {
        body: CommentBody::new(body).expect("valid comment body"),
        review_id: ReviewId::new(review_id).expect("valid review id"),
        author: Username::new(author).expect("valid username"),
        votes: 0,
        created_at: Utc::now().naive_utc(),
    }
}

#[test]
fn lists_seeded_categories_and_users() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    assert_eq!(repo.list_categories().unwrap().len(), 4);
    let users = repo.list_users().unwrap();
    assert_eq!(users.len(), 4);
    assert!(users.iter().any(|u| u.username == "mallionaire"));
}

#[test]
fn finds_users_by_username() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let known = Username::new("bainesface").unwrap();
    let unknown = Username::new("TEST").unwrap();
    assert_eq!(
        repo.get_user_by_username(&known).unwrap().unwrap().name,
        "sarah"
    );
    assert!(repo.get_user_by_username(&unknown).unwrap().is_none());
}

#[test]
fn review_lookup_includes_comment_count() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let first = repo
        .get_review_by_id(ReviewId::new(1).unwrap())
        .unwrap()
        .expect("review 1 is seeded");
    let second = repo
        .get_review_by_id(ReviewId::new(2).unwrap())
        .unwrap()
        .expect("review 2 is seeded");

    assert_eq!(first.comment_count, 0);
    assert_eq!(second.comment_count, 3);
    assert!(
        repo.get_review_by_id(ReviewId::new(1234).unwrap())
            .unwrap()
            .is_none()
    );
}

#[test]
fn reviews_are_listed_newest_first() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let reviews = repo.list_reviews().unwrap();

    assert_eq!(reviews.len(), 13);
    assert!(
        reviews
            .windows(2)
            .all(|pair| pair[0].review.created_at >= pair[1].review.created_at)
    );
    let total: i64 = reviews.iter().map(|r| r.comment_count.get()).sum();
    assert_eq!(total, 6);
}

#[test]
fn vote_increments_persist_and_may_go_negative() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let id = ReviewId::new(1).unwrap();

    let updated = repo.increment_review_votes(id, -100).unwrap().unwrap();
    assert_eq!(updated.votes, -99);

    let reloaded = repo.get_review_by_id(id).unwrap().unwrap();
    assert_eq!(reloaded.review.votes, -99);
}

#[test]
fn vote_totals_outside_i32_are_rejected_without_writing() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let id = ReviewId::new(1).unwrap();

    let result = repo.increment_review_votes(id, i32::MAX);
    assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));
    assert_eq!(repo.get_review_by_id(id).unwrap().unwrap().review.votes, 1);

    let lowest = repo.increment_review_votes(id, i32::MIN + 1).unwrap().unwrap();
    assert_eq!(lowest.votes, i32::MIN + 2);
    let result = repo.increment_review_votes(id, -3);
    assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));
    assert_eq!(
        repo.get_review_by_id(id).unwrap().unwrap().review.votes,
        i32::MIN + 2
    );
}

#[test]
fn vote_increment_on_missing_review_returns_none() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let result = repo
        .increment_review_votes(ReviewId::new(1234).unwrap(), 1)
        .unwrap();

    assert!(result.is_none());
}

#[test]
fn created_comments_get_increasing_ids() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let first = repo
        .create_comment(&new_comment(2, "mallionaire", "testbody"))
        .unwrap();
    let second = repo
        .create_comment(&new_comment(1, "dav3rid", "another"))
        .unwrap();

    assert_eq!(first.comment_id, 7);
    assert_eq!(first.votes, 0);
    assert!(second.comment_id > first.comment_id);

    let comments = repo
        .list_comments_for_review(ReviewId::new(2).unwrap())
        .unwrap();
    assert_eq!(comments.len(), 4);
    assert!(comments.iter().any(|c| c.comment_id == first.comment_id));
}

#[test]
fn comment_with_unknown_author_is_rejected_by_the_store() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let result = repo.create_comment(&new_comment(2, "TEST", "testbody"));

    assert!(result.is_err());
    let comments = repo
        .list_comments_for_review(ReviewId::new(2).unwrap())
        .unwrap();
    assert_eq!(comments.len(), 3);
}
