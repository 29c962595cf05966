use crate::db::{DbConnection, DbPool};
use crate::domain::category::Category;
use crate::domain::comment::{Comment, NewComment};
use crate::domain::review::{Review, ReviewWithCommentCount};
use crate::domain::types::{ReviewId, Username};
use crate::domain::user::User;

pub mod category;
pub mod comment;
pub mod errors;
pub mod review;
pub mod user;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List every category ordered by slug.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
}

/// Read-only operations for user entities.
pub trait UserReader {
    /// List every user ordered by username.
    fn list_users(&self) -> RepositoryResult<Vec<User>>;
    /// Retrieve a user by username.
    fn get_user_by_username(&self, username: &Username) -> RepositoryResult<Option<User>>;
}

/// Read-only operations for review entities.
pub trait ReviewReader {
    /// List every review with its comment count, newest first.
    fn list_reviews(&self) -> RepositoryResult<Vec<ReviewWithCommentCount>>;
    /// Retrieve a review and its comment count by identifier.
    fn get_review_by_id(&self, id: ReviewId) -> RepositoryResult<Option<ReviewWithCommentCount>>;
}

/// Write operations for review entities.
pub trait ReviewWriter {
    /// Add `delta` to the review's votes and return the updated row.
    ///
    /// Returns `Ok(None)` when no review has the given id and
    /// [`RepositoryError::ConstraintViolation`] when the new total would not
    /// fit in an `i32`; the stored row is left unchanged in both cases.
    fn increment_review_votes(&self, id: ReviewId, delta: i32)
    -> RepositoryResult<Option<Review>>;
}

/// Read-only operations for comment entities.
pub trait CommentReader {
    /// List the comments attached to a review, newest first.
    fn list_comments_for_review(&self, review_id: ReviewId) -> RepositoryResult<Vec<Comment>>;
}

/// Write operations for comment entities.
pub trait CommentWriter {
    /// Persist a new comment and return the stored row.
    fn create_comment(&self, comment: &NewComment) -> RepositoryResult<Comment>;
}
