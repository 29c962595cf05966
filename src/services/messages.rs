//! Client-facing error messages.

pub const INVALID_PATH: &str = "Invalid Path";
pub const INTERNAL_ERROR: &str = "Internal Server Error";

pub const ID_NOT_A_NUMBER: &str = "ID entered is not a number";

pub const INVALID_VOTES_BODY: &str = "Invalid Request Body. There has been no update.";
pub const VOTES_NOT_A_NUMBER: &str =
    "Incremental votes entered is not a number. There has been no update.";
pub const VOTES_OUT_OF_RANGE: &str =
    "Incremental votes take the total out of range. There has been no update.";
pub const VOTES_ID_NOT_A_NUMBER: &str = "ID entered is not a number, There has been no update.";

pub const COMMENT_ID_NOT_A_NUMBER: &str = "ID entered is not a number.";
pub const INVALID_COMMENT_BODY: &str = "Invalid Request Body. No data has been added.";
pub const EMPTY_COMMENT_BODY: &str = "Comment body cannot be empty. No data has been added.";

pub fn review_not_found(id: &str) -> String {
    format!("No review found for review_id: {id}")
}

pub fn review_not_updated(id: &str) -> String {
    format!("No review found for review_id: {id}. There has been no update.")
}

pub fn no_comments(id: &str) -> String {
    format!("No comments found for review_id: {id}")
}

pub fn review_not_in_database(id: &str) -> String {
    format!("{id} is not within the database. No data has been added.")
}

pub fn unknown_author(author: &str) -> String {
    format!("{author} is not in the users database. No data has been added.")
}
