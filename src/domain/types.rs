//! Strongly-typed value objects used by domain entities.
//!
//! Rows coming out of the store and values coming in from requests are turned
//! into these wrappers at the boundary, so the rest of the crate can rely on
//! identifiers being positive and text fields being non-empty.

use std::fmt::{Display, Formatter};
use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateUrl;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A count was negative.
    #[error("{0} must be zero or greater")]
    NegativeNumber(&'static str),
    /// A string was empty or whitespace-only.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// URL validation failed.
    #[error("{0} must be a valid URL")]
    InvalidUrl(&'static str),
}

/// Why a raw path segment could not be turned into an identifier.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IdParseError {
    /// The segment is not an integer at all (`banana`, `2a`, `1.5`).
    #[error("not a number")]
    NotANumber,
    /// The segment is an integer but can never name a stored row.
    #[error("out of range")]
    OutOfRange,
}

/// Rejects whitespace-only input but keeps the value exactly as given.
fn require_non_blank<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let value = value.into();
    if value.trim().is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(value)
    }
}

/// Generates a newtype for store-assigned positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Parses a raw path segment.
            ///
            /// Anything that is not a base-10 integer is [`IdParseError::NotANumber`];
            /// integers that overflow `i32` or are not positive are
            /// [`IdParseError::OutOfRange`].
            pub fn parse(raw: &str) -> Result<Self, IdParseError> {
                let value = raw.parse::<i32>().map_err(|e| match e.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        IdParseError::OutOfRange
                    }
                    _ => IdParseError::NotANumber,
                })?;
                Self::new(value).map_err(|_| IdParseError::OutOfRange)
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }
    };
}

/// Shared accessors for the string-backed newtypes below.
macro_rules! string_newtype_impls {
    ($name:ident) => {
        impl $name {
            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }
    };
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a non-blank value, stored verbatim.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                require_non_blank(value, $field).map(Self)
            }
        }

        string_newtype_impls!($name);
    };
}

macro_rules! url_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a URL and validates its format.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let value = require_non_blank(value, $field)?;
                if !value.as_str().validate_url() {
                    return Err(TypeConstraintError::InvalidUrl($field));
                }
                Ok(Self(value))
            }
        }

        string_newtype_impls!($name);
    };
}

id_newtype!(ReviewId, "Store-assigned identifier of a review.", "review_id");
id_newtype!(
    CommentId,
    "Store-assigned identifier of a comment.",
    "comment_id"
);

non_empty_string_newtype!(
    CategorySlug,
    "Unique slug naming a category.",
    "category slug"
);
non_empty_string_newtype!(
    CategoryDescription,
    "Human readable category description.",
    "category description"
);
non_empty_string_newtype!(Username, "Unique login name of a user.", "username");
non_empty_string_newtype!(DisplayName, "Display name of a user.", "name");
non_empty_string_newtype!(ReviewTitle, "Title of a review.", "title");
non_empty_string_newtype!(Designer, "Designer of the reviewed game.", "designer");
non_empty_string_newtype!(ReviewBody, "Body text of a review.", "review body");
non_empty_string_newtype!(CommentBody, "Body text of a comment.", "comment body");

url_string_newtype!(ImageUrl, "Review image URL.", "review image url");
url_string_newtype!(AvatarUrl, "User avatar URL.", "avatar url");

/// Number of comments attached to a review.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CommentCount(i64);

impl CommentCount {
    /// Constructs a count that must be zero or greater.
    pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
        if value >= 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NegativeNumber("comment count"))
        }
    }

    /// Returns the raw count.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl PartialEq<i64> for CommentCount {
    fn eq(&self, other: &i64) -> bool {
        self.0 == *other
    }
}
