//! Declared request-body shapes.
//!
//! Each form lists exactly the keys it accepts (`deny_unknown_fields`), so a
//! body with missing, misspelt or extra keys is rejected before any value is
//! looked at.

pub mod comments;
pub mod reviews;
