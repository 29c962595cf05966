use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Body accepted by `PATCH /api/reviews/{review_id}`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateVotesForm {
    /// Kept untyped so a wrong value type is reported separately from a wrong shape.
    pub inc_votes: Value,
}

/// Validated vote change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateVotesPayload {
    pub inc_votes: i32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UpdateVotesFormError {
    #[error("request body must contain exactly `inc_votes`")]
    InvalidShape,
    #[error("`inc_votes` must be an integer")]
    NotANumber,
}

impl UpdateVotesForm {
    /// Check the body against the declared shape.
    pub fn from_json(body: Value) -> Result<Self, UpdateVotesFormError> {
        serde_json::from_value(body).map_err(|_| UpdateVotesFormError::InvalidShape)
    }
}

impl TryFrom<UpdateVotesForm> for UpdateVotesPayload {
    type Error = UpdateVotesFormError;

    fn try_from(value: UpdateVotesForm) -> Result<Self, Self::Error> {
        let inc_votes = value
            .inc_votes
            .as_i64()
            .and_then(|v| i32::try_from(v).ok())
            .ok_or(UpdateVotesFormError::NotANumber)?;
        Ok(Self { inc_votes })
    }
}
