//! Error conversion glue between layers.
//!
//! The domain layer must not depend on repository or service error types, so
//! the `From` impls that bridge them live here.

use crate::domain::types::TypeConstraintError;
use crate::repository::RepositoryError;

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

#[cfg(feature = "server")]
mod service {
    use crate::forms::comments::AddCommentFormError;
    use crate::forms::reviews::UpdateVotesFormError;
    use crate::services::ServiceError;
    use crate::services::messages;

    impl From<UpdateVotesFormError> for ServiceError {
        fn from(val: UpdateVotesFormError) -> Self {
            match val {
                UpdateVotesFormError::InvalidShape => {
                    ServiceError::BadRequest(messages::INVALID_VOTES_BODY.to_string())
                }
                UpdateVotesFormError::NotANumber => {
                    ServiceError::BadRequest(messages::VOTES_NOT_A_NUMBER.to_string())
                }
            }
        }
    }

    impl From<AddCommentFormError> for ServiceError {
        fn from(val: AddCommentFormError) -> Self {
            match val {
                AddCommentFormError::InvalidShape => {
                    ServiceError::BadRequest(messages::INVALID_COMMENT_BODY.to_string())
                }
                AddCommentFormError::EmptyBody => {
                    ServiceError::BadRequest(messages::EMPTY_COMMENT_BODY.to_string())
                }
            }
        }
    }
}
