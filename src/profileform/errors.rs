use thiserror::Error;

use crate::{interfaces::UpdateError, profilevalidator::ValidationErrors};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AvatarError {
    #[error("Unsupported avatar type {0:?}, expected image/png or image/jpeg")]
    UnsupportedType(String),
    #[error("Avatar file {0:?} is empty")]
    Empty(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Nothing was edited since the last successful submit.
    #[error("There are no changes to submit")]
    NotDirty,
    #[error("Profile has {} invalid field(s)", .0.len())]
    Invalid(ValidationErrors),
    #[error("{0}")]
    Update(#[from] UpdateError),
}
