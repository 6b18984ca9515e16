use thiserror::Error;

use crate::profileform::ProfileUpdate;

/// Internal rule matching API used to isolate the underlying implementation
/// of the matcher and allow different implementations to be swapped in easily.
pub(crate) trait MatcherApi: Send + Sync {
    /// Returns whether the whole `value` matches the rule `pattern`.
    fn match_pattern(&self, value: &str, pattern: &str) -> bool;
}

/// Failure reported by a [`ProfileUpdater`]. The form only logs it and keeps
/// its edits, so the payload is just a human readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Profile update failed: {0}")]
pub struct UpdateError(pub String);

/// Port through which a submitted form hands its values to whatever owns the
/// user record (a store, a remote API client, ...).
pub trait ProfileUpdater {
    fn update(&self, update: &ProfileUpdate) -> Result<(), UpdateError>;
}

impl<F> ProfileUpdater for F
where
    F: Fn(&ProfileUpdate) -> Result<(), UpdateError>,
{
    fn update(&self, update: &ProfileUpdate) -> Result<(), UpdateError> {
        self(update)
    }
}
