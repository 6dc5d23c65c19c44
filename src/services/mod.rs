//! Watson service clients.
//!
//! Each service module exposes a trait with one async method per endpoint,
//! a client struct implementing it, typed options and response types.

pub mod natural_language_classifier;
pub mod tone_analyzer;
pub mod visual_recognition_v3;
pub mod visual_recognition_v4;

use crate::errors::{WatsonError, WatsonResult};

/// Takes a field that `validate` has already checked
pub(crate) fn required<T>(value: Option<T>, field: &str) -> WatsonResult<T> {
    value.ok_or_else(|| WatsonError::Internal {
        message: format!("{} missing after validation", field),
    })
}
