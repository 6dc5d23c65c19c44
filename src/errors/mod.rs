//! Error types for the Watson API client.
//!
//! Every fallible call returns [`WatsonResult`]. Non-2xx responses are mapped
//! to [`WatsonError::Api`] by [`api_error_from_response`].

mod categories;
mod error;
mod mapping;

pub use categories::{ErrorCategory, RequiredFields, ValidationDetail};
pub use error::{WatsonError, WatsonResult};
pub use mapping::api_error_from_response;
