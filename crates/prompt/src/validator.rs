//! Request validation.

use papers_core::ValidationError;

use crate::types::{EssayRequest, ValidRequest};

/// Check an essay request before rendering.
///
/// The only rule is that the topic must contain something other than
/// whitespace. Enumerations are closed types and numeric bounds are enforced
/// where the values are collected, so neither is re-checked here. The topic
/// is passed through untrimmed.
///
/// # Example
/// ```
/// use papers_prompt::{validate, EssayRequest, ValidationError};
///
/// assert!(validate(EssayRequest::new("AI in education")).is_ok());
/// assert_eq!(
///     validate(EssayRequest::new("   ")).unwrap_err(),
///     ValidationError::EmptyTopic
/// );
/// ```
pub fn validate(request: EssayRequest) -> Result<ValidRequest, ValidationError> {
    if request.topic.trim().is_empty() {
        tracing::debug!("Rejected essay request with empty topic");
        return Err(ValidationError::EmptyTopic);
    }

    Ok(ValidRequest::new_unchecked(request))
}
