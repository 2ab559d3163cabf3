//! Dispatch error taxonomy.
//!
//! # Design Decisions
//! - Only [`DomainError`] is recoverable-by-design; it surfaces exactly as
//!   the handler specified it
//! - Every other failure is a defect: reported as a 500 with a plain-text
//!   diagnostic, logged, never silently swallowed
//! - Clients distinguish the two by content type: `application/json` for
//!   domain failures, `text/plain` for diagnostics

use thiserror::Error;

use crate::dispatch::envelope::DomainError;
use crate::persistence::ScopeError;

/// Boxed error for unexpected handler failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The error type application handlers return.
///
/// `DomainError` converts via `From`, so `Err(DomainError::new(404))?` and
/// plain `?` on fallible domain logic both work. Unexpected failures are
/// wrapped with [`HandlerError::internal`] and take the 500 diagnostic path.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Expected application-level failure; carries its own status and body.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Anything else: a defect in handler logic or its collaborators.
    #[error("handler failure: {0}")]
    Internal(BoxError),
}

impl HandlerError {
    /// Wrap an unexpected failure from handler logic.
    pub fn internal<E: Into<BoxError>>(error: E) -> Self {
        Self::Internal(error.into())
    }
}

/// Internal classification of everything that can abort a dispatch.
///
/// Not public API: the dispatcher folds these into the response (domain
/// status/payload, or 500 plus [`render_diagnostic`] text).
#[derive(Debug, Error)]
pub(crate) enum DispatchFailure {
    #[error(transparent)]
    Domain(DomainError),

    #[error("failed to decode request body")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode response payload")]
    Encode(#[source] serde_json::Error),

    #[error("decoded parameter object had an unexpected type")]
    ParamType,

    #[error("transactional scope failure")]
    Scope(#[source] ScopeError),

    #[error("handler failure")]
    Handler(#[source] BoxError),
}

impl From<HandlerError> for DispatchFailure {
    fn from(error: HandlerError) -> Self {
        match error {
            HandlerError::Domain(domain) => Self::Domain(domain),
            HandlerError::Internal(inner) => Self::Handler(inner),
        }
    }
}

/// Render a failure and its cause chain as the 500 diagnostic body.
pub(crate) fn render_diagnostic(failure: &DispatchFailure) -> String {
    let mut text = failure.to_string();
    let mut source = std::error::Error::source(failure);
    while let Some(cause) = source {
        text.push_str("\ncaused by: ");
        text.push_str(&cause.to_string());
        source = cause.source();
    }
    text
}
