//! Handler result types: the response envelope and the domain error.

use serde_json::Value;
use thiserror::Error;

/// The typed result a handler returns on success.
///
/// Carries an optional payload and an optional explicit status override.
/// Status resolution happens in the dispatcher: the override wins, otherwise
/// the method's with-content or no-content default applies depending on
/// whether a payload is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseEnvelope<T> {
    payload: Option<T>,
    status: Option<u16>,
}

impl<T> ResponseEnvelope<T> {
    /// Envelope with a payload and no status override.
    pub fn with_payload(payload: T) -> Self {
        Self {
            payload: Some(payload),
            status: None,
        }
    }

    /// Envelope with neither payload nor status override.
    pub fn empty() -> Self {
        Self {
            payload: None,
            status: None,
        }
    }

    /// Set an explicit status, overriding the method defaults.
    pub fn status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    pub fn status_override(&self) -> Option<u16> {
        self.status
    }

    pub(crate) fn into_parts(self) -> (Option<T>, Option<u16>) {
        (self.payload, self.status)
    }
}

/// Envelope after the payload has been encoded, as stored routes produce it.
#[derive(Debug)]
pub(crate) struct RawEnvelope {
    pub(crate) payload: Option<Vec<u8>>,
    pub(crate) status: Option<u16>,
}

/// An expected application-level failure with an explicit status and an
/// optional JSON error body.
///
/// This is the only recoverable-by-design error in the dispatch pipeline:
/// it surfaces to the client exactly as the handler specified, with an
/// `application/json` body when a payload is present. Everything else is
/// treated as a defect and reported as a 500 diagnostic.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("domain error with status {status}")]
pub struct DomainError {
    status: u16,
    payload: Option<Value>,
}

impl DomainError {
    /// Domain failure with a status and no body.
    pub fn new(status: u16) -> Self {
        Self {
            status,
            payload: None,
        }
    }

    /// Attach a JSON error body.
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    pub(crate) fn into_parts(self) -> (u16, Option<Value>) {
        (self.status, self.payload)
    }
}
