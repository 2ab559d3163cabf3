//! Dispatch subsystem.
//!
//! # Data Flow
//! ```text
//! handle(method, path, body):
//!     Idle
//!     → RouteResolved   (table lookup; miss → None, host fallback)
//!     → BodyParsed      (decode against the route's parameter type)
//!     → TransactionOpen (only if the store has registered entities)
//!     → HandlerInvoked
//!     → Committed       (success)  | RolledBack (domain error / defect)
//!     → ResponseWritten (status + optional body, exactly once)
//!     → Idle
//! ```
//!
//! # Design Decisions
//! - Domain errors are values, not exceptions: handlers return
//!   `Result<ResponseEnvelope<R>, HandlerError>`
//! - Scope release is RAII-guaranteed on every exit path
//! - Diagnostic 500 bodies are plain text; domain bodies are JSON

pub mod dispatcher;
pub mod envelope;
pub mod error;

pub use dispatcher::{DispatchOutcome, Dispatcher, APPLICATION_JSON, TEXT_PLAIN};
pub use envelope::{DomainError, ResponseEnvelope};
pub use error::{BoxError, HandlerError};
