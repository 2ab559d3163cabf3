//! Persistence collaborator subsystem.
//!
//! # Data Flow
//! ```text
//! Dispatcher, per request:
//!     store.has_entities()?
//!         → ScopeGuard opens a scope on the serving thread
//!     handler success → guard.commit()  (commit, then close)
//!     any failure     → guard dropped   (rollback, then close)
//! ```
//!
//! # Design Decisions
//! - Exactly one open/close pair per request when entities are registered
//! - Release is guaranteed by RAII, not by success-path code
//! - The entity manager itself lives outside this crate; only the narrow
//!   open/commit/rollback/close interface is consumed

pub mod scope;
pub mod store;

pub use scope::ScopeGuard;
pub use store::{EntityStore, NoStore, ScopeError};
