//! Persistence collaborator interface.
//!
//! # Responsibilities
//! - Report whether any entity types are registered
//! - Open, commit, roll back, and close the per-request transactional scope
//!
//! # Design Decisions
//! - The dispatcher never inspects scope internals, only this interface
//! - Scope state is thread-affine: implementations key the current scope by
//!   the calling thread (e.g. a thread-local session), never by a lock
//! - Unknown failure details are carried as strings; this layer does not
//!   interpret them

use thiserror::Error;

/// Errors surfaced by the transactional scope operations.
#[derive(Debug, Error)]
pub enum ScopeError {
    /// A scope operation ran without an open scope on this thread.
    #[error("no transactional scope is open on this thread")]
    NotOpen,

    /// Opening the scope failed.
    #[error("failed to open transactional scope: {0}")]
    Open(String),

    /// Committing the scope failed.
    #[error("transactional scope commit failed: {0}")]
    Commit(String),
}

/// Narrow interface to the external entity/session manager.
///
/// The dispatcher opens one scope per request when `has_entities` reports
/// true, commits it on handler success, and rolls it back on any failure.
/// All six operations act on the scope bound to the calling thread; a scope
/// must never be shared across concurrent requests.
pub trait EntityStore: Send + Sync {
    /// True if at least one entity type is registered, i.e. requests need a
    /// transactional scope.
    fn has_entities(&self) -> bool;

    /// Open a scope bound to the calling thread.
    fn open_scope(&self) -> Result<(), ScopeError>;

    /// True if a scope is currently open on the calling thread.
    fn scope_open(&self) -> bool;

    /// Commit the current scope. The scope stays open until `close_scope`.
    fn commit(&self) -> Result<(), ScopeError>;

    /// Roll back the current scope. Best effort; never fails the request
    /// path a second time.
    fn rollback(&self);

    /// Close the current scope, releasing it from the calling thread.
    fn close_scope(&self);
}

/// Store used when the application has no persistence at all.
///
/// Reports no registered entities, so the dispatcher never opens a scope.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoStore;

impl EntityStore for NoStore {
    fn has_entities(&self) -> bool {
        false
    }

    fn open_scope(&self) -> Result<(), ScopeError> {
        Ok(())
    }

    fn scope_open(&self) -> bool {
        false
    }

    fn commit(&self) -> Result<(), ScopeError> {
        Ok(())
    }

    fn rollback(&self) {}

    fn close_scope(&self) {}
}
