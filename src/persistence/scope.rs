//! RAII guard for the per-request transactional scope.

use crate::persistence::store::{EntityStore, ScopeError};

/// Holds the transactional scope for one request.
///
/// When dropped without a prior [`commit`](Self::commit), the guard rolls the
/// scope back and closes it, provided one is still open. This guarantees the
/// scope is released exactly once per request on every exit path, including
/// handler panics unwinding through the dispatcher.
#[must_use = "dropping the guard immediately would roll the scope back"]
pub struct ScopeGuard<'a> {
    // None when no scope was opened or after a successful commit.
    store: Option<&'a dyn EntityStore>,
}

impl<'a> ScopeGuard<'a> {
    /// Open a scope if the store has registered entities.
    ///
    /// With no registered entities the returned guard is inert: commit and
    /// drop are both no-ops.
    pub fn open_if_entities(store: &'a dyn EntityStore) -> Result<Self, ScopeError> {
        if store.has_entities() {
            store.open_scope()?;
            Ok(Self { store: Some(store) })
        } else {
            Ok(Self { store: None })
        }
    }

    /// True if this guard holds an open scope.
    pub fn is_active(&self) -> bool {
        self.store.is_some()
    }

    /// Commit and close the scope.
    ///
    /// On commit failure the guard stays armed, so the drop path still rolls
    /// back and closes the scope before the error reaches the caller.
    pub fn commit(mut self) -> Result<(), ScopeError> {
        let Some(store) = self.store else {
            return Ok(());
        };
        store.commit()?;
        self.store = None;
        store.close_scope();
        Ok(())
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        if let Some(store) = self.store.take() {
            // The "still open" check keeps release idempotent even if an
            // implementation closes its scope as part of a failed commit.
            if store.scope_open() {
                store.rollback();
                store.close_scope();
            }
        }
    }
}
