//! Shared utilities for integration testing.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use waypost::persistence::{EntityStore, ScopeError};

/// Entity store double that counts every scope operation.
#[derive(Default)]
pub struct RecordingStore {
    entities: bool,
    fail_commit: bool,
    open: AtomicBool,
    opens: AtomicUsize,
    commits: AtomicUsize,
    rollbacks: AtomicUsize,
    closes: AtomicUsize,
}

impl RecordingStore {
    /// Store that reports registered entities, so scopes are opened.
    pub fn with_entities() -> Self {
        Self {
            entities: true,
            ..Self::default()
        }
    }

    /// Store whose commit always fails, leaving the scope open.
    pub fn failing_commit() -> Self {
        Self {
            entities: true,
            fail_commit: true,
            ..Self::default()
        }
    }

    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn commits(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }

    pub fn rollbacks(&self) -> usize {
        self.rollbacks.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }
}

impl EntityStore for RecordingStore {
    fn has_entities(&self) -> bool {
        self.entities
    }

    fn open_scope(&self) -> Result<(), ScopeError> {
        self.open.store(true, Ordering::SeqCst);
        self.opens.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn scope_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    fn commit(&self) -> Result<(), ScopeError> {
        if self.fail_commit {
            return Err(ScopeError::Commit("injected commit failure".into()));
        }
        self.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn rollback(&self) {
        self.rollbacks.fetch_add(1, Ordering::SeqCst);
    }

    fn close_scope(&self) {
        self.open.store(false, Ordering::SeqCst);
        self.closes.fetch_add(1, Ordering::SeqCst);
    }
}
