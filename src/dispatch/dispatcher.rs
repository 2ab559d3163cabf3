//! Request lifecycle orchestration.
//!
//! # Responsibilities
//! - Resolve the route for (method, path)
//! - Decode the request body against the route's parameter type
//! - Open/commit/roll back the per-request transactional scope
//! - Map handler results and failures to (status, content type, body)
//!
//! # Design Decisions
//! - Fully synchronous: no await points, so the scope guard opens and
//!   releases on the serving thread
//! - Unresolved routes return `None` and write nothing; the host adapter
//!   supplies its own default (404, static files, ...)
//! - Exactly one response write and at most one scope open/close pair per
//!   request; no retries at this layer

use std::sync::Arc;

use crate::dispatch::envelope::{DomainError, RawEnvelope};
use crate::dispatch::error::{render_diagnostic, DispatchFailure};
use crate::persistence::{EntityStore, NoStore, ScopeGuard};
use crate::routing::method::HttpMethod;
use crate::routing::table::RouteTable;

/// Content type written whenever a JSON body is produced.
pub const APPLICATION_JSON: &str = "application/json";

/// Content type of the 500 diagnostic path. Deliberately not JSON so
/// clients can tell infrastructure failures from domain failures.
pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// The response the host adapter writes: status, optional content type,
/// optional body. Consumed exactly once per handled request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub status: u16,
    pub content_type: Option<&'static str>,
    pub body: Option<Vec<u8>>,
}

impl DispatchOutcome {
    fn diagnostic(failure: &DispatchFailure) -> Self {
        Self {
            status: 500,
            content_type: Some(TEXT_PLAIN),
            body: Some(render_diagnostic(failure).into_bytes()),
        }
    }
}

/// Orchestrates one request at a time against an immutable route table.
///
/// Holds no cross-request mutable state; safe to share behind an `Arc` with
/// whatever per-request execution model the host server uses.
pub struct Dispatcher {
    table: RouteTable,
    store: Arc<dyn EntityStore>,
}

impl Dispatcher {
    /// Dispatcher without persistence; no scope is ever opened.
    pub fn new(table: RouteTable) -> Self {
        Self::with_store(table, Arc::new(NoStore))
    }

    /// Dispatcher bound to a persistence collaborator.
    pub fn with_store(table: RouteTable, store: Arc<dyn EntityStore>) -> Self {
        Self { table, store }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Handle one request.
    ///
    /// Returns `None` when the method string is unknown or no registered
    /// route matches the path; the request is then left to the host
    /// server's fallback. Every other case produces exactly one outcome.
    pub fn handle(&self, method: &str, path: &str, body: &[u8]) -> Option<DispatchOutcome> {
        let method = HttpMethod::parse(method)?;
        let (route, params) = self.table.resolve(method, path)?;

        tracing::debug!(
            method = %method,
            path = %path,
            pattern = %route.pattern(),
            "Route resolved"
        );

        // Body decode happens before the scope opens; a malformed body must
        // not cost a transaction.
        let param = match route.decode_body(body) {
            Ok(param) => param,
            Err(failure) => {
                tracing::warn!(path = %path, error = %render_diagnostic(&failure), "Body decode failed");
                return Some(DispatchOutcome::diagnostic(&failure));
            }
        };

        let guard = match ScopeGuard::open_if_entities(self.store.as_ref()) {
            Ok(guard) => guard,
            Err(error) => {
                let failure = DispatchFailure::Scope(error);
                tracing::error!(path = %path, error = %render_diagnostic(&failure), "Scope open failed");
                return Some(DispatchOutcome::diagnostic(&failure));
            }
        };

        let outcome = match route.invoke(param, &params) {
            Ok(envelope) => match guard.commit() {
                Ok(()) => success_outcome(method, envelope),
                Err(error) => {
                    let failure = DispatchFailure::Scope(error);
                    tracing::error!(path = %path, error = %render_diagnostic(&failure), "Commit failed");
                    DispatchOutcome::diagnostic(&failure)
                }
            },
            Err(DispatchFailure::Domain(domain)) => {
                // Guard drop rolls back and closes before the response is
                // assembled.
                drop(guard);
                tracing::debug!(path = %path, status = domain.status(), "Domain error");
                domain_outcome(domain)
            }
            Err(failure) => {
                drop(guard);
                tracing::error!(path = %path, error = %render_diagnostic(&failure), "Handler failed");
                DispatchOutcome::diagnostic(&failure)
            }
        };

        Some(outcome)
    }
}

/// Status resolution for the success path: explicit override first, then
/// the method default picked by payload presence.
fn success_outcome(method: HttpMethod, envelope: RawEnvelope) -> DispatchOutcome {
    let status = envelope.status.unwrap_or_else(|| match envelope.payload {
        Some(_) => method.default_status(),
        None => method.default_status_no_content(),
    });
    match envelope.payload {
        Some(body) => DispatchOutcome {
            status,
            content_type: Some(APPLICATION_JSON),
            body: Some(body),
        },
        None => DispatchOutcome {
            status,
            content_type: None,
            body: None,
        },
    }
}

fn domain_outcome(domain: DomainError) -> DispatchOutcome {
    let (status, payload) = domain.into_parts();
    match payload {
        Some(value) => match serde_json::to_vec(&value) {
            Ok(body) => DispatchOutcome {
                status,
                content_type: Some(APPLICATION_JSON),
                body: Some(body),
            },
            Err(error) => DispatchOutcome::diagnostic(&DispatchFailure::Encode(error)),
        },
        None => DispatchOutcome {
            status,
            content_type: None,
            body: None,
        },
    }
}
