//! Route lookup table.
//!
//! # Responsibilities
//! - Store routes in per-method ordered lists
//! - Resolve a (method, path) pair to the first matching route
//!
//! # Design Decisions
//! - Populated during single-threaded startup, immutable and lock-free at
//!   dispatch time
//! - First match in registration order wins; no duplicate detection and no
//!   specificity scoring. More specific patterns must be registered before
//!   more general ones that also match; this is the caller's
//!   responsibility. Registering `/users/:id` before `/users/new` makes a
//!   request for `/users/new` bind `id="new"`.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::dispatch::envelope::ResponseEnvelope;
use crate::dispatch::error::HandlerError;
use crate::routing::method::HttpMethod;
use crate::routing::pattern::{InvalidPatternError, RouteParams};
use crate::routing::route::Route;

/// Mapping from HTTP method to the ordered list of registered routes.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: HashMap<HttpMethod, Vec<Route>>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route to its method's list.
    pub fn add(&mut self, route: Route) {
        self.routes.entry(route.method()).or_default().push(route);
    }

    /// Register a bodyless GET handler.
    pub fn get<R, F>(&mut self, pattern: &str, handler: F) -> Result<(), InvalidPatternError>
    where
        R: Serialize + 'static,
        F: Fn(&RouteParams) -> Result<ResponseEnvelope<R>, HandlerError> + Send + Sync + 'static,
    {
        self.add(Route::without_body(HttpMethod::Get, pattern, handler)?);
        Ok(())
    }

    /// Register a POST handler with a JSON body of type `P`.
    pub fn post<P, R, F>(&mut self, pattern: &str, handler: F) -> Result<(), InvalidPatternError>
    where
        P: DeserializeOwned + Send + 'static,
        R: Serialize + 'static,
        F: Fn(Option<P>, &RouteParams) -> Result<ResponseEnvelope<R>, HandlerError>
            + Send
            + Sync
            + 'static,
    {
        self.add(Route::with_body(HttpMethod::Post, pattern, handler)?);
        Ok(())
    }

    /// Register a PUT handler with a JSON body of type `P`.
    pub fn put<P, R, F>(&mut self, pattern: &str, handler: F) -> Result<(), InvalidPatternError>
    where
        P: DeserializeOwned + Send + 'static,
        R: Serialize + 'static,
        F: Fn(Option<P>, &RouteParams) -> Result<ResponseEnvelope<R>, HandlerError>
            + Send
            + Sync
            + 'static,
    {
        self.add(Route::with_body(HttpMethod::Put, pattern, handler)?);
        Ok(())
    }

    /// Register a bodyless DELETE handler.
    pub fn delete<R, F>(&mut self, pattern: &str, handler: F) -> Result<(), InvalidPatternError>
    where
        R: Serialize + 'static,
        F: Fn(&RouteParams) -> Result<ResponseEnvelope<R>, HandlerError> + Send + Sync + 'static,
    {
        self.add(Route::without_body(HttpMethod::Delete, pattern, handler)?);
        Ok(())
    }

    /// Resolve a (method, path) pair to the first matching route.
    ///
    /// Absent method or no matching pattern yields `None`.
    pub fn resolve(&self, method: HttpMethod, path: &str) -> Option<(&Route, RouteParams)> {
        self.routes
            .get(&method)?
            .iter()
            .find_map(|route| route.match_path(path).map(|params| (route, params)))
    }

    /// Total number of registered routes across all methods.
    pub fn len(&self) -> usize {
        self.routes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.values().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_route(method: HttpMethod, pattern: &str) -> Route {
        Route::without_body(method, pattern, |_params| {
            Ok(ResponseEnvelope::<()>::empty())
        })
        .unwrap()
    }

    #[test]
    fn test_resolve_by_method_and_path() {
        let mut table = RouteTable::new();
        table.add(ok_route(HttpMethod::Get, "/users/:id"));
        table.add(ok_route(HttpMethod::Delete, "/users/:id"));

        let (route, params) = table.resolve(HttpMethod::Get, "/users/9").unwrap();
        assert_eq!(route.method(), HttpMethod::Get);
        assert_eq!(params.get("id"), Some("9"));

        assert!(table.resolve(HttpMethod::Post, "/users/9").is_none());
        assert!(table.resolve(HttpMethod::Get, "/orders/9").is_none());
    }

    #[test]
    fn test_first_registration_wins() {
        let mut table = RouteTable::new();
        table.add(ok_route(HttpMethod::Get, "/users/:id"));
        table.add(ok_route(HttpMethod::Get, "/users/new"));

        // The earlier parameter route shadows the literal one.
        let (route, params) = table.resolve(HttpMethod::Get, "/users/new").unwrap();
        assert_eq!(route.pattern(), "/users/:id");
        assert_eq!(params.get("id"), Some("new"));
    }

    #[test]
    fn test_specific_before_general_resolves_specific() {
        let mut table = RouteTable::new();
        table.add(ok_route(HttpMethod::Get, "/users/new"));
        table.add(ok_route(HttpMethod::Get, "/users/:id"));

        let (route, params) = table.resolve(HttpMethod::Get, "/users/new").unwrap();
        assert_eq!(route.pattern(), "/users/new");
        assert!(params.is_empty());

        let (route, _params) = table.resolve(HttpMethod::Get, "/users/42").unwrap();
        assert_eq!(route.pattern(), "/users/:id");
    }

    #[test]
    fn test_len_counts_all_methods() {
        let mut table = RouteTable::new();
        assert!(table.is_empty());
        table.add(ok_route(HttpMethod::Get, "/a"));
        table.add(ok_route(HttpMethod::Post, "/a"));
        assert_eq!(table.len(), 2);
    }
}
