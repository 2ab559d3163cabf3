//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route registration (at startup):
//!     pattern string
//!     → pattern.rs (compile into literal/param segments)
//!     → route.rs (erase parameter & response types)
//!     → table.rs (append to per-method list)
//!
//! Incoming request (method, path):
//!     → table.rs (per-method list, registration order)
//!     → pattern.rs (segment matching, parameter extraction)
//!     → Return: (Route, RouteParams) or no match
//! ```
//!
//! # Design Decisions
//! - Routes compiled at registration, immutable at dispatch time
//! - No regex in the hot path (segment comparison only)
//! - Deterministic: first match in registration order wins

pub mod method;
pub mod pattern;
pub mod route;
pub mod table;

pub use method::HttpMethod;
pub use pattern::{InvalidPatternError, PathPattern, RouteParams};
pub use route::Route;
pub use table::RouteTable;
