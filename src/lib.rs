//! Embedded JSON route-dispatch library.

pub mod codec;
pub mod config;
pub mod dispatch;
pub mod http;
pub mod observability;
pub mod persistence;
pub mod routing;

pub use config::ServerConfig;
pub use dispatch::{DispatchOutcome, Dispatcher, DomainError, HandlerError, ResponseEnvelope};
pub use http::HttpServer;
pub use persistence::{EntityStore, NoStore};
pub use routing::{HttpMethod, Route, RouteParams, RouteTable};
