//! HTTP host subsystem: the axum adapter in front of the dispatcher.

pub mod server;

pub use server::{AppState, HttpServer};
