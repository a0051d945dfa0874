//! HTTP server module.
//!
//! Serves the router on plain HTTP and drains in-flight requests on
//! SIGTERM/SIGINT. TLS termination is left to the hosting platform.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
