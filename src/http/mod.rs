//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, relay endpoint)
//!     → request.rs (request ID injection)
//!     → relay pipeline (resolve, sign, forward)
//!     → outcome mapped to 200 / 400 / 422 and sent to client
//! ```

pub mod request;
pub mod server;

pub use request::{RequestIdLayer, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
