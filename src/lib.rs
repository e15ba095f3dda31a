//! HMAC Signing Relay Proxy
//!
//! A single-endpoint relay built with Tokio and Axum: callers describe a
//! downstream target (method, protocol, host, controller, action, body),
//! the relay signs the outbound request with a time-based double-SHA256
//! header and forwards it, then passes the downstream JSON response back.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌────────────────────────────────────────────────┐
//!                    │                 RELAY PROXY                     │
//!                    │                                                 │
//!   Client Request   │  ┌─────────┐   ┌──────────┐   ┌────────────┐  │
//!   ─────────────────┼─▶│  http   │──▶│  relay   │──▶│ signature  │  │
//!                    │  │ server  │   │ request  │   │ (nonce +   │  │
//!                    │  └─────────┘   │ resolve  │   │  digest)   │  │
//!                    │                └──────────┘   └─────┬──────┘  │
//!                    │                                     │          │
//!                    │                                     ▼          │
//!   Client Response  │  ┌─────────┐                 ┌────────────┐   │
//!   ◀────────────────┼──│ outcome │◀────────────────│  forward   │◀──┼── Downstream
//!                    │  │ mapping │                 │ (one call) │   │    Server
//!                    │  └─────────┘                 └────────────┘   │
//!                    │                                                 │
//!                    │  ┌──────────────────────────────────────────┐  │
//!                    │  │          Cross-Cutting Concerns           │  │
//!                    │  │  ┌─────────┐  ┌───────────────────────┐  │  │
//!                    │  │  │ config  │  │     observability     │  │  │
//!                    │  │  │         │  │   logging + metrics   │  │  │
//!                    │  │  └─────────┘  └───────────────────────┘  │  │
//!                    │  └──────────────────────────────────────────┘  │
//!                    └────────────────────────────────────────────────┘
//! ```
//!
//! The relay itself is a single linear pipeline per request: validate,
//! resolve fields, build the URL, sign, forward once, translate the result.
//! No retries, no routing table, no state survives a request.

// Core subsystems
pub mod config;
pub mod http;
pub mod relay;

// Cross-cutting concerns
pub mod error;
pub mod observability;
