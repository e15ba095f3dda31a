//! Relay pipeline subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound JSON body
//!     → request.rs (deserialize, resolve fields to strings, validate)
//!     → url.rs (protocol://uri/controller/action)
//!     → signature.rs (nonce, secret key, double-SHA256 digest, header)
//!     → forward.rs (single outbound call, result translation)
//!     → JSON value handed back to the HTTP layer
//! ```
//!
//! # Design Decisions
//! - Fields are a String/Json union resolved once at the boundary; the same
//!   resolved string feeds both the signature and the outbound payload
//! - The digest chain concatenates lowercase hex strings, not raw bytes,
//!   to stay wire-compatible with existing downstream verifiers
//! - One outbound call, no timeout, no retry; transport failures become a
//!   normalized `{error, status: 400}` record instead of propagating

pub mod forward;
pub mod request;
pub mod signature;
pub mod url;

pub use request::{FieldValue, InboundRequest, ResolvedRequest};
pub use signature::{Clock, SystemClock, HMAC_HEADER};
pub use url::build_url;
