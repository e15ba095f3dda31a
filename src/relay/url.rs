//! Outbound URL assembly.
//!
//! # Design Decisions
//! - Plain concatenation, no escaping or character validation; callers are
//!   trusted to supply well-formed components
//! - Pure function so determinism is trivially testable

/// Build the downstream URL: `protocol://uri/controller/action`.
pub fn build_url(protocol: &str, uri: &str, controller: &str, action: &str) -> String {
    format!("{protocol}://{uri}/{controller}/{action}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        assert_eq!(
            build_url("https", "api.example.com", "users", "list"),
            "https://api.example.com/users/list"
        );
    }

    #[test]
    fn test_build_url_keeps_ports_and_paths() {
        assert_eq!(
            build_url("http", "127.0.0.1:8080", "orders", "create"),
            "http://127.0.0.1:8080/orders/create"
        );
    }
}
