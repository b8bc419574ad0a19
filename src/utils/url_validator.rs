//! Long-URL validation performed before any store access.

use url::Url;

/// Errors produced while validating a long URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Validates a long URL and returns it in parsed, canonical form.
///
/// Rejects anything the `url` crate cannot parse as an absolute URL, and
/// any scheme other than `http`/`https` (so `javascript:`, `data:`, `file:`
/// and friends never reach the store).
pub fn validate_long_url(input: &str) -> Result<String, UrlValidationError> {
    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_long_url("http://example.com/a").is_ok());
        assert!(validate_long_url("https://example.com/a?q=1").is_ok());
    }

    #[test]
    fn test_rejects_malformed() {
        let result = validate_long_url("not-a-url");
        assert!(matches!(result, Err(UrlValidationError::InvalidFormat(_))));
    }

    #[test]
    fn test_rejects_relative() {
        assert!(validate_long_url("/relative/path").is_err());
    }

    #[test]
    fn test_rejects_dangerous_schemes() {
        for input in ["javascript:alert(1)", "data:text/html,x", "file:///etc/passwd"] {
            let result = validate_long_url(input);
            assert!(
                matches!(result, Err(UrlValidationError::UnsupportedProtocol)),
                "expected rejection for {input}"
            );
        }
    }

    #[test]
    fn test_preserves_query_and_path() {
        let result = validate_long_url("https://example.com/path?a=1&b=2").unwrap();
        assert_eq!(result, "https://example.com/path?a=1&b=2");
    }
}
