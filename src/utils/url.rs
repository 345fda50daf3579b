//! URL utilities for consistent URL handling
//!
//! The generation endpoint is always appended to a user-supplied base URL, so
//! trailing slashes on the base are normalized away before joining.

/// Default backend location when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Normalize a base URL by removing trailing slashes
///
/// # Examples
///
/// ```
/// use palaver::utils::url::normalize_base_url;
///
/// assert_eq!(normalize_base_url("http://localhost:8000"), "http://localhost:8000");
/// assert_eq!(normalize_base_url("http://localhost:8000/"), "http://localhost:8000");
/// assert_eq!(normalize_base_url("http://localhost:8000///"), "http://localhost:8000");
/// ```
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

/// Construct a complete API endpoint URL from a base URL and endpoint path
///
/// # Examples
///
/// ```
/// use palaver::utils::url::construct_api_url;
///
/// assert_eq!(
///     construct_api_url("http://localhost:8000/", "/generate"),
///     "http://localhost:8000/generate"
/// );
/// ```
pub fn construct_api_url(base_url: &str, endpoint: &str) -> String {
    let normalized_base = normalize_base_url(base_url);
    let endpoint = endpoint.trim_start_matches('/');
    format!("{normalized_base}/{endpoint}")
}
