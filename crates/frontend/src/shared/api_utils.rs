//! API utilities for frontend-backend communication
//!
//! Decides which origin contact submissions go to.

/// Backend address used when the page is served from a development host.
pub const LOCAL_API_BASE: &str = "http://localhost:3000";

const LOCAL_HOSTS: [&str; 3] = ["localhost", "127.0.0.1", "[::1]"];

pub fn is_local_host(hostname: &str) -> bool {
    LOCAL_HOSTS
        .iter()
        .any(|local| hostname.eq_ignore_ascii_case(local))
}

/// Pick the API base URL.
///
/// A non-empty configured `primary` always wins. Otherwise a local host maps to
/// [`LOCAL_API_BASE`] and anything else uses the page's own origin. A trailing
/// slash is removed so paths can be appended directly.
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::resolve_api_base;
///
/// let url = format!("{}{}", resolve_api_base(None, "example.com", "https://example.com"), "/api/contact");
/// ```
pub fn resolve_api_base(primary: Option<&str>, hostname: &str, origin: &str) -> String {
    let base = match primary.map(str::trim).filter(|p| !p.is_empty()) {
        Some(configured) => configured,
        None if is_local_host(hostname) => LOCAL_API_BASE,
        None => origin,
    };
    trim_base(base).to_string()
}

/// Strip trailing slashes from a base URL.
pub fn trim_base(base: &str) -> &str {
    base.trim_end_matches('/')
}

/// [`resolve_api_base`] against the current window location
pub fn api_base(primary: Option<&str>) -> String {
    let (hostname, origin) = match web_sys::window() {
        Some(w) => {
            let location = w.location();
            (
                location.hostname().unwrap_or_default(),
                location.origin().unwrap_or_default(),
            )
        }
        None => (String::new(), String::new()),
    };
    resolve_api_base(primary, &hostname, &origin)
}

/// Build a full API URL from a base and a path starting with "/api/"
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", trim_base(base), path)
}
