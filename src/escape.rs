//! HTML escaping helpers for rendered menu markup.
//!
//! Everything user-influenceable that lands in an attribute or in body text
//! goes through [`esc_attr`]; href values additionally go through
//! [`esc_url`], which drops URLs with disallowed schemes entirely.

/// Schemes allowed in href values. Relative and scheme-relative URLs are
/// always allowed; anything else (javascript:, data:, vbscript:, ...) is
/// rejected outright.
const ALLOWED_SCHEMES: &[&str] = &[
    "http", "https", "mailto", "ftp", "ftps", "tel", "news", "irc", "feed",
];

/// HTML-escape a string for safe output in attribute values or body text.
pub fn esc_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Sanitize and escape a URL for use in an href attribute.
///
/// Returns an empty string when the URL carries a scheme outside the
/// allowlist, which callers treat as "omit the attribute".
pub fn esc_url(url: &str) -> String {
    let cleaned: String = url
        .trim()
        .chars()
        .filter(|c| !c.is_ascii_control())
        .collect();

    if cleaned.is_empty() {
        return String::new();
    }

    if let Some(scheme) = url_scheme(&cleaned)
        && !ALLOWED_SCHEMES.contains(&scheme.to_ascii_lowercase().as_str())
    {
        return String::new();
    }

    esc_attr(&cleaned.replace(' ', "%20"))
}

/// Extract the scheme of a URL, if it has one.
///
/// A colon appearing after a `/`, `?`, or `#` does not start a scheme
/// (e.g. `/path:segment` or `?q=a:b` are relative URLs).
fn url_scheme(url: &str) -> Option<&str> {
    let colon = url.find(':')?;
    let prefix = &url[..colon];
    if prefix.is_empty() || prefix.contains(['/', '?', '#']) {
        return None;
    }
    Some(prefix)
}
