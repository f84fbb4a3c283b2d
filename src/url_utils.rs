//! URL sanitization for `href` and `src` attributes.
//!
//! Values are resolved against a neutral placeholder base so relative and
//! absolute URLs both parse. A value that stays on the placeholder origin was
//! relative in the input and is emitted in path form (`img.jpg` becomes
//! `/img.jpg`); anything else is emitted as an absolute URL.

use std::sync::LazyLock;

use url::Url;

use crate::patterns::SAFE_BARE_URL;

/// Base used only to make relative references parseable.
const PLACEHOLDER_BASE: &str = "https://placeholder.invalid/";

#[allow(clippy::expect_used)]
static BASE: LazyLock<Url> = LazyLock::new(|| Url::parse(PLACEHOLDER_BASE).expect("placeholder base URL"));

/// Return a safe form of `raw`, or `None` when it must be dropped.
///
/// With `strict`, only http(s) URLs and relative references are accepted,
/// which rejects `javascript:`, `data:`, `mailto:`, `tel:` and friends.
/// Without it, any URL that parses is accepted. When parsing fails, the raw
/// string is accepted only if it consists of letters, digits and
/// `#/?=&.+%-` (optionally starting with `/`).
#[must_use]
pub fn sanitize_url(raw: &str, strict: bool) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let Ok(resolved) = BASE.join(raw) else {
        return SAFE_BARE_URL.is_match(raw).then(|| raw.to_string());
    };

    if is_placeholder_origin(&resolved) {
        return Some(relative_form(&resolved));
    }

    if strict && !matches!(resolved.scheme(), "http" | "https") {
        return None;
    }

    Some(resolved.to_string())
}

fn is_placeholder_origin(url: &Url) -> bool {
    url.scheme() == BASE.scheme() && url.host_str() == BASE.host_str() && url.port() == BASE.port()
}

/// Path, query and fragment of a URL resolved against the placeholder.
fn relative_form(url: &Url) -> String {
    let mut out = url.path().to_string();
    if let Some(query) = url.query() {
        out.push('?');
        out.push_str(query);
    }
    if let Some(fragment) = url.fragment() {
        out.push('#');
        out.push_str(fragment);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_relative_becomes_path() {
        assert_eq!(sanitize_url("img.jpg", true).as_deref(), Some("/img.jpg"));
        assert_eq!(sanitize_url("/a/b?c=1#d", true).as_deref(), Some("/a/b?c=1#d"));
    }

    #[test]
    fn test_fragment_only() {
        assert_eq!(sanitize_url("#step-2", true).as_deref(), Some("/#step-2"));
    }

    #[test]
    fn test_absolute_http_kept() {
        assert_eq!(
            sanitize_url("https://example.com/recipe?id=4", true).as_deref(),
            Some("https://example.com/recipe?id=4")
        );
        assert_eq!(
            sanitize_url("//cdn.example.com/x.jpg", true).as_deref(),
            Some("https://cdn.example.com/x.jpg")
        );
    }

    #[test]
    fn test_strict_rejects_other_schemes() {
        assert_eq!(sanitize_url("javascript:alert(1)", true), None);
        assert_eq!(sanitize_url("data:text/html,hi", true), None);
        assert_eq!(sanitize_url("mailto:chef@example.com", true), None);
        assert_eq!(sanitize_url("tel:+15551234", true), None);
    }

    #[test]
    fn test_lenient_accepts_other_schemes() {
        assert_eq!(
            sanitize_url("mailto:chef@example.com", false).as_deref(),
            Some("mailto:chef@example.com")
        );
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(sanitize_url("   ", true), None);
        assert_eq!(sanitize_url("", false), None);
    }

    #[test]
    fn test_unparseable_falls_back_to_literal_check() {
        // Invalid IPv6 host makes URL parsing fail; the literal check rejects it too.
        assert_eq!(sanitize_url("http://[::1", true), None);
    }
}
