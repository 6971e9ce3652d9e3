//! Debug entry point detection.

/// True when the page was opened with `?<token>` (any value) or `#<token>`.
///
/// `hash` is the raw `location.hash`, leading `#` included or not.
/// `has_param` answers whether the decoded query string carries a key,
/// as `URLSearchParams.has` does.
pub fn bypass_requested(hash: &str, token: &str, has_param: impl FnOnce(&str) -> bool) -> bool {
    if token.is_empty() {
        return false;
    }
    hash.strip_prefix('#').unwrap_or(hash) == token || has_param(token)
}
