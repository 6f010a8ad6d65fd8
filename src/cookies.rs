//!
//! # Cookie Transport
//!
//! The bearer token travels in a cookie named `token`. Extraction scans the
//! raw `Cookie` header for semicolon-delimited `name=value` pairs; absence is
//! a normal `None`, never an error. No expiry, secure, http-only, or
//! same-site attributes are set on the session cookie (see DESIGN.md).

use actix_web::{
    cookie::Cookie,
    http::header,
    HttpRequest,
};

/// Name of the cookie carrying the signed bearer token.
pub const TOKEN_COOKIE: &str = "token";

/// Scans a `Cookie` header value for `name` and returns its value.
///
/// Pairs are semicolon-delimited; leading spaces are trimmed and the name is
/// matched as an exact `name=` prefix.
pub fn parse_cookie_header(header: &str, name: &str) -> Option<String> {
    for pair in header.split(';') {
        let pair = pair.trim_start_matches(' ');
        if let Some(value) = pair.strip_prefix(name) {
            if let Some(value) = value.strip_prefix('=') {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// Reads a cookie value from the request's `Cookie` header.
pub fn get_cookie(req: &HttpRequest, name: &str) -> Option<String> {
    let header = req.headers().get(header::COOKIE)?.to_str().ok()?;
    parse_cookie_header(header, name)
}

/// The `token` cookie attached to a successful login response.
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::new(TOKEN_COOKIE, token)
}

/// A removal cookie for logout: empty value, expired immediately.
pub fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(TOKEN_COOKIE, "");
    cookie.make_removal();
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extracts_among_other_pairs() {
        assert_eq!(
            parse_cookie_header("foo=bar; token=XYZ; baz=qux", "token"),
            Some("XYZ".to_string())
        );
    }

    #[test]
    fn test_absent_is_none() {
        assert_eq!(parse_cookie_header("foo=bar; baz=qux", "token"), None);
        assert_eq!(parse_cookie_header("", "token"), None);
    }

    #[test]
    fn test_leading_spaces_are_trimmed() {
        assert_eq!(
            parse_cookie_header("foo=bar;   token=abc123", "token"),
            Some("abc123".to_string())
        );
        assert_eq!(
            parse_cookie_header("token=first", "token"),
            Some("first".to_string())
        );
    }

    #[test]
    fn test_name_is_matched_as_exact_prefix() {
        // "access_token" must not satisfy a lookup for "token".
        assert_eq!(parse_cookie_header("access_token=nope", "token"), None);
        assert_eq!(
            parse_cookie_header("access_token=nope; token=yes", "token"),
            Some("yes".to_string())
        );
    }

    #[test]
    fn test_empty_value_is_returned_as_empty() {
        assert_eq!(
            parse_cookie_header("token=", "token"),
            Some(String::new())
        );
    }

    #[test]
    fn test_get_cookie_from_request() {
        let req = actix_web::test::TestRequest::default()
            .insert_header((header::COOKIE, "foo=bar; token=XYZ; baz=qux"))
            .to_http_request();
        assert_eq!(get_cookie(&req, TOKEN_COOKIE), Some("XYZ".to_string()));

        let bare = actix_web::test::TestRequest::default().to_http_request();
        assert_eq!(get_cookie(&bare, TOKEN_COOKIE), None);
    }

    #[test]
    fn test_removal_cookie_expires_immediately() {
        let cookie = removal_cookie();
        assert_eq!(cookie.name(), TOKEN_COOKIE);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(actix_web::cookie::time::Duration::ZERO));
    }
}
