use axum::http::HeaderMap;
use axum_extra::extract::CookieJar;
use graphql::SessionToken;

/// The header the client sends its session token in
const HEADER_NAME: &str = "x-csrf-token";
/// The cookie the session token may be stored in instead
const COOKIE_NAME: &str = "session";

/// Extract the session token from a request
///
/// The header takes precedence over the cookie. Blank values are ignored.
pub(crate) fn token(headers: &HeaderMap, cookies: &CookieJar) -> SessionToken {
    let from_header = headers
        .get(HEADER_NAME)
        .and_then(|value| value.to_str().ok())
        .map(|value| SessionToken::new(Some(value)))
        .filter(|token| token.as_str().is_some());

    match from_header {
        Some(token) => token,
        None => SessionToken::new(cookies.get(COOKIE_NAME).map(|cookie| cookie.value())),
    }
}

#[cfg(test)]
mod tests {
    use super::token;
    use axum::http::{header::COOKIE, HeaderMap, HeaderValue};
    use axum_extra::extract::CookieJar;

    fn request(header: Option<&'static str>, cookie: Option<&'static str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(header) = header {
            headers.insert("X-CSRF-TOKEN", HeaderValue::from_static(header));
        }
        if let Some(cookie) = cookie {
            headers.insert(COOKIE, HeaderValue::from_static(cookie));
        }
        headers
    }

    fn extract(header: Option<&'static str>, cookie: Option<&'static str>) -> Option<String> {
        let headers = request(header, cookie);
        let cookies = CookieJar::from_headers(&headers);
        token(&headers, &cookies).as_str().map(String::from)
    }

    #[test]
    fn from_header() {
        assert_eq!(extract(Some("abc"), None), Some(String::from("abc")));
    }

    #[test]
    fn from_cookie() {
        assert_eq!(
            extract(None, Some("theme=dark; session=def")),
            Some(String::from("def"))
        );
    }

    #[test]
    fn header_takes_precedence() {
        assert_eq!(
            extract(Some("abc"), Some("session=def")),
            Some(String::from("abc"))
        );
    }

    #[test]
    fn blank_header_falls_back_to_cookie() {
        assert_eq!(
            extract(Some(""), Some("session=def")),
            Some(String::from("def"))
        );
    }

    #[test]
    fn missing_everywhere() {
        assert_eq!(extract(None, None), None);
        assert_eq!(extract(Some(""), None), None);
        assert_eq!(extract(None, Some("theme=dark")), None);
    }
}
