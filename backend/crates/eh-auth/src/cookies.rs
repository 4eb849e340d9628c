//! Session cookie parsing and `Set-Cookie` rendering.

use http::HeaderMap;
use http::header::COOKIE;

/// Names, lifetimes and flags of the two session cookies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieSettings {
    pub access_cookie_name: String,
    pub refresh_cookie_name: String,
    pub secure: bool,
    pub access_max_age_secs: u64,
    pub refresh_max_age_secs: u64,
}

impl Default for CookieSettings {
    fn default() -> Self {
        Self {
            access_cookie_name: "accessToken".to_string(),
            refresh_cookie_name: "refreshToken".to_string(),
            secure: false,
            access_max_age_secs: 60 * 60,
            refresh_max_age_secs: 60 * 60 * 24 * 90,
        }
    }
}

/// Read a cookie value from every `Cookie` header on the request
pub fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}

/// `Set-Cookie` value for an HttpOnly session cookie
pub fn session_cookie(name: &str, value: &str, max_age_secs: u64, secure: bool) -> String {
    let mut cookie = format!(
        "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
        name, value, max_age_secs
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value that makes the browser drop `name`
pub fn expired_cookie(name: &str, secure: bool) -> String {
    session_cookie(name, "", 0, secure)
}
