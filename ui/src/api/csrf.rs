//! CSRF token lookup for mutating requests.

pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Value of cookie `name` in a `document.cookie` style string
/// (`a=1; csrftoken=abc`). Empty values count as absent.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let value = pair
            .trim_start_matches(' ')
            .strip_prefix(name)?
            .strip_prefix('=')?;
        (!value.is_empty()).then(|| value.to_string())
    })
}
