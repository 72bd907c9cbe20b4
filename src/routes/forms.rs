//! Form and cookie decoding
//!
//! Decodes `application/x-www-form-urlencoded` request bodies and extracts
//! the session token from the Cookie header. Unknown form fields (a posted
//! `role`, for instance) are simply never read by the handlers.

use std::collections::HashMap;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "gatehouse_session";

/// Decodes one urlencoded form value; '+' means space in form encoding.
fn decode_value(raw: &str) -> Option<String> {
    let plus_decoded = raw.replace('+', " ");
    urlencoding::decode(&plus_decoded)
        .ok()
        .map(|v| v.into_owned())
}

/// Parses an urlencoded form body into a field map.
///
/// Pairs that fail to decode are dropped, which the handlers then treat
/// as a missing field rather than a server error.
pub fn parse_form(body: &str) -> HashMap<String, String> {
    let mut fields = HashMap::new();

    for pair in body.split('&') {
        let Some((name, value)) = pair.split_once('=') else {
            continue;
        };
        let (Some(name), Some(value)) = (decode_value(name), decode_value(value)) else {
            continue;
        };
        fields.insert(name, value);
    }

    fields
}

/// Extracts the session token from a Cookie header value, if present.
pub fn session_token(cookie_header: Option<&str>) -> Option<String> {
    let header = cookie_header?;

    for cookie in header.split(';') {
        let Some((name, value)) = cookie.trim().split_once('=') else {
            continue;
        };
        if name == SESSION_COOKIE {
            return Some(value.to_string());
        }
    }

    None
}
