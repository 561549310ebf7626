//! Fragment routing helpers.
//!
//! The fragment (address hash without `#`) has the shape `/section` or
//! `/details/<percent-encoded id>`. Encoding follows the `encodeURIComponent`
//! character set so ids written here decode the same way in a browser.
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::Section;

pub const DEFAULT_FRAGMENT: &str = "/overview";

const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("malformed percent-encoding in {0:?}")]
    MalformedEncoding(String),
}

/// Where the shell goes when the page first becomes ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialRoute {
    /// Rewrite the fragment to `/overview` and load the overview.
    Overview,
    /// Load details; the router extracts any id from the fragment itself.
    Details,
}

impl InitialRoute {
    pub fn resolve(fragment: Option<&str>) -> Self {
        match fragment.map(normalize_fragment) {
            Some(hash) if hash.starts_with("/details") => InitialRoute::Details,
            // Empty, `/overview` and unknown deep links all land on the overview.
            _ => InitialRoute::Overview,
        }
    }
}

/// Drops a single leading `#`.
pub fn normalize_fragment(raw: &str) -> &str {
    raw.strip_prefix('#').unwrap_or(raw)
}

pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

/// Strict inverse of [`encode_component`]: a `%` not followed by two hex
/// digits, or bytes that are not UTF-8 once decoded, are errors.
pub fn decode_component(encoded: &str) -> Result<String, RouteError> {
    let bytes = encoded.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let well_formed = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !well_formed {
                return Err(RouteError::MalformedEncoding(encoded.to_string()));
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    percent_decode_str(encoded)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| RouteError::MalformedEncoding(encoded.to_string()))
}

pub fn section_fragment(section: &str) -> String {
    format!("/{section}")
}

pub fn details_fragment(id: &str) -> String {
    format!("/{}/{}", Section::DETAILS, encode_component(id))
}

/// Extracts the detail id from a `/details/<id...>` fragment.
///
/// Everything after the second `/` belongs to the id, so ids written with
/// raw slashes survive too.
pub fn detail_id(fragment: &str) -> Result<Option<String>, RouteError> {
    let parts: Vec<&str> = normalize_fragment(fragment).split('/').collect();
    if parts.len() < 3 || parts[1] != Section::DETAILS {
        return Ok(None);
    }
    decode_component(&parts[2..].join("/")).map(Some)
}

/// Request path for a section's partial, given the current fragment.
pub fn partial_path(section: &Section, fragment: &str) -> Result<String, RouteError> {
    let mut path = format!("/partials/{}", section.as_str());
    if section.is(Section::DETAILS) {
        if let Some(id) = detail_id(fragment)? {
            path.push_str("?id=");
            path.push_str(&encode_component(&id));
        }
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_encoding_matches_uri_component_set() {
        assert_eq!(
            encode_component("2024/01/01 12:00:00"),
            "2024%2F01%2F01%2012%3A00%3A00"
        );
        assert_eq!(encode_component("a-b_c.d!e~f*g'h(i)"), "a-b_c.d!e~f*g'h(i)");
        assert_eq!(encode_component("ä?&="), "%C3%A4%3F%26%3D");
    }

    #[test]
    fn decode_rejects_truncated_escape() {
        assert!(decode_component("abc%2").is_err());
        assert!(decode_component("%zz").is_err());
        assert!(decode_component("%ff").is_err());
        assert_eq!(decode_component("a%20b").unwrap(), "a b");
    }

    #[test]
    fn initial_route_resolution() {
        assert_eq!(InitialRoute::resolve(None), InitialRoute::Overview);
        assert_eq!(InitialRoute::resolve(Some("")), InitialRoute::Overview);
        assert_eq!(InitialRoute::resolve(Some("#/overview")), InitialRoute::Overview);
        assert_eq!(InitialRoute::resolve(Some("/bogus")), InitialRoute::Overview);
        assert_eq!(InitialRoute::resolve(Some("/details")), InitialRoute::Details);
        assert_eq!(InitialRoute::resolve(Some("#/details/x")), InitialRoute::Details);
    }

    #[test]
    fn detail_id_requires_details_segment() {
        assert_eq!(detail_id("/details").unwrap(), None);
        assert_eq!(detail_id("/overview/x").unwrap(), None);
        assert_eq!(detail_id("/details/a/b").unwrap(), Some("a/b".to_string()));
    }
}
