use serde::de::{DeserializeOwned, Error as _};
use serde_json::Value;

use super::error::ApiError;

// ============================================================================
// Request Parsing Helpers
// ============================================================================

/// Decode a JSON object body. A blank body reads as `{}`.
///
/// Anything other than an object is rejected before field binding; serde
/// would otherwise fill struct fields from an array by position.
pub fn decode_body<T>(body: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    match serde_json::from_slice::<Value>(body).map_err(ApiError::MalformedBody)? {
        object @ Value::Object(_) => {
            serde_json::from_value(object).map_err(ApiError::MalformedBody)
        }
        _ => Err(ApiError::MalformedBody(serde_json::Error::custom(
            "expected a JSON object",
        ))),
    }
}

/// Read a record id from a path segment.
///
/// Leading whitespace and a `+` sign are skipped and the leading run of
/// digits is used, so `"3abc"` reads as 3. Segments without leading digits
/// (including negative numbers) yield `None` and never match a record.
/// Only decimal digits count, so `"0x1"` reads as 0 rather than as hex.
pub fn parse_id(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    unsigned[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::event::EventChanges;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("1"), Some(1));
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id(" 7"), Some(7));
        assert_eq!(parse_id("+3"), Some(3));
        assert_eq!(parse_id("3abc"), Some(3));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("-1"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("99999999999999999999999"), None);
    }

    #[test]
    fn test_parse_id_is_decimal_only() {
        assert_eq!(parse_id("0x1"), Some(0));
        assert_eq!(parse_id("010"), Some(10));
        assert_eq!(parse_id("1e3"), Some(1));
    }

    #[test]
    fn test_blank_body_is_empty_object() {
        let changes: EventChanges = decode_body(b"").unwrap();
        assert!(changes.name.is_none());

        let changes: EventChanges = decode_body(b" \n").unwrap();
        assert!(changes.date.is_none());
    }

    #[test]
    fn test_malformed_body() {
        let result: Result<EventChanges, _> = decode_body(b"{not json");
        assert!(matches!(result, Err(ApiError::MalformedBody(_))));
    }

    #[test]
    fn test_non_object_bodies_rejected() {
        for body in [
            &br#"["Demo","2025-01-01","Hall"]"#[..],
            &b"[]"[..],
            &b"\"Demo\""[..],
            &b"42"[..],
            &b"null"[..],
        ] {
            let result: Result<EventChanges, _> = decode_body(body);
            assert!(matches!(result, Err(ApiError::MalformedBody(_))));
        }
    }
}
