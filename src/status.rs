//! Status codes and reason phrases

/// Lowest status code accepted when building a response.
pub const MIN_STATUS_CODE: i64 = 100;
/// Highest status code accepted when building a response.
pub const MAX_STATUS_CODE: i64 = 599;

/// Returns the standard reason phrase for the status code.
///
/// Returns an empty string for unregistered codes, including values that do
/// not fit a `u16`.
pub fn reason_phrase(status_code: i64) -> &'static str {
    u16::try_from(status_code)
        .ok()
        .and_then(|code| http::StatusCode::from_u16(code).ok())
        .and_then(|status| status.canonical_reason())
        .unwrap_or_default()
}

/// Returns whether the status code is in the range accepted by
/// [`Response::new()`](crate::response::Response::new).
pub fn is_valid(status_code: i64) -> bool {
    (MIN_STATUS_CODE..=MAX_STATUS_CODE).contains(&status_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_phrase() {
        assert_eq!(reason_phrase(200), "OK");
        assert_eq!(reason_phrase(404), "Not Found");
        assert_eq!(reason_phrase(418), "I'm a teapot");
        assert_eq!(reason_phrase(500), "Internal Server Error");
        assert_eq!(reason_phrase(599), "");
        assert_eq!(reason_phrase(700), "");
        assert_eq!(reason_phrase(0), "");
        assert_eq!(reason_phrase(-1), "");
        assert_eq!(reason_phrase(65736), "");
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid(100));
        assert!(is_valid(599));
        assert!(!is_valid(99));
        assert!(!is_valid(600));
        assert!(!is_valid(700));
        assert!(!is_valid(-200));
    }
}
