//! Header name canonicalization
use std::borrow::Cow;

/// Returns the header key in title case, e.g. `content-type` becomes
/// `Content-Type`.
///
/// The first character and every character following a `-` is uppercased,
/// everything else is lowercased. Only ASCII letters are affected. The input is
/// borrowed unchanged when it is already canonical.
///
/// # Panics
///
/// Panics if `key` is empty. An empty header name is a bug in the caller.
pub fn canonicalize(key: &str) -> Cow<'_, str> {
    assert!(!key.is_empty(), "empty header key");

    if is_canonical(key) {
        Cow::Borrowed(key)
    } else {
        Cow::Owned(to_title_case(key))
    }
}

/// Returns whether the header key is already in title case.
pub fn is_canonical(key: &str) -> bool {
    let mut word_start = true;

    for c in key.chars() {
        if word_start {
            if c.is_ascii_lowercase() {
                return false;
            }
        } else if c.is_ascii_uppercase() {
            return false;
        }

        word_start = c == '-';
    }

    true
}

fn to_title_case(key: &str) -> String {
    let mut output = String::with_capacity(key.len());
    let mut word_start = true;

    for c in key.chars() {
        if word_start {
            output.push(c.to_ascii_uppercase());
        } else {
            output.push(c.to_ascii_lowercase());
        }

        word_start = c == '-';
    }

    output
}
