//! HTTP header fields
use std::{fmt::Display, io::Write};

pub mod canonical;

pub use canonical::{canonicalize, is_canonical};

/// A single `Key: Value` header line.
///
/// The key is stored in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Header {
    pub key: String,
    pub value: String,
}

impl Header {
    /// Create a header, canonicalizing the key.
    ///
    /// # Panics
    ///
    /// Panics if `key` is empty.
    pub fn new<K: AsRef<str>, V: Into<String>>(key: K, value: V) -> Self {
        Self {
            key: canonicalize(key.as_ref()).into_owned(),
            value: value.into(),
        }
    }
}

impl Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

/// Ordered list of headers.
///
/// Duplicate keys are kept in insertion order and never merged. Lookups
/// canonicalize the given key and then compare it exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    fields: Vec<Header>,
}

impl Headers {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.fields.clear()
    }

    /// Append a header, canonicalizing the key.
    ///
    /// # Panics
    ///
    /// Panics if `key` is empty.
    pub fn append<K: AsRef<str>, V: Into<String>>(&mut self, key: K, value: V) {
        self.fields.push(Header::new(key, value))
    }

    pub fn push(&mut self, header: Header) {
        self.fields.push(header)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the first value for the key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.get_all(key).next()
    }

    pub fn get_all<'a>(&'a self, key: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        let key = lookup_key(key);

        self.fields.iter().filter_map(move |header| {
            if key.as_deref() == Some(header.key.as_str()) {
                Some(header.value.as_str())
            } else {
                None
            }
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Header> {
        self.fields.iter()
    }

    pub fn as_slice(&self) -> &[Header] {
        &self.fields
    }

    /// Write each header as a `Key: Value\r\n` line.
    ///
    /// The blank line ending the header section is not written.
    pub fn serialize<W: Write>(&self, mut buf: W) -> std::io::Result<()> {
        for header in &self.fields {
            buf.write_all(header.key.as_bytes())?;
            buf.write_all(b": ")?;
            buf.write_all(header.value.as_bytes())?;
            buf.write_all(b"\r\n")?;
        }

        Ok(())
    }
}

fn lookup_key(key: &str) -> Option<String> {
    if key.is_empty() {
        None
    } else {
        Some(canonicalize(key).into_owned())
    }
}

impl IntoIterator for Headers {
    type Item = Header;
    type IntoIter = std::vec::IntoIter<Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a Headers {
    type Item = &'a Header;
    type IntoIter = std::slice::Iter<'a, Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Header> for Headers {
    fn extend<T: IntoIterator<Item = Header>>(&mut self, iter: T) {
        self.fields.extend(iter)
    }
}

impl FromIterator<Header> for Headers {
    fn from_iter<T: IntoIterator<Item = Header>>(iter: T) -> Self {
        Self {
            fields: Vec::from_iter(iter),
        }
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for Headers {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        iter.into_iter()
            .map(|(key, value)| Header::new(key, value))
            .collect()
    }
}

impl Display for Headers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for header in &self.fields {
            write!(f, "{}\r\n", header)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_new_canonicalizes() {
        let header = Header::new("content-type", "text/plain");

        assert_eq!(header.key, "Content-Type");
        assert_eq!(header.value, "text/plain");
        assert_eq!(header.to_string(), "Content-Type: text/plain");
    }

    #[test]
    fn test_headers_duplicates_kept_in_order() {
        let mut headers = Headers::new();

        headers.append("set-cookie", "a=1");
        headers.append("Host", "example.com");
        headers.append("SET-COOKIE", "b=2");

        assert_eq!(headers.len(), 3);
        assert_eq!(headers.get("Set-Cookie"), Some("a=1"));
        assert_eq!(
            headers.get_all("set-cookie").collect::<Vec<_>>(),
            vec!["a=1", "b=2"]
        );
        assert_eq!(
            headers.iter().map(|h| h.key.as_str()).collect::<Vec<_>>(),
            vec!["Set-Cookie", "Host", "Set-Cookie"]
        );
    }

    #[test]
    fn test_headers_lookup() {
        let headers = Headers::from_iter([("host", "a"), ("x-id", "1")]);

        assert!(headers.contains_key("HOST"));
        assert!(headers.contains_key("X-Id"));
        assert!(!headers.contains_key("Accept"));
        assert!(!headers.contains_key(""));
        assert_eq!(headers.get("x-ID"), Some("1"));
        assert_eq!(headers.get("accept"), None);
    }

    #[test]
    fn test_headers_clear() {
        let mut headers = Headers::from_iter([("a", "1")]);

        assert!(!headers.is_empty());
        headers.clear();
        assert!(headers.is_empty());
        assert_eq!(headers.len(), 0);
    }

    #[test]
    fn test_headers_serialize() {
        let headers = Headers::from_iter([("host", "example.com"), ("user-agent", "test")]);
        let mut buf = Vec::new();

        headers.serialize(&mut buf).unwrap();

        assert_eq!(buf, b"Host: example.com\r\nUser-Agent: test\r\n");
        assert_eq!(headers.to_string().as_bytes(), buf.as_slice());
    }
}
