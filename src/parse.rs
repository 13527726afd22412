//! Parsing utilities shared by requests and responses.
use crate::{
    error::{ParseError, ParseErrorKind},
    header::{Header, Headers},
};

pub(crate) const CRLF: &str = "\r\n";

/// Split raw wire text into lines on `\r\n`.
///
/// A message needs at least a start line, a header terminator and a body
/// line.
pub(crate) fn split_lines(raw: &str) -> Result<Vec<&str>, ParseError> {
    let lines = raw.split(CRLF).collect::<Vec<_>>();

    if lines.len() < 3 {
        return Err(ParseError::new(ParseErrorKind::MalformedStructure).with_line(lines.len()));
    }

    Ok(lines)
}

/// Headers collected from the lines after the start line.
#[derive(Debug)]
pub(crate) struct HeaderSection {
    pub headers: Headers,
    /// Index of the first body line, `None` when no blank line was found.
    pub body_start: Option<usize>,
}

impl HeaderSection {
    pub fn contains_host(&self) -> bool {
        self.headers.iter().any(|header| header.key == "Host")
    }
}

/// Parse header lines starting at line 1 up to the first empty line.
pub(crate) fn header_section(lines: &[&str]) -> Result<HeaderSection, ParseError> {
    let mut headers = Headers::new();

    for (index, line) in lines.iter().enumerate().skip(1) {
        if line.is_empty() {
            return Ok(HeaderSection {
                headers,
                body_start: Some(index + 1),
            });
        }

        let header = header_line(line).map_err(|error| error.with_line(index))?;
        tracing::trace!(line = index, key = header.key.as_str(), "header");
        headers.push(header);
    }

    Ok(HeaderSection {
        headers,
        body_start: None,
    })
}

/// Parse a single `Key: Value` line.
///
/// The key is canonicalized. Only the first `": "` separates the key from the
/// value.
pub(crate) fn header_line(line: &str) -> Result<Header, ParseError> {
    match line.split_once(": ") {
        Some((key, value)) if !key.is_empty() => Ok(Header::new(key, value)),
        _ => Err(ParseError::new(ParseErrorKind::MalformedHeader).with_snippet(line)),
    }
}

/// Returns whether the start line field names an HTTP version.
pub(crate) fn is_http_protocol(value: &str) -> bool {
    value.contains("HTTP")
}
