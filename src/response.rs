//! HTTP responses
use std::{fmt::Display, io::Write, str::FromStr};

use crate::{
    error::{ParseError, ParseErrorKind, ProtocolError, ProtocolErrorKind, WriteError},
    header::Headers,
    io::CountingWriter,
    parse::CRLF,
};

/// An HTTP/1.1 response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// The status code such as 200.
    ///
    /// Parsed responses may carry any integer, including values outside the
    /// registered range.
    pub status_code: i64,
    pub headers: Headers,
    pub body: String,
}

impl Response {
    /// Create a response with a `Content-Length` header.
    ///
    /// The status code must be within 100 to 599. An empty body is replaced by
    /// the reason phrase of the status code.
    pub fn new<B: Into<String>>(status_code: i64, body: B) -> Result<Self, ProtocolError> {
        if !crate::status::is_valid(status_code) {
            return Err(ProtocolError::new(ProtocolErrorKind::InvalidStatusCode)
                .with_snippet(status_code.to_string()));
        }

        let mut body = body.into();

        if body.is_empty() {
            body = crate::status::reason_phrase(status_code).to_string();
        }

        let mut headers = Headers::with_capacity(1);
        headers.append("Content-Length", body.len().to_string());

        Ok(Self {
            status_code,
            headers,
            body,
        })
    }

    /// Append a header and return the response.
    ///
    /// # Panics
    ///
    /// Panics if `key` is empty.
    pub fn with_header<K: AsRef<str>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.headers.append(key, value);
        self
    }

    /// Append a header in place.
    ///
    /// # Panics
    ///
    /// Panics if `key` is empty.
    pub fn append_header<K: AsRef<str>, V: Into<String>>(&mut self, key: K, value: V) -> &mut Self {
        self.headers.append(key, value);
        self
    }

    /// Returns the standard reason phrase for the status code.
    pub fn reason_phrase(&self) -> &'static str {
        crate::status::reason_phrase(self.status_code)
    }

    /// Parses a response from wire text.
    ///
    /// The status code may be any integer and is not range checked. A reason
    /// phrase that does not match the status code is logged as a warning and
    /// otherwise ignored. Surrounding whitespace is trimmed from the body.
    /// When there is no blank line, the body is empty rather than the
    /// remaining text of the message.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let lines = crate::parse::split_lines(raw)?;

        let fields = lines[0].splitn(3, ' ').collect::<Vec<_>>();

        let [protocol, status_code, status_text] = fields[..] else {
            return Err(ParseError::new(ParseErrorKind::MalformedStartLine)
                .with_line(0)
                .with_snippet(lines[0]));
        };

        if !crate::parse::is_http_protocol(protocol) {
            return Err(ParseError::new(ParseErrorKind::InvalidProtocol)
                .with_line(0)
                .with_snippet(protocol));
        }

        let status_code = status_code.parse::<i64>().map_err(|_| {
            ParseError::new(ParseErrorKind::InvalidStatusCode)
                .with_line(0)
                .with_snippet(status_code)
        })?;

        let expected_text = crate::status::reason_phrase(status_code);

        if status_text.trim().is_empty() || status_text != expected_text {
            tracing::warn!(
                status_code,
                expected = expected_text,
                actual = status_text,
                "missing or incorrect status text"
            );
        }

        tracing::trace!(protocol, status_code, status_text, "status line");

        let section = crate::parse::header_section(&lines)?;

        let body = match section.body_start {
            Some(start) => lines[start..].join(CRLF).trim().to_string(),
            None => String::new(),
        };

        Ok(Self {
            status_code,
            headers: section.headers,
            body,
        })
    }

    /// Write the response in wire format.
    ///
    /// Returns the number of bytes written. Writing stops at the first error,
    /// which carries the number of bytes written before it.
    pub fn write_to<W: Write>(&self, dest: W) -> Result<u64, WriteError> {
        let mut dest = CountingWriter::new(dest);

        match self.write_parts(&mut dest) {
            Ok(()) => {
                tracing::debug!(write_len = dest.count(), "wrote response");
                Ok(dest.count())
            }
            Err(error) => Err(WriteError::new(dest.count(), error)),
        }
    }

    fn write_parts<W: Write>(&self, mut dest: W) -> std::io::Result<()> {
        write!(
            dest,
            "HTTP/1.1 {} {}\r\n",
            self.status_code,
            self.reason_phrase()
        )?;
        self.headers.serialize(&mut dest)?;
        dest.write_all(b"\r\n")?;
        dest.write_all(self.body.as_bytes())?;
        dest.write_all(b"\r\n")?;

        Ok(())
    }

    /// Returns the response in wire format.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        // Writing to a Vec does not fail.
        let _ = self.write_to(&mut buf);
        buf
    }
}

impl Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.to_bytes()))
    }
}

impl FromStr for Response {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
