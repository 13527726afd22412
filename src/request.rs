//! HTTP requests
use std::{fmt::Display, io::Write, str::FromStr};

use crate::{
    error::{ParseError, ParseErrorKind, ProtocolError, ProtocolErrorKind, WriteError},
    header::Headers,
    io::CountingWriter,
    parse::CRLF,
};

/// An HTTP/1.1 request.
///
/// A request built with [`Request::new()`] or [`Request::parse()`] always has
/// a `Host` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The method such as "GET".
    pub method: String,
    /// The request target, starting with `/`.
    pub path: String,
    pub headers: Headers,
    pub body: String,
}

impl Request {
    /// Create a request with a `Host` header.
    ///
    /// A `Content-Length` header is added when the body is not empty.
    pub fn new<M, P, H, B>(method: M, path: P, host: H, body: B) -> Result<Self, ProtocolError>
    where
        M: Into<String>,
        P: Into<String>,
        H: Into<String>,
        B: Into<String>,
    {
        let method = method.into();
        let path = path.into();
        let host = host.into();
        let body = body.into();

        if method.is_empty() {
            return Err(ProtocolError::new(ProtocolErrorKind::MissingMethod));
        }
        if path.is_empty() {
            return Err(ProtocolError::new(ProtocolErrorKind::MissingPath));
        }
        if !path.starts_with('/') {
            return Err(ProtocolError::new(ProtocolErrorKind::InvalidPath).with_snippet(path));
        }
        if host.is_empty() {
            return Err(ProtocolError::new(ProtocolErrorKind::MissingHost));
        }

        let mut headers = Headers::with_capacity(2);
        headers.append("Host", host);

        if !body.is_empty() {
            headers.append("Content-Length", body.len().to_string());
        }

        Ok(Self {
            method,
            path,
            headers,
            body,
        })
    }

    /// Append a header and return the request.
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

    /// Parses a request from wire text.
    ///
    /// The body is every line after the blank line except the final line,
    /// which terminates the body. When there is no blank line, the body is
    /// empty rather than the remaining text of the message.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        let lines = crate::parse::split_lines(raw)?;

        let fields = lines[0].split_whitespace().collect::<Vec<_>>();

        let [method, path, protocol, ..] = fields[..] else {
            return Err(ParseError::new(ParseErrorKind::MalformedStartLine)
                .with_line(0)
                .with_snippet(lines[0]));
        };

        if !path.starts_with('/') {
            return Err(ParseError::new(ParseErrorKind::InvalidPath)
                .with_line(0)
                .with_snippet(path));
        }
        if !crate::parse::is_http_protocol(protocol) {
            return Err(ParseError::new(ParseErrorKind::InvalidProtocol)
                .with_line(0)
                .with_snippet(protocol));
        }

        tracing::trace!(method, path, protocol, "request line");

        let section = crate::parse::header_section(&lines)?;

        if !section.contains_host() {
            return Err(ParseError::new(ParseErrorKind::MissingHostHeader));
        }

        // The final line is the terminator of the body line.
        let end = lines.len() - 1;
        let body = match section.body_start {
            Some(start) if start < end => lines[start..end].join(CRLF),
            _ => String::new(),
        };

        Ok(Self {
            method: method.to_string(),
            path: path.to_string(),
            headers: section.headers,
            body,
        })
    }

    /// Write the request in wire format.
    ///
    /// Returns the number of bytes written. Writing stops at the first error,
    /// which carries the number of bytes written before it.
    pub fn write_to<W: Write>(&self, dest: W) -> Result<u64, WriteError> {
        let mut dest = CountingWriter::new(dest);

        match self.write_parts(&mut dest) {
            Ok(()) => {
                tracing::debug!(write_len = dest.count(), "wrote request");
                Ok(dest.count())
            }
            Err(error) => Err(WriteError::new(dest.count(), error)),
        }
    }

    fn write_parts<W: Write>(&self, mut dest: W) -> std::io::Result<()> {
        write!(dest, "{} {} HTTP/1.1\r\n", self.method, self.path)?;
        self.headers.serialize(&mut dest)?;
        dest.write_all(b"\r\n")?;
        dest.write_all(self.body.as_bytes())?;
        dest.write_all(b"\r\n")?;

        Ok(())
    }

    /// Returns the request in wire format.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        // Writing to a Vec does not fail.
        let _ = self.write_to(&mut buf);
        buf
    }
}

impl Display for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.to_bytes()))
    }
}

impl FromStr for Request {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
