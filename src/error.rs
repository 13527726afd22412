//! Error representations
use std::{backtrace::Backtrace, fmt::Display, str::Utf8Error, string::FromUtf8Error};

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GeneralError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GeneralError {
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(..))
    }

    pub fn as_parse(&self) -> Option<&ParseError> {
        if let Self::Parse(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn try_into_parse(self) -> Result<ParseError, Self> {
        if let Self::Parse(v) = self {
            Ok(v)
        } else {
            Err(self)
        }
    }

    pub fn is_protocol(&self) -> bool {
        matches!(self, Self::Protocol(..))
    }

    pub fn as_protocol(&self) -> Option<&ProtocolError> {
        if let Self::Protocol(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn is_write(&self) -> bool {
        matches!(self, Self::Write(..))
    }

    pub fn as_write(&self) -> Option<&WriteError> {
        if let Self::Write(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(..))
    }

    pub fn as_io(&self) -> Option<&std::io::Error> {
        if let Self::Io(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

/// Error for parsing HTTP messages off the wire.
#[derive(Debug, thiserror::Error)]
pub struct ParseError {
    kind: ParseErrorKind,
    context: Box<ParseContext>,
    backtrace: Option<Box<Backtrace>>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            context: Default::default(),
            backtrace: Some(Box::new(Backtrace::capture())),
        }
    }

    /// Zero-based index of the offending line.
    pub fn with_line(mut self, value: usize) -> Self {
        self.context.line = Some(value);
        self
    }

    pub fn with_position(mut self, value: u64) -> Self {
        self.context.position = Some(value);
        self
    }

    pub fn with_snippet<S: Into<String>>(mut self, value: S) -> Self {
        self.context.snippet = Some(value.into());
        self
    }

    pub fn with_backtrace(mut self, backtrace: Backtrace) -> Self {
        self.backtrace = Some(Box::new(backtrace));
        self
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    pub fn line(&self) -> Option<usize> {
        self.context.line
    }

    pub fn position(&self) -> Option<u64> {
        self.context.position
    }

    pub fn snippet(&self) -> Option<&str> {
        self.context.snippet.as_deref()
    }

    pub fn backtrace(&self) -> Option<&Backtrace> {
        self.backtrace.as_deref()
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse error: {}{}", self.kind, self.context)
    }
}

impl From<ParseErrorKind> for ParseError {
    fn from(value: ParseErrorKind) -> Self {
        Self::new(value)
    }
}

impl From<FromUtf8Error> for ParseError {
    fn from(value: FromUtf8Error) -> Self {
        ParseError::new(ParseErrorKind::InvalidUtf8)
            .with_position(value.utf8_error().valid_up_to() as u64)
    }
}

impl From<Utf8Error> for ParseError {
    fn from(value: Utf8Error) -> Self {
        ParseError::new(ParseErrorKind::InvalidUtf8).with_position(value.valid_up_to() as u64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// Too few lines to hold a start line, headers and a body.
    MalformedStructure,
    /// The request line or status line is missing fields.
    MalformedStartLine,
    /// The request path does not start with `/`.
    InvalidPath,
    /// The start line has no HTTP version marker.
    InvalidProtocol,
    /// A header line is not of the form `Key: Value`.
    MalformedHeader,
    /// A request without a `Host` header.
    MissingHostHeader,
    /// The status code is not an integer.
    InvalidStatusCode,
    InvalidUtf8,
}

impl Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::MalformedStructure => "malformed message: should have at least 3 lines",
            Self::MalformedStartLine => "malformed start line: should have at least 3 fields",
            Self::InvalidPath => "malformed request: path should start with /",
            Self::InvalidProtocol => "malformed start line: should contain HTTP version",
            Self::MalformedHeader => "malformed header: should be of form 'key: value'",
            Self::MissingHostHeader => "malformed request: missing Host header",
            Self::InvalidStatusCode => "malformed response: status code should be an integer",
            Self::InvalidUtf8 => "invalid UTF-8",
        };

        f.write_str(value)
    }
}

#[derive(Debug, Default)]
struct ParseContext {
    line: Option<usize>,
    position: Option<u64>,
    snippet: Option<String>,
}

impl Display for ParseContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(line) = self.line {
            write!(f, " line {}", line)?;
        }

        if let Some(position) = self.position {
            write!(f, " position {}", position)?;
        }

        if let Some(snippet) = &self.snippet {
            write!(f, " near {:?}", snippet)?;
        }

        Ok(())
    }
}

/// Error for building messages that break the message invariants.
#[derive(Debug, thiserror::Error)]
pub struct ProtocolError {
    kind: ProtocolErrorKind,
    snippet: Option<String>,
    backtrace: Option<Box<Backtrace>>,
}

impl ProtocolError {
    pub fn new(kind: ProtocolErrorKind) -> Self {
        Self {
            kind,
            snippet: None,
            backtrace: Some(Box::new(Backtrace::capture())),
        }
    }

    pub fn with_snippet<S: Into<String>>(mut self, value: S) -> Self {
        self.snippet = Some(value.into());
        self
    }

    pub fn kind(&self) -> ProtocolErrorKind {
        self.kind
    }

    pub fn snippet(&self) -> Option<&str> {
        self.snippet.as_deref()
    }

    pub fn backtrace(&self) -> Option<&Backtrace> {
        self.backtrace.as_deref()
    }
}

impl Display for ProtocolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "protocol error: {}", self.kind)?;

        if let Some(snippet) = &self.snippet {
            write!(f, " near {:?}", snippet)?;
        }

        Ok(())
    }
}

impl From<ProtocolErrorKind> for ProtocolError {
    fn from(value: ProtocolErrorKind) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ProtocolErrorKind {
    MissingMethod,
    MissingPath,
    InvalidPath,
    MissingHost,
    InvalidStatusCode,
}

impl Display for ProtocolErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::MissingMethod => "missing required argument: method",
            Self::MissingPath => "missing required argument: path",
            Self::InvalidPath => "path must start with /",
            Self::MissingHost => "missing required argument: host",
            Self::InvalidStatusCode => "invalid status code",
        };

        f.write_str(value)
    }
}

/// Error for serializing a message to a writer.
///
/// Carries the number of bytes the writer accepted before the failure.
#[derive(Debug, thiserror::Error)]
pub struct WriteError {
    written: u64,
    source: std::io::Error,
}

impl WriteError {
    pub fn new(written: u64, source: std::io::Error) -> Self {
        Self { written, source }
    }

    /// Number of bytes written before the failure.
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn io_error(&self) -> &std::io::Error {
        &self.source
    }

    pub fn into_io_error(self) -> std::io::Error {
        self.source
    }
}

impl Display for WriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "write error after {} bytes: {}", self.written, self.source)
    }
}

impl From<WriteError> for std::io::Error {
    fn from(value: WriteError) -> Self {
        value.source
    }
}
