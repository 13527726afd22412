//! I/O adapters at the transport boundary.
use std::io::{Read, Write};

use crate::error::{GeneralError, ParseError};

/// Writer that counts the bytes accepted by the inner writer.
#[derive(Debug)]
pub struct CountingWriter<W: Write> {
    inner: W,
    count: u64,
}

impl<W: Write> CountingWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, count: 0 }
    }

    /// Number of bytes written so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let write_len = self.inner.write(buf)?;
        self.count += write_len as u64;
        Ok(write_len)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

/// Read wire text from the source until EOF.
///
/// The peer is expected to close its side of the connection after the
/// message. The text must be valid UTF-8.
pub fn read_message<R: Read>(mut source: R) -> Result<String, GeneralError> {
    let mut buf = Vec::new();
    let read_len = source.read_to_end(&mut buf)?;

    tracing::debug!(read_len, "read message");

    String::from_utf8(buf).map_err(|error| ParseError::from(error).into())
}

/// Writer that accepts `limit` bytes and then fails every write.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct FailingWriter {
    pub limit: usize,
    pub data: Vec<u8>,
    pub writes_after_failure: usize,
    failed: bool,
}

#[cfg(test)]
impl FailingWriter {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            ..Default::default()
        }
    }
}

#[cfg(test)]
impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if self.failed {
            self.writes_after_failure += 1;
        }

        let remain_len = self.limit - self.data.len();

        if remain_len == 0 {
            self.failed = true;
            return Err(std::io::Error::other("sink closed"));
        }

        let write_len = buf.len().min(remain_len);
        self.data.extend_from_slice(&buf[..write_len]);
        Ok(write_len)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
