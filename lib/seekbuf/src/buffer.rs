//! This module contains the `SeekBuffer` type: a growable vector of
//! bytes and a single cursor that every read, write and seek goes
//! through.

use std::cmp;
use std::fmt;
use std::io::{self, Read, Seek, Write};

use bytes::Bytes;

use crate::{Result, SeekBufError, Whence};

/// An in-memory file. It is simply a buffer of bytes with a cursor that
/// represents the read/write position in the buffer.
///
/// Writes overwrite the bytes under the cursor and append whatever does
/// not fit. The buffer never shrinks.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SeekBuffer {
    data: Vec<u8>,
    cursor: usize,
}

impl SeekBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer whose store can hold `capacity` bytes
    /// before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cursor: 0,
        }
    }

    /// Creates a buffer holding `data`, with the cursor at the start.
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            cursor: 0,
        }
    }

    /// Returns the bytes from the cursor up to the end of the buffer.
    pub fn remaining_slice(&self) -> &[u8] {
        self.data.get(self.cursor..).unwrap_or_default()
    }

    /// Returns every byte of the buffer, regardless of the cursor.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The absolute position of the cursor.
    pub fn position(&self) -> u64 {
        self.cursor as u64
    }

    /// Number of bytes between the cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.cursor)
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    pub fn freeze(self) -> Bytes {
        Bytes::from(self.data)
    }

    /// Reads the next `buf.len()` bytes starting from the cursor.
    ///
    /// A short read is not an error. Asking for at least one byte when
    /// none are left returns [`SeekBufError::EndOfData`], while an empty
    /// `buf` always succeeds with `0`.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        let data_to_copy = self.remaining_slice();
        if data_to_copy.is_empty() {
            return Err(SeekBufError::EndOfData);
        }

        let max_to_read = cmp::min(data_to_copy.len(), buf.len());
        buf[..max_to_read].copy_from_slice(&data_to_copy[..max_to_read]);

        self.cursor += max_to_read;

        Ok(max_to_read)
    }

    /// Writes `buf` at the cursor, overwriting existing bytes and growing
    /// the buffer for the part that goes past its end. The cursor always
    /// moves forward by `buf.len()`.
    ///
    /// If the cursor sits past the end (see [`Whence::End`]), the gap
    /// is filled with zeros before `buf` is appended. The gap is allocated
    /// like any other byte, so a cursor far past the end can exhaust
    /// memory here. The [`Write`] impl reserves the space first and
    /// reports [`io::ErrorKind::OutOfMemory`] instead.
    pub fn write(&mut self, buf: &[u8]) -> usize {
        if buf.is_empty() {
            return 0;
        }

        if self.cursor > self.data.len() {
            tracing::trace!(
                len = self.data.len(),
                cursor = self.cursor,
                "zero-filling the gap before writing past the end",
            );
            self.data.resize(self.cursor, 0);
        }

        let overlap = cmp::min(self.data.len() - self.cursor, buf.len());
        let (overwrite, append) = buf.split_at(overlap);

        self.data[self.cursor..][..overlap].copy_from_slice(overwrite);
        self.data.extend_from_slice(append);

        self.cursor += buf.len();

        buf.len()
    }

    /// Moves the cursor by `offset`, measured from `whence`, and returns
    /// the new absolute position.
    ///
    /// [`Whence::Start`] and [`Whence::Current`] refuse to move forward
    /// onto or past the last byte, while [`Whence::End`] only refuses to
    /// go before byte 0 and may leave the cursor past the end. A negative
    /// target is always refused. On error the cursor is left untouched.
    pub fn seek(&mut self, offset: i64, whence: Whence) -> Result<u64> {
        let invalid = || {
            tracing::trace!(
                offset,
                %whence,
                len = self.data.len(),
                cursor = self.cursor,
                "rejecting seek",
            );
            SeekBufError::InvalidOffset { offset, whence }
        };

        let len = i64::try_from(self.data.len()).map_err(|_| invalid())?;

        let next_cursor = match whence {
            Whence::Start => {
                if offset > 0 && offset >= len {
                    return Err(invalid());
                }

                offset
            }

            Whence::Current => {
                let next_cursor = i64::try_from(self.cursor)
                    .ok()
                    .and_then(|cursor| cursor.checked_add(offset))
                    .ok_or_else(invalid)?;

                if offset > 0 && next_cursor >= len {
                    return Err(invalid());
                }

                next_cursor
            }

            Whence::End => len.checked_add(offset).ok_or_else(invalid)?,
        };

        // It's an error to seek before the byte 0.
        let next_cursor = usize::try_from(next_cursor).map_err(|_| invalid())?;
        self.cursor = next_cursor;

        Ok(self.position())
    }

    /// Same as [`SeekBuffer::seek`], but `whence` is the raw `SEEK_*`
    /// value. Unknown values fail with [`SeekBufError::InvalidWhence`].
    pub fn seek_raw(&mut self, offset: i64, whence: i32) -> Result<u64> {
        let whence = Whence::try_from(whence).inspect_err(|_| {
            tracing::trace!(offset, whence, "rejecting seek with an unknown whence");
        })?;

        self.seek(offset, whence)
    }

    /// Reserves room for writing `buf` at the cursor, gap included.
    fn try_reserve_for(&mut self, buf: &[u8]) -> io::Result<()> {
        if buf.is_empty() {
            return Ok(());
        }

        let additional = self
            .cursor
            .saturating_add(buf.len())
            .saturating_sub(self.data.len());

        self.data.try_reserve(additional).map_err(|err| {
            tracing::trace!(
                len = self.data.len(),
                cursor = self.cursor,
                additional,
                "unable to reserve room for the write",
            );
            io::Error::new(io::ErrorKind::OutOfMemory, err)
        })
    }
}

impl fmt::Debug for SeekBuffer {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SeekBuffer")
            .field("len", &self.data.len())
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl From<Vec<u8>> for SeekBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self::from_bytes(data)
    }
}

impl From<&[u8]> for SeekBuffer {
    fn from(data: &[u8]) -> Self {
        Self::from_bytes(data)
    }
}

impl From<&str> for SeekBuffer {
    fn from(data: &str) -> Self {
        Self::from_bytes(data)
    }
}

impl From<Bytes> for SeekBuffer {
    fn from(data: Bytes) -> Self {
        Self::from_bytes(data)
    }
}

impl Read for SeekBuffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match SeekBuffer::read(self, buf) {
            Err(SeekBufError::EndOfData) => Ok(0),
            result => result.map_err(Into::into),
        }
    }
}

impl Write for SeekBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.try_reserve_for(buf)?;

        Ok(SeekBuffer::write(self, buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Seek for SeekBuffer {
    fn seek(&mut self, position: io::SeekFrom) -> io::Result<u64> {
        let (offset, whence) = split_seek_from(position)?;

        SeekBuffer::seek(self, offset, whence).map_err(Into::into)
    }
}

/// Turns a [`io::SeekFrom`] into the signed offset and [`Whence`] the
/// buffer works with. A start offset above `i64::MAX` is reported as
/// `i64::MAX`; the exact value goes to the trace event.
pub(crate) fn split_seek_from(position: io::SeekFrom) -> Result<(i64, Whence)> {
    match position {
        io::SeekFrom::Start(offset) => i64::try_from(offset)
            .map(|offset| (offset, Whence::Start))
            .map_err(|_| {
                tracing::trace!(offset, "rejecting seek from start beyond i64::MAX");
                SeekBufError::InvalidOffset {
                    offset: i64::MAX,
                    whence: Whence::Start,
                }
            }),
        io::SeekFrom::Current(offset) => Ok((offset, Whence::Current)),
        io::SeekFrom::End(offset) => Ok((offset, Whence::End)),
    }
}
