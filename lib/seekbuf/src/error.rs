use std::io;

use thiserror::Error;

use crate::Whence;

/// Error type for buffer operations.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum SeekBufError {
    /// A non-empty read was requested but no byte remains after the cursor.
    #[error("end of data")]
    EndOfData,
    /// The seek target failed the validation of its `whence`.
    #[error("invalid offset {offset} from {whence}")]
    InvalidOffset { offset: i64, whence: Whence },
    /// The raw `whence` value does not name a seek mode.
    #[error("invalid whence {0}")]
    InvalidWhence(i32),
}

impl SeekBufError {
    /// Whether the error was caused by bad arguments to a seek, as opposed
    /// to running out of data.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidOffset { .. } | Self::InvalidWhence(_))
    }

    fn kind(&self) -> io::ErrorKind {
        match self {
            Self::EndOfData => io::ErrorKind::UnexpectedEof,
            Self::InvalidOffset { .. } | Self::InvalidWhence(_) => io::ErrorKind::InvalidInput,
        }
    }
}

impl From<SeekBufError> for io::Error {
    fn from(err: SeekBufError) -> Self {
        io::Error::new(err.kind(), err)
    }
}
