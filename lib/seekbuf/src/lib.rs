//! An in-memory byte buffer that behaves like a random-access file:
//! reads, writes and seeks all go through a single cursor.
//!
//! ```
//! use seekbuf::{SeekBuffer, Whence};
//!
//! let mut buffer = SeekBuffer::new();
//! buffer.write(b"foobar");
//! buffer.seek(0, Whence::Start).unwrap();
//! buffer.write(b"baz");
//!
//! assert_eq!(buffer.seek(-1, Whence::End), Ok(5));
//! assert_eq!(buffer.remaining_slice(), b"r");
//! assert_eq!(buffer.as_slice(), b"bazbar");
//! ```
//!
//! [`SeekBuffer`] implements [`std::io::Read`], [`std::io::Write`] and
//! [`std::io::Seek`], and with the `tokio` feature their async
//! counterparts as well.

mod buffer;
mod error;
#[cfg(feature = "tokio")]
mod tokio_io;
mod whence;

pub use crate::buffer::SeekBuffer;
pub use crate::error::SeekBufError;
pub use crate::whence::Whence;

pub type Result<T, E = SeekBufError> = std::result::Result<T, E>;
