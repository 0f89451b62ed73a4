use std::fmt;

use crate::SeekBufError;

/// The origin a seek offset is measured from. The discriminants follow
/// the usual `SEEK_SET`, `SEEK_CUR` and `SEEK_END` numbering.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Whence {
    Start = 0,
    Current = 1,
    End = 2,
}

impl TryFrom<i32> for Whence {
    type Error = SeekBufError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Start),
            1 => Ok(Self::Current),
            2 => Ok(Self::End),
            other => Err(SeekBufError::InvalidWhence(other)),
        }
    }
}

impl From<Whence> for i32 {
    fn from(whence: Whence) -> Self {
        whence as i32
    }
}

impl fmt::Display for Whence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::Current => "current",
            Self::End => "end",
        })
    }
}
