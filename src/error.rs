// Copyright (c) 2022 Octavian Oncescu
// Copyright (c) 2022-2023 The Purplecoin Core developers
// Licensed under the Apache License, Version 2.0 see LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0 or the MIT license, see
// LICENSE-MIT or http://opensource.org/licenses/MIT

use std::{fmt, io};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BigIntErr {
    /// Divisor is zero
    DivisionByZero,

    /// Text is not an optionally signed run of decimal digits
    InvalidFormat,
}

impl fmt::Display for BigIntErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivisionByZero => f.write_str("division by zero"),
            Self::InvalidFormat => f.write_str("invalid decimal integer format"),
        }
    }
}

impl std::error::Error for BigIntErr {}

#[derive(Debug)]
pub enum StreamErr {
    /// Underlying reader error
    Io(io::Error),

    /// Token read from the stream is not a valid integer
    Parse(BigIntErr),
}

impl From<io::Error> for StreamErr {
    fn from(other: io::Error) -> Self {
        Self::Io(other)
    }
}

impl From<BigIntErr> for StreamErr {
    fn from(other: BigIntErr) -> Self {
        Self::Parse(other)
    }
}

impl fmt::Display for StreamErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "stream error: {err}"),
            Self::Parse(err) => write!(f, "parse error: {err}"),
        }
    }
}

impl std::error::Error for StreamErr {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stream_err_wraps_sources() {
        let err: StreamErr = BigIntErr::InvalidFormat.into();
        assert!(matches!(err, StreamErr::Parse(BigIntErr::InvalidFormat)));
        assert_eq!(err.to_string(), "parse error: invalid decimal integer format");

        let err: StreamErr = io::Error::new(io::ErrorKind::UnexpectedEof, "eof").into();
        assert!(matches!(err, StreamErr::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
