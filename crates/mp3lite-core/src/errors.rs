// Symphonia
// Copyright (c) 2019-2022 The Project Symphonia Developers.
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The `errors` module defines the common error type returned by every decoding stage.

use std::fmt;
use std::io;

/// `Error` enumerates every way a frame can fail to decode, matching the recovery policy each
/// variant is given by the driver: a `DecodeError` or `HuffmanDecodeError` discards the current
/// frame and resyncs, `ReservoirUnderflow` also discards the frame but is not logged as a
/// corruption, `UnsupportedFormat` aborts the stream entirely, and `InvalidFrame` /
/// `InternalInvariantViolation` are unexpected and abort with full context.
#[derive(Debug)]
pub enum Error {
    /// An IO error occurred while reading the stream.
    IoError(io::Error),
    /// The stream contained malformed data that could not be decoded.
    DecodeError(&'static str),
    /// The stream used a container or codec feature this decoder does not implement.
    Unsupported(&'static str),
    /// A Huffman-coded symbol could not be resolved to a table entry.
    HuffmanDecodeError(&'static str),
    /// The bit reservoir did not contain enough bytes to satisfy `main_data_begin`.
    ReservoirUnderflow { wanted: usize, have: usize },
    /// A decoder-internal invariant was violated; this indicates a bug rather than a malformed
    /// stream.
    InternalInvariantViolation(&'static str),
    /// The stream ended before a complete frame could be read.
    TruncatedStream,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::IoError(err) => write!(f, "io error: {}", err),
            Error::DecodeError(msg) => write!(f, "malformed stream: {}", msg),
            Error::Unsupported(feature) => write!(f, "unsupported feature: {}", feature),
            Error::HuffmanDecodeError(msg) => write!(f, "huffman decode error: {}", msg),
            Error::ReservoirUnderflow { wanted, have } => {
                write!(f, "reservoir underflow: wanted {} bytes, have {}", wanted, have)
            }
            Error::InternalInvariantViolation(msg) => write!(f, "internal invariant violated: {}", msg),
            Error::TruncatedStream => write!(f, "stream truncated before a complete frame"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => Error::TruncatedStream,
            _ => Error::IoError(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Convenience function to create a decode error.
pub fn decode_error<T>(desc: &'static str) -> Result<T> {
    Err(Error::DecodeError(desc))
}

/// Convenience function to create an unsupported feature error.
pub fn unsupported_error<T>(feature: &'static str) -> Result<T> {
    Err(Error::Unsupported(feature))
}

/// Convenience function to create a Huffman decode error.
pub fn huffman_decode_error<T>(desc: &'static str) -> Result<T> {
    Err(Error::HuffmanDecodeError(desc))
}
