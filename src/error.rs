//! Error and status types for notification decoding.
//!
//! These enums keep the reassembly logic free of transport concerns while
//! surfacing precise diagnostics to callers and tests.

use std::{io, num::NonZeroUsize, str::Utf8Error};

use thiserror::Error;

use crate::{record::Field, state::ProcessingState};

/// Result of feeding a packet into a
/// [`NotificationDecoder`](crate::NotificationDecoder).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IngestStatus {
    /// The notification still expects more bytes.
    Incomplete,
    /// The packet completed the notification.
    Complete,
}

/// Errors produced while decoding a notification.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Fewer than three bytes were available where an attribute header was
    /// expected and no more input is coming.
    #[error("attribute header truncated: {available} of 3 bytes available")]
    TruncatedHeader {
        /// Header bytes that were available.
        available: usize,
    },
    /// The command tag and identifier preamble ended early.
    #[error("notification preamble truncated: {received} of 5 bytes received")]
    TruncatedUid {
        /// Preamble bytes received so far.
        received: usize,
    },
    /// Input ended while an attribute payload was still in flight.
    #[error("{field} payload truncated: {missing} bytes missing")]
    TruncatedPayload {
        /// Field whose payload was cut short.
        field: Field,
        /// Payload bytes that never arrived.
        missing: usize,
    },
    /// Input ended cleanly between attributes before the record was complete.
    #[error("notification ended before completion while expecting {state}")]
    UnfinishedRecord {
        /// State the decoder was left in.
        state: ProcessingState,
    },
    /// A declared attribute length would push the record beyond the
    /// configured size limit.
    #[error("{field} declares {declared} bytes; record would reach {attempted} bytes > {limit} bytes")]
    InvalidLength {
        /// Field carrying the offending header.
        field: Field,
        /// Length declared by the attribute header.
        declared: usize,
        /// Total declared record size that triggered the guard.
        attempted: usize,
        /// Configured size cap.
        limit: NonZeroUsize,
    },
    /// A completed attribute payload is not valid UTF-8.
    #[error("{field} is not valid UTF-8: {source}")]
    InvalidText {
        /// Field whose payload failed to decode.
        field: Field,
        /// Underlying UTF-8 error.
        source: Utf8Error,
    },
    /// Bytes arrived after the fifth attribute completed.
    #[error("{extra} unexpected bytes after the notification finished")]
    UnexpectedDataAfterFinish {
        /// Number of surplus bytes.
        extra: usize,
    },
    /// The decoder rejected earlier input and must be reset.
    #[error("decoder aborted after an earlier error; reset before reuse")]
    Aborted,
}

impl DecodeError {
    /// Stable label describing the error kind, suitable for metrics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::TruncatedHeader { .. } => "truncated_header",
            Self::TruncatedUid { .. } => "truncated_uid",
            Self::TruncatedPayload { .. } => "truncated_payload",
            Self::UnfinishedRecord { .. } => "unfinished_record",
            Self::InvalidLength { .. } => "invalid_length",
            Self::InvalidText { .. } => "invalid_text",
            Self::UnexpectedDataAfterFinish { .. } => "unexpected_data_after_finish",
            Self::Aborted => "aborted",
        }
    }
}

/// Errors produced while encoding a notification.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// A field does not fit in a 16-bit attribute length.
    #[error("{field} is {len} bytes; attributes hold at most 65535 bytes")]
    FieldTooLong {
        /// Field that overflowed.
        field: Field,
        /// Encoded length of the field.
        len: usize,
    },
}

/// Errors surfaced by [`NotificationCodec`](crate::codec::NotificationCodec).
#[derive(Debug, Error)]
pub enum CodecError {
    /// The underlying reader failed.
    #[error("transport error: {0}")]
    Io(#[from] io::Error),
    /// The byte stream did not hold a valid notification.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}
