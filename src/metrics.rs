//! Metric helpers for notification decoding.
//!
//! This module defines metric names and simple helper functions wrapping the
//! [`metrics`](https://docs.rs/metrics) crate. Without the `metrics` feature
//! the helpers compile to no-ops.

#[cfg(feature = "metrics")]
use metrics::counter;

use crate::error::DecodeError;

/// Name of the counter tracking packets fed to decoders.
pub const PACKETS_INGESTED: &str = "notify_packets_ingested_total";
/// Name of the counter tracking completed notifications.
pub const RECORDS_DECODED: &str = "notify_records_decoded_total";
/// Name of the counter tracking decode failures, labelled by `kind`.
pub const DECODE_ERRORS: &str = "notify_decode_errors_total";

/// Record a packet handed to a decoder.
pub fn inc_packets() {
    #[cfg(feature = "metrics")]
    counter!(PACKETS_INGESTED).increment(1);
}

/// Record a completed notification.
pub fn inc_records() {
    #[cfg(feature = "metrics")]
    counter!(RECORDS_DECODED).increment(1);
}

/// Record a decode failure.
pub fn inc_errors(error: &DecodeError) {
    #[cfg(feature = "metrics")]
    counter!(DECODE_ERRORS, "kind" => error.kind()).increment(1);
    #[cfg(not(feature = "metrics"))]
    let _ = error;
}
