//! Decoder configuration.

use std::num::NonZeroUsize;

/// Default cap on the total declared payload of one notification.
///
/// Five attributes of `u16::MAX` bytes each, so every well-formed record
/// fits. Lower it to bound memory on constrained hosts.
pub const DEFAULT_MAX_RECORD_SIZE: NonZeroUsize = match NonZeroUsize::new(5 * 65_535) {
    Some(size) => size,
    None => NonZeroUsize::MIN,
};

/// Settings that bound decoder resource usage.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DecoderConfig {
    /// Hard cap on the sum of declared attribute lengths for one record.
    /// Headers declaring more are rejected before any payload is buffered.
    pub max_record_size: NonZeroUsize,
}

impl DecoderConfig {
    /// Override the record size cap.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::num::NonZeroUsize;
    ///
    /// use notify_reassembly::DecoderConfig;
    ///
    /// let limit = NonZeroUsize::new(512).expect("non-zero");
    /// let config = DecoderConfig::default().with_max_record_size(limit);
    /// assert_eq!(config.max_record_size.get(), 512);
    /// ```
    #[must_use]
    pub const fn with_max_record_size(mut self, max_record_size: NonZeroUsize) -> Self {
        self.max_record_size = max_record_size;
        self
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_record_size: DEFAULT_MAX_RECORD_SIZE,
        }
    }
}
