//! Payload buffer for the attribute currently in flight.

use bytes::BytesMut;

use crate::{error::DecodeError, record::Field};

/// Growable buffer that collects one attribute's payload across packets.
///
/// Its contents are always a prefix of a single attribute payload; the
/// buffer is emptied each time that attribute completes.
#[derive(Debug, Default)]
pub struct FieldAccumulator {
    buffer: BytesMut,
}

impl FieldAccumulator {
    /// Create an empty accumulator.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Append payload bytes.
    pub fn append(&mut self, bytes: &[u8]) { self.buffer.extend_from_slice(bytes); }

    /// Number of payload bytes collected so far.
    #[must_use]
    pub fn len(&self) -> usize { self.buffer.len() }

    /// Whether no payload bytes are buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }

    /// Discard buffered bytes, keeping the allocation.
    pub fn clear(&mut self) { self.buffer.clear(); }

    /// Decode the buffered payload as UTF-8 and reset the buffer.
    ///
    /// The buffer is emptied whether or not decoding succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidText`] when the payload is not valid
    /// UTF-8.
    ///
    /// # Examples
    ///
    /// ```
    /// use notify_reassembly::{Field, FieldAccumulator};
    ///
    /// let mut acc = FieldAccumulator::new();
    /// acc.append("caf".as_bytes());
    /// acc.append("é".as_bytes());
    /// assert_eq!(acc.drain_text(Field::Title).as_deref(), Ok("café"));
    /// assert!(acc.is_empty());
    /// ```
    pub fn drain_text(&mut self, field: Field) -> Result<String, DecodeError> {
        let text = std::str::from_utf8(&self.buffer)
            .map(str::to_owned)
            .map_err(|source| DecodeError::InvalidText { field, source });
        self.buffer.clear();
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_joins_split_code_point() {
        let snowman = "☃".as_bytes();
        let mut acc = FieldAccumulator::new();
        acc.append(&snowman[..1]);
        acc.append(&snowman[1..]);
        assert_eq!(acc.len(), 3);
        assert_eq!(acc.drain_text(Field::Message).as_deref(), Ok("☃"));
    }

    #[test]
    fn drain_of_empty_buffer_yields_empty_text() {
        let mut acc = FieldAccumulator::new();
        assert_eq!(acc.drain_text(Field::AppId), Ok(String::new()));
    }

    #[test]
    fn invalid_utf8_is_reported_and_cleared() {
        let mut acc = FieldAccumulator::new();
        acc.append(&[0x66, 0xff, 0x6f]);
        let err = acc
            .drain_text(Field::NegativeAction)
            .expect_err("0xff is never valid UTF-8");
        assert!(matches!(
            err,
            DecodeError::InvalidText {
                field: Field::NegativeAction,
                ..
            }
        ));
        assert!(acc.is_empty());
    }

    #[test]
    fn clear_discards_partial_payload() {
        let mut acc = FieldAccumulator::new();
        acc.append(b"partial");
        acc.clear();
        assert!(acc.is_empty());
        assert_eq!(acc.drain_text(Field::Title), Ok(String::new()));
    }
}
