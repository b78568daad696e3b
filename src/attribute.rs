//! Attribute header parsing.
//!
//! Each attribute starts with a 3-byte header: one tag byte followed by the
//! payload length as a little-endian `u16`. The decoder assigns attributes to
//! fields by their position in the stream, so the tag is carried through for
//! diagnostics only.

use crate::{
    byte_order::{read_le_u16, write_le_u16},
    error::DecodeError,
    record::Field,
};

/// Size of an attribute header in bytes.
pub const ATTRIBUTE_HEADER_LEN: usize = 3;

/// Attribute tags written by [`encode_record`](crate::encoder::encode_record).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum AttributeId {
    /// Application identifier.
    AppIdentifier = 0,
    /// Notification title.
    Title = 1,
    /// Notification body.
    Message = 3,
    /// Positive action label.
    PositiveActionLabel = 6,
    /// Negative action label.
    NegativeActionLabel = 7,
}

impl AttributeId {
    /// The wire tag byte.
    #[must_use]
    pub const fn tag(self) -> u8 { self as u8 }
}

impl From<Field> for AttributeId {
    fn from(field: Field) -> Self {
        match field {
            Field::AppId => Self::AppIdentifier,
            Field::Title => Self::Title,
            Field::Message => Self::Message,
            Field::PositiveAction => Self::PositiveActionLabel,
            Field::NegativeAction => Self::NegativeActionLabel,
        }
    }
}

/// Parsed attribute header.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AttributeHeader {
    tag: u8,
    len: u16,
}

impl AttributeHeader {
    /// Raw tag byte. Not interpreted by the decoder.
    #[must_use]
    pub const fn tag(&self) -> u8 { self.tag }

    /// Declared payload length in bytes.
    #[must_use]
    pub const fn len(&self) -> u16 { self.len }

    /// Whether the attribute carries an empty payload.
    #[must_use]
    pub const fn is_empty(&self) -> bool { self.len == 0 }
}

/// Read the attribute header that starts at `offset`.
///
/// # Errors
///
/// Returns [`DecodeError::TruncatedHeader`] when fewer than three bytes are
/// available from `offset`.
///
/// # Examples
///
/// ```
/// use notify_reassembly::attribute::read_attribute_header;
///
/// let header = read_attribute_header(&[0xff, 0x01, 0x05, 0x00], 1).expect("complete header");
/// assert_eq!(header.tag(), 0x01);
/// assert_eq!(header.len(), 5);
/// ```
pub fn read_attribute_header(bytes: &[u8], offset: usize) -> Result<AttributeHeader, DecodeError> {
    match bytes.get(offset..) {
        Some([tag, lo, hi, ..]) => Ok(AttributeHeader {
            tag: *tag,
            len: read_le_u16([*lo, *hi]),
        }),
        Some(rest) => Err(DecodeError::TruncatedHeader {
            available: rest.len(),
        }),
        None => Err(DecodeError::TruncatedHeader { available: 0 }),
    }
}

/// Read only the declared payload length of the attribute at `offset`.
///
/// # Errors
///
/// Returns [`DecodeError::TruncatedHeader`] when fewer than three bytes are
/// available from `offset`.
pub fn read_attribute_len(bytes: &[u8], offset: usize) -> Result<u16, DecodeError> {
    read_attribute_header(bytes, offset).map(|header| header.len())
}

/// Encode an attribute header.
///
/// # Examples
///
/// ```
/// use notify_reassembly::attribute::write_attribute_header;
///
/// assert_eq!(write_attribute_header(0x03, 0x0102), [0x03, 0x02, 0x01]);
/// ```
#[must_use]
pub fn write_attribute_header(tag: u8, len: u16) -> [u8; ATTRIBUTE_HEADER_LEN] {
    let [lo, hi] = write_le_u16(len);
    [tag, lo, hi]
}
