//! Outbound helpers that produce the wire format the decoder consumes.
//!
//! [`encode_record`] mirrors [`NotificationDecoder`](crate::NotificationDecoder)
//! and [`packetize`] mimics a transport splitting the encoded record at a
//! fixed MTU. Peers, tests and the command line tool share them.

use std::num::NonZeroUsize;

use bytes::{BufMut, Bytes, BytesMut};

use crate::{
    attribute::{ATTRIBUTE_HEADER_LEN, AttributeId, write_attribute_header},
    decoder::PREAMBLE_LEN,
    error::EncodeError,
    record::{Field, NotificationRecord},
};

/// Encode `record` behind `command_tag`.
///
/// Absent text fields are encoded as empty attributes and an absent
/// identifier as zero bytes.
///
/// # Errors
///
/// Returns [`EncodeError::FieldTooLong`] when a field exceeds `u16::MAX`
/// bytes.
///
/// # Examples
///
/// ```
/// use notify_reassembly::{Field, NotificationRecord, NotificationUid, encoder::encode_record};
///
/// let record = NotificationRecord::new(NotificationUid([1, 2, 3, 4])).with_field(Field::AppId, "a");
/// let bytes = encode_record(0x00, &record).expect("fits");
/// assert_eq!(&bytes[..9], &[0x00, 1, 2, 3, 4, 0x00, 0x01, 0x00, b'a']);
/// ```
pub fn encode_record(command_tag: u8, record: &NotificationRecord) -> Result<Bytes, EncodeError> {
    let payload_len: usize = Field::ALL
        .iter()
        .map(|field| record.field(*field).map_or(0, str::len))
        .sum();
    let mut out =
        BytesMut::with_capacity(PREAMBLE_LEN + Field::ALL.len() * ATTRIBUTE_HEADER_LEN + payload_len);

    out.put_u8(command_tag);
    out.put_slice(record.uid().unwrap_or_default().as_bytes());
    for field in Field::ALL {
        let text = record.field(field).unwrap_or_default();
        let len = u16::try_from(text.len()).map_err(|_| EncodeError::FieldTooLong {
            field,
            len: text.len(),
        })?;
        out.put_slice(&write_attribute_header(AttributeId::from(field).tag(), len));
        out.put_slice(text.as_bytes());
    }
    Ok(out.freeze())
}

/// Split `bytes` into packets of at most `mtu` bytes without copying.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroUsize;
///
/// use bytes::Bytes;
/// use notify_reassembly::encoder::packetize;
///
/// let mtu = NonZeroUsize::new(4).expect("non-zero");
/// let sizes: Vec<usize> = packetize(Bytes::from_static(&[0; 10]), mtu)
///     .map(|packet| packet.len())
///     .collect();
/// assert_eq!(sizes, [4, 4, 2]);
/// ```
pub fn packetize(bytes: Bytes, mtu: NonZeroUsize) -> Packets { Packets { remaining: bytes, mtu } }

/// Iterator returned by [`packetize`].
#[derive(Clone, Debug)]
pub struct Packets {
    remaining: Bytes,
    mtu: NonZeroUsize,
}

impl Iterator for Packets {
    type Item = Bytes;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }
        let take = self.mtu.get().min(self.remaining.len());
        Some(self.remaining.split_to(take))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.remaining.len().div_ceil(self.mtu.get());
        (count, Some(count))
    }
}

impl ExactSizeIterator for Packets {}
