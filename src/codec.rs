//! Stream adapter for back-to-back notifications.
//!
//! [`NotificationCodec`] plugs a [`NotificationDecoder`] into
//! `tokio_util`'s framing machinery so a byte stream carrying consecutive
//! notifications (for example a serial bridge to the radio) can be read with
//! [`FramedRead`](tokio_util::codec::FramedRead). Reads may split the stream
//! anywhere; the decoder resumes where the previous read stopped.

use bytes::{Buf, BytesMut};
use log::debug;
use tokio_util::codec::Decoder;

use crate::{
    config::DecoderConfig,
    decoder::NotificationDecoder,
    error::CodecError,
    record::NotificationRecord,
};

/// `tokio_util` decoder yielding one [`NotificationRecord`] per notification.
///
/// # Examples
///
/// ```
/// use bytes::BytesMut;
/// use notify_reassembly::{
///     Field,
///     NotificationRecord,
///     NotificationUid,
///     codec::NotificationCodec,
///     encoder::encode_record,
/// };
/// use tokio_util::codec::Decoder;
///
/// let record = NotificationRecord::new(NotificationUid([1, 2, 3, 4])).with_field(Field::AppId, "a");
/// let mut src = BytesMut::from(&encode_record(0x00, &record).expect("fits")[..]);
/// let mut codec = NotificationCodec::new();
/// let decoded = codec.decode(&mut src).expect("valid").expect("complete");
/// assert_eq!(decoded.app_id(), Some("a"));
/// assert!(src.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct NotificationCodec {
    decoder: NotificationDecoder,
}

impl NotificationCodec {
    /// Create a codec with the default [`DecoderConfig`].
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Create a codec with explicit decoder limits.
    #[must_use]
    pub fn with_config(config: DecoderConfig) -> Self {
        Self {
            decoder: NotificationDecoder::with_config(config),
        }
    }

    /// Borrow the decoder holding the notification in progress.
    #[must_use]
    pub const fn decoder(&self) -> &NotificationDecoder { &self.decoder }
}

impl Decoder for NotificationCodec {
    type Item = NotificationRecord;
    type Error = CodecError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if !src.is_empty() {
            let consumed = self.decoder.ingest_partial(src)?;
            src.advance(consumed);
        }
        Ok(self.decoder.take_record())
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if let Some(record) = self.decode(src)? {
            return Ok(Some(record));
        }
        if self.decoder.is_idle() {
            return Ok(None);
        }
        debug!(
            "stream ended mid-notification: state={}",
            self.decoder.state()
        );
        self.decoder.end_of_input()?;
        Ok(None)
    }
}
