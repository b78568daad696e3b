//! Stateful reassembly of notification attributes from transport packets.
//!
//! [`NotificationDecoder`] consumes the packets of one notification in
//! transmission order. Packet cuts may land anywhere: inside the command and
//! identifier preamble, inside a 3-byte attribute header, or in the middle of
//! a payload (including inside a multi-byte UTF-8 sequence). The decoder
//! keeps just enough state to resume at the next byte:
//!
//! - a preamble buffer while the identifier is incomplete;
//! - a carryover of at most two bytes when a header was cut short;
//! - a pending payload counter plus a [`FieldAccumulator`] when a payload was
//!   cut short.

use std::{borrow::Cow, mem};

use log::{debug, trace};

use crate::{
    accumulator::FieldAccumulator,
    attribute::{ATTRIBUTE_HEADER_LEN, read_attribute_header},
    config::DecoderConfig,
    error::{DecodeError, IngestStatus},
    metrics,
    record::{Field, NotificationRecord, NotificationUid},
    state::ProcessingState,
};

/// Length of the command tag plus notification identifier.
pub const PREAMBLE_LEN: usize = 5;

/// Upper bound on carried-over header bytes.
pub const MAX_CARRYOVER: usize = ATTRIBUTE_HEADER_LEN - 1;

/// Streaming decoder for a single notification.
///
/// # Examples
///
/// ```
/// use notify_reassembly::{IngestStatus, NotificationDecoder};
///
/// let mut decoder = NotificationDecoder::new();
/// let packets: [&[u8]; 3] = [
///     &[0x00, 0x01, 0x02, 0x03, 0x04, 0x00, 0x02, 0x00, b'i'],
///     &[b'd', 0x01, 0x00],
///     &[0x00, 0x03, 0x00, 0x00, 0x06, 0x00, 0x00, 0x07, 0x00, 0x00],
/// ];
///
/// assert_eq!(decoder.ingest(packets[0]), Ok(IngestStatus::Incomplete));
/// assert_eq!(decoder.ingest(packets[1]), Ok(IngestStatus::Incomplete));
/// assert_eq!(decoder.ingest(packets[2]), Ok(IngestStatus::Complete));
///
/// let record = decoder.take_record().expect("record finished");
/// assert_eq!(record.app_id(), Some("id"));
/// assert_eq!(record.title(), Some(""));
/// ```
#[derive(Debug, Default)]
pub struct NotificationDecoder {
    config: DecoderConfig,
    state: ProcessingState,
    preamble: [u8; PREAMBLE_LEN],
    preamble_len: usize,
    carryover: Vec<u8>,
    pending_payload: usize,
    declared_total: usize,
    accumulator: FieldAccumulator,
    record: NotificationRecord,
    aborted: bool,
}

impl NotificationDecoder {
    /// Create a decoder with the default [`DecoderConfig`].
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Create a decoder with explicit limits.
    #[must_use]
    pub fn with_config(config: DecoderConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &DecoderConfig { &self.config }

    /// Rearm the decoder for a new notification.
    ///
    /// Clears every piece of per-notification state, including a previous
    /// abort. Buffer allocations are kept.
    pub fn reset(&mut self) {
        self.state = ProcessingState::Init;
        self.preamble = [0; PREAMBLE_LEN];
        self.preamble_len = 0;
        self.carryover.clear();
        self.pending_payload = 0;
        self.declared_total = 0;
        self.accumulator.clear();
        self.record = NotificationRecord::default();
        self.aborted = false;
    }

    /// Feed one transport packet.
    ///
    /// Returns [`IngestStatus::Complete`] once the fifth attribute has been
    /// decoded. Empty packets are accepted and change nothing.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnexpectedDataAfterFinish`] when the packet
    /// carries bytes beyond the end of the record; the finished record stays
    /// available. Any other error aborts the notification: later calls return
    /// [`DecodeError::Aborted`] until [`reset`](Self::reset).
    pub fn ingest(&mut self, packet: impl AsRef<[u8]>) -> Result<IngestStatus, DecodeError> {
        let packet = packet.as_ref();
        let consumed = self.ingest_partial(packet)?;
        if consumed < packet.len() {
            let err = DecodeError::UnexpectedDataAfterFinish {
                extra: packet.len() - consumed,
            };
            metrics::inc_errors(&err);
            return Err(err);
        }
        Ok(self.status())
    }

    /// Feed bytes, stopping at the end of the record.
    ///
    /// Returns how many bytes of `bytes` were consumed. Fewer than
    /// `bytes.len()` are consumed only when the record finished part-way;
    /// the remainder belongs to whatever follows the notification. A
    /// finished decoder consumes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidLength`] or [`DecodeError::InvalidText`]
    /// for malformed input and [`DecodeError::Aborted`] when an earlier call
    /// failed. Failures abort the notification.
    pub fn ingest_partial(&mut self, bytes: &[u8]) -> Result<usize, DecodeError> {
        if self.aborted {
            return Err(DecodeError::Aborted);
        }
        if self.state.is_finished() || bytes.is_empty() {
            return Ok(0);
        }
        metrics::inc_packets();

        match self.process(bytes) {
            Ok(consumed) => {
                if self.state.is_finished() {
                    metrics::inc_records();
                }
                Ok(consumed)
            }
            Err(err) => {
                self.aborted = true;
                metrics::inc_errors(&err);
                Err(err)
            }
        }
    }

    /// Signal that no more packets will arrive for this notification.
    ///
    /// # Errors
    ///
    /// Diagnoses why the notification is not finished:
    /// [`DecodeError::TruncatedUid`] while the preamble is incomplete,
    /// [`DecodeError::TruncatedHeader`] when header bytes are carried over,
    /// [`DecodeError::TruncatedPayload`] when a payload is in flight and
    /// [`DecodeError::UnfinishedRecord`] when input stopped between
    /// attributes. An aborted decoder reports [`DecodeError::Aborted`].
    pub fn end_of_input(&self) -> Result<(), DecodeError> {
        if self.aborted {
            return Err(DecodeError::Aborted);
        }
        if self.state.is_finished() {
            return Ok(());
        }
        if self.state == ProcessingState::Init {
            return Err(DecodeError::TruncatedUid {
                received: self.preamble_len,
            });
        }
        if self.pending_payload > 0
            && let Some(field) = self.state.field()
        {
            return Err(DecodeError::TruncatedPayload {
                field,
                missing: self.pending_payload,
            });
        }
        if !self.carryover.is_empty() {
            return Err(DecodeError::TruncatedHeader {
                available: self.carryover.len(),
            });
        }
        Err(DecodeError::UnfinishedRecord { state: self.state })
    }

    /// Whether all five attributes have been decoded.
    #[must_use]
    pub const fn is_finished(&self) -> bool { self.state.is_finished() }

    /// Whether an earlier error aborted this notification.
    #[must_use]
    pub const fn is_aborted(&self) -> bool { self.aborted }

    /// Whether the decoder has not seen a single byte since the last reset.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self.state, ProcessingState::Init) && self.preamble_len == 0 && !self.aborted
    }

    /// Current position in the field progression.
    #[must_use]
    pub const fn state(&self) -> ProcessingState { self.state }

    /// Header bytes carried over to the next packet (at most two).
    #[must_use]
    pub fn carryover_len(&self) -> usize { self.carryover.len() }

    /// Payload bytes of the current attribute still expected.
    #[must_use]
    pub const fn pending_payload(&self) -> usize { self.pending_payload }

    /// Command tag that opened the notification, once received.
    #[must_use]
    pub fn command_tag(&self) -> Option<u8> { (self.preamble_len > 0).then_some(self.preamble[0]) }

    /// Borrow the record as decoded so far.
    #[must_use]
    pub const fn record(&self) -> &NotificationRecord { &self.record }

    /// Move the finished record out and rearm the decoder.
    ///
    /// Returns `None`, leaving the decoder untouched, while the record is
    /// unfinished.
    pub fn take_record(&mut self) -> Option<NotificationRecord> {
        if !self.state.is_finished() {
            return None;
        }
        let record = mem::take(&mut self.record);
        self.reset();
        Some(record)
    }

    /// Notification identifier.
    #[must_use]
    pub const fn uid(&self) -> Option<NotificationUid> { self.record.uid() }

    /// Application identifier.
    #[must_use]
    pub fn app_id(&self) -> Option<&str> { self.record.app_id() }

    /// Title text.
    #[must_use]
    pub fn title(&self) -> Option<&str> { self.record.title() }

    /// Body text.
    #[must_use]
    pub fn message(&self) -> Option<&str> { self.record.message() }

    /// Positive action label.
    #[must_use]
    pub fn positive_action(&self) -> Option<&str> { self.record.positive_action() }

    /// Negative action label.
    #[must_use]
    pub fn negative_action(&self) -> Option<&str> { self.record.negative_action() }

    fn status(&self) -> IngestStatus {
        if self.state.is_finished() {
            IngestStatus::Complete
        } else {
            IngestStatus::Incomplete
        }
    }

    fn process(&mut self, bytes: &[u8]) -> Result<usize, DecodeError> {
        let mut input = bytes;
        if self.state == ProcessingState::Init {
            input = self.fill_preamble(input);
            if self.state == ProcessingState::Init {
                return Ok(bytes.len());
            }
        }
        let preamble_bytes = bytes.len() - input.len();

        let carried = self.carryover.len();
        let working: Cow<'_, [u8]> = if carried == 0 {
            Cow::Borrowed(input)
        } else {
            let mut joined = mem::take(&mut self.carryover);
            joined.extend_from_slice(input);
            Cow::Owned(joined)
        };

        // carried bytes were consumed by an earlier call
        let cursor = self.drain_attributes(&working)?;
        Ok(preamble_bytes + cursor.saturating_sub(carried))
    }

    /// Copy preamble bytes, returning the unconsumed tail.
    fn fill_preamble<'a>(&mut self, input: &'a [u8]) -> &'a [u8] {
        let wanted = PREAMBLE_LEN - self.preamble_len;
        let (head, tail) = input.split_at(wanted.min(input.len()));
        self.preamble[self.preamble_len..self.preamble_len + head.len()].copy_from_slice(head);
        self.preamble_len += head.len();

        if self.preamble_len == PREAMBLE_LEN {
            let [tag, a, b, c, d] = self.preamble;
            let uid = NotificationUid([a, b, c, d]);
            debug!("notification preamble decoded: command_tag={tag:#04x}, uid={uid}");
            self.record.set_uid(uid);
            self.state = self.state.next();
        } else {
            trace!(
                "notification preamble partial: received={}, expected={PREAMBLE_LEN}",
                self.preamble_len
            );
        }
        tail
    }

    /// Walk attributes in `buf`, returning the cursor where decoding stopped.
    ///
    /// The cursor equals `buf.len()` unless the record finished early.
    fn drain_attributes(&mut self, buf: &[u8]) -> Result<usize, DecodeError> {
        let mut cursor = 0;
        while let Some(remaining) = buf.get(cursor..).filter(|rest| !rest.is_empty()) {
            let Some(field) = self.state.field() else {
                break;
            };
            if self.pending_payload > 0 {
                if remaining.len() < self.pending_payload {
                    self.accumulator.append(remaining);
                    self.pending_payload -= remaining.len();
                    trace!(
                        "payload continues: state={}, buffered={}, pending={}",
                        self.state,
                        self.accumulator.len(),
                        self.pending_payload
                    );
                    return Ok(buf.len());
                }
                let (tail, _) = remaining.split_at(self.pending_payload);
                self.accumulator.append(tail);
                cursor += self.pending_payload;
                self.pending_payload = 0;
            } else {
                if remaining.len() < ATTRIBUTE_HEADER_LEN {
                    self.carryover.extend_from_slice(remaining);
                    trace!(
                        "attribute header split: carried={}, state={}",
                        self.carryover.len(),
                        self.state
                    );
                    return Ok(buf.len());
                }
                let header = read_attribute_header(remaining, 0)?;
                let len = usize::from(header.len());
                self.reserve_declared(field, len)?;

                let (_, available) = remaining.split_at(ATTRIBUTE_HEADER_LEN);
                if available.len() < len {
                    self.accumulator.append(available);
                    self.pending_payload = len - available.len();
                    trace!(
                        "attribute payload split: state={}, tag={:#04x}, len={len}, pending={}",
                        self.state,
                        header.tag(),
                        self.pending_payload
                    );
                    return Ok(buf.len());
                }
                let (payload, _) = available.split_at(len);
                self.accumulator.append(payload);
                cursor += ATTRIBUTE_HEADER_LEN + len;
            }

            self.complete_field(field)?;
            if self.state.is_finished() {
                return Ok(cursor);
            }
        }
        Ok(cursor)
    }

    fn reserve_declared(&mut self, field: Field, len: usize) -> Result<(), DecodeError> {
        let limit = self.config.max_record_size;
        let attempted = self.declared_total.saturating_add(len);
        if attempted > limit.get() {
            return Err(DecodeError::InvalidLength {
                field,
                declared: len,
                attempted,
                limit,
            });
        }
        self.declared_total = attempted;
        Ok(())
    }

    fn complete_field(&mut self, field: Field) -> Result<(), DecodeError> {
        let text = self.accumulator.drain_text(field)?;
        debug!("notification field decoded: field={field}, bytes={}", text.len());
        self.record.assign(field, text);
        self.state = self.state.next();
        if self.state.is_finished() {
            debug!(
                "notification decoded: uid={}",
                self.record.uid().unwrap_or_default()
            );
        }
        Ok(())
    }
}
