//! Shared helpers for integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::sync::{Mutex, MutexGuard, OnceLock};

use bytes::Bytes;
use logtest::Logger;
use notify_reassembly::{Field, NotificationRecord, NotificationUid, encoder::encode_record};
use rstest::fixture;

/// Handle to the global logger with exclusive access.
///
/// Serialises access to a [`logtest::Logger`] so tests in one binary do not
/// consume each other's captured records.
pub struct LoggerHandle {
    guard: MutexGuard<'static, Logger>,
}

impl LoggerHandle {
    /// Acquire the global [`Logger`] instance, discarding stale records.
    pub fn new() -> Self {
        static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

        let logger = LOGGER.get_or_init(|| Mutex::new(Logger::start()));
        let mut guard = logger.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        while guard.pop().is_some() {}

        Self { guard }
    }

    /// Drain captured messages at or above `level`.
    pub fn messages(&mut self, level: log::Level) -> Vec<String> {
        let mut messages = Vec::new();
        while let Some(record) = self.guard.pop() {
            if record.level() <= level {
                messages.push(record.args().to_owned());
            }
        }
        messages
    }
}

#[allow(
    unused_braces,
    reason = "rustc false positive for single line rstest fixtures"
)]
#[fixture]
pub fn logger() -> LoggerHandle { LoggerHandle::new() }

/// Record with five short ASCII fields.
pub fn sample_record() -> NotificationRecord {
    NotificationRecord::new(NotificationUid([0x01, 0x02, 0x03, 0x04]))
        .with_field(Field::AppId, "com.a")
        .with_field(Field::Title, "Hi")
        .with_field(Field::Message, "Yo")
        .with_field(Field::PositiveAction, "OK")
        .with_field(Field::NegativeAction, "No")
}

/// Build a complete record from five field values.
pub fn record_with(uid: [u8; 4], values: [&str; 5]) -> NotificationRecord {
    Field::ALL
        .into_iter()
        .zip(values)
        .fold(NotificationRecord::new(NotificationUid(uid)), |record, (field, value)| {
            record.with_field(field, value)
        })
}

/// Encode `record` behind the `0x00` command tag.
pub fn encode(record: &NotificationRecord) -> Bytes {
    encode_record(0x00, record).expect("test record fits attribute limits")
}

/// Split `bytes` into chunks whose sizes cycle through `sizes`.
pub fn chunk_by_sizes(bytes: &[u8], sizes: &[usize]) -> Vec<Vec<u8>> {
    let mut chunks = Vec::new();
    let mut rest = bytes;
    let mut cycle = sizes.iter().copied().filter(|size| *size > 0).cycle();
    while !rest.is_empty() {
        let size = cycle.next().unwrap_or(rest.len()).min(rest.len());
        let (head, tail) = rest.split_at(size);
        chunks.push(head.to_vec());
        rest = tail;
    }
    chunks
}
