#![doc(html_root_url = "https://docs.rs/notify-reassembly/latest")]
//! Public API for the `notify_reassembly` library.
//!
//! Notifications relayed over a constrained-MTU wireless link arrive as a
//! command tag, a 4-byte identifier and five length-prefixed text attributes,
//! cut into packets of arbitrary size. [`NotificationDecoder`] reassembles
//! those packets into a [`NotificationRecord`] no matter where the cuts fall.

pub mod accumulator;
pub mod attribute;
pub mod byte_order;
pub mod codec;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod metrics;
pub mod record;
pub mod state;

pub use accumulator::FieldAccumulator;
pub use attribute::{AttributeHeader, AttributeId};
pub use codec::NotificationCodec;
pub use config::DecoderConfig;
pub use decoder::NotificationDecoder;
pub use error::{CodecError, DecodeError, EncodeError, IngestStatus};
pub use record::{Field, NotificationRecord, NotificationUid};
pub use state::ProcessingState;
