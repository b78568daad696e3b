//! Notification record model.
//!
//! A [`NotificationRecord`] is the decode target of
//! [`NotificationDecoder`](crate::NotificationDecoder): a 4-byte identifier plus
//! five text attributes that arrive in a fixed order.

use std::fmt;

use crate::byte_order::{read_le_u32, write_le_u32};

/// Opaque 4-byte identifier of a notification.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NotificationUid(pub [u8; 4]);

impl NotificationUid {
    /// Borrow the raw identifier bytes as delivered on the wire.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 4] { &self.0 }

    /// Interpret the identifier as a little-endian `u32`.
    ///
    /// # Examples
    ///
    /// ```
    /// use notify_reassembly::NotificationUid;
    ///
    /// let uid = NotificationUid([0x01, 0x02, 0x03, 0x04]);
    /// assert_eq!(uid.to_u32(), 0x0403_0201);
    /// ```
    #[must_use]
    pub fn to_u32(self) -> u32 { read_le_u32(self.0) }
}

impl From<[u8; 4]> for NotificationUid {
    fn from(value: [u8; 4]) -> Self { Self(value) }
}

impl From<NotificationUid> for [u8; 4] {
    fn from(value: NotificationUid) -> Self { value.0 }
}

impl From<u32> for NotificationUid {
    fn from(value: u32) -> Self { Self(write_le_u32(value)) }
}

impl fmt::Display for NotificationUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// The five text attributes of a notification, in wire order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Field {
    /// Identifier of the application that raised the notification.
    AppId,
    /// Notification title.
    Title,
    /// Notification body.
    Message,
    /// Label of the positive action.
    PositiveAction,
    /// Label of the negative action.
    NegativeAction,
}

impl Field {
    /// All fields in the order they are transmitted.
    pub const ALL: [Field; 5] = [
        Field::AppId,
        Field::Title,
        Field::Message,
        Field::PositiveAction,
        Field::NegativeAction,
    ];

    /// Stable lowercase name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::AppId => "app_id",
            Field::Title => "title",
            Field::Message => "message",
            Field::PositiveAction => "positive_action",
            Field::NegativeAction => "negative_action",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// A decoded (or partially decoded) notification.
///
/// Every field is `None` until the decoder has seen all of its bytes.
///
/// # Examples
///
/// ```
/// use notify_reassembly::{Field, NotificationRecord, NotificationUid};
///
/// let record = NotificationRecord::new(NotificationUid([1, 2, 3, 4]))
///     .with_field(Field::AppId, "com.example")
///     .with_field(Field::Title, "Hello");
/// assert_eq!(record.app_id(), Some("com.example"));
/// assert_eq!(record.message(), None);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NotificationRecord {
    uid: Option<NotificationUid>,
    app_id: Option<String>,
    title: Option<String>,
    message: Option<String>,
    positive_action: Option<String>,
    negative_action: Option<String>,
}

impl NotificationRecord {
    /// Create a record carrying only its identifier.
    #[must_use]
    pub fn new(uid: NotificationUid) -> Self {
        Self {
            uid: Some(uid),
            ..Self::default()
        }
    }

    /// Builder-style setter for one text field.
    #[must_use]
    pub fn with_field(mut self, field: Field, value: impl Into<String>) -> Self {
        *self.slot_mut(field) = Some(value.into());
        self
    }

    /// Notification identifier, once the preamble has been read.
    #[must_use]
    pub const fn uid(&self) -> Option<NotificationUid> { self.uid }

    /// Application identifier.
    #[must_use]
    pub fn app_id(&self) -> Option<&str> { self.app_id.as_deref() }

    /// Title text.
    #[must_use]
    pub fn title(&self) -> Option<&str> { self.title.as_deref() }

    /// Body text.
    #[must_use]
    pub fn message(&self) -> Option<&str> { self.message.as_deref() }

    /// Positive action label.
    #[must_use]
    pub fn positive_action(&self) -> Option<&str> { self.positive_action.as_deref() }

    /// Negative action label.
    #[must_use]
    pub fn negative_action(&self) -> Option<&str> { self.negative_action.as_deref() }

    /// Look up a text field by name.
    #[must_use]
    pub fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::AppId => self.app_id(),
            Field::Title => self.title(),
            Field::Message => self.message(),
            Field::PositiveAction => self.positive_action(),
            Field::NegativeAction => self.negative_action(),
        }
    }

    /// Whether the identifier and all five text fields are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.uid.is_some() && Field::ALL.iter().all(|field| self.field(*field).is_some())
    }

    pub(crate) fn set_uid(&mut self, uid: NotificationUid) { self.uid = Some(uid); }

    pub(crate) fn assign(&mut self, field: Field, value: String) {
        let slot = self.slot_mut(field);
        debug_assert!(slot.is_none(), "{field} assigned twice");
        *slot = Some(value);
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::AppId => &mut self.app_id,
            Field::Title => &mut self.title,
            Field::Message => &mut self.message,
            Field::PositiveAction => &mut self.positive_action,
            Field::NegativeAction => &mut self.negative_action,
        }
    }
}
