//! Field progression of a notification being decoded.

use std::fmt;

use crate::record::Field;

/// Position of the decoder within one notification.
///
/// States are ordered: the decoder only ever moves to a later variant and
/// [`ProcessingState::Finished`] is terminal until the decoder is reset.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ProcessingState {
    /// Waiting for the command tag and notification identifier.
    #[default]
    Init,
    /// Reading the application identifier.
    AppId,
    /// Reading the title.
    Title,
    /// Reading the body.
    Message,
    /// Reading the positive action label.
    PositiveAction,
    /// Reading the negative action label.
    NegativeAction,
    /// All five attributes have been decoded.
    Finished,
}

impl ProcessingState {
    /// Field whose payload is read in this state, if any.
    #[must_use]
    pub const fn field(self) -> Option<Field> {
        match self {
            Self::AppId => Some(Field::AppId),
            Self::Title => Some(Field::Title),
            Self::Message => Some(Field::Message),
            Self::PositiveAction => Some(Field::PositiveAction),
            Self::NegativeAction => Some(Field::NegativeAction),
            Self::Init | Self::Finished => None,
        }
    }

    /// The state that follows this one. `Finished` maps to itself.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Init => Self::AppId,
            Self::AppId => Self::Title,
            Self::Title => Self::Message,
            Self::Message => Self::PositiveAction,
            Self::PositiveAction => Self::NegativeAction,
            Self::NegativeAction | Self::Finished => Self::Finished,
        }
    }

    /// Whether the record is complete.
    #[must_use]
    pub const fn is_finished(self) -> bool { matches!(self, Self::Finished) }
}

impl fmt::Display for ProcessingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field() {
            Some(field) => fmt::Display::fmt(&field, f),
            None if self.is_finished() => f.write_str("finished"),
            None => f.write_str("init"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn states_advance_strictly_forward() {
        let mut state = ProcessingState::Init;
        let mut fields = Vec::new();
        while !state.is_finished() {
            let next = state.next();
            assert!(next > state, "{next:?} should follow {state:?}");
            fields.extend(next.field());
            state = next;
        }
        assert_eq!(fields, Field::ALL);
        assert_eq!(state.next(), ProcessingState::Finished);
    }

    #[test]
    fn display_uses_field_names() {
        assert_eq!(ProcessingState::Init.to_string(), "init");
        assert_eq!(ProcessingState::PositiveAction.to_string(), "positive_action");
        assert_eq!(ProcessingState::Finished.to_string(), "finished");
    }
}
