//! Transient status message shown after the contact form.
//!
//! DESIGN
//! ======
//! At most one message exists; showing a new one evicts the old one outright.
//! Each message walks `FadingIn -> Visible -> FadingOut` and is then removed.
//! Every message gets a fresh id and [`FeedbackState::advance`] ignores ids
//! that are no longer current, so a late timer from an evicted message can
//! never move the newer one along.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

/// Delay between insertion and the fade-in style change, long enough for the
/// CSS transition to observe the starting state.
pub const FADE_IN_DELAY_MS: u32 = 10;
/// Time from insertion until the fade-out starts.
pub const DISPLAY_MS: u32 = 5000;
/// Fade-out transition length; the element is removed when it ends.
pub const FADE_OUT_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    /// Modifier class next to `form-message`.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Font Awesome glyph prefixed to the message text.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Success => "fa-solid fa-circle-check",
            Self::Error => "fa-solid fa-circle-exclamation",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessagePhase {
    /// Inserted with its starting (transparent, offset) style.
    FadingIn,
    Visible,
    FadingOut,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackMessage {
    pub id: u64,
    pub text: String,
    pub kind: FeedbackKind,
    pub phase: MessagePhase,
}

impl FeedbackMessage {
    /// Inline style for the current phase.
    #[must_use]
    pub fn style(&self) -> &'static str {
        match self.phase {
            MessagePhase::Visible => "opacity: 1; transform: translateY(0)",
            MessagePhase::FadingIn | MessagePhase::FadingOut => "opacity: 0; transform: translateY(-10px)",
        }
    }

    /// Delay before this message should advance out of its current phase.
    #[must_use]
    pub fn phase_delay_ms(&self) -> u32 {
        match self.phase {
            MessagePhase::FadingIn => FADE_IN_DELAY_MS,
            MessagePhase::Visible => DISPLAY_MS - FADE_IN_DELAY_MS,
            MessagePhase::FadingOut => FADE_OUT_MS,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FeedbackState {
    current: Option<FeedbackMessage>,
    last_id: u64,
}

impl FeedbackState {
    /// Replace any live message with a new one and return its id.
    pub fn show(&mut self, text: impl Into<String>, kind: FeedbackKind) -> u64 {
        self.last_id += 1;
        let message = FeedbackMessage { id: self.last_id, text: text.into(), kind, phase: MessagePhase::FadingIn };
        log::debug!("feedback #{} ({}): {}", message.id, kind.class(), message.text);
        self.current = Some(message);
        self.last_id
    }

    #[must_use]
    pub fn current(&self) -> Option<&FeedbackMessage> {
        self.current.as_ref()
    }

    /// Move message `id` to its next phase, removing it after the fade-out.
    ///
    /// Returns `false` when `id` is not the live message.
    pub fn advance(&mut self, id: u64) -> bool {
        let Some(message) = self.current.as_mut().filter(|m| m.id == id) else {
            return false;
        };
        let phase = message.phase;
        match phase {
            MessagePhase::FadingIn => message.phase = MessagePhase::Visible,
            MessagePhase::Visible => message.phase = MessagePhase::FadingOut,
            MessagePhase::FadingOut => self.current = None,
        }
        true
    }
}
