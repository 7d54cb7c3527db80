//! Contact form fields and submit lifecycle.
//!
//! DESIGN
//! ======
//! `Idle -> Validating -> (Error | Sending -> (Success | Error))`. The submit
//! control's disabled flag, `loading` class and label are all derived from
//! the phase: only `Sending` shows them, so leaving `Sending` by either
//! branch restores the control without a separate cleanup step. `Success`
//! and `Error` are resting phases; the control is idle in both.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::email::{SendError, SendReceipt};
use crate::state::feedback::FeedbackKind;
use crate::util::validate::{Submission, ValidationError, validate};

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";
pub const SENT_MESSAGE: &str = "Message sent successfully! I will get back to you soon.";
pub const FAILED_MESSAGE: &str = "Failed to send message. Please try again later or contact me directly.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Sending,
    Success,
    Error,
}

/// What the caller should do after a submit event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitStep {
    /// A send is already in flight; the event is dropped.
    Busy,
    /// Validation failed; show the error and keep the fields.
    Rejected(ValidationError),
    /// Validation passed; deliver this submission and call
    /// [`FormState::finish`] with the outcome.
    Send(Submission),
}

#[derive(Clone, Debug, Default)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    phase: SubmitPhase,
}

impl FormState {
    #[must_use]
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.phase == SubmitPhase::Sending
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.is_sending() { SENDING_LABEL } else { SUBMIT_LABEL }
    }

    /// Validate the current field values and enter `Sending` if they pass.
    pub fn submit(&mut self) -> SubmitStep {
        if self.is_sending() {
            return SubmitStep::Busy;
        }
        self.phase = SubmitPhase::Validating;
        match validate(&self.name, &self.email, &self.subject, &self.message) {
            Ok(submission) => {
                self.phase = SubmitPhase::Sending;
                SubmitStep::Send(submission)
            }
            Err(e) => {
                log::debug!("contact form rejected: {e:?}");
                self.phase = SubmitPhase::Error;
                SubmitStep::Rejected(e)
            }
        }
    }

    /// Settle an in-flight send and return the feedback to show.
    ///
    /// Fields are cleared only on success so a failed send can be retried
    /// as-is.
    pub fn finish(&mut self, outcome: &Result<SendReceipt, SendError>) -> (FeedbackKind, &'static str) {
        match outcome {
            Ok(receipt) => {
                log::info!("email sent: {} {}", receipt.status, receipt.text);
                self.clear();
                self.phase = SubmitPhase::Success;
                (FeedbackKind::Success, SENT_MESSAGE)
            }
            Err(e) => {
                log::error!("failed to send email: {e}");
                self.phase = SubmitPhase::Error;
                (FeedbackKind::Error, FAILED_MESSAGE)
            }
        }
    }

    fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
    }
}
