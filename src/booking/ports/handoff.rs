//! Port for handing a composed booking to an external channel.
//!
//! The channel may be a mail client launched through a `mailto:` link or a
//! booking intake endpoint; the core never performs the delivery itself.

use crate::booking::domain::{OutboundMessage, SubmissionId};
use async_trait::async_trait;
use thiserror::Error;

/// Result type for hand-off operations.
pub type HandoffResult<T> = Result<T, HandoffError>;

/// Confirmation that a channel accepted a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandoffReceipt {
    /// Correlation identifier of the submission.
    pub submission_id: SubmissionId,
    /// Name of the channel that accepted the message.
    pub channel: String,
    /// Channel-specific reference, such as the `mailto:` URI to open.
    pub reference: Option<String>,
}

impl HandoffReceipt {
    /// Creates a receipt without a channel reference.
    #[must_use]
    pub fn new(submission_id: SubmissionId, channel: impl Into<String>) -> Self {
        Self {
            submission_id,
            channel: channel.into(),
            reference: None,
        }
    }

    /// Attaches a channel reference.
    #[must_use]
    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }
}

/// Port for delivering composed booking messages.
#[async_trait]
pub trait SubmissionHandoff: Send + Sync {
    /// Hands a message to the external channel.
    ///
    /// # Errors
    ///
    /// Returns [`HandoffError`] when the channel cannot accept the message.
    async fn hand_off(
        &self,
        submission_id: SubmissionId,
        message: &OutboundMessage,
    ) -> HandoffResult<HandoffReceipt>;
}

/// Errors raised by a hand-off channel.
///
/// The form does not distinguish between variants; all of them surface as
/// the `error` status with a retry affordance.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HandoffError {
    /// The channel could not be reached.
    #[error("hand-off channel unavailable: {0}")]
    Unavailable(String),

    /// The channel refused the message.
    #[error("hand-off rejected: {0}")]
    Rejected(String),

    /// The channel did not answer in time.
    #[error("hand-off timed out")]
    TimedOut,
}

impl HandoffError {
    /// Creates an unavailable error.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }

    /// Creates a rejected error.
    #[must_use]
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }
}
