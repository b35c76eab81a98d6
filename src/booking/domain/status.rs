//! Submission status shown by the booking form.

use serde::{Deserialize, Serialize};

/// Tri-state status of the most recent submission attempt.
///
/// Validation failures do not change the status; only the hand-off outcome
/// does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    /// Nothing has been delivered yet, or a new attempt is underway.
    #[default]
    Idle,
    /// The last request was handed off.
    Success,
    /// The hand-off of the last request failed; the form may retry.
    Error,
}

impl SubmissionStatus {
    /// Returns the canonical representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}
