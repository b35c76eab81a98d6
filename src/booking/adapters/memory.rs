//! In-memory implementation of the `SubmissionHandoff` port.
//!
//! Provides a simple, thread-safe outbox for unit testing and previews
//! without a mail client.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::booking::{
    domain::{OutboundMessage, SubmissionId},
    ports::handoff::{HandoffError, HandoffReceipt, HandoffResult, SubmissionHandoff},
};

/// Channel name reported in receipts.
pub const OUTBOX_CHANNEL: &str = "outbox";

/// In-memory implementation of [`SubmissionHandoff`].
///
/// Thread-safe via internal [`RwLock`]. Clones share the same outbox.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOutbox {
    store: Arc<RwLock<OutboxStore>>,
}

#[derive(Debug, Default)]
struct OutboxStore {
    delivered: Vec<(SubmissionId, OutboundMessage)>,
    failure: Option<HandoffError>,
}

impl InMemoryOutbox {
    /// Creates an empty outbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following hand-off fail with `error`.
    pub fn fail_with(&self, error: HandoffError) {
        if let Ok(mut guard) = self.store.write() {
            guard.failure = Some(error);
        }
    }

    /// Lets following hand-offs succeed again.
    pub fn recover(&self) {
        if let Ok(mut guard) = self.store.write() {
            guard.failure = None;
        }
    }

    /// Returns the delivered messages in delivery order.
    #[must_use]
    pub fn delivered(&self) -> Vec<OutboundMessage> {
        self.store
            .read()
            .map(|guard| {
                guard
                    .delivered
                    .iter()
                    .map(|(_, message)| message.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns the number of delivered messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store
            .read()
            .map(|guard| guard.delivered.len())
            .unwrap_or(0)
    }

    /// Returns `true` if nothing has been delivered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SubmissionHandoff for InMemoryOutbox {
    async fn hand_off(
        &self,
        submission_id: SubmissionId,
        message: &OutboundMessage,
    ) -> HandoffResult<HandoffReceipt> {
        let mut guard = self
            .store
            .write()
            .map_err(|e| HandoffError::unavailable(e.to_string()))?;
        if let Some(error) = guard.failure.clone() {
            return Err(error);
        }
        guard.delivered.push((submission_id, message.clone()));
        Ok(HandoffReceipt::new(submission_id, OUTBOX_CHANNEL))
    }
}
