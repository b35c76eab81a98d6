//! Hand-off decorator adding a fixed latency.

use std::time::Duration;

use async_trait::async_trait;

use crate::booking::{
    domain::{OutboundMessage, SubmissionId},
    ports::handoff::{HandoffReceipt, HandoffResult, SubmissionHandoff},
};

/// Delays every hand-off of the wrapped adapter.
///
/// Stands in for the round trip of a booking endpoint while the site still
/// delivers through `mailto:`, so the page's pending state stays visible.
#[derive(Debug, Clone)]
pub struct DelayedHandoff<H> {
    inner: H,
    delay: Duration,
}

impl<H> DelayedHandoff<H>
where
    H: SubmissionHandoff,
{
    /// Wraps `inner`, sleeping `delay` before each hand-off.
    #[must_use]
    pub const fn new(inner: H, delay: Duration) -> Self {
        Self { inner, delay }
    }

    /// Returns the wrapped adapter.
    #[must_use]
    pub const fn inner(&self) -> &H {
        &self.inner
    }
}

#[async_trait]
impl<H> SubmissionHandoff for DelayedHandoff<H>
where
    H: SubmissionHandoff,
{
    async fn hand_off(
        &self,
        submission_id: SubmissionId,
        message: &OutboundMessage,
    ) -> HandoffResult<HandoffReceipt> {
        tokio::time::sleep(self.delay).await;
        self.inner.hand_off(submission_id, message).await
    }
}
