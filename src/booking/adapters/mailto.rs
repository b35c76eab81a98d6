//! `mailto:` hand-off.

use async_trait::async_trait;

use crate::booking::{
    domain::{OutboundMessage, SubmissionId},
    ports::handoff::{HandoffError, HandoffReceipt, HandoffResult, SubmissionHandoff},
};

/// Channel name reported in receipts.
pub const MAILTO_CHANNEL: &str = "mailto";

/// Hands a message to the visitor's mail client through a `mailto:` URI.
///
/// The adapter only builds the URI; the receipt's `reference` carries it to
/// the page, which opens it.
#[derive(Debug, Clone, Default)]
pub struct MailtoHandoff {
    max_uri_len: Option<usize>,
}

impl MailtoHandoff {
    /// Creates an adapter without a URI length limit.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_uri_len: None }
    }

    /// Rejects URIs longer than `max_uri_len` bytes.
    ///
    /// Some mail clients truncate long links silently; rejecting lets the
    /// page show the error status instead.
    #[must_use]
    pub const fn with_max_uri_len(mut self, max_uri_len: usize) -> Self {
        self.max_uri_len = Some(max_uri_len);
        self
    }
}

#[async_trait]
impl SubmissionHandoff for MailtoHandoff {
    async fn hand_off(
        &self,
        submission_id: SubmissionId,
        message: &OutboundMessage,
    ) -> HandoffResult<HandoffReceipt> {
        if message.recipient.trim().is_empty() {
            return Err(HandoffError::rejected("message has no recipient"));
        }
        let uri = message.mailto_uri();
        if let Some(limit) = self.max_uri_len
            && uri.len() > limit
        {
            return Err(HandoffError::rejected(format!(
                "mailto link of {} bytes exceeds limit of {limit}",
                uri.len()
            )));
        }
        Ok(HandoffReceipt::new(submission_id, MAILTO_CHANNEL).with_reference(uri))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> OutboundMessage {
        OutboundMessage::new("office@example.ro", "Programare - Vulcanizare", "Nume: Ana")
    }

    #[tokio::test]
    async fn receipt_carries_the_mailto_uri() {
        let id = SubmissionId::new();
        let receipt = MailtoHandoff::new()
            .hand_off(id, &message())
            .await
            .expect("hand-off succeeds");
        assert_eq!(receipt.submission_id, id);
        assert_eq!(receipt.channel, MAILTO_CHANNEL);
        assert_eq!(
            receipt.reference.as_deref(),
            Some("mailto:office@example.ro?subject=Programare%20-%20Vulcanizare&body=Nume%3A%20Ana")
        );
    }

    #[tokio::test]
    async fn rejects_links_over_the_limit() {
        let result = MailtoHandoff::new()
            .with_max_uri_len(20)
            .hand_off(SubmissionId::new(), &message())
            .await;
        assert!(matches!(result, Err(HandoffError::Rejected(_))));
    }

    #[tokio::test]
    async fn rejects_messages_without_recipient() {
        let mut blank = message();
        blank.recipient = " ".to_owned();
        let result = MailtoHandoff::new()
            .hand_off(SubmissionId::new(), &blank)
            .await;
        assert!(matches!(result, Err(HandoffError::Rejected(_))));
    }
}
