//! Outbound message handed to the delivery channel.

use serde::{Deserialize, Serialize};

/// Composed appointment message ready for hand-off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    /// Business address receiving the request.
    pub recipient: String,
    /// Subject line naming the requested service.
    pub subject: String,
    /// Line-delimited rendering of the request.
    pub body: String,
}

impl OutboundMessage {
    /// Creates a message from its parts.
    #[must_use]
    pub fn new(
        recipient: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            recipient: recipient.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Renders the message as a `mailto:` URI.
    ///
    /// Subject and body are percent-encoded; the recipient is used verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use autoexpert::booking::domain::OutboundMessage;
    ///
    /// let message = OutboundMessage::new("office@example.ro", "Programare - ITP", "Nume: Ana\nMesaj: -");
    /// assert_eq!(
    ///     message.mailto_uri(),
    ///     "mailto:office@example.ro?subject=Programare%20-%20ITP&body=Nume%3A%20Ana%0AMesaj%3A%20-"
    /// );
    /// ```
    #[must_use]
    pub fn mailto_uri(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}
