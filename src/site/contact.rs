//! Business contact details.

use serde::{Deserialize, Serialize};

/// Contact record of the business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    /// Phone number as displayed on the site.
    pub phone: String,
    /// Address that receives booking requests.
    pub email: String,
    /// Street address.
    pub address: String,
    /// Embed URL of the map shown on the booking page.
    #[serde(default)]
    pub google_maps_embed: String,
}

impl ContactInfo {
    /// Returns a `tel:` URI for the phone number.
    ///
    /// # Examples
    ///
    /// ```
    /// use autoexpert::site::ContactInfo;
    ///
    /// let contact = ContactInfo {
    ///     phone: "0735 538 668".to_owned(),
    ///     email: "office@example.ro".to_owned(),
    ///     address: "Prelungirea Ghencea, București".to_owned(),
    ///     google_maps_embed: String::new(),
    /// };
    /// assert_eq!(contact.tel_uri(), "tel:0735538668");
    /// ```
    #[must_use]
    pub fn tel_uri(&self) -> String {
        let digits: String = self.phone.split_whitespace().collect();
        format!("tel:{digits}")
    }

    /// Returns a `mailto:` URI without subject or body.
    #[must_use]
    pub fn mailto_uri(&self) -> String {
        format!("mailto:{}", self.email)
    }
}
