//! Loading of the site data file.

use super::{ContactInfo, ServiceCatalog};
use crate::booking::validation::rules::is_valid_email;
use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

const BUNDLED_SITE_JSON: &str = include_str!("../../config/site.json");

/// Errors raised while loading site data.
#[derive(Debug, Clone, Error)]
pub enum SiteConfigError {
    /// The file could not be read.
    #[error("failed to read site config {path}: {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying I/O failure.
        source: Arc<std::io::Error>,
    },

    /// The JSON document is malformed.
    #[error("failed to parse site config: {0}")]
    Parse(String),

    /// Two services share a slug.
    #[error("duplicate service id: {0}")]
    DuplicateServiceId(String),

    /// The contact email cannot receive booking requests.
    #[error("invalid contact email: {0}")]
    InvalidContactEmail(String),
}

/// Contact record and services catalog of the site.
///
/// The JSON document uses the keys of the site's constants module:
///
/// ```json
/// {
///   "contact": { "phone": "...", "email": "...", "address": "...", "googleMapsEmbed": "..." },
///   "services": [{ "id": "...", "title": "...", "description": "...",
///                  "features": ["..."], "price": "...", "icon": "tire" }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    contact: ContactInfo,
    services: ServiceCatalog,
}

impl SiteConfig {
    /// Creates a configuration from already loaded parts.
    ///
    /// # Errors
    ///
    /// Returns [`SiteConfigError`] when service ids repeat or the contact
    /// email is malformed.
    pub fn new(contact: ContactInfo, services: ServiceCatalog) -> Result<Self, SiteConfigError> {
        let config = Self { contact, services };
        config.check()?;
        Ok(config)
    }

    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SiteConfigError::Parse`] for malformed JSON and the
    /// consistency errors of [`SiteConfig::new`].
    pub fn from_json_str(json: &str) -> Result<Self, SiteConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| SiteConfigError::Parse(err.to_string()))?;
        config.check()?;
        debug!(
            services = config.services.len(),
            "loaded site configuration"
        );
        Ok(config)
    }

    /// Reads a configuration file relative to a directory.
    ///
    /// The directory is opened with ambient authority; the file is then
    /// resolved beneath it, so `file` cannot escape `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteConfigError::Io`] when the directory or file cannot be
    /// read, and the errors of [`SiteConfig::from_json_str`].
    pub fn from_dir(dir: &Utf8Path, file: &Utf8Path) -> Result<Self, SiteConfigError> {
        let io_error = |source: std::io::Error| SiteConfigError::Io {
            path: dir.join(file).into_string(),
            source: Arc::new(source),
        };
        let handle = Dir::open_ambient_dir(dir, ambient_authority()).map_err(io_error)?;
        let json = handle.read_to_string(file).map_err(io_error)?;
        Self::from_json_str(&json)
    }

    /// Returns the configuration shipped with the crate.
    ///
    /// # Errors
    ///
    /// Returns [`SiteConfigError`] if the bundled file is inconsistent.
    pub fn bundled() -> Result<Self, SiteConfigError> {
        Self::from_json_str(BUNDLED_SITE_JSON)
    }

    /// Returns the contact record.
    #[must_use]
    pub const fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    /// Returns the services catalog.
    #[must_use]
    pub const fn catalog(&self) -> &ServiceCatalog {
        &self.services
    }

    /// Splits the configuration into its parts.
    #[must_use]
    pub fn into_parts(self) -> (ContactInfo, ServiceCatalog) {
        (self.contact, self.services)
    }

    fn check(&self) -> Result<(), SiteConfigError> {
        if !is_valid_email(&self.contact.email) {
            return Err(SiteConfigError::InvalidContactEmail(
                self.contact.email.clone(),
            ));
        }
        let mut seen = HashSet::new();
        for entry in self.services.entries() {
            if !seen.insert(entry.id.as_str()) {
                return Err(SiteConfigError::DuplicateServiceId(entry.id.clone()));
            }
        }
        Ok(())
    }
}
