//! Static site data consumed by the booking core.
//!
//! The services catalog and the contact record are maintained outside the
//! code and loaded from JSON through [`SiteConfig`].

mod catalog;
mod config;
mod contact;

pub use catalog::{ServiceCatalog, ServiceEntry, ServiceIcon};
pub use config::{SiteConfig, SiteConfigError};
pub use contact::ContactInfo;
