//! Catalog of services offered by the workshop.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Icon shown next to a service.
///
/// Unknown icon keys fall back to [`ServiceIcon::Gauge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ServiceIcon {
    /// Tyre.
    Tire,
    /// Balancing gauge.
    Balance,
    /// Wrench.
    Wrench,
    /// Wheel.
    Wheel,
    /// Tow truck.
    Truck,
    /// Generic settings gauge.
    #[default]
    Gauge,
}

impl ServiceIcon {
    /// Returns the icon key used in the catalog.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tire => "tire",
            Self::Balance => "balance",
            Self::Wrench => "wrench",
            Self::Wheel => "wheel",
            Self::Truck => "truck",
            Self::Gauge => "gauge",
        }
    }

    /// Maps an icon key to an icon, falling back to the default.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "tire" => Self::Tire,
            "balance" => Self::Balance,
            "wrench" => Self::Wrench,
            "wheel" => Self::Wheel,
            "truck" => Self::Truck,
            _ => Self::Gauge,
        }
    }
}

impl From<String> for ServiceIcon {
    fn from(value: String) -> Self {
        Self::from_key(&value)
    }
}

impl fmt::Display for ServiceIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One service offered by the workshop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEntry {
    /// URL slug of the service detail page.
    pub id: String,
    /// Title, also the value submitted by the booking form.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Bullet points listed on the detail page.
    #[serde(default)]
    pub features: Vec<String>,
    /// Price as displayed, for example `de la 80 lei`.
    pub price: String,
    /// Icon key.
    #[serde(default)]
    pub icon: ServiceIcon,
}

impl ServiceEntry {
    /// Returns the label used by the booking form's service select.
    #[must_use]
    pub fn option_label(&self) -> String {
        format!("{} - {}", self.title, self.price)
    }
}

/// Ordered collection of services.
///
/// # Examples
///
/// ```
/// use autoexpert::site::SiteConfig;
///
/// let config = SiteConfig::bundled().expect("bundled config parses");
/// let catalog = config.catalog();
/// assert!(catalog.contains_title("Schimb Anvelope"));
/// let related: Vec<&str> = catalog
///     .related("schimb-anvelope", 3)
///     .map(|entry| entry.id.as_str())
///     .collect();
/// assert_eq!(related.len(), 3);
/// assert!(!related.contains(&"schimb-anvelope"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceCatalog {
    services: Vec<ServiceEntry>,
}

impl ServiceCatalog {
    /// Creates a catalog from entries in display order.
    #[must_use]
    pub const fn new(services: Vec<ServiceEntry>) -> Self {
        Self { services }
    }

    /// Returns every service in display order.
    #[must_use]
    pub fn entries(&self) -> &[ServiceEntry] {
        &self.services
    }

    /// Returns the number of services.
    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Returns `true` when the catalog has no services.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Finds a service by its slug.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&ServiceEntry> {
        self.services.iter().find(|entry| entry.id == id)
    }

    /// Finds a service by its exact title.
    #[must_use]
    pub fn find_by_title(&self, title: &str) -> Option<&ServiceEntry> {
        self.services.iter().find(|entry| entry.title == title)
    }

    /// Returns `true` when a service has the given title.
    #[must_use]
    pub fn contains_title(&self, title: &str) -> bool {
        self.find_by_title(title).is_some()
    }

    /// Iterates service titles in display order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.services.iter().map(|entry| entry.title.as_str())
    }

    /// Iterates up to `limit` services other than `id`, in display order.
    pub fn related<'a>(&'a self, id: &'a str, limit: usize) -> impl Iterator<Item = &'a ServiceEntry> {
        self.services
            .iter()
            .filter(move |entry| entry.id != id)
            .take(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn entry(id: &str, title: &str) -> ServiceEntry {
        ServiceEntry {
            id: id.to_owned(),
            title: title.to_owned(),
            description: format!("{title} description"),
            features: Vec::new(),
            price: "de la 50 lei".to_owned(),
            icon: ServiceIcon::Wrench,
        }
    }

    #[fixture]
    fn catalog() -> ServiceCatalog {
        ServiceCatalog::new(vec![
            entry("schimb-anvelope", "Schimb Anvelope"),
            entry("echilibrare", "Echilibrare"),
            entry("vulcanizare", "Vulcanizare"),
            entry("depanare", "Depanare"),
            entry("jante", "Reparații Jante"),
        ])
    }

    #[rstest]
    fn finds_services_by_id_and_title(catalog: ServiceCatalog) {
        assert_eq!(
            catalog.find_by_id("vulcanizare").map(|e| e.title.as_str()),
            Some("Vulcanizare")
        );
        assert!(catalog.find_by_id("missing").is_none());
        assert!(catalog.contains_title("Reparații Jante"));
        assert!(!catalog.contains_title("reparații jante"));
    }

    #[rstest]
    fn related_skips_current_service_and_honours_limit(catalog: ServiceCatalog) {
        let related: Vec<&str> = catalog
            .related("echilibrare", 3)
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(related, vec!["schimb-anvelope", "vulcanizare", "depanare"]);
    }

    #[rstest]
    fn related_returns_fewer_when_catalog_is_small() {
        let small = ServiceCatalog::new(vec![entry("a", "A"), entry("b", "B")]);
        assert_eq!(small.related("a", 3).count(), 1);
    }

    #[rstest]
    #[case("tire", ServiceIcon::Tire)]
    #[case("Balance", ServiceIcon::Balance)]
    #[case("truck", ServiceIcon::Truck)]
    #[case("sparkles", ServiceIcon::Gauge)]
    fn icon_keys_fall_back_to_gauge(#[case] key: &str, #[case] expected: ServiceIcon) {
        assert_eq!(ServiceIcon::from_key(key), expected);
    }

    #[test]
    fn option_label_joins_title_and_price() {
        assert_eq!(
            entry("x", "Echilibrare").option_label(),
            "Echilibrare - de la 50 lei"
        );
    }
}
