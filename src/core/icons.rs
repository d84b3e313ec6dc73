use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

const ICON_BASE: &str = "https://fp68static.cfapps.eu10-004.hana.ondemand.com/sap-icons";

/// Category/value to icon-URL mapping injected into the engine.
///
/// Fallback chains are owned by the resolvers that consume the catalog; the
/// catalog itself is a plain ordered map so tests can substitute their own
/// tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconCatalog {
    entries: IndexMap<String, String>,
}

impl IconCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, url: impl Into<String>) -> Self {
        self.insert(key, url);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, url: impl Into<String>) {
        self.entries.insert(key.into(), url.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Standard table for chart axis labels.
    #[must_use]
    pub fn chart_standard() -> Self {
        let mut catalog = Self::new();
        for (key, asset) in [
            ("California", "Location"),
            ("Nevada", "Location"),
            ("Oregon", "Location"),
            ("Carbonated Drinks", "CarbonatedDrinks"),
            ("Juices", "Juices"),
            ("Alcohol", "Alcohol"),
            ("Others", "Others"),
            ("Gross Margin", "GrossMargin"),
            ("Discount", "Discount"),
            ("Original Sales Price", "Price"),
            ("City", "City"),
            ("Info", "Info"),
        ] {
            catalog.insert(key, format!("{ICON_BASE}/{asset}.png"));
        }
        catalog
    }

    /// Standard table for tooltip rows.
    #[must_use]
    pub fn tooltip_standard() -> Self {
        let mut catalog = Self::new();
        for (key, asset) in [
            ("Location", "Location"),
            ("Product", "Product"),
            ("Sales Manager", "SalesManager"),
            ("Date", "Date"),
            ("Store", "Store"),
            ("Category", "Category"),
            ("Price (fixed)", "Price"),
            ("Quantity Sold", "Quantity"),
            ("California", "Location"),
            ("Nevada", "Location"),
            ("Oregon", "Location"),
            ("Carbonated Drinks", "CarbonatedDrinks"),
            ("Juices", "Juices"),
            ("Alcohol", "Alcohol"),
            ("Others", "Others"),
            ("Gross Margin", "GrossMargin"),
            ("Discount", "Discount"),
            ("Original Sales Price", "Price"),
            ("City", "City"),
            ("Info", "Info"),
        ] {
            catalog.insert(key, format!("{ICON_BASE}/{asset}.png"));
        }
        catalog
    }
}
