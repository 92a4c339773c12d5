//! Session configuration (environment-driven, with defaults).

use serde::{Deserialize, Serialize};

use storefront_catalog::CategoryName;

/// Category buttons shown on the home view by default. The last four have no
/// catalog entries and resolve to empty listings.
const DEFAULT_HOME_CATEGORIES: [&str; 8] = [
    "Electronics",
    "Clothing",
    "Home & Garden",
    "Sports",
    "Toys",
    "Motors",
    "Collectibles",
    "Deals",
];

const DEFAULT_STORE_NAME: &str = "Marketplace";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// `STOREFRONT_NAME`
    pub store_name: String,
    /// `STOREFRONT_CATEGORIES`, comma-separated.
    pub home_categories: Vec<CategoryName>,
    /// `STOREFRONT_PUBLISH_EVENTS`, `true`/`false`.
    pub publish_events: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            store_name: DEFAULT_STORE_NAME.to_string(),
            home_categories: DEFAULT_HOME_CATEGORIES
                .iter()
                .map(|c| CategoryName::new(*c))
                .collect(),
            publish_events: true,
        }
    }
}

impl SessionConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; unset or invalid values keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(name) = lookup("STOREFRONT_NAME") {
            if name.trim().is_empty() {
                tracing::warn!("STOREFRONT_NAME is blank; using default store name");
            } else {
                config.store_name = name.trim().to_string();
            }
        }

        if let Some(raw) = lookup("STOREFRONT_CATEGORIES") {
            let categories: Vec<CategoryName> = raw
                .split(',')
                .filter_map(|c| CategoryName::try_new(c.trim()).ok())
                .collect();
            if categories.is_empty() {
                tracing::warn!("STOREFRONT_CATEGORIES has no usable entries; using defaults");
            } else {
                config.home_categories = categories;
            }
        }

        if let Some(raw) = lookup("STOREFRONT_PUBLISH_EVENTS") {
            match parse_bool(&raw) {
                Some(flag) => config.publish_events = flag,
                None => tracing::warn!(
                    value = %raw,
                    "STOREFRONT_PUBLISH_EVENTS is not a boolean; keeping default"
                ),
            }
        }

        config
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
