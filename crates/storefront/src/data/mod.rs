//! Tenant and catalog records.
//!
//! Everything here is mock data produced by [`generator::Generator`] at
//! startup; nothing is loaded from a backend.

pub mod generator;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::i18n::Locale;

/// Product identifier, unique within a store.
pub type ProductId = u32;

// ============================================================================
// Currency
// ============================================================================

/// Currencies a store can price in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Sar,
    Aed,
    Egp,
}

impl Currency {
    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Sar => "SAR",
            Self::Aed => "AED",
            Self::Egp => "EGP",
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 5] {
        [Self::Usd, Self::Eur, Self::Sar, Self::Aed, Self::Egp]
    }

    /// Format an amount in minor units, e.g. `1999` → `"19.99 USD"`.
    #[must_use]
    pub fn format(self, cents: u64) -> String {
        format!("{}.{:02} {}", cents / 100, cents % 100, self.code())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// A product listed by a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    /// Price in minor units of the store currency.
    pub price_cents: u64,
    /// Average rating in tenths of a star, 0..=50.
    pub rating: u8,
    pub stock: u32,
    pub description: String,
}

impl Product {
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Rating as `4.3★`.
    #[must_use]
    pub fn rating_label(&self) -> String {
        format!("{}.{}★", self.rating / 10, self.rating % 10)
    }
}

// ============================================================================
// Store
// ============================================================================

/// One tenant's storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreRecord {
    pub id: String,
    pub name: String,
    /// The store's current theme, written by theme resolution.
    pub theme_id: String,
    /// The theme the store was configured with; never rewritten.
    pub default_theme_id: String,
    pub currency: Currency,
    pub description: String,
    pub language: Locale,
    pub created_at: DateTime<Utc>,
    pub products: Vec<Product>,
}

impl StoreRecord {
    /// A store with no products, priced in the default currency.
    pub fn new(id: impl Into<String>, name: impl Into<String>, theme_id: impl Into<String>) -> Self {
        let theme_id = theme_id.into();
        Self {
            id: id.into(),
            name: name.into(),
            default_theme_id: theme_id.clone(),
            theme_id,
            currency: Currency::default(),
            description: String::new(),
            language: Locale::default(),
            created_at: DateTime::UNIX_EPOCH,
            products: Vec::new(),
        }
    }

    /// Builder-style product list.
    #[must_use]
    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    #[must_use]
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product by the raw id from a URL segment.
    #[must_use]
    pub fn product_by_slug(&self, raw: &str) -> Option<&Product> {
        raw.parse().ok().and_then(|id| self.product(id))
    }

    /// Format a price in this store's currency.
    #[must_use]
    pub fn price(&self, cents: u64) -> String {
        self.currency.format(cents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: ProductId, price_cents: u64) -> Product {
        Product {
            id,
            name: format!("Item {id}"),
            category: "General".to_string(),
            price_cents,
            rating: 43,
            stock: 0,
            description: String::new(),
        }
    }

    #[test]
    fn currency_formatting() {
        assert_eq!(Currency::Usd.format(1999), "19.99 USD");
        assert_eq!(Currency::Sar.format(5), "0.05 SAR");
        assert_eq!(Currency::Egp.format(120_000), "1200.00 EGP");
    }

    #[test]
    fn product_lookup_by_slug() {
        let store = StoreRecord::new("s1", "Shop", "minimal")
            .with_products(vec![product(1, 100), product(7, 700)]);
        assert_eq!(store.product_by_slug("7").map(|p| p.price_cents), Some(700));
        assert!(store.product_by_slug("8").is_none());
        assert!(store.product_by_slug("seven").is_none());
    }

    #[test]
    fn product_labels() {
        let item = product(1, 100);
        assert_eq!(item.rating_label(), "4.3★");
        assert!(!item.in_stock());
    }
}
