//! Deterministic mock data for the storefront.
//!
//! Two runs with the same seed produce identical stores and catalogs, so
//! store ids and persisted per-store overrides line up across runs.

use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rand_pcg::Pcg64;
use store_theme::ThemeId;

use super::{Currency, Product, ProductId, StoreRecord};
use crate::i18n::Locale;

// ============================================================================
// Static Data Pools
// ============================================================================

const STORE_PREFIXES: &[&str] = &[
    "Cedar", "Nile", "Pixel", "Oasis", "Falcon", "Saffron", "Harbor", "Zenith", "Amber", "Dune",
    "Lumen", "Orbit",
];

const STORE_SUFFIXES: &[&str] = &[
    "Goods", "Market", "House", "Studio", "Outlet", "Corner", "Supply", "Collective",
];

const TAGLINES: &[&str] = &[
    "Hand-picked essentials delivered to your door.",
    "Quality you can feel, prices you will love.",
    "Everything you need, nothing you do not.",
    "Curated collections from independent makers.",
    "Fast shipping and friendly returns on every order.",
];

const ADJECTIVES: &[&str] = &[
    "Classic", "Smart", "Compact", "Premium", "Everyday", "Deluxe", "Ultra", "Eco", "Pro",
    "Mini",
];

/// Product nouns by theme: (category, nouns).
fn catalog_pool(theme: ThemeId) -> (&'static str, &'static [&'static str]) {
    match theme {
        ThemeId::Minimal | ThemeId::Modern => (
            "Home",
            &["Mug", "Notebook", "Lamp", "Vase", "Throw Blanket", "Candle", "Planter"],
        ),
        ThemeId::Tech => (
            "Electronics",
            &["Headphones", "Keyboard", "Monitor", "Webcam", "Charger", "Router", "Speaker"],
        ),
        ThemeId::Luxe => (
            "Fashion",
            &["Handbag", "Scarf", "Watch", "Sunglasses", "Wallet", "Blazer", "Perfume"],
        ),
        ThemeId::Vibrant => (
            "Lifestyle",
            &["Water Bottle", "Backpack", "Sneakers", "Yoga Mat", "Tote", "Cap"],
        ),
        ThemeId::Appliances => (
            "Appliances",
            &["Refrigerator", "Washer", "Microwave", "Air Fryer", "Dishwasher", "Kettle"],
        ),
        ThemeId::Toys => (
            "Toys",
            &["Building Set", "Puzzle", "Plush Bear", "Race Car", "Board Game", "Kite"],
        ),
        ThemeId::Software => (
            "Software",
            &["Editor License", "Backup Suite", "VPN Plan", "Design Kit", "Invoice App"],
        ),
    }
}

// ============================================================================
// Generator
// ============================================================================

/// Seeded generator for stores and products.
pub struct Generator {
    rng: Pcg64,
    base_time: DateTime<Utc>,
}

impl Generator {
    /// Create a generator with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg64::new(seed.into(), 0x0a02_bdbf_7bb3_c0a7),
            base_time: DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_else(Utc::now),
        }
    }

    fn pick<'a>(&mut self, pool: &'a [&'a str]) -> &'a str {
        pool.choose(&mut self.rng).copied().unwrap_or("")
    }

    /// Generate the store with 1-based index `index` (id `s{index}`).
    #[must_use]
    pub fn store(&mut self, index: usize) -> StoreRecord {
        let themes = ThemeId::all();
        let theme = *themes.choose(&mut self.rng).unwrap_or(&ThemeId::DEFAULT);
        let name = format!("{} {}", self.pick(STORE_PREFIXES), self.pick(STORE_SUFFIXES));
        let currencies = Currency::all();
        let currency = *currencies.choose(&mut self.rng).unwrap_or(&Currency::Usd);
        let language = if self.rng.random_bool(0.3) {
            Locale::Ar
        } else {
            Locale::En
        };
        let age_days = self.rng.random_range(30..900);
        let product_count = self.rng.random_range(6..=12);

        StoreRecord {
            id: format!("s{index}"),
            name,
            theme_id: theme.as_str().to_string(),
            default_theme_id: theme.as_str().to_string(),
            currency,
            description: self.pick(TAGLINES).to_string(),
            language,
            created_at: self.base_time - TimeDelta::days(age_days),
            products: self.products(theme, product_count),
        }
    }

    /// Generate `count` stores with ids `s1..=s{count}`.
    #[must_use]
    pub fn stores(&mut self, count: usize) -> Vec<StoreRecord> {
        (1..=count).map(|index| self.store(index)).collect()
    }

    /// Generate a catalog suited to a theme.
    #[must_use]
    pub fn products(&mut self, theme: ThemeId, count: usize) -> Vec<Product> {
        let (category, nouns) = catalog_pool(theme);
        (1..=count)
            .map(|n| {
                let name = format!("{} {}", self.pick(ADJECTIVES), self.pick(nouns));
                let stock = if self.rng.random_bool(0.15) {
                    0
                } else {
                    self.rng.random_range(1..200)
                };
                Product {
                    id: ProductId::try_from(n).unwrap_or(ProductId::MAX),
                    description: format!("{name} from our {category} range."),
                    name,
                    category: category.to_string(),
                    price_cents: self.rng.random_range(5..400) * 100 + 99,
                    rating: self.rng.random_range(25..=50),
                    stock,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_generation() {
        let a = Generator::new(12345).stores(5);
        let b = Generator::new(12345).stores(5);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_produce_different_data() {
        let a = Generator::new(1).stores(5);
        let b = Generator::new(2).stores(5);
        let names_a: Vec<_> = a.iter().map(|s| &s.name).collect();
        let names_b: Vec<_> = b.iter().map(|s| &s.name).collect();
        assert_ne!(names_a, names_b);
    }

    #[test]
    fn store_ids_are_sequential() {
        let stores = Generator::new(42).stores(4);
        let ids: Vec<_> = stores.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["s1", "s2", "s3", "s4"]);
    }

    #[test]
    fn stores_use_registry_themes_and_have_catalogs() {
        for store in Generator::new(7).stores(10) {
            assert!(store.theme_id.parse::<ThemeId>().is_ok(), "{}", store.theme_id);
            assert!((6..=12).contains(&store.products.len()));
            assert!(!store.name.trim().is_empty());
            for (index, product) in store.products.iter().enumerate() {
                assert_eq!(product.id as usize, index + 1);
                assert!(product.price_cents > 0);
                assert!(product.rating <= 50);
            }
        }
    }

    #[test]
    fn catalog_category_follows_theme() {
        let products = Generator::new(3).products(ThemeId::Toys, 4);
        assert!(products.iter().all(|p| p.category == "Toys"));
    }
}
