//! Store resolution state: the tenant list, the current-store snapshot,
//! per-store theme assignments and carts.

use std::collections::BTreeMap;

use store_theme::storage::{store_custom_colors_key, store_theme_key};
use store_theme::{CustomColors, LocalStorage, StorageError};
use thiserror::Error;
use tracing::{debug, info};

use crate::data::{ProductId, StoreRecord};

/// Errors from store mutations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No store with this id is loaded.
    #[error("unknown store: {0}")]
    UnknownStore(String),

    /// The store has no product with this id.
    #[error("store {store} has no product {product}")]
    UnknownProduct { store: String, product: ProductId },

    /// Colour overrides that are not hex colours.
    #[error("invalid colour for {fields} in store {store}")]
    InvalidColors { store: String, fields: String },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

// ============================================================================
// Cart
// ============================================================================

/// Flat shipping fee in minor units, waived from [`FREE_SHIPPING_FROM`].
pub const SHIPPING_FEE: u64 = 1_500;
/// Subtotal from which shipping is free.
pub const FREE_SHIPPING_FROM: u64 = 20_000;

/// A cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// A shopper's cart for one store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

static EMPTY_CART: Cart = Cart::new();

impl Cart {
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    fn add(&mut self, product_id: ProductId, quantity: u32) {
        match self.lines.iter_mut().find(|l| l.product_id == product_id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine {
                product_id,
                quantity,
            }),
        }
    }

    fn remove(&mut self, product_id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        self.lines.len() != before
    }

    /// Sum of line totals, priced from the store's catalog. Lines whose
    /// product has disappeared contribute nothing.
    #[must_use]
    pub fn subtotal(&self, store: &StoreRecord) -> u64 {
        self.lines
            .iter()
            .filter_map(|line| {
                store
                    .product(line.product_id)
                    .map(|p| p.price_cents * u64::from(line.quantity))
            })
            .sum()
    }

    #[must_use]
    pub fn shipping(&self, store: &StoreRecord) -> u64 {
        let subtotal = self.subtotal(store);
        if subtotal == 0 || subtotal >= FREE_SHIPPING_FROM {
            0
        } else {
            SHIPPING_FEE
        }
    }

    #[must_use]
    pub fn total(&self, store: &StoreRecord) -> u64 {
        self.subtotal(store) + self.shipping(store)
    }
}

// ============================================================================
// StoreState
// ============================================================================

/// Tenant list plus the current-store snapshot the dispatcher reads.
#[derive(Debug)]
pub struct StoreState {
    storage: LocalStorage,
    stores: Vec<StoreRecord>,
    current: Option<StoreRecord>,
    revision: u64,
    carts: BTreeMap<String, Cart>,
}

impl StoreState {
    /// Empty state; stores arrive later via [`set_stores`](Self::set_stores).
    #[must_use]
    pub const fn new(storage: LocalStorage) -> Self {
        Self {
            storage,
            stores: Vec::new(),
            current: None,
            revision: 0,
            carts: BTreeMap::new(),
        }
    }

    /// Replace the store list. The current snapshot is refreshed from the new
    /// list, or dropped if its store is gone.
    pub fn set_stores(&mut self, stores: Vec<StoreRecord>) {
        info!(stores.count = stores.len(), "Store list replaced");
        self.stores = stores;
        let previous = self.current.take();
        self.current = previous.and_then(|current| self.store(&current.id).cloned());
        self.bump();
    }

    /// Changes whenever the store list changes.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn stores(&self) -> &[StoreRecord] {
        &self.stores
    }

    #[must_use]
    pub fn store(&self, id: &str) -> Option<&StoreRecord> {
        self.stores.iter().find(|s| s.id == id)
    }

    /// Snapshot of the selected store.
    #[must_use]
    pub const fn current(&self) -> Option<&StoreRecord> {
        self.current.as_ref()
    }

    /// Make a store current. An unknown id clears the selection.
    pub fn select_store(&mut self, id: &str) -> Option<&StoreRecord> {
        self.current = self.store(id).cloned();
        if self.current.is_none() {
            debug!(store.id = %id, "Selected store is not loaded");
        }
        self.current.as_ref()
    }

    /// The persisted per-store theme override, if any.
    #[must_use]
    pub fn theme_override(&self, id: &str) -> Option<String> {
        self.storage.get(&store_theme_key(id))
    }

    /// Assign a theme to a store: updates the list entry, the current
    /// snapshot when it is that store, and `store-{id}-theme`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownStore`] if the store is not loaded, or a
    /// storage error if the override could not be persisted (memory is
    /// already updated in that case).
    pub fn update_store_theme_assignment(
        &mut self,
        id: &str,
        theme_id: &str,
    ) -> Result<(), StoreError> {
        let record = self
            .stores
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| StoreError::UnknownStore(id.to_string()))?;

        let changed = record.theme_id != theme_id;
        if changed {
            info!(store.id = %id, theme.from = %record.theme_id, theme.to = %theme_id, "Store theme assigned");
            record.theme_id = theme_id.to_string();
        }
        if let Some(current) = self.current.as_mut().filter(|c| c.id == id) {
            current.theme_id = theme_id.to_string();
        }
        if changed {
            self.bump();
        }

        self.storage.set(&store_theme_key(id), theme_id)?;
        Ok(())
    }

    /// A store's persisted colour overrides; empty when none are stored.
    #[must_use]
    pub fn custom_colors(&self, id: &str) -> CustomColors {
        self.storage
            .get_json(&store_custom_colors_key(id))
            .unwrap_or_default()
    }

    /// Persist a store's colour overrides.
    ///
    /// # Errors
    ///
    /// Rejects unknown stores and non-hex colours; propagates storage errors.
    pub fn set_custom_colors(&mut self, id: &str, colors: &CustomColors) -> Result<(), StoreError> {
        if self.store(id).is_none() {
            return Err(StoreError::UnknownStore(id.to_string()));
        }
        let invalid = colors.invalid_fields();
        if !invalid.is_empty() {
            return Err(StoreError::InvalidColors {
                store: id.to_string(),
                fields: invalid.join(", "),
            });
        }
        self.storage.set_json(&store_custom_colors_key(id), colors)?;
        debug!(store.id = %id, "Custom colours saved");
        Ok(())
    }

    // ===== Cart =====

    /// A store's cart; empty if nothing was added.
    #[must_use]
    pub fn cart(&self, id: &str) -> &Cart {
        self.carts.get(id).unwrap_or(&EMPTY_CART)
    }

    /// Add units of a product to a store's cart.
    ///
    /// # Errors
    ///
    /// Rejects unknown stores and products.
    pub fn add_to_cart(
        &mut self,
        id: &str,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<&Cart, StoreError> {
        let store = self
            .store(id)
            .ok_or_else(|| StoreError::UnknownStore(id.to_string()))?;
        if store.product(product_id).is_none() {
            return Err(StoreError::UnknownProduct {
                store: id.to_string(),
                product: product_id,
            });
        }
        let cart = self.carts.entry(id.to_string()).or_default();
        cart.add(product_id, quantity.max(1));
        debug!(store.id = %id, product.id = product_id, cart.items = cart.item_count(), "Added to cart");
        Ok(cart)
    }

    /// Remove a product line, returning whether it was in the cart.
    pub fn remove_from_cart(&mut self, id: &str, product_id: ProductId) -> bool {
        self.carts
            .get_mut(id)
            .is_some_and(|cart| cart.remove(product_id))
    }

    pub fn clear_cart(&mut self, id: &str) {
        self.carts.remove(id);
    }

    const fn bump(&mut self) {
        self.revision += 1;
    }
}
