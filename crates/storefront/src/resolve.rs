//! Per-store theme precedence and the write-through that keeps every copy
//! of the answer in agreement.
//!
//! The resolved identifier lives in four places: the store list entry, the
//! current-store snapshot, the theme state's active id (plus its
//! `storeThemeId` key) and the store's `store-{id}-theme` key. [`resolve_theme`]
//! decides the value from explicit inputs; [`resolve_and_sync`] is the only
//! code path that writes it everywhere.

use std::fmt;

use store_theme::ThemeState;
use store_theme::storage::GLOBAL_THEME_KEY;
use tracing::{debug, warn};

use crate::store::StoreState;

/// Which input produced a resolved theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeSource {
    /// `store-{id}-theme` was set.
    StoreOverride,
    /// `storeThemeId` was set.
    GlobalOverride,
    /// Neither override exists; the store's configured default.
    StoreDefault,
}

impl ThemeSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StoreOverride => "store override",
            Self::GlobalOverride => "global override",
            Self::StoreDefault => "store default",
        }
    }
}

impl fmt::Display for ThemeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything precedence looks at. Blank overrides count as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionInputs<'a> {
    pub store_default: &'a str,
    pub store_override: Option<&'a str>,
    pub global_override: Option<&'a str>,
}

/// The winning theme identifier and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub theme_id: String,
    pub source: ThemeSource,
}

/// Strict precedence: per-store override, then global override, then the
/// store default. The identifier is not validated here.
#[must_use]
pub fn resolve_theme(inputs: ResolutionInputs<'_>) -> Resolution {
    let (theme_id, source) = if let Some(id) = present(inputs.store_override) {
        (id, ThemeSource::StoreOverride)
    } else if let Some(id) = present(inputs.global_override) {
        (id, ThemeSource::GlobalOverride)
    } else {
        (inputs.store_default, ThemeSource::StoreDefault)
    };

    Resolution {
        theme_id: theme_id.to_string(),
        source,
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Resolve a store's theme and write it through to both state holders.
///
/// Returns `None` when the store is not (yet) loaded; nothing is written in
/// that case. Writes are skipped when the stored values already match, so
/// calling this twice in a row leaves storage untouched the second time.
pub fn resolve_and_sync(
    store_id: &str,
    stores: &mut StoreState,
    themes: &mut ThemeState,
) -> Option<Resolution> {
    let store_default = stores.select_store(store_id)?.default_theme_id.clone();
    let store_override = stores.theme_override(store_id);
    let global_override = themes.storage().get(GLOBAL_THEME_KEY);

    let resolution = resolve_theme(ResolutionInputs {
        store_default: &store_default,
        store_override: store_override.as_deref(),
        global_override: global_override.as_deref(),
    });
    debug!(
        store.id = %store_id,
        theme.resolved = %resolution.theme_id,
        theme.source = %resolution.source,
        "Theme resolved"
    );

    if let Err(err) = stores.update_store_theme_assignment(store_id, &resolution.theme_id) {
        warn!(store.id = %store_id, error = %err, "Failed to record store theme");
    }
    themes.sync_active_theme(&resolution.theme_id);

    Some(resolution)
}
