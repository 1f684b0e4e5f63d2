//! The storefront layout dispatcher.
//!
//! One [`StorefrontLayout`] exists per store-view mount. It resolves the
//! store's theme, writes it through to both state holders, and decides how
//! the page is hosted:
//!
//! ```text
//! Loading ──(store present)──▶ Resolved { HeaderFooter | Integrated }
//!    ▲                             │
//!    └──(store list revision)──────┘
//!
//! any ──(effective id has no shell)──▶ Error   (terminal)
//! ```

use std::fmt;

use store_theme::{ThemeId, ThemeState};
use thiserror::Error;
use tracing::{debug, error};

use crate::resolve::{Resolution, resolve_and_sync};
use crate::store::StoreState;

/// How a theme hosts its pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellKind {
    /// Page content between a theme header and footer.
    HeaderFooter,
    /// The theme's pages draw their own chrome.
    Integrated,
}

impl ShellKind {
    /// Static hosting table. Every [`ThemeId`] has an entry.
    #[must_use]
    pub const fn for_theme(theme: ThemeId) -> Self {
        match theme {
            ThemeId::Minimal
            | ThemeId::Tech
            | ThemeId::Modern
            | ThemeId::Luxe
            | ThemeId::Vibrant => Self::HeaderFooter,
            ThemeId::Appliances | ThemeId::Toys | ThemeId::Software => Self::Integrated,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HeaderFooter => "header-footer",
            Self::Integrated => "integrated",
        }
    }
}

impl fmt::Display for ShellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A theme identifier this build cannot host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("theme {theme_id:?} is not available in this storefront")]
pub struct ThemeError {
    pub theme_id: String,
}

/// Map a raw theme identifier to its theme and shell.
///
/// # Errors
///
/// Returns [`ThemeError`] naming the identifier when it is not a known theme.
pub fn classify(raw: &str) -> Result<(ThemeId, ShellKind), ThemeError> {
    raw.parse::<ThemeId>()
        .map(|theme| (theme, ShellKind::for_theme(theme)))
        .map_err(|_| ThemeError {
            theme_id: raw.to_string(),
        })
}

/// A store view ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mounted {
    /// Outcome of precedence resolution for the store.
    pub resolution: Resolution,
    /// Theme actually rendered; differs from the resolution while previewing.
    pub theme: ThemeId,
    pub shell: ShellKind,
}

/// Dispatcher state for one mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutState {
    /// The store is not in the list (yet).
    Loading,
    Resolved(Mounted),
    /// Terminal.
    Error(ThemeError),
}

/// Dispatcher for one store id.
#[derive(Debug)]
pub struct StorefrontLayout {
    store_id: String,
    state: LayoutState,
    seen_revision: Option<u64>,
}

impl StorefrontLayout {
    /// Start a mount in [`LayoutState::Loading`]. Nothing is resolved until
    /// the first [`update`](Self::update).
    #[must_use]
    pub fn mount(store_id: impl Into<String>) -> Self {
        Self {
            store_id: store_id.into(),
            state: LayoutState::Loading,
            seen_revision: None,
        }
    }

    #[must_use]
    pub fn store_id(&self) -> &str {
        &self.store_id
    }

    #[must_use]
    pub const fn state(&self) -> &LayoutState {
        &self.state
    }

    /// Advance the state machine.
    ///
    /// Resolution runs while loading and whenever the store list revision
    /// moved since the last run; classification runs on every call so a
    /// preview switch takes effect immediately. Once in
    /// [`LayoutState::Error`] nothing changes.
    pub fn update(&mut self, stores: &mut StoreState, themes: &mut ThemeState) -> &LayoutState {
        if matches!(self.state, LayoutState::Error(_)) {
            return &self.state;
        }

        let stale = self.seen_revision != Some(stores.revision());
        let cached = match &self.state {
            LayoutState::Resolved(mounted) if !stale => Some(mounted.resolution.clone()),
            _ => None,
        };
        let resolution = if let Some(resolution) = cached {
            resolution
        } else {
            let resolved = resolve_and_sync(&self.store_id, stores, themes);
            self.seen_revision = Some(stores.revision());
            let Some(resolution) = resolved else {
                debug!(store.id = %self.store_id, "Store not loaded, waiting");
                self.state = LayoutState::Loading;
                return &self.state;
            };
            resolution
        };

        self.state = match classify(themes.effective_theme_id()) {
            Ok((theme, shell)) => {
                debug!(store.id = %self.store_id, theme.id = %theme, shell = %shell, "Shell selected");
                LayoutState::Resolved(Mounted {
                    resolution,
                    theme,
                    shell,
                })
            }
            Err(err) => {
                error!(store.id = %self.store_id, theme.id = %err.theme_id, "No shell for theme");
                LayoutState::Error(err)
            }
        };
        &self.state
    }
}
