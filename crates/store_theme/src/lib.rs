#![forbid(unsafe_code)]

//! # Store Theme
//!
//! Theme catalog and theme state for multi-tenant storefronts.
//!
//! - [`registry`] - closed set of [`ThemeId`]s and their descriptors, with a
//!   lookup that never fails
//! - [`palette`] - light/dark palettes per theme and merchant colour overrides
//! - [`storage`] - local key-value storage mirrored to memory or a JSON file
//! - [`state`] - [`ThemeState`]: active theme, colour mode and preview overlay
//!
//! ## Example
//!
//! ```rust
//! use store_theme::{LocalStorage, ThemeId, ThemeState};
//!
//! let mut themes = ThemeState::load(LocalStorage::in_memory());
//! themes.set_active_theme("tech");
//! assert_eq!(themes.effective_theme().id, ThemeId::Tech);
//!
//! // Unknown identifiers still render: they fall back to the default theme.
//! themes.set_active_theme("retired-theme");
//! assert_eq!(themes.effective_theme().id, ThemeId::DEFAULT);
//! ```

pub mod palette;
pub mod registry;
pub mod state;
pub mod storage;

pub use palette::{ColorMode, CustomColors, Palette, Rgb};
pub use registry::{
    ParseThemeIdError, ThemeCategory, ThemeDescriptor, ThemeId, default_theme, get_theme_by_id,
    list_themes,
};
pub use state::{ListenerId, ThemeEvent, ThemeState};
pub use storage::{LocalStorage, StorageBackend, StorageError};
