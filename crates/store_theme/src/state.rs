//! Theme resolution state.
//!
//! [`ThemeState`] owns the active theme identifier, the colour mode and the
//! preview overlay, and writes every committed change to [`LocalStorage`].
//! It never reports errors to callers: unknown identifiers degrade to the
//! registry default when a descriptor is needed, and storage failures are
//! logged while the in-memory state stays authoritative.

use std::collections::BTreeMap;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::palette::{ColorMode, Palette};
use crate::registry::{ThemeDescriptor, ThemeId, get_theme_by_id};
use crate::storage::{
    COLOR_MODE_KEY, CUSTOMIZATIONS_KEY, GLOBAL_THEME_KEY, LocalStorage, StorageError,
};

/// Class put on the document root while dark mode is on.
pub const DARK_CLASS: &str = "dark";

/// A change applied to [`ThemeState`], delivered to listeners.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeEvent {
    /// The committed theme changed.
    ActiveChanged { from: String, to: String },
    /// Preview mode was entered (`true`) or left (`false`).
    PreviewToggled(bool),
    /// A different theme is being previewed.
    PreviewChanged(String),
    /// Light/dark flipped.
    ColorModeChanged(ColorMode),
    /// A customization key was written.
    CustomizationChanged(String),
}

/// Identifier for a registered change listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn Fn(&ThemeEvent)>;

/// Active theme, colour mode and preview overlay.
pub struct ThemeState {
    storage: LocalStorage,
    active_theme_id: String,
    color_mode: ColorMode,
    is_preview_mode: bool,
    preview_theme_id: Option<String>,
    customizations: BTreeMap<String, Value>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeState")
            .field("active_theme_id", &self.active_theme_id)
            .field("color_mode", &self.color_mode)
            .field("is_preview_mode", &self.is_preview_mode)
            .field("preview_theme_id", &self.preview_theme_id)
            .field("customizations", &self.customizations.len())
            .field("listeners", &format!("{} listeners", self.listeners.len()))
            .finish()
    }
}

impl ThemeState {
    /// Initialise from storage, defaulting to the registry default theme and
    /// light mode when nothing has been persisted.
    #[must_use]
    pub fn load(storage: LocalStorage) -> Self {
        let active_theme_id = storage
            .get(GLOBAL_THEME_KEY)
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| ThemeId::DEFAULT.as_str().to_string());

        let color_mode: ColorMode = match storage.get(COLOR_MODE_KEY) {
            Some(raw) => raw.parse::<ColorMode>().unwrap_or_else(|err| {
                warn!(error = %err, "Ignoring persisted colour mode");
                ColorMode::default()
            }),
            None => ColorMode::default(),
        };

        let customizations = storage.get_json(CUSTOMIZATIONS_KEY).unwrap_or_default();

        debug!(
            theme.active = %active_theme_id,
            theme.color_mode = %color_mode,
            "Theme state loaded"
        );

        Self {
            storage,
            active_theme_id,
            color_mode,
            is_preview_mode: false,
            preview_theme_id: None,
            customizations,
            listeners: Vec::new(),
            next_listener_id: 1,
        }
    }

    // ===== Queries =====

    /// Committed theme identifier, as stored.
    #[must_use]
    pub fn active_theme_id(&self) -> &str {
        &self.active_theme_id
    }

    #[must_use]
    pub const fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    #[must_use]
    pub const fn is_preview_mode(&self) -> bool {
        self.is_preview_mode
    }

    /// Theme being previewed, only ever set while previewing.
    #[must_use]
    pub fn preview_theme_id(&self) -> Option<&str> {
        self.preview_theme_id.as_deref()
    }

    /// Identifier to render: the preview theme while previewing, otherwise
    /// the active one.
    #[must_use]
    pub fn effective_theme_id(&self) -> &str {
        match (&self.preview_theme_id, self.is_preview_mode) {
            (Some(preview), true) => preview,
            _ => &self.active_theme_id,
        }
    }

    /// Descriptor to render, via the registry's fallback-safe lookup.
    #[must_use]
    pub fn effective_theme(&self) -> &'static ThemeDescriptor {
        get_theme_by_id(self.effective_theme_id())
    }

    /// Palette for the effective theme in the current colour mode.
    #[must_use]
    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.effective_theme().id, self.color_mode)
    }

    /// Class the document root carries for the current colour mode.
    #[must_use]
    pub const fn root_class(&self) -> Option<&'static str> {
        if self.color_mode.is_dark() {
            Some(DARK_CLASS)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn customizations(&self) -> &BTreeMap<String, Value> {
        &self.customizations
    }

    /// Storage handle shared with other state holders.
    #[must_use]
    pub const fn storage(&self) -> &LocalStorage {
        &self.storage
    }

    // ===== Mutations =====

    /// Commit a theme: clears any preview and persists it as the last used
    /// theme.
    pub fn set_active_theme(&mut self, id: &str) {
        if self.is_preview_mode {
            self.is_preview_mode = false;
            self.preview_theme_id = None;
            self.notify(&ThemeEvent::PreviewToggled(false));
        }
        self.commit_active(id);
    }

    /// Adopt a theme chosen by store resolution.
    ///
    /// Same persistence as [`set_active_theme`](Self::set_active_theme) but
    /// leaves a running preview in place.
    pub fn sync_active_theme(&mut self, id: &str) {
        self.commit_active(id);
    }

    /// Enter or leave preview mode. Leaving discards the preview selection.
    pub fn toggle_preview(&mut self, enabled: bool) {
        if self.is_preview_mode == enabled {
            return;
        }
        self.is_preview_mode = enabled;
        if !enabled {
            self.preview_theme_id = None;
        }
        debug!(theme.preview = enabled, "Preview mode toggled");
        self.notify(&ThemeEvent::PreviewToggled(enabled));
    }

    /// Pick the theme to preview. Ignored unless preview mode is on.
    pub fn set_preview_theme(&mut self, id: &str) {
        if !self.is_preview_mode {
            warn!(theme.preview = %id, "Preview theme set outside preview mode, ignoring");
            return;
        }
        if self.preview_theme_id.as_deref() == Some(id) {
            return;
        }
        self.preview_theme_id = Some(id.to_string());
        debug!(theme.preview = %id, "Preview theme selected");
        self.notify(&ThemeEvent::PreviewChanged(id.to_string()));
    }

    /// Flip light/dark and persist the new mode.
    pub fn toggle_color_mode(&mut self) {
        self.color_mode = self.color_mode.toggled();
        self.persist(COLOR_MODE_KEY, self.color_mode.as_str());
        info!(theme.color_mode = %self.color_mode, "Colour mode toggled");
        self.notify(&ThemeEvent::ColorModeChanged(self.color_mode));
    }

    /// Write one customization and persist the whole map.
    pub fn set_customization(&mut self, key: &str, value: Value) {
        self.customizations.insert(key.to_string(), value);
        if let Err(err) = self
            .storage
            .set_json(CUSTOMIZATIONS_KEY, &self.customizations)
        {
            log_persist_failure(CUSTOMIZATIONS_KEY, &err);
        }
        self.notify(&ThemeEvent::CustomizationChanged(key.to_string()));
    }

    fn commit_active(&mut self, id: &str) {
        self.persist(GLOBAL_THEME_KEY, id);
        if self.active_theme_id == id {
            return;
        }
        let from = std::mem::replace(&mut self.active_theme_id, id.to_string());
        info!(theme.from = %from, theme.to = %id, "Active theme switched");
        self.notify(&ThemeEvent::ActiveChanged {
            from,
            to: id.to_string(),
        });
    }

    fn persist(&self, key: &str, value: &str) {
        if let Err(err) = self.storage.set(key, value) {
            log_persist_failure(key, &err);
        }
    }

    // ===== Listeners =====

    /// Register a callback run after every change.
    pub fn on_change<F>(&mut self, callback: F) -> ListenerId
    where
        F: Fn(&ThemeEvent) + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(callback)));
        debug!(theme.listener_id = id.0, "Theme listener registered");
        id
    }

    /// Remove a listener by id.
    pub fn remove_listener(&mut self, id: ListenerId) {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        if self.listeners.len() != before {
            debug!(theme.listener_id = id.0, "Theme listener removed");
        }
    }

    fn notify(&self, event: &ThemeEvent) {
        for (id, listener) in &self.listeners {
            let result = catch_unwind(AssertUnwindSafe(|| listener(event)));
            if result.is_err() {
                warn!(theme.listener_id = id.0, ?event, "Theme listener panicked");
            }
        }
    }
}

fn log_persist_failure(key: &str, err: &StorageError) {
    warn!(storage.key = key, error = %err, "Failed to persist theme state");
}
