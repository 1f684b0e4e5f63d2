//! Application root: owns the storage handle and both state holders, and
//! turns a URL path into rendered output.

use store_theme::storage::LANGUAGE_KEY;
use store_theme::{
    ColorMode, CustomColors, LocalStorage, Palette, StorageError, ThemeId, ThemeState,
};
use tracing::{info, warn};

use crate::config::Config;
use crate::data::generator::Generator;
use crate::data::{ProductId, StoreRecord};
use crate::i18n::{Locale, Text};
use crate::layout::{LayoutState, ShellKind, StorefrontLayout, ThemeError};
use crate::pages::PageContext;
use crate::render::Painter;
use crate::resolve::{Resolution, ResolutionInputs, resolve_theme};
use crate::routes::{PageSource, Route, RouteError, RouteTable};
use crate::shell;
use crate::store::{StoreError, StoreState};

/// What a navigation ended in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A page was rendered.
    Page {
        theme: ThemeId,
        shell: ShellKind,
        page: &'static str,
        source: PageSource,
    },
    /// The store is not in the list.
    Loading,
    /// The effective theme cannot be hosted.
    ThemeError(ThemeError),
}

/// Output of [`App::navigate`].
#[derive(Debug, Clone)]
pub struct Rendered {
    pub text: String,
    pub outcome: Outcome,
}

/// The storefront application.
#[derive(Debug)]
pub struct App {
    config: Config,
    themes: ThemeState,
    stores: StoreState,
}

impl App {
    /// Wire state holders over one storage handle. No stores are loaded.
    #[must_use]
    pub fn new(config: Config, storage: LocalStorage) -> Self {
        Self {
            config,
            themes: ThemeState::load(storage.clone()),
            stores: StoreState::new(storage),
        }
    }

    /// [`new`](Self::new) followed by [`load_mock_data`](Self::load_mock_data).
    #[must_use]
    pub fn with_mock_data(config: Config, storage: LocalStorage) -> Self {
        let mut app = Self::new(config, storage);
        app.load_mock_data();
        app
    }

    /// Generate the configured number of stores from the configured seed.
    pub fn load_mock_data(&mut self) {
        let stores = Generator::new(self.config.seed).stores(self.config.store_count);
        info!(seed = self.config.seed, stores.count = stores.len(), "Mock data generated");
        self.stores.set_stores(stores);
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub const fn themes(&self) -> &ThemeState {
        &self.themes
    }

    pub const fn themes_mut(&mut self) -> &mut ThemeState {
        &mut self.themes
    }

    #[must_use]
    pub const fn stores(&self) -> &StoreState {
        &self.stores
    }

    pub const fn stores_mut(&mut self) -> &mut StoreState {
        &mut self.stores
    }

    #[must_use]
    pub const fn storage(&self) -> &LocalStorage {
        self.themes.storage()
    }

    // ===== Language =====

    /// Language for a store: `--lang`, then the persisted choice, then the
    /// store's own language.
    #[must_use]
    pub fn locale_for(&self, store: Option<&StoreRecord>) -> Locale {
        if let Some(locale) = self.config.locale {
            return locale;
        }
        let persisted = self.storage().get(LANGUAGE_KEY).and_then(|raw| {
            raw.parse::<Locale>()
                .inspect_err(|err| warn!(error = %err, "Ignoring persisted language"))
                .ok()
        });
        persisted
            .or_else(|| store.map(|s| s.language))
            .unwrap_or_default()
    }

    /// Persist the interface language.
    ///
    /// # Errors
    ///
    /// Propagates storage write failures.
    pub fn set_language(&self, locale: Locale) -> Result<(), StorageError> {
        self.storage().set(LANGUAGE_KEY, locale.as_str())
    }

    // ===== Theme operations =====

    /// Give a store a theme and make it the active theme.
    ///
    /// # Errors
    ///
    /// Fails for unknown stores or when the assignment cannot be persisted.
    pub fn assign_theme(&mut self, store_id: &str, theme: ThemeId) -> Result<(), StoreError> {
        self.stores
            .update_store_theme_assignment(store_id, theme.as_str())?;
        self.themes.set_active_theme(theme.as_str());
        Ok(())
    }

    /// Commit a theme as the last used one.
    pub fn set_global_theme(&mut self, theme: ThemeId) {
        self.themes.set_active_theme(theme.as_str());
    }

    /// Enter preview mode showing `theme`.
    pub fn preview(&mut self, theme: ThemeId) {
        self.themes.toggle_preview(true);
        self.themes.set_preview_theme(theme.as_str());
    }

    /// What resolution would pick for a store right now, without writing.
    #[must_use]
    pub fn peek_resolution(&self, store: &StoreRecord) -> Resolution {
        let store_override = self.stores.theme_override(&store.id);
        let global_override = self.storage().get(store_theme::storage::GLOBAL_THEME_KEY);
        resolve_theme(ResolutionInputs {
            store_default: &store.default_theme_id,
            store_override: store_override.as_deref(),
            global_override: global_override.as_deref(),
        })
    }

    /// Put units of a product in a store's cart.
    ///
    /// # Errors
    ///
    /// Fails for unknown stores and products.
    pub fn add_to_cart(
        &mut self,
        store_id: &str,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<(), StoreError> {
        self.stores.add_to_cart(store_id, product_id, quantity)?;
        Ok(())
    }

    /// Persist colour overrides for a store.
    ///
    /// # Errors
    ///
    /// Fails for unknown stores, invalid colours or storage errors.
    pub fn set_custom_colors(
        &mut self,
        store_id: &str,
        colors: &CustomColors,
    ) -> Result<(), StoreError> {
        self.stores.set_custom_colors(store_id, colors)
    }

    // ===== Rendering =====

    fn painter(&self, palette: Palette, locale: Locale) -> Painter {
        Painter::new(
            palette,
            self.config.use_color(),
            locale.direction(),
            self.config.effective_width(),
        )
    }

    /// Dispatch a storefront path and render the result.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError`] when the path is not a storefront path. An
    /// unknown store or an unhostable theme is reported through
    /// [`Rendered::outcome`] instead.
    pub fn navigate(&mut self, path: &str) -> Result<Rendered, RouteError> {
        let route = Route::parse(path)?;
        let mut layout = StorefrontLayout::mount(route.store_id.clone());
        let state = layout.update(&mut self.stores, &mut self.themes).clone();

        let rendered = match state {
            LayoutState::Loading => {
                let locale = self.locale_for(None);
                let painter = self.painter(self.themes.palette(), locale);
                warn!(store.id = %route.store_id, "Store not found");
                Rendered {
                    text: shell::loading_screen(&painter, locale.text(Text::Loading), &route.store_id),
                    outcome: Outcome::Loading,
                }
            }
            LayoutState::Error(err) => {
                let locale = self.locale_for(self.stores.current());
                let palette = Palette::for_theme(ThemeId::DEFAULT, self.themes.color_mode());
                let painter = self.painter(palette, locale);
                Rendered {
                    text: shell::theme_error_screen(&painter, locale, &err),
                    outcome: Outcome::ThemeError(err),
                }
            }
            LayoutState::Resolved(mounted) => {
                let store = self
                    .stores
                    .store(&route.store_id)
                    .ok_or_else(|| RouteError::MissingStoreId(path.to_string()))?;
                let locale = self.locale_for(Some(store));
                let palette = self
                    .themes
                    .palette()
                    .with_overrides(&self.stores.custom_colors(&store.id));
                let painter = self.painter(palette, locale);
                let page = RouteTable::resolve(mounted.theme, route.role);
                let ctx = PageContext {
                    store,
                    theme: mounted.theme,
                    route: &route,
                    cart: self.stores.cart(&store.id),
                    painter: &painter,
                    locale,
                };
                let body = page.render(&ctx);
                info!(
                    store.id = %store.id,
                    theme.id = %mounted.theme,
                    route.role = %route.role,
                    page = page.name,
                    "Page rendered"
                );
                Rendered {
                    text: shell::mount(mounted.shell, &ctx, page.source, &body),
                    outcome: Outcome::Page {
                        theme: mounted.theme,
                        shell: mounted.shell,
                        page: page.name,
                        source: page.source,
                    },
                }
            }
        };
        Ok(rendered)
    }

    /// Colour mode in effect.
    #[must_use]
    pub const fn color_mode(&self) -> ColorMode {
        self.themes.color_mode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_theme::storage::{GLOBAL_THEME_KEY, store_theme_key};

    fn config() -> Config {
        Config {
            width: Some(60),
            color: crate::config::ColorChoice::Never,
            ..Config::default()
        }
    }

    fn app_with(stores: Vec<StoreRecord>) -> App {
        let mut app = App::new(config(), LocalStorage::in_memory());
        app.stores_mut().set_stores(stores);
        app
    }

    #[test]
    fn mock_data_is_loaded_from_seed() {
        let app = App::with_mock_data(config(), LocalStorage::in_memory());
        assert_eq!(app.stores().stores().len(), config().store_count);
        assert!(app.stores().store("s1").is_some());
    }

    #[test]
    fn navigate_renders_dedicated_page() {
        let mut app = app_with(vec![StoreRecord::new("s1", "Shop", "tech")]);
        let rendered = app.navigate("/store/s1/compare").unwrap();
        assert_eq!(
            rendered.outcome,
            Outcome::Page {
                theme: ThemeId::Tech,
                shell: ShellKind::HeaderFooter,
                page: "TechCompare",
                source: PageSource::Dedicated,
            }
        );
        assert!(rendered.text.contains("Shop"));
    }

    #[test]
    fn navigate_unknown_store_is_loading() {
        let mut app = app_with(vec![StoreRecord::new("s1", "Shop", "tech")]);
        let rendered = app.navigate("/store/s9").unwrap();
        assert_eq!(rendered.outcome, Outcome::Loading);
        assert!(rendered.text.contains("s9"));
        assert!(app.storage().get(&store_theme_key("s9")).is_none());
    }

    #[test]
    fn navigate_rejects_non_store_paths() {
        let mut app = app_with(Vec::new());
        assert!(app.navigate("/dashboard").is_err());
    }

    #[test]
    fn navigate_reports_theme_error() {
        let mut app = app_with(vec![StoreRecord::new("s1", "Shop", "retro")]);
        let rendered = app.navigate("/store/s1").unwrap();
        assert!(matches!(rendered.outcome, Outcome::ThemeError(ref e) if e.theme_id == "retro"));
        assert!(rendered.text.contains("retro"));
    }

    #[test]
    fn preview_renders_other_theme_without_committing() {
        let mut app = app_with(vec![StoreRecord::new("s1", "Shop", "minimal")]);
        app.preview(ThemeId::Software);
        let rendered = app.navigate("/store/s1/downloads").unwrap();
        assert!(matches!(
            rendered.outcome,
            Outcome::Page { page: "SoftwareDownloads", shell: ShellKind::Integrated, .. }
        ));
        assert_eq!(app.themes().active_theme_id(), "minimal");
        assert_eq!(app.storage().get(GLOBAL_THEME_KEY).as_deref(), Some("minimal"));
    }

    #[test]
    fn assign_theme_updates_everything() {
        let mut app = app_with(vec![StoreRecord::new("s1", "Shop", "minimal")]);
        app.assign_theme("s1", ThemeId::Luxe).unwrap();
        assert_eq!(app.storage().get(&store_theme_key("s1")).as_deref(), Some("luxe"));
        assert_eq!(app.storage().get(GLOBAL_THEME_KEY).as_deref(), Some("luxe"));

        let rendered = app.navigate("/store/s1/lookbook").unwrap();
        assert!(matches!(rendered.outcome, Outcome::Page { page: "LuxeLookbook", .. }));
        assert!(app.assign_theme("s9", ThemeId::Tech).is_err());
    }

    #[test]
    fn locale_precedence() {
        let mut store = StoreRecord::new("s1", "Shop", "minimal");
        store.language = Locale::Ar;
        let app = app_with(vec![store.clone()]);
        assert_eq!(app.locale_for(Some(&store)), Locale::Ar);

        app.set_language(Locale::En).unwrap();
        assert_eq!(app.locale_for(Some(&store)), Locale::En);

        let mut forced = App::new(
            Config {
                locale: Some(Locale::Ar),
                ..config()
            },
            LocalStorage::in_memory(),
        );
        forced.stores_mut().set_stores(vec![store.clone()]);
        forced.set_language(Locale::En).unwrap();
        assert_eq!(forced.locale_for(Some(&store)), Locale::Ar);
    }

    #[test]
    fn cart_contents_show_on_cart_page() {
        let mut app = App::with_mock_data(config(), LocalStorage::in_memory());
        app.add_to_cart("s1", 1, 2).unwrap();
        let rendered = app.navigate("/store/s1/cart").unwrap();
        assert!(rendered.text.contains("× 2"), "{}", rendered.text);
    }

    #[test]
    fn peek_does_not_write() {
        let app = app_with(vec![StoreRecord::new("s1", "Shop", "toys")]);
        let store = app.stores().store("s1").unwrap().clone();
        assert_eq!(app.peek_resolution(&store).theme_id, "toys");
        assert!(app.storage().is_empty());
    }
}
