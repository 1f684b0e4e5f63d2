//! URL parsing and the per-theme page table.
//!
//! Every theme registers page views for some roles. A lookup that misses
//! falls back in a fixed order: the theme's own page, then the shared page
//! for that role, then the theme's home page for roles no shared page
//! covers (theme-exclusive extras and unknown segments).

use std::fmt;

use store_theme::ThemeId;
use thiserror::Error;
use tracing::trace;

use crate::i18n::Text;
use crate::pages::{self, PageContext};

/// Errors from [`Route::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The path is not under `/store/`.
    #[error("not a storefront path: {0:?} (expected /store/<id>/...)")]
    NotAStorefrontPath(String),

    /// `/store` or `/store/` with nothing after it.
    #[error("missing store id in {0:?}")]
    MissingStoreId(String),
}

/// Logical page kind taken from the path after the store id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageRole {
    Home,
    Products,
    ProductDetail,
    About,
    Contact,
    Login,
    Signup,
    Cart,
    Checkout,
    Account,
    /// Extra: vibrant, toys.
    Deals,
    /// Extra: tech, appliances.
    Compare,
    /// Extra: software.
    Downloads,
    /// Extra: luxe.
    Lookbook,
    /// Any segment no theme knows.
    Unknown,
}

impl PageRole {
    /// Roles that have a shared fallback page.
    pub const CORE: [Self; 10] = [
        Self::Home,
        Self::Products,
        Self::ProductDetail,
        Self::About,
        Self::Contact,
        Self::Login,
        Self::Signup,
        Self::Cart,
        Self::Checkout,
        Self::Account,
    ];

    /// Roles only some themes provide.
    pub const EXTRAS: [Self; 4] = [Self::Deals, Self::Compare, Self::Downloads, Self::Lookbook];

    /// Role for a single trailing path segment.
    #[must_use]
    pub fn from_segment(segment: &str) -> Self {
        match segment {
            "" => Self::Home,
            "products" => Self::Products,
            "about" => Self::About,
            "contact" => Self::Contact,
            "login" => Self::Login,
            "signup" => Self::Signup,
            "cart" => Self::Cart,
            "checkout" => Self::Checkout,
            "account" => Self::Account,
            "deals" => Self::Deals,
            "compare" => Self::Compare,
            "downloads" => Self::Downloads,
            "lookbook" => Self::Lookbook,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Products => "products",
            Self::ProductDetail => "product-detail",
            Self::About => "about",
            Self::Contact => "contact",
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Cart => "cart",
            Self::Checkout => "checkout",
            Self::Account => "account",
            Self::Deals => "deals",
            Self::Compare => "compare",
            Self::Downloads => "downloads",
            Self::Lookbook => "lookbook",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the shared pages cover this role.
    #[must_use]
    pub const fn is_core(self) -> bool {
        !matches!(
            self,
            Self::Deals | Self::Compare | Self::Downloads | Self::Lookbook | Self::Unknown
        )
    }

    /// Navigation label, when the role has one.
    #[must_use]
    pub const fn label(self) -> Option<Text> {
        Some(match self {
            Self::Home => Text::Home,
            Self::Products | Self::ProductDetail => Text::Products,
            Self::About => Text::About,
            Self::Contact => Text::Contact,
            Self::Login => Text::Login,
            Self::Signup => Text::Signup,
            Self::Cart => Text::Cart,
            Self::Checkout => Text::Checkout,
            Self::Account => Text::Account,
            Self::Deals => Text::Deals,
            Self::Compare => Text::Compare,
            Self::Downloads => Text::Downloads,
            Self::Lookbook => Text::Lookbook,
            Self::Unknown => return None,
        })
    }
}

impl fmt::Display for PageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed storefront path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub store_id: String,
    pub role: PageRole,
    /// Raw product id for [`PageRole::ProductDetail`].
    pub product_id: Option<String>,
    /// Everything after the store id, without leading or trailing slashes.
    pub segment: String,
}

impl Route {
    /// Parse `/store/:id[/...]`. Query strings and fragments are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError`] when the path is outside `/store/` or has no
    /// store id.
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let bare = path.split(['?', '#']).next().unwrap_or_default();
        let mut parts = bare.split('/').filter(|p| !p.is_empty());

        if parts.next() != Some("store") {
            return Err(RouteError::NotAStorefrontPath(path.to_string()));
        }
        let store_id = parts
            .next()
            .ok_or_else(|| RouteError::MissingStoreId(path.to_string()))?
            .to_string();

        let rest: Vec<&str> = parts.collect();
        let (role, product_id) = match rest.as_slice() {
            [] => (PageRole::Home, None),
            ["product", id] => (PageRole::ProductDetail, Some((*id).to_string())),
            ["product"] => (PageRole::ProductDetail, None),
            [single] => (PageRole::from_segment(single), None),
            _ => (PageRole::Unknown, None),
        };

        Ok(Self {
            store_id,
            role,
            product_id,
            segment: rest.join("/"),
        })
    }

    /// Path for a role under a store, the inverse of [`parse`](Self::parse).
    #[must_use]
    pub fn path_for(store_id: &str, role: PageRole) -> String {
        match role {
            PageRole::Home | PageRole::Unknown => format!("/store/{store_id}"),
            PageRole::ProductDetail => format!("/store/{store_id}/product"),
            other => format!("/store/{store_id}/{other}"),
        }
    }
}

/// Renders a page body.
pub type PageView = fn(&PageContext<'_>) -> String;

/// One registration in a theme's page table.
#[derive(Debug, Clone, Copy)]
pub struct ThemePage {
    pub role: PageRole,
    /// Component name, e.g. `TechProducts`.
    pub name: &'static str,
    pub view: PageView,
}

/// Which step of the fallback chain produced a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageSource {
    /// The theme registers this role.
    Dedicated,
    /// Shared page for the role.
    RoleFallback,
    /// The theme's home page.
    ThemeHome,
    /// Shared home page, for a theme without its own.
    GenericHome,
}

/// Result of a table lookup.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedPage {
    pub role: PageRole,
    pub name: &'static str,
    pub view: PageView,
    pub source: PageSource,
}

impl ResolvedPage {
    const fn from_page(page: &ThemePage, source: PageSource) -> Self {
        Self {
            role: page.role,
            name: page.name,
            view: page.view,
            source,
        }
    }

    /// Render with the given context.
    #[must_use]
    pub fn render(&self, ctx: &PageContext<'_>) -> String {
        (self.view)(ctx)
    }
}

/// Static (theme, role) → page lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteTable;

impl RouteTable {
    /// A theme's own registrations.
    #[must_use]
    pub const fn pages(theme: ThemeId) -> &'static [ThemePage] {
        match theme {
            ThemeId::Minimal => pages::minimal::PAGES,
            ThemeId::Tech => pages::tech::PAGES,
            ThemeId::Modern => pages::modern::PAGES,
            ThemeId::Luxe => pages::luxe::PAGES,
            ThemeId::Vibrant => pages::vibrant::PAGES,
            ThemeId::Appliances => pages::appliances::PAGES,
            ThemeId::Toys => pages::toys::PAGES,
            ThemeId::Software => pages::software::PAGES,
        }
    }

    /// Whether a theme registers its own page for a role.
    #[must_use]
    pub fn has_dedicated(theme: ThemeId, role: PageRole) -> bool {
        Self::pages(theme).iter().any(|p| p.role == role)
    }

    /// Page for a role under a theme, following the fallback chain.
    #[must_use]
    pub fn resolve(theme: ThemeId, role: PageRole) -> ResolvedPage {
        let own = Self::pages(theme);
        let find = |wanted: PageRole, pages: &'static [ThemePage]| {
            pages.iter().find(|p| p.role == wanted)
        };

        let resolved = if let Some(page) = find(role, own) {
            ResolvedPage::from_page(page, PageSource::Dedicated)
        } else if let Some(page) = find(role, pages::generic::PAGES).filter(|_| role.is_core()) {
            ResolvedPage::from_page(page, PageSource::RoleFallback)
        } else if let Some(page) = find(PageRole::Home, own) {
            ResolvedPage::from_page(page, PageSource::ThemeHome)
        } else {
            ResolvedPage::from_page(&pages::generic::HOME, PageSource::GenericHome)
        };

        trace!(
            theme.id = %theme,
            route.role = %role,
            page = resolved.name,
            source = ?resolved.source,
            "Page resolved"
        );
        resolved
    }
}
