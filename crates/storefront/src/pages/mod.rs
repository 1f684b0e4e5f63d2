//! Page views for every theme.
//!
//! Each theme module exports a `PAGES` table of
//! [`ThemePage`](crate::routes::ThemePage) registrations consumed by
//! [`RouteTable`](crate::routes::RouteTable). Themes are allowed to be
//! incomplete; [`generic`] holds the shared page for every core role.
//! Views are plain functions from a [`PageContext`] to rendered text.

pub mod appliances;
pub mod generic;
pub mod luxe;
pub mod minimal;
pub mod modern;
pub mod software;
pub mod tech;
pub mod toys;
pub mod vibrant;

use store_theme::ThemeId;

use crate::data::{Product, StoreRecord};
use crate::i18n::{Locale, Text};
use crate::render::{Painter, Tone, pad_to, visible_width};
use crate::routes::{PageRole, Route};
use crate::store::Cart;

/// Everything a page view may read.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub store: &'a StoreRecord,
    /// Theme being rendered (the preview theme while previewing).
    pub theme: ThemeId,
    pub route: &'a Route,
    pub cart: &'a Cart,
    pub painter: &'a Painter,
    pub locale: Locale,
}

impl<'a> PageContext<'a> {
    #[must_use]
    pub fn store_id(&self) -> &'a str {
        &self.store.id
    }

    #[must_use]
    pub fn store_name(&self) -> &'a str {
        &self.store.name
    }

    /// Translate a chrome string.
    #[must_use]
    pub const fn t(&self, key: Text) -> &'static str {
        self.locale.text(key)
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.painter.width()
    }

    /// Product named by the route, if it exists in this store.
    #[must_use]
    pub fn product(&self) -> Option<&'a Product> {
        self.route
            .product_id
            .as_deref()
            .and_then(|raw| self.store.product_by_slug(raw))
    }

    /// The first `n` products of the catalog.
    #[must_use]
    pub fn featured(&self, n: usize) -> &'a [Product] {
        let products = &self.store.products;
        &products[..n.min(products.len())]
    }

    /// Localized label for a role.
    #[must_use]
    pub fn role_label(&self, role: PageRole) -> &'static str {
        role.label().map_or("", |key| self.t(key))
    }
}

/// Join rendered lines into a page body.
#[must_use]
pub fn join(lines: Vec<String>) -> String {
    lines.join("\n")
}

// ============================================================================
// Shared building blocks
// ============================================================================

/// Section heading followed by a blank line.
pub fn section(ctx: &PageContext<'_>, title: &str) -> Vec<String> {
    let p = ctx.painter;
    vec![p.line(&p.heading(title)), String::new()]
}

/// Store greeting with the store tagline.
pub fn hero(ctx: &PageContext<'_>, call_to_action: bool) -> Vec<String> {
    let p = ctx.painter;
    let mut lines = vec![
        p.line(&p.title(&format!("{} {}", ctx.t(Text::Welcome), ctx.store_name()))),
    ];
    lines.extend(p.paragraph(&ctx.store.description, Tone::Muted));
    if call_to_action {
        lines.push(String::new());
        lines.push(p.line(&p.badge(ctx.t(Text::ShopNow))));
    }
    lines
}

fn stock_label(ctx: &PageContext<'_>, product: &Product) -> String {
    let p = ctx.painter;
    if product.in_stock() {
        p.paint(ctx.t(Text::InStock), Tone::Success)
    } else {
        p.paint(ctx.t(Text::OutOfStock), Tone::Error)
    }
}

/// One row per product: `#id name .... price`.
pub fn product_rows(ctx: &PageContext<'_>, products: &[Product]) -> Vec<String> {
    let p = ctx.painter;
    products
        .iter()
        .map(|product| {
            let label = format!("#{} {}", product.id, product.name);
            p.leader(&label, &p.paint(&ctx.store.price(product.price_cents), Tone::Accent))
        })
        .collect()
}

/// Products laid out as fixed-width cards, `columns` per row.
pub fn product_cards(ctx: &PageContext<'_>, products: &[Product], columns: usize) -> Vec<String> {
    let p = ctx.painter;
    let columns = columns.max(1);
    let cell = (ctx.width() / columns).max(12);
    let mut lines = Vec::new();

    for row in products.chunks(columns) {
        let mut names = String::new();
        let mut prices = String::new();
        let mut meta = String::new();
        for product in row {
            names.push_str(&fit(&p.heading(&product.name), &product.name, cell));
            let price = ctx.store.price(product.price_cents);
            prices.push_str(&fit(&p.paint(&price, Tone::Accent), &price, cell));
            let rating = product.rating_label();
            meta.push_str(&fit(&p.muted(&rating), &rating, cell));
        }
        lines.extend([
            p.line(names.trim_end()),
            p.line(prices.trim_end()),
            p.line(meta.trim_end()),
            String::new(),
        ]);
    }
    lines
}

/// Pad a styled cell to `width` using the plain text's width, truncating
/// text that would not fit.
fn fit(styled: &str, plain: &str, width: usize) -> String {
    if visible_width(plain) < width {
        pad_to(styled, width)
    } else {
        let mut cut = String::new();
        for ch in plain.chars() {
            if visible_width(&cut) + 2 >= width {
                break;
            }
            cut.push(ch);
        }
        pad_to(&format!("{cut}…"), width)
    }
}

/// Name, price, rating, stock and description of the routed product.
pub fn product_detail(ctx: &PageContext<'_>) -> Vec<String> {
    let p = ctx.painter;
    let Some(product) = ctx.product() else {
        return vec![p.line(&p.paint(ctx.t(Text::ProductNotFound), Tone::Warning))];
    };
    let mut lines = vec![
        p.line(&p.title(&product.name)),
        p.line(&p.muted(&product.category)),
        String::new(),
        p.line(&format!(
            "{}  {}  {}",
            p.paint(&ctx.store.price(product.price_cents), Tone::Accent),
            product.rating_label(),
            stock_label(ctx, product)
        )),
        String::new(),
    ];
    lines.extend(p.paragraph(&product.description, Tone::Text));
    lines.push(String::new());
    lines.push(p.line(&p.badge(ctx.t(Text::AddToCart))));
    lines
}

/// Cart lines and totals, or the empty-cart message.
pub fn cart_summary(ctx: &PageContext<'_>) -> Vec<String> {
    let p = ctx.painter;
    if ctx.cart.is_empty() {
        return vec![
            p.line(&p.muted(ctx.t(Text::EmptyCart))),
            String::new(),
            p.line(&p.badge(ctx.t(Text::ContinueShopping))),
        ];
    }

    let mut lines: Vec<String> = ctx
        .cart
        .lines()
        .iter()
        .filter_map(|line| {
            let product = ctx.store.product(line.product_id)?;
            let label = format!("{} × {}", product.name, line.quantity);
            let amount = product.price_cents * u64::from(line.quantity);
            Some(p.leader(&label, &ctx.store.price(amount)))
        })
        .collect();

    let shipping = ctx.cart.shipping(ctx.store);
    let shipping_label = if shipping == 0 {
        ctx.t(Text::FreeShipping).to_string()
    } else {
        ctx.store.price(shipping)
    };
    lines.push(p.rule('─'));
    lines.push(p.leader(ctx.t(Text::Subtotal), &ctx.store.price(ctx.cart.subtotal(ctx.store))));
    lines.push(p.leader(ctx.t(Text::Shipping), &shipping_label));
    lines.push(p.leader(
        &p.heading(ctx.t(Text::Total)),
        &p.heading(&ctx.store.price(ctx.cart.total(ctx.store))),
    ));
    lines
}

/// A labelled form with empty inputs and a submit button.
pub fn form(ctx: &PageContext<'_>, fields: &[Text], submit: Text) -> Vec<String> {
    let p = ctx.painter;
    let input = "_".repeat(ctx.width().min(36));
    let mut lines = Vec::new();
    for field in fields {
        lines.push(p.line(&p.heading(ctx.t(*field))));
        lines.push(p.line(&p.muted(&input)));
    }
    lines.push(String::new());
    lines.push(p.line(&p.badge(ctx.t(submit))));
    lines
}

/// Navigation bar listing `roles`, highlighting the current one.
pub fn nav(ctx: &PageContext<'_>, roles: &[PageRole], separator: &str) -> String {
    let p = ctx.painter;
    let items: Vec<String> = roles
        .iter()
        .map(|role| {
            let label = ctx.role_label(*role);
            if *role == ctx.route.role {
                p.paint(label, Tone::Primary)
            } else {
                p.muted(label)
            }
        })
        .collect();
    p.line(&items.join(separator))
}

/// Copyright line.
pub fn copyright(ctx: &PageContext<'_>) -> String {
    let year = ctx.store.created_at.format("%Y");
    ctx.painter.muted(&format!(
        "© {year} {}. {}.",
        ctx.store_name(),
        ctx.t(Text::AllRightsReserved)
    ))
}
