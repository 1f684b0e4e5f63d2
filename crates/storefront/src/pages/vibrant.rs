//! Vibrant: loud bands, badges and deals.

use super::{PageContext, cart_summary, join, product_cards, product_rows};
use crate::data::Product;
use crate::i18n::Text;
use crate::render::Tone;
use crate::routes::{PageRole, ThemePage};

pub const PAGES: &[ThemePage] = &[
    ThemePage {
        role: PageRole::Home,
        name: "VibrantHome",
        view: home,
    },
    ThemePage {
        role: PageRole::Products,
        name: "VibrantProducts",
        view: products,
    },
    ThemePage {
        role: PageRole::Deals,
        name: "VibrantDeals",
        view: deals,
    },
    ThemePage {
        role: PageRole::Cart,
        name: "VibrantCart",
        view: cart,
    },
];

/// Discount shown for a product on the deals page: 10-40% by id.
fn discount_percent(product: &Product) -> u64 {
    10 + u64::from(product.id % 4) * 10
}

fn banner(ctx: &PageContext<'_>, text: &str) -> Vec<String> {
    let p = ctx.painter;
    vec![p.band(&text.to_uppercase()), String::new()]
}

fn home(ctx: &PageContext<'_>) -> String {
    let p = ctx.painter;
    let mut lines = banner(ctx, &format!("{} {}!", ctx.t(Text::Welcome), ctx.store_name()));
    lines.push(p.line(&format!(
        "{}  {}",
        p.badge(ctx.t(Text::ShopNow)),
        p.badge(ctx.t(Text::Deals))
    )));
    lines.push(String::new());
    lines.extend(product_cards(ctx, ctx.featured(4), 2));
    join(lines)
}

fn products(ctx: &PageContext<'_>) -> String {
    let mut lines = banner(ctx, ctx.t(Text::Products));
    lines.extend(product_cards(ctx, &ctx.store.products, 2));
    join(lines)
}

fn deals(ctx: &PageContext<'_>) -> String {
    let p = ctx.painter;
    let mut lines = banner(ctx, ctx.t(Text::Deals));
    let on_sale: Vec<Product> = ctx
        .store
        .products
        .iter()
        .filter(|item| item.in_stock())
        .map(|item| {
            let off = discount_percent(item);
            Product {
                name: format!("{} (-{off}%)", item.name),
                price_cents: item.price_cents * (100 - off) / 100,
                ..item.clone()
            }
        })
        .collect();
    if on_sale.is_empty() {
        lines.push(p.line(&p.muted(ctx.t(Text::ComingSoon))));
    } else {
        lines.extend(product_rows(ctx, &on_sale));
    }
    lines.push(String::new());
    lines.push(p.line(&p.paint(ctx.t(Text::FreeShipping), Tone::Success)));
    join(lines)
}

fn cart(ctx: &PageContext<'_>) -> String {
    let mut lines = banner(ctx, ctx.t(Text::Cart));
    lines.extend(cart_summary(ctx));
    join(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::pages::test_support::{context, painter, store};
    use crate::routes::Route;
    use crate::store::Cart;
    use store_theme::ThemeId;

    #[test]
    fn deals_discount_in_stock_items_only() {
        let store = store();
        let cart = Cart::new();
        let painter = painter(Locale::En);
        let route = Route::parse("/store/s1/deals").unwrap();
        let ctx = context(&store, &route, &cart, &painter, ThemeId::Vibrant, Locale::En);

        let body = deals(&ctx);
        // Widget 1 has no stock.
        assert!(!body.contains("Widget 1 "));
        // Widget 2: 20.00 at 30% off.
        assert!(body.contains("Widget 2 (-30%)"));
        assert!(body.contains("14.00 USD"));
    }
}
