//! Tech: dense spec tables, monospace-friendly columns.

use super::{PageContext, cart_summary, join, product_detail, section};
use crate::data::Product;
use crate::i18n::Text;
use crate::render::{Tone, pad_to};
use crate::routes::{PageRole, ThemePage};

pub const PAGES: &[ThemePage] = &[
    ThemePage {
        role: PageRole::Home,
        name: "TechHome",
        view: home,
    },
    ThemePage {
        role: PageRole::Products,
        name: "TechProducts",
        view: products,
    },
    ThemePage {
        role: PageRole::ProductDetail,
        name: "TechProductDetail",
        view: product,
    },
    ThemePage {
        role: PageRole::Compare,
        name: "TechCompare",
        view: compare,
    },
    ThemePage {
        role: PageRole::Cart,
        name: "TechCart",
        view: cart,
    },
    ThemePage {
        role: PageRole::Checkout,
        name: "TechCheckout",
        view: checkout,
    },
];

/// `ID  NAME  PRICE  RATING  STOCK` table.
fn spec_table(ctx: &PageContext<'_>, products: &[Product]) -> Vec<String> {
    let p = ctx.painter;
    let name_width = ctx.width().saturating_sub(36).max(12);
    let header = format!(
        "{}{}{}{}{}",
        pad_to("ID", 5),
        pad_to("NAME", name_width),
        pad_to("PRICE", 14),
        pad_to("RATING", 8),
        "STOCK"
    );
    let mut lines = vec![p.line(&p.muted(&header)), p.rule('─')];
    for product in products {
        let name: String = product.name.chars().take(name_width - 1).collect();
        let row = format!(
            "{}{}{}{}{}",
            pad_to(&product.id.to_string(), 5),
            pad_to(&name, name_width),
            pad_to(&ctx.store.price(product.price_cents), 14),
            pad_to(&product.rating_label(), 8),
            product.stock
        );
        let tone = if product.in_stock() { Tone::Text } else { Tone::Muted };
        lines.push(p.line(&p.paint(&row, tone)));
    }
    lines
}

fn home(ctx: &PageContext<'_>) -> String {
    let p = ctx.painter;
    let mut lines = vec![
        p.band(&format!("> {}", ctx.store_name())),
        String::new(),
        p.line(&p.paint(&ctx.store.description, Tone::Accent)),
        String::new(),
    ];
    lines.extend(section(ctx, ctx.t(Text::FeaturedProducts)));
    lines.extend(spec_table(ctx, ctx.featured(5)));
    join(lines)
}

fn products(ctx: &PageContext<'_>) -> String {
    let mut lines = section(ctx, ctx.t(Text::Products));
    lines.extend(spec_table(ctx, &ctx.store.products));
    join(lines)
}

fn product(ctx: &PageContext<'_>) -> String {
    let p = ctx.painter;
    let mut lines = product_detail(ctx);
    if let Some(item) = ctx.product() {
        lines.push(String::new());
        lines.push(p.line(&p.muted(&format!("SKU {}-{:04}", ctx.store_id(), item.id))));
    }
    join(lines)
}

fn compare(ctx: &PageContext<'_>) -> String {
    let p = ctx.painter;
    let mut picks: Vec<&Product> = ctx.store.products.iter().collect();
    picks.sort_by(|a, b| b.rating.cmp(&a.rating).then(a.price_cents.cmp(&b.price_cents)));
    picks.truncate(3);

    let mut lines = section(ctx, ctx.t(Text::Compare));
    let cell = (ctx.width() / 4).max(10);
    let mut header = pad_to("", cell);
    let mut price = pad_to(ctx.t(Text::Total), cell);
    let mut rating = pad_to("★", cell);
    let mut stock = pad_to(ctx.t(Text::InStock), cell);
    for item in &picks {
        let name: String = item.name.chars().take(cell - 1).collect();
        header.push_str(&pad_to(&name, cell));
        price.push_str(&pad_to(&ctx.store.price(item.price_cents), cell));
        rating.push_str(&pad_to(&item.rating_label(), cell));
        stock.push_str(&pad_to(if item.in_stock() { "✓" } else { "✗" }, cell));
    }
    lines.push(p.line(&p.heading(header.trim_end())));
    lines.push(p.rule('─'));
    for row in [price, rating, stock] {
        lines.push(p.line(row.trim_end()));
    }
    join(lines)
}

fn cart(ctx: &PageContext<'_>) -> String {
    let mut lines = section(ctx, &format!("{} [{}]", ctx.t(Text::Cart), ctx.cart.item_count()));
    lines.extend(cart_summary(ctx));
    join(lines)
}

fn checkout(ctx: &PageContext<'_>) -> String {
    let p = ctx.painter;
    let mut lines = section(ctx, ctx.t(Text::Checkout));
    lines.extend(cart_summary(ctx));
    if !ctx.cart.is_empty() {
        lines.push(String::new());
        lines.push(p.line(&p.badge(&format!("$ {}", ctx.t(Text::PlaceOrder)))));
    }
    join(lines)
}
