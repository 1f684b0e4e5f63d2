//! Appliances: integrated chrome, spec sheets and energy labels.
//!
//! Pages draw their own header and footer; the shell adds nothing.

use super::{PageContext, cart_summary, copyright, form, join, nav, product_detail, section};
use crate::data::Product;
use crate::i18n::Text;
use crate::render::{Tone, pad_to};
use crate::routes::{PageRole, ThemePage};

pub const PAGES: &[ThemePage] = &[
    ThemePage {
        role: PageRole::Home,
        name: "AppliancesHome",
        view: home,
    },
    ThemePage {
        role: PageRole::Products,
        name: "AppliancesProducts",
        view: products,
    },
    ThemePage {
        role: PageRole::ProductDetail,
        name: "AppliancesProductDetail",
        view: product,
    },
    ThemePage {
        role: PageRole::Compare,
        name: "AppliancesCompare",
        view: compare,
    },
    ThemePage {
        role: PageRole::Contact,
        name: "AppliancesContact",
        view: contact,
    },
    ThemePage {
        role: PageRole::Cart,
        name: "AppliancesCart",
        view: cart,
    },
    ThemePage {
        role: PageRole::Checkout,
        name: "AppliancesCheckout",
        view: checkout,
    },
];

const NAV: &[PageRole] = &[
    PageRole::Home,
    PageRole::Products,
    PageRole::Compare,
    PageRole::Contact,
    PageRole::Cart,
];

/// EU-style energy class derived from the rating.
fn energy_class(product: &Product) -> &'static str {
    match product.rating {
        45.. => "A+++",
        40..=44 => "A++",
        35..=39 => "A+",
        30..=34 => "A",
        _ => "B",
    }
}

fn frame(ctx: &PageContext<'_>, body: Vec<String>) -> String {
    let p = ctx.painter;
    let mut lines = vec![
        p.band(&format!("⚡ {}", ctx.store_name())),
        nav(ctx, NAV, "  |  "),
        p.rule('═'),
        String::new(),
    ];
    lines.extend(body);
    lines.extend([
        String::new(),
        p.rule('═'),
        p.line(&p.muted(&format!("{} · {}", ctx.t(Text::FreeShipping), ctx.store.currency))),
        p.line(&copyright(ctx)),
    ]);
    join(lines)
}

/// Wrap a shared page body in this theme's chrome.
#[must_use]
pub fn wrap(ctx: &PageContext<'_>, body: &str) -> String {
    frame(ctx, vec![body.to_string()])
}

fn listing(ctx: &PageContext<'_>, products: &[Product]) -> Vec<String> {
    let p = ctx.painter;
    products
        .iter()
        .map(|item| {
            let label = format!("[{}] {}", energy_class(item), item.name);
            p.leader(&label, &p.paint(&ctx.store.price(item.price_cents), Tone::Accent))
        })
        .collect()
}

fn home(ctx: &PageContext<'_>) -> String {
    let p = ctx.painter;
    let mut body = vec![
        p.line(&p.title(&format!("{} {}", ctx.t(Text::Welcome), ctx.store_name()))),
        p.line(&p.muted(&ctx.store.description)),
        String::new(),
    ];
    body.extend(section(ctx, ctx.t(Text::FeaturedProducts)));
    body.extend(listing(ctx, ctx.featured(4)));
    frame(ctx, body)
}

fn products(ctx: &PageContext<'_>) -> String {
    let mut body = section(ctx, ctx.t(Text::Products));
    body.extend(listing(ctx, &ctx.store.products));
    frame(ctx, body)
}

fn product(ctx: &PageContext<'_>) -> String {
    let p = ctx.painter;
    let mut body = product_detail(ctx);
    if let Some(item) = ctx.product() {
        body.push(String::new());
        body.push(p.leader("Energy", energy_class(item)));
        body.push(p.leader("Warranty", "2y"));
    }
    frame(ctx, body)
}

fn compare(ctx: &PageContext<'_>) -> String {
    let p = ctx.painter;
    let mut body = section(ctx, ctx.t(Text::Compare));
    let name_width = ctx.width().saturating_sub(24).max(12);
    for item in ctx.featured(4) {
        let name: String = item.name.chars().take(name_width - 1).collect();
        body.push(p.line(&format!(
            "{}{}{}",
            pad_to(&name, name_width),
            pad_to(energy_class(item), 8),
            ctx.store.price(item.price_cents)
        )));
    }
    frame(ctx, body)
}

fn contact(ctx: &PageContext<'_>) -> String {
    let mut body = section(ctx, ctx.t(Text::Contact));
    body.extend(form(ctx, &[Text::Name, Text::Email, Text::Message], Text::Send));
    frame(ctx, body)
}

fn cart(ctx: &PageContext<'_>) -> String {
    let mut body = section(ctx, ctx.t(Text::Cart));
    body.extend(cart_summary(ctx));
    frame(ctx, body)
}

fn checkout(ctx: &PageContext<'_>) -> String {
    let p = ctx.painter;
    let mut body = section(ctx, ctx.t(Text::Checkout));
    body.extend(cart_summary(ctx));
    if !ctx.cart.is_empty() {
        body.push(String::new());
        body.push(p.line(&p.badge(ctx.t(Text::PlaceOrder))));
    }
    frame(ctx, body)
}
