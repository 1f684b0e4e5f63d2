//! Toys: integrated chrome, playful and colourful.

use super::{PageContext, cart_summary, copyright, form, join, nav, product_cards};
use crate::i18n::Text;
use crate::render::Tone;
use crate::routes::{PageRole, ThemePage};

pub const PAGES: &[ThemePage] = &[
    ThemePage {
        role: PageRole::Home,
        name: "ToysHome",
        view: home,
    },
    ThemePage {
        role: PageRole::Products,
        name: "ToysProducts",
        view: products,
    },
    ThemePage {
        role: PageRole::Deals,
        name: "ToysDeals",
        view: deals,
    },
    ThemePage {
        role: PageRole::Cart,
        name: "ToysCart",
        view: cart,
    },
    ThemePage {
        role: PageRole::Login,
        name: "ToysLogin",
        view: login,
    },
];

const NAV: &[PageRole] = &[
    PageRole::Home,
    PageRole::Products,
    PageRole::Deals,
    PageRole::Cart,
    PageRole::Login,
];

const CONFETTI: [Tone; 4] = [Tone::Primary, Tone::Accent, Tone::Success, Tone::Warning];

fn confetti(ctx: &PageContext<'_>) -> String {
    let p = ctx.painter;
    let stars: Vec<String> = (0..ctx.width() / 2)
        .map(|i| p.paint("✦", CONFETTI[i % CONFETTI.len()]))
        .collect();
    stars.join(" ")
}

fn frame(ctx: &PageContext<'_>, title: &str, body: Vec<String>) -> String {
    let p = ctx.painter;
    let mut lines = vec![
        confetti(ctx),
        p.center(&p.title(&format!("★ {} ★", ctx.store_name()))),
        p.center(&nav(ctx, NAV, " ✦ ")),
        confetti(ctx),
        String::new(),
    ];
    if !title.is_empty() {
        lines.extend([p.line(&p.heading(title)), String::new()]);
    }
    lines.extend(body);
    lines.extend([String::new(), confetti(ctx), p.center(&copyright(ctx))]);
    join(lines)
}

/// Wrap a shared page body in this theme's chrome. Shared pages carry their
/// own heading.
#[must_use]
pub fn wrap(ctx: &PageContext<'_>, body: &str) -> String {
    frame(ctx, "", vec![body.to_string()])
}

fn home(ctx: &PageContext<'_>) -> String {
    let p = ctx.painter;
    let mut body = p.paragraph(&ctx.store.description, Tone::Text);
    body.push(String::new());
    body.push(p.line(&p.badge(&format!("{} ▶", ctx.t(Text::ShopNow)))));
    body.push(String::new());
    body.extend(product_cards(ctx, ctx.featured(4), 2));
    frame(ctx, &format!("{} {}!", ctx.t(Text::Welcome), ctx.store_name()), body)
}

fn products(ctx: &PageContext<'_>) -> String {
    frame(ctx, ctx.t(Text::Products), product_cards(ctx, &ctx.store.products, 2))
}

fn deals(ctx: &PageContext<'_>) -> String {
    let p = ctx.painter;
    let mut picks: Vec<_> = ctx.store.products.iter().filter(|item| item.in_stock()).collect();
    picks.sort_by_key(|item| item.price_cents);
    let body = picks
        .iter()
        .take(5)
        .map(|item| {
            p.leader(
                &format!("🎁 {}", item.name),
                &p.paint(&ctx.store.price(item.price_cents), Tone::Success),
            )
        })
        .collect();
    frame(ctx, ctx.t(Text::Deals), body)
}

fn cart(ctx: &PageContext<'_>) -> String {
    frame(ctx, ctx.t(Text::Cart), cart_summary(ctx))
}

fn login(ctx: &PageContext<'_>) -> String {
    frame(
        ctx,
        ctx.t(Text::Login),
        form(ctx, &[Text::Email, Text::Password], Text::SignIn),
    )
}
