//! Minimal: whitespace, one column, no ornament.

use super::{PageContext, cart_summary, form, join, product_detail, product_rows};
use crate::i18n::Text;
use crate::render::Tone;
use crate::routes::{PageRole, ThemePage};

pub const PAGES: &[ThemePage] = &[
    ThemePage {
        role: PageRole::Home,
        name: "MinimalHome",
        view: home,
    },
    ThemePage {
        role: PageRole::Products,
        name: "MinimalProducts",
        view: products,
    },
    ThemePage {
        role: PageRole::ProductDetail,
        name: "MinimalProductDetail",
        view: product,
    },
    ThemePage {
        role: PageRole::About,
        name: "MinimalAbout",
        view: about,
    },
    ThemePage {
        role: PageRole::Contact,
        name: "MinimalContact",
        view: contact,
    },
    ThemePage {
        role: PageRole::Cart,
        name: "MinimalCart",
        view: cart,
    },
];

fn heading(ctx: &PageContext<'_>, text: &str) -> Vec<String> {
    let p = ctx.painter;
    vec![p.line(&p.heading(&text.to_lowercase())), String::new()]
}

fn home(ctx: &PageContext<'_>) -> String {
    let p = ctx.painter;
    let mut lines = vec![String::new(), p.line(&p.title(ctx.store_name())), String::new()];
    lines.extend(p.paragraph(&ctx.store.description, Tone::Muted));
    lines.push(String::new());
    lines.extend(product_rows(ctx, ctx.featured(3)));
    lines.push(String::new());
    lines.push(p.line(&p.muted(&format!("{} →", ctx.t(Text::ShopNow)))));
    join(lines)
}

fn products(ctx: &PageContext<'_>) -> String {
    let mut lines = heading(ctx, ctx.t(Text::Products));
    lines.extend(product_rows(ctx, &ctx.store.products));
    join(lines)
}

fn product(ctx: &PageContext<'_>) -> String {
    join(product_detail(ctx))
}

fn about(ctx: &PageContext<'_>) -> String {
    let p = ctx.painter;
    let mut lines = heading(ctx, ctx.t(Text::About));
    lines.extend(p.paragraph(&ctx.store.description, Tone::Text));
    lines.push(String::new());
    lines.push(p.line(&p.muted(&format!(
        "{} · {}",
        ctx.store.currency,
        ctx.store.language.native_name()
    ))));
    join(lines)
}

fn contact(ctx: &PageContext<'_>) -> String {
    let mut lines = heading(ctx, ctx.t(Text::Contact));
    lines.extend(form(ctx, &[Text::Email, Text::Message], Text::Send));
    join(lines)
}

fn cart(ctx: &PageContext<'_>) -> String {
    let mut lines = heading(ctx, ctx.t(Text::Cart));
    lines.extend(cart_summary(ctx));
    join(lines)
}
