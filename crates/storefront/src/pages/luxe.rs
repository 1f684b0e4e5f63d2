//! Luxe: centred, spacious, editorial.

use super::{PageContext, join, product_detail};
use crate::data::Product;
use crate::i18n::Text;
use crate::render::Tone;
use crate::routes::{PageRole, ThemePage};

pub const PAGES: &[ThemePage] = &[
    ThemePage {
        role: PageRole::Home,
        name: "LuxeHome",
        view: home,
    },
    ThemePage {
        role: PageRole::Products,
        name: "LuxeProducts",
        view: products,
    },
    ThemePage {
        role: PageRole::ProductDetail,
        name: "LuxeProductDetail",
        view: product,
    },
    ThemePage {
        role: PageRole::Lookbook,
        name: "LuxeLookbook",
        view: lookbook,
    },
    ThemePage {
        role: PageRole::About,
        name: "LuxeAbout",
        view: about,
    },
];

/// Letter-spaced uppercase, e.g. `S A F F R O N`.
fn spaced(text: &str) -> String {
    text.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

fn ornament(ctx: &PageContext<'_>) -> String {
    let p = ctx.painter;
    p.center(&p.paint("— ◆ —", Tone::Accent))
}

fn showcase(ctx: &PageContext<'_>, products: &[Product]) -> Vec<String> {
    let p = ctx.painter;
    let mut lines = Vec::new();
    for item in products {
        lines.push(p.center(&p.heading(&item.name)));
        lines.push(p.center(&p.muted(&ctx.store.price(item.price_cents))));
        lines.push(String::new());
    }
    lines
}

fn home(ctx: &PageContext<'_>) -> String {
    let p = ctx.painter;
    let mut lines = vec![
        String::new(),
        p.center(&p.title(&spaced(ctx.store_name()))),
        String::new(),
        p.center(&p.muted(&ctx.store.description)),
        String::new(),
        ornament(ctx),
        String::new(),
    ];
    lines.extend(showcase(ctx, ctx.featured(3)));
    join(lines)
}

fn products(ctx: &PageContext<'_>) -> String {
    let p = ctx.painter;
    let mut lines = vec![p.center(&p.title(&spaced(ctx.t(Text::Products)))), String::new()];
    lines.extend(showcase(ctx, &ctx.store.products));
    join(lines)
}

fn product(ctx: &PageContext<'_>) -> String {
    let mut lines = vec![ornament(ctx), String::new()];
    lines.extend(product_detail(ctx));
    join(lines)
}

fn lookbook(ctx: &PageContext<'_>) -> String {
    let p = ctx.painter;
    let mut lines = vec![p.center(&p.title(&spaced(ctx.t(Text::Lookbook)))), String::new()];
    for (chapter, looks) in ctx.store.products.chunks(2).enumerate() {
        lines.push(p.center(&p.paint(&format!("{:02}", chapter + 1), Tone::Accent)));
        let names: Vec<&str> = looks.iter().map(|item| item.name.as_str()).collect();
        lines.push(p.center(&p.heading(&names.join("  ·  "))));
        lines.push(String::new());
    }
    join(lines)
}

fn about(ctx: &PageContext<'_>) -> String {
    let p = ctx.painter;
    let mut lines = vec![p.center(&p.title(&spaced(ctx.t(Text::About)))), String::new()];
    lines.extend(
        textwrap::wrap(&ctx.store.description, ctx.width() * 2 / 3)
            .iter()
            .map(|line| p.center(&p.paint(line, Tone::Text))),
    );
    lines.push(String::new());
    lines.push(ornament(ctx));
    join(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaced_caps() {
        assert_eq!(spaced("Luxe"), "L U X E");
        assert_eq!(spaced(""), "");
    }
}
