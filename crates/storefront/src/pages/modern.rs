//! Modern: card grids and account-centric pages.

use super::{PageContext, form, hero, join, product_cards, section};
use crate::i18n::Text;
use crate::render::Tone;
use crate::routes::{PageRole, ThemePage};

pub const PAGES: &[ThemePage] = &[
    ThemePage {
        role: PageRole::Home,
        name: "ModernHome",
        view: home,
    },
    ThemePage {
        role: PageRole::Products,
        name: "ModernProducts",
        view: products,
    },
    ThemePage {
        role: PageRole::About,
        name: "ModernAbout",
        view: about,
    },
    ThemePage {
        role: PageRole::Login,
        name: "ModernLogin",
        view: login,
    },
    ThemePage {
        role: PageRole::Signup,
        name: "ModernSignup",
        view: signup,
    },
    ThemePage {
        role: PageRole::Account,
        name: "ModernAccount",
        view: account,
    },
];

fn home(ctx: &PageContext<'_>) -> String {
    let mut lines = hero(ctx, true);
    lines.push(String::new());
    lines.extend(section(ctx, ctx.t(Text::FeaturedProducts)));
    lines.extend(product_cards(ctx, ctx.featured(6), 3));
    join(lines)
}

fn products(ctx: &PageContext<'_>) -> String {
    let mut lines = section(ctx, ctx.t(Text::Products));
    lines.extend(product_cards(ctx, &ctx.store.products, 3));
    join(lines)
}

fn about(ctx: &PageContext<'_>) -> String {
    let p = ctx.painter;
    let since = ctx.store.created_at.format("%B %Y").to_string();
    let mut lines = section(ctx, ctx.t(Text::About));
    lines.push(p.band(ctx.store_name()));
    lines.push(String::new());
    lines.extend(p.paragraph(&ctx.store.description, Tone::Text));
    lines.push(String::new());
    lines.push(p.line(&p.muted(&since)));
    join(lines)
}

fn card(ctx: &PageContext<'_>, title: Text, body: Vec<String>) -> String {
    let p = ctx.painter;
    let mut lines = vec![p.rule('━'), p.line(&p.title(ctx.t(title))), String::new()];
    lines.extend(body);
    lines.push(p.rule('━'));
    join(lines)
}

fn login(ctx: &PageContext<'_>) -> String {
    card(ctx, Text::Login, form(ctx, &[Text::Email, Text::Password], Text::SignIn))
}

fn signup(ctx: &PageContext<'_>) -> String {
    card(
        ctx,
        Text::Signup,
        form(
            ctx,
            &[Text::Name, Text::Email, Text::Password],
            Text::CreateAccount,
        ),
    )
}

fn account(ctx: &PageContext<'_>) -> String {
    let p = ctx.painter;
    let body = vec![
        p.leader(ctx.t(Text::Cart), &ctx.cart.item_count().to_string()),
        p.leader(ctx.t(Text::Orders), "0"),
        String::new(),
        p.line(&p.muted(ctx.t(Text::ComingSoon))),
    ];
    card(ctx, Text::Account, body)
}
