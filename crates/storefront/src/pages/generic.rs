//! Shared pages used when a theme has no page of its own for a core role.

use super::{PageContext, cart_summary, form, hero, join, product_detail, product_rows, section};
use crate::i18n::Text;
use crate::render::Tone;
use crate::routes::{PageRole, ThemePage};

pub const HOME: ThemePage = ThemePage {
    role: PageRole::Home,
    name: "GenericHome",
    view: home,
};

pub const PAGES: &[ThemePage] = &[
    HOME,
    ThemePage {
        role: PageRole::Products,
        name: "GenericProducts",
        view: products,
    },
    ThemePage {
        role: PageRole::ProductDetail,
        name: "GenericProductDetail",
        view: product,
    },
    ThemePage {
        role: PageRole::About,
        name: "GenericAbout",
        view: about,
    },
    ThemePage {
        role: PageRole::Contact,
        name: "GenericContact",
        view: contact,
    },
    ThemePage {
        role: PageRole::Login,
        name: "GenericLogin",
        view: login,
    },
    ThemePage {
        role: PageRole::Signup,
        name: "GenericSignup",
        view: signup,
    },
    ThemePage {
        role: PageRole::Cart,
        name: "GenericCart",
        view: cart,
    },
    ThemePage {
        role: PageRole::Checkout,
        name: "GenericCheckout",
        view: checkout,
    },
    ThemePage {
        role: PageRole::Account,
        name: "GenericAccount",
        view: account,
    },
];

fn home(ctx: &PageContext<'_>) -> String {
    let mut lines = hero(ctx, true);
    lines.push(String::new());
    lines.extend(section(ctx, ctx.t(Text::FeaturedProducts)));
    lines.extend(product_rows(ctx, ctx.featured(4)));
    join(lines)
}

fn products(ctx: &PageContext<'_>) -> String {
    let mut lines = section(ctx, ctx.t(Text::Products));
    lines.extend(product_rows(ctx, &ctx.store.products));
    join(lines)
}

fn product(ctx: &PageContext<'_>) -> String {
    join(product_detail(ctx))
}

fn about(ctx: &PageContext<'_>) -> String {
    let p = ctx.painter;
    let mut lines = section(ctx, ctx.t(Text::About));
    lines.push(p.line(&p.heading(ctx.store_name())));
    lines.extend(p.paragraph(&ctx.store.description, Tone::Text));
    join(lines)
}

fn contact(ctx: &PageContext<'_>) -> String {
    let mut lines = section(ctx, ctx.t(Text::Contact));
    lines.extend(form(ctx, &[Text::Name, Text::Email, Text::Message], Text::Send));
    join(lines)
}

fn login(ctx: &PageContext<'_>) -> String {
    let mut lines = section(ctx, ctx.t(Text::Login));
    lines.extend(form(ctx, &[Text::Email, Text::Password], Text::SignIn));
    join(lines)
}

fn signup(ctx: &PageContext<'_>) -> String {
    let mut lines = section(ctx, ctx.t(Text::Signup));
    lines.extend(form(
        ctx,
        &[Text::Name, Text::Email, Text::Password],
        Text::CreateAccount,
    ));
    join(lines)
}

fn cart(ctx: &PageContext<'_>) -> String {
    let mut lines = section(ctx, ctx.t(Text::Cart));
    lines.extend(cart_summary(ctx));
    join(lines)
}

fn checkout(ctx: &PageContext<'_>) -> String {
    let p = ctx.painter;
    let mut lines = section(ctx, ctx.t(Text::Checkout));
    lines.extend(cart_summary(ctx));
    if !ctx.cart.is_empty() {
        lines.push(String::new());
        lines.push(p.line(&p.badge(ctx.t(Text::PlaceOrder))));
    }
    join(lines)
}

fn account(ctx: &PageContext<'_>) -> String {
    let p = ctx.painter;
    let mut lines = section(ctx, ctx.t(Text::Account));
    lines.push(p.line(&p.heading(ctx.t(Text::Orders))));
    lines.push(p.line(&p.muted(ctx.t(Text::ComingSoon))));
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
    fn every_page_names_its_role() {
        let store = store();
        let cart = Cart::new();
        let painter = painter(Locale::En);
        for page in PAGES {
            let route = Route::parse(&Route::path_for("s1", page.role)).unwrap();
            let ctx = context(&store, &route, &cart, &painter, ThemeId::Minimal, Locale::En);
            let body = (page.view)(&ctx);
            assert!(!body.trim().is_empty(), "{} rendered nothing", page.name);
            assert!(page.name.starts_with("Generic"));
        }
    }

    #[test]
    fn home_mentions_store() {
        let store = store();
        let cart = Cart::new();
        let painter = painter(Locale::En);
        let route = Route::parse("/store/s1").unwrap();
        let ctx = context(&store, &route, &cart, &painter, ThemeId::Minimal, Locale::En);
        assert!(home(&ctx).contains("Welcome to Test Shop"));
    }
}
