//! Software: integrated chrome, licences and downloads.

use super::{PageContext, cart_summary, copyright, form, join, nav, product_detail, section};
use crate::data::Product;
use crate::i18n::Text;
use crate::render::Tone;
use crate::routes::{PageRole, ThemePage};

pub const PAGES: &[ThemePage] = &[
    ThemePage {
        role: PageRole::Home,
        name: "SoftwareHome",
        view: home,
    },
    ThemePage {
        role: PageRole::Products,
        name: "SoftwareProducts",
        view: products,
    },
    ThemePage {
        role: PageRole::ProductDetail,
        name: "SoftwareProductDetail",
        view: product,
    },
    ThemePage {
        role: PageRole::Downloads,
        name: "SoftwareDownloads",
        view: downloads,
    },
    ThemePage {
        role: PageRole::Account,
        name: "SoftwareAccount",
        view: account,
    },
    ThemePage {
        role: PageRole::Checkout,
        name: "SoftwareCheckout",
        view: checkout,
    },
    ThemePage {
        role: PageRole::Login,
        name: "SoftwareLogin",
        view: login,
    },
    ThemePage {
        role: PageRole::Signup,
        name: "SoftwareSignup",
        view: signup,
    },
];

const NAV: &[PageRole] = &[
    PageRole::Home,
    PageRole::Products,
    PageRole::Downloads,
    PageRole::Account,
];

/// Version string derived from the product id, e.g. `v2.3.0`.
fn version(product: &Product) -> String {
    format!("v{}.{}.0", 1 + product.id / 3, product.id % 3 + product.id / 2)
}

fn frame(ctx: &PageContext<'_>, body: Vec<String>) -> String {
    let p = ctx.painter;
    let prompt = format!("~/{} $", ctx.store_id());
    let mut lines = vec![
        p.line(&format!(
            "{} {}",
            p.paint(&prompt, Tone::Success),
            p.title(ctx.store_name())
        )),
        nav(ctx, NAV, " · "),
        p.rule('─'),
        String::new(),
    ];
    lines.extend(body);
    lines.extend([String::new(), p.rule('─'), p.line(&copyright(ctx))]);
    join(lines)
}

/// Wrap a shared page body in this theme's chrome.
#[must_use]
pub fn wrap(ctx: &PageContext<'_>, body: &str) -> String {
    frame(ctx, vec![body.to_string()])
}

fn home(ctx: &PageContext<'_>) -> String {
    let p = ctx.painter;
    let mut body = vec![
        p.line(&p.heading(&format!("{} {}", ctx.t(Text::Welcome), ctx.store_name()))),
        p.line(&p.muted(&ctx.store.description)),
        String::new(),
    ];
    body.extend(section(ctx, ctx.t(Text::FeaturedProducts)));
    for item in ctx.featured(3) {
        body.push(p.leader(
            &format!("{} {}", item.name, p.muted(&version(item))),
            &p.paint(&ctx.store.price(item.price_cents), Tone::Accent),
        ));
    }
    frame(ctx, body)
}

fn products(ctx: &PageContext<'_>) -> String {
    let p = ctx.painter;
    let mut body = section(ctx, ctx.t(Text::Products));
    for item in &ctx.store.products {
        body.push(p.leader(
            &format!("{} {}", item.name, p.muted(&version(item))),
            &p.paint(&ctx.store.price(item.price_cents), Tone::Accent),
        ));
    }
    frame(ctx, body)
}

fn product(ctx: &PageContext<'_>) -> String {
    let p = ctx.painter;
    let mut body = product_detail(ctx);
    if let Some(item) = ctx.product() {
        body.push(String::new());
        body.push(p.leader("Version", &version(item)));
        body.push(p.leader("License", "1 seat / 1 year"));
    }
    frame(ctx, body)
}

fn downloads(ctx: &PageContext<'_>) -> String {
    let p = ctx.painter;
    let mut body = section(ctx, ctx.t(Text::Downloads));
    for item in &ctx.store.products {
        let slug = item.name.to_lowercase().replace(' ', "-");
        body.push(p.line(&format!(
            "{} {}-{}.tar.gz",
            p.paint("↓", Tone::Accent),
            slug,
            version(item)
        )));
    }
    frame(ctx, body)
}

fn account(ctx: &PageContext<'_>) -> String {
    let p = ctx.painter;
    let mut body = section(ctx, ctx.t(Text::Account));
    body.push(p.leader(ctx.t(Text::Orders), "0"));
    body.push(p.leader("API key", "sk-••••••••"));
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

fn login(ctx: &PageContext<'_>) -> String {
    let mut body = section(ctx, ctx.t(Text::Login));
    body.extend(form(ctx, &[Text::Email, Text::Password], Text::SignIn));
    frame(ctx, body)
}

fn signup(ctx: &PageContext<'_>) -> String {
    let mut body = section(ctx, ctx.t(Text::Signup));
    body.extend(form(
        ctx,
        &[Text::Name, Text::Email, Text::Password],
        Text::CreateAccount,
    ));
    frame(ctx, body)
}
