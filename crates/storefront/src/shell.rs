//! Shells that host page content.
//!
//! Header/footer themes get their chrome from here. Integrated themes draw
//! it themselves: their own pages pass through untouched, while shared
//! fallback pages are wrapped in the theme's frame.

use store_theme::ThemeId;

use crate::i18n::{Locale, Text};
use crate::layout::{ShellKind, ThemeError};
use crate::pages::{self, PageContext, copyright, nav};
use crate::render::{Painter, Tone};
use crate::routes::{PageRole, PageSource};

const NAV: &[PageRole] = &[
    PageRole::Home,
    PageRole::Products,
    PageRole::About,
    PageRole::Contact,
    PageRole::Cart,
];

/// Navigation for a header/footer theme, including its extra role.
fn nav_roles(theme: ThemeId) -> Vec<PageRole> {
    let mut roles = NAV.to_vec();
    let extra = match theme {
        ThemeId::Tech => Some(PageRole::Compare),
        ThemeId::Luxe => Some(PageRole::Lookbook),
        ThemeId::Vibrant => Some(PageRole::Deals),
        _ => None,
    };
    if let Some(role) = extra {
        roles.insert(2, role);
    }
    roles
}

fn header(ctx: &PageContext<'_>) -> Vec<String> {
    let p = ctx.painter;
    let roles = nav_roles(ctx.theme);
    let cart = format!("{} ({})", ctx.t(Text::Cart), ctx.cart.item_count());
    match ctx.theme {
        ThemeId::Tech => vec![
            p.line(&format!("{} {}", p.paint("▍", Tone::Accent), p.title(ctx.store_name()))),
            nav(ctx, &roles, "  /  "),
            p.rule('─'),
        ],
        ThemeId::Luxe => vec![
            p.center(&p.title(&ctx.store_name().to_uppercase())),
            p.center(&nav(ctx, &roles, "   ")),
            p.rule('·'),
        ],
        ThemeId::Vibrant => vec![
            p.band(&format!("{}  ·  {cart}", ctx.store_name())),
            nav(ctx, &roles, " ★ "),
        ],
        ThemeId::Modern => vec![
            p.line(&format!("{}   {}", p.title(ctx.store_name()), p.muted(&cart))),
            nav(ctx, &roles, "   "),
            p.rule('━'),
        ],
        _ => vec![p.line(&p.title(ctx.store_name())), nav(ctx, &roles, "  ")],
    }
}

fn footer(ctx: &PageContext<'_>) -> Vec<String> {
    let p = ctx.painter;
    let language = ctx.locale.native_name();
    match ctx.theme {
        ThemeId::Luxe => vec![p.rule('·'), p.center(&copyright(ctx))],
        ThemeId::Vibrant => vec![p.band(&format!("{} · {language}", ctx.t(Text::FreeShipping)))],
        _ => vec![
            p.rule('─'),
            p.line(&copyright(ctx)),
            p.line(&p.muted(&format!("{} · {language}", ctx.store.currency))),
        ],
    }
}

/// Frame a shared page for an integrated theme.
fn integrated_frame(ctx: &PageContext<'_>, body: &str) -> String {
    match ctx.theme {
        ThemeId::Appliances => pages::appliances::wrap(ctx, body),
        ThemeId::Toys => pages::toys::wrap(ctx, body),
        ThemeId::Software => pages::software::wrap(ctx, body),
        _ => body.to_string(),
    }
}

/// Host a rendered page body in the shell for its theme.
#[must_use]
pub fn mount(shell: ShellKind, ctx: &PageContext<'_>, source: PageSource, body: &str) -> String {
    match shell {
        ShellKind::Integrated => match source {
            PageSource::Dedicated | PageSource::ThemeHome => body.to_string(),
            PageSource::RoleFallback | PageSource::GenericHome => integrated_frame(ctx, body),
        },
        ShellKind::HeaderFooter => {
            let mut lines = header(ctx);
            lines.push(String::new());
            lines.push(body.to_string());
            lines.push(String::new());
            lines.extend(footer(ctx));
            lines.join("\n")
        }
    }
}

/// Shown while a store id is not (yet) in the store list.
#[must_use]
pub fn loading_screen(painter: &Painter, text: &str, store_id: &str) -> String {
    [
        String::new(),
        painter.center(&painter.muted(&format!("{text} {store_id} …"))),
        String::new(),
    ]
    .join("\n")
}

/// The terminal error screen naming the unhostable theme. The id is shown
/// escaped since it comes straight from storage.
#[must_use]
pub fn theme_error_screen(painter: &Painter, locale: Locale, err: &ThemeError) -> String {
    [
        painter.rule('!'),
        painter.center(&painter.paint(locale.text(Text::ThemeError), Tone::Error)),
        String::new(),
        painter.center(&format!("{} {:?}", locale.text(Text::ThemeUnavailable), err.theme_id)),
        painter.rule('!'),
    ]
    .join("\n")
}
