//! Page table fallback and shell selection across every theme.

use proptest::prelude::*;
use store_theme::{LocalStorage, ThemeId};
use storefront::app::{App, Outcome};
use storefront::config::{ColorChoice, Config};
use storefront::i18n::{Locale, Text};
use storefront::layout::{ShellKind, classify};
use storefront::routes::{PageRole, PageSource, Route, RouteTable};

fn all_roles() -> Vec<PageRole> {
    let mut roles = PageRole::CORE.to_vec();
    roles.extend(PageRole::EXTRAS);
    roles.push(PageRole::Unknown);
    roles
}

fn app() -> App {
    let config = Config {
        width: Some(72),
        color: ColorChoice::Never,
        ..Config::default()
    };
    App::with_mock_data(config, LocalStorage::in_memory())
}

#[test]
fn every_theme_has_a_shell() {
    for theme in ThemeId::all() {
        let (parsed, shell) = classify(theme.as_str()).unwrap();
        assert_eq!(parsed, theme);
        let integrated = matches!(theme, ThemeId::Appliances | ThemeId::Toys | ThemeId::Software);
        assert_eq!(shell == ShellKind::Integrated, integrated, "{theme}");
    }
}

#[test]
fn lookups_follow_the_chain() {
    for theme in ThemeId::all() {
        for role in all_roles() {
            let page = RouteTable::resolve(theme, role);
            match page.source {
                PageSource::Dedicated => {
                    assert!(RouteTable::has_dedicated(theme, role));
                    assert_eq!(page.role, role);
                }
                PageSource::RoleFallback => {
                    assert!(!RouteTable::has_dedicated(theme, role));
                    assert!(role.is_core(), "{theme}/{role}");
                    assert_eq!(page.role, role);
                }
                PageSource::ThemeHome | PageSource::GenericHome => {
                    assert!(!role.is_core(), "{theme}/{role} fell to a home page");
                    assert_eq!(page.role, PageRole::Home);
                }
            }
        }
    }
}

#[test]
fn lookups_are_stable() {
    for theme in ThemeId::all() {
        for role in all_roles() {
            let a = RouteTable::resolve(theme, role);
            let b = RouteTable::resolve(theme, role);
            assert_eq!(a.name, b.name);
            assert_eq!(a.source, b.source);
        }
    }
}

#[test]
fn exclusive_pages_stay_with_their_theme() {
    assert_eq!(RouteTable::resolve(ThemeId::Luxe, PageRole::Lookbook).name, "LuxeLookbook");
    assert_eq!(
        RouteTable::resolve(ThemeId::Minimal, PageRole::Lookbook).source,
        PageSource::ThemeHome
    );
    assert_eq!(
        RouteTable::resolve(ThemeId::Software, PageRole::Downloads).source,
        PageSource::Dedicated
    );
}

#[test]
fn every_theme_renders_every_role() {
    let mut app = app();
    for theme in ThemeId::all() {
        app.assign_theme("s1", theme).unwrap();
        for role in all_roles() {
            let path = match role {
                PageRole::ProductDetail => "/store/s1/product/1".to_string(),
                PageRole::Unknown => "/store/s1/nowhere".to_string(),
                other => Route::path_for("s1", other),
            };
            let rendered = app.navigate(&path).unwrap();
            let Outcome::Page { theme: shown, page, .. } = rendered.outcome else {
                panic!("{path} under {theme}: {:?}", rendered.outcome);
            };
            assert_eq!(shown, theme);
            assert_eq!(page, RouteTable::resolve(theme, role).name);
            assert!(!rendered.text.trim().is_empty(), "{path} under {theme}");
        }
    }
}

#[test]
fn integrated_fallback_pages_keep_theme_navigation() {
    let config = Config {
        width: Some(72),
        color: ColorChoice::Never,
        locale: Some(Locale::En),
        ..Config::default()
    };
    let mut app = App::with_mock_data(config, LocalStorage::in_memory());
    app.assign_theme("s1", ThemeId::Appliances).unwrap();
    assert_eq!(
        RouteTable::resolve(ThemeId::Appliances, PageRole::About).source,
        PageSource::RoleFallback
    );
    let rendered = app.navigate("/store/s1/about").unwrap();
    assert!(matches!(rendered.outcome, Outcome::Page { .. }));
    assert!(rendered.text.contains(Locale::En.text(Text::Compare)), "{}", rendered.text);
    assert!(rendered.text.contains(Locale::En.text(Text::FreeShipping)), "{}", rendered.text);
}

#[test]
fn arabic_pages_render() {
    let config = Config {
        width: Some(72),
        color: ColorChoice::Never,
        locale: Some(Locale::Ar),
        ..Config::default()
    };
    let mut app = App::with_mock_data(config, LocalStorage::in_memory());
    let rendered = app.navigate("/store/s1/cart").unwrap();
    assert!(rendered.text.contains(Locale::Ar.text(Text::EmptyCart)));
}

proptest! {
    #[test]
    fn role_paths_round_trip(index in 0usize..14, id in "s[0-9]{1,3}") {
        let role = all_roles()[index];
        prop_assume!(role != PageRole::Unknown);
        let route = Route::parse(&Route::path_for(&id, role)).unwrap();
        prop_assert_eq!(route.store_id, id);
        prop_assert_eq!(route.role, role);
    }

    #[test]
    fn parse_never_panics(path in "\\PC{0,60}") {
        let _ = Route::parse(&path);
    }

    #[test]
    fn unknown_segments_land_on_a_home_page(theme in prop::sample::select(ThemeId::all().to_vec()), seg in "[a-z]{3,12}") {
        let role = PageRole::from_segment(&seg);
        prop_assume!(role == PageRole::Unknown);
        let page = RouteTable::resolve(theme, role);
        prop_assert_eq!(page.role, PageRole::Home);
    }
}
