#![forbid(unsafe_code)]

//! # Storefront
//!
//! Render themed storefront pages in the terminal.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p storefront -- render /store/s1
//! cargo run -p storefront -- --storage store.json set-theme s1 luxe
//! ```

use std::process::ExitCode;

use anyhow::Context;
use colored::Colorize;
use store_theme::{CustomColors, ThemeId, list_themes};
use tracing::debug;

use storefront::app::{App, Outcome};
use storefront::cli::{Cli, Command, CustomColorsArgs, RenderArgs};
use storefront::config::Config;
use storefront::layout::ShellKind;
use storefront::logging;
use storefront::routes::Route;

/// Exit status when the effective theme has no shell.
const EXIT_THEME_ERROR: u8 = 2;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    let config = Config::from_cli(&cli).context("loading configuration")?;
    config.validate().context("invalid configuration")?;
    colored::control::set_override(config.use_color());
    debug!(?config, "Configuration resolved");

    let storage = config.open_storage().context("opening storage")?;
    let mut app = App::with_mock_data(config, storage);

    match cli.command {
        Command::Render(args) => return render(&mut app, &args),
        Command::Themes => print_themes(&app),
        Command::Stores => print_stores(&app),
        Command::SetTheme { store, theme } => {
            app.assign_theme(&store, theme)
                .with_context(|| format!("assigning theme {theme} to store {store}"))?;
            println!("Store {store} now uses {theme}");
        }
        Command::SetGlobalTheme { theme } => {
            app.set_global_theme(theme);
            println!("Active theme: {theme}");
        }
        Command::ToggleColorMode => {
            app.themes_mut().toggle_color_mode();
            println!("Colour mode: {}", app.color_mode());
        }
        Command::SetLanguage { locale } => {
            app.set_language(locale).context("saving language")?;
            println!("Language: {}", locale.native_name());
        }
        Command::Customize { key, value } => {
            let value = serde_json::from_str(&value)
                .unwrap_or(serde_json::Value::String(value));
            println!("{key} = {value}");
            app.themes_mut().set_customization(&key, value);
        }
        Command::CustomColors(args) => set_custom_colors(&mut app, args)?,
        Command::Diagnostics => print_diagnostics(&app),
    }
    Ok(ExitCode::SUCCESS)
}

fn render(app: &mut App, args: &RenderArgs) -> anyhow::Result<ExitCode> {
    if !args.add.is_empty() {
        let route = Route::parse(&args.path)?;
        for item in &args.add {
            app.add_to_cart(&route.store_id, item.product_id, item.quantity)
                .context("adding to cart")?;
        }
    }
    if let Some(theme) = args.preview {
        app.preview(theme);
    }

    let rendered = app.navigate(&args.path)?;
    println!("{}", rendered.text);
    match rendered.outcome {
        Outcome::Page { .. } => Ok(ExitCode::SUCCESS),
        Outcome::Loading => {
            eprintln!("store not found: {}", args.path);
            Ok(ExitCode::FAILURE)
        }
        Outcome::ThemeError(err) => {
            eprintln!("error: {err}");
            Ok(ExitCode::from(EXIT_THEME_ERROR))
        }
    }
}

fn print_themes(app: &App) {
    let active = app.themes().active_theme_id();
    for theme in list_themes() {
        let marker = if theme.id.as_str() == active { "*" } else { " " };
        println!(
            "{marker} {} {:<11} {:<16} {:<13} {}",
            format!("{:<11}", theme.id.as_str()).bold(),
            theme.name,
            theme.category.name(),
            ShellKind::for_theme(theme.id).as_str(),
            theme.description.dimmed(),
        );
    }
}

fn print_stores(app: &App) {
    for store in app.stores().stores() {
        let resolution = app.peek_resolution(store);
        println!(
            "{} {:<20} default={:<11} resolved={:<11} ({}) {} {}",
            format!("{:<4}", store.id).bold(),
            store.name,
            store.default_theme_id,
            resolution.theme_id.escape_debug().to_string(),
            resolution.source,
            store.language,
            store.currency,
        );
    }
}

fn set_custom_colors(app: &mut App, args: CustomColorsArgs) -> anyhow::Result<()> {
    let current = app.stores().custom_colors(&args.store);
    let colors = CustomColors {
        primary: args.primary.or(current.primary),
        accent: args.accent.or(current.accent),
        background: args.background.or(current.background),
        text: args.text.or(current.text),
    };
    app.set_custom_colors(&args.store, &colors)
        .with_context(|| format!("saving colours for store {}", args.store))?;
    println!(
        "{}",
        serde_json::to_string(&colors).context("encoding colours")?
    );
    Ok(())
}

fn print_diagnostics(app: &App) {
    let themes = app.themes();
    println!("{}", app.config().to_diagnostic_string());
    println!("Backend: {}", app.storage().describe());
    println!("Active theme: {}", themes.active_theme_id().escape_debug());
    println!(
        "Effective theme: {}",
        themes
            .effective_theme_id()
            .parse::<ThemeId>()
            .map_or_else(
                |_| format!("{:?} (unknown)", themes.effective_theme_id()),
                |t| t.to_string()
            )
    );
    println!("Colour mode: {}", themes.color_mode());
    println!("Root class: {}", themes.root_class().unwrap_or("-"));
    println!("Stored entries:");
    for (key, value) in app.storage().entries() {
        println!("  {} = {}", key.escape_debug(), value.escape_debug());
    }
}
