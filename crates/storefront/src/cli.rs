//! Command-line interface for `storefront`.
//!
//! The terminal stands in for the browser: a storefront URL path is passed
//! to `render` and the page is printed.
//!
//! # Examples
//!
//! ```bash
//! # Render store s1's product list
//! storefront render /store/s1/products
//!
//! # Persist state between runs and preview another theme
//! storefront --storage ./store.json render /store/s2 --preview luxe
//!
//! # Put two of product 3 in the cart, then show the cart
//! storefront render /store/s1/cart --add 3:2
//! ```

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use store_theme::ThemeId;

use crate::data::ProductId;
use crate::i18n::Locale;

/// Multi-tenant storefront renderer.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "storefront",
    author,
    version,
    about = "Render themed storefront pages in the terminal",
    long_about = "Resolves each store's theme (per-store choice, then last used theme, \
                  then the store default) and renders storefront pages as styled text."
)]
pub struct Cli {
    /// JSON file holding persisted settings (in-memory when omitted)
    #[arg(long, env = "STOREFRONT_STORAGE", global = true)]
    pub storage: Option<PathBuf>,

    /// TOML config file with defaults for these options
    #[arg(long, env = "STOREFRONT_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Seed for the mock store data
    ///
    /// The same seed always produces the same stores and products.
    #[arg(long, short = 's', env = "STOREFRONT_SEED", global = true)]
    pub seed: Option<u64>,

    /// Number of mock stores to generate
    #[arg(long = "stores", global = true)]
    pub store_count: Option<usize>,

    /// Interface language (en, ar)
    #[arg(long = "lang", global = true)]
    pub locale: Option<Locale>,

    /// Page width in columns (terminal width when omitted)
    #[arg(long, global = true)]
    pub width: Option<usize>,

    /// Disable colour output
    ///
    /// Respects the `NO_COLOR` environment variable
    #[arg(
        long,
        env = "NO_COLOR",
        global = true,
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Force colour output even when stdout is not a terminal
    #[arg(long, conflicts_with = "no_color", global = true)]
    pub force_color: bool,

    /// Verbose logging on stderr (repeat for more)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Storefront subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Render a storefront path, e.g. /store/s1/products
    Render(RenderArgs),

    /// List available themes
    Themes,

    /// List stores with their default and resolved themes
    Stores,

    /// Assign a theme to a store and make it the active theme
    SetTheme {
        /// Store id, e.g. s1
        store: String,
        /// Theme id
        theme: ThemeId,
    },

    /// Set the active (last used) theme
    SetGlobalTheme {
        /// Theme id
        theme: ThemeId,
    },

    /// Switch between light and dark mode
    ToggleColorMode,

    /// Persist the interface language
    SetLanguage {
        /// en or ar
        locale: Locale,
    },

    /// Store a theme customization value
    Customize {
        /// Customization key
        key: String,
        /// JSON value, e.g. 1.25 or '"Welcome"'
        value: String,
    },

    /// Set per-store colour overrides (hex colours)
    CustomColors(CustomColorsArgs),

    /// Show resolved configuration and stored settings
    Diagnostics,
}

/// Arguments for `render`.
#[derive(Parser, Debug, Clone)]
pub struct RenderArgs {
    /// Storefront path
    pub path: String,

    /// Preview a theme without committing it
    #[arg(long)]
    pub preview: Option<ThemeId>,

    /// Add a product to the cart first, as ID or ID:QTY (repeatable)
    #[arg(long = "add", value_name = "PRODUCT[:QTY]")]
    pub add: Vec<CartItem>,
}

/// Arguments for `custom-colors`.
#[derive(Parser, Debug, Clone)]
pub struct CustomColorsArgs {
    /// Store id
    pub store: String,

    #[arg(long)]
    pub primary: Option<String>,

    #[arg(long)]
    pub accent: Option<String>,

    #[arg(long)]
    pub background: Option<String>,

    #[arg(long)]
    pub text: Option<String>,
}

/// A `--add` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl FromStr for CartItem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (id, qty) = s.split_once(':').unwrap_or((s, "1"));
        let product_id = id
            .trim()
            .parse::<ProductId>()
            .map_err(|_| format!("invalid product id: {id:?}"))?;
        let quantity = qty
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|q| *q > 0)
            .ok_or_else(|| format!("invalid quantity: {qty:?}"))?;
        Ok(Self {
            product_id,
            quantity,
        })
    }
}

impl Cli {
    /// Parse command line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Create CLI from iterator (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }
}
