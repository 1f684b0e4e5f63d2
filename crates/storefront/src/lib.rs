#![forbid(unsafe_code)]

//! # Storefront
//!
//! Multi-tenant storefront rendered to the terminal. Every store picks a
//! theme; the theme decides the page chrome and which page view answers
//! each URL.
//!
//! ## Modules
//!
//! - [`resolve`] - theme precedence: per-store choice, then the last used
//!   theme, then the store default
//! - [`layout`] - per-store dispatcher that resolves, classifies and mounts
//!   a shell
//! - [`routes`] - URL parsing and the (theme, role) page table with its
//!   fallback chain
//! - [`pages`] - page views for every theme plus the generic fallbacks
//! - [`shell`] - header/footer chrome and the loading and error screens
//! - [`render`] - width-aware, palette-coloured text output
//! - [`store`] - store list, carts and per-store persisted settings
//! - [`app`] - wires it all together for the binary and the tests
//! - [`cli`], [`config`], [`logging`] - binary plumbing
//!
//! ## Example
//!
//! ```rust
//! use storefront::app::{App, Outcome};
//! use storefront::config::Config;
//! use store_theme::LocalStorage;
//!
//! let mut app = App::with_mock_data(Config::default(), LocalStorage::in_memory());
//! let rendered = app.navigate("/store/s1/products").unwrap();
//! assert!(matches!(rendered.outcome, Outcome::Page { .. }));
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod i18n;
pub mod layout;
pub mod logging;
pub mod pages;
pub mod render;
pub mod resolve;
pub mod routes;
pub mod shell;
pub mod store;
