//! End-to-end tests for the storefront CLI.
//!
//! Each test runs the binary against a throwaway storage file, so state
//! persisted by one invocation is visible to the next.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `storefront` command with a clean environment.
#[allow(deprecated)]
fn bare_cmd() -> Command {
    let mut cmd = Command::cargo_bin("storefront").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("STOREFRONT_STORAGE")
        .env_remove("STOREFRONT_CONFIG")
        .env_remove("STOREFRONT_SEED");
    cmd
}

/// [`bare_cmd`] with colour off and a fixed width.
fn storefront_cmd() -> Command {
    let mut cmd = bare_cmd();
    cmd.args(["--no-color", "--width", "80"]);
    cmd
}

fn storage_in(dir: &TempDir) -> PathBuf {
    dir.path().join("storage.json")
}

fn with_storage(path: &Path) -> Command {
    let mut cmd = storefront_cmd();
    cmd.arg("--storage").arg(path);
    cmd
}

fn stored(path: &Path) -> BTreeMap<String, String> {
    let raw = fs::read_to_string(path).unwrap();
    serde_json::from_str(&raw).unwrap()
}

// =============================================================================
// Listing
// =============================================================================

mod listing {
    use super::*;

    #[test]
    fn themes_lists_the_whole_registry() {
        storefront_cmd()
            .arg("themes")
            .assert()
            .success()
            .stdout(predicate::str::contains("minimal"))
            .stdout(predicate::str::contains("vibrant"))
            .stdout(predicate::str::contains("software"))
            .stdout(predicate::str::contains("integrated"))
            .stdout(predicate::str::contains("header-footer"));
    }

    #[test]
    fn stores_honours_count() {
        storefront_cmd()
            .args(["--stores", "3", "stores"])
            .assert()
            .success()
            .stdout(predicate::str::contains("s1"))
            .stdout(predicate::str::contains("s3"))
            .stdout(predicate::str::contains("s4").not())
            .stdout(predicate::str::contains("store default"));
    }

    #[test]
    fn same_seed_same_stores() {
        let first = storefront_cmd().args(["--seed", "9", "stores"]).output().unwrap();
        let second = storefront_cmd().args(["--seed", "9", "stores"]).output().unwrap();
        assert!(first.status.success());
        assert_eq!(first.stdout, second.stdout);
    }
}

// =============================================================================
// Persistence
// =============================================================================

mod persistence {
    use super::*;

    #[test]
    fn set_theme_persists_and_wins() {
        let dir = TempDir::new().unwrap();
        let path = storage_in(&dir);

        with_storage(&path)
            .args(["set-theme", "s1", "luxe"])
            .assert()
            .success()
            .stdout(predicate::str::contains("luxe"));

        let entries = stored(&path);
        assert_eq!(entries.get("store-s1-theme").map(String::as_str), Some("luxe"));
        assert_eq!(entries.get("storeThemeId").map(String::as_str), Some("luxe"));

        with_storage(&path)
            .arg("stores")
            .assert()
            .success()
            .stdout(predicate::str::contains("resolved=luxe"))
            .stdout(predicate::str::contains("store override"));
    }

    #[test]
    fn unknown_theme_rejected_at_the_boundary() {
        let dir = TempDir::new().unwrap();
        let path = storage_in(&dir);
        with_storage(&path)
            .args(["set-theme", "s1", "retro"])
            .assert()
            .failure();
        assert!(!path.exists());
    }

    #[test]
    fn set_theme_on_unknown_store_fails() {
        let dir = TempDir::new().unwrap();
        with_storage(&storage_in(&dir))
            .args(["set-theme", "s99", "tech"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("s99"));
    }

    #[test]
    fn toggle_color_mode_twice_returns_to_light() {
        let dir = TempDir::new().unwrap();
        let path = storage_in(&dir);

        with_storage(&path)
            .arg("toggle-color-mode")
            .assert()
            .success()
            .stdout(predicate::str::contains("dark"));
        assert_eq!(stored(&path).get("colorMode").map(String::as_str), Some("dark"));

        with_storage(&path)
            .arg("toggle-color-mode")
            .assert()
            .success()
            .stdout(predicate::str::contains("light"));
        assert_eq!(stored(&path).get("colorMode").map(String::as_str), Some("light"));
    }

    #[test]
    fn language_and_customizations_persist() {
        let dir = TempDir::new().unwrap();
        let path = storage_in(&dir);

        with_storage(&path).args(["set-language", "ar"]).assert().success();
        with_storage(&path)
            .args(["customize", "fontScale", "1.25"])
            .assert()
            .success();

        let entries = stored(&path);
        assert_eq!(entries.get("language").map(String::as_str), Some("ar"));
        let custom: serde_json::Value =
            serde_json::from_str(entries.get("themeCustomizations").unwrap()).unwrap();
        assert_eq!(custom["fontScale"], serde_json::json!(1.25));

        with_storage(&path)
            .arg("diagnostics")
            .assert()
            .success()
            .stdout(predicate::str::contains("language = ar"));
    }

    #[test]
    fn custom_colors_validated() {
        let dir = TempDir::new().unwrap();
        let path = storage_in(&dir);

        with_storage(&path)
            .args(["custom-colors", "s1", "--primary", "not-a-colour"])
            .assert()
            .failure();
        with_storage(&path)
            .args(["custom-colors", "s1", "--primary", "#+f+f+f"])
            .assert()
            .failure();
        assert!(!path.exists() || !stored(&path).contains_key("store-s1-custom-colors"));

        with_storage(&path)
            .args(["custom-colors", "s1", "--primary", "#ff0066"])
            .assert()
            .success();
        with_storage(&path)
            .args(["custom-colors", "s1", "--accent", "#00aa88"])
            .assert()
            .success()
            .stdout(predicate::str::contains("#ff0066"))
            .stdout(predicate::str::contains("#00aa88"));

        assert!(stored(&path).contains_key("store-s1-custom-colors"));
    }
}

// =============================================================================
// Rendering
// =============================================================================

mod rendering {
    use super::*;

    #[test]
    fn renders_product_list() {
        storefront_cmd()
            .args(["render", "/store/s1/products"])
            .assert()
            .success()
            .stdout(predicate::str::is_empty().not());
    }

    #[test]
    fn renders_cart_with_added_items() {
        storefront_cmd()
            .args(["render", "/store/s1/cart", "--add", "1:2"])
            .assert()
            .success()
            .stdout(predicate::str::contains("× 2"));
    }

    #[test]
    fn preview_does_not_commit() {
        let dir = TempDir::new().unwrap();
        let path = storage_in(&dir);
        with_storage(&path).args(["set-theme", "s1", "minimal"]).assert().success();

        with_storage(&path)
            .args(["render", "/store/s1/downloads", "--preview", "software"])
            .assert()
            .success();

        let entries = stored(&path);
        assert_eq!(entries.get("storeThemeId").map(String::as_str), Some("minimal"));
        assert_eq!(entries.get("store-s1-theme").map(String::as_str), Some("minimal"));
    }

    #[test]
    fn stored_unknown_theme_exits_with_theme_error() {
        let dir = TempDir::new().unwrap();
        let path = storage_in(&dir);
        fs::write(&path, r#"{"store-s1-theme":"retro"}"#).unwrap();

        with_storage(&path)
            .args(["render", "/store/s1"])
            .assert()
            .code(2)
            .stdout(predicate::str::contains("retro"))
            .stderr(predicate::str::contains("retro"));
    }

    #[test]
    fn stored_theme_id_is_escaped_on_output() {
        let dir = TempDir::new().unwrap();
        let path = storage_in(&dir);
        fs::write(&path, r#"{"store-s1-theme":"re\u001b[2Jtro"}"#).unwrap();

        with_storage(&path)
            .args(["render", "/store/s1"])
            .assert()
            .code(2)
            .stdout(predicate::str::contains('\u{1b}').not())
            .stdout(predicate::str::contains(r"\u{1b}[2Jtro"))
            .stderr(predicate::str::contains('\u{1b}').not());

        with_storage(&path)
            .arg("diagnostics")
            .assert()
            .success()
            .stdout(predicate::str::contains('\u{1b}').not());
    }

    #[test]
    fn unknown_store_fails() {
        storefront_cmd()
            .args(["render", "/store/s404"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("store not found"));
    }

    #[test]
    fn non_storefront_path_fails() {
        storefront_cmd()
            .args(["render", "/admin"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("not a storefront path"));
    }
}

// =============================================================================
// Configuration
// =============================================================================

mod configuration {
    use super::*;

    #[test]
    fn narrow_width_rejected() {
        bare_cmd()
            .args(["--no-color", "--width", "10", "themes"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid configuration"));
    }

    #[test]
    fn config_file_supplies_defaults() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("storefront.toml");
        fs::write(&config, "seed = 7\nstores = 2\n").unwrap();

        storefront_cmd()
            .arg("--config")
            .arg(&config)
            .arg("diagnostics")
            .assert()
            .success()
            .stdout(predicate::str::contains("Seed: 7"))
            .stdout(predicate::str::contains("Stores: 2"));
    }

    #[test]
    fn cli_beats_config_file() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("storefront.toml");
        fs::write(&config, "stores = 2\n").unwrap();

        storefront_cmd()
            .arg("--config")
            .arg(&config)
            .args(["--stores", "4", "stores"])
            .assert()
            .success()
            .stdout(predicate::str::contains("s4"));
    }

    #[test]
    fn unknown_config_keys_rejected() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("storefront.toml");
        fs::write(&config, "colour = \"always\"\n").unwrap();

        storefront_cmd()
            .arg("--config")
            .arg(&config)
            .arg("themes")
            .assert()
            .failure()
            .stderr(predicate::str::contains("loading configuration"));
    }
}
