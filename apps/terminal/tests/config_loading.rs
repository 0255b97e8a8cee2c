//! Loading terminal configuration from TOML files on disk.

use std::fs;

use hearth_core::{FoodId, Money};
use hearth_terminal::config::TerminalConfig;
use hearth_terminal::error::AppError;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("terminal.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_outlet_display_and_menu() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[outlet]
brand = "Crust & Co"
name = "Crust & Co - Koramangala"
id = "CC-KOR-01"

[display]
currency_symbol = "Rs"

[[menu]]
id = 10
name = "Veg Supreme"
category = "Pizza"
price = "299.50"

[[menu]]
id = 11
name = "Lemonade"
category = "Beverage"
price = "60"
"#,
    );

    let config = TerminalConfig::load(Some(path)).unwrap();
    let catalog = config.catalog().unwrap();

    assert_eq!(catalog.outlet().id(), "CC-KOR-01");
    assert_eq!(catalog.len(), 2);
    assert_eq!(
        catalog.get_food(FoodId::new(10)).unwrap().price(),
        Money::from_major_minor(299, 50)
    );
    assert_eq!(config.renderer().currency_symbol(), "Rs");
}

#[test]
fn missing_sections_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[display]\ncurrency_symbol = \"$\"\n");

    let config = TerminalConfig::load(Some(path)).unwrap();

    assert_eq!(config.display.currency_symbol, "$");
    assert_eq!(config.outlet.brand, "Pizza Hut");
    assert_eq!(config.catalog().unwrap().len(), 8);
}

#[test]
fn explicit_missing_path_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.toml");

    let err = TerminalConfig::load(Some(path.clone())).unwrap_err();
    assert!(matches!(err, AppError::ConfigNotFound(p) if p == path));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[outlet\nbrand = ");

    let err = TerminalConfig::load(Some(path)).unwrap_err();
    assert!(matches!(err, AppError::ConfigParse(_)));
}

#[test]
fn bad_price_names_the_menu_entry() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[[menu]]
id = 3
name = "Calzone"
category = "Pizza"
price = "12.345"
"#,
    );

    let config = TerminalConfig::load(Some(path)).unwrap();
    let err = config.catalog().unwrap_err();

    assert!(matches!(err, AppError::MenuEntry { id: 3, .. }));
    assert!(err.to_string().starts_with("Invalid menu entry 3"));
}

#[test]
fn duplicate_menu_ids_are_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[[menu]]
id = 1
name = "Margherita"
category = "Pizza"
price = "199.00"

[[menu]]
id = 1
name = "Marinara"
category = "Pizza"
price = "179.00"
"#,
    );

    let config = TerminalConfig::load(Some(path)).unwrap();
    assert!(config.catalog().is_err());
}

#[test]
fn printed_config_loads_back() {
    let dir = TempDir::new().unwrap();
    let original = TerminalConfig::default();
    let path = write_config(&dir, &original.to_toml().unwrap());

    let reloaded = TerminalConfig::load(Some(path)).unwrap();

    assert_eq!(reloaded.outlet.id, original.outlet.id);
    assert_eq!(reloaded.menu.len(), original.menu.len());
}
