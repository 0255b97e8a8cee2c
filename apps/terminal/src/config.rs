//! # Terminal Configuration
//!
//! Outlet details, display settings and the menu served at the counter.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     HEARTH_OUTLET_NAME="Pizza Hut - Indiranagar"                       │
//! │     HEARTH_CURRENCY_SYMBOL=Rs                                          │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <PATH>, or                                                │
//! │     ~/.config/hearth/terminal.toml (Linux)                             │
//! │     ~/Library/Application Support/com.hearth.terminal/terminal.toml    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     Pizza Hut - MG Road with its eight-item menu                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [outlet]
//! brand = "Pizza Hut"
//! name = "Pizza Hut - MG Road"
//! id = "PH-MG-001"
//!
//! [display]
//! currency_symbol = "₹"
//!
//! [[menu]]
//! id = 1
//! name = "Margherita"
//! category = "Pizza"
//! price = "199.00"
//! ```
//!
//! Prices are strings so they never pass through a float.

use hearth_core::validation::validate_currency_symbol;
use hearth_core::{Catalog, Food, Money, Outlet, Renderer, ValidationError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

// =============================================================================
// Outlet Configuration
// =============================================================================

/// The branch this terminal serves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutletConfig {
    #[serde(default = "default_brand")]
    pub brand: String,

    #[serde(default = "default_outlet_name")]
    pub name: String,

    #[serde(default = "default_outlet_id")]
    pub id: String,
}

fn default_brand() -> String {
    "Pizza Hut".to_string()
}

fn default_outlet_name() -> String {
    "Pizza Hut - MG Road".to_string()
}

fn default_outlet_id() -> String {
    "PH-MG-001".to_string()
}

impl Default for OutletConfig {
    fn default() -> Self {
        OutletConfig {
            brand: default_brand(),
            name: default_outlet_name(),
            id: default_outlet_id(),
        }
    }
}

// =============================================================================
// Display Settings
// =============================================================================

/// How receipts look.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Shown in money column headers, e.g. "Price (₹)".
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    hearth_core::render::DEFAULT_CURRENCY_SYMBOL.to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            currency_symbol: default_currency_symbol(),
        }
    }
}

// =============================================================================
// Menu Entries
// =============================================================================

/// One `[[menu]]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub id: u32,
    pub name: String,
    pub category: String,
    /// Decimal string, e.g. "199.00".
    pub price: String,
}

impl MenuEntry {
    fn new(id: u32, name: &str, category: &str, price: &str) -> Self {
        MenuEntry {
            id,
            name: name.to_string(),
            category: category.to_string(),
            price: price.to_string(),
        }
    }

    /// Builds the core food, attaching the entry id to any failure.
    pub fn to_food(&self) -> AppResult<Food> {
        let with_id = |source: ValidationError| AppError::MenuEntry {
            id: self.id,
            source,
        };

        let price: Money = self.price.parse().map_err(with_id)?;
        Food::new(self.id, self.name.as_str(), self.category.as_str(), price).map_err(with_id)
    }
}

fn default_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new(1, "Margherita", "Pizza", "199.00"),
        MenuEntry::new(2, "Farmhouse", "Pizza", "349.00"),
        MenuEntry::new(3, "Peppy Paneer", "Pizza", "369.00"),
        MenuEntry::new(4, "Chicken Tikka", "Pizza", "429.00"),
        MenuEntry::new(5, "Garlic Bread", "Sides", "149.00"),
        MenuEntry::new(6, "Cheesy Dip", "Sides", "59.00"),
        MenuEntry::new(7, "Coke (500ml)", "Beverage", "75.00"),
        MenuEntry::new(8, "Brownie", "Dessert", "129.00"),
    ]
}

// =============================================================================
// Main Terminal Configuration
// =============================================================================

/// Complete terminal configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalConfig {
    #[serde(default)]
    pub outlet: OutletConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default = "default_menu")]
    pub menu: Vec<MenuEntry>,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        TerminalConfig {
            outlet: OutletConfig::default(),
            display: DisplayConfig::default(),
            menu: default_menu(),
        }
    }
}

impl TerminalConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, else the platform config dir)
    /// 3. Environment variables
    ///
    /// A path given explicitly must exist; the platform default may be absent.
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let mut config = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::ConfigNotFound(path));
                }
                Self::from_file(&path)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                other => {
                    debug!(path = ?other, "Config file not found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    fn from_file(path: &Path) -> AppResult<Self> {
        info!(?path, "Loading terminal config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Checks outlet, currency symbol and that the menu is not empty.
    ///
    /// Individual menu entries are checked by [`TerminalConfig::catalog`].
    pub fn validate(&self) -> AppResult<()> {
        self.outlet()?;
        validate_currency_symbol(&self.display.currency_symbol)?;

        if self.menu.is_empty() {
            return Err(ValidationError::Required {
                field: "menu".to_string(),
            }
            .into());
        }

        Ok(())
    }

    /// Applies `HEARTH_*` environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(brand) = lookup("HEARTH_BRAND") {
            debug!(brand = %brand, "Overriding brand from environment");
            self.outlet.brand = brand;
        }

        if let Some(name) = lookup("HEARTH_OUTLET_NAME") {
            debug!(name = %name, "Overriding outlet name from environment");
            self.outlet.name = name;
        }

        if let Some(id) = lookup("HEARTH_OUTLET_ID") {
            debug!(id = %id, "Overriding outlet id from environment");
            self.outlet.id = id;
        }

        if let Some(symbol) = lookup("HEARTH_CURRENCY_SYMBOL") {
            self.display.currency_symbol = symbol;
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "hearth", "terminal")
            .map(|dirs| dirs.config_dir().join("terminal.toml"))
    }

    // =========================================================================
    // Conversions into hearth-core
    // =========================================================================

    pub fn outlet(&self) -> AppResult<Outlet> {
        Ok(Outlet::new(
            self.outlet.brand.as_str(),
            self.outlet.name.as_str(),
            self.outlet.id.as_str(),
        )?)
    }

    /// Builds the menu. Fails on the first bad entry or a duplicate id.
    pub fn catalog(&self) -> AppResult<Catalog> {
        let foods = self
            .menu
            .iter()
            .map(MenuEntry::to_food)
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Catalog::new(self.outlet()?, foods)?)
    }

    pub fn renderer(&self) -> Renderer {
        Renderer::new(self.display.currency_symbol.trim())
    }

    /// The effective configuration as TOML, for `--print-config`.
    pub fn to_toml(&self) -> AppResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
