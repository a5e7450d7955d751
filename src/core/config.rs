//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.ice-booking/config.toml`. A missing file simply means
//! defaults; nothing is ever written back.

use clap::ValueEnum;
use log::{debug, info, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::catalog::{CarCatalog, NewCar, PLACEHOLDER_IMAGE};
use crate::core::session::Role;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BookingConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub cars: Vec<CarEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_role: Option<Role>,
    pub currency_symbol: Option<String>,
    pub placeholder_image: Option<String>,
    pub seed_demo_cars: Option<bool>,
}

/// Extra car seeded at startup, after the demo cars.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CarEntry {
    pub make: String,
    pub model: String,
    pub cost_per_day: Decimal,
    pub image: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_CURRENCY_SYMBOL: &str = "R";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub default_role: Role,
    pub currency_symbol: String,
    pub placeholder_image: String,
    pub seed_demo_cars: bool,
    pub cars: Vec<CarEntry>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with(&BookingConfig::default(), &CliOverrides::default(), |_| None)
    }
}

/// Flags given on the command line. `None` / `false` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub role: Option<Role>,
    pub currency: Option<String>,
    pub no_seed: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.ice-booking/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".ice-booking").join("config.toml"))
}

/// Load config from `explicit`, `ICE_BOOKING_CONFIG`, or the default path.
///
/// A missing file yields `BookingConfig::default()`. A file that exists but
/// is malformed yields `ConfigError::Parse`.
pub fn load_config(explicit: Option<&Path>) -> Result<BookingConfig, ConfigError> {
    let path = match explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var("ICE_BOOKING_CONFIG").ok().map(PathBuf::from))
        .or_else(config_path)
    {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(BookingConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file at {}, using defaults", path.display());
        return Ok(BookingConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<BookingConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &BookingConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with(
    config: &BookingConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Role: CLI → env → config → default
    let default_role = cli
        .role
        .or_else(|| {
            env("ICE_BOOKING_ROLE").and_then(|raw| {
                let parsed = <Role as ValueEnum>::from_str(raw.trim(), true).ok();
                if parsed.is_none() {
                    warn!("Ignoring ICE_BOOKING_ROLE={raw:?}: expected customer or admin");
                }
                parsed
            })
        })
        .or(config.general.default_role)
        .unwrap_or_default();

    // Currency: CLI → env → config → default
    let currency_symbol = cli
        .currency
        .clone()
        .or_else(|| env("ICE_BOOKING_CURRENCY"))
        .or_else(|| config.general.currency_symbol.clone())
        .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string());

    let placeholder_image = config
        .general
        .placeholder_image
        .clone()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    ResolvedConfig {
        default_role,
        currency_symbol,
        placeholder_image,
        seed_demo_cars: !cli.no_seed && config.general.seed_demo_cars.unwrap_or(true),
        cars: config.cars.clone(),
    }
}

impl ResolvedConfig {
    /// Build the startup catalog: demo cars (if enabled), then configured
    /// cars prepended in file order. Entries that fail validation are skipped.
    pub fn build_catalog(&self) -> CarCatalog {
        let base = if self.seed_demo_cars {
            CarCatalog::seeded()
        } else {
            CarCatalog::new()
        };
        let mut catalog = base.with_placeholder_image(self.placeholder_image.clone());

        for entry in &self.cars {
            let input = NewCar {
                make: entry.make.clone(),
                model: entry.model.clone(),
                cost_per_day: entry.cost_per_day.to_string(),
                image_url: entry.image.clone().unwrap_or_default(),
            };
            if let Err(e) = catalog.add_car(input) {
                warn!("Skipping configured car {} {}: {}", entry.make, entry.model, e);
            }
        }
        catalog
    }
}
