use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use tracing::info;

use crate::errors::TrackerError;

pub const CONFIG_FILE_NAME: &str = "broke2boss.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub user_name: String,
    pub currency: char,
    pub initial_balance: Decimal,
    pub monthly_budget: Decimal,
    pub opening_expenses: Decimal,
    pub toast_seconds: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            user_name: "You".to_string(),
            currency: '₹',
            initial_balance: dec!(25000),
            monthly_budget: dec!(30000),
            opening_expenses: dec!(5000),
            toast_seconds: 4,
        }
    }
}

impl TrackerConfig {
    pub fn from_toml(content: &str) -> Result<Self, TrackerError> {
        let config: TrackerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.monthly_budget <= Decimal::ZERO {
            return Err(TrackerError::InvalidConfig(
                "monthly_budget must be greater than zero".into(),
            ));
        }
        if self.opening_expenses.is_sign_negative() && !self.opening_expenses.is_zero() {
            return Err(TrackerError::InvalidConfig(
                "opening_expenses cannot be negative".into(),
            ));
        }
        if self.toast_seconds == 0 {
            return Err(TrackerError::InvalidConfig(
                "toast_seconds must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

fn read_config(path: &Path) -> Result<TrackerConfig, TrackerError> {
    info!("Config file found at {}", path.display());
    let content = std::fs::read_to_string(path)?;
    TrackerConfig::from_toml(&content)
}

fn candidate_paths() -> Result<Vec<PathBuf>, TrackerError> {
    let mut candidates = vec![std::env::current_dir()?.join(CONFIG_FILE_NAME)];
    if let Some(config_dir) = dirs::config_dir() {
        candidates.push(config_dir.join("broke2boss").join("config.toml"));
    }
    Ok(candidates)
}

/// Loads the config from `explicit` if given, otherwise from the first
/// existing well-known location, otherwise falls back to the defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<TrackerConfig, TrackerError> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(TrackerError::InvalidArgument(format!(
                "No config file found at {}",
                path.display()
            )));
        }
        return read_config(path);
    }

    load_first(&candidate_paths()?)
}

/// Reads the first existing file in `candidates`, or returns the defaults.
fn load_first(candidates: &[PathBuf]) -> Result<TrackerConfig, TrackerError> {
    match candidates.iter().find(|path| path.exists()) {
        Some(path) => read_config(path),
        None => {
            info!("No config file found, using the default figures");
            Ok(TrackerConfig::default())
        }
    }
}
