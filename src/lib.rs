pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::console::ConsoleTerminal;
pub use config::toml_config::TomlConfig;
pub use crate::core::{pricing::compute, pricing::CatalogPricing, signup::SignupFlow};
pub use domain::model::{PricingBreakdown, PricingRequest, SignupOutcome};
pub use utils::error::{GymError, Result};
