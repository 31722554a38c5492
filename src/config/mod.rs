pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::PricingRequest;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "gym-membership")]
#[command(about = "Price and confirm a gym membership signup")]
pub struct CliConfig {
    /// Plan to quote directly, skipping the interactive prompts
    #[arg(long)]
    pub plan: Option<String>,

    #[arg(long, default_value = "1")]
    pub members: u32,

    /// Feature keys, comma separated (e.g. 1,3)
    #[arg(long, value_delimiter = ',')]
    pub features: Vec<String>,

    /// Confirm without asking
    #[arg(short, long)]
    pub yes: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// The request described by flags, when `--plan` was given.
    pub fn preset_request(&self) -> Option<PricingRequest> {
        self.plan.as_ref().map(|plan| {
            PricingRequest::new(
                plan.trim(),
                self.features.iter().map(|k| k.trim().to_string()).collect(),
                self.members,
            )
        })
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_positive_number("--members", self.members, 1)?;
        if let Some(plan) = &self.plan {
            validation::validate_non_empty_string("--plan", plan)?;
        }
        for key in &self.features {
            validation::validate_non_empty_string("--features", key)?;
        }
        Ok(())
    }
}
