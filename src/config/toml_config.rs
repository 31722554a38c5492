use crate::domain::model::PricingRequest;
use crate::utils::error::{GymError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub quote: QuoteConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteConfig {
    pub plan: String,
    pub members: Option<u32>,
    pub features: Option<Vec<String>>,
    pub auto_confirm: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `gym_membership=debug`.
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GymError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GymError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GYM_PLAN})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GymError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("quote.plan", &self.quote.plan)?;
        validation::validate_positive_number("quote.members", self.member_count(), 1)?;
        for key in self.feature_keys() {
            validation::validate_non_empty_string("quote.features", key)?;
        }
        if let Some(level) = self.log_directive() {
            validation::validate_non_empty_string("logging.level", level)?;
        }
        Ok(())
    }

    pub fn member_count(&self) -> u32 {
        self.quote.members.unwrap_or(1)
    }

    pub fn feature_keys(&self) -> &[String] {
        self.quote.features.as_deref().unwrap_or(&[])
    }

    pub fn auto_confirm(&self) -> bool {
        self.quote.auto_confirm.unwrap_or(false)
    }

    pub fn log_directive(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logging(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }

    pub fn to_request(&self) -> PricingRequest {
        PricingRequest::new(
            self.quote.plan.trim(),
            self.feature_keys().iter().map(|k| k.trim().to_string()).collect(),
            self.member_count(),
        )
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
