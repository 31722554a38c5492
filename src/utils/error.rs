use thiserror::Error;

#[derive(Error, Debug)]
pub enum GymError {
    #[error("Invalid membership plan: {plan}")]
    InvalidPlan { plan: String },

    #[error("Invalid feature key: {key}")]
    InvalidFeature { key: String },

    #[error("Invalid member count: {count}")]
    InvalidMemberCount { count: i64 },

    #[error("Invalid feature selection: {message}")]
    InvalidSelection { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Input stream closed before the signup finished")]
    InputClosed,

    #[error("Cost calculation overflowed at stage: {stage}")]
    CostOverflow { stage: &'static str },

    #[error("Configuration validation failed for {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Pricing,
    UserInput,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GymError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            GymError::InvalidPlan { .. }
            | GymError::InvalidFeature { .. }
            | GymError::CostOverflow { .. } => ErrorCategory::Pricing,
            GymError::InvalidMemberCount { .. }
            | GymError::InvalidSelection { .. }
            | GymError::InvalidInput { .. }
            | GymError::InputClosed => ErrorCategory::UserInput,
            GymError::ConfigValidationError { .. } | GymError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            GymError::IoError(_) | GymError::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GymError::InvalidMemberCount { .. } | GymError::InvalidInput { .. } => {
                ErrorSeverity::Medium
            }
            GymError::InvalidPlan { .. }
            | GymError::InvalidFeature { .. }
            | GymError::InvalidSelection { .. }
            | GymError::InputClosed
            | GymError::ConfigValidationError { .. }
            | GymError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            GymError::CostOverflow { .. }
            | GymError::IoError(_)
            | GymError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    /// True when the user can fix the problem by typing something else.
    pub fn is_retryable(&self) -> bool {
        self.severity() == ErrorSeverity::Medium
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            GymError::InvalidPlan { .. } => {
                "Choose one of the listed plans; names are case sensitive (e.g. Basic)".to_string()
            }
            GymError::InvalidFeature { key } => format!(
                "Remove feature '{}' and pick keys from the feature list",
                key
            ),
            GymError::InvalidMemberCount { .. } => {
                "Enter a whole number of members, at least 1".to_string()
            }
            GymError::InvalidSelection { .. } => {
                "Separate feature keys with commas, e.g. 1,3".to_string()
            }
            GymError::InvalidInput { .. } => "Enter a whole number, e.g. 2".to_string(),
            GymError::InputClosed => "Run the signup again from an interactive terminal".to_string(),
            GymError::CostOverflow { .. } => "Reduce the member count or feature list".to_string(),
            GymError::ConfigValidationError { field, .. }
            | GymError::InvalidConfigValueError { field, .. } => {
                format!("Check the '{}' entry in the configuration file", field)
            }
            GymError::IoError(_) => "Check that the file exists and is readable".to_string(),
            GymError::SerializationError(_) => "Report this as a bug".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GymError::InvalidPlan { plan } => format!("Plan '{}' is not available.", plan),
            GymError::InvalidFeature { key } => format!("Feature '{}' is not available.", key),
            GymError::InvalidMemberCount { .. } => "At least one member is required.".to_string(),
            GymError::InvalidSelection { message } => format!("Invalid selection: {}", message),
            GymError::InvalidInput { .. } => "Invalid number.".to_string(),
            GymError::InputClosed => "No more input; signup aborted.".to_string(),
            GymError::CostOverflow { .. } => "The requested membership is too large to price.".to_string(),
            GymError::ConfigValidationError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            GymError::InvalidConfigValueError { field, value, reason } => {
                format!("Configuration value '{}' for {} is invalid: {}", value, field, reason)
            }
            GymError::IoError(e) => format!("File error: {}", e),
            GymError::SerializationError(e) => format!("Could not serialize output: {}", e),
        }
    }

    /// Process exit code for a failed run.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, GymError>;
