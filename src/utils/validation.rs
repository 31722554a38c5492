use crate::utils::error::{GymError, Result};

pub const FEATURE_DELIMITER: char = ',';

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(GymError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GymError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Parses a member count typed by a user.
///
/// Non-numeric text is `InvalidInput`; numbers below one are
/// `InvalidMemberCount`.
pub fn parse_member_count(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    let count: i64 = trimmed.parse().map_err(|_| GymError::InvalidInput {
        message: format!("'{}' is not a whole number", trimmed),
    })?;

    if count < 1 {
        return Err(GymError::InvalidMemberCount { count });
    }

    u32::try_from(count).map_err(|_| GymError::InvalidInput {
        message: format!("{} members is more than can be enrolled at once", count),
    })
}

/// Splits a comma separated selection such as `"1, 3"` into trimmed keys.
///
/// Blank input means no features. Empty tokens (`"1,,3"`, `"1,"`) are rejected.
pub fn parse_feature_keys(input: &str) -> Result<Vec<String>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    trimmed
        .split(FEATURE_DELIMITER)
        .enumerate()
        .map(|(position, token)| {
            let key = token.trim();
            if key.is_empty() {
                Err(GymError::InvalidSelection {
                    message: format!("empty feature key at position {}", position + 1),
                })
            } else {
                Ok(key.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("quote.members", 2, 1).is_ok());
        assert!(validate_positive_number("quote.members", 0, 1).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("quote.plan", "Basic").is_ok());
        assert!(validate_non_empty_string("quote.plan", "   ").is_err());
    }

    #[test]
    fn test_parse_member_count() {
        assert_eq!(parse_member_count(" 3 ").unwrap(), 3);
        assert!(matches!(
            parse_member_count("0"),
            Err(GymError::InvalidMemberCount { count: 0 })
        ));
        assert!(matches!(
            parse_member_count("-2"),
            Err(GymError::InvalidMemberCount { count: -2 })
        ));
        assert!(matches!(
            parse_member_count("two"),
            Err(GymError::InvalidInput { .. })
        ));
        assert!(matches!(
            parse_member_count("99999999999"),
            Err(GymError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_parse_feature_keys() {
        assert!(parse_feature_keys("").unwrap().is_empty());
        assert!(parse_feature_keys("   ").unwrap().is_empty());
        assert_eq!(parse_feature_keys("1, 3").unwrap(), vec!["1", "3"]);
        assert_eq!(parse_feature_keys("2,2").unwrap(), vec!["2", "2"]);
    }

    #[test]
    fn test_parse_feature_keys_rejects_empty_tokens() {
        assert!(matches!(
            parse_feature_keys("1,,3"),
            Err(GymError::InvalidSelection { .. })
        ));
        assert!(parse_feature_keys("1,").is_err());
        assert!(parse_feature_keys(",").is_err());
    }
}
