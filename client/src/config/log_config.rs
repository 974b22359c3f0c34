use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    pub enabled: bool,
    pub prefix: Option<String>,
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.prefix
            && prefix.trim().is_empty()
        {
            return Err("log prefix must not be blank if provided".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_prefix_is_rejected() {
        let config = LogConfig {
            enabled: true,
            prefix: Some("  ".to_string()),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_prefix_is_fine() {
        assert!(LogConfig::default().validate().is_ok());
        let config = LogConfig {
            enabled: true,
            prefix: Some("Game".to_string()),
        };
        assert!(config.validate().is_ok());
    }
}
