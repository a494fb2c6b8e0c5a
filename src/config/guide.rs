//! Guide wizard configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Wizard presentation settings
#[derive(Debug, Clone, Deserialize)]
pub struct GuideConfig {
    /// Label of the synthetic last entry of every detail list
    #[serde(default = "default_custom_entry_label")]
    pub custom_entry_label: String,
}

impl GuideConfig {
    /// Validate guide configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.custom_entry_label.trim().is_empty() {
            return Err(ValidationError::EmptyCustomEntryLabel);
        }
        Ok(())
    }
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            custom_entry_label: default_custom_entry_label(),
        }
    }
}

fn default_custom_entry_label() -> String {
    "Write my own".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_label_is_rejected() {
        let config = GuideConfig {
            custom_entry_label: "  ".to_string(),
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyCustomEntryLabel));
        assert!(GuideConfig::default().validate().is_ok());
    }
}
