use crate::errors::VaultlineError;

/// Errors raised while resolving, reading or writing configuration.
///
/// A missing global config file is not represented here: it loads as the
/// default record.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine {subject}: {message}")]
    Environment {
        subject: &'static str,
        message: String,
    },

    #[error("Failed to {operation} at '{path}': {source}")]
    Storage {
        operation: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("File not found: {file_name} (searched the current directory and all parent directories)")]
    NotFound { file_name: String },
}

impl VaultlineError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Environment { .. } => "CONFIG_ENVIRONMENT",
            ConfigError::Storage { .. } => "CONFIG_STORAGE",
            ConfigError::Decode { .. } => "CONFIG_DECODE",
            ConfigError::NotFound { .. } => "CONFIG_NOT_FOUND",
        }
    }

    fn is_user_error(&self) -> bool {
        // Exhaustive match ensures new variants force an explicit classification.
        match self {
            ConfigError::Decode { .. } | ConfigError::NotFound { .. } => true,

            ConfigError::Environment { .. } | ConfigError::Storage { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_error_display() {
        let error = ConfigError::Environment {
            subject: "home directory",
            message: "HOME is not set".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Could not determine home directory: HOME is not set"
        );
        assert_eq!(error.error_code(), "CONFIG_ENVIRONMENT");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_storage_error_names_operation() {
        let error = ConfigError::Storage {
            operation: "create config directory",
            path: "/home/test/.vaultline".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = error.to_string();
        assert!(message.contains("create config directory"));
        assert!(message.contains("/home/test/.vaultline"));
        assert!(message.contains("denied"));
        assert_eq!(error.error_code(), "CONFIG_STORAGE");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_decode_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        let error = ConfigError::Decode {
            path: "/tmp/.vaultline.json".to_string(),
            source,
        };
        assert!(error.to_string().starts_with("Failed to parse config file"));
        assert!(std::error::Error::source(&error).is_some());
        assert_eq!(error.error_code(), "CONFIG_DECODE");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_not_found_error_names_file() {
        let error = ConfigError::NotFound {
            file_name: ".vaultline.json".to_string(),
        };
        assert!(error.to_string().contains(".vaultline.json"));
        assert_eq!(error.error_code(), "CONFIG_NOT_FOUND");
        assert!(error.is_user_error());
    }
}
