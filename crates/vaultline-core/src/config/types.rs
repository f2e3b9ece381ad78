use serde::{Deserialize, Deserializer, Serialize};

/// Per-user settings stored in `~/.vaultline/vaultline-config.json`.
///
/// Every field defaults to empty, so a file written by an older client (or
/// no file at all) loads as a usable record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlobalConfig {
    /// Email of the user who last logged in; empty when nobody has.
    #[serde(deserialize_with = "null_as_empty")]
    pub logged_in_user_email: String,
    /// Identifier of the active secret-storage backend; empty means the
    /// client default.
    #[serde(deserialize_with = "null_as_empty")]
    pub vault_backend_type: String,
}

/// Treats an explicit JSON `null` the same as a missing key.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl GlobalConfig {
    pub fn is_logged_in(&self) -> bool {
        !self.logged_in_user_email.is_empty()
    }

    /// The configured backend, or `None` when the client default applies.
    pub fn vault_backend(&self) -> Option<&str> {
        if self.vault_backend_type.is_empty() {
            None
        } else {
            Some(&self.vault_backend_type)
        }
    }
}

/// Credentials handed over by the login flow.
///
/// Only the email is persisted; tokens stay with the credential store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCredentials {
    pub email: String,
}

impl UserCredentials {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = GlobalConfig::default();
        assert!(!config.is_logged_in());
        assert!(config.vault_backend().is_none());
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let config = GlobalConfig {
            logged_in_user_email: "a@x.com".to_string(),
            vault_backend_type: "file".to_string(),
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["loggedInUserEmail"], "a@x.com");
        assert_eq!(json["vaultBackendType"], "file");
    }

    #[test]
    fn test_missing_keys_default_to_empty() {
        let config: GlobalConfig =
            serde_json::from_str(r#"{"loggedInUserEmail":"a@x.com"}"#).unwrap();
        assert_eq!(config.logged_in_user_email, "a@x.com");
        assert_eq!(config.vault_backend_type, "");
        assert!(config.is_logged_in());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config: GlobalConfig =
            serde_json::from_str(r#"{"vaultBackendType":"auto","loggedInUserDomain":"x"}"#)
                .unwrap();
        assert_eq!(config.vault_backend(), Some("auto"));
    }

    #[test]
    fn test_null_values_decode_as_empty() {
        let config: GlobalConfig =
            serde_json::from_str(r#"{"loggedInUserEmail":null,"vaultBackendType":null}"#)
                .unwrap();
        assert_eq!(config, GlobalConfig::default());

        let config: GlobalConfig =
            serde_json::from_str(r#"{"loggedInUserEmail":"a@x.com","vaultBackendType":null}"#)
                .unwrap();
        assert!(config.is_logged_in());
        assert!(config.vault_backend().is_none());
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        let result = serde_json::from_str::<GlobalConfig>(r#"{"loggedInUserEmail":42}"#);
        assert!(result.is_err());
    }
}
