use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Contents of a `.vaultline.json` workspace marker.
///
/// Written by the project `init` flow; this crate only reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkspaceConfig {
    /// Remote project this directory tree is bound to.
    pub workspace_id: String,
    /// Environment used when no branch mapping applies (may be empty).
    pub default_environment: String,
    /// Git branch name to environment slug.
    pub git_branch_to_environment_mapping: BTreeMap<String, String>,
}

impl WorkspaceConfig {
    /// Environment to use for `branch`.
    ///
    /// Falls back to `default_environment` when the branch is unmapped.
    /// Returns `None` if neither is set.
    pub fn environment_for_branch(&self, branch: &str) -> Option<&str> {
        self.git_branch_to_environment_mapping
            .get(branch)
            .map(String::as_str)
            .filter(|env| !env.is_empty())
            .or_else(|| {
                if self.default_environment.is_empty() {
                    None
                } else {
                    Some(self.default_environment.as_str())
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> WorkspaceConfig {
        serde_json::from_str(
            r#"{
                "workspaceId": "ws-123",
                "defaultEnvironment": "dev",
                "gitBranchToEnvironmentMapping": { "main": "prod", "staging": "staging" }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_decodes_camel_case_keys() {
        let config = sample();
        assert_eq!(config.workspace_id, "ws-123");
        assert_eq!(config.default_environment, "dev");
        assert_eq!(config.git_branch_to_environment_mapping.len(), 2);
    }

    #[test]
    fn test_mapping_is_optional() {
        let config: WorkspaceConfig = serde_json::from_str(r#"{"workspaceId":"ws-1"}"#).unwrap();
        assert_eq!(config.workspace_id, "ws-1");
        assert!(config.git_branch_to_environment_mapping.is_empty());
    }

    #[test]
    fn test_environment_for_mapped_branch() {
        assert_eq!(sample().environment_for_branch("main"), Some("prod"));
    }

    #[test]
    fn test_environment_for_unmapped_branch_uses_default() {
        assert_eq!(sample().environment_for_branch("feature/x"), Some("dev"));
    }

    #[test]
    fn test_environment_for_branch_none_when_unset() {
        let config = WorkspaceConfig {
            workspace_id: "ws-1".to_string(),
            ..Default::default()
        };
        assert_eq!(config.environment_for_branch("main"), None);
    }
}
