use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOCAL_DEPENDENCIES_PREFIX;

/// Per-target settings for a resolution run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveOptions {
    /// Prepended to the mapped type to build the path of a local dependency
    /// declared without one.
    #[serde(default = "default_local_dependencies_prefix")]
    pub local_dependencies_prefix: String,
    /// When set, local asset references in styles and `url`/`srcset`
    /// attributes are rewritten against it.
    #[serde(default)]
    pub assets_prefix: Option<String>,
}

fn default_local_dependencies_prefix() -> String {
    DEFAULT_LOCAL_DEPENDENCIES_PREFIX.to_string()
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            local_dependencies_prefix: default_local_dependencies_prefix(),
            assets_prefix: None,
        }
    }
}

impl ResolveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_local_dependencies_prefix(mut self, prefix: &str) -> Self {
        self.local_dependencies_prefix = prefix.to_string();
        self
    }

    pub fn with_assets_prefix(mut self, prefix: &str) -> Self {
        self.assets_prefix = Some(prefix.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let options: ResolveOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ResolveOptions::default());
        assert_eq!(options.local_dependencies_prefix, "./");
        assert!(options.assets_prefix.is_none());
    }

    #[test]
    fn test_camel_case_fields() {
        let options: ResolveOptions = serde_json::from_str(
            r#"{ "localDependenciesPrefix": "../components/", "assetsPrefix": "/static" }"#,
        )
        .unwrap();
        assert_eq!(
            options,
            ResolveOptions::new()
                .with_local_dependencies_prefix("../components/")
                .with_assets_prefix("/static")
        );
    }
}
