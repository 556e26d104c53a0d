use boxlevel_editor::EditorConfig;
use boxlevel_linter::LintOptions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "boxlevel.config.json";

/// Boxlevel configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding the level `.txt` files
    #[serde(default = "default_levels_dir")]
    pub levels_dir: String,

    /// Undo levels for editing sessions
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    #[serde(default)]
    pub lint: LintConfig,
}

fn default_levels_dir() -> String {
    "levels".to_string()
}

fn default_history_capacity() -> usize {
    boxlevel_editor::DEFAULT_HISTORY_CAPACITY
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LintConfig {
    /// Rule names to skip
    #[serde(default)]
    pub disabled_rules: Vec<String>,

    /// Treat every warning as an error (non-zero exit)
    #[serde(default)]
    pub warnings_as_errors: bool,
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "loaded config");
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Get absolute path to the levels directory
    pub fn get_levels_dir(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.levels_dir)
    }

    pub fn editor_config(&self) -> EditorConfig {
        EditorConfig {
            history_capacity: self.history_capacity,
        }
    }

    pub fn lint_options(&self) -> LintOptions {
        LintOptions {
            registry: None,
            disabled_rules: self.lint.disabled_rules.clone(),
            warnings_as_errors: self.lint.warnings_as_errors,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            levels_dir: default_levels_dir(),
            history_capacity: default_history_capacity(),
            lint: LintConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "levelsDir": "puzzles",
            "historyCapacity": 10,
            "lint": { "disabledRules": ["cell-conflict"], "warningsAsErrors": true }
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.levels_dir, "puzzles");
        assert_eq!(config.history_capacity, 10);
        assert_eq!(config.lint.disabled_rules, vec!["cell-conflict"]);
        assert!(config.lint.warnings_as_errors);

        let options = config.lint_options();
        assert_eq!(options.disabled_rules, vec!["cell-conflict"]);
        assert!(options.warnings_as_errors);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.levels_dir, "levels");
        assert_eq!(config.editor_config(), EditorConfig::default());
        assert!(config.lint.disabled_rules.is_empty());
        assert!(!config.lint.warnings_as_errors);
    }

    #[test]
    fn test_partial_config() {
        let config: Config = serde_json::from_str(r#"{ "levelsDir": "lv" }"#).unwrap();
        assert_eq!(config.levels_dir, "lv");
        assert_eq!(config.history_capacity, 50);
    }
}
