use crate::undo_stack::DEFAULT_HISTORY_CAPACITY;
use serde::{Deserialize, Serialize};

/// Session settings, usually read from the `historyCapacity` key of
/// `boxlevel.config.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    /// Undo levels kept before the oldest is dropped (0 = unlimited)
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_capacity: default_history_capacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_uses_default() {
        let config: EditorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EditorConfig::default());
        assert_eq!(config.history_capacity, 50);
    }

    #[test]
    fn test_camel_case_key() {
        let config: EditorConfig = serde_json::from_str(r#"{"historyCapacity": 3}"#).unwrap();
        assert_eq!(config.history_capacity, 3);
    }
}
