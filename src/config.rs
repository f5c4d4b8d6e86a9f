use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config/app.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Name shown in the chat-list header.
    #[serde(default = "default_display_name")]
    pub display_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            display_name: default_display_name(),
        }
    }
}

fn default_display_name() -> String {
    "Your Name".to_string()
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = load_config("definitely/not/here.json");
        assert_eq!(config.display_name, "Your Name");
    }

    #[test]
    fn test_parses_display_name() {
        let config: AppConfig =
            serde_json::from_str(r#"{"display_name": "Alice"}"#).expect("valid config");
        assert_eq!(config.display_name, "Alice");
    }

    #[test]
    fn test_empty_object_falls_back_per_field() {
        let config: AppConfig = serde_json::from_str("{}").expect("valid config");
        assert_eq!(config.display_name, "Your Name");
    }
}
