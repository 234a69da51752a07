use std::fs;
use std::path::Path;

use crate::model::AppConfig;

/// Read config.toml from the data directory. A missing or unparseable
/// config is not an error — the app runs on defaults.
pub fn read_config(data_dir: &Path) -> AppConfig {
    let path = data_dir.join("config.toml");
    fs::read_to_string(&path)
        .ok()
        .and_then(|text| toml::from_str(&text).ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = read_config(dir.path());
        assert!(config.ui.highlight.is_none());
    }

    #[test]
    fn invalid_config_yields_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "not [valid toml").unwrap();
        let config = read_config(dir.path());
        assert!(config.ui.background.is_none());
    }

    #[test]
    fn ui_overrides_are_read() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            "[ui]\nbackground = \"#101010\"\ndim = \"#777777\"\n",
        )
        .unwrap();
        let config = read_config(dir.path());
        assert_eq!(config.ui.background.as_deref(), Some("#101010"));
        assert_eq!(config.ui.dim.as_deref(), Some("#777777"));
    }
}
