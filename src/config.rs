use std::path::Path;

use crate::error::ConfigError;

/// Config file picked up from the working directory when none is named.
pub const DEFAULT_CONFIG_PATH: &str = "connectz.toml";

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub render: RenderConfig,
    pub output: OutputConfig,
}

/// Symbols used when printing a board.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub player_one: String,
    pub player_two: String,
    pub empty: String,
    pub separator: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            player_one: "x".to_string(),
            player_two: "o".to_string(),
            empty: " ".to_string(),
            separator: "| ".to_string(),
        }
    }
}

/// Extra diagnostics written to stderr. The status code on stdout is never
/// affected.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print the final board.
    pub show_board: bool,
    /// Print every move and the status it produced.
    pub trace: bool,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!("Warning: config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load the named config file, warning if it is missing. Without a name,
    /// use `connectz.toml` from the working directory when present and the
    /// defaults otherwise, without a warning.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_or_default(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Self::load(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let symbols = [
            ("render.player_one", &self.render.player_one),
            ("render.player_two", &self.render.player_two),
            ("render.empty", &self.render.empty),
        ];
        for (name, value) in symbols {
            if value.is_empty() {
                return Err(ConfigError::Validation(format!("{name} must not be empty")));
            }
        }
        if self.render.player_one == self.render.player_two {
            return Err(ConfigError::Validation(
                "render.player_one and render.player_two must differ".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[render]
player_one = "X"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.render.player_one, "X");
        assert_eq!(config.render.player_two, "o");
        assert!(!config.output.show_board);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_validation_rejects_empty_symbol() {
        let mut config = AppConfig::default();
        config.render.empty = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_identical_players() {
        let mut config = AppConfig::default();
        config.render.player_two = "x".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_resolve_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[output]\ntrace = true\n").unwrap();
        let config = AppConfig::resolve(Some(&path)).unwrap();
        assert!(config.output.trace);

        let missing = dir.path().join("missing.toml");
        assert_eq!(AppConfig::resolve(Some(&missing)).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_resolve_explicit_path_still_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[render]\nempty = \"\"\n").unwrap();
        assert!(matches!(
            AppConfig::resolve(Some(&path)),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connectz.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[output]
show_board = true
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert!(config.output.show_board);
        assert!(!config.output.trace);
        assert_eq!(config.render, RenderConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connectz.toml");
        std::fs::write(&path, "[render]\nplayer_one = \"o\"\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }
}
