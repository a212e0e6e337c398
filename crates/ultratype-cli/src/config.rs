use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// CLI configuration loaded from `ultratype.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UltratypeConfig {
    #[serde(default)]
    pub schemas: SchemaSettings,
    #[serde(default)]
    pub generate: GenerateSettings,
}

/// Where schema files are found.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaSettings {
    /// File extension searched for when a directory is given, without the dot.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for SchemaSettings {
    fn default() -> Self {
        Self {
            extension: default_extension(),
        }
    }
}

/// Defaults for `ultratype gen`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateSettings {
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub strict: bool,
}

fn default_extension() -> String {
    "ut".to_string()
}

/// Discovery order for the config file:
/// 1. `--config <path>` or `ULTRATYPE_CONFIG` (clap merges the two)
/// 2. `./ultratype.toml` (project-local)
/// 3. `$XDG_CONFIG_HOME/ultratype/config.toml`
/// 4. `~/.config/ultratype/config.toml`
pub fn load_config(explicit_path: Option<&Path>) -> Result<UltratypeConfig, CliError> {
    if let Some(path) = explicit_path {
        return load_config_from_path(path);
    }

    let local = PathBuf::from("ultratype.toml");
    if local.exists() {
        return load_config_from_path(&local);
    }

    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg).join("ultratype/config.toml");
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    if let Some(home) = std::env::var_os("HOME") {
        let path = PathBuf::from(home).join(".config/ultratype/config.toml");
        if path.exists() {
            return load_config_from_path(&path);
        }
    }

    tracing::debug!("no config file found, using defaults");
    Ok(UltratypeConfig::default())
}

fn load_config_from_path(path: &Path) -> Result<UltratypeConfig, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CliError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config: UltratypeConfig = toml::from_str(&contents).map_err(|e| CliError::Config {
        message: format!("failed to parse {}: {}", path.display(), e),
    })?;

    let extension = config.schemas.extension.trim_start_matches('.');
    if extension.is_empty() {
        return Err(CliError::Config {
            message: format!("{}: schemas.extension must not be empty", path.display()),
        });
    }

    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

impl UltratypeConfig {
    /// The schema extension without a leading dot.
    pub fn extension(&self) -> &str {
        self.schemas.extension.trim_start_matches('.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = UltratypeConfig::default();
        assert_eq!(config.extension(), "ut");
        assert_eq!(config.generate.output_dir, None);
        assert!(!config.generate.strict);
    }

    #[test]
    fn parse_minimal_toml() {
        let toml_str = r#"
[generate]
strict = true
"#;
        let config: UltratypeConfig = toml::from_str(toml_str).unwrap();
        assert!(config.generate.strict);
        assert_eq!(config.extension(), "ut");
    }

    #[test]
    fn parse_full_toml() {
        let toml_str = r#"
[schemas]
extension = ".schema"

[generate]
output_dir = "gen/"
strict = false
"#;
        let config: UltratypeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.extension(), "schema");
        assert_eq!(config.generate.output_dir, Some(PathBuf::from("gen/")));
    }

    #[test]
    fn load_config_from_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ultratype.toml");
        std::fs::write(&path, "[schemas]\nextension = \"dsl\"\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.extension(), "dsl");
    }

    #[test]
    fn load_config_rejects_empty_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ultratype.toml");
        std::fs::write(&path, "[schemas]\nextension = \".\"\n").unwrap();
        assert!(matches!(
            load_config(Some(&path)),
            Err(CliError::Config { .. })
        ));
    }

    #[test]
    fn load_config_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ultratype.toml");
        std::fs::write(&path, "[generate\n").unwrap();
        assert!(matches!(
            load_config(Some(&path)),
            Err(CliError::Config { .. })
        ));
    }

    #[test]
    fn load_config_from_explicit_missing_file() {
        let result = load_config(Some(Path::new("/nonexistent/ultratype.toml")));
        assert!(matches!(result, Err(CliError::Io { .. })));
    }
}
