//! Cookie configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::flags::Flags;

/// Everything needed to open and prime a cookie.
///
/// ```toml
/// flags = ["mime_type", "symlink"]
/// database = ["/usr/share/misc/magic.mgc", "./local.magic"]
/// detailed_load_errors = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct MagicConfig {
    /// Flag names (see [`Flags::NAMED`]). Default: none.
    pub flags: Vec<String>,
    /// Databases to load. Default: the compiled-in database.
    pub database: Option<Vec<PathBuf>>,
    /// Report the native message when loading fails. Default: false.
    pub detailed_load_errors: Option<bool>,
}

impl MagicConfig {
    /// Parse from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn effective_flags(&self) -> Result<Flags, ConfigError> {
        Flags::from_names(&self.flags)
    }

    pub fn effective_detailed_load_errors(&self) -> bool {
        self.detailed_load_errors.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = MagicConfig::from_toml("").unwrap();
        assert_eq!(config, MagicConfig::default());
        assert_eq!(config.effective_flags().unwrap(), Flags::NONE);
        assert!(!config.effective_detailed_load_errors());
    }

    #[test]
    fn parses_all_fields() {
        let config = MagicConfig::from_toml(
            r#"
flags = ["mime_type", "MAGIC_SYMLINK"]
database = ["/tmp/a.mgc", "/tmp/b"]
detailed_load_errors = true
"#,
        )
        .unwrap();
        assert_eq!(
            config.effective_flags().unwrap(),
            Flags::MIME_TYPE | Flags::SYMLINK
        );
        assert_eq!(config.database.as_ref().map(Vec::len), Some(2));
        assert!(config.effective_detailed_load_errors());
    }

    #[test]
    fn unknown_flag_is_rejected_lazily() {
        let config = MagicConfig::from_toml(r#"flags = ["telepathy"]"#).unwrap();
        assert!(matches!(
            config.effective_flags(),
            Err(ConfigError::UnknownFlag(name)) if name == "telepathy"
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            MagicConfig::from_toml("flags = ["),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn toml_round_trip() {
        let config = MagicConfig {
            flags: vec!["mime".into()],
            database: Some(vec![PathBuf::from("/tmp/x.mgc")]),
            detailed_load_errors: Some(true),
        };
        let back = MagicConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = MagicConfig::load(Path::new("/nonexistent/magic.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
