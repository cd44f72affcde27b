//! TUI settings loaded from `hba.toml`

use armour_core::config::{load_toml, ConfigError};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

/// Settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "hba.toml";

/// Tunable paths for the TUI; every field is optional in the file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiSettings {
    /// Armour definitions loaded at start-up (created from a template if missing)
    pub default_armour: PathBuf,
    /// Where tracing output goes; the terminal belongs to the UI
    pub log_file: PathBuf,
    /// Suggested path when saving the configuration
    pub save_path: PathBuf,
    /// Where the hit log is exported as JSON
    pub export_path: PathBuf,
}

impl Default for TuiSettings {
    fn default() -> Self {
        TuiSettings {
            default_armour: PathBuf::from("./default.hba"),
            log_file: PathBuf::from("hba.log"),
            save_path: PathBuf::from("./campaign.hacfg"),
            export_path: PathBuf::from("hba_log.json"),
        }
    }
}

impl TuiSettings {
    /// Load settings, falling back to defaults when the file does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match load_toml::<TuiSettings>(path) {
            Ok(settings) => {
                settings.validate()?;
                Ok(settings)
            }
            Err(ConfigError::IoError(e)) if e.kind() == io::ErrorKind::NotFound => {
                Ok(TuiSettings::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Every path must be set
    pub fn validate(&self) -> Result<(), ConfigError> {
        let paths = [
            ("default_armour", &self.default_armour),
            ("log_file", &self.log_file),
            ("save_path", &self.save_path),
            ("export_path", &self.export_path),
        ];
        for (key, path) in paths {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(format!("{} must not be empty", key)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use armour_core::config::parse_toml;

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: TuiSettings = parse_toml("log_file = \"other.log\"").unwrap();
        assert_eq!(settings.log_file, PathBuf::from("other.log"));
        assert_eq!(settings.default_armour, PathBuf::from("./default.hba"));
    }

    #[test]
    fn test_missing_file_is_default() {
        let settings = TuiSettings::load(Path::new("/definitely/not/here/hba.toml")).unwrap();
        assert_eq!(settings, TuiSettings::default());
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "export_path = \"\"\n").unwrap();

        match TuiSettings::load(&path) {
            Err(ConfigError::ValidationError(message)) => {
                assert_eq!(message, "export_path must not be empty")
            }
            other => panic!("expected a validation error, got {:?}", other),
        }
        assert!(TuiSettings::default().validate().is_ok());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "log_file = ").unwrap();

        assert!(matches!(TuiSettings::load(&path), Err(ConfigError::ParseError(_))));
    }
}
