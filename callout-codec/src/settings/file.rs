//! Settings persistence
//!
//! Stands in for the host's load/merge/save object store. A missing file means
//! fresh defaults; a file that exists but does not parse is an error, so a typo never
//! silently wipes the user's definitions on the next save.

use super::Settings;
use crate::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: PathBuf,
}

impl SettingsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Settings> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let settings = serde_json::from_str(&contents)?;
                debug!(path = %self.path.display(), "loaded settings");
                Ok(settings)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no settings file, using defaults");
                Ok(Settings::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Write pretty JSON, creating parent directories as needed
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), "saved settings");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecError;
    use crate::settings::{CalloutStyle, CustomCalloutDefinition};
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let file = SettingsFile::new(dir.path().join("absent.json"));
        assert_eq!(file.load().unwrap(), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let file = SettingsFile::new(dir.path().join("nested/dir/callouts.json"));

        let mut settings = Settings::default();
        settings.set_style(CalloutStyle::Borderless);
        settings
            .add_callout(CustomCalloutDefinition::new("project", "rocket", "#3498db"))
            .unwrap();
        file.save(&settings).unwrap();

        assert_eq!(file.load().unwrap(), settings);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("callouts.json");
        fs::write(&path, "{ not json").unwrap();
        let err = SettingsFile::new(path).load().unwrap_err();
        assert!(matches!(err, CodecError::Json(_)));
    }
}
