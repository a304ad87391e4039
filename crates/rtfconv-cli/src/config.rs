// SPDX-License-Identifier: AGPL-3.0-or-later
//! Optional TOML configuration file
//!
//! ```toml
//! formats = ["tex", "widget"]
//!
//! [read]
//! collect_gaps = true
//! ```

use rtfconv_core::{ConversionError, OutputFormat, ReadConfig, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Formats to produce when none are given on the command line
    pub formats: Vec<OutputFormat>,
    pub read: ReadConfig,
}

impl CliConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| ConversionError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(CliConfig::from_toml("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "formats = [\"tex\", \"widget\"]\n\n[read]\ncollect_gaps = true").unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.formats, vec![OutputFormat::Tex, OutputFormat::Widget]);
        assert!(config.read.collect_gaps);
    }

    #[test]
    fn test_rejects_unknown_format() {
        let err = CliConfig::from_toml("formats = [\"rtf\"]").unwrap_err();
        assert!(matches!(err, ConversionError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConversionError::Io(_)));
    }
}
