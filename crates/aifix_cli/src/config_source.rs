//! Rule configuration selection.
//!
//! A run uses either a configuration file found in the working directory or
//! the embedded default rules, never a mix of both. The default rules are
//! handed to the engine through a temporary file that lives exactly as long
//! as the returned [`ActiveConfig`].

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use aifix_core::{RuleDescriptor, default_config};
use serde_json::Value;
use tempfile::TempPath;
use tracing::debug;

use crate::error::CliError;

/// Where the rule configuration of a run comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// A configuration file in the working directory.
    Local(PathBuf),
    /// The embedded default rules.
    Default(Value),
}

impl ConfigSource {
    /// Picks the local configuration in `dir` if there is one.
    pub fn detect(dir: &Path) -> Self {
        match RuleDescriptor::discover(dir) {
            Some(path) => ConfigSource::Local(path),
            None => ConfigSource::Default(default_config()),
        }
    }

    /// Returns true when the embedded default rules are used.
    pub fn is_default(&self) -> bool {
        matches!(self, ConfigSource::Default(_))
    }

    /// Loads the rule descriptor.
    pub fn load(&self) -> Result<ActiveConfig, CliError> {
        match self {
            ConfigSource::Local(path) => {
                debug!("Using config: {}", path.display());
                Ok(ActiveConfig {
                    descriptor: RuleDescriptor::from_file(path)?,
                    temp_file: None,
                })
            }
            ConfigSource::Default(payload) => {
                let temp_file = write_temp_config(payload)?;
                Ok(ActiveConfig {
                    descriptor: RuleDescriptor::from_file(&temp_file)?,
                    temp_file: Some(temp_file),
                })
            }
        }
    }
}

/// A loaded descriptor. Dropping it deletes the temporary default
/// configuration, ignoring any failure.
#[derive(Debug)]
pub struct ActiveConfig {
    pub descriptor: RuleDescriptor,
    temp_file: Option<TempPath>,
}

impl ActiveConfig {
    /// Path of the temporary default configuration, if one was written.
    pub fn temp_file(&self) -> Option<&Path> {
        self.temp_file.as_deref()
    }
}

fn write_temp_config(payload: &Value) -> Result<TempPath, CliError> {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();

    let mut file = tempfile::Builder::new()
        .prefix(&format!("textlintrc-{millis}-"))
        .suffix(".json")
        .tempfile()?;
    serde_json::to_writer_pretty(&mut file, payload)?;
    file.flush()?;

    Ok(file.into_temp_path())
}
