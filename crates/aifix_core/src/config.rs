//! Rule descriptor loading.
//!
//! A descriptor is the resolved form of a textlintrc-style configuration
//! file: the list of rules to run, each with its reported id, options and
//! severity. Presets are expanded here so the linter only ever sees single
//! rules.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use jsonc_parser::ParseOptions;
use jsonschema::Validator;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::LinterError;
use crate::diagnostic::Severity;
use crate::rules;

// Embed the schema
const SCHEMA_JSON: &str = include_str!("../../../schemas/v1/textlintrc.json");
static CONFIG_SCHEMA: OnceLock<Validator> = OnceLock::new();

/// Preset key used by the embedded default configuration.
pub const DEFAULT_PRESET: &str = "@textlint-ja/preset-ai-writing";

const PRESET_NAME: &str = "preset-ai-writing";
const RULE_PACKAGE_PREFIX: &str = "textlint-rule-";

/// Raw shape of a textlintrc file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextlintConfig {
    /// Rules and presets keyed by package name.
    #[serde(default)]
    pub rules: Map<String, Value>,

    /// Accepted for compatibility, ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Value>,

    /// Accepted for compatibility, ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Value>,
}

/// Configuration for a single rule or preset entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RuleOption {
    /// Rule is enabled/disabled (boolean).
    Enabled(bool),
    /// Rule is enabled with specific options object.
    Options(Value),
}

impl RuleOption {
    /// Returns whether the rule is enabled.
    pub fn is_enabled(&self) -> bool {
        match self {
            RuleOption::Enabled(enabled) => *enabled,
            RuleOption::Options(_) => true,
        }
    }

    /// Gets the rule options as JSON value.
    pub fn options(&self) -> Value {
        match self {
            RuleOption::Enabled(_) => Value::Null,
            RuleOption::Options(v) => v.clone(),
        }
    }
}

/// A single rule, resolved from the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleEntry {
    /// Rule id reported in diagnostics.
    pub id: String,
    /// Name of the built-in rule implementing it.
    pub name: String,
    /// Rule options (`Value::Null` when none were given).
    pub options: Value,
    /// Severity attached to every diagnostic of this rule.
    pub severity: Severity,
}

/// The rule set a `Linter` is bound to.
#[derive(Debug, Clone, Default)]
pub struct RuleDescriptor {
    /// Enabled rules in configuration order.
    pub rules: Vec<RuleEntry>,
    /// File the descriptor was loaded from, if any.
    pub source: Option<PathBuf>,
}

impl RuleDescriptor {
    /// Configuration file names looked up by [`RuleDescriptor::discover`], in
    /// priority order.
    pub const CONFIG_FILES: &'static [&'static str] =
        &[".textlintrc", ".textlintrc.json", ".textlintrc.jsonc"];

    /// Finds a configuration file directly inside `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Loads a descriptor from a file.
    ///
    /// JSON with comments is accepted, as textlint does for `.textlintrc`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LinterError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LinterError::config(format!(
                "Failed to read config {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut descriptor = Self::from_json(&content)?;
        descriptor.source = Some(path.to_path_buf());
        debug!(
            "Loaded {} rule(s) from {}",
            descriptor.rules.len(),
            path.display()
        );
        Ok(descriptor)
    }

    /// Parses a descriptor from a JSON (or JSONC) string with schema
    /// validation.
    pub fn from_json(json: &str) -> Result<Self, LinterError> {
        let value = jsonc_parser::parse_to_serde_value(json, &ParseOptions::default())
            .map_err(|e| LinterError::config(format!("Invalid JSON: {}", e)))?
            .unwrap_or(Value::Object(Map::new()));

        Self::from_value(value)
    }

    /// Builds a descriptor from an already parsed configuration value.
    pub fn from_value(value: Value) -> Result<Self, LinterError> {
        let schema = CONFIG_SCHEMA.get_or_init(|| {
            let schema_json: Value =
                serde_json::from_str(SCHEMA_JSON).expect("Invalid embedded config schema");
            Validator::new(&schema_json).expect("Invalid config schema compilation")
        });

        if let Err(e) = schema.validate(&value) {
            let error_msg = format!("{} at {}", e, e.instance_path());
            return Err(LinterError::config(format!(
                "Config validation failed: {}",
                error_msg
            )));
        }

        let config: TextlintConfig = serde_json::from_value(value)
            .map_err(|e| LinterError::config(format!("Invalid config: {}", e)))?;

        if config.filters.is_some() || config.plugins.is_some() {
            debug!("Ignoring `filters` and `plugins` sections");
        }

        Ok(Self {
            rules: expand_rules(&config.rules)?,
            source: None,
        })
    }

    /// Returns true if no rule is enabled.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// The embedded default configuration: the full AI-writing preset.
pub fn default_config() -> Value {
    serde_json::json!({
        "rules": {
            DEFAULT_PRESET: true
        }
    })
}

/// Expands presets and resolves rule keys against the built-in rules.
fn expand_rules(rules: &Map<String, Value>) -> Result<Vec<RuleEntry>, LinterError> {
    let mut entries = Vec::new();

    for (key, value) in rules {
        let option: RuleOption = serde_json::from_value(value.clone())
            .map_err(|e| LinterError::config(format!("Invalid option for '{}': {}", key, e)))?;
        let name = package_name(key);

        if name == PRESET_NAME {
            if !option.is_enabled() {
                continue;
            }
            let prefix = preset_prefix(key);
            let overrides = option.options();

            for rule_name in rules::BUILTIN_RULES {
                let rule_option = match overrides.get(rule_name) {
                    Some(v) => serde_json::from_value(v.clone()).map_err(|e| {
                        LinterError::config(format!(
                            "Invalid option for '{}/{}': {}",
                            key, rule_name, e
                        ))
                    })?,
                    None => RuleOption::Enabled(true),
                };
                let id = format!("{prefix}/{rule_name}");
                if let Some(entry) = resolve_entry(id, rule_name, &rule_option)? {
                    entries.push(entry);
                }
            }
        } else if rules::is_builtin(name) {
            if let Some(entry) = resolve_entry(key.clone(), name, &option)? {
                entries.push(entry);
            }
        } else {
            warn!("Unknown rule '{}'. Skipping...", key);
        }
    }

    Ok(entries)
}

fn resolve_entry(
    id: String,
    name: &str,
    option: &RuleOption,
) -> Result<Option<RuleEntry>, LinterError> {
    if !option.is_enabled() {
        debug!("Rule '{}' is disabled", id);
        return Ok(None);
    }

    let options = option.options();
    let severity = match options.get("severity") {
        None => Severity::Error,
        Some(v) => serde_json::from_value(v.clone()).map_err(|e| {
            LinterError::config(format!("Invalid severity for '{}': {}", id, e))
        })?,
    };

    Ok(Some(RuleEntry {
        id,
        name: name.to_string(),
        options,
        severity,
    }))
}

/// Returns the last path segment of a rule key without the `textlint-rule-`
/// package prefix.
fn package_name(key: &str) -> &str {
    let last = key.rsplit('/').next().unwrap_or(key);
    last.strip_prefix(RULE_PACKAGE_PREFIX).unwrap_or(last)
}

/// `@textlint-ja/preset-ai-writing` reports its rules as
/// `@textlint-ja/ai-writing/<rule>`.
fn preset_prefix(key: &str) -> String {
    let short = PRESET_NAME.trim_start_matches("preset-");
    match key.rsplit_once('/') {
        Some((scope, _)) => format!("{scope}/{short}"),
        None => short.to_string(),
    }
}
