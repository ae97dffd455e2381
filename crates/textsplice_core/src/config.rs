//! Rule files.

use std::fs;
use std::path::{Path, PathBuf};

use jsonc_parser::ParseOptions;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use textsplice_ast::TagTest;

use crate::{Ignore, Options, ReplaceError, Schema};

/// Find-and-replace rules as stored on disk.
///
/// ```jsonc
/// {
///   // `[find, replace]` tuples, or an object mapping text to replacements
///   "rules": [["teh", "the"], [{ "regex": "\\s+$" }, null]],
///   "ignore": ["pre", "code"],
///   "extendDefaultIgnore": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Rules in any shape accepted by [`Schema::from_value`].
    #[serde(default = "default_rules")]
    pub rules: Value,

    /// Tag names to leave alone. The default set applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore: Option<TagTest>,

    /// Adds `ignore` to the default set instead of replacing it.
    #[serde(default)]
    pub extend_default_ignore: bool,
}

fn default_rules() -> Value {
    Value::Array(Vec::new())
}

impl Config {
    /// File names looked up by [`Config::discover`], in order.
    pub const CONFIG_FILES: [&'static str; 2] = [".textsplice.jsonc", ".textsplice.json"];

    /// Creates a configuration with no rules.
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
            ignore: None,
            extend_default_ignore: false,
        }
    }

    /// Loads configuration from a JSON or JSONC file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ReplaceError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ReplaceError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_jsonc(&content)
    }

    /// Parses configuration text; comments and trailing commas are allowed.
    pub fn from_jsonc(content: &str) -> Result<Self, ReplaceError> {
        let value = jsonc_parser::parse_to_serde_value(content, &ParseOptions::default())
            .map_err(|e| ReplaceError::config(format!("Failed to parse config: {}", e)))?
            .unwrap_or_else(|| Value::Object(serde_json::Map::new()));

        serde_json::from_value(value)
            .map_err(|e| ReplaceError::config(format!("Invalid config: {}", e)))
    }

    /// Returns the first config file found in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        Self::CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Builds the rules.
    pub fn schema(&self) -> Result<Schema<'static>, ReplaceError> {
        Schema::from_value(&self.rules)
    }

    /// Builds the traversal options.
    pub fn options(&self) -> Options {
        let ignore = match (&self.ignore, self.extend_default_ignore) {
            (None, _) => Ignore::default(),
            (Some(test), true) => Ignore::default_with(test.tag_names()),
            (Some(test), false) => Ignore::new(test.clone()),
        };

        Options { ignore }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
