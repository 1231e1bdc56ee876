use std::collections::btree_map::{BTreeMap, Iter};

use serde::Serialize;

use super::ConfigError;

/// Default string placed between a section name and a key.
pub const DEFAULT_SEPARATOR: &str = "_";

/// Where a stored setting came from. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    File,
    CommandLine,
    Set,
}

impl Origin {
    /// Label shown after a value in trace lines; empty for file settings.
    pub fn label(self) -> &'static str {
        match self {
            Self::File => "",
            Self::CommandLine => "command line",
            Self::Set => "set",
        }
    }
}

/// One stored option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Setting {
    pub value: String,
    pub source: Origin,
    pub used: bool,
}

impl Setting {
    /// Appends ` (<source>)` to `line` when the setting has a source label.
    pub(crate) fn annotate(&self, line: &mut String) {
        let label = self.source.label();
        if !label.is_empty() {
            line.push_str(" (");
            line.push_str(label);
            line.push(')');
        }
    }
}

/// Builds a fully-qualified key: `section<sep>key`, or just `key` when the
/// section is empty, lower-cased either way.
pub fn qualify(section: &str, separator: &str, key: &str) -> String {
    if section.is_empty() {
        key.to_ascii_lowercase()
    } else {
        format!("{section}{separator}{key}").to_ascii_lowercase()
    }
}

/// Mapping from fully-qualified key to setting. Later inserts overwrite.
#[derive(Debug, Clone)]
pub struct Store {
    entries: BTreeMap<String, Setting>,
    separator: String,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl Store {
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Changes the separator for future keys. Stored keys are left as they are.
    pub fn set_separator(&mut self, separator: impl Into<String>) {
        self.separator = separator.into();
    }

    pub fn qualify(&self, section: &str, key: &str) -> String {
        qualify(section, &self.separator, key)
    }

    pub fn add(
        &mut self,
        section: &str,
        key: &str,
        value: impl Into<String>,
        source: Origin,
    ) -> Result<(), ConfigError> {
        if key.is_empty() {
            return Err(ConfigError::EmptyKey);
        }

        let full_key = self.qualify(section, key);
        let setting = Setting {
            value: value.into(),
            source,
            used: false,
        };
        if let Some(previous) = self.entries.insert(full_key.clone(), setting) {
            tracing::debug!(key = %full_key, previous = %previous.value, "option overridden");
        }
        Ok(())
    }

    /// Looks up a fully-qualified key, marking the setting used when found.
    pub fn find(&mut self, full_key: &str) -> Option<&Setting> {
        let setting = self.entries.get_mut(full_key)?;
        setting.used = true;
        Some(&*setting)
    }

    pub fn find_in(&mut self, section: &str, key: &str) -> Option<&Setting> {
        let full_key = self.qualify(section, key);
        self.find(&full_key)
    }

    /// Looks up a key without touching its `used` flag.
    pub fn peek(&self, full_key: &str) -> Option<&Setting> {
        self.entries.get(full_key)
    }

    pub fn iter(&self) -> Iter<'_, String, Setting> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn entries(&self) -> &BTreeMap<String, Setting> {
        &self.entries
    }
}
