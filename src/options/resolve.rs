//! Typed lookups with section fallback, and programmatic overrides.

use super::store::Origin;
use super::value::OptionValue;
use super::{ConfigError, Options};

const EMPTY_KEY_WARNING: &str = "empty option key requested";

impl Options {
    /// Returns true if `key` is stored as given, or relative to the default
    /// section. Case is ignored either way.
    ///
    /// A hit counts as a lookup and marks the setting used.
    pub fn is_set(&mut self, key: &str) -> bool {
        let literal = self.store.qualify("", key);
        if self.store.find(&literal).is_some() {
            return true;
        }
        let qualified = self.store.qualify(&self.section, key);
        self.store.find(&qualified).is_some()
    }

    /// Returns true if `key` is stored relative to the default section.
    ///
    /// `section` is accepted for symmetry with [`get_in`](Self::get_in) but
    /// is not consulted: only `<default section><sep><key>` is checked.
    pub fn is_set_in(&mut self, _section: &str, key: &str) -> bool {
        let qualified = self.store.qualify(&self.section, key);
        self.store.find(&qualified).is_some()
    }

    /// Reads option `key`, trying the literal key first and then the key
    /// qualified by the default section. Falls back to `default` when neither
    /// is stored.
    ///
    /// Fails with [`ConfigError::InvalidValue`] if the stored text does not
    /// convert to `T`.
    pub fn get<T: OptionValue>(&mut self, key: &str, default: T) -> Result<T, ConfigError> {
        let literal = self.store.qualify("", key);
        if let Some(value) = self.lookup(&literal)? {
            return Ok(value);
        }

        let qualified = self.store.qualify(&self.section, key);
        if let Some(value) = self.lookup(&qualified)? {
            return Ok(value);
        }

        self.sink.write_line(&format!(
            "\tOption {key} = {} (default)",
            default.to_setting()
        ));
        Ok(default)
    }

    /// Reads `key` from `section`.
    ///
    /// The qualified name `<section><sep><key>` goes through [`get`](Self::get),
    /// so the default section is tried in front of it as a second chance.
    /// An empty `key` only emits a warning and hands `default` back untouched.
    pub fn get_in<T: OptionValue>(
        &mut self,
        section: &str,
        key: &str,
        default: T,
    ) -> Result<T, ConfigError> {
        if key.is_empty() {
            self.sink.warn(EMPTY_KEY_WARNING);
            return Ok(default);
        }
        let qualified = self.store.qualify(section, key);
        self.get(&qualified, default)
    }

    /// Reads `key` from `primary` if it is set there, otherwise from
    /// `fallback` (and then `default`).
    ///
    /// Typical use is a per-component section overriding a shared one:
    ///
    /// ```no_run
    /// # let mut options = optfile::Options::new();
    /// let order: i32 = options.get_either("density", "all", "order", 2)?;
    /// # Ok::<(), optfile::ConfigError>(())
    /// ```
    pub fn get_either<T: OptionValue>(
        &mut self,
        primary: &str,
        fallback: &str,
        key: &str,
        default: T,
    ) -> Result<T, ConfigError> {
        // Guarded like `get_in`; without it the lookups would hit `<section><sep>`.
        if key.is_empty() {
            self.sink.warn(EMPTY_KEY_WARNING);
            return Ok(default);
        }

        let first = self.store.qualify(primary, key);
        if self.is_set(&first) {
            return self.get(&first, default);
        }
        let second = self.store.qualify(fallback, key);
        self.get(&second, default)
    }

    pub fn get_str(&mut self, key: &str, default: &str) -> Result<String, ConfigError> {
        self.get(key, default.to_string())
    }

    pub fn get_str_in(
        &mut self,
        section: &str,
        key: &str,
        default: &str,
    ) -> Result<String, ConfigError> {
        self.get_in(section, key, default.to_string())
    }

    /// Stores `value` under `key` in the root section, replacing any setting
    /// already there. The setting's source is `set`.
    pub fn set<T: OptionValue>(&mut self, key: &str, value: T) -> Result<(), ConfigError> {
        self.store.add("", key, value.to_setting(), Origin::Set)
    }

    fn lookup<T: OptionValue>(&mut self, full_key: &str) -> Result<Option<T>, ConfigError> {
        let Some(setting) = self.store.find(full_key) else {
            return Ok(None);
        };
        let value = T::from_setting(full_key, &setting.value)?;

        let mut line = format!("\tOption {full_key} = {}", value.to_setting());
        setting.annotate(&mut line);
        self.sink.write_line(&line);
        Ok(Some(value))
    }
}
