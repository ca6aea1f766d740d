//! Placeholder-to-value tables used when rendering descriptor templates.
//!
//! A `TokenSet` is built once per run from the resolved inputs. Components
//! that need extra bindings (the project identifier, the active configuration
//! name) take a copy via [`TokenSet::with`] so per-iteration values never
//! leak back into the shared base set.

use std::collections::BTreeMap;

/// Standard token names recognized by the bundled templates.
pub const PROJECT_NAME: &str = "PROJECT_NAME";
pub const PROJECT_GUID: &str = "PROJECT_GUID";
pub const TARGET_ADDR: &str = "TARGET_ADDR";
pub const TOOLCHAIN_PATH: &str = "TOOLCHAIN_PATH";
pub const MAKE_TOOL: &str = "MAKE_TOOL";
pub const INCLUDE_DIRS: &str = "INCLUDE_DIRS";
pub const CONFIGURATION_NAME: &str = "CONFIGURATION_NAME";

/// Immutable mapping from placeholder name to replacement text.
#[derive(Debug, Clone, Default)]
pub struct TokenSet {
    values: BTreeMap<String, String>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a placeholder name to a value, replacing any previous binding.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Look up the replacement for a placeholder name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Return a copy of this set extended with one additional binding.
    /// The receiver is untouched.
    pub fn with(&self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut copy = self.clone();
        copy.set(name, value);
        copy
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for TokenSet {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.set(name, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut tokens = TokenSet::new();
        tokens.set(PROJECT_NAME, "player");
        assert_eq!(tokens.get(PROJECT_NAME), Some("player"));
        assert_eq!(tokens.get(TARGET_ADDR), None);
    }

    #[test]
    fn test_with_does_not_mutate_base() {
        let mut base = TokenSet::new();
        base.set(PROJECT_NAME, "player");

        let debug = base.with(CONFIGURATION_NAME, "Debug");
        let release = base.with(CONFIGURATION_NAME, "Release");

        assert_eq!(base.get(CONFIGURATION_NAME), None);
        assert_eq!(debug.get(CONFIGURATION_NAME), Some("Debug"));
        assert_eq!(release.get(CONFIGURATION_NAME), Some("Release"));
        // the shared binding is visible through every overlay
        assert_eq!(debug.get(PROJECT_NAME), Some("player"));
    }

    #[test]
    fn test_with_overrides_existing_binding() {
        let mut base = TokenSet::new();
        base.set(TARGET_ADDR, "10.0.0.1");

        let overlay = base.with(TARGET_ADDR, "10.0.0.2");
        assert_eq!(overlay.get(TARGET_ADDR), Some("10.0.0.2"));
        assert_eq!(base.get(TARGET_ADDR), Some("10.0.0.1"));
    }

    #[test]
    fn test_extend_from_pairs() {
        let mut tokens = TokenSet::new();
        tokens.extend([("EXTRA_ONE", "1"), ("EXTRA_TWO", "2")]);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens.get("EXTRA_TWO"), Some("2"));
    }
}
