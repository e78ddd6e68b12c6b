//! Immutable preset registry

use std::collections::BTreeMap;

use tracing::debug;

use crate::preset::{PresetConfig, builtin_presets};

/// Maps preset ids to their configuration
///
/// Built once (builtin presets, optionally merged with configured ones) and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct PresetRegistry {
    presets: BTreeMap<String, PresetConfig>,
}

impl PresetRegistry {
    /// Registry holding only the compiled-in presets
    pub fn builtin() -> Self {
        let presets = builtin_presets()
            .into_iter()
            .map(|(id, preset)| (id.to_string(), preset))
            .collect();
        Self { presets }
    }

    /// Builtin presets plus the given ones; an id already present is replaced
    pub fn with_overrides(overrides: BTreeMap<String, PresetConfig>) -> Self {
        let mut registry = Self::builtin();
        for (id, preset) in overrides {
            let id = id.trim().to_string();
            if registry.presets.contains_key(&id) {
                debug!(%id, "PresetRegistry::with_overrides: replacing builtin preset");
            }
            registry.presets.insert(id, preset);
        }
        registry
    }

    /// Registry with exactly the given presets
    pub fn from_presets<I>(presets: I) -> Self
    where
        I: IntoIterator<Item = (String, PresetConfig)>,
    {
        Self {
            presets: presets.into_iter().collect(),
        }
    }

    pub fn lookup(&self, id: &str) -> Option<&PresetConfig> {
        self.presets.get(id)
    }

    /// All valid preset ids, sorted
    pub fn ids(&self) -> Vec<String> {
        self.presets.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PresetConfig)> {
        self.presets.iter().map(|(id, preset)| (id.as_str(), preset))
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl Default for PresetRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_ids() {
        let registry = PresetRegistry::builtin();

        assert_eq!(registry.ids(), vec!["default", "fzf", "zenity"]);
        assert!(registry.lookup("fzf").is_some());
        assert!(registry.lookup("dmenu").is_none());
    }

    #[test]
    fn test_lookup_is_exact() {
        let registry = PresetRegistry::builtin();

        assert!(registry.lookup(" fzf").is_none());
        assert!(registry.lookup("FZF").is_none());
    }

    #[test]
    fn test_overrides_add_and_replace() {
        let mut overrides = BTreeMap::new();
        overrides.insert(
            "fzf".to_string(),
            PresetConfig::shell("sk", &["--prompt", "$title"], &[0], &[130]),
        );
        overrides.insert(
            " rofi ".to_string(),
            PresetConfig::shell("rofi", &["-dmenu"], &[0], &[1]),
        );

        let registry = PresetRegistry::with_overrides(overrides);

        assert_eq!(registry.len(), 4);
        assert_eq!(registry.lookup("fzf").unwrap().command.as_deref(), Some("sk"));
        assert_eq!(registry.lookup("rofi").unwrap().command.as_deref(), Some("rofi"));
        assert!(registry.lookup("zenity").is_some());
    }
}
