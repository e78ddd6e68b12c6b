//! Picker dispatcher
//!
//! Resolves a preset id to a strategy, runs it, and folds every outcome into
//! `Option<String>`. [`Picker::try_prompt`] keeps the failure details for
//! callers that want to tell a missing binary from a cancelled prompt.

use colored::*;
use once_cell::sync::OnceCell;
use tracing::{debug, warn};

use crate::error::{PickerError, PromptError};
use crate::executor::{FinderClient, FzfClient, ShellInvocation, run_embedded, run_shell};
use crate::preset::{DEFAULT_PICKER, PresetConfig, StrategyKind};
use crate::registry::PresetRegistry;

/// Title shown when the caller gives none
pub const DEFAULT_TITLE: &str = "Select candidate";

/// Runs prompts against a fixed set of presets
pub struct Picker {
    registry: PresetRegistry,
    client: OnceCell<Box<dyn FinderClient>>,
}

impl Picker {
    /// Picker whose embedded client is created on first use
    pub fn new(registry: PresetRegistry) -> Self {
        Self {
            registry,
            client: OnceCell::new(),
        }
    }

    /// Picker using the given embedded client
    pub fn with_client(registry: PresetRegistry, client: Box<dyn FinderClient>) -> Self {
        Self {
            registry,
            client: OnceCell::with_value(client),
        }
    }

    pub fn registry(&self) -> &PresetRegistry {
        &self.registry
    }

    /// Prompt with the default preset and title
    pub fn prompt_default(&self, entries: &[String]) -> Option<String> {
        self.prompt(entries, DEFAULT_PICKER, DEFAULT_TITLE, false)
    }

    /// Ask the user to pick one of `entries`
    ///
    /// Returns `None` when the user cancelled and also when anything went
    /// wrong; failures are reported on stderr unless `silent` is set.
    pub fn prompt(&self, entries: &[String], picker_id: &str, title: &str, silent: bool) -> Option<String> {
        match self.try_prompt(entries, picker_id, title) {
            Ok(selected) => selected,
            Err(e) => {
                warn!(picker_id = %picker_id.trim(), kind = ?e.kind(), "{}", e);
                if !silent {
                    eprintln!("{}", e.to_string().red());
                }
                None
            }
        }
    }

    /// Like [`Picker::prompt`] but hands back the failure
    pub fn try_prompt(&self, entries: &[String], picker_id: &str, title: &str) -> Result<Option<String>, PromptError> {
        let picker_id = picker_id.trim();
        debug!(%picker_id, entries = entries.len(), %title, "Picker::try_prompt: called");

        let preset = self.registry.lookup(picker_id).ok_or_else(|| PromptError::UnknownPreset {
            id: picker_id.to_string(),
            valid: self.registry.ids(),
        })?;

        let strategy_name = preset.strategy.trim();
        if strategy_name.is_empty() {
            return Err(PromptError::EmptyStrategy {
                preset: picker_id.to_string(),
            });
        }

        let strategy: StrategyKind = strategy_name.parse().map_err(|strategy| PromptError::UnknownStrategy {
            preset: picker_id.to_string(),
            strategy,
        })?;

        debug!(%picker_id, %strategy, "Picker::try_prompt: dispatching");
        self.execute(strategy, entries, title, preset)
            .map_err(|source| PromptError::Invocation {
                preset: picker_id.to_string(),
                strategy: strategy.to_string(),
                title: title.to_string(),
                config: format!("{:?}", preset),
                source,
            })
    }

    fn execute(
        &self,
        strategy: StrategyKind,
        entries: &[String],
        title: &str,
        preset: &PresetConfig,
    ) -> Result<Option<String>, PickerError> {
        match strategy {
            StrategyKind::EmbeddedPrompt => {
                let client = self.client()?;
                run_embedded(client, entries, title, &preset.args)
            }
            StrategyKind::ShellCommand => run_shell(entries, title, &ShellInvocation::from_preset(preset)),
        }
    }

    /// Embedded client, created on first call; a failed creation is retried next time
    fn client(&self) -> Result<&dyn FinderClient, PickerError> {
        let client = self.client.get_or_try_init(|| {
            debug!("Picker::client: creating finder client");
            FzfClient::new().map(|c| Box::new(c) as Box<dyn FinderClient>)
        })?;
        Ok(&**client)
    }
}

impl Default for Picker {
    fn default() -> Self {
        Self::new(PresetRegistry::builtin())
    }
}
