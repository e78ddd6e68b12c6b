//! Picker presets
//!
//! A preset is a named combination of a strategy and its parameters. The
//! strategy is kept as text so presets coming from a config file can be
//! checked at dispatch time instead of failing the whole config load.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Id of the preset used when none is requested
pub const DEFAULT_PICKER: &str = "default";

/// Default separator between entries piped to a selector
pub const DEFAULT_ENTRY_SEPARATOR: &str = "\n";

/// Invocation mechanism of a preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// In-process finder client
    EmbeddedPrompt,
    /// External selector binary fed through stdin
    ShellCommand,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::EmbeddedPrompt => "embedded",
            StrategyKind::ShellCommand => "shell",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "embedded" => Ok(StrategyKind::EmbeddedPrompt),
            "shell" => Ok(StrategyKind::ShellCommand),
            other => Err(other.to_string()),
        }
    }
}

/// Configuration of a single preset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresetConfig {
    /// Strategy name (`embedded` or `shell`)
    pub strategy: String,

    /// Selector binary, required by the `shell` strategy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Argument templates, `$title` is replaced with the prompt title
    pub args: Vec<String>,

    /// Exit codes meaning "stdout holds the selection"
    #[serde(rename = "success-exit-codes")]
    pub success_exit_codes: Vec<i32>,

    /// Exit codes meaning "the user cancelled"
    #[serde(rename = "ignore-exit-codes")]
    pub ignore_exit_codes: Vec<i32>,

    /// Joins the entries written to the selector's stdin
    #[serde(rename = "entry-separator")]
    pub entry_separator: String,
}

impl Default for PresetConfig {
    fn default() -> Self {
        Self {
            strategy: String::new(),
            command: None,
            args: Vec::new(),
            success_exit_codes: Vec::new(),
            ignore_exit_codes: Vec::new(),
            entry_separator: DEFAULT_ENTRY_SEPARATOR.to_string(),
        }
    }
}

impl PresetConfig {
    /// Preset running the embedded finder client
    pub fn embedded(args: &[&str]) -> Self {
        Self {
            strategy: StrategyKind::EmbeddedPrompt.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            ..Default::default()
        }
    }

    /// Preset running an external selector binary
    pub fn shell(command: &str, args: &[&str], success_exit_codes: &[i32], ignore_exit_codes: &[i32]) -> Self {
        Self {
            strategy: StrategyKind::ShellCommand.to_string(),
            command: Some(command.to_string()),
            args: args.iter().map(|a| a.to_string()).collect(),
            success_exit_codes: success_exit_codes.to_vec(),
            ignore_exit_codes: ignore_exit_codes.to_vec(),
            ..Default::default()
        }
    }

    /// Override the entry separator
    pub fn with_separator(mut self, separator: &str) -> Self {
        self.entry_separator = separator.to_string();
        self
    }
}

/// Presets compiled into the binary
pub fn builtin_presets() -> Vec<(&'static str, PresetConfig)> {
    vec![
        (DEFAULT_PICKER, PresetConfig::embedded(&["--cycle", "--prompt"])),
        ("fzf", PresetConfig::shell("fzf", &["--cycle", "--prompt", "$title"], &[0], &[130])),
        (
            "zenity",
            PresetConfig::shell(
                "zenity",
                &["--list", "--title=Choose an entry", "--text=$title", "--column=Entries"],
                &[0],
                &[1],
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_round_trips_through_name() {
        for kind in [StrategyKind::EmbeddedPrompt, StrategyKind::ShellCommand] {
            assert_eq!(kind.as_str().parse::<StrategyKind>(), Ok(kind));
        }
        assert_eq!("pyfzf".parse::<StrategyKind>(), Err("pyfzf".to_string()));
    }

    #[test]
    fn test_builtin_exit_code_conventions() {
        let presets = builtin_presets();

        let fzf = &presets.iter().find(|(id, _)| *id == "fzf").unwrap().1;
        assert_eq!(fzf.success_exit_codes, vec![0]);
        assert_eq!(fzf.ignore_exit_codes, vec![130]);
        assert_eq!(fzf.command.as_deref(), Some("fzf"));

        let zenity = &presets.iter().find(|(id, _)| *id == "zenity").unwrap().1;
        assert_eq!(zenity.success_exit_codes, vec![0]);
        assert_eq!(zenity.ignore_exit_codes, vec![1]);

        let default = &presets.iter().find(|(id, _)| *id == DEFAULT_PICKER).unwrap().1;
        assert_eq!(default.strategy, "embedded");
        assert!(default.command.is_none());
    }

    #[test]
    fn test_deserialize_preset() {
        let yaml = r#"
strategy: shell
command: rofi
args: ["-dmenu", "-p", "$title"]
success-exit-codes: [0]
ignore-exit-codes: [1]
"#;

        let preset: PresetConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(preset.strategy, "shell");
        assert_eq!(preset.command.as_deref(), Some("rofi"));
        assert_eq!(preset.args, vec!["-dmenu", "-p", "$title"]);
        assert_eq!(preset.ignore_exit_codes, vec![1]);
        // Defaults for unspecified
        assert_eq!(preset.entry_separator, "\n");
    }
}
