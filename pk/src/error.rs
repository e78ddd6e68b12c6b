//! Picker error types

use thiserror::Error;

use crate::template::{INDENT, indent};

/// Message used when a failing selector leaves stderr empty
pub const NO_ERROR_MESSAGE: &str = "No error message returned.";

/// Errors raised by a strategy executor
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Could not find the binary '{command}' in your PATH.")]
    ExecutableNotFound {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Exit code {code}: \n{stderr}")]
    ExitStatus { code: i32, stderr: String },

    #[error("Failed to execute shell command: {command} {args}\n{}", indent(.message, INDENT))]
    Launch {
        command: String,
        args: String,
        message: String,
    },

    #[error("Cannot shell-quote prompt options: {0}")]
    Quote(String),

    #[error("Finder client unavailable: {0}")]
    ClientUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PickerError {
    /// Check if the selector binary is simply not installed
    pub fn is_missing_executable(&self) -> bool {
        matches!(
            self,
            PickerError::ExecutableNotFound { .. } | PickerError::ClientUnavailable(_)
        )
    }
}

/// Broad classification of a failed prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The preset id or the preset itself is wrong
    Configuration,
    /// The preset is fine but running it failed
    Invocation,
}

/// Errors surfaced by [`crate::Picker::try_prompt`]
#[derive(Debug, Error)]
pub enum PromptError {
    #[error(
        "Argument '{id}' is not the name of an existing picker preset. Valid names are: '{}'",
        .valid.join(", ")
    )]
    UnknownPreset { id: String, valid: Vec<String> },

    #[error("Internal Error: Preset picker config '{preset}' has an empty or null 'strategy' field.")]
    EmptyStrategy { preset: String },

    #[error("Internal Error: Preset picker config '{preset}' uses an unknown strategy called '{strategy}'")]
    UnknownStrategy { preset: String, strategy: String },

    #[error(
        "Picker preset '{preset}' (with strategy '{strategy}') (called with params: title={title}, config={config}) raised the following error:\n{}",
        indent(&.source.to_string(), INDENT)
    )]
    Invocation {
        preset: String,
        strategy: String,
        title: String,
        config: String,
        source: PickerError,
    },
}

impl PromptError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PromptError::UnknownPreset { .. }
            | PromptError::EmptyStrategy { .. }
            | PromptError::UnknownStrategy { .. } => ErrorKind::Configuration,
            PromptError::Invocation { .. } => ErrorKind::Invocation,
        }
    }

    /// The executor failure behind an invocation error, if any
    pub fn picker_error(&self) -> Option<&PickerError> {
        match self {
            PromptError::Invocation { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_preset_lists_valid_names() {
        let err = PromptError::UnknownPreset {
            id: "nope".to_string(),
            valid: vec!["default".to_string(), "fzf".to_string(), "zenity".to_string()],
        };

        let msg = err.to_string();
        assert!(msg.contains("'nope'"));
        assert!(msg.contains("'default, fzf, zenity'"));
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn test_exit_status_message() {
        let err = PickerError::ExitStatus {
            code: 2,
            stderr: "boom".to_string(),
        };

        assert_eq!(err.to_string(), "Exit code 2: \nboom");
        assert!(!err.is_missing_executable());
    }

    #[test]
    fn test_launch_message_is_indented() {
        let err = PickerError::Launch {
            command: "fzf".to_string(),
            args: "--cycle".to_string(),
            message: "first\nsecond".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Failed to execute shell command: fzf --cycle\n  first\n  second"
        );
    }

    #[test]
    fn test_invocation_wraps_picker_error() {
        let err = PromptError::Invocation {
            preset: "zenity".to_string(),
            strategy: "shell".to_string(),
            title: "Pick one".to_string(),
            config: "{}".to_string(),
            source: PickerError::ExitStatus {
                code: 2,
                stderr: NO_ERROR_MESSAGE.to_string(),
            },
        };

        let msg = err.to_string();
        assert!(msg.starts_with("Picker preset 'zenity' (with strategy 'shell')"));
        assert!(msg.contains("title=Pick one"));
        assert!(msg.contains("\n  Exit code 2: \n  No error message returned."));
        assert_eq!(err.kind(), ErrorKind::Invocation);
        assert!(matches!(err.picker_error(), Some(PickerError::ExitStatus { code: 2, .. })));
    }
}
