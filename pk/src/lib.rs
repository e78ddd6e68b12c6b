//! Picker - ask a human to pick one string out of a list
//!
//! The actual selection is delegated to an interactive selector: an embedded
//! fzf client, or any binary reading candidates on stdin (`fzf`, `zenity
//! --list`, `rofi -dmenu`, ...). Selectors are configured as named presets.
//!
//! # Presets
//!
//! | id        | strategy   | cancel exit code |
//! |-----------|------------|------------------|
//! | `default` | `embedded` | (empty result)   |
//! | `fzf`     | `shell`    | 130              |
//! | `zenity`  | `shell`    | 1                |
//!
//! More presets can be added through the YAML config (see [`config`]).
//!
//! # Example
//!
//! ```ignore
//! use picker::{Picker, PresetRegistry};
//!
//! let picker = Picker::new(PresetRegistry::builtin());
//! let entries = vec!["libfoo.so.6".to_string(), "libbar.so.1".to_string()];
//! if let Some(lib) = picker.prompt(&entries, "fzf", "Select a library", false) {
//!     println!("{}", lib);
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod picker;
pub mod preset;
pub mod registry;
pub mod template;

pub use config::Config;
pub use error::{ErrorKind, PickerError, PromptError};
pub use executor::{FinderClient, FzfClient, ShellInvocation};
pub use picker::{DEFAULT_TITLE, Picker};
pub use preset::{DEFAULT_ENTRY_SEPARATOR, DEFAULT_PICKER, PresetConfig, StrategyKind};
pub use registry::PresetRegistry;
