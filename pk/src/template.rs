//! Argument template rendering
//!
//! Preset arguments may reference the prompt title as `$title` or `${title}`.
//! `$$` is an escaped dollar sign. Any other placeholder is left as written,
//! so selector flags that happen to contain `$` survive untouched.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Prefix used when nesting error messages
pub const INDENT: &str = "  ";

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$(?:(?P<escaped>\$)|(?P<named>[_a-zA-Z][_a-zA-Z0-9]*)|\{(?P<braced>[_a-zA-Z][_a-zA-Z0-9]*)\})")
        .expect("placeholder pattern is valid")
});

/// Substitute the title into a single argument template
pub fn render_arg(template: &str, title: &str) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            if caps.name("escaped").is_some() {
                return "$".to_string();
            }
            let name = caps.name("named").or_else(|| caps.name("braced")).map(|m| m.as_str());
            match name {
                Some("title") => title.to_string(),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Render every template of a preset in order
pub fn render_args(templates: &[String], title: &str) -> Vec<String> {
    templates.iter().map(|t| render_arg(t, title)).collect()
}

/// Prefix every line that has visible content
pub fn indent(text: &str, prefix: &str) -> String {
    text.split_inclusive('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{}{}", prefix, line)
            }
        })
        .collect()
}
