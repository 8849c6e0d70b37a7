//! Process-level configuration for the storefront binary
//!
//! Read once at startup from environment variables:
//! - `SHOPHUB_SHELL`: `desktop` or `mobile` layout (default: desktop)
//! - `SHOPHUB_TITLE`: window / document title (default: "E-Commerce Store")
//!
//! Log filtering goes through `RUST_LOG` (see `main.rs`).

use thiserror::Error;

use crate::ui::ShellKind;

pub const SHELL_ENV: &str = "SHOPHUB_SHELL";
pub const TITLE_ENV: &str = "SHOPHUB_TITLE";
pub const DEFAULT_TITLE: &str = "E-Commerce Store";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown shell kind '{0}' (expected 'desktop' or 'mobile')")]
    UnknownShell(String),
}

/// Startup configuration, provided to the UI through Dioxus context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    pub shell: ShellKind,
    pub title: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            shell: ShellKind::default(),
            title: DEFAULT_TITLE.to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Load from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup.
    ///
    /// Invalid values are logged and replaced by their defaults; startup never
    /// fails because of configuration.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let shell = match lookup(SHELL_ENV).map(|raw| raw.parse::<ShellKind>()) {
            Some(Ok(shell)) => shell,
            Some(Err(e)) => {
                tracing::warn!("Ignoring {}: {}", SHELL_ENV, e);
                ShellKind::default()
            }
            None => ShellKind::default(),
        };

        let title = lookup(TITLE_ENV)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        Self { shell, title }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.shell, ShellKind::Desktop);
        assert_eq!(config.title, "E-Commerce Store");
    }

    #[test]
    fn reads_shell_and_title() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[
            (SHELL_ENV, " Mobile "),
            (TITLE_ENV, "My Shop"),
        ]));
        assert_eq!(config.shell, ShellKind::Mobile);
        assert_eq!(config.title, "My Shop");
    }

    #[test]
    fn invalid_shell_falls_back_to_desktop() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[(SHELL_ENV, "tablet")]));
        assert_eq!(config.shell, ShellKind::Desktop);
    }

    #[test]
    fn blank_title_uses_default() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[(TITLE_ENV, "   ")]));
        assert_eq!(config.title, DEFAULT_TITLE);
    }

    #[test]
    fn unknown_shell_error_message() {
        let err = ConfigError::UnknownShell("tablet".into());
        assert_eq!(
            err.to_string(),
            "Unknown shell kind 'tablet' (expected 'desktop' or 'mobile')"
        );
    }
}
