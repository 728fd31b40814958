//! Shell configuration
//!
//! All fields have defaults, so an empty JSON object (or an empty environment)
//! yields the stock shell: 768px breakpoint, `/auth` login page, sidebar
//! default decided at mount only.

use serde::{Deserialize, Serialize};

use crate::domain::models::ResizePolicy;
use crate::shared::constants::{DEFAULT_BREAKPOINT_PX, DEFAULT_TOAST_DISMISS_MS, LOGIN_PATH};
use crate::shared::errors::{Result, ShellError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub breakpoint_px: u32,
    pub login_path: String,
    pub resize_policy: ResizePolicy,
    pub toast_dismiss_ms: u32,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
            login_path: LOGIN_PATH.to_string(),
            resize_policy: ResizePolicy::default(),
            toast_dismiss_ms: DEFAULT_TOAST_DISMISS_MS,
        }
    }
}

impl ShellConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: ShellConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read overrides from `SHELL_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = ShellConfig::default();

        if let Some(raw) = lookup("SHELL_BREAKPOINT_PX") {
            config.breakpoint_px = raw.parse().map_err(|_| {
                ShellError::InvalidConfig(format!("SHELL_BREAKPOINT_PX is not a number: {}", raw))
            })?;
        }
        if let Some(raw) = lookup("SHELL_LOGIN_PATH") {
            config.login_path = raw;
        }
        if let Some(raw) = lookup("SHELL_RESIZE_POLICY") {
            config.resize_policy = raw.parse().map_err(ShellError::InvalidConfig)?;
        }
        if let Some(raw) = lookup("SHELL_TOAST_DISMISS_MS") {
            config.toast_dismiss_ms = raw.parse().map_err(|_| {
                ShellError::InvalidConfig(format!("SHELL_TOAST_DISMISS_MS is not a number: {}", raw))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.breakpoint_px == 0 {
            return Err(ShellError::InvalidConfig("breakpoint_px must be positive".to_string()));
        }
        if !self.login_path.starts_with('/') {
            return Err(ShellError::InvalidConfig(format!(
                "login_path must be an absolute path, got {}",
                self.login_path
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = ShellConfig::from_json("{}").unwrap();
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.breakpoint_px, 768);
        assert_eq!(config.login_path, "/auth");
        assert_eq!(config.resize_policy, ResizePolicy::MountOnly);
    }

    #[test]
    fn test_json_overrides() {
        let config =
            ShellConfig::from_json(r#"{"breakpoint_px": 1024, "resize_policy": "follow"}"#).unwrap();
        assert_eq!(config.breakpoint_px, 1024);
        assert_eq!(config.resize_policy, ResizePolicy::Follow);
        assert_eq!(config.login_path, "/auth");
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = ShellConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ShellError::Config(_)));
    }

    #[test]
    fn test_validation_rejects_zero_breakpoint_and_relative_login() {
        assert!(matches!(
            ShellConfig::from_json(r#"{"breakpoint_px": 0}"#),
            Err(ShellError::InvalidConfig(_))
        ));
        assert!(matches!(
            ShellConfig::from_json(r#"{"login_path": "auth"}"#),
            Err(ShellError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_env_lookup() {
        let config = ShellConfig::from_lookup(lookup_from(&[
            ("SHELL_BREAKPOINT_PX", "640"),
            ("SHELL_LOGIN_PATH", "/login"),
            ("SHELL_RESIZE_POLICY", "follow"),
        ]))
        .unwrap();
        assert_eq!(config.breakpoint_px, 640);
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.resize_policy, ResizePolicy::Follow);
        assert_eq!(config.toast_dismiss_ms, 4000);
    }

    #[test]
    fn test_env_lookup_rejects_garbage() {
        assert!(ShellConfig::from_lookup(lookup_from(&[("SHELL_BREAKPOINT_PX", "wide")])).is_err());
        assert!(ShellConfig::from_lookup(lookup_from(&[("SHELL_RESIZE_POLICY", "sometimes")])).is_err());
    }
}
