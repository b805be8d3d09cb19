use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::templates::TemplateRegistry;

/// Application configuration loaded from environment variables.
/// Every variable has a default, so the service starts with no `.env` at all.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// JSON file replacing the embedded template registry.
    pub template_config_path: Option<PathBuf>,
    /// Overrides the registry's declared fallback template.
    pub default_template: Option<String>,
    /// Linked from the print document so it matches the on-screen styling.
    pub print_stylesheet_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            template_config_path: None,
            default_template: None,
            print_stylesheet_url: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            template_config_path: optional_env("TEMPLATE_CONFIG_PATH").map(PathBuf::from),
            default_template: optional_env("DEFAULT_TEMPLATE"),
            print_stylesheet_url: optional_env("PRINT_STYLESHEET_URL"),
        })
    }

    /// Builds the template registry this configuration points at.
    pub fn load_registry(&self) -> Result<TemplateRegistry> {
        let registry = match &self.template_config_path {
            Some(path) => TemplateRegistry::from_path(path)
                .with_context(|| format!("Failed to load templates from {}", path.display()))?,
            None => TemplateRegistry::builtin().context("Embedded template configuration is invalid")?,
        };

        match &self.default_template {
            Some(id) => registry
                .with_default(id)
                .with_context(|| format!("DEFAULT_TEMPLATE '{id}' is not a known template")),
            None => Ok(registry),
        }
    }
}

/// Unset and empty are the same thing.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
