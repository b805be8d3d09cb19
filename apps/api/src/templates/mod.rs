// Template registry: static configuration describing every CV template.
// Loaded once at startup (embedded JSON or an override file), read-only afterwards.

pub mod config;
pub mod handlers;
pub mod registry;
pub mod sections;

use thiserror::Error;

pub use config::TemplateConfig;
pub use registry::TemplateRegistry;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Invalid template configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Could not read template configuration from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Duplicate template id '{0}'")]
    DuplicateId(String),

    #[error("Default template '{0}' is not defined in the registry")]
    UnknownDefault(String),
}
