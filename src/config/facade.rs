//! ConfigLoader facade over the layered sources.

use super::sources;
use super::CodacConfig;
use config::{ConfigError, File};
use std::path::Path;
use tracing::debug;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    /// Precedence: defaults -> global file -> workspace file -> environment.
    pub fn load(workspace_root: &Path) -> Result<CodacConfig, ConfigError> {
        let builder = sources::builder_with_defaults()?;
        let builder = sources::add_global_file(builder)?;
        let builder = sources::add_workspace_file(builder, workspace_root)?;
        let builder = sources::add_environment(builder)?;

        let config: CodacConfig = builder.build()?.try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load configuration from one explicit file, with the environment on top.
    pub fn load_from_file(path: &Path) -> Result<CodacConfig, ConfigError> {
        let builder = sources::builder_with_defaults()?;
        let builder = builder.add_source(File::from(path).required(true));
        let builder = sources::add_environment(builder)?;

        builder.build()?.try_deserialize()
    }

    /// Create default configuration.
    pub fn default() -> CodacConfig {
        CodacConfig::default()
    }
}
