//! Config sources: global file, workspace file, environment.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment, File};
use std::path::{Path, PathBuf};

/// Workspace-level config file name
pub const WORKSPACE_CONFIG_FILE: &str = "codac.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "CODAC";

/// Builder seeded with defaults for every key.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default(
            "attendance.editable_window_days",
            i64::from(crate::types::DEFAULT_EDITABLE_WINDOW_DAYS),
        )?
        .set_default("logging.level", "info")?
        .set_default("logging.output", "stderr")
}

/// Global config path (`~/.config/codac/config.toml` on Linux).
pub fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "codac", "codac")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn add_global_file(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match global_config_path() {
        Some(path) => Ok(builder.add_source(File::from(path).required(false))),
        None => Ok(builder),
    }
}

pub fn add_workspace_file(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = workspace_root.join(WORKSPACE_CONFIG_FILE);
    Ok(builder.add_source(File::from(path).required(false)))
}

/// `CODAC_ATTENDANCE__EDITABLE_WINDOW_DAYS=14` -> `attendance.editable_window_days`.
pub fn add_environment(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true),
    ))
}
