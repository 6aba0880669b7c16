pub mod config;
pub mod exec;
pub mod skill;
pub mod status;
pub mod table;
pub mod translate;

use anyhow::Context;
use std::path::Path;
use uvflow_core::config::Config;

/// Load `.uvflow.yaml` from `root` and apply the `--tool` override.
pub fn load_config(root: &Path, tool: Option<String>) -> anyhow::Result<Config> {
    let config = Config::load(root).context("failed to load .uvflow.yaml")?;
    Ok(config.with_tool(tool))
}
