use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Optional per-project settings read from `.uvflow.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    /// Project tool executable (`uv`).
    #[serde(default = "default_tool")]
    pub tool: String,
    /// One-shot tool runner; `<tool>x` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runner: Option<String>,
    #[serde(default = "default_test_runner")]
    pub test_runner: String,
    #[serde(default = "default_notebook_package")]
    pub notebook_package: String,
    /// Extra arguments passed to `<tool> init` when it is emitted as a prerequisite.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub init_args: Vec<String>,
}

fn default_version() -> u32 {
    1
}

fn default_tool() -> String {
    "uv".to_string()
}

fn default_test_runner() -> String {
    "pytest".to_string()
}

fn default_notebook_package() -> String {
    "jupyterlab".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            tool: default_tool(),
            runner: None,
            test_runner: default_test_runner(),
            notebook_package: default_notebook_package(),
            init_args: Vec::new(),
        }
    }
}

impl Config {
    /// Load `.uvflow.yaml` from `root`, falling back to defaults when absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    /// Override the tool name, e.g. from `--tool` / `UVFLOW_TOOL`.
    pub fn with_tool(mut self, tool: Option<String>) -> Self {
        if let Some(tool) = tool {
            self.tool = tool;
        }
        self
    }

    pub fn runner(&self) -> String {
        match &self.runner {
            Some(r) => r.clone(),
            None => format!("{}x", self.tool),
        }
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.tool.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "tool is empty".to_string(),
            });
        }

        let named = [
            ("tool", Some(self.tool.as_str())),
            ("runner", self.runner.as_deref()),
            ("test_runner", Some(self.test_runner.as_str())),
            ("notebook_package", Some(self.notebook_package.as_str())),
        ];
        for (field, value) in named {
            if let Some(v) = value {
                if v.contains(char::is_whitespace) {
                    warnings.push(ConfigWarning {
                        level: WarnLevel::Error,
                        message: format!("{field} '{v}' contains whitespace"),
                    });
                }
            }
        }

        if let Some(runner) = &self.runner {
            if runner.trim().is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: "runner is empty; remove it to use the default".to_string(),
                });
            } else if *runner == self.tool {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!(
                        "runner '{runner}' is the same as tool; one-shot runs will not be isolated"
                    ),
                });
            }
        }

        if self.version != 1 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!("unknown config version {} (expected 1)", self.version),
            });
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
