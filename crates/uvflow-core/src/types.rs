use crate::error::UvflowError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Intent
// ---------------------------------------------------------------------------

/// A conventional Python workflow operation the caller wants performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intent {
    RunScript,
    RunModule,
    RunTestSuite,
    StartNotebookServer,
    InstallDependency,
    InstallDevDependency,
    RemoveDependency,
    RunToolOnce,
    SyncDependencies,
    InitializeProject,
}

impl Intent {
    pub fn all() -> &'static [Intent] {
        &[
            Intent::RunScript,
            Intent::RunModule,
            Intent::RunTestSuite,
            Intent::StartNotebookServer,
            Intent::InstallDependency,
            Intent::InstallDevDependency,
            Intent::RemoveDependency,
            Intent::RunToolOnce,
            Intent::SyncDependencies,
            Intent::InitializeProject,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Intent::RunScript => "run-script",
            Intent::RunModule => "run-module",
            Intent::RunTestSuite => "run-test-suite",
            Intent::StartNotebookServer => "start-notebook-server",
            Intent::InstallDependency => "install-dependency",
            Intent::InstallDevDependency => "install-dev-dependency",
            Intent::RemoveDependency => "remove-dependency",
            Intent::RunToolOnce => "run-tool-once",
            Intent::SyncDependencies => "sync-dependencies",
            Intent::InitializeProject => "initialize-project",
        }
    }

    /// Comma-separated list of every tag, for error messages.
    pub fn valid_tags() -> String {
        Intent::all()
            .iter()
            .map(|i| i.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Intents that only make sense inside a project with a descriptor.
    ///
    /// `run-tool-once` runs in a throwaway environment and `initialize-project`
    /// is the thing that creates the descriptor.
    pub fn is_project_scoped(self) -> bool {
        !matches!(self, Intent::RunToolOnce | Intent::InitializeProject)
    }

    /// What the caller must supply as the first argument, if anything.
    pub fn required_argument(self) -> Option<&'static str> {
        match self {
            Intent::RunScript => Some("a script path"),
            Intent::RunModule => Some("a module name"),
            Intent::InstallDependency
            | Intent::InstallDevDependency
            | Intent::RemoveDependency => Some("at least one package"),
            Intent::RunToolOnce => Some("a tool name"),
            Intent::RunTestSuite
            | Intent::StartNotebookServer
            | Intent::SyncDependencies
            | Intent::InitializeProject => None,
        }
    }

    /// The conventional command this intent replaces.
    pub fn conventional(self) -> &'static str {
        match self {
            Intent::RunScript => "python <script> [args...]",
            Intent::RunModule => "python -m <module> [args...]",
            Intent::RunTestSuite => "pytest [args...]",
            Intent::StartNotebookServer => "jupyter lab",
            Intent::InstallDependency => "pip install <package...>",
            Intent::InstallDevDependency => "pip install <package...> (dev)",
            Intent::RemoveDependency => "pip uninstall <package...>",
            Intent::RunToolOnce => "pipx run <tool> [args...]",
            Intent::SyncDependencies => "pip install -r requirements.txt",
            Intent::InitializeProject => "python -m venv .venv",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Intent::RunScript => "Run a Python script in the project environment",
            Intent::RunModule => "Run a Python module in the project environment",
            Intent::RunTestSuite => "Run the test suite",
            Intent::StartNotebookServer => "Start a JupyterLab server",
            Intent::InstallDependency => "Add a runtime dependency",
            Intent::InstallDevDependency => "Add a development dependency",
            Intent::RemoveDependency => "Remove a dependency",
            Intent::RunToolOnce => "Run a CLI tool once without installing it",
            Intent::SyncDependencies => "Sync the environment with the lock file",
            Intent::InitializeProject => "Create pyproject.toml for a new project",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = UvflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intent::all()
            .iter()
            .copied()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| UvflowError::UnknownIntent(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// OperationRequest
// ---------------------------------------------------------------------------

/// One translation request: an intent plus its free-text arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationRequest {
    pub intent: Intent,
    #[serde(default)]
    pub args: Vec<String>,
}

impl OperationRequest {
    pub fn new<I, S>(intent: Intent, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            intent,
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
