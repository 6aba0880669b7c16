//! Intent → preferred-tool command translation.
//!
//! [`translate`] is a pure function of the request, the detected
//! [`ProjectState`] and the [`Config`]. It never touches the filesystem and
//! never runs anything; callers decide whether to print or execute the plan.

use crate::config::Config;
use crate::error::{Result, UvflowError};
use crate::paths;
use crate::project::ProjectState;
use crate::types::{Intent, OperationRequest};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// CommandLine
// ---------------------------------------------------------------------------

/// A single command: the program followed by its arguments, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    fn extend(mut self, extra: &[String]) -> Self {
        self.args.extend(extra.iter().cloned());
        self
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Translation
// ---------------------------------------------------------------------------

/// The ordered plan produced for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub intent: Intent,
    /// Prerequisites first, the requested operation last.
    pub commands: Vec<CommandLine>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl Translation {
    /// The command that performs the requested operation itself.
    pub fn main_command(&self) -> Option<&CommandLine> {
        self.commands.last()
    }

    pub fn prerequisites(&self) -> &[CommandLine] {
        match self.commands.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }

    pub fn rendered(&self) -> Vec<String> {
        self.commands.iter().map(ToString::to_string).collect()
    }
}

// ---------------------------------------------------------------------------
// translate
// ---------------------------------------------------------------------------

pub fn translate(
    request: &OperationRequest,
    state: &ProjectState,
    config: &Config,
) -> Result<Translation> {
    let intent = request.intent;
    let args = request.args.as_slice();

    if let Some(what) = intent.required_argument() {
        if args.is_empty() {
            return Err(UvflowError::MissingArgument {
                intent: intent.to_string(),
                what: what.to_string(),
            });
        }
    }

    let tool = config.tool.as_str();
    let mut commands = Vec::new();
    let mut notes = Vec::new();

    if intent.is_project_scoped() && !state.descriptor_present {
        commands.push(init_command(config).extend(&config.init_args));
    }

    let main = match intent {
        Intent::RunScript => CommandLine::new(tool, ["run", "python"]).extend(args),
        Intent::RunModule => CommandLine::new(tool, ["run", "python", "-m"]).extend(args),
        Intent::RunTestSuite => {
            CommandLine::new(tool, ["run", config.test_runner.as_str()]).extend(args)
        }
        Intent::StartNotebookServer => {
            if !state.notebook_installed {
                commands.push(CommandLine::new(
                    tool,
                    ["add", "--dev", config.notebook_package.as_str()],
                ));
            }
            CommandLine::new(tool, ["run", "jupyter", "lab"]).extend(args)
        }
        Intent::InstallDependency => CommandLine::new(tool, ["add"]).extend(args),
        Intent::InstallDevDependency => CommandLine::new(tool, ["add", "--dev"]).extend(args),
        Intent::RemoveDependency => CommandLine::new(tool, ["remove"]).extend(args),
        Intent::RunToolOnce => CommandLine::new(config.runner(), Vec::<String>::new()).extend(args),
        Intent::SyncDependencies => CommandLine::new(tool, ["sync"]).extend(args),
        Intent::InitializeProject => {
            if state.descriptor_present {
                notes.push(format!(
                    "{} already exists; `{tool} init` will refuse to overwrite it",
                    paths::DESCRIPTOR_FILE
                ));
            }
            init_command(config).extend(&config.init_args).extend(args)
        }
    };
    commands.push(main);

    if intent.is_project_scoped() && state.lock_stale() {
        let note = if state.lock_present {
            format!(
                "{} is older than {}; `{tool}` will re-lock before running",
                paths::LOCK_FILE,
                paths::DESCRIPTOR_FILE
            )
        } else {
            format!(
                "no {} yet; `{tool}` will create it on first use",
                paths::LOCK_FILE
            )
        };
        notes.push(note);
    }

    let translation = Translation {
        intent,
        commands,
        notes,
    };
    tracing::debug!(
        intent = %intent,
        commands = ?translation.rendered(),
        "translated request"
    );
    Ok(translation)
}

fn init_command(config: &Config) -> CommandLine {
    CommandLine::new(config.tool.as_str(), ["init"])
}

// ---------------------------------------------------------------------------
// Mapping table
// ---------------------------------------------------------------------------

/// One row of the conventional → preferred mapping, with the tool substituted.
#[derive(Debug, Clone, Serialize)]
pub struct TableRow {
    pub intent: Intent,
    pub conventional: &'static str,
    pub preferred: String,
    pub description: &'static str,
}

pub fn mapping_table(config: &Config) -> Vec<TableRow> {
    let tool = config.tool.as_str();
    Intent::all()
        .iter()
        .map(|&intent| TableRow {
            intent,
            conventional: intent.conventional(),
            preferred: preferred_template(intent, tool, &config.runner(), config),
            description: intent.description(),
        })
        .collect()
}

fn preferred_template(intent: Intent, tool: &str, runner: &str, config: &Config) -> String {
    match intent {
        Intent::RunScript => format!("{tool} run python <script> [args...]"),
        Intent::RunModule => format!("{tool} run python -m <module> [args...]"),
        Intent::RunTestSuite => format!("{tool} run {} [args...]", config.test_runner),
        Intent::StartNotebookServer => format!(
            "{tool} run jupyter lab [args...] (after {tool} add --dev {} if absent)",
            config.notebook_package
        ),
        Intent::InstallDependency => format!("{tool} add <package...>"),
        Intent::InstallDevDependency => format!("{tool} add --dev <package...>"),
        Intent::RemoveDependency => format!("{tool} remove <package...>"),
        Intent::RunToolOnce => format!("{runner} <tool-name> [args...]"),
        Intent::SyncDependencies => format!("{tool} sync [args...]"),
        Intent::InitializeProject => format!("{tool} init [args...]"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(intent: Intent, args: &[&str], descriptor_present: bool) -> Vec<String> {
        let request = OperationRequest::new(intent, args.iter().copied());
        let state = ProjectState {
            descriptor_present,
            lock_present: descriptor_present,
            lock_fresh: descriptor_present,
            ..ProjectState::default()
        };
        translate(&request, &state, &Config::default())
            .unwrap()
            .rendered()
    }

    fn sample_args(intent: Intent) -> Vec<&'static str> {
        match intent.required_argument() {
            Some(_) => vec!["thing"],
            None => vec![],
        }
    }

    /// The subcommand (or runner program) that identifies each intent.
    fn verb(intent: Intent) -> &'static str {
        match intent {
            Intent::RunScript
            | Intent::RunModule
            | Intent::RunTestSuite
            | Intent::StartNotebookServer => "run",
            Intent::InstallDependency | Intent::InstallDevDependency => "add",
            Intent::RemoveDependency => "remove",
            Intent::RunToolOnce => "uvx",
            Intent::SyncDependencies => "sync",
            Intent::InitializeProject => "init",
        }
    }

    #[test]
    fn install_dependency_with_descriptor() {
        assert_eq!(
            plan(Intent::InstallDependency, &["requests"], true),
            vec!["uv add requests"]
        );
    }

    #[test]
    fn test_suite_without_descriptor_inits_first() {
        assert_eq!(
            plan(Intent::RunTestSuite, &[], false),
            vec!["uv init", "uv run pytest"]
        );
    }

    #[test]
    fn every_intent_uses_its_verb_once() {
        for &intent in Intent::all() {
            let request = OperationRequest::new(intent, sample_args(intent));
            let state = ProjectState {
                descriptor_present: true,
                notebook_installed: true,
                ..ProjectState::default()
            };
            let t = translate(&request, &state, &Config::default()).unwrap();
            let main = t.main_command().unwrap().to_string();
            let count = main.split(' ').filter(|w| *w == verb(intent)).count();
            assert_eq!(count, 1, "{intent}: {main}");
        }
    }

    #[test]
    fn missing_descriptor_prepends_init_for_project_intents() {
        for &intent in Intent::all() {
            let t = plan(intent, &sample_args(intent), false);
            if intent.is_project_scoped() {
                assert_eq!(t[0], "uv init", "{intent}");
                assert!(t.len() >= 2, "{intent}");
            } else if intent == Intent::RunToolOnce {
                assert_eq!(t, vec!["uvx thing"]);
            } else {
                assert_eq!(t, vec!["uv init"]);
            }
        }
    }

    #[test]
    fn present_descriptor_never_inits() {
        for &intent in Intent::all() {
            if intent == Intent::InitializeProject {
                continue;
            }
            let t = plan(intent, &sample_args(intent), true);
            assert!(!t.iter().any(|c| c == "uv init"), "{intent}: {t:?}");
        }
    }

    #[test]
    fn translation_is_pure() {
        let request = OperationRequest::new(Intent::RunScript, ["main.py", "--verbose"]);
        let state = ProjectState::default();
        let cfg = Config::default();
        let a = translate(&request, &state, &cfg).unwrap();
        let b = translate(&request, &state, &cfg).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn args_are_substituted_verbatim() {
        assert_eq!(
            plan(Intent::RunScript, &["scripts/train.py", "--epochs", "3"], true),
            vec!["uv run python scripts/train.py --epochs 3"]
        );
        assert_eq!(
            plan(Intent::RunModule, &["http.server", "8000"], true),
            vec!["uv run python -m http.server 8000"]
        );
        assert_eq!(
            plan(Intent::InstallDevDependency, &["pytest", "ruff>=0.5"], true),
            vec!["uv add --dev pytest ruff>=0.5"]
        );
        assert_eq!(
            plan(Intent::RemoveDependency, &["requests"], true),
            vec!["uv remove requests"]
        );
        assert_eq!(
            plan(Intent::RunToolOnce, &["ruff", "check", "."], true),
            vec!["uvx ruff check ."]
        );
        assert_eq!(
            plan(Intent::RunTestSuite, &["-k", "smoke"], true),
            vec!["uv run pytest -k smoke"]
        );
        assert_eq!(plan(Intent::SyncDependencies, &[], true), vec!["uv sync"]);
    }

    #[test]
    fn notebook_adds_jupyterlab_when_absent() {
        assert_eq!(
            plan(Intent::StartNotebookServer, &[], true),
            vec!["uv add --dev jupyterlab", "uv run jupyter lab"]
        );
        assert_eq!(
            plan(Intent::StartNotebookServer, &[], false),
            vec!["uv init", "uv add --dev jupyterlab", "uv run jupyter lab"]
        );

        let request = OperationRequest::new(Intent::StartNotebookServer, Vec::<String>::new());
        let state = ProjectState {
            descriptor_present: true,
            notebook_installed: true,
            ..ProjectState::default()
        };
        let t = translate(&request, &state, &Config::default()).unwrap();
        assert_eq!(t.rendered(), vec!["uv run jupyter lab"]);
        assert!(t.prerequisites().is_empty());
    }

    #[test]
    fn missing_argument_is_rejected() {
        let request = OperationRequest::new(Intent::InstallDependency, Vec::<String>::new());
        let err = translate(&request, &ProjectState::default(), &Config::default()).unwrap_err();
        assert!(matches!(err, UvflowError::MissingArgument { .. }));
        assert!(err.to_string().contains("at least one package"));
    }

    #[test]
    fn config_changes_tool_runner_and_init_args() {
        let cfg = Config {
            tool: "uv2".to_string(),
            runner: Some("uv2-tool".to_string()),
            test_runner: "ward".to_string(),
            init_args: vec!["--app".to_string()],
            ..Config::default()
        };
        let state = ProjectState::default();

        let t = translate(
            &OperationRequest::new(Intent::RunTestSuite, Vec::<String>::new()),
            &state,
            &cfg,
        )
        .unwrap();
        assert_eq!(t.rendered(), vec!["uv2 init --app", "uv2 run ward"]);

        let t = translate(
            &OperationRequest::new(Intent::RunToolOnce, ["black"]),
            &state,
            &cfg,
        )
        .unwrap();
        assert_eq!(t.rendered(), vec!["uv2-tool black"]);
    }

    #[test]
    fn stale_lock_adds_note_without_changing_commands() {
        let request = OperationRequest::new(Intent::SyncDependencies, Vec::<String>::new());
        let state = ProjectState {
            descriptor_present: true,
            lock_present: true,
            lock_fresh: false,
            ..ProjectState::default()
        };
        let t = translate(&request, &state, &Config::default()).unwrap();
        assert_eq!(t.rendered(), vec!["uv sync"]);
        assert_eq!(t.notes.len(), 1);
        assert!(t.notes[0].contains("uv.lock is older than pyproject.toml"));

        let fresh = ProjectState {
            lock_fresh: true,
            ..state
        };
        let t = translate(&request, &fresh, &Config::default()).unwrap();
        assert!(t.notes.is_empty());
    }

    #[test]
    fn explicit_init_in_existing_project_warns() {
        let request = OperationRequest::new(Intent::InitializeProject, ["--lib"]);
        let state = ProjectState {
            descriptor_present: true,
            ..ProjectState::default()
        };
        let t = translate(&request, &state, &Config::default()).unwrap();
        assert_eq!(t.rendered(), vec!["uv init --lib"]);
        assert!(t.notes[0].contains("already exists"));
    }

    #[test]
    fn table_covers_every_intent() {
        let rows = mapping_table(&Config::default());
        assert_eq!(rows.len(), Intent::all().len());
        let tool_once = rows
            .iter()
            .find(|r| r.intent == Intent::RunToolOnce)
            .unwrap();
        assert_eq!(tool_once.preferred, "uvx <tool-name> [args...]");
        assert_eq!(tool_once.conventional, "pipx run <tool> [args...]");
    }

    #[test]
    fn table_rows_show_args_and_notebook_prerequisite() {
        let rows = mapping_table(&Config::default());
        let preferred = |intent: Intent| {
            rows.iter()
                .find(|r| r.intent == intent)
                .map(|r| r.preferred.clone())
                .unwrap()
        };
        assert_eq!(preferred(Intent::SyncDependencies), "uv sync [args...]");
        assert_eq!(preferred(Intent::InitializeProject), "uv init [args...]");
        assert_eq!(
            preferred(Intent::StartNotebookServer),
            "uv run jupyter lab [args...] (after uv add --dev jupyterlab if absent)"
        );
    }

    #[test]
    fn empty_translation_has_no_main_command() {
        let t = Translation {
            intent: Intent::SyncDependencies,
            commands: Vec::new(),
            notes: Vec::new(),
        };
        assert!(t.main_command().is_none());
        assert!(t.prerequisites().is_empty());
        assert!(t.rendered().is_empty());
    }
}
