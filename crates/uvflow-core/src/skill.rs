//! Agent-facing guidance rendered from the mapping table.
//!
//! The skill document and the AGENTS.md section are generated from
//! [`mapping_table`] so the prose an agent reads always matches what
//! `uvflow translate` emits.

use crate::config::Config;
use crate::error::{Result, UvflowError};
use crate::io::{self, WriteOutcome};
use crate::paths;
use crate::translate::mapping_table;
use std::path::{Path, PathBuf};

/// Opening marker of the managed section in AGENTS.md.
pub const SECTION_START: &str = "<!-- uvflow:start -->";
/// Closing marker of the managed section in AGENTS.md.
pub const SECTION_END: &str = "<!-- uvflow:end -->";

const SKILL_DESCRIPTION: &str = "Use uv instead of pip, python, pytest and pipx when working \
on Python projects. Use when running scripts, installing or removing dependencies, running \
tests, starting notebooks or running one-off tools.";

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn command_table(config: &Config) -> String {
    let mut out = String::from("| Instead of | Use |\n|---|---|\n");
    for row in mapping_table(config) {
        out.push_str(&format!("| `{}` | `{}` |\n", row.conventional, row.preferred));
    }
    out
}

fn workflow_rules(config: &Config) -> String {
    let tool = &config.tool;
    let runner = config.runner();
    format!(
        "1. Look for `{descriptor}` in the project root. If it is missing, run `{tool} init` \
before adding dependencies or running project commands.\n\
2. Add dependencies with `{tool} add`, never `pip install`. Use `{tool} add --dev` for \
test, lint and notebook tooling.\n\
3. Run code through `{tool} run` so the project environment is synced first. Do not \
activate `{env}` by hand.\n\
4. Use `{runner}` for tools you only need once (formatters, linters, generators).\n\
5. Commit `{lock}`. If it is older than `{descriptor}`, the next `{tool}` command re-locks.\n\
6. When a plan is unclear, run `uvflow translate <intent> [args...]` to get the exact \
commands for this project.\n",
        descriptor = paths::DESCRIPTOR_FILE,
        lock = paths::LOCK_FILE,
        env = paths::ENV_DIR,
    )
}

/// Full `SKILL.md` content, front matter included.
pub fn render_skill(config: &Config) -> String {
    let tool = &config.tool;
    format!(
        "---\nname: {name}\ndescription: {SKILL_DESCRIPTION}\n---\n\n\
# uv Workflow Skill\n\n\
Use this skill whenever you are about to run Python, install packages or run tests \
in a Python project.\n\n\
## Command Mapping\n\n\
{table}\n\
## Workflow\n\n\
{rules}\n\
## If `{tool}` is missing\n\n\
Stop and tell the user. Install it with \
`curl -LsSf https://astral.sh/uv/install.sh | sh` (macOS/Linux) or \
`powershell -c \"irm https://astral.sh/uv/install.ps1 | iex\"` (Windows).\n",
        name = paths::SKILL_NAME,
        table = command_table(config),
        rules = workflow_rules(config),
    )
}

/// The managed AGENTS.md section, markers included.
pub fn render_agents_section(config: &Config) -> String {
    format!(
        "{SECTION_START}\n\n## Python Tooling\n\n\
This project uses `{tool}` for Python environments and dependencies.\n\n\
{table}\n\
{rules}\n\
{SECTION_END}",
        tool = config.tool,
        table = command_table(config),
        rules = workflow_rules(config),
    )
}

// ---------------------------------------------------------------------------
// Installation
// ---------------------------------------------------------------------------

/// Where `skill install` writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillScope {
    /// `~/.claude/skills/`
    User,
    /// `<root>/.claude/skills/`
    Project,
}

pub fn skill_path(scope: SkillScope, root: &Path) -> Result<PathBuf> {
    match scope {
        SkillScope::Project => Ok(paths::project_skill_path(root)),
        SkillScope::User => {
            let home = home::home_dir().ok_or(UvflowError::HomeNotFound)?;
            Ok(paths::user_skill_path(&home))
        }
    }
}

/// Upsert the rendered skill at `path`.
pub fn install_skill(path: &Path, config: &Config) -> Result<WriteOutcome> {
    let outcome = io::upsert(path, render_skill(config).as_bytes())?;
    tracing::info!(path = %path.display(), outcome = outcome.as_str(), "installed skill");
    Ok(outcome)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentsMdOutcome {
    Created,
    Refreshed,
    /// Managed section already matches the rendered one; nothing written.
    Unchanged,
    Appended,
    /// Start marker present without a matching end marker; file left untouched.
    Skipped,
}

/// Write or refresh the managed section in `<root>/AGENTS.md`.
///
/// Existing content outside the markers is preserved and the section is
/// never duplicated.
pub fn write_agents_md(root: &Path, config: &Config) -> Result<AgentsMdOutcome> {
    let path = paths::agents_md_path(root);
    let section = render_agents_section(config);

    if !path.exists() {
        let content = format!("# AGENTS.md\n\n{section}\n");
        io::atomic_write(&path, content.as_bytes())?;
        return Ok(AgentsMdOutcome::Created);
    }

    let existing = std::fs::read_to_string(&path)?;
    if existing.contains(SECTION_START) {
        return match io::replace_between_markers(&path, SECTION_START, SECTION_END, &section)? {
            Some(WriteOutcome::Unchanged) => Ok(AgentsMdOutcome::Unchanged),
            Some(_) => Ok(AgentsMdOutcome::Refreshed),
            None => {
                tracing::warn!(path = %path.display(), "start marker without end marker");
                Ok(AgentsMdOutcome::Skipped)
            }
        };
    }

    io::append_section(&path, &format!("{section}\n"))?;
    Ok(AgentsMdOutcome::Appended)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
