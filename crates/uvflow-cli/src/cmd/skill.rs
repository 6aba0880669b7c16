use crate::output::print_json;
use anyhow::Context;
use clap::Subcommand;
use std::path::Path;
use uvflow_core::skill::{self, AgentsMdOutcome, SkillScope};

#[derive(Subcommand)]
pub enum SkillSubcommand {
    /// Print the rendered SKILL.md
    Show,

    /// Install SKILL.md for agents (user-level by default)
    Install {
        /// Install into <root>/.claude/skills instead of ~/.claude/skills
        #[arg(long)]
        project: bool,
    },

    /// Write or refresh the uv section in AGENTS.md
    AgentsMd,
}

pub fn run(
    root: &Path,
    tool: Option<String>,
    subcmd: SkillSubcommand,
    json: bool,
) -> anyhow::Result<()> {
    let config = super::load_config(root, tool)?;

    match subcmd {
        SkillSubcommand::Show => {
            print!("{}", skill::render_skill(&config));
            Ok(())
        }
        SkillSubcommand::Install { project } => {
            let scope = if project {
                SkillScope::Project
            } else {
                SkillScope::User
            };
            let path = skill::skill_path(scope, root)?;
            let outcome = skill::install_skill(&path, &config)
                .with_context(|| format!("failed to write {}", path.display()))?;
            if json {
                return print_json(&serde_json::json!({
                    "path": path.display().to_string(),
                    "outcome": outcome.as_str(),
                }));
            }
            println!("  {}: {}", outcome.as_str(), path.display());
            Ok(())
        }
        SkillSubcommand::AgentsMd => {
            let outcome =
                skill::write_agents_md(root, &config).context("failed to update AGENTS.md")?;
            let message = match outcome {
                AgentsMdOutcome::Created => "created: AGENTS.md",
                AgentsMdOutcome::Refreshed => "updated: AGENTS.md (uv section refreshed)",
                AgentsMdOutcome::Unchanged => "unchanged: AGENTS.md",
                AgentsMdOutcome::Appended => "updated: AGENTS.md (uv section added)",
                AgentsMdOutcome::Skipped => {
                    "warning: AGENTS.md has uvflow:start but no uvflow:end marker; skipped"
                }
            };
            if json {
                return print_json(&serde_json::json!({ "message": message }));
            }
            println!("  {message}");
            Ok(())
        }
    }
}
