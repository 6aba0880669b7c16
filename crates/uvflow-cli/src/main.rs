mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{config::ConfigSubcommand, skill::SkillSubcommand};
use std::path::PathBuf;
use uvflow_core::types::Intent;

#[derive(Parser)]
#[command(
    name = "uvflow",
    about = "Translate conventional Python workflow operations into uv commands",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from pyproject.toml or .git/)
    #[arg(long, global = true, env = "UVFLOW_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Project tool executable (overrides `tool` in .uvflow.yaml)
    #[arg(long, global = true, env = "UVFLOW_TOOL")]
    tool: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the commands that perform an operation in this project
    Translate {
        /// Operation, e.g. install-dependency, run-test-suite, run-tool-once
        intent: Intent,
        /// Arguments substituted verbatim (packages, script path, tool args)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Translate an operation and run the resulting commands
    Exec {
        /// Print the plan instead of running it
        #[arg(long)]
        dry_run: bool,
        intent: Intent,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Show what the project root contains (descriptor, lock file, environment)
    Status,

    /// Show the conventional → preferred command mapping
    Table,

    /// Render and install the agent skill and AGENTS.md guidance
    Skill {
        #[command(subcommand)]
        subcommand: SkillSubcommand,
    },

    /// Inspect and validate .uvflow.yaml
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Exec { dry_run: false, .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());
    let tool = cli.tool;

    let result = match cli.command {
        Commands::Translate { intent, args } => {
            cmd::translate::run(&root, tool, intent, args, cli.json)
        }
        Commands::Exec {
            dry_run,
            intent,
            args,
        } => cmd::exec::run(&root, tool, intent, args, dry_run, cli.json),
        Commands::Status => cmd::status::run(&root, cli.json),
        Commands::Table => cmd::table::run(&root, tool, cli.json),
        Commands::Skill { subcommand } => cmd::skill::run(&root, tool, subcommand, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, tool, subcommand, cli.json),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
