use crate::output::{plan_json, print_json, print_plan};
use anyhow::{bail, Context};
use std::path::Path;
use uvflow_core::{
    runner::{self, ChildStdout},
    types::Intent,
};

use super::translate::build_plan;

pub fn run(
    root: &Path,
    tool: Option<String>,
    intent: Intent,
    args: Vec<String>,
    dry_run: bool,
    json: bool,
) -> anyhow::Result<()> {
    // trailing args are verbatim, so a late --dry-run is not our flag
    if !dry_run && args.iter().any(|a| a == "--dry-run") {
        bail!("--dry-run must come before the intent: uvflow exec --dry-run {intent} ...");
    }

    let plan = build_plan(root, tool, intent, args)?;

    if dry_run {
        if json {
            return print_json(&plan_json(&plan));
        }
        print_plan(&plan);
        return Ok(());
    }

    for note in &plan.notes {
        eprintln!("note: {note}");
    }
    let stdout = if json {
        ChildStdout::Stderr
    } else {
        ChildStdout::Inherit
    };
    runner::run_plan(&plan, root, stdout)
        .with_context(|| format!("'{intent}' did not complete"))?;

    if json {
        print_json(&serde_json::json!({
            "intent": intent,
            "ran": plan.rendered(),
        }))?;
    }
    Ok(())
}
