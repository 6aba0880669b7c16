use crate::output::{plan_json, print_json, print_plan};
use anyhow::Context;
use std::path::Path;
use uvflow_core::{
    project::ProjectState,
    translate::{translate, Translation},
    types::{Intent, OperationRequest},
};

pub fn run(
    root: &Path,
    tool: Option<String>,
    intent: Intent,
    args: Vec<String>,
    json: bool,
) -> anyhow::Result<()> {
    let plan = build_plan(root, tool, intent, args)?;
    if json {
        print_json(&plan_json(&plan))
    } else {
        print_plan(&plan);
        Ok(())
    }
}

/// Detect the project state under `root` and translate the request against it.
pub fn build_plan(
    root: &Path,
    tool: Option<String>,
    intent: Intent,
    args: Vec<String>,
) -> anyhow::Result<Translation> {
    let config = super::load_config(root, tool)?;
    let state = ProjectState::detect(root)
        .with_context(|| format!("failed to inspect {}", root.display()))?;
    let request = OperationRequest::new(intent, args);
    let plan = translate(&request, &state, &config)?;
    Ok(plan)
}
