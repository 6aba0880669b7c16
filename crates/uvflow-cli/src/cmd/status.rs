use crate::output::print_json;
use anyhow::Context;
use std::path::Path;
use uvflow_core::{paths, project::ProjectState};

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let state = ProjectState::detect(root)
        .with_context(|| format!("failed to inspect {}", root.display()))?;

    if json {
        return print_json(&serde_json::json!({
            "root": root.display().to_string(),
            "state": state,
            "lock_stale": state.lock_stale(),
        }));
    }

    let descriptor = match state.descriptor_modified {
        Some(at) => format!("present (modified {})", at.to_rfc3339()),
        None => "missing (run `uvflow exec initialize-project`)".to_string(),
    };
    let lock = match (&state.lock_modified, state.lock_fresh) {
        (Some(at), true) => format!("fresh (modified {})", at.to_rfc3339()),
        (Some(at), false) => format!("stale (modified {})", at.to_rfc3339()),
        (None, _) => "missing".to_string(),
    };
    let env = if state.env_present { "present" } else { "missing" };
    let notebook = if state.notebook_installed {
        "installed"
    } else {
        "not installed"
    };

    println!("Project root:      {}", root.display());
    println!("{:<18} {descriptor}", format!("{}:", paths::DESCRIPTOR_FILE));
    println!("{:<18} {lock}", format!("{}:", paths::LOCK_FILE));
    println!("{:<18} {env}", format!("{}/:", paths::ENV_DIR));
    println!("{:<18} {notebook}", "jupyter-lab:");
    Ok(())
}
