use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// File and directory constants
// ---------------------------------------------------------------------------

pub const DESCRIPTOR_FILE: &str = "pyproject.toml";
pub const LOCK_FILE: &str = "uv.lock";
pub const ENV_DIR: &str = ".venv";

pub const CONFIG_FILE: &str = ".uvflow.yaml";

pub const AGENTS_MD: &str = "AGENTS.md";
pub const SKILLS_DIR: &str = ".claude/skills";
pub const SKILL_NAME: &str = "uv-workflow";
pub const SKILL_FILE: &str = "SKILL.md";

/// Launcher names a notebook install leaves in the environment.
pub const NOTEBOOK_LAUNCHERS: &[&str] = &["bin/jupyter-lab", "Scripts/jupyter-lab.exe"];

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn descriptor_path(root: &Path) -> PathBuf {
    root.join(DESCRIPTOR_FILE)
}

pub fn lock_path(root: &Path) -> PathBuf {
    root.join(LOCK_FILE)
}

pub fn env_dir(root: &Path) -> PathBuf {
    root.join(ENV_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn agents_md_path(root: &Path) -> PathBuf {
    root.join(AGENTS_MD)
}

/// `<root>/.claude/skills/uv-workflow/SKILL.md`
pub fn project_skill_path(root: &Path) -> PathBuf {
    root.join(SKILLS_DIR).join(SKILL_NAME).join(SKILL_FILE)
}

/// `<home>/.claude/skills/uv-workflow/SKILL.md`
pub fn user_skill_path(home: &Path) -> PathBuf {
    project_skill_path(home)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_helpers() {
        let root = Path::new("/tmp/proj");
        assert_eq!(
            descriptor_path(root),
            PathBuf::from("/tmp/proj/pyproject.toml")
        );
        assert_eq!(lock_path(root), PathBuf::from("/tmp/proj/uv.lock"));
        assert_eq!(env_dir(root), PathBuf::from("/tmp/proj/.venv"));
        assert_eq!(config_path(root), PathBuf::from("/tmp/proj/.uvflow.yaml"));
        assert_eq!(
            project_skill_path(root),
            PathBuf::from("/tmp/proj/.claude/skills/uv-workflow/SKILL.md")
        );
    }
}
