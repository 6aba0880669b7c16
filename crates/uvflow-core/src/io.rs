use crate::error::Result;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically write `data` to `path` using a tempfile in the same directory.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Outcome of an upsert, used for `created:` / `updated:` reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Updated,
    Unchanged,
}

impl WriteOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            WriteOutcome::Created => "created",
            WriteOutcome::Updated => "updated",
            WriteOutcome::Unchanged => "unchanged",
        }
    }
}

/// Write `data` to `path`, skipping the write when the content is identical.
pub fn upsert(path: &Path, data: &[u8]) -> Result<WriteOutcome> {
    if !path.exists() {
        atomic_write(path, data)?;
        return Ok(WriteOutcome::Created);
    }
    if std::fs::read(path)? == data {
        return Ok(WriteOutcome::Unchanged);
    }
    atomic_write(path, data)?;
    Ok(WriteOutcome::Updated)
}

/// Replace content between `start_marker` and `end_marker` (inclusive) in a file.
///
/// Returns `None` if the file or either marker is missing (file untouched),
/// otherwise whether the section was rewritten or already matched.
pub fn replace_between_markers(
    path: &Path,
    start_marker: &str,
    end_marker: &str,
    replacement: &str,
) -> Result<Option<WriteOutcome>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    let Some(start_pos) = content.find(start_marker) else {
        return Ok(None);
    };
    let search_from = start_pos + start_marker.len();
    let Some(end_offset) = content[search_from..].find(end_marker) else {
        return Ok(None);
    };
    let end_pos = search_from + end_offset + end_marker.len();

    let mut updated = String::with_capacity(content.len());
    updated.push_str(&content[..start_pos]);
    updated.push_str(replacement);
    updated.push_str(&content[end_pos..]);

    if updated == content {
        return Ok(Some(WriteOutcome::Unchanged));
    }
    atomic_write(path, updated.as_bytes())?;
    Ok(Some(WriteOutcome::Updated))
}

/// Append text to a file, creating it if it doesn't exist.
///
/// Inserts a blank-line separator when the file already has content.
pub fn append_section(path: &Path, text: &str) -> Result<()> {
    let existing = if path.exists() {
        std::fs::read_to_string(path)?
    } else {
        String::new()
    };
    let sep = if existing.is_empty() || existing.ends_with("\n\n") {
        ""
    } else if existing.ends_with('\n') {
        "\n"
    } else {
        "\n\n"
    };
    let mut f = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    write!(f, "{sep}{text}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn atomic_write_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a/b/c.txt");
        atomic_write(&path, b"hello").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn upsert_reports_outcome() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("skill.md");
        assert_eq!(upsert(&path, b"one").unwrap(), WriteOutcome::Created);
        assert_eq!(upsert(&path, b"one").unwrap(), WriteOutcome::Unchanged);
        assert_eq!(upsert(&path, b"two").unwrap(), WriteOutcome::Updated);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "two");
    }

    #[test]
    fn replace_between_markers_swaps_inner_section() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("AGENTS.md");
        std::fs::write(&path, "head\n<!-- s -->old<!-- e -->\ntail\n").unwrap();
        let section = "<!-- s -->new<!-- e -->";
        assert_eq!(
            replace_between_markers(&path, "<!-- s -->", "<!-- e -->", section).unwrap(),
            Some(WriteOutcome::Updated)
        );
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "head\n<!-- s -->new<!-- e -->\ntail\n"
        );
        assert_eq!(
            replace_between_markers(&path, "<!-- s -->", "<!-- e -->", section).unwrap(),
            Some(WriteOutcome::Unchanged)
        );
    }

    #[test]
    fn replace_between_markers_missing_end_is_noop() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("AGENTS.md");
        std::fs::write(&path, "<!-- s -->dangling").unwrap();
        assert_eq!(
            replace_between_markers(&path, "<!-- s -->", "<!-- e -->", "x").unwrap(),
            None
        );
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<!-- s -->dangling");
    }

    #[test]
    fn append_section_separates_with_blank_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("AGENTS.md");
        std::fs::write(&path, "# Existing").unwrap();
        append_section(&path, "## New\n").unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "# Existing\n\n## New\n"
        );
    }
}
