use crate::error::Result;
use crate::{generate, paths};
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;

/// Outcome of a verification pass: how many command files were checked and
/// which expected prompt filenames were not found.
#[derive(Debug, Serialize)]
pub struct VerifyReport {
    pub checked: usize,
    pub missing: Vec<String>,
}

impl VerifyReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Check that every command document under `root` has a generated prompt
/// file. Presence only — output content is never inspected.
pub fn run(root: &Path) -> Result<VerifyReport> {
    let cmd_files = generate::list_command_files(&paths::commands_dir(root))?;
    let prompt_names = list_prompt_names(&paths::prompts_dir(root))?;

    let mut missing = Vec::new();
    for file in &cmd_files {
        let filename = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let expected = paths::prompt_filename(paths::file_stem(&filename));
        if !prompt_names.contains(&expected) {
            missing.push(expected);
        }
    }

    Ok(VerifyReport {
        checked: cmd_files.len(),
        missing,
    })
}

fn list_prompt_names(dir: &Path) -> Result<HashSet<String>> {
    if !dir.is_dir() {
        return Ok(HashSet::new());
    }
    Ok(std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.ends_with(paths::PROMPT_SUFFIX))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_command(root: &Path, name: &str) {
        let dir = paths::commands_dir(root);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(name), "body\n").unwrap();
    }

    #[test]
    fn round_trip_after_generation_has_no_missing() {
        let dir = TempDir::new().unwrap();
        write_command(dir.path(), "one.md");
        write_command(dir.path(), "two.md");
        generate::run(dir.path()).unwrap();

        let report = run(dir.path()).unwrap();
        assert_eq!(report.checked, 2);
        assert!(report.is_complete());
    }

    #[test]
    fn deleted_output_is_reported_by_name() {
        let dir = TempDir::new().unwrap();
        write_command(dir.path(), "one.md");
        write_command(dir.path(), "two.md");
        generate::run(dir.path()).unwrap();
        std::fs::remove_file(paths::prompts_dir(dir.path()).join("gsd.two.prompt.md")).unwrap();

        let report = run(dir.path()).unwrap();
        assert_eq!(report.missing, vec!["gsd.two.prompt.md".to_string()]);
    }

    #[test]
    fn missing_output_dir_reports_all_commands() {
        let dir = TempDir::new().unwrap();
        write_command(dir.path(), "a.md");
        let report = run(dir.path()).unwrap();
        assert_eq!(report.checked, 1);
        assert_eq!(report.missing, vec!["gsd.a.prompt.md".to_string()]);
    }

    #[test]
    fn no_commands_verifies_clean() {
        let dir = TempDir::new().unwrap();
        let report = run(dir.path()).unwrap();
        assert_eq!(report.checked, 0);
        assert!(report.is_complete());
    }

    #[test]
    fn backup_files_are_not_expected() {
        let dir = TempDir::new().unwrap();
        write_command(dir.path(), "one.md");
        write_command(dir.path(), "one.md.bak");
        generate::run(dir.path()).unwrap();

        let report = run(dir.path()).unwrap();
        assert_eq!(report.checked, 1);
        assert!(report.is_complete());
    }
}
