use crate::error::{PromptgenError, Result};
use crate::{frontmatter, io, paths, prompt};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Outcome of a generator run.
#[derive(Debug, Serialize)]
pub struct GenerateReport {
    pub generated: usize,
    pub out_dir: PathBuf,
}

/// List command documents in `dir`: markdown files, `.bak` backups excluded,
/// sorted lexicographically by filename for reproducible iteration order.
/// A missing directory yields an empty list, not an error.
pub fn list_command_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| {
                    n.ends_with(paths::MARKDOWN_EXT) && !n.ends_with(paths::BACKUP_SUFFIX)
                })
        })
        .collect();
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Generate one prompt file per command document under `root`.
///
/// Each input is read, parsed, transformed, and written before the next is
/// considered. Existing outputs of the same name are overwritten; identical
/// inputs always produce byte-identical outputs.
pub fn run(root: &Path) -> Result<GenerateReport> {
    let commands_dir = paths::commands_dir(root);
    let files = list_command_files(&commands_dir)?;
    if files.is_empty() {
        return Err(PromptgenError::NoCommandFiles(commands_dir));
    }

    let out_dir = paths::prompts_dir(root);
    io::ensure_dir(&out_dir)?;

    for file in &files {
        let filename = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let document = std::fs::read_to_string(file)?;
        let doc = frontmatter::parse(&document);
        let rendered = prompt::build_prompt(&doc, &filename);

        let out_path = out_dir.join(paths::prompt_filename(paths::file_stem(&filename)));
        io::atomic_write(&out_path, rendered.as_bytes())?;
        tracing::debug!(source = %filename, out = %out_path.display(), "generated prompt");
    }

    Ok(GenerateReport {
        generated: files.len(),
        out_dir,
    })
}
