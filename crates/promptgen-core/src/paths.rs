use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory and naming constants
// ---------------------------------------------------------------------------

/// Namespace prefix used for generated prompt filenames and derived names.
pub const NAMESPACE: &str = "gsd";

/// Upstream command documents live here, relative to the project root.
pub const COMMANDS_DIR: &str = "commands/gsd";

/// Generated prompt files land here, relative to the project root.
pub const PROMPTS_DIR: &str = ".github/prompts";

pub const MARKDOWN_EXT: &str = ".md";
pub const BACKUP_SUFFIX: &str = ".bak";
pub const PROMPT_SUFFIX: &str = ".prompt.md";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn commands_dir(root: &Path) -> PathBuf {
    root.join(COMMANDS_DIR)
}

pub fn prompts_dir(root: &Path) -> PathBuf {
    root.join(PROMPTS_DIR)
}

/// Filename stem of a command file: `new-project.md` → `new-project`.
pub fn file_stem(filename: &str) -> &str {
    filename.strip_suffix(MARKDOWN_EXT).unwrap_or(filename)
}

/// Output filename for a command stem: `new-project` → `gsd.new-project.prompt.md`.
pub fn prompt_filename(stem: &str) -> String {
    format!("{NAMESPACE}.{stem}{PROMPT_SUFFIX}")
}

/// Repo-relative source path cited in the generated-file banner.
/// Always forward-slash separated, regardless of platform.
pub fn source_rel(filename: &str) -> String {
    format!("{COMMANDS_DIR}/{filename}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
