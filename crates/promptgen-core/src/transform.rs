use regex::{Captures, Regex};
use std::sync::OnceLock;

static INCLUDE_RE: OnceLock<Regex> = OnceLock::new();
static HOME_TOOL_PATH_RE: OnceLock<Regex> = OnceLock::new();
static ROOT_TOOL_PATH_RE: OnceLock<Regex> = OnceLock::new();

fn include_re() -> &'static Regex {
    // Conservative: only lines whose first non-whitespace character is '@'.
    INCLUDE_RE.get_or_init(|| Regex::new(r"(?m)^\s*@(?:include\s+)?(.+?)\s*$").unwrap())
}

fn home_tool_path_re() -> &'static Regex {
    HOME_TOOL_PATH_RE.get_or_init(|| Regex::new(r"~/\.(claude|opencode|gemini)/").unwrap())
}

fn root_tool_path_re() -> &'static Regex {
    // The [^.] guard keeps already-workspace-relative `./.claude/` fragments
    // (including ones just produced by the home-path pass) from re-matching.
    ROOT_TOOL_PATH_RE
        .get_or_init(|| Regex::new(r"(^|[^.~])/\.(claude|opencode|gemini)/").unwrap())
}

/// Convert `@` include directives into "Read file at:" bullets.
///
/// An optional literal `include` keyword after the `@` is stripped. Lines
/// where `@` is not the first non-whitespace character are left untouched.
pub fn convert_includes(text: &str) -> String {
    include_re()
        .replace_all(text, |caps: &Captures| {
            format!("- Read file at: {}", caps[1].trim())
        })
        .into_owned()
}

/// Rewrite home-relative (`~/.claude/`) and root-relative (`/.claude/`)
/// runtime-tool paths to workspace-relative (`./.claude/`) form, globally.
///
/// Exactly three tool names are recognized; any other leading-dot directory
/// is left alone.
pub fn normalize_runtime_paths(text: &str) -> String {
    let text = home_tool_path_re().replace_all(text, "./.$1/");
    root_tool_path_re()
        .replace_all(&text, "${1}./.${2}/")
        .into_owned()
}

/// Normalize CRLF line endings to LF.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n")
}
