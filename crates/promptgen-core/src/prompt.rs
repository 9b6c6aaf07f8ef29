use crate::frontmatter::CommandDoc;
use crate::{paths, transform};

/// Tool list declared in every generated prompt. Fixed — upstream bodies that
/// reference `AskUserQuestion` are covered by the adapter shim, not by a
/// conditional tool entry.
pub const TOOLS: &[&str] = &[
    "agent",
    "search",
    "read",
    "vscode/askQuestions",
    "execute",
    "edit",
];

/// Agent identifier declared in every generated prompt.
pub const AGENT: &str = "agent";

/// Rewrite an upstream command name to prompt-file form:
/// a leading `gsd:` becomes `gsd.`, remaining `:` become `.`.
pub fn normalize_name(name: &str) -> String {
    let name = match name.strip_prefix("gsd:") {
        Some(rest) => format!("gsd.{rest}"),
        None => name.to_string(),
    };
    name.replace(':', ".")
}

/// Logical command name: frontmatter `name` normalized, or the fixed
/// namespace joined with the filename stem when absent.
fn derive_name(doc: &CommandDoc, stem: &str) -> String {
    match doc.frontmatter.get("name") {
        Some(name) if !name.is_empty() => normalize_name(name),
        _ => format!("{}.{stem}", paths::NAMESPACE),
    }
}

/// Deterministic quoting for YAML one-liners.
fn escape_yaml_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

fn generated_banner(source_rel: &str) -> String {
    format!(
        "<!-- GENERATED FILE — DO NOT EDIT.\n\
         Source: {source_rel}\n\
         Regenerate: promptgen generate\n\
         -->"
    )
}

fn preflight_block(cmd_name: &str) -> String {
    format!(
        "## Preflight (required)\n\
         \n\
         If the local GSD install does not exist in this workspace, do this **once**:\n\
         \n\
         1. Check for: `./.claude/get-shit-done/`\n\
         2. If missing, run:\n\
         \n\
         ```bash\n\
         npx get-shit-done-cc --claude --local\n\
         ```\n\
         \n\
         3. Then re-run the slash command: `/{cmd_name}`\n\
         \n\
         ---\n"
    )
}

fn adapter_block() -> &'static str {
    // Universal shim: map upstream AskUserQuestion to VS Code's askQuestions tool.
    "## Copilot Runtime Adapter (important)\n\
     \n\
     Upstream GSD command sources may reference an `AskUserQuestion` tool (Claude/OpenCode runtime concept).\n\
     \n\
     In VS Code Copilot, **do not attempt to call a tool named `AskUserQuestion`**.\n\
     Instead, whenever the upstream instructions say \"Use AskUserQuestion\", use **#tool:vscode/askQuestions** with:\n\
     \n\
     - Combine the **Header** and **Question** into a single clear question string.\n\
     - If the upstream instruction specifies **Options**, present them as numbered choices.\n\
     - If no options are specified, ask as a freeform question.\n\
     \n\
     **Rules:**\n\
     1. If the options include \"Other\", \"Something else\", or \"Let me explain\", and the user selects it, follow up with a freeform question via #tool:vscode/askQuestions.\n\
     2. Follow the upstream branching and loop rules exactly as written (e.g., \"if X selected, do Y; otherwise continue\").\n\
     3. If the upstream flow says to **exit/stop** and run another command, tell the user to run that slash command next, then stop.\n\
     4. Use #tool:vscode/askQuestions freely — do not guess or assume user intent.\n\
     \n\
     ---\n"
}

/// Case-insensitive check for upstream `AskUserQuestion` references.
pub fn references_ask_tool(body: &str) -> bool {
    body.to_lowercase().contains("askuserquestion")
}

/// Assemble the full prompt file for one parsed command document.
///
/// `filename` is the bare input filename (e.g. `new-project.md`). The result
/// is complete output text: frontmatter, banner, preflight, adapter shim,
/// transformed body, exactly one trailing newline.
pub fn build_prompt(doc: &CommandDoc, filename: &str) -> String {
    let stem = paths::file_stem(filename);
    let cmd_name = derive_name(doc, stem);

    let description = doc
        .frontmatter
        .get("description")
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("GSD command {cmd_name}"));
    let argument_hint = doc.frontmatter.get("argument-hint").unwrap_or("");

    // Transform the body with minimal changes, in fixed order.
    let body = transform::convert_includes(&doc.body);
    let body = transform::normalize_runtime_paths(&body);
    let body = transform::normalize_newlines(&body);

    // No effect on the declared tool list today — the adapter shim covers
    // AskUserQuestion references and TOOLS already carries askQuestions.
    let _needs_ask_tool = references_ask_tool(&body);

    let tools_yaml = format!(
        "[{}]",
        TOOLS
            .iter()
            .map(|t| format!("'{t}'"))
            .collect::<Vec<_>>()
            .join(", ")
    );

    format!(
        "---\n\
         name: {cmd_name}\n\
         description: \"{description}\"\n\
         argument-hint: \"{argument_hint}\"\n\
         tools: {tools_yaml}\n\
         agent: {AGENT}\n\
         ---\n\
         \n\
         {banner}\n\
         \n\
         {preflight}\n\
         {adapter}\n\
         {body}\n",
        description = escape_yaml_string(&description),
        argument_hint = escape_yaml_string(argument_hint),
        banner = generated_banner(&paths::source_rel(filename)),
        preflight = preflight_block(&cmd_name),
        adapter = adapter_block(),
        body = body.trim_end(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter;

    #[test]
    fn normalize_name_rewrites_namespace_and_colons() {
        assert_eq!(normalize_name("gsd:new-project"), "gsd.new-project");
        assert_eq!(normalize_name("gsd:a:b"), "gsd.a.b");
        assert_eq!(normalize_name("plain"), "plain");
    }

    #[test]
    fn derived_name_falls_back_to_stem() {
        let doc = frontmatter::parse("no frontmatter here\n");
        let prompt = build_prompt(&doc, "help.md");
        assert!(prompt.starts_with("---\nname: gsd.help\n"));
    }

    #[test]
    fn description_default_names_the_command() {
        let doc = frontmatter::parse("body only\n");
        let prompt = build_prompt(&doc, "help.md");
        assert!(prompt.contains("description: \"GSD command gsd.help\"\n"));
        assert!(prompt.contains("argument-hint: \"\"\n"));
    }

    #[test]
    fn yaml_strings_are_escaped() {
        let doc = frontmatter::parse("---\nname: gsd:x\ndescription: say \"hi\" to C:\\path\n---\nbody\n");
        let prompt = build_prompt(&doc, "x.md");
        assert!(prompt.contains(r#"description: "say \"hi\" to C:\\path""#));
    }

    #[test]
    fn tool_list_is_fixed_regardless_of_ask_references() {
        let with_ask = frontmatter::parse("---\nname: gsd:a\n---\nUse AskUserQuestion here.\n");
        let without = frontmatter::parse("---\nname: gsd:b\n---\nNo questions.\n");
        let expected = "tools: ['agent', 'search', 'read', 'vscode/askQuestions', 'execute', 'edit']\n";
        assert!(build_prompt(&with_ask, "a.md").contains(expected));
        assert!(build_prompt(&without, "b.md").contains(expected));
    }

    #[test]
    fn references_ask_tool_is_case_insensitive() {
        assert!(references_ask_tool("use ASKUSERQUESTION now"));
        assert!(references_ask_tool("AskUserQuestion"));
        assert!(!references_ask_tool("ask the user a question"));
    }

    #[test]
    fn banner_cites_source_path() {
        let doc = frontmatter::parse("body\n");
        let prompt = build_prompt(&doc, "new-project.md");
        assert!(prompt.contains("Source: commands/gsd/new-project.md\n"));
        assert!(prompt.contains("GENERATED FILE — DO NOT EDIT."));
    }

    #[test]
    fn body_lands_after_adapter_with_single_trailing_newline() {
        let doc = frontmatter::parse("---\nname: gsd:x\n---\nlast line\n\n\n");
        let prompt = build_prompt(&doc, "x.md");
        assert!(prompt.ends_with("---\n\nlast line\n"));
        assert!(!prompt.ends_with("\n\n"));
    }

    #[test]
    fn preflight_names_the_derived_command() {
        let doc = frontmatter::parse("---\nname: gsd:new-project\n---\nbody\n");
        let prompt = build_prompt(&doc, "new-project.md");
        assert!(prompt.contains("3. Then re-run the slash command: `/gsd.new-project`"));
        assert!(prompt.contains("npx get-shit-done-cc --claude --local"));
    }

    #[test]
    fn full_scenario_new_project() {
        let input = "---\nname: gsd:new-project\ndescription: \"Start a project\"\n---\n\n@include setup.md\n";
        let doc = frontmatter::parse(input);
        let prompt = build_prompt(&doc, "new-project.md");

        assert!(prompt.starts_with("---\nname: gsd.new-project\n"));
        assert!(prompt.contains("description: \"Start a project\"\n"));
        assert!(prompt.contains(
            "tools: ['agent', 'search', 'read', 'vscode/askQuestions', 'execute', 'edit']\n"
        ));
        assert!(prompt.contains("agent: agent\n"));
        assert!(prompt.contains("Source: commands/gsd/new-project.md"));
        assert!(prompt.contains("- Read file at: setup.md"));
    }
}
