use crate::output::print_json;
use anyhow::Context;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let report = promptgen_core::verify::run(root).context("failed to list command files")?;

    if json {
        print_json(&report)?;
    } else if report.is_complete() {
        println!("OK: {} commands mapped to prompt files.", report.checked);
    } else {
        eprintln!("Missing generated prompt files:");
        for name in &report.missing {
            eprintln!("- {name}");
        }
    }

    if !report.is_complete() {
        anyhow::bail!(
            "{} of {} prompt files missing (run: promptgen generate)",
            report.missing.len(),
            report.checked
        );
    }
    Ok(())
}
