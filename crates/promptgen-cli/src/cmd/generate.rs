use crate::output::print_json;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let report = promptgen_core::generate::run(root)?;

    if json {
        return print_json(&report);
    }

    println!(
        "Generated {} prompt files into {}",
        report.generated,
        report.out_dir.display()
    );
    Ok(())
}
