use std::path::PathBuf;

use crate::config::Config;

pub fn build(config: Config, output_override: Option<PathBuf>) -> anyhow::Result<()> {
    let output_dir = output_override.unwrap_or(config.site.output_dir.clone());

    let report = crate::site::build(&config, &output_dir)?;

    println!(
        "Built {} pages and {} assets into {}",
        report.pages.len(),
        report.assets.len(),
        report.output_dir.display()
    );

    Ok(())
}
