use anyhow::Result;
use colored::Colorize;
use typed_routes::{Config, Generator};

/// One-shot generation; any failure ends the process with a non-zero status
pub fn execute(config: &Config) -> Result<()> {
    super::print_startup(config, "Generate once");

    let generator = Generator::from_config(config);
    let catalog = generator.rescan()?;

    println!(
        "{} Generated {} routes -> {}",
        "✓".green(),
        catalog.len(),
        config.output.path.display()
    );

    Ok(())
}
