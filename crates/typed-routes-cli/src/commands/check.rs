use anyhow::{bail, Result};
use colored::Colorize;
use typed_routes::{Config, Generator};

/// Validates each path against the scanned catalog; fails if any path is unknown
pub fn execute(config: &Config, paths: &[String]) -> Result<()> {
    let catalog = Generator::from_config(config).scan()?;

    let mut invalid = 0;
    for path in paths {
        match catalog.find(path) {
            Some(template) => println!("{} {} -> {}", "✓".green(), path, template),
            None => {
                println!("{} {} matches no route", "✗".red(), path);
                invalid += 1;
            }
        }
    }

    if invalid > 0 {
        bail!("{invalid} of {} paths did not match a route", paths.len());
    }

    Ok(())
}
