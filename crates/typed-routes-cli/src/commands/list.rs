use anyhow::Result;
use colored::Colorize;
use typed_routes::{Config, Generator};

pub fn execute(config: &Config) -> Result<()> {
    let catalog = Generator::from_config(config).scan()?;

    if catalog.is_empty() {
        println!("{}", "No routes found".yellow());
        return Ok(());
    }

    for template in catalog.iter() {
        if template.is_static() {
            println!("  {}", template);
        } else {
            println!(
                "  {}  {}",
                template.to_string().cyan(),
                format!("({})", template.params().join(", ")).dimmed()
            );
        }
    }
    println!();
    println!(
        "{} routes ({} static, {} dynamic)",
        catalog.len(),
        catalog.static_routes().count(),
        catalog.parametric_routes().count()
    );

    Ok(())
}
