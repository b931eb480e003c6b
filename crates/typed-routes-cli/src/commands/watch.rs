use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use tracing::error;
use typed_routes::{Config, Generator};

use crate::watch::RouteWatcher;

/// Generate, then keep regenerating on page changes until Ctrl+C
pub fn execute(config: Config) -> Result<()> {
    super::print_startup(&config, "Watch (continuous)");

    let generator = Arc::new(Generator::from_config(&config));

    // A failed first generation is not fatal in watch mode
    match generator.rescan() {
        Ok(catalog) => println!("{} Generated {} routes", "✓".green(), catalog.len()),
        Err(e) => error!("Initial generation failed: {e}"),
    }

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async move {
            let handle = RouteWatcher::new(generator, config.watch.ignored).spawn()?;

            println!("{} Watching for file changes...", "👀".cyan());
            println!("   Press Ctrl+C to stop watching");

            tokio::signal::ctrl_c().await?;

            println!();
            println!("{} Stopping route generation...", "🛑".yellow());
            handle.shutdown().await
        })
}
