// File: src/generator.rs
// Purpose: Scan -> render -> persist, keeping the latest catalog as a shared snapshot

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{error, info};

use crate::catalog::{CatalogStore, RouteCatalog};
use crate::config::Config;
use crate::emit::{render, CatalogSink, FileSink, OutputFormat};
use crate::error::Result;
use crate::scanner::RouteScanner;

/// Everything one generator needs, already resolved by the caller
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    pub pages_dir: PathBuf,
    pub page_files: Vec<String>,
    pub include_route_groups: bool,
    pub route_prefix: String,
    pub format: OutputFormat,
}

impl From<&Config> for GeneratorOptions {
    fn from(config: &Config) -> Self {
        Self {
            pages_dir: config.routing.pages_dir.clone(),
            page_files: config.routing.page_files.clone(),
            include_route_groups: config.routing.include_route_groups,
            route_prefix: config.output.route_prefix.clone(),
            format: config.output.resolved_format(),
        }
    }
}

/// Route generator: owns the scanner, the sink and the current catalog
///
/// [`rescan`](Self::rescan) is the single regeneration entry point. Each call
/// is an independent full scan; the stored catalog only changes after the
/// scan and the write both succeed.
pub struct Generator {
    pages_dir: PathBuf,
    scanner: RouteScanner,
    sink: Box<dyn CatalogSink>,
    route_prefix: String,
    format: OutputFormat,
    store: CatalogStore,
}

impl Generator {
    pub fn new(options: GeneratorOptions, sink: Box<dyn CatalogSink>) -> Self {
        Self {
            pages_dir: options.pages_dir,
            scanner: RouteScanner::new(options.page_files, options.include_route_groups),
            sink,
            route_prefix: options.route_prefix,
            format: options.format,
            store: CatalogStore::default(),
        }
    }

    /// Generator writing to the configured output file
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            GeneratorOptions::from(config),
            Box::new(FileSink::new(config.output.path.clone())),
        )
    }

    pub fn pages_dir(&self) -> &Path {
        &self.pages_dir
    }

    /// Scans without persisting or replacing the stored catalog
    pub fn scan(&self) -> Result<RouteCatalog> {
        info!(dir = %self.pages_dir.display(), "🔍 Scanning routes");
        self.scanner.scan(&self.pages_dir)
    }

    /// Full regeneration: scan, render, persist, then publish the new catalog
    ///
    /// On failure the previous catalog stays current.
    pub fn rescan(&self) -> Result<Arc<RouteCatalog>> {
        let result = self.scan().and_then(|catalog| {
            let lines = render(&catalog, &self.route_prefix, self.format);
            self.sink.persist(&lines)?;
            Ok(catalog)
        });

        match result {
            Ok(catalog) => {
                info!(routes = catalog.len(), "✅ Generated route definitions");
                let catalog = Arc::new(catalog);
                self.store.replace(Arc::clone(&catalog));
                Ok(catalog)
            }
            Err(e) => {
                error!(error = %e, "❌ Failed to generate routes");
                Err(e)
            }
        }
    }

    /// Latest successfully generated catalog (empty before the first rescan)
    pub fn catalog(&self) -> Arc<RouteCatalog> {
        self.store.snapshot()
    }
}
