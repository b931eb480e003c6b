// File: src/scanner.rs
// Purpose: Walks an app directory and collects the route templates of its page files

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::catalog::RouteCatalog;
use crate::error::{Result, RouteError};
use crate::path::map_path_to_template;

/// Page file names recognized when none are configured
pub const DEFAULT_PAGE_FILES: [&str; 4] = ["page.tsx", "page.ts", "page.jsx", "page.js"];

/// Checks if a file name is one of the recognized page files (exact match)
pub fn is_page_file(file_name: &str, page_files: &[String]) -> bool {
    page_files.iter().any(|page| page == file_name)
}

/// Result of a scan that finished, including the subtrees it had to skip
#[derive(Debug)]
pub struct ScanReport {
    pub catalog: RouteCatalog,
    /// Directories that could not be read; their pages are absent from the catalog
    pub skipped: Vec<PathBuf>,
}

/// Discovers route templates by walking a directory tree
///
/// Traversal is sequential and visits every subdirectory, route groups
/// included; group handling only changes the template text.
#[derive(Debug, Clone)]
pub struct RouteScanner {
    page_files: Vec<String>,
    include_route_groups: bool,
}

impl Default for RouteScanner {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_FILES.iter().map(|s| s.to_string()).collect(), false)
    }
}

impl RouteScanner {
    pub fn new(page_files: Vec<String>, include_route_groups: bool) -> Self {
        Self {
            page_files,
            include_route_groups,
        }
    }

    pub fn page_files(&self) -> &[String] {
        &self.page_files
    }

    pub fn include_route_groups(&self) -> bool {
        self.include_route_groups
    }

    /// Scans `root_dir` into a sorted, deduplicated catalog
    ///
    /// Fails with [`RouteError::DirectoryNotFound`] when the root is missing or
    /// not a directory. Unreadable subdirectories are logged and skipped.
    pub fn scan(&self, root_dir: impl AsRef<Path>) -> Result<RouteCatalog> {
        self.scan_with_report(root_dir).map(|report| report.catalog)
    }

    /// Same as [`scan`](Self::scan), also returning the skipped directories
    pub fn scan_with_report(&self, root_dir: impl AsRef<Path>) -> Result<ScanReport> {
        let root_dir = root_dir.as_ref();
        if !fs::metadata(root_dir).is_ok_and(|meta| meta.is_dir()) {
            return Err(RouteError::DirectoryNotFound {
                path: root_dir.to_path_buf(),
            });
        }

        let mut routes = Vec::new();
        let mut skipped = Vec::new();

        for entry in WalkDir::new(root_dir).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                    let warning = RouteError::UnreadableSubdirectory {
                        path: path.clone(),
                        source: err.into(),
                    };
                    warn!(error = %warning, "⚠️  Skipping directory");
                    skipped.push(path);
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                continue;
            }

            let is_page = entry
                .file_name()
                .to_str()
                .is_some_and(|name| is_page_file(name, &self.page_files));
            if !is_page {
                continue;
            }

            let route =
                map_path_to_template(entry.path(), root_dir, self.include_route_groups);
            debug!(file = %entry.path().display(), route = %route, "Found page");
            routes.push(route);
        }

        let catalog = RouteCatalog::from_templates(routes)?;
        info!(
            root = %root_dir.display(),
            routes = catalog.len(),
            "🔍 Scanned routes"
        );

        Ok(ScanReport { catalog, skipped })
    }
}
