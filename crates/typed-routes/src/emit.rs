// File: src/emit.rs
// Purpose: Renders a route catalog into definition lines and persists them

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::RouteCatalog;
use crate::error::{Result, RouteError};
use crate::template::token::matcher_pattern;

const HEADER: &str = "// This file is generated by typed-routes. Do not edit.";

/// Language of the generated definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `allRoutes` constant and `AppRoute` union type
    TypeScript,
    /// `ALL_ROUTES` constant and a closed `AppRoute` enum
    Rust,
}

impl OutputFormat {
    /// Picks the format from an output file extension: `.rs` is Rust, anything else TypeScript
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("rs") => OutputFormat::Rust,
            _ => OutputFormat::TypeScript,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "typescript" | "ts" => Ok(OutputFormat::TypeScript),
            "rust" | "rs" => Ok(OutputFormat::Rust),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

/// Destination for rendered catalog definitions
pub trait CatalogSink: Send + Sync {
    fn persist(&self, lines: &[String]) -> Result<()>;
}

/// Writes definitions to a file, creating parent directories
///
/// A file that already holds the same content is left untouched.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSink for FileSink {
    fn persist(&self, lines: &[String]) -> Result<()> {
        let mut content = lines.join("\n");
        content.push('\n');

        if fs::read_to_string(&self.path).is_ok_and(|existing| existing == content) {
            debug!(path = %self.path.display(), "Generated routes unchanged");
            return Ok(());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| RouteError::io(parent, e))?;
        }
        fs::write(&self.path, content).map_err(|e| RouteError::io(&self.path, e))?;

        info!(path = %self.path.display(), "📄 Wrote route definitions");
        Ok(())
    }
}

/// Prepends the route prefix to a template
///
/// # Examples
///
/// ```
/// use typed_routes::emit::apply_prefix;
///
/// assert_eq!(apply_prefix("", "/about"), "/about");
/// assert_eq!(apply_prefix("/api/", "/users/[id]"), "/api/users/[id]");
/// assert_eq!(apply_prefix("/api", "/"), "/api");
/// ```
pub fn apply_prefix(prefix: &str, template: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        template.to_string()
    } else if template == "/" {
        prefix.to_string()
    } else {
        format!("{prefix}{template}")
    }
}

/// Renders the catalog as definition lines
pub fn render(catalog: &RouteCatalog, prefix: &str, format: OutputFormat) -> Vec<String> {
    let routes: Vec<String> = catalog
        .iter()
        .map(|template| apply_prefix(prefix, template.as_str()))
        .collect();

    match format {
        OutputFormat::TypeScript => render_typescript(&routes, prefix),
        OutputFormat::Rust => render_rust(&routes, prefix),
    }
}

fn render_typescript(routes: &[String], prefix: &str) -> Vec<String> {
    let mut lines = vec![
        HEADER.to_string(),
        String::new(),
        format!("export const routePrefix = {prefix:?} as const;"),
        String::new(),
        "export const allRoutes = [".to_string(),
    ];
    lines.extend(routes.iter().map(|route| format!("  {route:?},")));
    lines.push("] as const;".to_string());
    lines.push(String::new());
    lines.push("export type AppRoute = (typeof allRoutes)[number];".to_string());
    lines.push(String::new());

    // Same anchored patterns the Rust validator compiles
    lines.push("const routeMatchers: readonly RegExp[] = [".to_string());
    lines.extend(
        routes
            .iter()
            .map(|route| format!("  new RegExp({:?}),", matcher_pattern(route))),
    );
    lines.push("];".to_string());
    lines.push(String::new());
    lines.push("export function isValidRoute(path: string): boolean {".to_string());
    lines.push("  return routeMatchers.some((matcher) => matcher.test(path));".to_string());
    lines.push("}".to_string());
    lines.push(String::new());
    lines.push("export function getAllRoutes(): readonly AppRoute[] {".to_string());
    lines.push("  return allRoutes;".to_string());
    lines.push("}".to_string());
    lines
}

fn render_rust(routes: &[String], prefix: &str) -> Vec<String> {
    let variants = variant_names(routes);

    let mut lines = vec![
        HEADER.to_string(),
        String::new(),
        format!("pub const ROUTE_PREFIX: &str = {prefix:?};"),
        String::new(),
        "pub const ALL_ROUTES: &[&str] = &[".to_string(),
    ];
    lines.extend(routes.iter().map(|route| format!("    {route:?},")));
    lines.push("];".to_string());
    lines.push(String::new());

    lines.push("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]".to_string());
    lines.push("pub enum AppRoute {".to_string());
    lines.extend(variants.iter().map(|variant| format!("    {variant},")));
    lines.push("}".to_string());
    lines.push(String::new());

    lines.push("impl AppRoute {".to_string());
    lines.push("    pub const ALL: &'static [AppRoute] = &[".to_string());
    lines.extend(variants.iter().map(|variant| format!("        AppRoute::{variant},")));
    lines.push("    ];".to_string());
    lines.push(String::new());
    lines.push("    pub const fn template(self) -> &'static str {".to_string());
    if variants.is_empty() {
        lines.push("        match self {}".to_string());
    } else {
        lines.push("        match self {".to_string());
        lines.extend(
            variants
                .iter()
                .zip(routes)
                .map(|(variant, route)| format!("            AppRoute::{variant} => {route:?},")),
        );
        lines.push("        }".to_string());
    }
    lines.push("    }".to_string());
    lines.push("}".to_string());
    lines
}

/// CamelCase enum variant names for routes, unique within the list
fn variant_names(routes: &[String]) -> Vec<String> {
    let mut taken: Vec<String> = Vec::with_capacity(routes.len());
    for route in routes {
        let base = variant_name(route);
        let mut name = base.clone();
        let mut n = 2;
        while taken.contains(&name) {
            name = format!("{base}{n}");
            n += 1;
        }
        taken.push(name);
    }
    taken
}

fn variant_name(route: &str) -> String {
    let name: String = route
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars
                .next()
                .map(|first| first.to_ascii_uppercase().to_string() + chars.as_str())
                .unwrap_or_default()
        })
        .collect();

    if route == "/" {
        "Root".to_string()
    } else if name.is_empty() {
        "Route".to_string()
    } else if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("R{name}")
    } else {
        name
    }
}
