//! # typed-routes
//!
//! Route discovery for file-system routed apps (`app/user/[id]/page.tsx`),
//! producing a closed catalog of route templates and building concrete URLs
//! from them.
//!
//! - **Template algebra**: extract `[name]` parameters, classify static vs
//!   parametric, build full-string matchers
//! - **Mapper**: page file path → route template, with `(group)` stripping
//! - **Scanner**: directory tree → sorted, deduplicated [`RouteCatalog`]
//! - **URL builder**: template + parameters + search query → URL
//! - **Validator**: does a runtime path match a known template?
//!
//! ## Example
//!
//! ```
//! use typed_routes::{RouteCatalog, RouteParams, SearchParams};
//!
//! let catalog = RouteCatalog::from_templates(["/", "/about", "/user/[id]"]).unwrap();
//!
//! let user = catalog.get("/user/[id]").unwrap();
//! let url = user
//!     .build(
//!         Some(&RouteParams::new().with("id", "123")),
//!         Some(&SearchParams::new().with("tab", "posts")),
//!     )
//!     .unwrap();
//! assert_eq!(url, "/user/123?tab=posts");
//!
//! assert!(catalog.is_valid("/user/123"));
//! assert!(!catalog.is_valid("/user/"));
//! ```

pub mod catalog;
pub mod config;
pub mod emit;
pub mod error;
pub mod generator;
pub mod path;
pub mod scanner;
pub mod template;
pub mod url;

pub use catalog::{is_valid, CatalogStore, RouteCatalog};
pub use config::Config;
pub use emit::{CatalogSink, FileSink, OutputFormat};
pub use error::{Result, RouteError};
pub use generator::{Generator, GeneratorOptions};
pub use path::{is_route_group, map_path_to_template};
pub use scanner::{is_page_file, RouteScanner, ScanReport, DEFAULT_PAGE_FILES};
pub use template::{extract_parameters, is_parametric, to_matcher, RouteKind, RouteTemplate};
pub use url::{build, RouteParams, SearchParams, SearchValue};
