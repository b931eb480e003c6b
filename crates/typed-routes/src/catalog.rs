// File: src/catalog.rs
// Purpose: The closed set of known route templates and runtime path validation

use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

use regex::Regex;

use crate::error::Result;
use crate::template::{to_matcher, RouteTemplate};

/// Deduplicated, sorted set of route templates from one scan
///
/// Immutable once built. Each template carries its compiled matcher, so
/// validation is a linear pass over the catalog.
///
/// # Examples
///
/// ```
/// use typed_routes::RouteCatalog;
///
/// let catalog = RouteCatalog::from_templates(["/user/[id]", "/about", "/about"]).unwrap();
/// assert_eq!(catalog.templates_str(), vec!["/about", "/user/[id]"]);
///
/// assert!(catalog.is_valid("/user/123"));
/// assert!(!catalog.is_valid("/user/123/extra"));
/// assert!(!catalog.is_valid("/user"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteCatalog {
    entries: Vec<CatalogEntry>,
}

#[derive(Debug, Clone)]
struct CatalogEntry {
    template: RouteTemplate,
    matcher: Regex,
}

impl RouteCatalog {
    /// Builds a catalog from raw template strings
    ///
    /// Deduplicates by exact text, sorts ascending, and rejects invalid
    /// templates, including ones that repeat a parameter name.
    pub fn from_templates<I, S>(templates: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique: BTreeSet<String> = templates
            .into_iter()
            .map(|t| t.as_ref().to_string())
            .collect();

        let entries = unique
            .into_iter()
            .map(|raw| {
                let template = RouteTemplate::parse(&raw)?;
                let matcher = to_matcher(template.as_str())?;
                Ok(CatalogEntry { template, matcher })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Templates in ascending order
    pub fn iter(&self) -> impl Iterator<Item = &RouteTemplate> + '_ {
        self.entries.iter().map(|entry| &entry.template)
    }

    pub fn templates(&self) -> Vec<&RouteTemplate> {
        self.iter().collect()
    }

    /// Template text in ascending order, as persisted by the emitter
    pub fn templates_str(&self) -> Vec<&str> {
        self.iter().map(RouteTemplate::as_str).collect()
    }

    /// Looks up a template by its exact text
    pub fn get(&self, template: &str) -> Option<&RouteTemplate> {
        self.entries
            .binary_search_by(|entry| entry.template.as_str().cmp(template))
            .ok()
            .map(|idx| &self.entries[idx].template)
    }

    pub fn contains(&self, template: &str) -> bool {
        self.get(template).is_some()
    }

    /// Checks if a runtime path matches any known template (full-string match)
    pub fn is_valid(&self, path: &str) -> bool {
        self.find(path).is_some()
    }

    /// First template, in catalog order, whose matcher accepts `path`
    pub fn find(&self, path: &str) -> Option<&RouteTemplate> {
        self.entries
            .iter()
            .find(|entry| entry.matcher.is_match(path))
            .map(|entry| &entry.template)
    }

    pub fn static_routes(&self) -> impl Iterator<Item = &RouteTemplate> + '_ {
        self.iter().filter(|t| t.is_static())
    }

    pub fn parametric_routes(&self) -> impl Iterator<Item = &RouteTemplate> + '_ {
        self.iter().filter(|t| t.is_parametric())
    }
}

/// Checks a path against a catalog
pub fn is_valid(catalog: &RouteCatalog, candidate_path: &str) -> bool {
    catalog.is_valid(candidate_path)
}

/// Shared holder of the current catalog snapshot
///
/// Readers get an `Arc` to a complete catalog; a rescan swaps in a whole new
/// one. There is no partial update.
#[derive(Debug, Default)]
pub struct CatalogStore {
    current: RwLock<Arc<RouteCatalog>>,
}

impl CatalogStore {
    pub fn new(catalog: RouteCatalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Arc<RouteCatalog> {
        match self.current.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Replaces the snapshot, returning the previous one
    pub fn replace(&self, catalog: impl Into<Arc<RouteCatalog>>) -> Arc<RouteCatalog> {
        let next = catalog.into();
        let mut guard = match self.current.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        std::mem::replace(&mut *guard, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RouteError;

    fn catalog(templates: &[&str]) -> RouteCatalog {
        RouteCatalog::from_templates(templates.iter().copied()).unwrap()
    }

    #[test]
    fn test_dedup_and_sort() {
        let catalog = catalog(&["/b", "/a/[id]", "/", "/b", "/a"]);
        assert_eq!(catalog.templates_str(), vec!["/", "/a", "/a/[id]", "/b"]);
    }

    #[test]
    fn test_static_and_parametric_validation() {
        let catalog = catalog(&["/", "/about", "/user/[id]", "/user/[id]/posts/[postId]"]);

        assert!(catalog.is_valid("/"));
        assert!(catalog.is_valid("/about"));
        assert!(catalog.is_valid("/user/123"));
        assert!(catalog.is_valid("/user/123/posts/abc"));

        assert!(!catalog.is_valid(""));
        assert!(!catalog.is_valid("/about/"));
        assert!(!catalog.is_valid("/user/"));
        assert!(!catalog.is_valid("/user"));
        assert!(!catalog.is_valid("/user/123/extra"));
        assert!(!catalog.is_valid("/user/123/posts"));
    }

    #[test]
    fn test_find_reports_matching_template() {
        let catalog = catalog(&["/user/[id]", "/user/settings"]);
        assert_eq!(
            catalog.find("/user/settings").map(RouteTemplate::as_str),
            Some("/user/[id]")
        );
        assert_eq!(catalog.find("/user/42").map(RouteTemplate::as_str), Some("/user/[id]"));
        assert!(catalog.find("/users/42").is_none());
    }

    #[test]
    fn test_literal_dots_are_not_wildcards() {
        let catalog = catalog(&["/sitemap.xml"]);
        assert!(catalog.is_valid("/sitemap.xml"));
        assert!(!catalog.is_valid("/sitemapXxml"));
    }

    #[test]
    fn test_duplicate_parameter_rejected() {
        let err = RouteCatalog::from_templates(["/[id]/[id]"]).unwrap_err();
        assert!(matches!(err, RouteError::DuplicateParameterName { .. }));
    }

    #[test]
    fn test_lookup() {
        let catalog = catalog(&["/", "/about", "/user/[id]"]);
        assert!(catalog.contains("/about"));
        assert!(!catalog.contains("/user/1"));
        assert_eq!(catalog.static_routes().count(), 2);
        assert_eq!(catalog.parametric_routes().count(), 1);
    }

    #[test]
    fn test_store_swaps_whole_snapshot() {
        let store = CatalogStore::new(catalog(&["/old"]));
        let before = store.snapshot();

        let previous = store.replace(catalog(&["/new", "/newer"]));

        assert_eq!(previous.templates_str(), vec!["/old"]);
        assert_eq!(before.templates_str(), vec!["/old"]);
        assert_eq!(store.snapshot().templates_str(), vec!["/new", "/newer"]);
    }
}
