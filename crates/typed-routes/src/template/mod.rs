//! Route templates: validated, classified `/a/[b]` strings
//!
//! A template is parsed once into a [`RouteTemplate`], which records whether it
//! is static or parametric. The URL builder and the catalog work from that
//! classification instead of rescanning the string.
use std::fmt;

use crate::error::{Result, RouteError};

pub mod token;

pub use token::{extract_parameters, is_parametric, to_matcher, tokenize, Token};

/// Static vs parametric classification of a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteKind {
    /// No parameters; builds to itself
    Static,
    /// Parameter names in order of first appearance
    Parametric(Vec<String>),
}

/// A validated route template
///
/// # Examples
///
/// ```
/// use typed_routes::{RouteKind, RouteTemplate};
///
/// let route = RouteTemplate::parse("/user/[id]/posts/[postId]").unwrap();
/// assert_eq!(route.params(), ["id", "postId"]);
/// assert!(matches!(route.kind(), RouteKind::Parametric(_)));
///
/// assert!(RouteTemplate::parse("/[id]/[id]").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RouteTemplate {
    raw: String,
    kind: RouteKind,
}

impl RouteTemplate {
    /// Validates and classifies a template
    ///
    /// A parameter runs from a `[` to the next `]`, so `[[...slug]]` yields the
    /// name `[...slug` followed by a literal `]`. Rejects templates that do not
    /// start with `/`, have a `[` with no closing `]`, an empty `[]`, a name
    /// spanning a `/`, or a repeated parameter name.
    pub fn parse(template: &str) -> Result<Self> {
        if !template.starts_with('/') {
            return Err(RouteError::invalid(template, "must start with `/`"));
        }

        let mut params: Vec<String> = Vec::new();
        for token in tokenize(template) {
            match token {
                Token::Literal(text) => {
                    if text.contains('[') {
                        return Err(RouteError::invalid(template, "unclosed or empty bracket"));
                    }
                }
                Token::Param(name) => {
                    if name.contains('/') {
                        return Err(RouteError::invalid(template, "parameter spans a segment"));
                    }
                    if params.iter().any(|seen| seen == name) {
                        return Err(RouteError::DuplicateParameterName {
                            parameter: name.to_string(),
                            template: template.to_string(),
                        });
                    }
                    params.push(name.to_string());
                }
            }
        }

        let kind = if params.is_empty() {
            RouteKind::Static
        } else {
            RouteKind::Parametric(params)
        };

        Ok(Self {
            raw: template.to_string(),
            kind,
        })
    }

    /// The root template `/`
    pub fn root() -> Self {
        Self {
            raw: "/".to_string(),
            kind: RouteKind::Static,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> &RouteKind {
        &self.kind
    }

    /// Parameter names; empty for static templates
    pub fn params(&self) -> &[String] {
        match self.kind() {
            RouteKind::Static => &[],
            RouteKind::Parametric(params) => params,
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self.kind(), RouteKind::Static)
    }

    pub fn is_parametric(&self) -> bool {
        !self.is_static()
    }
}

// Identity, ordering and hashing follow the template text; the kind is derived from it.
impl PartialEq for RouteTemplate {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for RouteTemplate {}

impl PartialOrd for RouteTemplate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RouteTemplate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl std::hash::Hash for RouteTemplate {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

impl fmt::Display for RouteTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for RouteTemplate {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl std::str::FromStr for RouteTemplate {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
