// File: src/error.rs
// Purpose: Error taxonomy for scanning, template validation and URL building

use std::path::PathBuf;

/// Errors produced by the route core
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// Scan root is missing or is not a directory. Fatal for one scan.
    #[error("directory does not exist: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    /// A subdirectory could not be read. Logged by the scanner, never returned from a scan.
    #[error("unable to read directory: {}", path.display())]
    UnreadableSubdirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A parametric template was built without a value for one of its parameters
    #[error("missing value for parameter `{parameter}` in route `{template}`")]
    MissingParameter { parameter: String, template: String },

    /// The same bracketed name appears twice in one template
    #[error("parameter `{parameter}` appears more than once in route `{template}`")]
    DuplicateParameterName { parameter: String, template: String },

    /// Template breaks the route-template alphabet
    #[error("invalid route template `{template}`: {reason}")]
    InvalidTemplate { template: String, reason: String },

    /// Reading or writing a generated file failed
    #[error("i/o error at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to compile route matcher")]
    Matcher(#[from] regex::Error),
}

impl RouteError {
    pub(crate) fn invalid(template: &str, reason: impl Into<String>) -> Self {
        RouteError::InvalidTemplate {
            template: template.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RouteError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, RouteError>;
