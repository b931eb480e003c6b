//! File-path to route-template mapping
//!
//! Converts `app/(marketing)/user/[id]/page.tsx` relative to `app` into
//! `/user/[id]`. Bracket segments pass through untouched; the output alphabet
//! is the route-template alphabet.
use std::path::Path;

/// Checks if a directory name is a route group, e.g. `(marketing)`
///
/// The whole segment must be one pair of parentheses around a non-empty name.
/// Partial or nested parentheses are literal segments.
///
/// # Examples
///
/// ```
/// use typed_routes::path::is_route_group;
///
/// assert!(is_route_group("(marketing)"));
/// assert!(!is_route_group("()"));
/// assert!(!is_route_group("(marketing"));
/// assert!(!is_route_group("(a)(b)"));
/// assert!(!is_route_group("about"));
/// ```
pub fn is_route_group(segment: &str) -> bool {
    segment
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .is_some_and(|inner| !inner.is_empty() && !inner.contains(['(', ')']))
}

/// Joins route segments into a template, mapping no segments to `/`
///
/// # Examples
///
/// ```
/// use typed_routes::path::join_segments;
///
/// assert_eq!(join_segments(Vec::<&str>::new()), "/");
/// assert_eq!(join_segments(["user", "[id]"]), "/user/[id]");
/// ```
pub fn join_segments<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
    let template = segments.into_iter().fold(String::new(), |mut acc, segment| {
        acc.push('/');
        acc.push_str(segment);
        acc
    });

    if template.is_empty() {
        "/".to_string()
    } else {
        template
    }
}

/// Maps a page file to its route template
///
/// 1. Takes the path relative to `root_dir` (or the whole path when it is not
///    under `root_dir`) and normalizes separators to `/`
/// 2. Drops the final component, the page file itself
/// 3. Drops empty and `.` segments, so the result has exactly one leading `/`
///    and no doubled or trailing slashes
/// 4. Drops route-group segments unless `include_groups` is set
///
/// A page directly inside a root-level group maps to `/` once the group is
/// stripped.
///
/// # Examples
///
/// ```
/// use typed_routes::map_path_to_template;
///
/// assert_eq!(map_path_to_template("/app/user/[id]/page.tsx", "/app", false), "/user/[id]");
/// assert_eq!(map_path_to_template("/app/(marketing)/about/page.tsx", "/app", false), "/about");
/// assert_eq!(map_path_to_template("/app/(marketing)/about/page.tsx", "/app", true), "/(marketing)/about");
/// assert_eq!(map_path_to_template("/app/page.tsx", "/app", false), "/");
/// ```
pub fn map_path_to_template(
    file_path: impl AsRef<Path>,
    root_dir: impl AsRef<Path>,
    include_groups: bool,
) -> String {
    let file_path = file_path.as_ref();
    let relative = file_path.strip_prefix(root_dir.as_ref()).unwrap_or(file_path);
    let relative = relative.to_string_lossy().replace('\\', "/");

    let mut segments: Vec<&str> = relative
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .collect();

    // Page file marker
    segments.pop();

    join_segments(
        segments
            .into_iter()
            .filter(|segment| include_groups || !is_route_group(segment)),
    )
}
