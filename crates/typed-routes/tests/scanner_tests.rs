//! Integration tests for directory scanning
//!
//! Builds throwaway app directories and checks the resulting catalogs:
//! - Root, static and dynamic pages
//! - Route groups (stripped and kept)
//! - Deduplication and ordering
//! - Failure modes

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use typed_routes::*;

fn create_app() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "export default function Page() { return null; }").unwrap();
}

fn sample_app() -> tempfile::TempDir {
    let app = create_app();
    let root = app.path();
    touch(root, "page.tsx");
    touch(root, "layout.tsx");
    touch(root, "about/page.tsx");
    touch(root, "user/[id]/page.tsx");
    touch(root, "user/[id]/posts/[postId]/page.jsx");
    touch(root, "(marketing)/pricing/page.ts");
    touch(root, "(marketing)/blog/[slug]/page.js");
    touch(root, "components/button.tsx");
    app
}

#[test]
fn test_scan_sample_app() {
    let app = sample_app();
    let catalog = RouteScanner::default().scan(app.path()).unwrap();

    assert_eq!(
        catalog.templates_str(),
        vec![
            "/",
            "/about",
            "/blog/[slug]",
            "/pricing",
            "/user/[id]",
            "/user/[id]/posts/[postId]",
        ]
    );
}

#[test]
fn test_scan_with_route_groups_included() {
    let app = sample_app();
    let scanner = RouteScanner::new(
        DEFAULT_PAGE_FILES.iter().map(|s| s.to_string()).collect(),
        true,
    );
    let catalog = scanner.scan(app.path()).unwrap();

    assert_eq!(
        catalog.templates_str(),
        vec![
            "/",
            "/(marketing)/blog/[slug]",
            "/(marketing)/pricing",
            "/about",
            "/user/[id]",
            "/user/[id]/posts/[postId]",
        ]
    );
}

#[test]
fn test_duplicate_pages_collapse() {
    let app = create_app();
    touch(app.path(), "about/page.tsx");
    touch(app.path(), "about/page.js");
    touch(app.path(), "(info)/about/page.tsx");

    let catalog = RouteScanner::default().scan(app.path()).unwrap();
    assert_eq!(catalog.templates_str(), vec!["/about"]);
}

#[test]
fn test_page_directly_inside_root_group_is_root() {
    let app = create_app();
    touch(app.path(), "(home)/page.tsx");

    let catalog = RouteScanner::default().scan(app.path()).unwrap();
    assert_eq!(catalog.templates_str(), vec!["/"]);
}

#[test]
fn test_scans_are_deterministic() {
    let app = sample_app();
    let scanner = RouteScanner::default();

    let first = scanner.scan(app.path()).unwrap();
    let second = scanner.scan(app.path()).unwrap();
    assert_eq!(first.templates_str(), second.templates_str());
}

#[test]
fn test_rescan_sees_new_and_removed_pages() {
    let app = sample_app();
    let scanner = RouteScanner::default();
    let before = scanner.scan(app.path()).unwrap();
    assert!(!before.contains("/settings"));

    touch(app.path(), "settings/page.tsx");
    fs::remove_dir_all(app.path().join("about")).unwrap();

    let after = scanner.scan(app.path()).unwrap();
    assert!(after.contains("/settings"));
    assert!(!after.contains("/about"));
}

#[test]
fn test_empty_app_has_empty_catalog() {
    let app = create_app();
    let catalog = RouteScanner::default().scan(app.path()).unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn test_missing_directory_fails() {
    let app = create_app();
    let missing = app.path().join("src/app");
    match RouteScanner::default().scan(&missing) {
        Err(RouteError::DirectoryNotFound { path }) => assert_eq!(path, missing),
        other => panic!("expected DirectoryNotFound, got {other:?}"),
    }
}

#[test]
fn test_repeated_parameter_name_fails_scan() {
    let app = create_app();
    touch(app.path(), "[id]/[id]/page.tsx");

    let err = RouteScanner::default().scan(app.path()).unwrap_err();
    assert!(matches!(err, RouteError::DuplicateParameterName { .. }));
}

#[test]
fn test_catch_all_segments_do_not_fail_the_scan() {
    let app = create_app();
    touch(app.path(), "about/page.tsx");
    touch(app.path(), "docs/[[...slug]]/page.tsx");
    touch(app.path(), "shop/[...path]/page.tsx");

    let catalog = RouteScanner::default().scan(app.path()).unwrap();
    assert_eq!(
        catalog.templates_str(),
        vec!["/about", "/docs/[[...slug]]", "/shop/[...path]"]
    );
    assert!(catalog.is_valid("/shop/anything"));
    assert_eq!(
        catalog.get("/docs/[[...slug]]").map(|t| t.params().to_vec()),
        Some(vec!["[...slug".to_string()])
    );
}

#[cfg(unix)]
#[test]
fn test_unreadable_subdirectory_is_skipped() {
    use std::os::unix::fs::PermissionsExt;

    let app = create_app();
    touch(app.path(), "about/page.tsx");
    touch(app.path(), "secret/x/page.tsx");

    let locked = app.path().join("secret");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users read through the permission bits
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let report = RouteScanner::default().scan_with_report(app.path());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    let report = report.unwrap();

    assert_eq!(report.catalog.templates_str(), vec!["/about"]);
    assert_eq!(report.skipped, vec![locked]);
}

#[test]
fn test_scanned_catalog_validates_paths() {
    let app = sample_app();
    let catalog = RouteScanner::default().scan(app.path()).unwrap();

    assert!(catalog.is_valid("/"));
    assert!(catalog.is_valid("/pricing"));
    assert!(catalog.is_valid("/blog/hello-world"));
    assert!(catalog.is_valid("/user/42/posts/7"));

    assert!(!catalog.is_valid("/(marketing)/pricing"));
    assert!(!catalog.is_valid("/components"));
    assert!(!catalog.is_valid("/user/42/posts"));
}

#[test]
fn test_generator_writes_typescript_definitions() {
    let app = sample_app();
    let out = create_app();
    let output = out.path().join("typed-routes/generated/routes.ts");

    let mut config = Config::default();
    config.routing.pages_dir = app.path().to_path_buf();
    config.output.path = output.clone();
    config.output.route_prefix = "/app".to_string();

    let generator = Generator::from_config(&config);
    let catalog = generator.rescan().unwrap();
    assert_eq!(catalog.len(), 6);

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("// This file is generated by typed-routes."));
    assert!(written.contains("  \"/app\",\n"));
    assert!(written.contains("  \"/app/user/[id]/posts/[postId]\",\n"));
    assert!(written.contains("export type AppRoute = (typeof allRoutes)[number];"));
}

#[test]
fn test_generator_writes_rust_definitions() {
    let app = sample_app();
    let out = create_app();
    let output = out.path().join("routes.rs");

    let mut config = Config::default();
    config.routing.pages_dir = app.path().to_path_buf();
    config.output.path = output.clone();

    Generator::from_config(&config).rescan().unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("pub enum AppRoute {"));
    assert!(written.contains("            AppRoute::UserIdPostsPostId => \"/user/[id]/posts/[postId]\","));
}
