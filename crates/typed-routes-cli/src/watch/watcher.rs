use anyhow::{Context, Result};
use colored::Colorize;
use notify::event::ModifyKind;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{error, warn};
use typed_routes::Generator;

/// Long-lived watch task over the pages directory
///
/// Owns one file-system subscription. Adds and removes of files or
/// directories trigger a full rescan through [`Generator::rescan`].
pub struct RouteWatcher {
    generator: Arc<Generator>,
    ignored: Vec<String>,
}

/// Handle to a running watcher; shutdown is explicit
pub struct WatchHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl RouteWatcher {
    pub fn new(generator: Arc<Generator>, ignored: Vec<String>) -> Self {
        Self { generator, ignored }
    }

    /// Starts watching. Must be called inside a tokio runtime.
    ///
    /// A missing pages directory is not an error: its nearest existing
    /// ancestor is watched instead, so creating it later triggers a rescan.
    pub fn spawn(self) -> Result<WatchHandle> {
        let pages_dir = self.generator.pages_dir().to_path_buf();
        let watch_root = nearest_existing(&pages_dir)
            .with_context(|| format!("No existing directory above {}", pages_dir.display()))?;
        if watch_root != pages_dir {
            warn!(
                pages_dir = %pages_dir.display(),
                watching = %watch_root.display(),
                "Pages directory does not exist yet"
            );
        }
        let ignored = self.ignored;
        let (tx, mut rx) = mpsc::channel::<PathBuf>(100);
        let (shutdown, mut shutdown_rx) = watch::channel(false);

        let callback_root = pages_dir.clone();
        let mut watcher = notify::recommended_watcher(move |res: Result<Event, notify::Error>| {
            match res {
                Ok(event) => {
                    if !is_add_or_remove(&event.kind) {
                        return;
                    }
                    for path in event.paths {
                        if !is_relevant(&path, &callback_root, &ignored) {
                            continue;
                        }
                        // Receiver gone means the watcher is shutting down
                        let _ = tx.blocking_send(path);
                    }
                }
                Err(e) => warn!("Watch error: {e}"),
            }
        })?;

        watcher.watch(&watch_root, RecursiveMode::Recursive)?;

        let generator = self.generator;
        let task = tokio::spawn(async move {
            let _watcher = watcher; // Keep watcher alive

            loop {
                tokio::select! {
                    _ = shutdown_rx.changed() => break,
                    received = rx.recv() => {
                        let Some(path) = received else { break };

                        // Fold events that are already queued into this rescan
                        let mut pending = 0usize;
                        while rx.try_recv().is_ok() {
                            pending += 1;
                        }

                        println!("{} Detected change: {}", "🔄".yellow(), display_relative(&path, generator.pages_dir()));
                        if pending > 0 {
                            println!("   (+{pending} more)");
                        }
                        println!("   Regenerating routes...");

                        let generator = Arc::clone(&generator);
                        match tokio::task::spawn_blocking(move || generator.rescan()).await {
                            Ok(Ok(catalog)) => {
                                println!("{} Generated {} routes", "✓".green(), catalog.len());
                            }
                            // Logged by the generator; keep watching
                            Ok(Err(_)) => {}
                            Err(e) => error!("Rescan task failed: {e}"),
                        }
                    }
                }
            }
        });

        Ok(WatchHandle { shutdown, task })
    }
}

impl WatchHandle {
    /// Stops the watch loop and releases the file-system subscription
    pub async fn shutdown(self) -> Result<()> {
        // Err only if the loop already ended
        let _ = self.shutdown.send(true);
        self.task.await?;
        Ok(())
    }
}

/// File or directory added or removed; renames count as both
fn is_add_or_remove(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Create(_) | EventKind::Remove(_) | EventKind::Modify(ModifyKind::Name(_))
    )
}

/// The directory itself when it exists, otherwise its closest existing ancestor
fn nearest_existing(dir: &Path) -> Option<PathBuf> {
    dir.ancestors()
        .find(|candidate| candidate.is_dir())
        .map(Path::to_path_buf)
}

/// Paths below the pages directory that are not ignored, plus the pages
/// directory and its ancestors, whose creation can bring pages into existence
fn is_relevant(path: &Path, root: &Path, ignored: &[String]) -> bool {
    if root.starts_with(path) {
        return true;
    }
    path.starts_with(root) && !is_ignored(path, root, ignored)
}

/// Hidden entries and ignored directory names below the pages directory
fn is_ignored(path: &Path, root: &Path, ignored: &[String]) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative.components().any(|component| match component {
        Component::Normal(name) => name.to_str().is_some_and(|name| {
            name.starts_with('.') || ignored.iter().any(|skip| skip == name)
        }),
        _ => false,
    })
}

fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, DataChange, RemoveKind, RenameMode};
    use typed_routes::Config;

    fn ignored() -> Vec<String> {
        vec!["node_modules".to_string(), ".next".to_string()]
    }

    #[test]
    fn test_only_adds_and_removes_trigger() {
        assert!(is_add_or_remove(&EventKind::Create(CreateKind::File)));
        assert!(is_add_or_remove(&EventKind::Create(CreateKind::Folder)));
        assert!(is_add_or_remove(&EventKind::Remove(RemoveKind::File)));
        assert!(is_add_or_remove(&EventKind::Modify(ModifyKind::Name(RenameMode::Both))));
        assert!(!is_add_or_remove(&EventKind::Modify(ModifyKind::Data(DataChange::Content))));
        assert!(!is_add_or_remove(&EventKind::Any));
    }

    #[test]
    fn test_ignores_hidden_and_listed_directories() {
        let root = Path::new("/project/src/app");
        assert!(is_ignored(Path::new("/project/src/app/.cache/page.tsx"), root, &ignored()));
        assert!(is_ignored(Path::new("/project/src/app/node_modules/x/page.tsx"), root, &ignored()));
        assert!(is_ignored(Path::new("/project/src/app/about/.page.tsx.swp"), root, &ignored()));
        assert!(!is_ignored(Path::new("/project/src/app/about/page.tsx"), root, &ignored()));
        assert!(!is_ignored(Path::new("/project/src/app/(group)/page.tsx"), root, &ignored()));
    }

    #[test]
    fn test_events_outside_the_pages_directory_are_dropped() {
        let root = Path::new("/project/src/app");
        assert!(is_relevant(Path::new("/project/src/app"), root, &ignored()));
        assert!(is_relevant(Path::new("/project/src"), root, &ignored()));
        assert!(is_relevant(Path::new("/project/src/app/about/page.tsx"), root, &ignored()));
        assert!(!is_relevant(Path::new("/project/src/lib.ts"), root, &ignored()));
        assert!(!is_relevant(Path::new("/project/src/application/page.tsx"), root, &ignored()));
    }

    #[test]
    fn test_missing_pages_directory_falls_back_to_ancestor() {
        let temp = tempfile::tempdir().unwrap();
        let missing = temp.path().join("src/app");
        assert_eq!(nearest_existing(&missing), Some(temp.path().to_path_buf()));
        assert_eq!(nearest_existing(temp.path()), Some(temp.path().to_path_buf()));
    }

    #[tokio::test]
    async fn test_watch_starts_before_pages_directory_exists() {
        let temp = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.routing.pages_dir = temp.path().join("src/app");
        config.output.path = temp.path().join("routes.ts");

        let generator = Arc::new(Generator::from_config(&config));
        assert!(generator.rescan().is_err());

        let handle = RouteWatcher::new(generator, config.watch.ignored).spawn().unwrap();
        handle.shutdown().await.unwrap();
    }

    #[test]
    fn test_hidden_ancestors_of_root_do_not_count() {
        let root = Path::new("/home/me/.projects/app");
        assert!(!is_ignored(Path::new("/home/me/.projects/app/about/page.tsx"), root, &ignored()));
    }
}
