use crate::{load, TaskbarAppearance};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Watches a settings file and sends the freshly loaded appearance on every
/// change.
///
/// The parent directory is watched rather than the file itself, so editors
/// that save by replacing the file are picked up too. Removing the file does
/// not trigger a reload; the last appearance stays in effect.
///
/// # Example
/// ```no_run
/// # async fn run() {
/// let (_, mut rx) = tb_config::ConfigWatcher::spawn("/home/user/.config/tb/settings.json");
/// while let Some(appearance) = rx.recv().await {
///     println!("accent is now {}", appearance.accent);
/// }
/// # }
/// ```
#[derive(Debug)]
pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// Spawn a filesystem watcher for `path`.
    /// Returns the watcher handle and a receiver that yields the reloaded
    /// appearance after each detected change.
    pub fn spawn(path: impl AsRef<Path>) -> (Self, mpsc::Receiver<TaskbarAppearance>) {
        let (tx, rx) = mpsc::channel(1);
        let path = path.as_ref().to_path_buf();
        let watcher = Self { path: path.clone() };

        tokio::spawn(watch_loop(path, tx));

        (watcher, rx)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Whether `event` touches `path` in a way that warrants a reload.
fn is_relevant(event: &Event, path: &Path) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
        && event.paths.iter().any(|p| p.file_name() == path.file_name())
}

async fn watch_loop(path: PathBuf, tx: mpsc::Sender<TaskbarAppearance>) {
    let (sync_tx, mut sync_rx) = mpsc::channel::<notify::Result<Event>>(16);

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = sync_tx.blocking_send(res);
        },
        Config::default().with_poll_interval(Duration::from_secs(2)),
    ) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create filesystem watcher: {e}");
            return;
        }
    };

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };

    if let Err(e) = watcher.watch(&dir, RecursiveMode::NonRecursive) {
        error!("Failed to watch '{}': {e}", dir.display());
        return;
    }

    info!("Watching settings file: {}", path.display());

    while let Some(event) = sync_rx.recv().await {
        match event {
            Ok(e) if is_relevant(&e, &path) => {
                // Editors often emit several events per save.
                tokio::time::sleep(Duration::from_millis(100)).await;
                while sync_rx.try_recv().is_ok() {}

                debug!("Settings changed; reloading");
                let reload_path = path.clone();
                let appearance = match tokio::task::spawn_blocking(move || load(reload_path)).await {
                    Ok(appearance) => appearance,
                    Err(e) => {
                        error!("Settings reload task failed: {e}");
                        continue;
                    }
                };

                if tx.send(appearance).await.is_err() {
                    break; // receiver dropped
                }
            }
            Ok(_) => {}
            Err(e) => warn!("Watcher error: {e}"),
        }
    }
}
