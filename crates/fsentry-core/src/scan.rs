//! Directory traversal -- walk a tree and fingerprint every eligible file.

use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::CheckConfig;
use crate::error::{IntegrityError, Result};
use crate::hash::sha256_file;
use crate::snapshot::Snapshot;

/// Walk `root` recursively and produce a snapshot of every eligible file.
///
/// Ignored directory names are pruned (their contents are never visited),
/// ignored extensions and the store's own artifact files are skipped, and
/// unreadable files are logged and omitted -- a file that cannot be read
/// cannot be verified, so it simply does not appear. Visited files are
/// never modified.
///
/// Snapshot keys are absolute: the root is canonicalized before walking.
///
/// # Errors
///
/// Returns `IntegrityError::NotADirectory` if `root` does not exist or is
/// not a directory. Per-file failures never abort the scan.
pub async fn scan_tree(root: &Path, config: &CheckConfig) -> Result<Snapshot> {
    if !root.is_dir() {
        return Err(IntegrityError::NotADirectory {
            path: root.display().to_string(),
        });
    }
    let root = root
        .canonicalize()
        .map_err(|e| IntegrityError::io(&root.display().to_string(), e))?;

    let entries: Vec<_> = WalkDir::new(&root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| {
            // depth 0 is the scan root itself; only subdirectories are
            // candidates for pruning
            if e.depth() == 0 {
                return true;
            }
            let name = e.file_name().to_string_lossy();
            !(e.file_type().is_dir() && config.is_ignored_dir(&name))
        })
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(e) => {
                warn!(error = %e, "skipping unreadable entry");
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .collect();

    let mut snapshot = Snapshot::new();
    for entry in entries {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy();
        if config.is_ignored_file(&name) {
            debug!(path = %path.display(), "excluded by config");
            continue;
        }

        match sha256_file(path).await {
            Ok(digest) => snapshot.insert(path.display().to_string(), digest),
            Err(e) => {
                // Unreadable: cannot be verified, so it is omitted rather
                // than recorded. Covers permission errors and files that
                // vanished between the walk and the read.
                warn!(path = %path.display(), error = %e, "skipping unreadable file");
            }
        }
    }

    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::sha256_bytes;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, rel: &str, content: &str) {
        let path = dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn key(dir: &TempDir, rel: &str) -> String {
        dir.path()
            .canonicalize()
            .unwrap()
            .join(rel)
            .display()
            .to_string()
    }

    #[tokio::test]
    async fn empty_directory_yields_empty_snapshot() {
        let dir = TempDir::new().unwrap();
        let snap = scan_tree(dir.path(), &CheckConfig::default()).await.unwrap();
        assert!(snap.is_empty());
    }

    #[tokio::test]
    async fn single_file_is_fingerprinted() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.txt", "hello");

        let snap = scan_tree(dir.path(), &CheckConfig::default()).await.unwrap();
        assert_eq!(snap.len(), 1);
        assert_eq!(
            snap.digest(&key(&dir, "a.txt")),
            Some(sha256_bytes(b"hello").as_str())
        );
    }

    #[tokio::test]
    async fn nested_files_are_found() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.txt", "1");
        write(&dir, "sub/deep/b.txt", "2");

        let snap = scan_tree(dir.path(), &CheckConfig::default()).await.unwrap();
        assert_eq!(snap.len(), 2);
        assert!(snap.contains(&key(&dir, "sub/deep/b.txt")));
    }

    #[tokio::test]
    async fn ignored_directories_are_pruned() {
        let dir = TempDir::new().unwrap();
        write(&dir, "kept.txt", "1");
        write(&dir, ".git/config", "2");
        write(&dir, "venv/lib/site.py", "3");

        let snap = scan_tree(dir.path(), &CheckConfig::default()).await.unwrap();
        assert_eq!(snap.len(), 1);
        assert!(snap.contains(&key(&dir, "kept.txt")));
    }

    #[tokio::test]
    async fn root_named_like_an_ignored_dir_is_still_scanned() {
        let dir = TempDir::new().unwrap();
        write(&dir, ".git/config", "core settings");
        write(&dir, ".git/venv/site.py", "pruned below the root");

        let root = dir.path().join(".git");
        let snap = scan_tree(&root, &CheckConfig::default()).await.unwrap();
        assert_eq!(snap.len(), 1);

        let config_key = root
            .canonicalize()
            .unwrap()
            .join("config")
            .display()
            .to_string();
        assert!(snap.contains(&config_key));
    }

    #[tokio::test]
    async fn ignored_extensions_are_skipped() {
        let dir = TempDir::new().unwrap();
        write(&dir, "mod.pyc", "bytecode");
        write(&dir, "debug.log", "noise");
        write(&dir, "main.py", "code");

        let snap = scan_tree(dir.path(), &CheckConfig::default()).await.unwrap();
        assert_eq!(snap.len(), 1);
        assert!(snap.contains(&key(&dir, "main.py")));
    }

    #[tokio::test]
    async fn own_artifacts_are_never_fingerprinted() {
        let dir = TempDir::new().unwrap();
        write(&dir, "hashes.json", "{}");
        write(&dir, "integrity_log.txt", "[old] entries");
        write(&dir, "data.txt", "real");

        let snap = scan_tree(dir.path(), &CheckConfig::default()).await.unwrap();
        assert_eq!(snap.len(), 1);
        assert!(snap.contains(&key(&dir, "data.txt")));
    }

    #[tokio::test]
    async fn missing_root_fails_fast() {
        let err = scan_tree(Path::new("/nonexistent/fsentry-root"), &CheckConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, IntegrityError::NotADirectory { .. }));
    }

    #[tokio::test]
    async fn file_root_fails_fast() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.txt", "1");
        let err = scan_tree(&dir.path().join("a.txt"), &CheckConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, IntegrityError::NotADirectory { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn unreadable_file_is_omitted_not_fatal() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        write(&dir, "open.txt", "1");
        write(&dir, "locked.txt", "2");
        let locked = dir.path().join("locked.txt");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let snap = scan_tree(dir.path(), &CheckConfig::default()).await.unwrap();
        // root may be running these tests; permissions only bind otherwise
        if running_unprivileged() {
            assert_eq!(snap.len(), 1);
            assert!(!snap.contains(&key(&dir, "locked.txt")));
        }
        assert!(snap.contains(&key(&dir, "open.txt")));

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();
    }

    #[cfg(unix)]
    fn running_unprivileged() -> bool {
        // euid 0 bypasses mode bits entirely
        std::process::Command::new("id")
            .arg("-u")
            .output()
            .map(|o| String::from_utf8_lossy(&o.stdout).trim() != "0")
            .unwrap_or(false)
    }
}
