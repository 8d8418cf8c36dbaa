//! Filtered copy of the project tree into the bundle's resource area.

use crate::bundler::filter::TreeFilter;
use crate::error::{BundlerError, Result};
use std::path::Path;
use walkdir::WalkDir;

/// Copies the eligible part of `source_root` into `destination_root`.
///
/// The walk is pre-order (a directory is created at the destination before
/// its children are copied) and follows symlinks so that vendored packages
/// reached through links are discovered; the filter's duplicate-`vendor`
/// rule keeps that from expanding twice. Excluded directories are pruned,
/// not just skipped, so their subtrees are never visited.
///
/// Regular files, and symlinks resolving to files, are copied byte-for-byte
/// at the same relative path. One progress line is logged per created
/// directory and per copied file.
pub async fn copy_tree(
    source_root: &Path,
    destination_root: &Path,
    filter: &TreeFilter,
) -> Result<()> {
    let source_root = source_root.to_path_buf();
    let destination_root = destination_root.to_path_buf();
    let task_path = destination_root.clone();
    let filter = filter.clone();

    tokio::task::spawn_blocking(move || -> Result<()> {
        let walker = WalkDir::new(&source_root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|entry| {
                // the root itself always passes; it maps onto destination_root
                entry.depth() == 0
                    || entry
                        .path()
                        .strip_prefix(&source_root)
                        .map(|rel| filter.includes(rel))
                        .unwrap_or(false)
            });

        for entry in walker {
            let entry = entry.map_err(|err| walk_error(&source_root, err))?;
            if entry.depth() == 0 {
                continue;
            }

            let rel = entry
                .path()
                .strip_prefix(&source_root)
                .map_err(|_| BundlerError::Io {
                    action: "resolving relative path".into(),
                    path: entry.path().to_path_buf(),
                    source: std::io::Error::other("entry escaped the source root"),
                })?;
            let dest = destination_root.join(rel);

            // follow_links is on, so the file type is the link target's
            if entry.file_type().is_dir() {
                std::fs::create_dir_all(&dest).map_err(|source| BundlerError::Io {
                    action: "creating resource directory".into(),
                    path: dest.clone(),
                    source,
                })?;
                log::info!("created directory {}", rel.display());
            } else if entry.file_type().is_file() {
                std::fs::copy(entry.path(), &dest).map_err(|source| BundlerError::Io {
                    action: "copying resource file".into(),
                    path: dest.clone(),
                    source,
                })?;
                log::info!("copied file {}", rel.display());
            } else {
                log::debug!("skipping special entry {}", rel.display());
            }
        }

        Ok(())
    })
    .await
    .map_err(|e| BundlerError::Io {
        action: "running copy task".into(),
        path: task_path,
        source: std::io::Error::other(e),
    })?
}

fn walk_error(source_root: &Path, err: walkdir::Error) -> BundlerError {
    let path = err
        .path()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| source_root.to_path_buf());
    BundlerError::Io {
        action: "walking project tree".into(),
        path,
        source: err.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn project(root: &Path) {
        std::fs::create_dir_all(root.join("src/pkg")).expect("mkdir");
        std::fs::create_dir_all(root.join(".git/objects")).expect("mkdir");
        std::fs::create_dir_all(root.join("dist/js")).expect("mkdir");
        std::fs::create_dir_all(root.join("vendor/lib/vendor")).expect("mkdir");
        std::fs::write(root.join("main.go"), b"package main\n").expect("write");
        std::fs::write(root.join("src/pkg/util.go"), b"package pkg\n").expect("write");
        std::fs::write(root.join(".git/config"), b"[core]\n").expect("write");
        std::fs::write(root.join(".git/objects/aa"), b"blob").expect("write");
        std::fs::write(root.join("dist/js/app.js"), b"js").expect("write");
        std::fs::write(root.join("vendor/lib/other.txt"), b"keep").expect("write");
        std::fs::write(root.join("vendor/lib/vendor/sub.txt"), b"drop").expect("write");
    }

    async fn run_copy(root: &Path) -> PathBuf {
        let dest = root.join("dist/App.app/Contents/Resources");
        std::fs::create_dir_all(&dest).expect("mkdir dest");
        let filter = TreeFilter::new(root, &root.join("dist"));
        copy_tree(root, &dest, &filter).await.expect("copy");
        dest
    }

    #[tokio::test]
    async fn eligible_files_round_trip_byte_for_byte() {
        let dir = tempfile::tempdir().expect("tempdir");
        project(dir.path());
        let dest = run_copy(dir.path()).await;

        assert_eq!(std::fs::read(dest.join("main.go")).expect("read"), b"package main\n");
        assert_eq!(
            std::fs::read(dest.join("src/pkg/util.go")).expect("read"),
            b"package pkg\n"
        );
        assert_eq!(
            std::fs::read(dest.join("vendor/lib/other.txt")).expect("read"),
            b"keep"
        );
    }

    #[tokio::test]
    async fn hidden_output_and_nested_vendor_trees_are_absent() {
        let dir = tempfile::tempdir().expect("tempdir");
        project(dir.path());
        let dest = run_copy(dir.path()).await;

        assert!(!dest.join(".git").exists());
        assert!(!dest.join(".git/config").exists());
        // destination lives under dist; the source dist subtree is not re-copied
        assert!(!dest.join("dist/js").exists());
        assert!(!dest.join("vendor/lib/vendor").exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn symlinked_files_are_copied_as_regular_files() {
        let dir = tempfile::tempdir().expect("tempdir");
        project(dir.path());
        std::os::unix::fs::symlink(dir.path().join("main.go"), dir.path().join("entry.go"))
            .expect("symlink");
        let dest = run_copy(dir.path()).await;

        let meta = std::fs::symlink_metadata(dest.join("entry.go")).expect("meta");
        assert!(meta.is_file());
        assert_eq!(std::fs::read(dest.join("entry.go")).expect("read"), b"package main\n");
    }
}
