//! Inclusion rules for the project tree walk.

use std::path::{Path, PathBuf};

/// Pure predicate deciding whether a project-relative path belongs in the
/// bundle's resource tree.
///
/// Evaluated once per traversed entry. Exclusion rules, in order (first
/// match wins):
/// 1. The path is the output directory or lies under it.
/// 2. Any path segment begins with `.` (hidden files and directories).
/// 3. The segment `vendor` occurs more than once. Traversal follows
///    symlinks, so a vendored package reached through a symlink can expose
///    its own `vendor` subtree; without this rule that tree would be copied
///    twice (or forever, on a cycle).
///
/// Because the traversal prunes on directories, an excluded directory's
/// entire subtree is never visited.
#[derive(Debug, Clone)]
pub struct TreeFilter {
    /// Output directory relative to the project root, when it lies inside
    /// the project. `None` means rule 1 can never match.
    output_rel: Option<PathBuf>,
}

impl TreeFilter {
    /// Creates a filter for one bundling run.
    ///
    /// `project_root` and `output_dir` are the same absolute paths handed to
    /// the copier; the output directory only participates in filtering when
    /// it is inside the project root.
    pub fn new(project_root: &Path, output_dir: &Path) -> Self {
        let output_rel = output_dir
            .strip_prefix(project_root)
            .ok()
            .map(Path::to_path_buf);
        Self { output_rel }
    }

    /// Returns true when the entry at `rel` (relative to the project root)
    /// is eligible for inclusion.
    pub fn includes(&self, rel: &Path) -> bool {
        if let Some(output_rel) = &self.output_rel {
            // starts_with also matches the output directory itself
            if rel.starts_with(output_rel) {
                return false;
            }
        }

        let mut vendor_segments = 0usize;
        for segment in rel.components() {
            let segment = segment.as_os_str();
            if segment.to_string_lossy().starts_with('.') {
                return false;
            }
            if segment == "vendor" {
                vendor_segments += 1;
            }
        }

        vendor_segments <= 1
    }
}
