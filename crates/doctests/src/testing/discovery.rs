//! Doctest discovery - find eligible files under a root directory

use crate::error::{DoctestError, DoctestResult};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File name suffix that marks a file as carrying doctests
pub const DOCTEST_SUFFIX: &str = ".py";

/// Check whether a path names a file the runner should test
pub fn is_eligible(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(DOCTEST_SUFFIX))
        .unwrap_or(false)
}

/// Check whether a command-line argument can be used as a root
pub fn is_root(path: &Path) -> bool {
    path.is_dir()
}

/// Iterate every eligible file under `root`, at any depth.
///
/// Symlinks are followed. A dangling symlink below the root is treated as a
/// plain file: yielded when its name is eligible, skipped otherwise.
/// Entries are visited in file-name order so two walks over the same tree
/// produce the same report. A missing root, a symlink loop or a directory
/// that cannot be read ends the iteration with [`DoctestError::Walk`].
pub fn doctest_files(root: &Path) -> impl Iterator<Item = DoctestResult<PathBuf>> {
    let walk_root = root.to_path_buf();

    WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) => {
                let eligible = !entry.file_type().is_dir() && is_eligible(entry.path());
                eligible.then(|| Ok(entry.into_path()))
            }
            Err(source) => {
                if let Some(path) = dangling_link(&source) {
                    return is_eligible(path).then(|| Ok(path.to_path_buf()));
                }
                Some(Err(DoctestError::Walk {
                    root: walk_root.clone(),
                    source,
                }))
            }
        })
}

/// Path of a symlink below the root whose target does not exist
fn dangling_link(err: &walkdir::Error) -> Option<&Path> {
    let not_found = err
        .io_error()
        .map(|e| e.kind() == io::ErrorKind::NotFound)
        .unwrap_or(false);

    if not_found && err.depth() > 0 && err.loop_ancestor().is_none() {
        err.path()
    } else {
        None
    }
}
