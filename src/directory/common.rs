use std::{
    io,
    path::{Path, PathBuf},
};

use crate::use_enabled_fs_module;

use_enabled_fs_module!();



/// Decides which paths a directory walk considers.
///
/// A filter is consulted for every direct child of every directory that is visited,
/// files and sub-directories alike: a rejected directory is not recursed into at all.
///
/// Any `Fn(&Path) -> bool` closure is a filter. Composing filters (and, or, not)
/// is left to the caller, e.g. with a closure that calls several other filters.
pub trait PathFilter {
    /// Returns `true` if `path` should be included.
    fn accepts(&self, path: &Path) -> bool;
}

impl<F> PathFilter for F
where
    F: Fn(&Path) -> bool,
{
    fn accepts(&self, path: &Path) -> bool {
        self(path)
    }
}



/// Returns `Ok(true)` if something (a file, directory or symbolic link) exists at `path`.
///
/// Unlike [`Path::try_exists`], symbolic links are not followed,
/// so a broken symbolic link still exists.
pub(crate) fn try_exists_without_follow(path: &Path) -> io::Result<bool> {
    match fs::symlink_metadata(path) {
        Ok(_) => Ok(true),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(error) => Err(error),
    }
}


cfg_if::cfg_if! {
    if #[cfg(feature = "dunce")] {
        /// Canonicalizes `path`, without a UNC prefix where that is possible (on Windows).
        pub(crate) fn canonicalize_path(path: &Path) -> io::Result<PathBuf> {
            dunce::canonicalize(path)
        }
    } else {
        /// Canonicalizes `path`.
        pub(crate) fn canonicalize_path(path: &Path) -> io::Result<PathBuf> {
            fs::canonicalize(path)
        }
    }
}


/// Canonicalizes a path that may not exist (yet).
///
/// The longest existing ancestor of `path` is canonicalized,
/// and the remaining (missing) components are appended to it as they are.
pub(crate) fn canonicalize_lenient(path: &Path) -> io::Result<PathBuf> {
    let absolute_path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut existing_ancestor = absolute_path.as_path();
    let mut missing_components = Vec::new();

    loop {
        if try_exists_without_follow(existing_ancestor)? {
            let mut canonical_path = canonicalize_path(existing_ancestor)?;
            canonical_path.extend(missing_components.iter().rev());

            return Ok(canonical_path);
        }

        match (existing_ancestor.parent(), existing_ancestor.file_name()) {
            (Some(parent), Some(file_name)) => {
                missing_components.push(file_name.to_os_string());
                existing_ancestor = parent;
            }
            _ => return Ok(absolute_path),
        }
    }
}


/// Returns `true` if `inner` is `outer` or lies inside of it (both paths are canonicalized leniently).
pub(crate) fn is_same_or_inside(outer: &Path, inner: &Path) -> io::Result<bool> {
    let canonical_outer = canonicalize_lenient(outer)?;
    let canonical_inner = canonicalize_lenient(inner)?;

    Ok(canonical_inner.starts_with(canonical_outer))
}


/// Lists the direct children of `directory_path` that `filter` accepts (all children without a filter).
///
/// The listing is taken fresh on every call and is sorted by path.
pub(crate) fn list_filtered_children(
    directory_path: &Path,
    filter: Option<&dyn PathFilter>,
) -> io::Result<Vec<PathBuf>> {
    let mut children = Vec::new();

    for entry in fs::read_dir(directory_path)? {
        let child_path = entry?.path();

        if let Some(filter) = filter {
            if !filter.accepts(&child_path) {
                tracing::trace!(path = %child_path.display(), "path rejected by filter");
                continue;
            }
        }

        children.push(child_path);
    }

    children.sort();

    Ok(children)
}
