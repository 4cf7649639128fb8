//! Path assertions for tests, blanket-implemented for everything that is [`AsRef<Path>`].

use std::{
    collections::BTreeSet,
    ffi::OsString,
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use filetime::FileTime;



pub trait AsPath {
    fn as_path(&self) -> &Path;
}


pub trait WithSubPath {
    fn sub_path<P>(&self, sub_path: P) -> PathBuf
    where
        P: AsRef<Path>;
}



pub trait AssertablePath {
    /*
     * General assertions.
     */

    /// Asserts the underlying path points to an existing entry on the filesystem,
    /// be it a file, directory, symlink, etc.
    fn assert_exists(&self);

    /// Asserts the path does not exist on the filesystem.
    fn assert_not_exists(&self);


    /*
     * Directory-related assertions.
     */

    /// Asserts the path points to a directory;
    /// a symlink to a directory is treated as a failure.
    fn assert_is_directory_and_not_symlink(&self);

    /// Asserts the path points to a directory, and does not contain any entries.
    fn assert_is_directory_and_empty(&self);

    /// Asserts contents of directory at `self` and `other_directory_path` perfectly match.
    ///
    /// Structure and exact file contents are compared (two-way).
    /// Symbolic links are compared by their target paths.
    fn assert_is_directory_and_fully_matches_secondary_directory<P>(&self, other_directory_path: P)
    where
        P: AsRef<Path>;


    /*
     * File-related assertions.
     */

    /// Asserts the path points to a file;
    /// a symlink to a file is treated as a failure.
    fn assert_is_file_and_not_symlink(&self);

    /// Asserts the path points to a file (or a symlink to one) with exactly `expected_content`.
    fn assert_file_content_equals<C>(&self, expected_content: C)
    where
        C: AsRef<[u8]>;

    /// Asserts the modification time of the entry (following symlinks)
    /// matches the one of `other_path`.
    fn assert_modified_time_matches<P>(&self, other_path: P)
    where
        P: AsRef<Path>;


    /*
     * Symlink-related assertions.
     */

    /// Asserts the path points to a symlink (valid or not).
    fn assert_is_symlink(&self);
}



/// A file whose state was captured at some point (see [`CaptureableFilePath`]).
pub struct CapturedFileState {
    path: PathBuf,
    content: Vec<u8>,
}

impl CapturedFileState {
    /// Asserts the file still exists and still has the captured content.
    #[track_caller]
    pub fn assert_unchanged(&self) {
        self.path.assert_file_content_equals(&self.content);
    }
}


pub trait CaptureableFilePath {
    /// Captures the current content of the file, so that it can later be compared
    /// with [`CapturedFileState::assert_unchanged`].
    fn capture_with_content(&self) -> CapturedFileState;
}



/// Blanket implements `AsPath` for all `AsRef<Path>`s.
impl<P> AsPath for P
where
    P: AsRef<Path>,
{
    fn as_path(&self) -> &Path {
        self.as_ref()
    }
}


/// Blanket implements `WithSubPath` for all `AsPath`s.
impl<A> WithSubPath for A
where
    A: AsPath,
{
    fn sub_path<P>(&self, sub_path: P) -> PathBuf
    where
        P: AsRef<Path>,
    {
        self.as_path().join(sub_path)
    }
}


impl<A> CaptureableFilePath for A
where
    A: AsPath,
{
    #[track_caller]
    fn capture_with_content(&self) -> CapturedFileState {
        let content = fs::read(self.as_path()).unwrap_or_else(|error| {
            panic!(
                "failed to read file for capture: {} (for path {})",
                error,
                self.as_path().display()
            )
        });

        CapturedFileState {
            path: self.as_path().to_path_buf(),
            content,
        }
    }
}



/// Blanket implementation of [`AssertablePath`] for all items
/// that implement [`AsPath`].
impl<A> AssertablePath for A
where
    A: AsPath,
{
    #[track_caller]
    fn assert_exists(&self) {
        match fs::symlink_metadata(self.as_path()) {
            Ok(_) => {}
            Err(error) => match error.kind() {
                ErrorKind::NotFound => panic!("path does not exist: {}", self.as_path().display()),
                _ => panic!(
                    "failed to determine whether the path exists or not (IO error): {} (for path {})",
                    error,
                    self.as_path().display()
                ),
            },
        };
    }

    #[track_caller]
    fn assert_not_exists(&self) {
        match fs::symlink_metadata(self.as_path()) {
            Ok(_) => panic!("path exists: {}", self.as_path().display()),
            Err(error) => match error.kind() {
                ErrorKind::NotFound => {}
                _ => panic!(
                    "failed to determine whether the path exists or not (IO error): {} (for path {})",
                    error,
                    self.as_path().display()
                ),
            },
        };
    }

    #[track_caller]
    fn assert_is_directory_and_not_symlink(&self) {
        let metadata = symlink_metadata_or_panic(self.as_path());

        if !metadata.is_dir() {
            panic!(
                "path does not lead to a directory (or is a symlink): {}",
                self.as_path().display()
            );
        }
    }

    #[track_caller]
    fn assert_is_directory_and_empty(&self) {
        self.assert_is_directory_and_not_symlink();

        let entries = sorted_entry_names(self.as_path());
        if !entries.is_empty() {
            panic!(
                "directory is not empty: {} (contains {:?})",
                self.as_path().display(),
                entries
            );
        }
    }

    #[track_caller]
    fn assert_is_directory_and_fully_matches_secondary_directory<P>(&self, other_directory_path: P)
    where
        P: AsRef<Path>,
    {
        assert_directories_match(self.as_path(), other_directory_path.as_ref());
    }

    #[track_caller]
    fn assert_is_file_and_not_symlink(&self) {
        let metadata = symlink_metadata_or_panic(self.as_path());

        if !metadata.is_file() {
            panic!(
                "path does not lead to a file (or is a symlink): {}",
                self.as_path().display()
            );
        }
    }

    #[track_caller]
    fn assert_file_content_equals<C>(&self, expected_content: C)
    where
        C: AsRef<[u8]>,
    {
        let actual_content = fs::read(self.as_path()).unwrap_or_else(|error| {
            panic!(
                "failed to read file: {} (for path {})",
                error,
                self.as_path().display()
            )
        });

        if actual_content != expected_content.as_ref() {
            panic!(
                "file content does not match: {} ({} bytes, expected {} bytes)",
                self.as_path().display(),
                actual_content.len(),
                expected_content.as_ref().len()
            );
        }
    }

    #[track_caller]
    fn assert_modified_time_matches<P>(&self, other_path: P)
    where
        P: AsRef<Path>,
    {
        let own_time = modified_time_or_panic(self.as_path());
        let other_time = modified_time_or_panic(other_path.as_ref());

        if own_time != other_time {
            panic!(
                "modification times do not match: {} ({}) versus {} ({})",
                self.as_path().display(),
                own_time,
                other_path.as_ref().display(),
                other_time
            );
        }
    }

    #[track_caller]
    fn assert_is_symlink(&self) {
        let metadata = symlink_metadata_or_panic(self.as_path());

        if !metadata.is_symlink() {
            panic!("path is not a symlink: {}", self.as_path().display());
        }
    }
}



#[track_caller]
fn symlink_metadata_or_panic(path: &Path) -> fs::Metadata {
    fs::symlink_metadata(path).unwrap_or_else(|error| {
        panic!(
            "failed to read metadata: {} (for path {})",
            error,
            path.display()
        )
    })
}

#[track_caller]
fn modified_time_or_panic(path: &Path) -> FileTime {
    let metadata = fs::metadata(path).unwrap_or_else(|error| {
        panic!(
            "failed to read metadata: {} (for path {})",
            error,
            path.display()
        )
    });

    FileTime::from_last_modification_time(&metadata)
}

#[track_caller]
fn sorted_entry_names(directory_path: &Path) -> BTreeSet<OsString> {
    fs::read_dir(directory_path)
        .unwrap_or_else(|error| {
            panic!(
                "failed to read directory: {} (for path {})",
                error,
                directory_path.display()
            )
        })
        .map(|entry| entry.expect("failed to read directory entry").file_name())
        .collect()
}

#[track_caller]
fn assert_directories_match(primary_directory_path: &Path, secondary_directory_path: &Path) {
    primary_directory_path.assert_is_directory_and_not_symlink();
    secondary_directory_path.assert_is_directory_and_not_symlink();

    let primary_entries = sorted_entry_names(primary_directory_path);
    let secondary_entries = sorted_entry_names(secondary_directory_path);

    if primary_entries != secondary_entries {
        panic!(
            "directory entries do not match:\n  {} -> {:?}\n  {} -> {:?}",
            primary_directory_path.display(),
            primary_entries,
            secondary_directory_path.display(),
            secondary_entries
        );
    }

    for entry_name in primary_entries {
        let primary_entry_path = primary_directory_path.join(&entry_name);
        let secondary_entry_path = secondary_directory_path.join(&entry_name);

        let primary_metadata = symlink_metadata_or_panic(&primary_entry_path);
        let secondary_metadata = symlink_metadata_or_panic(&secondary_entry_path);

        if primary_metadata.is_symlink() {
            secondary_entry_path.assert_is_symlink();

            let primary_target = fs::read_link(&primary_entry_path).expect("failed to read link");
            let secondary_target =
                fs::read_link(&secondary_entry_path).expect("failed to read link");

            assert_eq!(
                primary_target,
                secondary_target,
                "symlink targets do not match: {} versus {}",
                primary_entry_path.display(),
                secondary_entry_path.display()
            );
        } else if primary_metadata.is_dir() {
            assert_directories_match(&primary_entry_path, &secondary_entry_path);
        } else {
            if !secondary_metadata.is_file() {
                panic!(
                    "expected a file: {} (matching {})",
                    secondary_entry_path.display(),
                    primary_entry_path.display()
                );
            }

            let primary_content = fs::read(&primary_entry_path).expect("failed to read file");
            secondary_entry_path.assert_file_content_equals(primary_content);
        }
    }
}
