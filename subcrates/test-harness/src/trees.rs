//! Temporary filesystem trees for tests.
//!
//! Every tree lives in its own temporary directory, which is removed on [`FileSystemHarness::destroy`]
//! (or when the harness is dropped).

use std::{
    fs::{self, OpenOptions},
    io::{prelude::Write, BufWriter},
    path::{Path, PathBuf},
};

use once_cell::sync::Lazy;
use tempfile::TempDir;

use crate::{assertable::AssertablePath, lazy_generate_seeded_binary_data};


static DEEP_TREE_DATA_A: Lazy<Vec<u8>> = lazy_generate_seeded_binary_data!(1024 * 32, 2903489125012);

static DEEP_TREE_DATA_B: Lazy<Vec<u8>> = lazy_generate_seeded_binary_data!(1024 * 64, 2397591013122);

static DEEP_TREE_DATA_C: Lazy<Vec<u8>> = lazy_generate_seeded_binary_data!(1024 * 16, 37510903939111);



pub trait FileSystemHarness: Sized {
    /// Creates the tree in a fresh temporary directory.
    ///
    /// # Panics
    /// Panics on any IO error, which is fine inside a test.
    fn initialize() -> Self;

    /// Returns the root directory of the tree.
    fn root_path(&self) -> &Path;

    fn into_temporary_directory(self) -> TempDir;

    /// Removes the whole tree.
    #[track_caller]
    fn destroy(self) {
        self.into_temporary_directory()
            .close()
            .expect("failed to remove temporary directory");
    }
}



/// A tree without any entries.
pub struct EmptyTree {
    temporary_directory: TempDir,
}

impl AsRef<Path> for EmptyTree {
    fn as_ref(&self) -> &Path {
        self.temporary_directory.path()
    }
}

impl FileSystemHarness for EmptyTree {
    #[track_caller]
    fn initialize() -> Self {
        let temporary_directory = initialize_temporary_directory();

        Self {
            temporary_directory,
        }
    }

    fn root_path(&self) -> &Path {
        self.temporary_directory.path()
    }

    fn into_temporary_directory(self) -> TempDir {
        self.temporary_directory
    }
}



/// A small tree of text files.
///
/// ```md
/// .
/// |-- hello.txt (text data, 5 B)
/// |-- sub
/// |   |-- abc.txt (text data, 3 B)
/// ```
pub struct SimpleTree {
    temporary_directory: TempDir,

    pub hello_txt: PathBuf,

    pub sub: PathBuf,

    pub sub_abc_txt: PathBuf,
}

impl SimpleTree {
    pub const HELLO_TXT_CONTENT: &'static str = "hello";

    pub const SUB_ABC_TXT_CONTENT: &'static str = "abc";

    pub const TOTAL_SIZE_IN_BYTES: u64 = 8;

    pub const TOTAL_FILE_COUNT: usize = 2;
}

impl AsRef<Path> for SimpleTree {
    fn as_ref(&self) -> &Path {
        self.temporary_directory.path()
    }
}

impl FileSystemHarness for SimpleTree {
    #[track_caller]
    fn initialize() -> Self {
        let temporary_directory = initialize_temporary_directory();
        let root = temporary_directory.path();

        let hello_txt = root.join("hello.txt");
        initialize_file_with_string(&hello_txt, Self::HELLO_TXT_CONTENT);

        let sub = root.join("sub");
        initialize_directory(&sub);

        let sub_abc_txt = sub.join("abc.txt");
        initialize_file_with_string(&sub_abc_txt, Self::SUB_ABC_TXT_CONTENT);

        Self {
            temporary_directory,
            hello_txt,
            sub,
            sub_abc_txt,
        }
    }

    fn root_path(&self) -> &Path {
        self.temporary_directory.path()
    }

    fn into_temporary_directory(self) -> TempDir {
        self.temporary_directory
    }
}



/// A deeper tree of (seeded) random binary files.
///
/// ```md
/// .
/// |-- a.bin (random data, 32 KiB)
/// |-- foo
/// |   |-- b.bin (random data, 64 KiB)
/// |   |-- bar
/// |   |   |-- c.bin (random data, 16 KiB)
/// |   |   |-- baz (empty directory)
/// ```
pub struct DeepTree {
    temporary_directory: TempDir,

    pub a_bin: PathBuf,

    pub foo: PathBuf,

    pub foo_b_bin: PathBuf,

    pub foo_bar: PathBuf,

    pub foo_bar_c_bin: PathBuf,

    pub foo_bar_baz: PathBuf,
}

impl DeepTree {
    pub const TOTAL_SIZE_IN_BYTES: u64 = 1024 * (32 + 64 + 16);

    pub const TOTAL_FILE_COUNT: usize = 3;

    pub const TOTAL_DIRECTORY_COUNT: usize = 3;

    pub fn a_bin_content() -> &'static [u8] {
        DEEP_TREE_DATA_A.as_slice()
    }

    pub fn foo_b_bin_content() -> &'static [u8] {
        DEEP_TREE_DATA_B.as_slice()
    }

    pub fn foo_bar_c_bin_content() -> &'static [u8] {
        DEEP_TREE_DATA_C.as_slice()
    }
}

impl AsRef<Path> for DeepTree {
    fn as_ref(&self) -> &Path {
        self.temporary_directory.path()
    }
}

impl FileSystemHarness for DeepTree {
    #[track_caller]
    fn initialize() -> Self {
        let temporary_directory = initialize_temporary_directory();
        let root = temporary_directory.path();

        let a_bin = root.join("a.bin");
        initialize_file_with_bytes(&a_bin, Self::a_bin_content());

        let foo = root.join("foo");
        initialize_directory(&foo);

        let foo_b_bin = foo.join("b.bin");
        initialize_file_with_bytes(&foo_b_bin, Self::foo_b_bin_content());

        let foo_bar = foo.join("bar");
        initialize_directory(&foo_bar);

        let foo_bar_c_bin = foo_bar.join("c.bin");
        initialize_file_with_bytes(&foo_bar_c_bin, Self::foo_bar_c_bin_content());

        let foo_bar_baz = foo_bar.join("baz");
        initialize_directory(&foo_bar_baz);

        Self {
            temporary_directory,
            a_bin,
            foo,
            foo_b_bin,
            foo_bar,
            foo_bar_c_bin,
            foo_bar_baz,
        }
    }

    fn root_path(&self) -> &Path {
        self.temporary_directory.path()
    }

    fn into_temporary_directory(self) -> TempDir {
        self.temporary_directory
    }
}



#[track_caller]
fn initialize_temporary_directory() -> TempDir {
    tempfile::tempdir().expect("failed to create temporary directory")
}

#[track_caller]
fn initialize_directory(directory_path: &Path) {
    directory_path.assert_not_exists();

    fs::create_dir(directory_path).expect("failed to create directory");

    directory_path.assert_is_directory_and_not_symlink();
}

#[track_caller]
pub fn initialize_file_with_string<S>(file_path: &Path, content: S)
where
    S: AsRef<str>,
{
    initialize_file_with_bytes(file_path, content.as_ref().as_bytes());
}

#[track_caller]
pub fn initialize_file_with_bytes(file_path: &Path, content: &[u8]) {
    file_path.assert_not_exists();

    let mut buffered_file_writer = {
        let file = OpenOptions::new()
            .create_new(true)
            .write(true)
            .open(file_path)
            .expect("failed to open file");

        BufWriter::new(file)
    };


    buffered_file_writer
        .write_all(content)
        .expect("failed to write content to file");


    let mut file = buffered_file_writer
        .into_inner()
        .expect("failed to flush buffered writer");

    file.flush().expect("failed to flush file");

    file_path.assert_is_file_and_not_symlink();
}


/// Creates a symbolic link at `symlink_path` pointing to the file at `target_path`.
#[track_caller]
pub fn initialize_symbolic_link_to_file(symlink_path: &Path, target_path: &Path) {
    symlink_path.assert_not_exists();

    #[cfg(unix)]
    std::os::unix::fs::symlink(target_path, symlink_path).expect("failed to create symlink");

    #[cfg(windows)]
    std::os::windows::fs::symlink_file(target_path, symlink_path)
        .expect("failed to create symlink");

    symlink_path.assert_is_symlink();
}

/// Creates a symbolic link at `symlink_path` pointing to the directory at `target_path`.
#[track_caller]
pub fn initialize_symbolic_link_to_directory(symlink_path: &Path, target_path: &Path) {
    symlink_path.assert_not_exists();

    #[cfg(unix)]
    std::os::unix::fs::symlink(target_path, symlink_path).expect("failed to create symlink");

    #[cfg(windows)]
    std::os::windows::fs::symlink_dir(target_path, symlink_path)
        .expect("failed to create symlink");

    symlink_path.assert_is_symlink();
}
