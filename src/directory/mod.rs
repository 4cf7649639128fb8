//! Directory tree copying, moving, cleaning, removal, listing and sizing.
//!
//! <br>
//!
//! ##### Feature Overview
//!
//! | | <span style="font-weight:normal"><i>configured by</i></span> | <span style="font-weight:normal"><i>returns</i></span>
//! |-----------------------------|---------------------------------|:--------------------:|
//! | [`copy_directory`]                | [`CopyDirectoryOptions`]   | [`CopyDirectoryFinished`] <br><sup style="text-align: right">(or [`CopyDirectoryError`])</sup> |
//! | [`copy_directory_to_directory`]   | [`CopyDirectoryOptions`]   | [`CopyDirectoryFinished`] <br><sup style="text-align: right">(or [`CopyDirectoryError`])</sup> |
//! | [`move_directory`]                |                            | [`MoveDirectoryFinished`] <br><sup style="text-align: right">(or [`MoveDirectoryError`])</sup> |
//! | [`move_directory_to_directory`]   | *individual arguments*     | [`MoveDirectoryFinished`] <br><sup style="text-align: right">(or [`MoveDirectoryError`])</sup> |
//! | [`clean_directory`]               |                            | `()` <br><sup style="text-align: right">(or [`CleanDirectoryError`])</sup> |
//! | [`ensure_directory_absent`]       |                            | `()` <br><sup style="text-align: right">(or [`RemoveError`])</sup> |
//! | [`list_files`]                    | *individual arguments*     | [`Vec<PathBuf>`] <br><sup style="text-align: right">(or [`ListDirectoryError`])</sup> |
//! | [`directory_size_in_bytes`]       |                            | [`u64`] <br><sup style="text-align: right">(or [`DirectorySizeError`])</sup> |
//! | [`directory_size_in_bytes_exact`] |                            | [`u128`] <br><sup style="text-align: right">(or [`DirectorySizeError`])</sup> |
//!
//! Filtering is done through the [`PathFilter`] trait, which every `Fn(&Path) -> bool`
//! closure implements.
//!
//!
//! [`CopyDirectoryError`]: crate::error::CopyDirectoryError
//! [`MoveDirectoryError`]: crate::error::MoveDirectoryError
//! [`CleanDirectoryError`]: crate::error::CleanDirectoryError
//! [`RemoveError`]: crate::error::RemoveError
//! [`ListDirectoryError`]: crate::error::ListDirectoryError
//! [`DirectorySizeError`]: crate::error::DirectorySizeError
//! [`Vec<PathBuf>`]: std::path::PathBuf


mod clean;
mod common;
mod copy;
mod list;
mod r#move;
mod remove;
mod size;


pub use clean::*;
pub use common::PathFilter;
pub(crate) use common::{
    canonicalize_lenient,
    canonicalize_path,
    is_same_or_inside,
    list_filtered_children,
    try_exists_without_follow,
};
pub use copy::*;
pub use list::*;
pub use r#move::*;
pub use remove::*;
pub use size::*;
