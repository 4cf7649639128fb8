pub use crate::assert_matches;
pub use crate::assertable::{AsPath, AssertablePath, CaptureableFilePath, WithSubPath};
pub use crate::error::TestResult;
pub use crate::paths_equal_no_unc;
pub use crate::trees::{DeepTree, EmptyTree, FileSystemHarness, SimpleTree};
