use std::path::Path;

use io_more::error::ListDirectoryError;
use io_more_test_harness::prelude::*;



#[test]
pub fn list_files_recursively_returns_every_file() -> TestResult {
    let deep_harness = DeepTree::initialize();


    let files = io_more::directory::list_files(deep_harness.as_path(), None, true).unwrap();


    assert_eq!(files.len(), DeepTree::TOTAL_FILE_COUNT);
    assert!(files.contains(&deep_harness.a_bin));
    assert!(files.contains(&deep_harness.foo_b_bin));
    assert!(files.contains(&deep_harness.foo_bar_c_bin));


    deep_harness.destroy();
    Ok(())
}



#[test]
pub fn list_files_applies_filter_to_files_and_directories() -> TestResult {
    let deep_harness = DeepTree::initialize();

    let filter = |path: &Path| path.is_dir() || path.extension().is_some_and(|extension| extension == "bin");
    let skip_bar = |path: &Path| !path.ends_with("bar");


    let all_binary_files =
        io_more::directory::list_files(deep_harness.as_path(), Some(&filter), true).unwrap();
    assert_eq!(all_binary_files.len(), DeepTree::TOTAL_FILE_COUNT);

    let without_bar =
        io_more::directory::list_files(deep_harness.as_path(), Some(&skip_bar), true).unwrap();
    assert_eq!(
        without_bar,
        vec![deep_harness.a_bin.clone(), deep_harness.foo_b_bin.clone()]
    );


    deep_harness.destroy();
    Ok(())
}



#[test]
pub fn list_files_requires_a_directory() -> TestResult {
    let simple_harness = SimpleTree::initialize();


    assert_matches!(
        io_more::directory::list_files(&simple_harness.hello_txt, None, false),
        Err(ListDirectoryError::NotADirectory { .. })
    );


    simple_harness.destroy();
    Ok(())
}
