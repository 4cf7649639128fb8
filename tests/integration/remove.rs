use io_more::error::RemoveError;
use io_more_test_harness::prelude::*;



#[test]
pub fn remove_existing_removes_files_and_trees() -> TestResult {
    let deep_harness = DeepTree::initialize();


    io_more::remove::remove_existing(&deep_harness.a_bin).unwrap();
    deep_harness.a_bin.assert_not_exists();

    io_more::remove::remove_existing(&deep_harness.foo).unwrap();
    deep_harness.foo.assert_not_exists();

    deep_harness.as_path().assert_is_directory_and_empty();


    deep_harness.destroy();
    Ok(())
}



#[test]
pub fn forced_removal_reports_missing_path_while_quiet_removal_does_not() -> TestResult {
    let simple_harness = SimpleTree::initialize();

    let missing_path = simple_harness.sub_path("missing");


    assert_matches!(
        io_more::remove::remove_existing(&missing_path),
        Err(RemoveError::NotFound { .. })
    );
    assert!(!io_more::remove::remove_quietly(&missing_path));

    assert!(io_more::remove::remove_quietly(&simple_harness.sub));
    simple_harness.sub.assert_not_exists();


    simple_harness.destroy();
    Ok(())
}
