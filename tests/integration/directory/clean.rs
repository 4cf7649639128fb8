use io_more::error::CleanDirectoryError;
use io_more_test_harness::prelude::*;



#[test]
pub fn clean_directory_keeps_the_directory() -> TestResult {
    let deep_harness = DeepTree::initialize();


    io_more::directory::clean_directory(deep_harness.as_path()).unwrap();


    deep_harness.as_path().assert_is_directory_and_empty();


    deep_harness.destroy();
    Ok(())
}



#[test]
pub fn clean_directory_rejects_missing_and_non_directory_paths() -> TestResult {
    let simple_harness = SimpleTree::initialize();


    assert_matches!(
        io_more::directory::clean_directory(simple_harness.sub_path("missing")),
        Err(CleanDirectoryError::NotFound { .. })
    );

    assert_matches!(
        io_more::directory::clean_directory(&simple_harness.hello_txt),
        Err(CleanDirectoryError::NotADirectory { .. })
    );


    simple_harness.destroy();
    Ok(())
}



#[cfg(unix)]
#[test]
pub fn clean_directory_collects_every_failure() -> TestResult {
    use std::os::unix::fs::PermissionsExt;

    let deep_harness = DeepTree::initialize();

    // Without write permission, entries inside `foo/bar` cannot be removed.
    std::fs::set_permissions(&deep_harness.foo_bar, std::fs::Permissions::from_mode(0o555))?;

    let can_still_remove = std::fs::remove_file(&deep_harness.foo_bar_c_bin).is_ok();
    if can_still_remove {
        // Running with elevated privileges, permissions are not enforced.
        std::fs::set_permissions(&deep_harness.foo_bar, std::fs::Permissions::from_mode(0o755))?;
        deep_harness.destroy();
        return Ok(());
    }


    let clean_result = io_more::directory::clean_directory(deep_harness.as_path());


    std::fs::set_permissions(&deep_harness.foo_bar, std::fs::Permissions::from_mode(0o755))?;

    let failures = assert_matches!(
        clean_result,
        Err(CleanDirectoryError::PartiallyCleaned { failures, .. }) => failures
    );
    assert_eq!(failures.len(), 1);

    // Siblings of the failing entry are still removed.
    deep_harness.a_bin.assert_not_exists();
    deep_harness.foo_b_bin.assert_not_exists();
    deep_harness.foo_bar_c_bin.assert_exists();


    deep_harness.destroy();
    Ok(())
}
