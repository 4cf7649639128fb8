use io_more::error::RemoveError;
use io_more_test_harness::{prelude::*, trees::initialize_symbolic_link_to_directory};



#[test]
pub fn ensure_directory_absent_is_idempotent() -> TestResult {
    let deep_harness = DeepTree::initialize();


    io_more::directory::ensure_directory_absent(&deep_harness.foo).unwrap();
    deep_harness.foo.assert_not_exists();

    io_more::directory::ensure_directory_absent(&deep_harness.foo).unwrap();
    deep_harness.foo.assert_not_exists();

    deep_harness
        .a_bin
        .assert_file_content_equals(DeepTree::a_bin_content());


    deep_harness.destroy();
    Ok(())
}



#[test]
pub fn ensure_directory_absent_rejects_files() -> TestResult {
    let simple_harness = SimpleTree::initialize();


    assert_matches!(
        io_more::directory::ensure_directory_absent(&simple_harness.hello_txt),
        Err(RemoveError::NotADirectory { .. })
    );
    simple_harness.hello_txt.assert_is_file_and_not_symlink();


    simple_harness.destroy();
    Ok(())
}



#[test]
pub fn ensure_directory_absent_does_not_follow_symlinks() -> TestResult {
    let simple_harness = SimpleTree::initialize();
    let empty_harness = EmptyTree::initialize();

    let symlink_path = empty_harness.sub_path("link");
    initialize_symbolic_link_to_directory(&symlink_path, &simple_harness.sub);

    let captured_file = simple_harness.sub_abc_txt.capture_with_content();


    io_more::directory::ensure_directory_absent(&symlink_path).unwrap();


    symlink_path.assert_not_exists();
    captured_file.assert_unchanged();


    simple_harness.destroy();
    empty_harness.destroy();
    Ok(())
}
