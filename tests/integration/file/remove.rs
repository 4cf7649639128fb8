use io_more::error::FileRemoveError;
use io_more_test_harness::{prelude::*, trees::initialize_symbolic_link_to_file};



#[test]
pub fn remove_file_deletes_file() -> TestResult {
    let simple_harness = SimpleTree::initialize();


    io_more::file::remove_file(&simple_harness.hello_txt).unwrap();


    simple_harness.hello_txt.assert_not_exists();
    simple_harness
        .sub_abc_txt
        .assert_file_content_equals(SimpleTree::SUB_ABC_TXT_CONTENT);


    simple_harness.destroy();
    Ok(())
}



#[test]
pub fn remove_file_does_not_follow_symlinks() -> TestResult {
    let simple_harness = SimpleTree::initialize();
    let empty_harness = EmptyTree::initialize();

    let symlink_path = empty_harness.sub_path("link.txt");
    initialize_symbolic_link_to_file(&symlink_path, &simple_harness.hello_txt);

    let captured_target = simple_harness.hello_txt.capture_with_content();


    io_more::file::remove_file(&symlink_path).unwrap();


    symlink_path.assert_not_exists();
    captured_target.assert_unchanged();


    simple_harness.destroy();
    empty_harness.destroy();
    Ok(())
}



#[test]
pub fn remove_file_rejects_directories_and_missing_files() -> TestResult {
    let simple_harness = SimpleTree::initialize();


    assert_matches!(
        io_more::file::remove_file(&simple_harness.sub),
        Err(FileRemoveError::NotAFile { .. })
    );
    assert_matches!(
        io_more::file::remove_file(simple_harness.sub_path("missing.txt")),
        Err(FileRemoveError::NotFound { .. })
    );

    simple_harness.sub.assert_is_directory_and_not_symlink();


    simple_harness.destroy();
    Ok(())
}
