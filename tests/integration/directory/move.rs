use io_more::{directory::MoveDirectoryFinished, error::MoveDirectoryError};
use io_more_test_harness::prelude::*;



#[test]
pub fn move_directory_renames_directory() -> TestResult {
    let deep_harness = DeepTree::initialize();
    let empty_harness = EmptyTree::initialize();

    let destination_path = empty_harness.sub_path("moved/deeper");


    let finished_move =
        io_more::directory::move_directory(&deep_harness.foo, &destination_path).unwrap();


    // Both trees live in the same temporary directory root, so a rename succeeds.
    assert_eq!(finished_move, MoveDirectoryFinished::Renamed);

    deep_harness.foo.assert_not_exists();
    destination_path
        .sub_path("b.bin")
        .assert_file_content_equals(DeepTree::foo_b_bin_content());
    destination_path
        .sub_path("bar/c.bin")
        .assert_file_content_equals(DeepTree::foo_bar_c_bin_content());
    destination_path
        .sub_path("bar/baz")
        .assert_is_directory_and_empty();


    deep_harness.destroy();
    empty_harness.destroy();
    Ok(())
}



#[test]
pub fn move_directory_into_own_descendant_is_rejected_before_anything_changes() -> TestResult {
    let simple_harness = SimpleTree::initialize();

    let destination_path = simple_harness.sub.sub_path("nested/target");


    assert_matches!(
        io_more::directory::move_directory(simple_harness.as_path(), &destination_path),
        Err(MoveDirectoryError::DestinationInsideSource { .. })
    );

    assert_matches!(
        io_more::directory::move_directory_to_directory(
            simple_harness.as_path(),
            simple_harness.sub.sub_path("nested"),
            true
        ),
        Err(MoveDirectoryError::DestinationInsideSource { .. })
    );


    simple_harness.sub.sub_path("nested").assert_not_exists();
    simple_harness
        .hello_txt
        .assert_file_content_equals(SimpleTree::HELLO_TXT_CONTENT);
    simple_harness
        .sub_abc_txt
        .assert_file_content_equals(SimpleTree::SUB_ABC_TXT_CONTENT);


    simple_harness.destroy();
    Ok(())
}



#[test]
pub fn move_directory_refuses_existing_destination() -> TestResult {
    let simple_harness = SimpleTree::initialize();
    let destination_harness = SimpleTree::initialize();


    assert_matches!(
        io_more::directory::move_directory(&simple_harness.sub, &destination_harness.sub),
        Err(MoveDirectoryError::DestinationAlreadyExists { .. })
    );

    simple_harness.sub.assert_is_directory_and_not_symlink();


    simple_harness.destroy();
    destination_harness.destroy();
    Ok(())
}



#[test]
pub fn move_directory_to_directory_requires_parent_unless_created() -> TestResult {
    let simple_harness = SimpleTree::initialize();
    let empty_harness = EmptyTree::initialize();

    let parent_path = empty_harness.sub_path("parent");


    assert_matches!(
        io_more::directory::move_directory_to_directory(&simple_harness.sub, &parent_path, false),
        Err(MoveDirectoryError::DestinationDirectoryNotFound { .. })
    );
    parent_path.assert_not_exists();


    io_more::directory::move_directory_to_directory(&simple_harness.sub, &parent_path, true)
        .unwrap();

    simple_harness.sub.assert_not_exists();
    parent_path
        .sub_path("sub/abc.txt")
        .assert_file_content_equals(SimpleTree::SUB_ABC_TXT_CONTENT);


    simple_harness.destroy();
    empty_harness.destroy();
    Ok(())
}



#[test]
pub fn move_directory_reports_missing_source() -> TestResult {
    let empty_harness = EmptyTree::initialize();


    assert_matches!(
        io_more::directory::move_directory(
            empty_harness.sub_path("missing"),
            empty_harness.sub_path("destination")
        ),
        Err(MoveDirectoryError::SourceDirectoryNotFound { .. })
    );


    empty_harness.destroy();
    Ok(())
}
