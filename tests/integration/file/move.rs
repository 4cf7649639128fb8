use io_more::error::FileError;
use io_more_test_harness::prelude::*;



#[test]
pub fn move_file_moves_contents() -> TestResult {
    let simple_harness = SimpleTree::initialize();
    let empty_harness = EmptyTree::initialize();

    let destination_path = empty_harness.sub_path("moved/hello.txt");


    let bytes_moved = io_more::file::move_file(&simple_harness.hello_txt, &destination_path).unwrap();


    assert_eq!(bytes_moved, SimpleTree::HELLO_TXT_CONTENT.len() as u64);

    simple_harness.hello_txt.assert_not_exists();
    destination_path.assert_file_content_equals(SimpleTree::HELLO_TXT_CONTENT);


    simple_harness.destroy();
    empty_harness.destroy();
    Ok(())
}



#[test]
pub fn move_file_refuses_existing_destination() -> TestResult {
    let simple_harness = SimpleTree::initialize();

    let captured_destination = simple_harness.sub_abc_txt.capture_with_content();


    assert_matches!(
        io_more::file::move_file(&simple_harness.hello_txt, &simple_harness.sub_abc_txt),
        Err(FileError::DestinationPathAlreadyExists { .. })
    );


    simple_harness
        .hello_txt
        .assert_file_content_equals(SimpleTree::HELLO_TXT_CONTENT);
    captured_destination.assert_unchanged();


    simple_harness.destroy();
    Ok(())
}



#[test]
pub fn move_file_to_directory_requires_directory_unless_created() -> TestResult {
    let simple_harness = SimpleTree::initialize();
    let empty_harness = EmptyTree::initialize();

    let target_directory = empty_harness.sub_path("target");


    assert_matches!(
        io_more::file::move_file_to_directory(&simple_harness.hello_txt, &target_directory, false),
        Err(FileError::DestinationDirectoryNotFound { .. })
    );
    simple_harness.hello_txt.assert_is_file_and_not_symlink();


    io_more::file::move_file_to_directory(&simple_harness.hello_txt, &target_directory, true)
        .unwrap();

    simple_harness.hello_txt.assert_not_exists();
    target_directory
        .sub_path("hello.txt")
        .assert_file_content_equals(SimpleTree::HELLO_TXT_CONTENT);


    simple_harness.destroy();
    empty_harness.destroy();
    Ok(())
}



#[test]
pub fn move_file_to_directory_rejects_file_as_directory() -> TestResult {
    let simple_harness = SimpleTree::initialize();


    assert_matches!(
        io_more::file::move_file_to_directory(
            &simple_harness.sub_abc_txt,
            &simple_harness.hello_txt,
            true
        ),
        Err(FileError::DestinationPathNotADirectory { .. })
    );

    simple_harness
        .sub_abc_txt
        .assert_file_content_equals(SimpleTree::SUB_ABC_TXT_CONTENT);
    simple_harness
        .hello_txt
        .assert_file_content_equals(SimpleTree::HELLO_TXT_CONTENT);


    simple_harness.destroy();
    Ok(())
}
