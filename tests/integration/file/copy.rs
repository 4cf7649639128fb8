use io_more::{error::FileError, file::CopyFileOptions};
use io_more_test_harness::{prelude::*, trees::initialize_symbolic_link_to_file};



#[test]
pub fn copy_file_creates_an_identical_copy() -> TestResult {
    let deep_harness = DeepTree::initialize();
    let empty_harness = EmptyTree::initialize();

    let destination_path = empty_harness.sub_path("nested/a-copy.bin");


    let bytes_copied = io_more::file::copy_file(
        &deep_harness.a_bin,
        &destination_path,
        CopyFileOptions::default(),
    )
    .unwrap();


    assert_eq!(bytes_copied, DeepTree::a_bin_content().len() as u64);

    destination_path.assert_is_file_and_not_symlink();
    destination_path.assert_file_content_equals(DeepTree::a_bin_content());
    destination_path.assert_modified_time_matches(&deep_harness.a_bin);


    deep_harness.destroy();
    empty_harness.destroy();
    Ok(())
}



#[test]
pub fn copy_file_with_small_buffer_overwrites_existing_file() -> TestResult {
    let simple_harness = SimpleTree::initialize();


    let bytes_copied = io_more::file::copy_file(
        &simple_harness.hello_txt,
        &simple_harness.sub_abc_txt,
        CopyFileOptions {
            preserve_modified_time: false,
            buffer_size: 2,
        },
    )
    .unwrap();


    assert_eq!(bytes_copied, SimpleTree::HELLO_TXT_CONTENT.len() as u64);
    simple_harness
        .sub_abc_txt
        .assert_file_content_equals(SimpleTree::HELLO_TXT_CONTENT);


    simple_harness.destroy();
    Ok(())
}



#[test]
pub fn copy_file_to_directory_keeps_the_file_name() -> TestResult {
    let simple_harness = SimpleTree::initialize();
    let empty_harness = EmptyTree::initialize();


    io_more::file::copy_file_to_directory(
        &simple_harness.hello_txt,
        empty_harness.sub_path("target"),
        CopyFileOptions::default(),
    )
    .unwrap();


    empty_harness
        .sub_path("target/hello.txt")
        .assert_file_content_equals(SimpleTree::HELLO_TXT_CONTENT);


    simple_harness.destroy();
    empty_harness.destroy();
    Ok(())
}



#[test]
pub fn copy_file_rejects_invalid_arguments() -> TestResult {
    let simple_harness = SimpleTree::initialize();


    assert_matches!(
        io_more::file::copy_file(
            simple_harness.sub_path("missing.txt"),
            simple_harness.sub_path("copy.txt"),
            CopyFileOptions::default(),
        ),
        Err(FileError::SourceFileNotFound { .. })
    );

    assert_matches!(
        io_more::file::copy_file(
            &simple_harness.sub,
            simple_harness.sub_path("copy.txt"),
            CopyFileOptions::default(),
        ),
        Err(FileError::SourcePathNotAFile { .. })
    );

    assert_matches!(
        io_more::file::copy_file(
            &simple_harness.hello_txt,
            &simple_harness.sub,
            CopyFileOptions::default(),
        ),
        Err(FileError::DestinationPathIsADirectory { .. })
    );

    assert_matches!(
        io_more::file::copy_file(
            &simple_harness.hello_txt,
            &simple_harness.hello_txt,
            CopyFileOptions::default(),
        ),
        Err(FileError::SourceAndDestinationAreTheSame { .. })
    );

    simple_harness.sub_path("copy.txt").assert_not_exists();
    simple_harness
        .hello_txt
        .assert_file_content_equals(SimpleTree::HELLO_TXT_CONTENT);


    simple_harness.destroy();
    Ok(())
}



#[test]
pub fn copy_file_refuses_hard_link_to_the_source() -> TestResult {
    let simple_harness = SimpleTree::initialize();

    let link_path = simple_harness.sub_path("hello-link.txt");
    std::fs::hard_link(&simple_harness.hello_txt, &link_path)?;


    let copy_result = io_more::file::copy_file(
        &simple_harness.hello_txt,
        &link_path,
        CopyFileOptions::default(),
    );

    if cfg!(unix) {
        assert_matches!(
            copy_result,
            Err(FileError::SourceAndDestinationAreTheSame { .. })
        );
    }


    simple_harness
        .hello_txt
        .assert_file_content_equals(SimpleTree::HELLO_TXT_CONTENT);
    link_path.assert_file_content_equals(SimpleTree::HELLO_TXT_CONTENT);


    simple_harness.destroy();
    Ok(())
}



#[test]
pub fn copy_file_replaces_symbolic_link_at_destination() -> TestResult {
    let simple_harness = SimpleTree::initialize();
    let empty_harness = EmptyTree::initialize();

    let link_path = empty_harness.sub_path("link.txt");
    initialize_symbolic_link_to_file(&link_path, &simple_harness.sub_abc_txt);


    io_more::file::copy_file(
        &simple_harness.hello_txt,
        &link_path,
        CopyFileOptions::default(),
    )
    .unwrap();


    link_path.assert_is_file_and_not_symlink();
    link_path.assert_file_content_equals(SimpleTree::HELLO_TXT_CONTENT);
    simple_harness
        .sub_abc_txt
        .assert_file_content_equals(SimpleTree::SUB_ABC_TXT_CONTENT);


    simple_harness.destroy();
    empty_harness.destroy();
    Ok(())
}
