use io_more::error::FileError;
use io_more_test_harness::prelude::*;



#[test]
pub fn content_equals_compares_file_contents() -> TestResult {
    let simple_harness = SimpleTree::initialize();
    let empty_harness = EmptyTree::initialize();

    let same_content_path = empty_harness.sub_path("same.txt");
    std::fs::write(&same_content_path, SimpleTree::HELLO_TXT_CONTENT)?;

    let same_length_path = empty_harness.sub_path("same-length.txt");
    std::fs::write(&same_length_path, "jello")?;


    assert!(io_more::file::content_equals(&simple_harness.hello_txt, &same_content_path).unwrap());
    assert!(!io_more::file::content_equals(&simple_harness.hello_txt, &same_length_path).unwrap());
    assert!(
        !io_more::file::content_equals(&simple_harness.hello_txt, &simple_harness.sub_abc_txt)
            .unwrap()
    );
    assert!(
        io_more::file::content_equals(&simple_harness.hello_txt, &simple_harness.hello_txt).unwrap()
    );


    simple_harness.destroy();
    empty_harness.destroy();
    Ok(())
}



#[test]
pub fn content_equals_handles_missing_files_and_directories() -> TestResult {
    let simple_harness = SimpleTree::initialize();

    let missing_a = simple_harness.sub_path("missing-a.txt");
    let missing_b = simple_harness.sub_path("missing-b.txt");


    assert!(io_more::file::content_equals(&missing_a, &missing_b).unwrap());
    assert!(!io_more::file::content_equals(&simple_harness.hello_txt, &missing_b).unwrap());

    assert_matches!(
        io_more::file::content_equals(&simple_harness.sub, &simple_harness.hello_txt),
        Err(FileError::SourcePathNotAFile { .. })
    );


    simple_harness.destroy();
    Ok(())
}
