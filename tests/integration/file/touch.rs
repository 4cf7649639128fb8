use filetime::FileTime;
use io_more_test_harness::prelude::*;



#[test]
pub fn touch_creates_missing_file_and_parents() -> TestResult {
    let empty_harness = EmptyTree::initialize();

    let file_path = empty_harness.sub_path("a/b/touched.txt");


    io_more::file::touch(&file_path).unwrap();


    file_path.assert_is_file_and_not_symlink();
    file_path.assert_file_content_equals(b"");


    empty_harness.destroy();
    Ok(())
}



#[test]
pub fn touch_updates_modification_time_but_not_contents() -> TestResult {
    let simple_harness = SimpleTree::initialize();

    let old_time = FileTime::from_unix_time(1_000_000_000, 0);
    filetime::set_file_mtime(&simple_harness.hello_txt, old_time)?;


    io_more::file::touch(&simple_harness.hello_txt).unwrap();


    let new_time =
        FileTime::from_last_modification_time(&std::fs::metadata(&simple_harness.hello_txt)?);
    assert!(new_time > old_time);

    simple_harness
        .hello_txt
        .assert_file_content_equals(SimpleTree::HELLO_TXT_CONTENT);


    simple_harness.destroy();
    Ok(())
}
