use std::path::Path;

use io_more::{
    directory::{CopyDirectoryFinished, CopyDirectoryOptions},
    error::CopyDirectoryError,
};
use io_more_test_harness::{prelude::*, trees::initialize_symbolic_link_to_file};



#[test]
pub fn copy_directory_creates_an_identical_copy() -> TestResult {
    let deep_harness = DeepTree::initialize();
    let empty_harness = EmptyTree::initialize();

    let destination_path = empty_harness.sub_path("copy");


    let finished_copy = io_more::directory::copy_directory(
        deep_harness.as_path(),
        &destination_path,
        CopyDirectoryOptions::default(),
    )
    .unwrap();


    assert_eq!(
        finished_copy,
        CopyDirectoryFinished {
            total_bytes_copied: DeepTree::TOTAL_SIZE_IN_BYTES,
            files_copied: DeepTree::TOTAL_FILE_COUNT,
            // The destination root is created as well.
            directories_created: DeepTree::TOTAL_DIRECTORY_COUNT + 1,
        }
    );

    destination_path.assert_is_directory_and_fully_matches_secondary_directory(deep_harness.as_path());


    deep_harness.destroy();
    empty_harness.destroy();
    Ok(())
}



#[test]
pub fn copy_directory_preserves_modification_times() -> TestResult {
    let simple_harness = SimpleTree::initialize();
    let empty_harness = EmptyTree::initialize();

    let old_time = filetime::FileTime::from_unix_time(1_000_000_000, 0);
    filetime::set_file_mtime(&simple_harness.hello_txt, old_time)?;
    filetime::set_file_mtime(&simple_harness.sub_abc_txt, old_time)?;
    filetime::set_file_mtime(&simple_harness.sub, old_time)?;

    let destination_path = empty_harness.sub_path("copy");


    let finished_copy = io_more::directory::copy_directory(
        simple_harness.as_path(),
        &destination_path,
        CopyDirectoryOptions::default(),
    )
    .unwrap();

    assert_eq!(finished_copy.total_bytes_copied, SimpleTree::TOTAL_SIZE_IN_BYTES);


    destination_path
        .sub_path("hello.txt")
        .assert_modified_time_matches(&simple_harness.hello_txt);
    destination_path
        .sub_path("sub")
        .assert_modified_time_matches(&simple_harness.sub);
    destination_path
        .sub_path("sub/abc.txt")
        .assert_modified_time_matches(&simple_harness.sub_abc_txt);
    destination_path.assert_modified_time_matches(simple_harness.as_path());


    simple_harness.destroy();
    empty_harness.destroy();
    Ok(())
}



#[test]
pub fn copy_directory_skips_subtrees_rejected_by_filter() -> TestResult {
    let deep_harness = DeepTree::initialize();
    let empty_harness = EmptyTree::initialize();

    let destination_path = empty_harness.sub_path("copy");

    let filter = |path: &Path| !path.ends_with("bar");


    let finished_copy = io_more::directory::copy_directory(
        deep_harness.as_path(),
        &destination_path,
        CopyDirectoryOptions {
            filter: Some(&filter),
            ..Default::default()
        },
    )
    .unwrap();


    assert_eq!(finished_copy.files_copied, 2);
    assert_eq!(
        finished_copy.total_bytes_copied,
        (DeepTree::a_bin_content().len() + DeepTree::foo_b_bin_content().len()) as u64
    );

    destination_path
        .sub_path("a.bin")
        .assert_file_content_equals(DeepTree::a_bin_content());
    destination_path
        .sub_path("foo/b.bin")
        .assert_file_content_equals(DeepTree::foo_b_bin_content());
    destination_path.sub_path("foo/bar").assert_not_exists();


    deep_harness.destroy();
    empty_harness.destroy();
    Ok(())
}



#[test]
pub fn copy_directory_merges_into_existing_destination() -> TestResult {
    let simple_harness = SimpleTree::initialize();
    let destination_harness = SimpleTree::initialize();

    std::fs::write(&destination_harness.hello_txt, b"outdated content")?;
    let unrelated_file_path = destination_harness.sub_path("unrelated.txt");
    std::fs::write(&unrelated_file_path, b"keep me")?;


    let finished_copy = io_more::directory::copy_directory(
        simple_harness.as_path(),
        destination_harness.as_path(),
        CopyDirectoryOptions::default(),
    )
    .unwrap();


    assert_eq!(finished_copy.files_copied, SimpleTree::TOTAL_FILE_COUNT);
    assert_eq!(finished_copy.directories_created, 0);

    destination_harness
        .hello_txt
        .assert_file_content_equals(SimpleTree::HELLO_TXT_CONTENT);
    unrelated_file_path.assert_file_content_equals("keep me");


    simple_harness.destroy();
    destination_harness.destroy();
    Ok(())
}



#[test]
pub fn copy_directory_merge_replaces_links_back_into_the_source() -> TestResult {
    let simple_harness = SimpleTree::initialize();
    let empty_harness = EmptyTree::initialize();

    let destination_path = empty_harness.sub_path("copy");
    std::fs::create_dir(&destination_path)?;

    let linked_file_path = destination_path.sub_path("hello.txt");
    initialize_symbolic_link_to_file(&linked_file_path, &simple_harness.hello_txt);

    let hard_linked_file_path = destination_path.sub_path("sub/abc.txt");
    std::fs::create_dir(destination_path.sub_path("sub"))?;
    std::fs::hard_link(&simple_harness.sub_abc_txt, &hard_linked_file_path)?;


    let finished_copy = io_more::directory::copy_directory(
        simple_harness.as_path(),
        &destination_path,
        CopyDirectoryOptions::default(),
    )
    .unwrap();


    assert_eq!(finished_copy.files_copied, SimpleTree::TOTAL_FILE_COUNT);

    simple_harness
        .hello_txt
        .assert_file_content_equals(SimpleTree::HELLO_TXT_CONTENT);
    simple_harness
        .sub_abc_txt
        .assert_file_content_equals(SimpleTree::SUB_ABC_TXT_CONTENT);

    linked_file_path.assert_is_file_and_not_symlink();
    linked_file_path.assert_file_content_equals(SimpleTree::HELLO_TXT_CONTENT);
    hard_linked_file_path.assert_file_content_equals(SimpleTree::SUB_ABC_TXT_CONTENT);


    simple_harness.destroy();
    empty_harness.destroy();
    Ok(())
}



#[test]
pub fn copy_directory_into_its_own_subdirectory_does_not_recurse() -> TestResult {
    let simple_harness = SimpleTree::initialize();

    let destination_path = simple_harness.sub.sub_path("backup");


    let finished_copy = io_more::directory::copy_directory(
        simple_harness.as_path(),
        &destination_path,
        CopyDirectoryOptions::default(),
    )
    .unwrap();


    assert_eq!(finished_copy.files_copied, SimpleTree::TOTAL_FILE_COUNT);

    destination_path
        .sub_path("hello.txt")
        .assert_file_content_equals(SimpleTree::HELLO_TXT_CONTENT);
    destination_path
        .sub_path("sub/abc.txt")
        .assert_file_content_equals(SimpleTree::SUB_ABC_TXT_CONTENT);
    destination_path.sub_path("sub/backup").assert_not_exists();


    simple_harness.destroy();
    Ok(())
}



#[test]
pub fn copy_directory_to_directory_keeps_the_directory_name() -> TestResult {
    let simple_harness = SimpleTree::initialize();
    let empty_harness = EmptyTree::initialize();


    io_more::directory::copy_directory_to_directory(
        &simple_harness.sub,
        empty_harness.as_path(),
        CopyDirectoryOptions::default(),
    )
    .unwrap();


    empty_harness
        .sub_path("sub/abc.txt")
        .assert_file_content_equals(SimpleTree::SUB_ABC_TXT_CONTENT);


    simple_harness.destroy();
    empty_harness.destroy();
    Ok(())
}



#[test]
pub fn copy_directory_rejects_invalid_arguments() -> TestResult {
    let simple_harness = SimpleTree::initialize();


    assert_matches!(
        io_more::directory::copy_directory(
            simple_harness.sub_path("missing"),
            simple_harness.sub_path("copy"),
            CopyDirectoryOptions::default(),
        ),
        Err(CopyDirectoryError::SourceDirectoryNotFound { .. })
    );

    assert_matches!(
        io_more::directory::copy_directory(
            &simple_harness.hello_txt,
            simple_harness.sub_path("copy"),
            CopyDirectoryOptions::default(),
        ),
        Err(CopyDirectoryError::SourceNotADirectory { .. })
    );

    assert_matches!(
        io_more::directory::copy_directory(
            &simple_harness.sub,
            &simple_harness.hello_txt,
            CopyDirectoryOptions::default(),
        ),
        Err(CopyDirectoryError::DestinationNotADirectory { .. })
    );

    assert_matches!(
        io_more::directory::copy_directory(
            &simple_harness.sub,
            &simple_harness.sub,
            CopyDirectoryOptions::default(),
        ),
        Err(CopyDirectoryError::SourceAndDestinationAreTheSame { .. })
    );

    assert_matches!(
        io_more::directory::copy_directory(
            &simple_harness.sub,
            simple_harness.sub_path("copy"),
            CopyDirectoryOptions {
                buffer_size: 0,
                ..Default::default()
            },
        ),
        Err(CopyDirectoryError::ZeroLengthBuffer)
    );

    simple_harness.sub_path("copy").assert_not_exists();


    simple_harness.destroy();
    Ok(())
}



#[test]
pub fn copy_directory_counts_every_created_ancestor() -> TestResult {
    let simple_harness = SimpleTree::initialize();
    let empty_harness = EmptyTree::initialize();

    let destination_path = empty_harness.sub_path("a/b/copy");


    let finished_copy = io_more::directory::copy_directory(
        simple_harness.as_path(),
        &destination_path,
        CopyDirectoryOptions::default(),
    )
    .unwrap();


    // "a", "a/b", "a/b/copy" and "a/b/copy/sub".
    assert_eq!(finished_copy.directories_created, 4);
    destination_path
        .sub_path("sub/abc.txt")
        .assert_file_content_equals(SimpleTree::SUB_ABC_TXT_CONTENT);


    simple_harness.destroy();
    empty_harness.destroy();
    Ok(())
}
