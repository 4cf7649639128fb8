use std::hash::Hasher;

use io_more::error::FileError;
use io_more_test_harness::prelude::*;



#[test]
pub fn crc32_matches_known_check_value() -> TestResult {
    let empty_harness = EmptyTree::initialize();

    let file_path = empty_harness.sub_path("check.txt");
    std::fs::write(&file_path, "123456789")?;


    assert_eq!(io_more::file::crc32(&file_path).unwrap(), 0xCBF4_3926);


    empty_harness.destroy();
    Ok(())
}



#[test]
pub fn checksum_feeds_every_byte_to_the_hasher() -> TestResult {
    let deep_harness = DeepTree::initialize();


    let mut file_hasher = std::collections::hash_map::DefaultHasher::new();
    let file_checksum = io_more::file::checksum(&deep_harness.foo_b_bin, &mut file_hasher).unwrap();

    let mut expected_hasher = std::collections::hash_map::DefaultHasher::new();
    expected_hasher.write(DeepTree::foo_b_bin_content());


    assert_eq!(file_checksum, expected_hasher.finish());


    deep_harness.destroy();
    Ok(())
}



#[test]
pub fn checksum_requires_a_file() -> TestResult {
    let simple_harness = SimpleTree::initialize();


    assert_matches!(
        io_more::file::crc32(&simple_harness.sub),
        Err(FileError::SourcePathNotAFile { .. })
    );
    assert_matches!(
        io_more::file::crc32(simple_harness.sub_path("missing.txt")),
        Err(FileError::SourceFileNotFound { .. })
    );


    simple_harness.destroy();
    Ok(())
}
