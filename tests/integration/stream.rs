use std::io::Cursor;

use io_more::{error::StreamError, stream::TransferBuffer};
use io_more_test_harness::prelude::*;



#[test]
pub fn copy_transfers_whole_file() -> TestResult {
    let deep_harness = DeepTree::initialize();

    let mut file = std::fs::File::open(&deep_harness.foo_b_bin)?;
    let mut contents: Vec<u8> = Vec::new();


    let bytes_copied = io_more::stream::copy(&mut file, &mut contents).unwrap();


    assert_eq!(bytes_copied, DeepTree::foo_b_bin_content().len() as u64);
    assert_eq!(contents, DeepTree::foo_b_bin_content());


    deep_harness.destroy();
    Ok(())
}



#[test]
pub fn copy_range_skips_offset_and_limits_length() -> TestResult {
    let deep_harness = DeepTree::initialize();

    let mut file = std::fs::File::open(&deep_harness.a_bin)?;
    let mut contents: Vec<u8> = Vec::new();
    let mut buffer = TransferBuffer::<u8>::new(1000).unwrap();


    let bytes_copied = io_more::stream::copy_range_with_buffer(
        &mut file,
        &mut contents,
        10_000,
        Some(5_000),
        &mut buffer,
    )
    .unwrap();


    assert_eq!(bytes_copied, 5_000);
    assert_eq!(contents.as_slice(), &DeepTree::a_bin_content()[10_000..15_000]);


    deep_harness.destroy();
    Ok(())
}



#[test]
pub fn skip_fully_reports_short_source() {
    let mut source = Cursor::new(vec![0u8; 10]);

    assert_matches!(
        io_more::stream::skip_fully::<u8, _>(&mut source, 11),
        Err(StreamError::UnexpectedEndOfData {
            expected: 11,
            actual: 10
        })
    );
}



#[test]
pub fn content_equals_compares_open_files() -> TestResult {
    let deep_harness = DeepTree::initialize();
    let copy_harness = DeepTree::initialize();

    let mut first = std::fs::File::open(&deep_harness.foo_bar_c_bin)?;
    let mut second = std::fs::File::open(&copy_harness.foo_bar_c_bin)?;
    let mut different = std::fs::File::open(&copy_harness.a_bin)?;


    assert!(io_more::stream::content_equals(Some(&mut first), Some(&mut second)).unwrap());

    let mut first = std::fs::File::open(&deep_harness.foo_bar_c_bin)?;
    assert!(!io_more::stream::content_equals(Some(&mut first), Some(&mut different)).unwrap());


    deep_harness.destroy();
    copy_harness.destroy();
    Ok(())
}
