use io_more::error::DirectorySizeError;
use io_more_test_harness::prelude::*;



#[test]
pub fn directory_size_matches_tree_size() -> TestResult {
    let simple_harness = SimpleTree::initialize();
    let deep_harness = DeepTree::initialize();


    assert_eq!(
        io_more::directory::directory_size_in_bytes(simple_harness.as_path()).unwrap(),
        SimpleTree::TOTAL_SIZE_IN_BYTES
    );

    assert_eq!(
        io_more::directory::directory_size_in_bytes(deep_harness.as_path()).unwrap(),
        DeepTree::TOTAL_SIZE_IN_BYTES
    );

    assert_eq!(
        io_more::directory::directory_size_in_bytes_exact(deep_harness.as_path()).unwrap(),
        u128::from(DeepTree::TOTAL_SIZE_IN_BYTES)
    );


    simple_harness.destroy();
    deep_harness.destroy();
    Ok(())
}



#[test]
pub fn directory_size_of_copy_matches_source() -> TestResult {
    let deep_harness = DeepTree::initialize();
    let empty_harness = EmptyTree::initialize();

    let destination_path = empty_harness.sub_path("copy");


    io_more::directory::copy_directory(
        deep_harness.as_path(),
        &destination_path,
        Default::default(),
    )
    .unwrap();


    assert_eq!(
        io_more::directory::directory_size_in_bytes(&destination_path).unwrap(),
        io_more::directory::directory_size_in_bytes(deep_harness.as_path()).unwrap()
    );


    deep_harness.destroy();
    empty_harness.destroy();
    Ok(())
}



#[test]
pub fn directory_size_requires_existing_directory() -> TestResult {
    let empty_harness = EmptyTree::initialize();


    assert_matches!(
        io_more::directory::directory_size_in_bytes(empty_harness.sub_path("missing")),
        Err(DirectorySizeError::NotFound { .. })
    );


    empty_harness.destroy();
    Ok(())
}
