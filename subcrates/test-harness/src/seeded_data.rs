/// Expands to a randomly generated (seeded) [`Vec<u8>`] (runtime-generated).
///
/// ## Examples
/// To generate 16 KiB of random data with the seed `37510903939111`:
///
/// ```rust
/// # use io_more_test_harness::generate_seeded_binary_data;
/// let data: Vec<u8> = generate_seeded_binary_data!(
///     1024 * 16,
///     37510903939111
/// );
/// ```
#[macro_export]
macro_rules! generate_seeded_binary_data {
    ($file_size_bytes:expr, $seed:expr) => {{
        use rand::distributions::Standard;
        use rand::Rng;
        use rand_chacha::rand_core::SeedableRng;

        const SIZE_IN_BYTES: usize = $file_size_bytes;
        const SEED: u64 = $seed;

        let random_generator = rand_chacha::ChaCha20Rng::seed_from_u64(SEED);

        let mut __data: Vec<u8> = Vec::with_capacity(SIZE_IN_BYTES);

        __data.extend(
            random_generator
                .sample_iter::<u8, _>(Standard)
                .take(SIZE_IN_BYTES),
        );

        __data
    }};
}

/// Expands to a *lazily* randomly generated (seeded) [`Vec<u8>`].
///
/// The data is generated on first access, see [`generate_seeded_binary_data`].
#[macro_export]
macro_rules! lazy_generate_seeded_binary_data {
    ($file_size_bytes:expr, $seed:expr) => {
        once_cell::sync::Lazy::new(|| $crate::generate_seeded_binary_data!($file_size_bytes, $seed))
    };
}
