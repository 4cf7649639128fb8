pub mod assertable;
pub mod error;
pub mod prelude;
pub mod trees;

mod path_comparison;
mod seeded_data;

pub use assert_matches::assert_matches;
pub use path_comparison::*;
