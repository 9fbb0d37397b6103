pub mod aggregate;
pub mod engine;
pub mod normalize;
pub mod options;
pub mod paginate;
pub mod predicate;
pub mod raw;
pub mod sort;

#[cfg(test)]
mod options_test;

pub use aggregate::Summary;
pub use engine::QueryEngine;
pub use normalize::{CanonicalQuery, normalize};
pub use options::FilterOptions;
pub use paginate::ResultPage;
pub use raw::RawQuery;
pub use sort::{SortKey, SortOrder};
