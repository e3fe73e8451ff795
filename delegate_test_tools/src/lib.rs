//! Property tests shared by every `delegate_sort::Sort` implementation.
//!
//! ```ignore
//! delegate_test_tools::instantiate_sort_tests!(delegate_sort::sort::naive::SortImpl, naive);
//! ```

#[doc(hidden)]
pub use paste;

pub mod types;
