/// Uniform surface over the sort variants, so tests and benches can be written once.
///
/// `compare` returns `true` if the two adjacent elements should be swapped. A greater-than style
/// comparator therefore yields ascending order and a less-than style comparator descending order.
pub trait Sort {
    fn name() -> String;

    fn sort_by<T, F>(v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> bool;

    /// Ascending order, the greater-than comparator is still injected like any other.
    #[inline]
    fn sort<T>(v: &mut [T])
    where
        T: Ord,
    {
        Self::sort_by(v, compare::greater_than::<T>);
    }
}

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort_by<T, F>(v: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> bool,
            {
                sort_by(v, compare);
            }
        }
    };
}

pub mod compare;
pub mod error;
pub mod filter;
pub mod patterns;
pub mod predicate;
pub mod sort;

pub use error::{Error, Result};
pub use filter::{filter, filter_opt, filter_ref, try_filter};
pub use sort::{sort_opt, try_sort};
