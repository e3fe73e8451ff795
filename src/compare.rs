//! Comparators for `Sort::sort_by` and friends.
//!
//! A comparator answers "should these two adjacent elements be swapped". With the bubble sorts in
//! this crate `greater_than` yields ascending order and `less_than` descending order.

/// A comparator stored as a value, eg. picked at runtime.
pub type Comparator<'a, T> = Box<dyn Fn(&T, &T) -> bool + 'a>;

#[inline]
pub fn greater_than<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a > b
}

#[inline]
pub fn less_than<T: PartialOrd + ?Sized>(a: &T, b: &T) -> bool {
    a < b
}

/// Lifts a comparator on a derived key into a comparator on the whole element.
///
/// `by_key(|s: &String| s.len(), greater_than)` orders strings by ascending length, ignoring
/// their content.
pub fn by_key<T, K, KF, C>(key: KF, compare: C) -> impl Fn(&T, &T) -> bool
where
    T: ?Sized,
    KF: Fn(&T) -> K,
    C: Fn(&K, &K) -> bool,
{
    move |a: &T, b: &T| {
        let key_a = key(a);
        let key_b = key(b);

        compare(&key_a, &key_b)
    }
}
