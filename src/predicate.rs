//! Predicates for `filter` and friends. `true` keeps the element.

use std::ops::Rem;

/// A predicate stored as a value, eg. picked at runtime.
pub type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;

#[inline]
pub fn is_even<T>(v: &T) -> bool
where
    T: Copy + PartialEq + Rem<Output = T> + From<u8>,
{
    *v % T::from(2) == T::from(0)
}

#[inline]
pub fn is_odd<T>(v: &T) -> bool
where
    T: Copy + PartialEq + Rem<Output = T> + From<u8>,
{
    !is_even(v)
}

/// Keeps multiples of `n`. Zero is the only multiple of zero.
pub fn multiple_of<T>(n: T) -> impl Fn(&T) -> bool
where
    T: Copy + PartialEq + Rem<Output = T> + From<u8>,
{
    let zero = T::from(0);

    move |v: &T| {
        if n == zero {
            *v == zero
        } else {
            *v % n == zero
        }
    }
}
