use crate::error::{Error, Result};

/// Returns clones of the elements of `v` for which `predicate` returns `true`, in input order.
///
/// `predicate` is called exactly once per element, front to back. `v` is not modified.
pub fn filter<T, P>(v: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let mut kept = Vec::new();

    for elem in v {
        if predicate(elem) {
            kept.push(elem.clone());
        }
    }

    kept
}

/// Same as `filter` but borrows the kept elements, so `T` doesn't have to be `Clone`.
pub fn filter_ref<'a, T, P>(v: &'a [T], mut predicate: P) -> Vec<&'a T>
where
    P: FnMut(&T) -> bool,
{
    let mut kept = Vec::new();

    for elem in v {
        if predicate(elem) {
            kept.push(elem);
        }
    }

    kept
}

/// `filter`, or an empty `Vec` if either argument is absent.
pub fn filter_opt<T, P>(v: Option<&[T]>, predicate: Option<P>) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    match (v, predicate) {
        (Some(v), Some(predicate)) => filter(v, predicate),
        (v, predicate) => {
            tracing::debug!(
                sequence = v.is_some(),
                predicate = predicate.is_some(),
                "filter skipped, input absent"
            );

            Vec::new()
        }
    }
}

/// Like `filter_opt`, but reports absent input.
pub fn try_filter<T, P>(v: Option<&[T]>, predicate: Option<P>) -> Result<Vec<T>>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    let v = v.ok_or(Error::MissingSequence)?;
    let predicate = predicate.ok_or(Error::MissingPredicate)?;

    Ok(filter(v, predicate))
}
