use crate::error::{Error, Result};

pub mod early_exit;
pub mod fixed_direction;
pub mod naive;

/// Sorts `v` with `naive::sort_by`, or does nothing at all if either argument is absent.
///
/// Absent input is not an error here. The skip is only visible as a debug event, use `try_sort`
/// if the caller should find out.
pub fn sort_opt<T, F>(v: Option<&mut [T]>, compare: Option<F>)
where
    F: FnMut(&T, &T) -> bool,
{
    match (v, compare) {
        (Some(v), Some(compare)) => naive::sort_by(v, compare),
        (v, compare) => {
            tracing::debug!(
                sequence = v.is_some(),
                comparator = compare.is_some(),
                "sort skipped, input absent"
            );
        }
    }
}

/// Like `sort_opt`, but reports absent input. `v` is left untouched on error.
pub fn try_sort<T, F>(v: Option<&mut [T]>, compare: Option<F>) -> Result<()>
where
    F: FnMut(&T, &T) -> bool,
{
    let v = v.ok_or(Error::MissingSequence)?;
    let compare = compare.ok_or(Error::MissingComparator)?;

    naive::sort_by(v, compare);

    Ok(())
}
