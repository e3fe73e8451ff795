sort_impl!("bubble_early_exit");

/// Same passes and swap condition as `naive::sort_by`, but returns after the first pass that
/// didn't swap anything.
///
/// Produces the same order as `naive::sort_by` for every input and comparator. On input that is
/// already in order it performs `len - 1` comparisons instead of `len * (len - 1) / 2`.
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 0..len {
        let mut swapped = false;

        for j in 0..(len - i - 1) {
            if compare(&v[j], &v[j + 1]) {
                v.swap(j, j + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }
}
