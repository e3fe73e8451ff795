sort_impl!("bubble_naive");

/// Bubble sort driven entirely by `compare`.
///
/// Runs `v.len()` passes unconditionally. Pass `i` walks the adjacent pairs `(j, j + 1)` for
/// `j < len - i - 1` and swaps a pair whenever `compare(&v[j], &v[j + 1])` returns `true`. That is
/// always `len * (len - 1) / 2` calls to `compare`, even if the input is already in order. See
/// `early_exit` for the variant that stops once a pass did nothing.
///
/// Only `slice::swap` touches `v`, so if `compare` panics `v` is left as some permutation of the
/// original elements.
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 0..len {
        // i < len, so this can't underflow.
        for j in 0..(len - i - 1) {
            if compare(&v[j], &v[j + 1]) {
                v.swap(j, j + 1);
            }
        }
    }
}
