/// Ascending bubble sort with the comparison baked in.
///
/// The starting point the comparator-driven sorts generalize: changing the direction here means
/// editing the loop, there it means passing a different function.
pub fn sort(v: &mut [i32]) {
    let len = v.len();

    for i in 0..len {
        for j in 0..(len - i - 1) {
            if v[j] > v[j + 1] {
                v.swap(j, j + 1);
            }
        }
    }
}
