//! Input generators for tests, benchmarks and the demo.
//! Currently limited to i32 values.
//!
//! All random patterns draw from one seed per process, so a failure can be replayed by setting
//! `OVERRIDE_SEED` to the seed the test harness printed.

use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::prelude::*;

// --- Public ---

/// The list the delegate walkthrough sorts.
pub fn walkthrough() -> Vec<i32> {
    vec![7, 2, 9, 6, 1, 4, 5, 3, 10, 8]
}

/// `1..=len`, the list the delegate walkthrough filters.
pub fn counting(len: usize) -> Vec<i32> {
    (1..=len as i32).collect()
}

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_rng();

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..len).map(|_| 66).collect::<Vec<_>>()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect::<Vec<_>>()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect::<Vec<_>>()
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut vals = random(len);
    let chunk_len = (len / saw_count.max(1)).max(1);
    let saw_directions = random_uniform((len / chunk_len) + 1, 0..=1);

    for (i, chunk) in vals.chunks_mut(chunk_len).enumerate() {
        if saw_directions[i] == 0 {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random(len);

    let first_half = &mut vals[0..(len / 2)];
    first_half.sort();

    let second_half = &mut vals[(len / 2)..len];
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

/// Makes every call to a random pattern yield new values, instead of the same values per process.
///
/// Meant for benchmarks, has no effect if `OVERRIDE_SEED` is set.
pub fn use_random_seed_each_time() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    let seed = *SEED.get_or_init(|| override_seed().unwrap_or_else(|| thread_rng().gen()));

    if USE_FIXED_SEED.load(Ordering::Acquire) || override_seed().is_some() {
        seed
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

fn override_seed() -> Option<u64> {
    let raw = env::var("OVERRIDE_SEED").ok()?;

    match u64::from_str(raw.trim()) {
        Ok(seed) => Some(seed),
        Err(err) => {
            tracing::warn!(%raw, %err, "ignoring OVERRIDE_SEED, not a u64");
            None
        }
    }
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
