use std::cell::RefCell;

use delegate_sort::predicate::{is_even, is_odd, multiple_of, Predicate};
use delegate_sort::{filter, filter_opt, filter_ref, patterns, try_filter, Error};

const TEST_SIZES: [usize; 12] = [0, 1, 2, 3, 4, 7, 8, 15, 33, 100, 500, 1_000];

// Oracle, the stdlib iterator filter.
fn expected_filter<T: Clone>(v: &[T], mut predicate: impl FnMut(&T) -> bool) -> Vec<T> {
    v.iter().filter(|elem| predicate(*elem)).cloned().collect()
}

fn is_subsequence<T: PartialEq>(sub: &[T], full: &[T]) -> bool {
    let mut full_iter = full.iter();
    sub.iter().all(|elem| full_iter.any(|candidate| candidate == elem))
}

#[test]
fn counting_examples() {
    let v = patterns::counting(10);

    assert_eq!(filter(&v, is_odd), [1, 3, 5, 7, 9]);
    assert_eq!(filter(&v, is_even), [2, 4, 6, 8, 10]);
    assert_eq!(filter(&v, multiple_of(3)), [3, 6, 9]);

    // Input is untouched.
    assert_eq!(v, patterns::counting(10));
}

#[test]
fn keeps_exactly_matching_in_order() {
    let predicates: [fn(&i32) -> bool; 4] = [is_odd, is_even, |val| *val < 0, |_| false];

    for keep in predicates {
        for test_size in TEST_SIZES {
            let v = patterns::random(test_size);
            let kept = filter(&v, keep);

            assert_eq!(kept, expected_filter(&v, keep));
            assert!(kept.len() <= v.len());
            assert!(kept.iter().all(keep));
            assert!(is_subsequence(&kept, &v));
        }
    }
}

#[test]
fn keep_everything() {
    for test_size in TEST_SIZES {
        let v = patterns::saw_mixed(test_size, 4);
        assert_eq!(filter(&v, |_| true), v);
    }
}

#[test]
fn idempotent() {
    for test_size in TEST_SIZES {
        let v = patterns::random_uniform(test_size, -50..=50);
        let keep = multiple_of(4);

        let once = filter(&v, &keep);
        let twice = filter(&once, &keep);

        assert_eq!(once, twice);
    }
}

#[test]
fn predicate_called_once_per_element_in_order() {
    let v = patterns::random_uniform(64, 0..=9);
    let seen = RefCell::new(Vec::new());

    let kept = filter(&v, |val| {
        seen.borrow_mut().push(*val);
        *val > 4
    });

    assert_eq!(seen.into_inner(), v);
    assert_eq!(kept, expected_filter(&v, |val| *val > 4));
}

#[test]
fn empty_input() {
    let v: Vec<i32> = Vec::new();

    assert!(filter(&v, is_odd).is_empty());
    assert!(filter_ref(&v, is_odd).is_empty());
}

#[test]
fn filter_ref_without_clone() {
    struct Ticket {
        id: u32,
        open: bool,
    }

    let tickets = (0..10)
        .map(|id| Ticket {
            id,
            open: id % 3 != 0,
        })
        .collect::<Vec<_>>();

    let open = filter_ref(&tickets, |ticket| ticket.open);
    let ids = open.iter().map(|ticket| ticket.id).collect::<Vec<_>>();

    assert_eq!(ids, [1, 2, 4, 5, 7, 8]);
    assert!(std::ptr::eq(open[0], &tickets[1]));
}

#[test]
fn strings_by_length() {
    let words = ["delegate", "fn", "closure", "pointer", "callback", "map"]
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();

    let short = filter(&words, |word| word.len() <= 3);
    assert_eq!(short, ["fn", "map"]);
}

#[test]
fn boxed_predicates() {
    let v = patterns::counting(12);

    let predicates: Vec<(Predicate<i32>, Vec<i32>)> = vec![
        (Box::new(is_odd::<i32>), vec![1, 3, 5, 7, 9, 11]),
        (Box::new(multiple_of(4i32)), vec![4, 8, 12]),
        (Box::new(|val: &i32| *val > 10), vec![11, 12]),
    ];

    for (keep, expected) in predicates {
        assert_eq!(filter(&v, keep), expected);
    }
}

#[test]
fn filter_opt_absent_is_empty() {
    let v = patterns::counting(10);

    assert_eq!(filter_opt(Some(v.as_slice()), Some(is_even::<i32>)), [2, 4, 6, 8, 10]);
    assert!(filter_opt(Some(v.as_slice()), None::<fn(&i32) -> bool>).is_empty());
    assert!(filter_opt(None::<&[i32]>, Some(is_even::<i32>)).is_empty());
    assert!(filter_opt(None::<&[i32]>, None::<fn(&i32) -> bool>).is_empty());

    let empty: [i32; 0] = [];
    assert!(filter_opt(Some(&empty[..]), Some(is_even::<i32>)).is_empty());
}

#[test]
fn try_filter_reports_absent_input() {
    let v = patterns::counting(10);

    assert_eq!(try_filter(Some(v.as_slice()), Some(multiple_of(5))), Ok(vec![5, 10]));
    assert_eq!(
        try_filter(Some(v.as_slice()), None::<fn(&i32) -> bool>),
        Err(Error::MissingPredicate)
    );
    assert_eq!(
        try_filter(None::<&[i32]>, Some(is_odd::<i32>)),
        Err(Error::MissingSequence)
    );
}
