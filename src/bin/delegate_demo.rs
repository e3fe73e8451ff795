use std::fmt::Display;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use delegate_sort::compare::{self, Comparator};
use delegate_sort::predicate::{self, Predicate};
use delegate_sort::sort::{fixed_direction, naive};
use delegate_sort::{filter, patterns};

/// Sorts and filters lists with functions passed in as values, printing every list before and
/// after.
#[derive(Parser)]
#[command(name = "delegate_demo", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Walk through every sort and filter on the built-in lists (the default).
    Tour,

    /// Bubble sort integers with the greater-than or less-than comparator.
    SortInts {
        /// Inject the less-than comparator instead of greater-than.
        #[arg(long)]
        descending: bool,

        /// Append LEN random values in 1..=100.
        #[arg(long, value_name = "LEN")]
        random: Option<usize>,

        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Bubble sort strings, by content or by length.
    SortStrings {
        /// Inject the less-than comparator instead of greater-than.
        #[arg(long)]
        descending: bool,

        /// Compare string lengths only.
        #[arg(long)]
        by_length: bool,

        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Keep the integers a predicate accepts.
    FilterInts {
        #[arg(long, value_enum, required_unless_present = "multiple_of")]
        keep: Option<Parity>,

        #[arg(
            long,
            conflicts_with = "keep",
            value_name = "N",
            value_parser = clap::value_parser!(i64).range(1..)
        )]
        multiple_of: Option<i64>,

        /// Append LEN random values in 1..=100.
        #[arg(long, value_name = "LEN")]
        random: Option<usize>,

        #[arg(allow_negative_numbers = true)]
        values: Vec<i64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Parity {
    Odd,
    Even,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Tour) {
        Command::Tour => tour(),
        Command::SortInts {
            descending,
            random,
            values,
        } => {
            let v = with_random(values, random);
            let (title, compare) = direction::<i64>(descending);
            sort_step(&format!("sort {title}"), v, compare);
        }
        Command::SortStrings {
            descending,
            by_length,
            values,
        } => {
            let (title, compare) = if by_length {
                length_direction(descending)
            } else {
                direction::<String>(descending)
            };
            sort_step(&format!("sort {title}"), values, compare);
        }
        Command::FilterInts {
            keep,
            multiple_of,
            random,
            values,
        } => {
            let v = with_random(values, random);
            let (title, keep): (String, Predicate<i64>) = match (keep, multiple_of) {
                (_, Some(n)) => (
                    format!("multiple_of({n})"),
                    Box::new(predicate::multiple_of(n)),
                ),
                (Some(Parity::Even), None) => {
                    ("is_even".into(), Box::new(predicate::is_even::<i64>))
                }
                _ => ("is_odd".into(), Box::new(predicate::is_odd::<i64>)),
            };
            filter_step(&format!("filter {title}"), &v, keep);
        }
    }

    tracing::info!("done");
}

fn tour() {
    let mut v = patterns::walkthrough();
    let before = v.clone();
    fixed_direction::sort(&mut v);
    print_step("sort fixed ascending", &before, &v);

    sort_step(
        "sort greater_than",
        patterns::walkthrough(),
        Box::new(compare::greater_than::<i32>),
    );
    sort_step(
        "sort less_than",
        patterns::walkthrough(),
        Box::new(compare::less_than::<i32>),
    );

    let words = ["delegate", "fn", "closure", "pointer", "callback"]
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();
    sort_step(
        "sort by_key(len, greater_than)",
        words,
        Box::new(compare::by_key(|s: &String| s.len(), compare::greater_than)),
    );

    let counting = patterns::counting(10);
    filter_step("filter is_odd", &counting, Box::new(predicate::is_odd::<i32>));
    filter_step("filter is_even", &counting, Box::new(predicate::is_even::<i32>));
    filter_step(
        "filter multiple_of(3)",
        &counting,
        Box::new(predicate::multiple_of(3i32)),
    );
}

fn direction<'a, T>(descending: bool) -> (&'static str, Comparator<'a, T>)
where
    T: PartialOrd + 'a,
{
    if descending {
        ("less_than", Box::new(compare::less_than::<T>))
    } else {
        ("greater_than", Box::new(compare::greater_than::<T>))
    }
}

fn length_direction<'a>(descending: bool) -> (&'static str, Comparator<'a, String>) {
    if descending {
        (
            "by_key(len, less_than)",
            Box::new(compare::by_key(|s: &String| s.len(), compare::less_than)),
        )
    } else {
        (
            "by_key(len, greater_than)",
            Box::new(compare::by_key(|s: &String| s.len(), compare::greater_than)),
        )
    }
}

fn with_random(mut values: Vec<i64>, random: Option<usize>) -> Vec<i64> {
    if let Some(len) = random {
        tracing::debug!(len, seed = patterns::random_init_seed(), "appending random values");
        values.extend(patterns::random_uniform(len, 1..=100).into_iter().map(i64::from));
    }

    values
}

fn sort_step<T: Clone + Display>(title: &str, mut v: Vec<T>, compare: Comparator<T>) {
    tracing::debug!(title, len = v.len(), "sorting");

    let before = v.clone();
    naive::sort_by(&mut v, compare);

    print_step(title, &before, &v);
}

fn filter_step<T: Clone + Display>(title: &str, v: &[T], keep: Predicate<T>) {
    tracing::debug!(title, len = v.len(), "filtering");

    let kept = filter(v, keep);

    print_step(title, v, &kept);
}

fn print_step<T: Display>(title: &str, before: &[T], after: &[T]) {
    println!("== {title} ==");
    println!("before:");
    for elem in before {
        println!("{elem}");
    }
    println!("after:");
    for elem in after {
        println!("{elem}");
    }
    println!();
}
