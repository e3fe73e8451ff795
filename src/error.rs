use thiserror::Error;

/// Returned by the strict entry points when a required argument is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("no sequence was supplied")]
    MissingSequence,
    #[error("no comparator was supplied")]
    MissingComparator,
    #[error("no predicate was supplied")]
    MissingPredicate,
}

pub type Result<T> = std::result::Result<T, Error>;
