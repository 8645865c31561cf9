use thiserror::Error;

/// Errors that can occur when drawing values from a recycling pool.
#[derive(Debug, Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// A value was requested but the pool contains no values at all, neither remaining nor used.
    ///
    /// The pool is left unchanged. Add values and try again.
    #[error("pool has 0 total elements")]
    Underflow,
}

/// A specialized `Result` type for recycling pool operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    #[test]
    fn underflow_is_error() {
        let result: Result<u32> = Err(Error::Underflow);

        let error = result.unwrap_err();
        assert_eq!(error, Error::Underflow);
        assert_eq!(error.to_string(), "pool has 0 total elements");
    }
}
