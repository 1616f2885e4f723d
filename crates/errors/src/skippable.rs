//! The skippable marker and the chain-walking classifier.

use std::error::Error as StdError;
use std::fmt::{Debug, Display};
use std::io;

use thiserror::Error;

/// An error the caller may continue past instead of aborting.
///
/// The marker adds no text of its own: `Display` is the wrapped error's
/// message and `source()` is the wrapped error's source, so reports that
/// print the whole chain are unchanged by marking. What it does add is a
/// concrete type that [`is_skippable`] can find anywhere in a chain.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct SkippableError(#[from] anyhow::Error);

impl SkippableError {
    /// Mark `err` as skippable.
    ///
    /// Accepts any `std` error as well as an `anyhow::Error` that already
    /// carries context.
    pub fn new(err: impl Into<anyhow::Error>) -> Self {
        Self(err.into())
    }

    /// The wrapped error.
    pub fn inner(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.0
    }

    /// Drop the marker and hand back the wrapped error.
    pub fn into_inner(self) -> anyhow::Error {
        self.0
    }

    /// Downcast the wrapped error, with the same rules as
    /// [`anyhow::Error::downcast_ref`].
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Display + Debug + Send + Sync + 'static,
    {
        self.0.downcast_ref::<E>()
    }
}

impl AsRef<dyn StdError + Send + Sync + 'static> for SkippableError {
    fn as_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self
    }
}

/// Mark `err` as skippable. Shorthand for [`SkippableError::new`].
pub fn skippable(err: impl Into<anyhow::Error>) -> SkippableError {
    SkippableError::new(err)
}

/// Whether `err`, or anything in its `source()` chain, is a
/// [`SkippableError`].
///
/// An `io::Error` built around a custom error hides that error from
/// `source()`, so the walk steps into it through `io::Error::get_ref`.
/// The walk ends when a node reports no cause.
pub fn is_skippable(err: &(dyn StdError + 'static)) -> bool {
    std::iter::successors(Some(err), |&e| cause(e)).any(|e| e.is::<SkippableError>())
}

fn cause<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a (dyn StdError + 'static)> {
    match err.downcast_ref::<io::Error>().and_then(io::Error::get_ref) {
        Some(inner) => Some(inner as &(dyn StdError + 'static)),
        None => err.source(),
    }
}
