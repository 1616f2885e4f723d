//! `Result` adapters for marking and classifying errors at call sites.

use std::error::Error as StdError;

use tracing::warn;

use crate::skippable::{is_skippable, SkippableError};

/// Mark the error side of a `Result` as skippable.
pub trait SkippableResultExt<T> {
    /// `Err(e)` becomes `Err(skippable(e))`; `Ok` passes through.
    fn skippable(self) -> Result<T, SkippableError>;
}

impl<T, E> SkippableResultExt<T> for Result<T, E>
where
    E: Into<anyhow::Error>,
{
    fn skippable(self) -> Result<T, SkippableError> {
        self.map_err(SkippableError::new)
    }
}

/// Classify the error side of a `Result`.
///
/// Implemented for any error that can be viewed as a boxed `std` error:
/// `anyhow::Error`, `Box<dyn Error + Send + Sync>` and [`SkippableError`].
pub trait ClassifyResultExt {
    /// `false` for `Ok`, otherwise [`is_skippable`] on the error.
    fn is_skippable_err(&self) -> bool;
}

impl<T, E> ClassifyResultExt for Result<T, E>
where
    E: AsRef<dyn StdError + Send + Sync + 'static>,
{
    fn is_skippable_err(&self) -> bool {
        match self {
            Ok(_) => false,
            Err(err) => is_skippable(err.as_ref()),
        }
    }
}

/// Turn a skippable failure into `Ok(None)`.
///
/// `Ok(v)` becomes `Ok(Some(v))` and non-skippable errors are returned
/// unchanged. A skipped failure is logged at `warn`.
///
/// This is an opt-in convenience and nothing in the crate calls it. Callers
/// that want a different log level or their own skip policy should match
/// on [`is_skippable`] themselves. Intended for loop bodies:
///
/// ```
/// # use errors::{continue_if_skippable, skippable};
/// # fn run(step: u32) -> anyhow::Result<u32> {
/// #     if step == 1 { Err(skippable(std::io::Error::other("busy")).into()) } else { Ok(step) }
/// # }
/// # fn main() -> anyhow::Result<()> {
/// let mut done = Vec::new();
/// for step in 0..3 {
///     let Some(out) = continue_if_skippable(run(step))? else { continue };
///     done.push(out);
/// }
/// assert_eq!(done, vec![0, 2]);
/// # Ok(())
/// # }
/// ```
pub fn continue_if_skippable<T>(result: anyhow::Result<T>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if is_skippable(&*err) => {
            warn!("skipping failure: {:#}", err);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}
