//! `errors` crate — the skippable-error marker.
//!
//! A producer that hits a failure the caller may safely continue past wraps
//! it with [`skippable`]. The message is left untouched. Further up the stack
//! the caller asks [`is_skippable`], which walks the `source()` chain looking
//! for the marker, and decides for itself what "continue" means.
//!
//! ```
//! use anyhow::Context;
//! use errors::{continue_if_skippable, is_skippable, skippable};
//!
//! let marked = skippable(std::io::Error::other("disk full"));
//! assert_eq!(marked.to_string(), "disk full");
//!
//! let err = anyhow::Error::new(marked).context("during step 2");
//! assert!(is_skippable(&*err));
//!
//! let step: anyhow::Result<u32> = Err(err);
//! assert!(continue_if_skippable(step).unwrap().is_none());
//! ```

mod skippable;
mod ext;

pub use skippable::{is_skippable, skippable, SkippableError};
pub use ext::{continue_if_skippable, ClassifyResultExt, SkippableResultExt};
