//! The styled element and its resolution machinery.
//!
//! This module provides:
//!
//! - [`StyledElement`]: the shared styling attributes of a plot element
//! - [`ResolveError`] / [`Attribute`]: the missing-default failure mode
//! - [`Structural`]: explicit, ordered structural hashing
//!
//! Resolution is pull-based: elements store only their own overrides and
//! are handed a [`StyleContext`](crate::StyleContext) when an effective
//! value is needed.

#[allow(clippy::module_inception)]
mod element;
mod error;
mod hash;

pub use element::StyledElement;
pub use error::{Attribute, ResolveError};
pub use hash::{hash_f64, hash_opt_f64, hash_tag, Structural};
