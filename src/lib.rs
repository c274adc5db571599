//! Shared styling attributes and fallback resolution for 2-D plot elements.
//!
//! Every element of a plot (titles, axis labels, annotations, legends)
//! carries the same handful of styling attributes: font, font size, font
//! weight, text color, tooltip, and an opaque tag. `underplot` owns that
//! attribute set and the rules for turning it into effective values:
//!
//! - **Override then fallback.** An attribute set on the element wins; an
//!   unset one resolves from the parent [`PlotModel`] (any [`StyleContext`])
//!   passed at resolution time. Only when both sides are silent does
//!   resolution fail, with a typed [`ResolveError`].
//! - **Automatic colors.** [`Color::Automatic`] is the explicit
//!   defer-to-parent sentinel; concrete colors pass through untouched.
//! - **Structural hashing.** [`Structural`] hashes an explicit, ordered
//!   field list deterministically, for change detection over element trees.
//! - **Culture-aware formatting.** [`StyledElement::format`] renders
//!   minijinja templates with number filters bound to the element's
//!   resolved [`Culture`].
//!
//! # Example
//!
//! ```rust
//! use underplot::{Color, PlotModel, StyledElement};
//! use serde_json::json;
//!
//! let model = PlotModel::new()
//!     .with_default_font("Helvetica")
//!     .with_default_font_size(12.0);
//!
//! let annotation = StyledElement::new()
//!     .with_text_color(Color::RED)
//!     .with_tooltip("peak load");
//!
//! assert_eq!(annotation.resolved_font(Some(&model)).unwrap(), "Helvetica");
//! assert_eq!(annotation.resolved_text_color(Some(&model)).unwrap(), Color::RED);
//!
//! let label = annotation
//!     .format(Some(&model), "peak: {{ y | num(1) }}", &json!({"y": 1532.25}))
//!     .unwrap();
//! assert_eq!(label, "peak: 1,532.2");
//! ```
//!
//! Elements are plain owned values for single-owner use; the owning
//! container serialises access. The one piece of process state, the
//! current culture behind [`current_culture`], sits behind a mutex.

mod color;
mod culture;
mod element;
mod font;
mod format;
mod model;

pub use color::{Color, ColorParseError};
pub use culture::{current_culture, set_current_culture, Culture};
pub use element::{
    hash_f64, hash_opt_f64, hash_tag, Attribute, ResolveError, Structural, StyledElement,
};
pub use font::FontWeight;
pub use format::CultureFormatter;
pub use model::{PlotModel, StyleContext};
