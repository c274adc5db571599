//! Resolution errors.

use thiserror::Error;

/// The styling attribute a resolution was asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Font,
    FontSize,
    TextColor,
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Attribute::Font => "font",
            Attribute::FontSize => "font size",
            Attribute::TextColor => "text color",
        };
        f.write_str(name)
    }
}

/// Error returned when neither the element nor any parent provides a value.
///
/// Resolution is otherwise total; this is the crate's single failure mode.
/// Callers that guarantee a root default (the usual arrangement, since
/// [`PlotModel`] answers every attribute) will never see it.
///
/// [`PlotModel`]: crate::PlotModel
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("no default available for {attribute}")]
    NoDefault { attribute: Attribute },
}
