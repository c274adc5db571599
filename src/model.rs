//! The parent side of style resolution.

use crate::color::Color;
use crate::culture::Culture;

/// Read-only view of a parent's default styling values.
///
/// Elements never own or store their parent; the owning container passes
/// itself (or any other context) by reference at resolution time. This
/// keeps the parent relation non-owning and cycle-free.
///
/// Implementations should answer with concrete values wherever they can:
/// a `None` (or an automatic color) means "no default here", which turns
/// into a [`ResolveError`] for the attribute being resolved.
///
/// [`ResolveError`]: crate::ResolveError
pub trait StyleContext {
    /// The font family used when an element has no font override.
    fn default_font(&self) -> Option<&str>;

    /// The font size used when an element has no size override.
    fn default_font_size(&self) -> Option<f64>;

    /// The resolved text color automatic element colors defer to.
    fn text_color(&self) -> Option<Color>;

    /// The culture for text formatting, if this context has an opinion.
    fn culture(&self) -> Option<&Culture>;
}

/// Stock [`StyleContext`]: the defaults a plot model hands its elements.
///
/// # Example
///
/// ```rust
/// use underplot::{PlotModel, StyledElement};
///
/// let model = PlotModel::new()
///     .with_default_font("Helvetica")
///     .with_default_font_size(12.0);
///
/// let label = StyledElement::new();
/// assert_eq!(label.resolved_font(Some(&model)).unwrap(), "Helvetica");
/// ```
#[derive(Debug, Clone)]
pub struct PlotModel {
    default_font: String,
    default_font_size: f64,
    text_color: Color,
    culture: Option<Culture>,
}

impl PlotModel {
    /// Creates a model with stock defaults: a sans-serif family, 12 point
    /// text, black foreground, no explicit culture.
    pub fn new() -> PlotModel {
        PlotModel {
            default_font: "sans-serif".to_string(),
            default_font_size: 12.0,
            text_color: Color::BLACK,
            culture: None,
        }
    }

    pub fn with_default_font(mut self, font: impl Into<String>) -> Self {
        self.default_font = font.into();
        self
    }

    pub fn with_default_font_size(mut self, size: f64) -> Self {
        self.default_font_size = size;
        self
    }

    /// Sets the model-level text color. An automatic value here resolves
    /// to black so elements always see a concrete color.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn with_culture(mut self, culture: Culture) -> Self {
        self.culture = Some(culture);
        self
    }
}

impl Default for PlotModel {
    fn default() -> Self {
        PlotModel::new()
    }
}

impl StyleContext for PlotModel {
    fn default_font(&self) -> Option<&str> {
        Some(&self.default_font)
    }

    fn default_font_size(&self) -> Option<f64> {
        Some(self.default_font_size)
    }

    fn text_color(&self) -> Option<Color> {
        Some(self.text_color.or(Color::BLACK))
    }

    fn culture(&self) -> Option<&Culture> {
        self.culture.as_ref()
    }
}
