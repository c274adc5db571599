//! The shared styling attributes of a plot element.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{Attribute, ResolveError};
use super::hash::{hash_opt_f64, hash_tag, Structural};
use crate::color::Color;
use crate::culture::{current_culture, Culture};
use crate::font::FontWeight;
use crate::format::CultureFormatter;
use crate::model::StyleContext;

/// Per-element styling overrides with fallback resolution.
///
/// Every attribute starts unset (or automatic, for the color): a fresh
/// element has no styling opinions and inherits everything from whatever
/// [`StyleContext`] is passed at resolution time. Setting an attribute
/// makes it an override that wins over any parent default.
///
/// # Example
///
/// ```rust
/// use underplot::{Color, PlotModel, StyledElement};
///
/// let model = PlotModel::new().with_default_font("Helvetica");
///
/// let title = StyledElement::new()
///     .with_font_size(18.0)
///     .with_text_color(Color::parse("#333333").unwrap());
///
/// // Size and color come from the element, the font from the model.
/// assert_eq!(title.resolved_font_size(Some(&model)).unwrap(), 18.0);
/// assert_eq!(title.resolved_font(Some(&model)).unwrap(), "Helvetica");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyledElement {
    font: Option<String>,
    font_size: Option<f64>,
    font_weight: FontWeight,
    text_color: Color,
    tooltip: Option<String>,
    tag: Option<Value>,
}

impl StyledElement {
    /// Creates an element with every override unset.
    pub fn new() -> StyledElement {
        StyledElement::default()
    }

    // Fluent builders, for construction sites.

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }

    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Attaches an opaque user payload. The element never interprets it.
    pub fn with_tag(mut self, tag: Value) -> Self {
        self.tag = Some(tag);
        self
    }

    // Mutators, for the owning container. Passing `None` clears the
    // override and restores inheritance.

    pub fn set_font(&mut self, font: Option<String>) {
        self.font = font;
    }

    pub fn set_font_size(&mut self, size: Option<f64>) {
        self.font_size = size;
    }

    pub fn set_font_weight(&mut self, weight: FontWeight) {
        self.font_weight = weight;
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    pub fn set_tooltip(&mut self, tooltip: Option<String>) {
        self.tooltip = tooltip;
    }

    pub fn set_tag(&mut self, tag: Option<Value>) {
        self.tag = tag;
    }

    // Raw override accessors.

    pub fn font(&self) -> Option<&str> {
        self.font.as_deref()
    }

    pub fn font_size(&self) -> Option<f64> {
        self.font_size
    }

    /// The element's font weight. Weights have no fallback-to-parent
    /// semantics: this is the effective value, [`FontWeight::NORMAL`]
    /// unless set.
    pub fn font_weight(&self) -> FontWeight {
        self.font_weight
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    pub fn tag(&self) -> Option<&Value> {
        self.tag.as_ref()
    }

    // Resolution against a parent context.

    /// The effective font: the override if set, else the parent's default.
    ///
    /// # Errors
    ///
    /// [`ResolveError::NoDefault`] when the override is unset and no parent
    /// default exists.
    pub fn resolved_font<'a>(
        &'a self,
        parent: Option<&'a dyn StyleContext>,
    ) -> Result<&'a str, ResolveError> {
        self.font
            .as_deref()
            .or_else(|| parent.and_then(|p| p.default_font()))
            .ok_or(ResolveError::NoDefault {
                attribute: Attribute::Font,
            })
    }

    /// The effective font size, by the same override-then-fallback rule.
    pub fn resolved_font_size(
        &self,
        parent: Option<&dyn StyleContext>,
    ) -> Result<f64, ResolveError> {
        self.font_size
            .or_else(|| parent.and_then(|p| p.default_font_size()))
            .ok_or(ResolveError::NoDefault {
                attribute: Attribute::FontSize,
            })
    }

    /// The effective text color.
    ///
    /// A concrete override wins outright; an automatic color defers to the
    /// parent's resolved color. A parent answering with an automatic color
    /// counts as having no default.
    pub fn resolved_text_color(
        &self,
        parent: Option<&dyn StyleContext>,
    ) -> Result<Color, ResolveError> {
        if !self.text_color.is_automatic() {
            return Ok(self.text_color);
        }
        parent
            .and_then(|p| p.text_color())
            .filter(|color| !color.is_automatic())
            .ok_or(ResolveError::NoDefault {
                attribute: Attribute::TextColor,
            })
    }

    /// The culture for this element's text: the parent's if it has one,
    /// else the process-wide current culture. Never fails.
    pub fn resolved_culture(&self, parent: Option<&dyn StyleContext>) -> Culture {
        parent
            .and_then(|p| p.culture())
            .cloned()
            .unwrap_or_else(current_culture)
    }

    /// Formats `template` against `data` using the resolved culture.
    ///
    /// Delegates to [`CultureFormatter`]; template errors propagate.
    pub fn format<T: Serialize>(
        &self,
        parent: Option<&dyn StyleContext>,
        template: &str,
        data: &T,
    ) -> Result<String, minijinja::Error> {
        CultureFormatter::new(self.resolved_culture(parent)).format(template, data)
    }
}

impl Structural for StyledElement {
    /// All six public attributes, in declaration order.
    fn hash_fields<H: Hasher>(&self, state: &mut H) {
        self.font.hash(state);
        hash_opt_f64(self.font_size, state);
        self.font_weight.hash(state);
        self.text_color.hash(state);
        self.tooltip.hash(state);
        hash_tag(self.tag.as_ref(), state);
    }
}
