//! Font weight values.

use serde::{Deserialize, Serialize};

/// Numeric font weight on the familiar 100–900 scale.
///
/// Unlike fonts, sizes, and colors, the weight carries no fallback-to-parent
/// semantics: an element's weight is used as-is.
///
/// # Example
///
/// ```rust
/// use underplot::FontWeight;
///
/// assert_eq!(FontWeight::default(), FontWeight::NORMAL);
/// assert!(FontWeight::BOLD > FontWeight::NORMAL);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const BOLD: FontWeight = FontWeight(700);

    /// The raw numeric weight.
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        FontWeight::NORMAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(FontWeight::NORMAL.value(), 400);
        assert_eq!(FontWeight::BOLD.value(), 700);
    }

    #[test]
    fn test_custom_weight_ordering() {
        let light = FontWeight(300);
        assert!(light < FontWeight::NORMAL);
    }
}
