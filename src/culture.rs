//! Cultures (locales) and culture-aware number formatting.
//!
//! A [`Culture`] is the little slice of locale data plot text actually
//! needs: a language tag and the separators used when formatting numbers.
//! The process-wide current culture backs resolution for elements whose
//! parent model carries no culture of its own.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// A language tag plus the number separators it implies.
///
/// # Example
///
/// ```rust
/// use underplot::Culture;
///
/// let de = Culture::from_tag("de-DE");
/// assert_eq!(de.format_number(1234.5, 2), "1.234,50");
///
/// let inv = Culture::invariant();
/// assert_eq!(inv.format_number(1234.5, 2), "1,234.50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Culture {
    tag: String,
    decimal_separator: char,
    group_separator: char,
}

impl Culture {
    /// The culture-neutral fallback: period decimal point, comma grouping.
    pub fn invariant() -> Culture {
        Culture {
            tag: String::new(),
            decimal_separator: '.',
            group_separator: ',',
        }
    }

    /// Builds a culture from a BCP-47-ish tag such as `"en-US"` or `"de"`.
    ///
    /// Separators are derived from the language subtag; unknown languages
    /// get the invariant separators, so this is total.
    pub fn from_tag(tag: &str) -> Culture {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        let (decimal, group) = match language.as_str() {
            // Comma-decimal, period-group.
            "de" | "es" | "it" | "nl" | "pt" | "da" | "tr" => (',', '.'),
            // Comma-decimal, space-group.
            "fr" | "ru" | "sv" | "fi" | "pl" | "nb" | "cs" => (',', '\u{a0}'),
            _ => ('.', ','),
        };
        Culture {
            tag: tag.to_string(),
            decimal_separator: decimal,
            group_separator: group,
        }
    }

    /// Builds a culture with explicit separators.
    pub fn with_separators(tag: &str, decimal: char, group: char) -> Culture {
        Culture {
            tag: tag.to_string(),
            decimal_separator: decimal,
            group_separator: group,
        }
    }

    /// The tag this culture was built from. Empty for the invariant culture.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    pub fn group_separator(&self) -> char {
        self.group_separator
    }

    /// Formats a float with `precision` fraction digits, applying this
    /// culture's separators. Non-finite values format as Rust prints them.
    pub fn format_number(&self, value: f64, precision: usize) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let plain = format!("{:.*}", precision, value.abs());
        let (int_part, frac_part) = match plain.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (plain.as_str(), None),
        };
        let mut out = String::new();
        if value.is_sign_negative() && value != 0.0 {
            out.push('-');
        }
        out.push_str(&group_digits(int_part, self.group_separator));
        if let Some(frac) = frac_part {
            out.push(self.decimal_separator);
            out.push_str(frac);
        }
        out
    }

    /// Formats an integer with this culture's group separator.
    pub fn format_integer(&self, value: i64) -> String {
        let mut out = String::new();
        if value < 0 {
            out.push('-');
        }
        out.push_str(&group_digits(
            &value.unsigned_abs().to_string(),
            self.group_separator,
        ));
        out
    }
}

/// Inserts a group separator every three digits, right to left.
fn group_digits(digits: &str, separator: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

static CURRENT_CULTURE: Lazy<Mutex<Culture>> = Lazy::new(|| Mutex::new(culture_from_env()));

/// Returns the process-wide current culture.
///
/// Initialised once from the `LANG` environment variable; falls back to the
/// invariant culture when `LANG` is unset or unparseable, so resolution
/// never fails even on bare environments.
pub fn current_culture() -> Culture {
    CURRENT_CULTURE.lock().unwrap().clone()
}

/// Overrides the process-wide current culture.
///
/// Useful for applications that manage locale themselves, and for tests.
pub fn set_current_culture(culture: Culture) {
    let mut guard = CURRENT_CULTURE.lock().unwrap();
    *guard = culture;
}

fn culture_from_env() -> Culture {
    match std::env::var("LANG") {
        // "en_US.UTF-8" carries an encoding suffix the tag table ignores.
        Ok(lang) if !lang.is_empty() && lang != "C" && lang != "POSIX" => {
            let tag = lang.split('.').next().unwrap_or("").replace('_', "-");
            Culture::from_tag(&tag)
        }
        _ => Culture::invariant(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_invariant_formatting() {
        let c = Culture::invariant();
        assert_eq!(c.format_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(c.format_number(0.5, 1), "0.5");
        assert_eq!(c.format_number(-42.0, 0), "-42");
        assert_eq!(c.format_integer(-1234567), "-1,234,567");
    }

    #[test]
    fn test_german_separators() {
        let c = Culture::from_tag("de-DE");
        assert_eq!(c.format_number(1234.5, 2), "1.234,50");
    }

    #[test]
    fn test_french_uses_nbsp_grouping() {
        let c = Culture::from_tag("fr-FR");
        assert_eq!(c.format_number(1234.5, 1), "1\u{a0}234,5");
    }

    #[test]
    fn test_unknown_language_falls_back_to_invariant_separators() {
        let c = Culture::from_tag("tlh");
        assert_eq!(c.decimal_separator(), '.');
        assert_eq!(c.tag(), "tlh");
    }

    #[test]
    fn test_underscore_tags_accepted() {
        let c = Culture::from_tag("de_AT");
        assert_eq!(c.decimal_separator(), ',');
    }

    #[test]
    fn test_non_finite_values() {
        let c = Culture::invariant();
        assert_eq!(c.format_number(f64::NAN, 2), "NaN");
        assert_eq!(c.format_number(f64::INFINITY, 2), "inf");
    }

    #[test]
    fn test_zero_precision_drops_decimal_separator() {
        let c = Culture::from_tag("de");
        assert_eq!(c.format_number(1000.9, 0), "1.001");
    }

    #[test]
    #[serial(current_culture)]
    fn test_set_current_culture() {
        let before = current_culture();
        set_current_culture(Culture::from_tag("fr-FR"));
        assert_eq!(current_culture().tag(), "fr-FR");
        set_current_culture(before);
    }
}
