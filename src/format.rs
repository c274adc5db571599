//! Culture-aware template formatting.
//!
//! The shared formatter behind [`StyledElement::format`]. Templates are
//! minijinja expressions over the caller's data, with number filters that
//! honour the formatter's [`Culture`].
//!
//! [`StyledElement::format`]: crate::StyledElement::format

use minijinja::{Environment, Error};
use serde::Serialize;

use crate::culture::Culture;

/// A formatter bound to one culture.
///
/// # Example
///
/// ```rust
/// use underplot::{Culture, CultureFormatter};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: f64, y: f64 }
///
/// let fmt = CultureFormatter::new(Culture::from_tag("de-DE"));
/// let out = fmt
///     .format("{{ x | num(1) }} / {{ y | num(1) }}", &Point { x: 1.25, y: 1024.0 })
///     .unwrap();
/// assert_eq!(out, "1,2 / 1.024,0");
/// ```
pub struct CultureFormatter {
    env: Environment<'static>,
    culture: Culture,
}

impl CultureFormatter {
    /// Creates a formatter whose number filters use `culture`.
    pub fn new(culture: Culture) -> CultureFormatter {
        let mut env = Environment::new();
        register_filters(&mut env, culture.clone());
        CultureFormatter { env, culture }
    }

    /// The culture this formatter was built with.
    pub fn culture(&self) -> &Culture {
        &self.culture
    }

    /// Renders `template` against `data`.
    ///
    /// # Errors
    ///
    /// Malformed templates, unknown filters, and missing fields surface as
    /// the underlying [`minijinja::Error`].
    pub fn format<T: Serialize>(&self, template: &str, data: &T) -> Result<String, Error> {
        self.env.render_str(template, data)
    }
}

/// Registers the culture-sensitive filters on a minijinja environment.
fn register_filters(env: &mut Environment<'static>, culture: Culture) {
    let num_culture = culture.clone();
    // {{ value | num }} or {{ value | num(precision) }}; default 2 digits.
    env.add_filter("num", move |value: f64, precision: Option<usize>| -> String {
        num_culture.format_number(value, precision.unwrap_or(2))
    });

    // {{ value | int }} groups digits without a fraction part.
    env.add_filter("int", move |value: i64| -> String {
        culture.format_integer(value)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Sample {
        label: String,
        value: f64,
        count: i64,
    }

    fn sample() -> Sample {
        Sample {
            label: "peak".into(),
            value: 1234.567,
            count: 98765,
        }
    }

    #[test]
    fn test_plain_interpolation() {
        let fmt = CultureFormatter::new(Culture::invariant());
        let out = fmt.format("{{ label }}", &sample()).unwrap();
        assert_eq!(out, "peak");
    }

    #[test]
    fn test_num_filter_default_precision() {
        let fmt = CultureFormatter::new(Culture::invariant());
        let out = fmt.format("{{ value | num }}", &sample()).unwrap();
        assert_eq!(out, "1,234.57");
    }

    #[test]
    fn test_num_filter_explicit_precision() {
        let fmt = CultureFormatter::new(Culture::from_tag("de-DE"));
        let out = fmt.format("{{ value | num(1) }}", &sample()).unwrap();
        assert_eq!(out, "1.234,6");
    }

    #[test]
    fn test_int_filter() {
        let fmt = CultureFormatter::new(Culture::invariant());
        let out = fmt.format("{{ count | int }}", &sample()).unwrap();
        assert_eq!(out, "98,765");
    }

    #[test]
    fn test_malformed_template_propagates_error() {
        let fmt = CultureFormatter::new(Culture::invariant());
        assert!(fmt.format("{{ value", &sample()).is_err());
    }

    #[test]
    fn test_unknown_filter_propagates_error() {
        let fmt = CultureFormatter::new(Culture::invariant());
        assert!(fmt.format("{{ value | nope }}", &sample()).is_err());
    }
}
