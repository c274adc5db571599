//! End-to-end resolution behaviour: overrides, fallbacks, cultures, and
//! composite element hashing.

use std::hash::{Hash, Hasher};

use serde_json::json;
use serial_test::serial;
use underplot::{
    current_culture, set_current_culture, Color, Culture, FontWeight, PlotModel, ResolveError,
    Structural, StyledElement,
};

fn model() -> PlotModel {
    PlotModel::new()
        .with_default_font("Helvetica")
        .with_default_font_size(12.0)
        .with_text_color(Color::parse("#202020").unwrap())
}

#[test]
fn unset_attributes_inherit_from_model() {
    let element = StyledElement::new();
    let model = model();

    assert_eq!(element.resolved_font(Some(&model)).unwrap(), "Helvetica");
    assert_eq!(element.resolved_font_size(Some(&model)).unwrap(), 12.0);
    assert_eq!(
        element.resolved_text_color(Some(&model)).unwrap(),
        Color::parse("#202020").unwrap()
    );
}

#[test]
fn overrides_win_regardless_of_model() {
    let element = StyledElement::new()
        .with_font("Arial")
        .with_font_size(14.0)
        .with_text_color(Color::RED);
    let model = model();

    assert_eq!(element.resolved_font(Some(&model)).unwrap(), "Arial");
    assert_eq!(element.resolved_font(None).unwrap(), "Arial");
    assert_eq!(element.resolved_font_size(Some(&model)).unwrap(), 14.0);
    assert_eq!(element.resolved_text_color(Some(&model)).unwrap(), Color::RED);
}

#[test]
fn orphan_element_reports_missing_defaults() {
    let element = StyledElement::new();

    assert!(matches!(
        element.resolved_font(None),
        Err(ResolveError::NoDefault { .. })
    ));
    assert!(matches!(
        element.resolved_font_size(None),
        Err(ResolveError::NoDefault { .. })
    ));
    assert!(matches!(
        element.resolved_text_color(None),
        Err(ResolveError::NoDefault { .. })
    ));
}

#[test]
#[serial(current_culture)]
fn orphan_element_resolves_process_culture() {
    let before = current_culture();
    set_current_culture(Culture::from_tag("fr-FR"));

    let element = StyledElement::new();
    assert_eq!(element.resolved_culture(None).tag(), "fr-FR");

    // A model with a culture of its own still wins over the process one.
    let model = model().with_culture(Culture::from_tag("de-DE"));
    assert_eq!(element.resolved_culture(Some(&model)).tag(), "de-DE");

    set_current_culture(before);
}

#[test]
fn formatting_follows_the_resolved_culture() {
    let model = model().with_culture(Culture::from_tag("de-DE"));
    let element = StyledElement::new();

    let out = element
        .format(
            Some(&model),
            "{{ name }}: {{ value | num(2) }} ({{ samples | int }})",
            &json!({"name": "throughput", "value": 10432.5, "samples": 12000}),
        )
        .unwrap();
    assert_eq!(out, "throughput: 10.432,50 (12.000)");
}

/// A titled annotation: the shape downstream element types take, with its
/// own fields chained ahead of the embedded style in the hash.
struct TitledAnnotation {
    title: String,
    style: StyledElement,
}

impl Structural for TitledAnnotation {
    fn hash_fields<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.style.hash_fields(state);
    }
}

#[test]
fn composite_hash_covers_wrapper_and_embedded_fields() {
    let base = TitledAnnotation {
        title: "q3".into(),
        style: StyledElement::new().with_font_weight(FontWeight::BOLD),
    };
    let same = TitledAnnotation {
        title: "q3".into(),
        style: StyledElement::new().with_font_weight(FontWeight::BOLD),
    };
    let retitled = TitledAnnotation {
        title: "q4".into(),
        style: StyledElement::new().with_font_weight(FontWeight::BOLD),
    };
    let restyled = TitledAnnotation {
        title: "q3".into(),
        style: StyledElement::new().with_font_weight(FontWeight::BOLD).with_tooltip("t"),
    };

    assert_eq!(base.structural_hash(), same.structural_hash());
    assert_ne!(base.structural_hash(), retitled.structural_hash());
    assert_ne!(base.structural_hash(), restyled.structural_hash());
}

#[test]
fn element_hash_stable_across_clones_and_runs_of_the_same_values() {
    let element = StyledElement::new()
        .with_font("Arial")
        .with_font_size(10.5)
        .with_text_color(Color::BLUE)
        .with_tooltip("series 1")
        .with_tag(json!({"id": 7}));

    assert_eq!(element.structural_hash(), element.clone().structural_hash());
}
