//! Integration tests for the PatternBuilder API

use boxcut::{
    BoxcutError, PatternBuilder, Segment,
    config::{AppConfig, LayoutConfig, StyleConfig},
    layout::BoxDimensions,
};

#[test]
fn test_builder_api_exists() {
    let _builder = PatternBuilder::default();
}

#[test]
fn test_render_default_box() {
    let builder = PatternBuilder::default();
    let pattern = builder
        .layout(BoxDimensions::new(40.0, 60.0, 80.0))
        .expect("Failed to lay out");

    let svg = builder.render_svg(&pattern).expect("Failed to render");
    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    assert!(svg.contains(r#"viewBox="0 -3 "#));
}

#[test]
fn test_resolution_is_disjoint() {
    let builder = PatternBuilder::default();
    let pattern = builder
        .layout(BoxDimensions::new(25.0, 35.0, 45.0))
        .expect("Failed to lay out");

    let resolved = builder.resolve(&pattern);
    let resolution = resolved.resolution();

    assert!(!resolution.unique().is_empty());
    assert!(!resolution.overlap().is_empty());
    for segment in resolution.unique() {
        assert!(
            !resolution.overlap().contains(segment),
            "{segment} is both cut and fold"
        );
    }
    assert_eq!(resolved.bounds(), pattern.bounds());
}

#[test]
fn test_shared_wall_edges_become_folds() {
    let config = AppConfig::new(LayoutConfig::new(0.0, 10.0, 30.0), StyleConfig::default());
    let builder = PatternBuilder::new(config);
    let pattern = builder
        .layout(BoxDimensions::new(20.0, 20.0, 20.0))
        .expect("Failed to lay out");

    let resolved = builder.resolve(&pattern);
    // The wall between the first two columns, at x = flap + width.
    let fold = Segment::new(30.0, 10.0, 30.0, 30.0);
    assert!(resolved.resolution().overlap().contains(&fold));
    assert!(!resolved.resolution().unique().contains(&fold));
}

#[test]
fn test_invalid_dimensions_rejected() {
    let builder = PatternBuilder::default();
    let result = builder.layout(BoxDimensions::new(0.0, 10.0, 10.0));
    assert!(matches!(result, Err(BoxcutError::Layout(_))));
}

#[test]
fn test_invalid_style_reported_as_export_error() {
    let style: StyleConfig = toml::from_str(r#"cut_color = "definitely-not""#).unwrap();
    let builder = PatternBuilder::new(AppConfig::new(LayoutConfig::default(), style));
    let pattern = builder
        .layout(BoxDimensions::new(10.0, 10.0, 10.0))
        .expect("Failed to lay out");

    let err = builder.render_svg(&pattern).unwrap_err();
    assert!(matches!(err, BoxcutError::Export(_)));
    assert!(err.to_string().contains("Invalid cut color"));
}

#[test]
fn test_builder_reusability() {
    let builder = PatternBuilder::default();

    let small = builder.layout(BoxDimensions::new(10.0, 20.0, 30.0)).unwrap();
    let large = builder.layout(BoxDimensions::new(100.0, 200.0, 300.0)).unwrap();

    let svg_small = builder.render_svg(&small).unwrap();
    let svg_large = builder.render_svg(&large).unwrap();
    assert_ne!(svg_small, svg_large);
}
