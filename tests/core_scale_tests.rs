use approx::assert_relative_eq;
use candle_chart::core::{MIN_DOMAIN_SPAN, ScaleMapper, ValueRange, map_inverted};

#[test]
fn domain_bounds_map_to_inverted_pixel_edges() {
    let height = 370.0;
    assert_eq!(map_inverted(10.0, 10.0, 110.0, 0.0, height), height);
    assert_eq!(map_inverted(110.0, 10.0, 110.0, 0.0, height), 0.0);
}

#[test]
fn higher_values_map_to_smaller_y() {
    let range = ValueRange::new(100.0, 200.0).expect("valid range");
    let scale = ScaleMapper::new(range, 0.0, 400.0);

    let low = scale.map(120.0);
    let high = scale.map(180.0);
    assert!(high < low);
    assert_relative_eq!(scale.map(150.0), 200.0);
}

#[test]
fn offset_pixel_range_keeps_inversion() {
    let range = ValueRange::new(0.0, 50.0).expect("valid range");
    let scale = ScaleMapper::new(range, 10.0, 370.0);

    assert_eq!(scale.map(50.0), 10.0);
    assert_eq!(scale.map(0.0), 370.0);
    assert_eq!(scale.pixel_range(), (10.0, 370.0));
}

#[test]
fn degenerate_domain_maps_to_a_finite_pixel() {
    let pixel = map_inverted(42.0, 42.0, 42.0, 0.0, 370.0);
    assert!(pixel.is_finite());
    assert_eq!(pixel, 370.0);

    let off_domain = map_inverted(43.0, 42.0, 42.0, 0.0, 370.0);
    assert!(off_domain.is_finite());
}

#[test]
fn value_range_orders_bounds_and_exposes_span() {
    let range = ValueRange::new(9.0, 3.0).expect("valid range");
    assert_eq!(range.min(), 3.0);
    assert_eq!(range.max(), 9.0);
    assert_eq!(range.span(), 6.0);
    assert!(!range.is_degenerate());
    assert_eq!(range.effective_span(), 6.0);
}

#[test]
fn flat_value_range_substitutes_minimum_span() {
    let range = ValueRange::from_values([5.0, 5.0, 5.0]).expect("valid range");
    assert!(range.is_degenerate());
    assert_eq!(range.span(), 0.0);
    assert_eq!(range.effective_span(), MIN_DOMAIN_SPAN);
}

#[test]
fn non_finite_bounds_are_rejected() {
    assert!(ValueRange::new(f64::NAN, 1.0).is_none());
    assert!(ValueRange::new(0.0, f64::INFINITY).is_none());
}
