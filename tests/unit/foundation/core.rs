use super::*;

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 1080).is_err());
    assert!(Canvas::new(1920, 0).is_err());
    assert_eq!(Canvas::new(1920, 1080).unwrap().width_f64(), 1920.0);
}

#[test]
fn round_px_ties_round_up() {
    assert_eq!(round_px(2.5), 3);
    assert_eq!(round_px(2.49), 2);
    assert_eq!(round_px(-2.5), -2);
    assert_eq!(round_px(-2.51), -3);
}

#[test]
fn inset_shrinks_all_sides() {
    let b = BoundingBox::new(10.0, 20.0, 200.0, 100.0).inset(5.0);
    assert_eq!(b, BoundingBox::new(15.0, 25.0, 190.0, 90.0));
    assert_eq!(b.center(), Point::new(110.0, 70.0));
    assert_eq!(b.to_rect().width(), 190.0);
}

#[test]
fn degenerate_sizes_are_rejected() {
    assert!(ensure_positive_size("asset", 0.0, 10.0).is_err());
    assert!(ensure_positive_size("asset", 10.0, f64::NAN).is_err());
    assert!(ensure_positive_size("asset", 10.0, 10.0).is_ok());
}
