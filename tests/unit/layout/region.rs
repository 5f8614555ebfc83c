use super::*;

const EPS: f64 = 1e-9;

fn engine(width: u32, height: u32) -> LayoutEngine {
    LayoutEngine::new(Canvas::new(width, height).unwrap())
}

#[test]
fn every_region_stays_inside_canvas() {
    for (w, h) in [(1920, 1080), (1280, 720), (1000, 700), (7, 5), (1, 1)] {
        let e = engine(w, h);
        for region in Region::ALL {
            let b = e.region_bounds(region);
            assert!(b.x >= 0.0 && b.y >= 0.0, "{region:?} origin on {w}x{h}");
            assert!(b.width >= 0.0 && b.height >= 0.0);
            assert!(b.x + b.width <= f64::from(w) + EPS, "{region:?} on {w}x{h}");
            assert!(b.y + b.height <= f64::from(h) + EPS, "{region:?} on {w}x{h}");
        }
    }
}

#[test]
fn fractional_formulas() {
    let e = engine(1920, 1080);
    assert_eq!(
        e.region_bounds(Region::LeftThird),
        BoundingBox::new(0.0, 0.0, 640.0, 1080.0)
    );
    assert_eq!(
        e.region_bounds(Region::Center),
        BoundingBox::new(288.0, 162.0, 1344.0, 756.0)
    );
    assert_eq!(
        e.region_bounds(Region::RightHalf),
        BoundingBox::new(960.0, 0.0, 960.0, 1080.0)
    );
    assert_eq!(
        e.region_bounds(Region::BottomThird),
        BoundingBox::new(0.0, 720.0, 1920.0, 360.0)
    );
}

#[test]
fn unknown_region_key_resolves_to_full_canvas() {
    let e = engine(800, 600);
    assert_eq!(
        e.region_bounds(Region::parse("nowhere")),
        e.region_bounds(Region::Full)
    );
}

#[test]
fn position_formulas_apply_padding_on_edges_only() {
    let b = BoundingBox::new(100.0, 200.0, 400.0, 300.0);
    let at = |p: Position| position_in_bounds(b, p, 40.0, 20.0, 50.0);
    assert_eq!(at(Position::Center), Point::new(280.0, 340.0));
    assert_eq!(at(Position::TopLeft), Point::new(150.0, 250.0));
    assert_eq!(at(Position::Right), Point::new(410.0, 340.0));
    assert_eq!(at(Position::Bottom), Point::new(280.0, 430.0));
    assert_eq!(at(Position::BottomRight), Point::new(410.0, 430.0));
    assert_eq!(at(Position::parse("diagonal")), at(Position::Center));
}

#[test]
fn anchor_point_uses_zero_size_and_padding() {
    let e = engine(1920, 1080);
    assert_eq!(
        e.anchor_point(Region::LeftThird, Position::Center),
        Point::new(320.0, 540.0)
    );
    assert_eq!(
        e.anchor_point(Region::RightThird, Position::TopRight),
        Point::new(1920.0, 0.0)
    );
}
