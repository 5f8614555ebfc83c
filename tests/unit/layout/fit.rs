use super::*;
use crate::foundation::core::Canvas;
use crate::spec::keywords::{Position, Region, SizeHint};
use crate::spec::model::Endpoint;

const EPS: f64 = 1e-9;

fn engine() -> LayoutEngine {
    LayoutEngine::new(Canvas::new(1920, 1080).unwrap())
}

fn single(position: Position, region: Region, size: SizeHint) -> SingleLayout {
    SingleLayout {
        position,
        region: Some(region),
        size: Some(size),
        offset: None,
    }
}

#[test]
fn medium_svg_centered_on_full_canvas() {
    let r = engine()
        .layout_single(
            &single(Position::Center, Region::Full, SizeHint::Medium),
            400.0,
            300.0,
        )
        .unwrap();
    assert_eq!(r.x, 708.0);
    assert_eq!(r.y, 351.0);
    assert_eq!(r.width, 504.0);
    assert_eq!(r.height, 378.0);
    assert_eq!(r.scale, Some(1.26));
}

#[test]
fn fitting_preserves_aspect_ratio_and_scale() {
    let e = engine();
    let sizes = [
        SizeHint::Tiny,
        SizeHint::Small,
        SizeHint::Medium,
        SizeHint::Large,
        SizeHint::Xl,
        SizeHint::Fill,
        SizeHint::Auto,
    ];
    for (iw, ih) in [(400.0, 300.0), (120.0, 480.0), (50.0, 50.0), (1.0, 999.0)] {
        for region in Region::ALL {
            for size in sizes {
                let r = e
                    .layout_single(&single(Position::TopRight, region, size), iw, ih)
                    .unwrap();
                let scale = r.scale.unwrap();
                assert!(scale > 0.0);
                assert!(((r.width / r.height) - iw / ih).abs() < 1e-9 * (iw / ih).max(1.0));
                assert!((scale * iw - r.width).abs() < EPS * r.width.max(1.0));
            }
        }
    }
}

#[test]
fn tall_content_is_height_driven() {
    let r = engine()
        .layout_single(
            &single(Position::TopLeft, Region::LeftThird, SizeHint::Fill),
            100.0,
            400.0,
        )
        .unwrap();
    // region 640x1080 at 0.9: max 576x972; height-driven: h = min(972, 576*4) = 972
    assert_eq!(r.height, 972.0);
    assert_eq!(r.width, 243.0);
    assert_eq!((r.x, r.y), (50.0, 50.0));
}

#[test]
fn offset_is_added_after_positioning() {
    let mut layout = single(Position::Center, Region::Full, SizeHint::Medium);
    layout.offset = Some(Vec2::new(-8.0, 12.0));
    let r = engine().layout_single(&layout, 400.0, 300.0).unwrap();
    assert_eq!((r.x, r.y), (700.0, 363.0));
}

#[test]
fn degenerate_intrinsic_size_is_rejected() {
    let e = engine();
    let layout = SingleLayout::default();
    assert!(matches!(
        e.layout_single(&layout, 0.0, 10.0),
        Err(SceneError::Geometry(_))
    ));
    assert!(e.layout_single(&layout, 10.0, f64::INFINITY).is_err());
}

#[test]
fn text_box_is_estimated_from_font_ratio() {
    let e = engine();
    let layout = single(Position::TopLeft, Region::Full, SizeHint::Auto);
    let r = e.layout_text(&layout, "Hello", 72.0, "CaveatBrush").unwrap();
    assert_eq!(r.width, 5.0 * 72.0 * 0.5);
    assert!((r.height - 72.0 * 1.2).abs() < EPS);
    assert_eq!((r.x, r.y), (50.0, 50.0));
    assert_eq!(r.scale, None);

    let merri = e.layout_text(&layout, "Hello", 72.0, "Merriweather").unwrap();
    assert!((merri.width - 5.0 * 72.0 * 0.6).abs() < EPS);

    let unknown = e.layout_text(&layout, "Hello", 72.0, "NoSuchFont").unwrap();
    assert_eq!(unknown.width, r.width);
}

#[test]
fn text_length_counts_utf16_units() {
    let (w, _) = engine().estimate_text("héllo", 10.0, 1.0);
    assert_eq!(w, 50.0);

    let (w, _) = engine().estimate_text("hi 🌧", 10.0, 1.0);
    assert_eq!(w, 50.0);
}

#[test]
fn text_rejects_non_positive_font_size() {
    let layout = SingleLayout::default();
    assert!(engine().layout_text(&layout, "x", 0.0, "Inter").is_err());
}

#[test]
fn connection_resolves_each_endpoint_in_its_region() {
    let c = engine().layout_connection(&ConnectionLayout {
        from: Endpoint {
            region: Region::LeftThird,
            anchor: Position::Right,
        },
        to: Endpoint {
            region: Region::RightThird,
            anchor: Position::Left,
        },
    });
    assert_eq!(c.from_point(), Point::new(640.0, 540.0));
    assert_eq!(c.to_point(), Point::new(1280.0, 540.0));
}
