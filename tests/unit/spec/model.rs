use super::*;

fn spec_json() -> serde_json::Value {
    serde_json::json!({
        "meta": {
            "title": "Photosynthesis",
            "version": "1.0",
            "resolution": { "width": 1920, "height": 1080 },
            "fps": 30
        },
        "assets": {
            "svgs": [{ "id": "leaf", "url": "leaf.svg", "width": 400, "height": 300 }],
            "audio": [{ "id": "vo", "url": "vo.mp3" }]
        },
        "scenes": [{
            "id": "s1",
            "name": "Intro",
            "startTime": 0,
            "duration": 5,
            "audio": { "assetId": "vo" },
            "elements": [
                { "type": "svg", "assetId": "leaf", "duration": 4,
                  "layout": { "position": "center", "region": "full", "size": "medium" } },
                { "type": "shape", "shape": "arrow", "duration": 2,
                  "layout": { "from": { "region": "left-third", "anchor": "center" },
                              "to": { "region": "right-third", "anchor": "center" } } },
                { "type": "shape", "shape": "circle", "duration": 2,
                  "layout": { "position": "top-left", "offset": { "x": 5, "y": -5 } } },
                { "type": "group", "duration": 3,
                  "layout": { "direction": "row", "justify": "space-evenly" },
                  "items": [{ "type": "text", "text": "CO2" }, { "type": "svg" }] }
            ]
        }]
    })
}

#[test]
fn parses_tagged_elements_and_layout_variants() {
    let spec: LayoutSpec = serde_json::from_value(spec_json()).unwrap();
    assert_eq!(spec.canvas().unwrap(), Canvas { width: 1920, height: 1080 });
    assert!(spec.assets.images.is_empty());

    let els = &spec.scenes[0].elements;
    assert_eq!(
        els.iter().map(Element::kind).collect::<Vec<_>>(),
        ["svg", "shape", "shape", "group"]
    );

    let Element::Shape(arrow) = &els[1] else {
        panic!("expected shape");
    };
    let ShapeLayout::Connection(conn) = &arrow.layout else {
        panic!("expected connection layout");
    };
    assert_eq!(conn.from.region, Region::LeftThird);
    assert_eq!(conn.to.anchor, Position::Center);

    let Element::Shape(circle) = &els[2] else {
        panic!("expected shape");
    };
    let ShapeLayout::Single(single) = &circle.layout else {
        panic!("expected single layout");
    };
    assert_eq!(single.position, Position::TopLeft);
    assert_eq!(single.offset, Some(Vec2::new(5.0, -5.0)));

    let Element::Group(group) = &els[3] else {
        panic!("expected group");
    };
    assert_eq!(group.layout.justify, Some(Justify::SpaceEvenly));
    assert_eq!(group.layout.sizing, None);
    assert_eq!(group.items[1].kind, GroupItemKind::Svg);
    assert!(group.items[1].asset_id.is_none());
}

#[test]
fn element_timing_defaults_start_to_zero() {
    let spec: LayoutSpec = serde_json::from_value(spec_json()).unwrap();
    assert_eq!(spec.scenes[0].elements[0].timing(), (0.0, 4.0));
}

#[test]
fn unknown_element_type_is_a_serde_error() {
    let mut json = spec_json();
    json["scenes"][0]["elements"][0]["type"] = "video".into();
    let err = LayoutSpec::from_json_str(&json.to_string()).unwrap_err();
    assert!(matches!(err, SceneError::Serde(_)));
}

#[test]
fn from_path_reports_missing_file() {
    let err = LayoutSpec::from_path(Path::new("missing/spec.json")).unwrap_err();
    assert!(err.to_string().contains("missing/spec.json"));
}
