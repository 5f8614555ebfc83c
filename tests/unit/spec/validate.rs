use super::*;

fn spec(scenes: serde_json::Value) -> LayoutSpec {
    serde_json::from_value(serde_json::json!({
        "meta": {
            "title": "t",
            "version": "1",
            "resolution": { "width": 1280, "height": 720 },
            "fps": 30
        },
        "assets": {
            "svgs": [{ "id": "a", "url": "a.svg", "width": 10, "height": 10 }],
            "images": [{ "id": "photo", "url": "p.png" }],
            "audio": [{ "id": "vo", "url": "vo.mp3" }]
        },
        "scenes": scenes
    }))
    .unwrap()
}

#[test]
fn consistent_spec_has_no_issues() {
    let s = spec(serde_json::json!([
        { "id": "s1", "name": "one", "startTime": 0, "duration": 4, "audio": { "assetId": "vo" },
          "elements": [{ "type": "svg", "assetId": "a", "startTime": 1, "duration": 3,
                         "layout": { "position": "center" } }] },
        { "id": "s2", "name": "two", "startTime": 4, "duration": 2, "elements": [] }
    ]));
    assert!(s.issues().is_empty());
    assert!(s.validate().is_ok());
}

#[test]
fn element_past_scene_end_is_reported_with_path() {
    let s = spec(serde_json::json!([
        { "id": "s1", "name": "one", "startTime": 0, "duration": 2,
          "elements": [{ "type": "image", "assetId": "photo", "startTime": 1, "duration": 3,
                         "layout": { "position": "center" } }] }
    ]));
    let issues = s.issues();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].path, "$.scenes[0].elements[0]");
    assert!(issues[0].message.contains("exceeds duration of scene 's1'"));
}

#[test]
fn overlapping_scenes_are_reported() {
    let s = spec(serde_json::json!([
        { "id": "late", "name": "b", "startTime": 3, "duration": 2, "elements": [] },
        { "id": "early", "name": "a", "startTime": 0, "duration": 4, "elements": [] }
    ]));
    let err = s.validate().unwrap_err();
    assert!(
        err.to_string()
            .contains("scenes 'early' and 'late' overlap in timeline")
    );
}

#[test]
fn undeclared_references_are_all_collected() {
    let s = spec(serde_json::json!([
        { "id": "s1", "name": "one", "startTime": 0, "duration": 5, "audio": { "assetId": "music" },
          "elements": [
            { "type": "svg", "assetId": "nope", "duration": 1, "layout": { "position": "center" } },
            { "type": "group", "duration": 1, "layout": { "direction": "row" },
              "items": [{ "type": "image", "assetId": "ghost" }, { "type": "text", "text": "ok" }] }
          ] }
    ]));
    let paths = s.issues().into_iter().map(|i| i.path).collect::<Vec<_>>();
    assert_eq!(
        paths,
        [
            "$.scenes[0].audio",
            "$.scenes[0].elements[0]",
            "$.scenes[0].elements[1].items[0]",
        ]
    );
}

#[test]
fn audio_volume_outside_unit_range_is_reported() {
    let s = spec(serde_json::json!([
        { "id": "s1", "name": "one", "startTime": 0, "duration": 2,
          "audio": { "assetId": "vo", "volume": 5.0 }, "elements": [] },
        { "id": "s2", "name": "two", "startTime": 2, "duration": 2,
          "audio": { "assetId": "vo", "volume": 0.0 }, "elements": [] }
    ]));
    let issues = s.issues();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].path, "$.scenes[0].audio.volume");
    assert!(issues[0].message.contains("within [0, 1]"));
}
