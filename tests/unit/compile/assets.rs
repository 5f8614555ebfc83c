use super::*;
use crate::spec::model::{AudioAssetDecl, ImageAssetDecl, SvgAssetDecl};

fn assets() -> SpecAssets {
    SpecAssets {
        svgs: vec![SvgAssetDecl {
            id: "leaf".to_string(),
            url: "leaf.svg".to_string(),
            width: 400.0,
            height: 300.0,
        }],
        audio: vec![],
        images: vec![
            ImageAssetDecl {
                id: "sized".to_string(),
                url: "a.png".to_string(),
                width: Some(640.0),
                height: Some(480.0),
            },
            ImageAssetDecl {
                id: "half".to_string(),
                url: "b.png".to_string(),
                width: Some(640.0),
                height: None,
            },
        ],
    }
}

#[test]
fn lookup_knows_svgs_and_fully_sized_images() {
    let dims = SpecAssetDimensions::from_spec(&assets());
    assert_eq!(dims.dimensions("leaf"), Some(Dimensions::new(400.0, 300.0)));
    assert_eq!(dims.dimensions("sized"), Some(Dimensions::new(640.0, 480.0)));
    assert_eq!(dims.dimensions("half"), None);
    assert_eq!(
        dims.dimensions_or("missing", Dimensions::new(100.0, 100.0)),
        Dimensions::new(100.0, 100.0)
    );
}

#[test]
fn project_assets_drop_empty_kinds() {
    let out = ProjectAssets::from_spec(&assets());
    assert!(out.audio.is_none());
    assert!(out.videos.is_none());
    let svgs = out.svgs.unwrap();
    assert_eq!(svgs[0].kind, AssetKind::Svg);
    assert_eq!(svgs[0].width, Some(400.0));
    assert_eq!(out.images.unwrap().len(), 2);

    let mut with_audio = assets();
    with_audio.audio.push(AudioAssetDecl {
        id: "vo".to_string(),
        url: "vo.mp3".to_string(),
    });
    let json = serde_json::to_value(ProjectAssets::from_spec(&with_audio)).unwrap();
    assert_eq!(json["audio"][0]["type"], "audio");
    assert!(json.get("videos").is_none());
}
