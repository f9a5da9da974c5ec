use serde_json::json;

use super::*;

#[test]
fn standard_presets_match_engine_shapes() {
    assert_eq!(
        serde_json::to_value(EncoderPreset::lossless_png()).unwrap(),
        json!({ "lodepng": {} })
    );
    assert_eq!(
        serde_json::to_value(EncoderPreset::mozjpeg_quality(85)).unwrap(),
        json!({ "mozjpeg": { "quality": 85 } })
    );
    assert_eq!(
        serde_json::to_value(EncoderPreset::WebpLossless).unwrap(),
        json!("webplossless")
    );
    assert_eq!(
        serde_json::to_value(EncoderPreset::Gif).unwrap(),
        json!("gif")
    );
}

#[test]
fn lossy_presets_carry_their_quality() {
    assert_eq!(
        serde_json::to_value(EncoderPreset::WebpLossy { quality: 80.0 }).unwrap(),
        json!({ "webplossy": { "quality": 80.0 } })
    );
    let pq = EncoderPreset::Pngquant {
        quality: Some(90),
        minimum_quality: Some(20),
        speed: None,
        maximum_deflate: Some(true),
    };
    assert_eq!(
        serde_json::to_value(pq).unwrap(),
        json!({ "pngquant": { "quality": 90, "minimum_quality": 20, "maximum_deflate": true } })
    );
}

#[test]
fn format_names() {
    assert_eq!(EncoderPreset::pngquant().format(), "png");
    assert_eq!(EncoderPreset::mozjpeg().format(), "jpeg");
    assert_eq!(EncoderPreset::WebpLossless.format(), "webp");
    assert_eq!(EncoderPreset::Gif.format(), "gif");
}
