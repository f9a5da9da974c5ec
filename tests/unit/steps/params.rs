use serde_json::json;

use super::*;

#[test]
fn colors_use_engine_notation() {
    assert_eq!(
        serde_json::to_value(Color::Black).unwrap(),
        json!("black")
    );
    assert_eq!(
        serde_json::to_value(Color::hex("#FF00AA")).unwrap(),
        json!({ "srgb": { "hex": "FF00AA" } })
    );
    assert_eq!(Color::hex("ffffff"), Color::hex("#ffffff"));
}

#[test]
fn region_writes_integral_bounds_as_integers() {
    let r = Region {
        x1: 10.0,
        y1: 0.0,
        x2: 110.5,
        y2: 50.0,
        background_color: Color::Transparent,
    };
    assert_eq!(
        serde_json::to_value(&r).unwrap(),
        json!({ "x1": 10, "y1": 0, "x2": 110.5, "y2": 50, "background_color": "transparent" })
    );
}

#[test]
fn resample_hints_skip_unset_fields() {
    let hints = ResampleHints {
        sharpen_percent: Some(15.0),
        down_filter: Some(Filter::RobidouxSharp),
        up_filter: Some(Filter::Lanczos2Sharp),
        scaling_colorspace: Some(ScalingColorspace::Linear),
        ..ResampleHints::default()
    };
    assert_eq!(
        serde_json::to_value(&hints).unwrap(),
        json!({
            "sharpen_percent": 15.0,
            "down_filter": "robidoux_sharp",
            "up_filter": "lanczos2_sharp",
            "scaling_colorspace": "linear"
        })
    );
    assert_eq!(
        serde_json::to_value(ResampleHints::default()).unwrap(),
        json!({})
    );
}

#[test]
fn draw_exact_and_fit_boxes() {
    let d = DrawExact {
        x: 5,
        y: 6,
        w: 70,
        h: 80,
        blend: Some(CompositingMode::Overwrite),
        hints: None,
    };
    assert_eq!(
        serde_json::to_value(&d).unwrap(),
        json!({ "x": 5, "y": 6, "w": 70, "h": 80, "blend": "overwrite" })
    );
    let b = FitBox::ImagePercentage {
        x1: 0.0,
        y1: 0.0,
        x2: 50.0,
        y2: 50.0,
    };
    assert_eq!(
        serde_json::to_value(b).unwrap(),
        json!({ "image_percentage": { "x1": 0.0, "y1": 0.0, "x2": 50.0, "y2": 50.0 } })
    );
}

#[test]
fn constraint_modes_are_snake_case() {
    for (mode, name) in [
        (ConstraintMode::Distort, "distort"),
        (ConstraintMode::WithinCrop, "within_crop"),
        (ConstraintMode::AspectCrop, "aspect_crop"),
        (ConstraintMode::LargerThan, "larger_than"),
    ] {
        assert_eq!(serde_json::to_value(mode).unwrap(), json!(name));
    }
}
