use serde::Serialize;

use crate::foundation::number::{compact, compact_opt};

/// Engine color value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// Fully transparent.
    Transparent,
    /// Opaque black.
    Black,
    /// sRGB color.
    Srgb(SrgbColor),
}

/// sRGB color notation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SrgbColor {
    /// `RRGGBB` or `RRGGBBAA` hex string, without a leading `#`.
    Hex(String),
}

impl Color {
    /// sRGB color from a hex string; a leading `#` is stripped.
    pub fn hex(hex: impl AsRef<str>) -> Self {
        let hex = hex.as_ref();
        Self::Srgb(SrgbColor::Hex(
            hex.strip_prefix('#').unwrap_or(hex).to_string(),
        ))
    }
}

/// Anchor used to place content inside a larger box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Gravity {
    /// Centered on both axes.
    Center,
    /// Anchored at a percentage (0 to 100) of the free space on each axis.
    Percentage {
        /// Horizontal percentage.
        x: f32,
        /// Vertical percentage.
        y: f32,
    },
}

/// How `constrain` reconciles the source aspect ratio with the target box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintMode {
    /// Stretch to exactly `w` x `h`.
    Distort,
    /// Downscale to fit inside the box, never upscale.
    Within,
    /// Scale up or down to fit inside the box.
    Fit,
    /// Downscale and crop to fill the box.
    WithinCrop,
    /// Scale and crop to fill the box.
    FitCrop,
    /// Crop to the box's aspect ratio without scaling.
    AspectCrop,
    /// Downscale and pad to fill the box.
    WithinPad,
    /// Scale and pad to fill the box.
    FitPad,
    /// Upscale until both dimensions are at least the box.
    LargerThan,
}

/// Resampling filter names understood by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Filter {
    RobidouxFast,
    Robidoux,
    RobidouxSharp,
    Ginseng,
    GinsengSharp,
    Lanczos,
    LanczosSharp,
    Lanczos2,
    Lanczos2Sharp,
    CubicFast,
    Cubic,
    CubicSharp,
    CatmullRom,
    Mitchell,
    CubicBSpline,
    Hermite,
    Jinc,
    Triangle,
    Linear,
    Box,
    Fastest,
    NCubic,
    NCubicSharp,
}

/// Color space in which resampling is performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalingColorspace {
    /// Display-referred sRGB.
    Srgb,
    /// Linear light.
    Linear,
}

/// When the engine resamples.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResampleWhen {
    /// Only when the output size differs from the input.
    SizeDiffers,
    /// When sizes differ or sharpening was requested.
    SizeDiffersOrSharpeningRequested,
    /// Always.
    Always,
}

/// When the engine applies sharpening.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SharpenWhen {
    /// Only while downscaling.
    Downscaling,
    /// Only while upscaling.
    Upscaling,
    /// Whenever sizes differ.
    SizeDiffers,
    /// Always.
    Always,
}

/// Optional resampling hints; unset fields are left to the engine.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ResampleHints {
    /// Sharpening amount in percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sharpen_percent: Option<f32>,
    /// Filter used when downscaling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub down_filter: Option<Filter>,
    /// Filter used when upscaling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up_filter: Option<Filter>,
    /// Color space used for resampling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_colorspace: Option<ScalingColorspace>,
    /// Matte applied behind transparent pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    /// Resampling policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resample_when: Option<ResampleWhen>,
    /// Sharpening policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sharpen_when: Option<SharpenWhen>,
}

/// Parameters of a `constrain` node.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Constrain {
    /// Constraint mode.
    pub mode: ConstraintMode,
    /// Target width; unconstrained when `None`.
    #[serde(
        serialize_with = "compact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub w: Option<f64>,
    /// Target height; unconstrained when `None`.
    #[serde(
        serialize_with = "compact_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub h: Option<f64>,
    /// Resampling hints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<ResampleHints>,
    /// Anchor for crop and pad modes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gravity: Option<Gravity>,
    /// Padding color for pad modes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canvas_color: Option<Color>,
}

impl Constrain {
    /// Constraint with the given mode and no dimensions set.
    pub fn new(mode: ConstraintMode) -> Self {
        Self {
            mode,
            w: None,
            h: None,
            hints: None,
            gravity: None,
            canvas_color: None,
        }
    }

    /// Set the target width.
    pub fn w(mut self, w: f64) -> Self {
        self.w = Some(w);
        self
    }

    /// Set the target height.
    pub fn h(mut self, h: f64) -> Self {
        self.h = Some(h);
        self
    }

    /// Set resampling hints.
    pub fn hints(mut self, hints: ResampleHints) -> Self {
        self.hints = Some(hints);
        self
    }

    /// Set the gravity.
    pub fn gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = Some(gravity);
        self
    }

    /// Set the padding color.
    pub fn canvas_color(mut self, color: Color) -> Self {
        self.canvas_color = Some(color);
        self
    }
}

/// Crop or pad to absolute pixel bounds; bounds outside the image are filled with
/// `background_color`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Region {
    /// Left edge.
    #[serde(serialize_with = "compact")]
    pub x1: f64,
    /// Top edge.
    #[serde(serialize_with = "compact")]
    pub y1: f64,
    /// Right edge.
    #[serde(serialize_with = "compact")]
    pub x2: f64,
    /// Bottom edge.
    #[serde(serialize_with = "compact")]
    pub y2: f64,
    /// Fill for areas outside the source image.
    pub background_color: Color,
}

/// Crop or pad to bounds expressed as percentages of the source size.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegionPercent {
    /// Left edge in percent.
    #[serde(serialize_with = "compact")]
    pub x1: f64,
    /// Top edge in percent.
    #[serde(serialize_with = "compact")]
    pub y1: f64,
    /// Right edge in percent.
    #[serde(serialize_with = "compact")]
    pub x2: f64,
    /// Bottom edge in percent.
    #[serde(serialize_with = "compact")]
    pub y2: f64,
    /// Fill for areas outside the source image.
    pub background_color: Color,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Trim uniform borders.
pub struct CropWhitespace {
    /// Color distance threshold (engine scale, typically 1 to 255).
    pub threshold: u32,
    /// Padding kept around the detected content, in percent.
    pub percent_padding: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Fill a rectangle with a solid color.
pub struct FillRect {
    /// Left edge.
    #[serde(serialize_with = "compact")]
    pub x1: f64,
    /// Top edge.
    #[serde(serialize_with = "compact")]
    pub y1: f64,
    /// Right edge.
    #[serde(serialize_with = "compact")]
    pub x2: f64,
    /// Bottom edge.
    #[serde(serialize_with = "compact")]
    pub y2: f64,
    /// Fill color.
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Grow the canvas by the given margins.
pub struct ExpandCanvas {
    /// Pixels added on the left.
    pub left: u32,
    /// Pixels added on top.
    pub top: u32,
    /// Pixels added on the right.
    pub right: u32,
    /// Pixels added at the bottom.
    pub bottom: u32,
    /// Color of the added area.
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Copy a rectangle of the drawn image onto the canvas at `(x, y)`.
pub struct CopyRectToCanvas {
    /// Source rectangle left edge.
    pub from_x: u32,
    /// Source rectangle top edge.
    pub from_y: u32,
    /// Source rectangle width.
    pub w: u32,
    /// Source rectangle height.
    pub h: u32,
    /// Destination left edge.
    pub x: u32,
    /// Destination top edge.
    pub y: u32,
}

/// How drawn pixels combine with the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositingMode {
    /// Alpha-blend over the canvas.
    Compose,
    /// Replace canvas pixels.
    Overwrite,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// Resample the drawn image into an exact rectangle of the canvas.
pub struct DrawExact {
    /// Destination left edge.
    pub x: u32,
    /// Destination top edge.
    pub y: u32,
    /// Destination width.
    pub w: u32,
    /// Destination height.
    pub h: u32,
    /// Compositing mode; engine default when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blend: Option<CompositingMode>,
    /// Resampling hints.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<ResampleHints>,
}

/// How a watermark is fitted into its box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WatermarkFitMode {
    /// Stretch to the box.
    Distort,
    /// Downscale to fit, never upscale.
    Within,
    /// Scale to fit.
    Fit,
    /// Downscale and crop to fill.
    WithinCrop,
    /// Scale and crop to fill.
    FitCrop,
}

/// Box, relative to the target image, that the watermark is fitted into.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FitBox {
    /// Corners as percentages of the target image.
    ImagePercentage {
        /// Left edge in percent.
        x1: f32,
        /// Top edge in percent.
        y1: f32,
        /// Right edge in percent.
        x2: f32,
        /// Bottom edge in percent.
        y2: f32,
    },
    /// Inset from each side of the target image, in pixels.
    ImageMargins {
        /// Left margin.
        left: u32,
        /// Top margin.
        top: u32,
        /// Right margin.
        right: u32,
        /// Bottom margin.
        bottom: u32,
    },
}

/// Placement of a watermark; the IO slot is assigned by the builder.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Watermark {
    /// Anchor inside the fit box.
    pub gravity: Option<Gravity>,
    /// Fit mode.
    pub fit_mode: Option<WatermarkFitMode>,
    /// Fit box.
    pub fit_box: Option<FitBox>,
    /// Opacity in `[0, 1]`.
    pub opacity: Option<f32>,
    /// Resampling hints.
    pub hints: Option<ResampleHints>,
}

/// sRGB color filters.
///
/// These operate on display-referred values and do not produce ideal results; the engine applies
/// them as-is.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum ColorFilterSrgb {
    GrayscaleNtsc,
    GrayscaleFlat,
    GrayscaleBt709,
    GrayscaleRy,
    Sepia,
    Invert,
    Alpha(f32),
    Contrast(f32),
    Brightness(f32),
    Saturation(f32),
}

#[cfg(test)]
#[path = "../../tests/unit/steps/params.rs"]
mod tests;
