use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::foundation::ids::IoId;
use crate::steps::params::{
    ColorFilterSrgb, Constrain, CopyRectToCanvas, CropWhitespace, DrawExact, ExpandCanvas,
    FillRect, FitBox, Gravity, Region, RegionPercent, ResampleHints, Watermark, WatermarkFitMode,
};
use crate::steps::preset::EncoderPreset;

/// One pipeline operation.
///
/// Each variant carries only the parameters of its operation. On the wire a node is a single-key
/// object `{ "<kind>": <params> }`; operations without parameters carry `null`, and the vacant
/// [`Node::Placeholder`] serializes as a bare `null`.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    /// Vacant node 0 of a fresh graph, replaced by the first decode.
    Placeholder,
    /// Decode the input registered under `io_id`.
    Decode {
        /// Input slot.
        io_id: IoId,
    },
    /// Encode to the output registered under `io_id`.
    Encode {
        /// Output slot.
        io_id: IoId,
        /// Encoder preset.
        preset: EncoderPreset,
    },
    /// Resize under a constraint.
    Constrain(Constrain),
    /// Rotate 90 degrees clockwise.
    Rotate90,
    /// Rotate 180 degrees.
    Rotate180,
    /// Rotate 270 degrees clockwise.
    Rotate270,
    /// Mirror horizontally.
    FlipH,
    /// Mirror vertically.
    FlipV,
    /// Swap axes.
    Transpose,
    /// Crop or pad to absolute bounds.
    Region(Region),
    /// Crop or pad to percentage bounds.
    RegionPercent(RegionPercent),
    /// Trim uniform borders.
    CropWhitespace(CropWhitespace),
    /// Fill a rectangle.
    FillRect(FillRect),
    /// Grow the canvas.
    ExpandCanvas(ExpandCanvas),
    /// Draw the image registered under `io_id` over the current one.
    Watermark {
        /// Input slot of the watermark image.
        io_id: IoId,
        /// Placement, opacity, and resampling.
        placement: Watermark,
    },
    /// Copy a rectangle of the drawn image onto a canvas.
    CopyRectToCanvas(CopyRectToCanvas),
    /// Resample the drawn image into an exact rectangle of a canvas.
    DrawExact(DrawExact),
    /// Engine command string (querystring-style mini language).
    CommandString(String),
    /// sRGB color filter.
    ColorFilterSrgb(ColorFilterSrgb),
    /// sRGB histogram-area white balance.
    WhiteBalanceSrgb {
        /// Histogram area threshold; engine default when `None`.
        threshold: Option<f32>,
    },
}

impl Node {
    /// Wire discriminator of this node; `None` for the placeholder.
    pub fn kind(&self) -> Option<&'static str> {
        Some(match self {
            Self::Placeholder => return None,
            Self::Decode { .. } => "decode",
            Self::Encode { .. } => "encode",
            Self::Constrain(_) => "constrain",
            Self::Rotate90 => "rotate_90",
            Self::Rotate180 => "rotate_180",
            Self::Rotate270 => "rotate_270",
            Self::FlipH => "flip_h",
            Self::FlipV => "flip_v",
            Self::Transpose => "transpose",
            Self::Region(_) => "region",
            Self::RegionPercent(_) => "region_percent",
            Self::CropWhitespace(_) => "crop_whitespace",
            Self::FillRect(_) => "fill_rect",
            Self::ExpandCanvas(_) => "expand_canvas",
            Self::Watermark { .. } => "watermark",
            Self::CopyRectToCanvas(_) => "copy_rect_to_canvas",
            Self::DrawExact(_) => "draw_image_exact",
            Self::CommandString(_) => "command_string",
            Self::ColorFilterSrgb(_) => "color_filter_srgb",
            Self::WhiteBalanceSrgb { .. } => "white_balance_histogram_area_threshold_srgb",
        })
    }

    /// IO slot referenced by this node, if any.
    pub fn io_id(&self) -> Option<IoId> {
        match self {
            Self::Decode { io_id } | Self::Encode { io_id, .. } | Self::Watermark { io_id, .. } => {
                Some(*io_id)
            }
            _ => None,
        }
    }

    /// Whether this node consumes a `canvas` edge in addition to its `input` edge.
    pub fn is_composition(&self) -> bool {
        matches!(self, Self::CopyRectToCanvas(_) | Self::DrawExact(_))
    }
}

#[derive(Serialize)]
struct IoWire {
    io_id: IoId,
}

#[derive(Serialize)]
struct EncodeWire<'a> {
    io_id: IoId,
    preset: &'a EncoderPreset,
}

#[derive(Serialize)]
struct WatermarkWire<'a> {
    io_id: IoId,
    #[serde(skip_serializing_if = "Option::is_none")]
    gravity: Option<&'a Gravity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fit_mode: Option<&'a WatermarkFitMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fit_box: Option<&'a FitBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    opacity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hints: Option<&'a ResampleHints>,
}

#[derive(Serialize)]
struct CommandWire<'a> {
    kind: &'static str,
    value: &'a str,
}

#[derive(Serialize)]
struct WhiteBalanceWire {
    #[serde(skip_serializing_if = "Option::is_none")]
    threshold: Option<f32>,
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        let Some(kind) = self.kind() else {
            return s.serialize_none();
        };
        let mut map = s.serialize_map(Some(1))?;
        match self {
            Self::Decode { io_id } => map.serialize_entry(kind, &IoWire { io_id: *io_id })?,
            Self::Encode { io_id, preset } => map.serialize_entry(
                kind,
                &EncodeWire {
                    io_id: *io_id,
                    preset,
                },
            )?,
            Self::Constrain(p) => map.serialize_entry(kind, p)?,
            Self::Placeholder
            | Self::Rotate90
            | Self::Rotate180
            | Self::Rotate270
            | Self::FlipH
            | Self::FlipV
            | Self::Transpose => map.serialize_entry(kind, &())?,
            Self::Region(p) => map.serialize_entry(kind, p)?,
            Self::RegionPercent(p) => map.serialize_entry(kind, p)?,
            Self::CropWhitespace(p) => map.serialize_entry(kind, p)?,
            Self::FillRect(p) => map.serialize_entry(kind, p)?,
            Self::ExpandCanvas(p) => map.serialize_entry(kind, p)?,
            Self::Watermark { io_id, placement } => map.serialize_entry(
                kind,
                &WatermarkWire {
                    io_id: *io_id,
                    gravity: placement.gravity.as_ref(),
                    fit_mode: placement.fit_mode.as_ref(),
                    fit_box: placement.fit_box.as_ref(),
                    opacity: placement.opacity,
                    hints: placement.hints.as_ref(),
                },
            )?,
            Self::CopyRectToCanvas(p) => map.serialize_entry(kind, p)?,
            Self::DrawExact(p) => map.serialize_entry(kind, p)?,
            Self::CommandString(value) => map.serialize_entry(
                kind,
                &CommandWire {
                    kind: "ir4",
                    value,
                },
            )?,
            Self::ColorFilterSrgb(p) => map.serialize_entry(kind, p)?,
            Self::WhiteBalanceSrgb { threshold } => map.serialize_entry(
                kind,
                &WhiteBalanceWire {
                    threshold: *threshold,
                },
            )?,
        }
        map.end()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/steps/node.rs"]
mod tests;
