use std::collections::BTreeMap;

use crate::execute::engine::Engine;
use crate::foundation::error::{FramewiseError, FramewiseResult};
use crate::foundation::ids::{IoAllocator, IoId, NodeIndex};
use crate::graph::document;
use crate::graph::model::{EdgeKind, Graph};
use crate::graph::validate::validate_graph;
use crate::pipeline::io::{Input, Output, duplicate_label};
use crate::steps::node::Node;
use crate::steps::params::{
    Color, ColorFilterSrgb, Constrain, ConstraintMode, CopyRectToCanvas, CropWhitespace,
    DrawExact, ExpandCanvas, FillRect, Region, RegionPercent, Watermark,
};
use crate::steps::preset::EncoderPreset;

/// Fluent builder that records an image pipeline as a framewise graph.
///
/// Every operation appends to the graph and returns the builder. Chained operations attach an
/// `input` edge from the cursor (the last node) to the new node and move the cursor onto it.
/// [`Steps::branch`] restores the cursor after its callback so several chains can hang off one
/// node; [`Steps::copy_rect_to_canvas`] and [`Steps::draw_exact`] merge a side chain into a
/// composition node.
///
/// ```
/// use framewise::{Input, Output, Steps};
///
/// let steps = Steps::new()
///     .decode(Input::file("photo.jpg"))
///     .branch(|s| s.constrain_within(800.0, 600.0).png(Output::buffer("large")))
///     .constrain_within(100.0, 100.0)
///     .jpeg(Output::buffer("thumb"));
///
/// assert_eq!(steps.io_count(), 3);
/// ```
///
/// The builder does not validate chains; see [`Steps::validate`].
#[derive(Debug)]
pub struct Steps {
    graph: Graph,
    io: IoAllocator,
    last: NodeIndex,
    inputs: Vec<(IoId, Input)>,
    outputs: Vec<(IoId, Output)>,
}

impl Default for Steps {
    fn default() -> Self {
        Self::new()
    }
}

impl Steps {
    /// Empty pipeline; the cursor rests on the placeholder node 0.
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
            io: IoAllocator::new(),
            last: NodeIndex(0),
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// The graph built so far.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Current cursor.
    pub fn last(&self) -> NodeIndex {
        self.last
    }

    /// Declared inputs (decodes and watermarks) with their IO slots, in declaration order.
    pub fn inputs(&self) -> &[(IoId, Input)] {
        &self.inputs
    }

    /// Declared outputs with their IO slots, in declaration order.
    pub fn outputs(&self) -> &[(IoId, Output)] {
        &self.outputs
    }

    /// Number of IO slots assigned so far.
    pub fn io_count(&self) -> u32 {
        self.io.issued()
    }

    fn chain(mut self, node: Node) -> Self {
        let idx = self.graph.push(node);
        self.graph.connect(self.last, idx, EdgeKind::Input);
        self.last = idx;
        self
    }

    /// Register `input` and decode it. Starts a chain: the cursor moves to the decode node.
    pub fn decode(mut self, input: Input) -> Self {
        let io_id = self.io.allocate();
        self.inputs.push((io_id, input));
        self.last = self.graph.push_root(Node::Decode { io_id });
        self
    }

    /// Register `output` and encode the current image into it with `preset`.
    pub fn encode(mut self, output: Output, preset: EncoderPreset) -> Self {
        let io_id = self.io.allocate();
        tracing::trace!(%io_id, format = preset.format(), "declare output");
        self.outputs.push((io_id, output));
        self.chain(Node::Encode { io_id, preset })
    }

    /// Encode as lossless PNG.
    pub fn png(self, output: Output) -> Self {
        self.encode(output, EncoderPreset::lossless_png())
    }

    /// Encode as MozJPEG with engine defaults.
    pub fn jpeg(self, output: Output) -> Self {
        self.encode(output, EncoderPreset::mozjpeg())
    }

    /// Encode as lossless WebP.
    pub fn webp(self, output: Output) -> Self {
        self.encode(output, EncoderPreset::WebpLossless)
    }

    /// Encode as GIF.
    pub fn gif(self, output: Output) -> Self {
        self.encode(output, EncoderPreset::Gif)
    }

    /// Encode as palette-quantized PNG with engine defaults.
    pub fn lossy_png(self, output: Output) -> Self {
        self.encode(output, EncoderPreset::pngquant())
    }

    /// Encode as lossy WebP at `quality`.
    pub fn lossy_webp(self, output: Output, quality: f32) -> Self {
        self.encode(output, EncoderPreset::WebpLossy { quality })
    }

    /// Resize under an arbitrary constraint.
    pub fn constrain(self, constraint: Constrain) -> Self {
        self.chain(Node::Constrain(constraint))
    }

    /// Downscale to fit within `w` x `h`.
    pub fn constrain_within(self, w: f64, h: f64) -> Self {
        self.constrain(Constrain::new(ConstraintMode::Within).w(w).h(h))
    }

    /// Downscale to at most `w` wide.
    pub fn constrain_within_w(self, w: f64) -> Self {
        self.constrain(Constrain::new(ConstraintMode::Within).w(w))
    }

    /// Downscale to at most `h` tall.
    pub fn constrain_within_h(self, h: f64) -> Self {
        self.constrain(Constrain::new(ConstraintMode::Within).h(h))
    }

    /// Rotate 90 degrees clockwise.
    pub fn rotate_90(self) -> Self {
        self.chain(Node::Rotate90)
    }

    /// Rotate 180 degrees.
    pub fn rotate_180(self) -> Self {
        self.chain(Node::Rotate180)
    }

    /// Rotate 270 degrees clockwise.
    pub fn rotate_270(self) -> Self {
        self.chain(Node::Rotate270)
    }

    /// Mirror horizontally.
    pub fn flip_h(self) -> Self {
        self.chain(Node::FlipH)
    }

    /// Mirror vertically.
    pub fn flip_v(self) -> Self {
        self.chain(Node::FlipV)
    }

    /// Swap the image axes.
    pub fn transpose(self) -> Self {
        self.chain(Node::Transpose)
    }

    /// Crop or pad to absolute bounds.
    pub fn region(self, region: Region) -> Self {
        self.chain(Node::Region(region))
    }

    /// Crop or pad to bounds in percent of the image size.
    pub fn region_percent(self, region: RegionPercent) -> Self {
        self.chain(Node::RegionPercent(region))
    }

    /// Trim borders whose color stays within `threshold`, keeping `percent_padding` around the
    /// content.
    pub fn crop_whitespace(self, threshold: u32, percent_padding: f32) -> Self {
        self.chain(Node::CropWhitespace(CropWhitespace {
            threshold,
            percent_padding,
        }))
    }

    /// Fill the rectangle `(x1, y1)`-`(x2, y2)` with `color`.
    pub fn fill_rect(self, x1: f64, y1: f64, x2: f64, y2: f64, color: Color) -> Self {
        self.chain(Node::FillRect(FillRect {
            x1,
            y1,
            x2,
            y2,
            color,
        }))
    }

    /// Grow the canvas.
    pub fn expand_canvas(self, canvas: ExpandCanvas) -> Self {
        self.chain(Node::ExpandCanvas(canvas))
    }

    /// Register `input` as a watermark image and draw it over the current image.
    ///
    /// The watermark gets its own IO slot; it does not start a chain.
    pub fn watermark(mut self, input: Input, placement: Watermark) -> Self {
        let io_id = self.io.allocate();
        self.inputs.push((io_id, input));
        self.chain(Node::Watermark { io_id, placement })
    }

    /// Run an engine command string (querystring-style mini language).
    pub fn command(self, command: impl Into<String>) -> Self {
        self.chain(Node::CommandString(command.into()))
    }

    fn color_filter(self, filter: ColorFilterSrgb) -> Self {
        self.chain(Node::ColorFilterSrgb(filter))
    }

    /// NTSC grayscale. Operates in sRGB space; results are approximate.
    pub fn grayscale_ntsc(self) -> Self {
        self.color_filter(ColorFilterSrgb::GrayscaleNtsc)
    }

    /// Flat-weighted grayscale. Operates in sRGB space; results are approximate.
    pub fn grayscale_flat(self) -> Self {
        self.color_filter(ColorFilterSrgb::GrayscaleFlat)
    }

    /// BT.709 grayscale. Operates in sRGB space; results are approximate.
    pub fn grayscale_bt709(self) -> Self {
        self.color_filter(ColorFilterSrgb::GrayscaleBt709)
    }

    /// RY grayscale. Operates in sRGB space; results are approximate.
    pub fn grayscale_ry(self) -> Self {
        self.color_filter(ColorFilterSrgb::GrayscaleRy)
    }

    /// Sepia tone. Operates in sRGB space; results are approximate.
    pub fn sepia(self) -> Self {
        self.color_filter(ColorFilterSrgb::Sepia)
    }

    /// Invert colors. Operates in sRGB space; results are approximate.
    pub fn invert(self) -> Self {
        self.color_filter(ColorFilterSrgb::Invert)
    }

    /// Scale alpha. Operates in sRGB space; results are approximate.
    pub fn alpha(self, value: f32) -> Self {
        self.color_filter(ColorFilterSrgb::Alpha(value))
    }

    /// Adjust contrast. Operates in sRGB space; results are approximate.
    pub fn contrast(self, value: f32) -> Self {
        self.color_filter(ColorFilterSrgb::Contrast(value))
    }

    /// Adjust brightness. Operates in sRGB space; results are approximate.
    pub fn brightness(self, value: f32) -> Self {
        self.color_filter(ColorFilterSrgb::Brightness(value))
    }

    /// Adjust saturation. Operates in sRGB space; results are approximate.
    pub fn saturation(self, value: f32) -> Self {
        self.color_filter(ColorFilterSrgb::Saturation(value))
    }

    /// Histogram-area white balance. Operates in sRGB space; results are approximate.
    pub fn white_balance_srgb(self, threshold: f32) -> Self {
        self.chain(Node::WhiteBalanceSrgb {
            threshold: Some(threshold),
        })
    }

    /// Build a side chain and merge it with the current image.
    ///
    /// The callback starts from the current cursor (`base`) and usually decodes the image to
    /// draw. The composition node then receives an `input` edge from `base` and a `canvas` edge
    /// from wherever the callback left the cursor.
    fn canvas(mut self, f: impl FnOnce(Self) -> Self, node: Node) -> Self {
        let base = self.last;
        self = f(self);
        let drawn = self.last;
        let idx = self.graph.push(node);
        self.graph.connect(base, idx, EdgeKind::Input);
        self.graph.connect(drawn, idx, EdgeKind::Canvas);
        self.last = idx;
        self
    }

    /// Copy a rectangle between the current image and the chain built by `f`.
    pub fn copy_rect_to_canvas(
        self,
        f: impl FnOnce(Self) -> Self,
        rect: CopyRectToCanvas,
    ) -> Self {
        self.canvas(f, Node::CopyRectToCanvas(rect))
    }

    /// Draw between the current image and the chain built by `f` into an exact rectangle.
    pub fn draw_exact(self, f: impl FnOnce(Self) -> Self, rect: DrawExact) -> Self {
        self.canvas(f, Node::DrawExact(rect))
    }

    /// Run `f` as an independent chain from the current node, then restore the cursor.
    pub fn branch(mut self, f: impl FnOnce(Self) -> Self) -> Self {
        let last = self.last;
        self = f(self);
        self.last = last;
        self
    }

    /// Compact framewise document.
    pub fn to_json(&self) -> FramewiseResult<String> {
        document::to_json(&self.graph)
    }

    /// Indented framewise document.
    pub fn to_json_pretty(&self) -> FramewiseResult<String> {
        document::to_json_pretty(&self.graph)
    }

    /// Framewise document as a JSON value.
    pub fn to_value(&self) -> FramewiseResult<serde_json::Value> {
        document::to_value(&self.graph)
    }

    /// Check the graph structure and IO bookkeeping, including that no two outputs share a
    /// label.
    ///
    /// Execution does not call this; malformed graphs otherwise surface as engine failures.
    pub fn validate(&self) -> FramewiseResult<()> {
        validate_graph(&self.graph)?;

        let mut slots: Vec<IoId> = self
            .inputs
            .iter()
            .map(|(id, _)| *id)
            .chain(self.outputs.iter().map(|(id, _)| *id))
            .collect();
        slots.sort();
        if slots.iter().enumerate().any(|(i, id)| id.0 != i as u32)
            || slots.len() != self.io.issued() as usize
        {
            return Err(FramewiseError::validation(
                "io slots are not a contiguous range starting at 0",
            ));
        }

        if let Some(label) = duplicate_label(self.outputs.iter().map(|(_, o)| o)) {
            return Err(FramewiseError::validation(format!(
                "output label '{label}' is declared more than once"
            )));
        }

        for (i, node) in self.graph.nodes().iter().enumerate() {
            let registered = match node {
                Node::Decode { io_id } | Node::Watermark { io_id, .. } => {
                    self.inputs.iter().any(|(id, _)| id == io_id)
                }
                Node::Encode { io_id, .. } => self.outputs.iter().any(|(id, _)| id == io_id),
                _ => true,
            };
            if !registered {
                return Err(FramewiseError::validation(format!(
                    "node {i} references an unregistered io slot"
                )));
            }
        }
        Ok(())
    }

    /// Execute the pipeline on `engine`. See [`crate::execute::execute`].
    pub fn execute<E: Engine>(self, engine: &E) -> FramewiseResult<BTreeMap<String, Vec<u8>>> {
        crate::execute::job::execute(self, engine)
    }

    pub(crate) fn into_parts(self) -> (Graph, Vec<(IoId, Input)>, Vec<(IoId, Output)>) {
        (self.graph, self.inputs, self.outputs)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/builder.rs"]
mod tests;
