//! framewise compiles fluent image-pipeline descriptions into imageflow "framewise" graphs and
//! runs them on an external engine.
//!
//! # Pipeline overview
//!
//! 1. **Build**: chain operations on [`Steps`] (`decode`, transforms, `encode`, with `branch`
//!    and canvas composition for multi-output and multi-input graphs).
//! 2. **Serialize**: the builder's [`Graph`] becomes a single JSON document
//!    (`{"framewise": {"graph": {"nodes": ..., "edges": ...}}}`).
//! 3. **Execute**: [`execute()`] hands the document plus input buffers to an [`Engine`] and
//!    collects the encoded outputs keyed by label.
//!
//! The builder is pure data manipulation: it performs no IO and raises no errors. All IO
//! happens during execution, through [`Input`], [`Output`], and the engine.
//!
//! ```no_run
//! use framewise::{ImageflowTool, Input, Output, Steps};
//!
//! let outputs = Steps::new()
//!     .decode(Input::file("photo.jpg"))
//!     .constrain_within(800.0, 600.0)
//!     .branch(|s| s.grayscale_bt709().png(Output::buffer("gray")))
//!     .jpeg(Output::file("out/photo_small.jpg"))
//!     .execute(&ImageflowTool::from_env())?;
//! assert!(outputs.contains_key("gray"));
//! # Ok::<(), framewise::FramewiseError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Execution protocol and engines.
pub mod execute;
/// Graph model and serialization.
pub mod graph;
/// Pipeline builder and IO descriptors.
pub mod pipeline;
/// Operation nodes and parameters.
pub mod steps;

pub use crate::execute::engine::Engine;
pub use crate::execute::execute;
pub use crate::execute::tool::{ImageflowTool, ImageflowToolOpts, ToolContext};
pub use crate::foundation::error::{FramewiseError, FramewiseResult};
pub use crate::foundation::ids::{IoAllocator, IoId, NodeIndex};
pub use crate::graph::model::{Edge, EdgeKind, Graph};
pub use crate::pipeline::builder::Steps;
pub use crate::pipeline::io::{Input, Output};
pub use crate::steps::node::Node;
pub use crate::steps::params::{
    Color, ColorFilterSrgb, CompositingMode, Constrain, ConstraintMode, CopyRectToCanvas,
    CropWhitespace, DrawExact, ExpandCanvas, FillRect, Filter, FitBox, Gravity, Region,
    RegionPercent, ResampleHints, ResampleWhen, ScalingColorspace, SharpenWhen, SrgbColor,
    Watermark, WatermarkFitMode,
};
pub use crate::steps::preset::EncoderPreset;
