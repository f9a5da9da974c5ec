use serde::Serialize;

use crate::steps::params::Color;

/// Encoder preset nested under an `encode` node.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EncoderPreset {
    /// Lossless PNG.
    Lodepng {
        /// Spend more time on deflate for smaller files.
        #[serde(skip_serializing_if = "Option::is_none")]
        maximum_deflate: Option<bool>,
    },
    /// Lossy, optimized JPEG.
    Mozjpeg {
        /// Quality from 0 to 100.
        #[serde(skip_serializing_if = "Option::is_none")]
        quality: Option<u8>,
        /// Emit a progressive JPEG.
        #[serde(skip_serializing_if = "Option::is_none")]
        progressive: Option<bool>,
        /// Background used to flatten transparency.
        #[serde(skip_serializing_if = "Option::is_none")]
        matte: Option<Color>,
    },
    /// Palette-quantized PNG.
    Pngquant {
        /// Target quality from 0 to 100.
        #[serde(skip_serializing_if = "Option::is_none")]
        quality: Option<u8>,
        /// Below this quality the engine falls back to lossless PNG.
        #[serde(skip_serializing_if = "Option::is_none")]
        minimum_quality: Option<u8>,
        /// Speed from 1 (slowest) to 10.
        #[serde(skip_serializing_if = "Option::is_none")]
        speed: Option<u8>,
        /// Spend more time on deflate for smaller files.
        #[serde(skip_serializing_if = "Option::is_none")]
        maximum_deflate: Option<bool>,
    },
    /// Lossy WebP.
    #[serde(rename = "webplossy")]
    WebpLossy {
        /// Quality from 0 to 100.
        quality: f32,
    },
    /// Lossless WebP.
    #[serde(rename = "webplossless")]
    WebpLossless,
    /// GIF.
    Gif,
}

impl EncoderPreset {
    /// Lossless PNG with engine defaults.
    pub fn lossless_png() -> Self {
        Self::Lodepng {
            maximum_deflate: None,
        }
    }

    /// MozJPEG with engine defaults.
    pub fn mozjpeg() -> Self {
        Self::Mozjpeg {
            quality: None,
            progressive: None,
            matte: None,
        }
    }

    /// MozJPEG at `quality`.
    pub fn mozjpeg_quality(quality: u8) -> Self {
        Self::Mozjpeg {
            quality: Some(quality),
            progressive: None,
            matte: None,
        }
    }

    /// Palette-quantized PNG with engine defaults.
    pub fn pngquant() -> Self {
        Self::Pngquant {
            quality: None,
            minimum_quality: None,
            speed: None,
            maximum_deflate: None,
        }
    }

    /// Short format name, used in logs.
    pub fn format(&self) -> &'static str {
        match self {
            Self::Lodepng { .. } | Self::Pngquant { .. } => "png",
            Self::Mozjpeg { .. } => "jpeg",
            Self::WebpLossy { .. } | Self::WebpLossless => "webp",
            Self::Gif => "gif",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/steps/preset.rs"]
mod tests;
