use std::path::PathBuf;

use ndarray::Array2;

/// Native sample type of a decoded frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelType {
    U8,
    I16,
    U16,
    I32,
    U32,
    F32,
    F64,
}

impl PixelType {
    /// Size of one sample in bytes.
    pub fn byte_size(&self) -> usize {
        match self {
            Self::U8 => 1,
            Self::I16 | Self::U16 => 2,
            Self::I32 | Self::U32 | Self::F32 => 4,
            Self::F64 => 8,
        }
    }
}

impl std::fmt::Display for PixelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::U8 => write!(f, "uint8"),
            Self::I16 => write!(f, "int16"),
            Self::U16 => write!(f, "uint16"),
            Self::I32 => write!(f, "int32"),
            Self::U32 => write!(f, "uint32"),
            Self::F32 => write!(f, "float32"),
            Self::F64 => write!(f, "float64"),
        }
    }
}

/// A single frame as decoded from a recording.
///
/// Samples are widened to f64 without rescaling; `pixel_type` records the
/// type they were stored as.
#[derive(Clone, Debug)]
pub struct RawFrame {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<f64>,
    pub pixel_type: PixelType,
    pub metadata: FrameMetadata,
}

impl RawFrame {
    pub fn new(data: Array2<f64>, pixel_type: PixelType) -> Self {
        Self {
            data,
            pixel_type,
            metadata: FrameMetadata::default(),
        }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }
}

#[derive(Clone, Debug, Default)]
pub struct FrameMetadata {
    /// 0-based position in the recording's stack.
    pub frame_index: usize,
}

/// A frame coerced to unsigned 16-bit samples.
#[derive(Clone, Debug)]
pub struct NormalizedFrame {
    pub data: Array2<u16>,
    pub metadata: FrameMetadata,
}

impl NormalizedFrame {
    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }
}

/// Metadata about a source recording.
#[derive(Clone, Debug)]
pub struct SourceInfo {
    pub filename: PathBuf,
    pub total_frames: usize,
    pub width: u32,
    pub height: u32,
    pub pixel_type: PixelType,
    pub exposure_sec: f32,
    pub date: Option<String>,
    pub detector_temperature: f32,
    pub header_version: f32,
}
