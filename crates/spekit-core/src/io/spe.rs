use std::fs::File;
use std::path::Path;

use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};
use memmap2::Mmap;
use ndarray::Array2;
use tracing::debug;

use crate::error::{Result, SpekitError};
use crate::frame::{FrameMetadata, PixelType, RawFrame, SourceInfo};

use super::FrameDecoder;

pub const SPE_HEADER_SIZE: usize = 4100;

/// Value stored in the last header word of well-formed files.
pub const SPE_LAST_VALUE: i16 = 0x5555;

const OFFSET_EXPOSURE: usize = 10;
const OFFSET_DATE: usize = 20;
const DATE_LEN: usize = 10;
const OFFSET_DET_TEMPERATURE: usize = 36;
const OFFSET_XDIM: usize = 42;
const OFFSET_DATATYPE: usize = 108;
const OFFSET_YDIM: usize = 656;
const OFFSET_XML_FOOTER: usize = 678;
const OFFSET_NUM_FRAMES: usize = 1446;
const OFFSET_HEADER_VERSION: usize = 1992;
const OFFSET_LAST_VALUE: usize = 4098;

/// SPE file header (4100 bytes, little-endian).
#[derive(Clone, Debug)]
pub struct SpeHeader {
    pub width: u32,
    pub height: u32,
    pub pixel_type: PixelType,
    pub frame_count: u32,
    pub exposure_sec: f32,
    pub date: String,
    pub detector_temperature: f32,
    pub header_version: f32,
    /// Byte offset of the XML footer (SPE 3.x only, 0 otherwise).
    pub xml_footer_offset: u64,
    pub last_value: i16,
}

impl SpeHeader {
    /// Total bytes per frame, or an error if the declared dimensions overflow.
    pub fn frame_byte_size(&self) -> Result<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|pixels| pixels.checked_mul(self.pixel_type.byte_size()))
            .ok_or_else(|| {
                SpekitError::InvalidSpe(format!(
                    "Frame size overflows: {}x{} {}",
                    self.width, self.height, self.pixel_type
                ))
            })
    }
}

/// Map the SPE `datatype` code onto a sample type.
pub fn pixel_type_from_code(code: i16) -> Result<PixelType> {
    match code {
        0 => Ok(PixelType::F32),
        1 => Ok(PixelType::I32),
        2 => Ok(PixelType::I16),
        3 => Ok(PixelType::U16),
        5 => Ok(PixelType::F64),
        6 => Ok(PixelType::U8),
        8 => Ok(PixelType::U32),
        other => Err(SpekitError::UnsupportedPixelType(other)),
    }
}

/// Inverse of [`pixel_type_from_code`].
pub fn pixel_type_code(pixel_type: PixelType) -> i16 {
    match pixel_type {
        PixelType::F32 => 0,
        PixelType::I32 => 1,
        PixelType::I16 => 2,
        PixelType::U16 => 3,
        PixelType::F64 => 5,
        PixelType::U8 => 6,
        PixelType::U32 => 8,
    }
}

/// Memory-mapped SPE file reader.
pub struct SpeReader {
    mmap: Mmap,
    pub header: SpeHeader,
    frame_bytes: usize,
}

impl SpeReader {
    /// Open an SPE file and parse its header.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };

        if mmap.len() < SPE_HEADER_SIZE {
            return Err(SpekitError::InvalidSpe(
                "File too small for SPE header".into(),
            ));
        }

        let header = parse_header(&mmap[..SPE_HEADER_SIZE])?;
        if header.last_value != SPE_LAST_VALUE {
            debug!(
                last_value = header.last_value,
                "SPE header does not end with the usual marker"
            );
        }

        let frame_bytes = header.frame_byte_size()?;
        let expected_data_size = frame_bytes
            .checked_mul(header.frame_count as usize)
            .and_then(|n| n.checked_add(SPE_HEADER_SIZE))
            .ok_or_else(|| SpekitError::InvalidSpe("Declared frame data too large".into()))?;
        if mmap.len() < expected_data_size {
            return Err(SpekitError::InvalidSpe(format!(
                "File truncated: expected at least {} bytes, got {}",
                expected_data_size,
                mmap.len()
            )));
        }

        Ok(Self {
            mmap,
            header,
            frame_bytes,
        })
    }

    pub fn frame_count(&self) -> usize {
        self.header.frame_count as usize
    }

    /// Bytes per frame.
    pub fn frame_bytes(&self) -> usize {
        self.frame_bytes
    }

    /// Get the raw bytes for a single frame (zero-copy from mmap).
    pub fn frame_raw(&self, index: usize) -> Result<&[u8]> {
        let count = self.frame_count();
        if index >= count {
            return Err(SpekitError::FrameIndexOutOfRange {
                index,
                total: count,
            });
        }
        let offset = SPE_HEADER_SIZE + index * self.frame_bytes;
        let end = offset + self.frame_bytes;
        Ok(&self.mmap[offset..end])
    }

    /// Read a single frame, keeping its native sample values.
    pub fn read_frame(&self, index: usize) -> Result<RawFrame> {
        let raw = self.frame_raw(index)?;
        let h = self.header.height as usize;
        let w = self.header.width as usize;
        let data = decode_plane(raw, h, w, self.header.pixel_type);

        let mut frame = RawFrame::new(data, self.header.pixel_type);
        frame.metadata = FrameMetadata { frame_index: index };
        Ok(frame)
    }

    /// Build SourceInfo from the header.
    pub fn source_info(&self, path: &Path) -> SourceInfo {
        SourceInfo {
            filename: path.to_path_buf(),
            total_frames: self.frame_count(),
            width: self.header.width,
            height: self.header.height,
            pixel_type: self.header.pixel_type,
            exposure_sec: self.header.exposure_sec,
            date: non_empty(&self.header.date),
            detector_temperature: self.header.detector_temperature,
            header_version: self.header.header_version,
        }
    }

    /// Iterator over all frames.
    pub fn frames(&self) -> impl Iterator<Item = Result<RawFrame>> + '_ {
        (0..self.frame_count()).map(move |i| self.read_frame(i))
    }
}

/// [`FrameDecoder`] backed by [`SpeReader`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SpeDecoder;

impl FrameDecoder for SpeDecoder {
    fn decode(&self, path: &Path) -> Result<Vec<RawFrame>> {
        let reader = SpeReader::open(path)?;
        reader.frames().collect()
    }
}

fn parse_header(buf: &[u8]) -> Result<SpeHeader> {
    let exposure_sec = LittleEndian::read_f32(&buf[OFFSET_EXPOSURE..]);
    let date = read_fixed_string(&buf[OFFSET_DATE..OFFSET_DATE + DATE_LEN]);
    let detector_temperature = LittleEndian::read_f32(&buf[OFFSET_DET_TEMPERATURE..]);
    let width = LittleEndian::read_u16(&buf[OFFSET_XDIM..]) as u32;
    let datatype = LittleEndian::read_i16(&buf[OFFSET_DATATYPE..]);
    let height = LittleEndian::read_u16(&buf[OFFSET_YDIM..]) as u32;

    let mut cursor = std::io::Cursor::new(&buf[OFFSET_XML_FOOTER..]);
    let xml_footer_offset = cursor.read_u64::<LittleEndian>()?;

    let mut cursor = std::io::Cursor::new(&buf[OFFSET_NUM_FRAMES..]);
    let frame_count = cursor.read_i32::<LittleEndian>()?;

    let header_version = LittleEndian::read_f32(&buf[OFFSET_HEADER_VERSION..]);
    let last_value = LittleEndian::read_i16(&buf[OFFSET_LAST_VALUE..]);

    let pixel_type = pixel_type_from_code(datatype)?;

    if width == 0 || height == 0 {
        return Err(SpekitError::InvalidDimensions { width, height });
    }
    if frame_count < 0 {
        return Err(SpekitError::InvalidSpe(format!(
            "Negative frame count: {frame_count}"
        )));
    }

    Ok(SpeHeader {
        width,
        height,
        pixel_type,
        frame_count: frame_count as u32,
        exposure_sec,
        date,
        detector_temperature,
        header_version,
        xml_footer_offset,
        last_value,
    })
}

fn read_fixed_string(buf: &[u8]) -> String {
    String::from_utf8_lossy(buf)
        .trim_end_matches('\0')
        .trim()
        .to_string()
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() { None } else { Some(s.to_string()) }
}

fn decode_plane(raw: &[u8], height: usize, width: usize, pixel_type: PixelType) -> Array2<f64> {
    let step = pixel_type.byte_size();
    Array2::from_shape_fn((height, width), |(row, col)| {
        let idx = (row * width + col) * step;
        read_sample(&raw[idx..idx + step], pixel_type)
    })
}

fn read_sample(bytes: &[u8], pixel_type: PixelType) -> f64 {
    match pixel_type {
        PixelType::U8 => bytes[0] as f64,
        PixelType::I16 => LittleEndian::read_i16(bytes) as f64,
        PixelType::U16 => LittleEndian::read_u16(bytes) as f64,
        PixelType::I32 => LittleEndian::read_i32(bytes) as f64,
        PixelType::U32 => LittleEndian::read_u32(bytes) as f64,
        PixelType::F32 => LittleEndian::read_f32(bytes) as f64,
        PixelType::F64 => LittleEndian::read_f64(bytes),
    }
}
