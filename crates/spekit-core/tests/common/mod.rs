#![allow(dead_code)]

use std::path::Path;

use spekit_core::io::spe::{SPE_HEADER_SIZE, SPE_LAST_VALUE};

/// Build a 4100-byte SPE header.
///
/// `datatype`: 0=float32, 1=int32, 2=int16, 3=uint16, 5=float64, 6=uint8, 8=uint32
pub fn build_spe_header(width: u16, height: u16, datatype: i16, num_frames: i32) -> Vec<u8> {
    let mut buf = vec![0u8; SPE_HEADER_SIZE];

    // Exposure (s)
    buf[10..14].copy_from_slice(&0.5f32.to_le_bytes());
    // Date
    buf[20..29].copy_from_slice(b"19Oct2026");
    // Detector temperature
    buf[36..40].copy_from_slice(&(-70.0f32).to_le_bytes());
    buf[42..44].copy_from_slice(&width.to_le_bytes());
    buf[108..110].copy_from_slice(&datatype.to_le_bytes());
    buf[656..658].copy_from_slice(&height.to_le_bytes());
    buf[1446..1450].copy_from_slice(&num_frames.to_le_bytes());
    buf[1992..1996].copy_from_slice(&3.0f32.to_le_bytes());
    buf[4098..4100].copy_from_slice(&SPE_LAST_VALUE.to_le_bytes());

    buf
}

/// Complete float32 SPE file; each inner slice is one frame in row-major order.
pub fn build_spe_f32(width: u16, height: u16, frames: &[Vec<f32>]) -> Vec<u8> {
    let mut buf = build_spe_header(width, height, 0, frames.len() as i32);
    for frame in frames {
        assert_eq!(frame.len(), width as usize * height as usize);
        for v in frame {
            buf.extend_from_slice(&v.to_le_bytes());
        }
    }
    buf
}

/// Complete uint16 SPE file.
pub fn build_spe_u16(width: u16, height: u16, frames: &[Vec<u16>]) -> Vec<u8> {
    let mut buf = build_spe_header(width, height, 3, frames.len() as i32);
    for frame in frames {
        assert_eq!(frame.len(), width as usize * height as usize);
        for v in frame {
            buf.extend_from_slice(&v.to_le_bytes());
        }
    }
    buf
}

/// Complete int16 SPE file.
pub fn build_spe_i16(width: u16, height: u16, frames: &[Vec<i16>]) -> Vec<u8> {
    let mut buf = build_spe_header(width, height, 2, frames.len() as i32);
    for frame in frames {
        for v in frame {
            buf.extend_from_slice(&v.to_le_bytes());
        }
    }
    buf
}

/// Write `data` to `path`, creating parent directories.
pub fn write_file(path: &Path, data: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent dirs");
    }
    std::fs::write(path, data).expect("write file");
}

/// Write a 16-bit grayscale TIFF with the given samples.
pub fn write_u16_tiff(path: &Path, width: u32, height: u32, samples: Vec<u16>) {
    let img = image::ImageBuffer::<image::Luma<u16>, Vec<u16>>::from_raw(width, height, samples)
        .expect("buffer size matches dimensions");
    img.save_with_format(path, image::ImageFormat::Tiff)
        .expect("save tiff");
}
