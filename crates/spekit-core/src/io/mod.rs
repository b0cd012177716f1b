pub mod image_io;
pub mod spe;

use std::ffi::OsStr;
use std::path::Path;

use ndarray::Array2;

use crate::error::Result;
use crate::frame::RawFrame;

pub use image_io::{DecodedImage, TiffCodec};
pub use spe::SpeDecoder;

/// Decodes a multi-frame recording into its ordered frame stack.
pub trait FrameDecoder {
    /// Read every frame of the recording, in stack order.
    fn decode(&self, path: &Path) -> Result<Vec<RawFrame>>;
}

/// Lossless single-image reader/writer.
pub trait ImageCodec {
    /// Write unsigned 16-bit samples to `path`.
    fn write_u16(&self, data: &Array2<u16>, path: &Path) -> Result<()>;

    /// Read an image keeping its native sample values (no rescaling).
    fn read_unchanged(&self, path: &Path) -> Result<DecodedImage>;
}

/// Case-insensitive check that `name` ends in `.<ext>`.
///
/// Compares raw bytes, so names that are not valid UTF-8 still match.
pub fn has_extension(name: &OsStr, ext: &str) -> bool {
    let name = name.as_encoded_bytes();
    let ext = ext.as_bytes();
    if name.len() <= ext.len() {
        return false;
    }
    let (head, tail) = name.split_at(name.len() - ext.len());
    head.ends_with(b".") && tail.eq_ignore_ascii_case(ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_match_ignores_case() {
        assert!(has_extension(OsStr::new("run1.spe"), "spe"));
        assert!(has_extension(OsStr::new("RUN1.SPE"), "spe"));
        assert!(has_extension(OsStr::new("run1.Spe"), "SPE"));
    }

    #[test]
    fn extension_match_requires_dot() {
        assert!(!has_extension(OsStr::new("run1spe"), "spe"));
        assert!(!has_extension(OsStr::new("spe"), "spe"));
        assert!(!has_extension(OsStr::new("run1.spe.bak"), "spe"));
    }

    #[test]
    fn extension_match_survives_multibyte_names() {
        assert!(!has_extension(OsStr::new("é"), "spe"));
        assert!(has_extension(OsStr::new("ébruit.tiff"), "tiff"));
    }

    #[cfg(unix)]
    #[test]
    fn extension_match_accepts_non_utf8_names() {
        use std::os::unix::ffi::OsStrExt;

        assert!(has_extension(OsStr::from_bytes(b"r\xffun.spe"), "spe"));
        assert!(has_extension(OsStr::from_bytes(b"fr\xffame.TIFF"), "tiff"));
        assert!(!has_extension(OsStr::from_bytes(b"r\xffun.sp\xff"), "spe"));
    }
}
