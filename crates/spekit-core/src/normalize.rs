use ndarray::Array2;

use crate::consts::U16_FULL_SCALE;
use crate::frame::{NormalizedFrame, PixelType, RawFrame};

/// Coerce a frame to unsigned 16-bit samples.
///
/// Frames already stored as `uint16` pass through unchanged. Every other
/// type is stretched by `65535 / max`, where `max` is this frame's own
/// largest sample, then truncated toward zero. Scaling is per frame, so
/// absolute intensity is not comparable between frames of one recording.
///
/// A frame whose maximum is not positive (all zero, all negative, or all
/// NaN) cannot be stretched and comes out all zero. Results are clamped to
/// `[0, 65535]`; NaN samples become 0.
pub fn normalize_frame(frame: &RawFrame) -> NormalizedFrame {
    let data = if frame.pixel_type == PixelType::U16 {
        frame.data.mapv(|v| v as u16)
    } else {
        match frame_max(&frame.data) {
            Some(max) if max > 0.0 => frame.data.mapv(|v| (v / max * U16_FULL_SCALE) as u16),
            _ => Array2::zeros(frame.data.dim()),
        }
    };

    NormalizedFrame {
        data,
        metadata: frame.metadata.clone(),
    }
}

/// Largest non-NaN sample, or `None` for an empty or all-NaN frame.
pub fn frame_max(data: &Array2<f64>) -> Option<f64> {
    data.iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            Some(m) if m >= v => Some(m),
            _ => Some(v),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_max_skips_nan() {
        let data = Array2::from_shape_vec((1, 3), vec![1.0, f64::NAN, 3.0]).unwrap();
        assert_eq!(frame_max(&data), Some(3.0));
    }

    #[test]
    fn frame_max_of_all_nan_is_none() {
        let data = Array2::from_elem((2, 2), f64::NAN);
        assert_eq!(frame_max(&data), None);
    }
}
