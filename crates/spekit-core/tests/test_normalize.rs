use ndarray::{array, Array2};

use spekit_core::frame::{PixelType, RawFrame};
use spekit_core::normalize::normalize_frame;

#[test]
fn test_u16_passes_through_unchanged() {
    let data = array![[0.0, 1.0], [40000.0, 65535.0]];
    let out = normalize_frame(&RawFrame::new(data, PixelType::U16));
    assert_eq!(out.data, array![[0u16, 1], [40000, 65535]]);
}

#[test]
fn test_float_frame_stretched_to_full_range() {
    let data = array![[0.0, 250.0], [500.0, 1000.0]];
    let out = normalize_frame(&RawFrame::new(data, PixelType::F32));
    assert_eq!(out.data[[1, 1]], 65535);
    assert_eq!(out.data[[0, 0]], 0);
    // 500 / 1000 * 65535 = 32767.5, truncated
    assert_eq!(out.data[[1, 0]], 32767);
    assert_eq!(out.data[[0, 1]], 16383);
}

#[test]
fn test_u8_frame_is_rescaled() {
    let data = array![[0.0, 100.0, 200.0]];
    let out = normalize_frame(&RawFrame::new(data, PixelType::U8));
    assert_eq!(out.data, array![[0u16, 32767, 65535]]);
}

#[test]
fn test_all_zero_frame_stays_zero() {
    let data = Array2::<f64>::zeros((3, 3));
    let out = normalize_frame(&RawFrame::new(data, PixelType::F32));
    assert!(out.data.iter().all(|&v| v == 0));
    assert_eq!(out.data.dim(), (3, 3));
}

#[test]
fn test_all_negative_frame_stays_zero() {
    let data = array![[-4.0, -2.0]];
    let out = normalize_frame(&RawFrame::new(data, PixelType::I16));
    assert_eq!(out.data, array![[0u16, 0]]);
}

#[test]
fn test_negative_samples_clamp_to_zero() {
    let data = array![[-10.0, 0.0, 10.0]];
    let out = normalize_frame(&RawFrame::new(data, PixelType::I32));
    assert_eq!(out.data, array![[0u16, 0, 65535]]);
}

#[test]
fn test_scaling_is_per_frame() {
    let a = normalize_frame(&RawFrame::new(array![[10.0, 20.0]], PixelType::F64));
    let b = normalize_frame(&RawFrame::new(array![[10.0, 40.0]], PixelType::F64));
    assert_eq!(a.data[[0, 1]], 65535);
    assert_eq!(b.data[[0, 1]], 65535);
    assert_ne!(a.data[[0, 0]], b.data[[0, 0]]);
}

#[test]
fn test_nan_samples_become_zero() {
    let data = array![[f64::NAN, 2.0, 4.0]];
    let out = normalize_frame(&RawFrame::new(data, PixelType::F32));
    assert_eq!(out.data, array![[0u16, 32767, 65535]]);
}

#[test]
fn test_frame_index_carried_over() {
    let mut frame = RawFrame::new(array![[1.0]], PixelType::F32);
    frame.metadata.frame_index = 7;
    assert_eq!(normalize_frame(&frame).metadata.frame_index, 7);
}
