mod common;

use ndarray::Array2;

use spekit_core::io::image_io::{load_image_unchanged, save_u16};
use spekit_core::io::{ImageCodec, TiffCodec};

#[test]
fn test_u16_tiff_roundtrip_is_bit_exact() {
    let data = Array2::from_shape_fn((5, 7), |(r, c)| (r * 9000 + c * 1111) as u16);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame_0001.tiff");

    TiffCodec.write_u16(&data, &path).unwrap();
    let loaded = TiffCodec.read_unchanged(&path).unwrap();

    assert_eq!(loaded.bit_depth, 16);
    assert_eq!(loaded.channels, 1);
    assert_eq!(loaded.width(), 7);
    assert_eq!(loaded.height(), 5);
    let back = loaded.data.mapv(|v| v as u16);
    assert_eq!(back, data);
}

#[test]
fn test_full_range_values_survive() {
    let data = Array2::from_shape_vec((1, 3), vec![0u16, 1, 65535]).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("edge.tiff");

    save_u16(&data, &path).unwrap();
    let loaded = load_image_unchanged(&path).unwrap();
    assert_eq!(loaded.data[[0, 0]], 0.0);
    assert_eq!(loaded.data[[0, 1]], 1.0);
    assert_eq!(loaded.data[[0, 2]], 65535.0);
}

#[test]
fn test_read_8bit_keeps_native_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gray8.tiff");
    let img = image::GrayImage::from_raw(2, 1, vec![3, 250]).unwrap();
    img.save_with_format(&path, image::ImageFormat::Tiff).unwrap();

    let loaded = load_image_unchanged(&path).unwrap();
    assert_eq!(loaded.bit_depth, 8);
    assert_eq!(loaded.data[[0, 0]], 3.0);
    assert_eq!(loaded.data[[0, 1]], 250.0);
}

#[test]
fn test_rgb_samples_are_interleaved_per_row() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rgb.tiff");
    let img = image::RgbImage::from_raw(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
    img.save_with_format(&path, image::ImageFormat::Tiff).unwrap();

    let loaded = load_image_unchanged(&path).unwrap();
    assert_eq!(loaded.channels, 3);
    assert_eq!(loaded.data.dim(), (1, 6));
    assert_eq!(loaded.width(), 2);
    assert_eq!(loaded.data[[0, 5]], 6.0);
}

#[test]
fn test_garbage_file_fails_to_decode() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.tiff");
    common::write_file(&path, b"definitely not a tiff");
    assert!(load_image_unchanged(&path).is_err());
}
