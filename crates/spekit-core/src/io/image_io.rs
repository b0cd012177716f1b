use std::path::Path;

use image::{DynamicImage, ImageBuffer, ImageFormat, Luma, Pixel};
use ndarray::Array2;
use num_traits::AsPrimitive;

use crate::error::{Result, SpekitError};

use super::ImageCodec;

/// An image read back without any rescaling.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    /// Native sample values, shape = (height, width * channels).
    pub data: Array2<f64>,
    /// Bits per sample of the stored file (8, 16 or 32).
    pub bit_depth: u8,
    pub channels: u8,
}

impl DecodedImage {
    pub fn width(&self) -> usize {
        self.data.ncols() / self.channels.max(1) as usize
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }
}

/// Save unsigned 16-bit samples as a grayscale image.
///
/// The container is picked from the extension; anything unknown is written as TIFF.
pub fn save_u16(data: &Array2<u16>, path: &Path) -> Result<()> {
    let (h, w) = data.dim();
    let pixels: Vec<u16> = data.iter().copied().collect();

    let img = ImageBuffer::<Luma<u16>, Vec<u16>>::from_raw(w as u32, h as u32, pixels).ok_or(
        SpekitError::InvalidDimensions {
            width: w as u32,
            height: h as u32,
        },
    )?;
    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Tiff);
    img.save_with_format(path, format)?;
    Ok(())
}

/// Load an image file keeping its native sample type and values.
pub fn load_image_unchanged(path: &Path) -> Result<DecodedImage> {
    let img = image::open(path)?;
    match img {
        DynamicImage::ImageLuma8(buf) => from_buffer(&buf, 8),
        DynamicImage::ImageLumaA8(buf) => from_buffer(&buf, 8),
        DynamicImage::ImageRgb8(buf) => from_buffer(&buf, 8),
        DynamicImage::ImageRgba8(buf) => from_buffer(&buf, 8),
        DynamicImage::ImageLuma16(buf) => from_buffer(&buf, 16),
        DynamicImage::ImageLumaA16(buf) => from_buffer(&buf, 16),
        DynamicImage::ImageRgb16(buf) => from_buffer(&buf, 16),
        DynamicImage::ImageRgba16(buf) => from_buffer(&buf, 16),
        DynamicImage::ImageRgb32F(buf) => from_buffer(&buf, 32),
        DynamicImage::ImageRgba32F(buf) => from_buffer(&buf, 32),
        other => from_buffer(&other.to_rgba32f(), 32),
    }
}

fn from_buffer<P>(buf: &ImageBuffer<P, Vec<P::Subpixel>>, bit_depth: u8) -> Result<DecodedImage>
where
    P: Pixel,
    P::Subpixel: AsPrimitive<f64>,
{
    let (w, h) = buf.dimensions();
    if w == 0 || h == 0 {
        return Err(SpekitError::InvalidDimensions {
            width: w,
            height: h,
        });
    }

    let channels = P::CHANNEL_COUNT;
    let samples: Vec<f64> = buf.as_raw().iter().map(|&v| v.as_()).collect();
    let data = Array2::from_shape_vec((h as usize, w as usize * channels as usize), samples)
        .map_err(|_| SpekitError::InvalidDimensions {
            width: w,
            height: h,
        })?;

    Ok(DecodedImage {
        data,
        bit_depth,
        channels,
    })
}

/// [`ImageCodec`] writing 16-bit TIFF and reading any format `image` understands.
#[derive(Clone, Copy, Debug, Default)]
pub struct TiffCodec;

impl ImageCodec for TiffCodec {
    fn write_u16(&self, data: &Array2<u16>, path: &Path) -> Result<()> {
        save_u16(data, path)
    }

    fn read_unchanged(&self, path: &Path) -> Result<DecodedImage> {
        load_image_unchanged(path)
    }
}
