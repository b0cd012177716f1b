use ndarray::Array2;

use crate::io::DecodedImage;

/// Signal-to-noise ratio of an image: mean over population standard deviation.
pub fn snr(image: &DecodedImage) -> f64 {
    snr_array(&image.data)
}

/// SNR over every sample of `data`.
///
/// A zero-variance (uniform) array has infinite SNR. An empty array yields NaN.
pub fn snr_array(data: &Array2<f64>) -> f64 {
    let count = data.len() as f64;
    let mean = data.sum() / count;
    let variance = data.iter().map(|&v| (v - mean) * (v - mean)).sum::<f64>() / count;
    let std_dev = variance.sqrt();

    if std_dev == 0.0 {
        f64::INFINITY
    } else {
        mean / std_dev
    }
}
