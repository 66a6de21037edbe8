use rayon::prelude::*;

use crate::foundation::core::Canvas;
use crate::foundation::error::{BannerError, BannerResult};

const Q16_ONE: i64 = 1 << 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Separable Gaussian blur over a premultiplied canvas, in place.
///
/// `sigma` is the standard deviation in pixels; the kernel spans `ceil(3 * sigma)` pixels on each
/// side and edges are clamped. `sigma == 0` leaves the canvas untouched.
pub fn gaussian_blur(canvas: &mut Canvas, sigma: f32) -> BannerResult<()> {
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(BannerError::composite("blur sigma must be finite and >= 0"));
    }
    let radius = kernel_radius(sigma);
    if radius == 0 || canvas.width == 0 || canvas.height == 0 {
        return Ok(());
    }

    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let (w, h) = (canvas.width, canvas.height);
    let mut tmp = vec![0u8; canvas.data.len()];
    blur_pass(&canvas.data, &mut tmp, w, h, &kernel, Axis::Horizontal);
    blur_pass(&tmp, &mut canvas.data, w, h, &kernel, Axis::Vertical);
    Ok(())
}

pub(crate) fn kernel_radius(sigma: f32) -> u32 {
    (3.0 * sigma).ceil() as u32
}

/// Normalized Gaussian weights in Q16 fixed point; they always sum to exactly `1 << 16`.
pub(crate) fn gaussian_kernel_q16(radius: u32, sigma: f32) -> BannerResult<Vec<u32>> {
    if radius == 0 {
        return Ok(vec![Q16_ONE as u32]);
    }
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(BannerError::composite("blur sigma must be > 0"));
    }

    let r = radius as i32;
    let denom = 2.0 * f64::from(sigma) * f64::from(sigma);
    let weights_f: Vec<f64> = (-r..=r)
        .map(|i| (-f64::from(i * i) / denom).exp())
        .collect();
    let sum: f64 = weights_f.iter().sum();
    if sum <= 0.0 {
        return Err(BannerError::composite("gaussian kernel sum is zero"));
    }

    let mut weights: Vec<u32> = weights_f
        .iter()
        .map(|wf| ((wf / sum) * Q16_ONE as f64).round().clamp(0.0, Q16_ONE as f64) as u32)
        .collect();

    // Push the rounding residue into the center tap.
    let acc: i64 = weights.iter().map(|&w| i64::from(w)).sum();
    let mid = weights.len() / 2;
    weights[mid] = (i64::from(weights[mid]) + Q16_ONE - acc).clamp(0, Q16_ONE) as u32;
    Ok(weights)
}

fn blur_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32], axis: Axis) {
    let radius = (k.len() / 2) as i64;
    let (w, h) = (i64::from(width), i64::from(height));
    let row_bytes = (width as usize) * 4;

    dst.par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| {
            let y = y as i64;
            for x in 0..w {
                let mut acc = [0u64; 4];
                for (ki, &kw) in k.iter().enumerate() {
                    let d = ki as i64 - radius;
                    let (sx, sy) = match axis {
                        Axis::Horizontal => ((x + d).clamp(0, w - 1), y),
                        Axis::Vertical => (x, (y + d).clamp(0, h - 1)),
                    };
                    let idx = ((sy * w + sx) as usize) * 4;
                    for c in 0..4 {
                        acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                    }
                }
                let out = (x as usize) * 4;
                for c in 0..4 {
                    row[out + c] = q16_to_u8(acc[c]);
                }
            }
        });
}

fn q16_to_u8(acc: u64) -> u8 {
    ((acc + 32768) >> 16).min(255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blur.rs"]
mod tests;
