use super::*;
use crate::foundation::core::{CanvasSize, Rgba8};

#[test]
fn sigma_0_is_identity() {
    let mut c = Canvas::from_premul(1, 2, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    let before = c.clone();
    gaussian_blur(&mut c, 0.0).unwrap();
    assert_eq!(c, before);
}

#[test]
fn constant_image_is_identity() {
    let mut c = Canvas::filled(CanvasSize::new(6, 4), Rgba8([10, 20, 30, 255]));
    let before = c.clone();
    gaussian_blur(&mut c, 2.0).unwrap();
    assert_eq!(c, before);
}

#[test]
fn spreads_energy_from_single_pixel() {
    let (w, h) = (9u32, 9u32);
    let mut data = vec![0u8; (w * h * 4) as usize];
    let center = ((4 * w + 4) * 4) as usize;
    data[center..center + 4].copy_from_slice(&[255, 255, 255, 255]);
    let mut c = Canvas::from_premul(w, h, data).unwrap();

    gaussian_blur(&mut c, 0.8).unwrap();

    let nonzero = c.data.chunks_exact(4).filter(|px| px[3] != 0).count();
    assert!(nonzero > 1);
    let sum_a: u32 = c.data.chunks_exact(4).map(|px| u32::from(px[3])).sum();
    assert!((sum_a as i32 - 255).abs() <= 8, "sum {sum_a}");
}

#[test]
fn kernel_sums_to_one_and_is_symmetric() {
    for sigma in [0.5f32, 1.0, 5.0] {
        let r = kernel_radius(sigma);
        let k = gaussian_kernel_q16(r, sigma).unwrap();
        assert_eq!(k.len(), (2 * r + 1) as usize);
        assert_eq!(k.iter().map(|&v| u64::from(v)).sum::<u64>(), 1 << 16);
        for i in 0..k.len() / 2 {
            assert_eq!(k[i], k[k.len() - 1 - i]);
        }
    }
}

#[test]
fn kernel_radius_covers_three_sigma() {
    assert_eq!(kernel_radius(5.0), 15);
    assert_eq!(kernel_radius(0.4), 2);
    assert_eq!(kernel_radius(0.0), 0);
}

#[test]
fn negative_sigma_is_rejected() {
    let mut c = Canvas::filled(CanvasSize::new(2, 2), Rgba8::WHITE);
    assert!(gaussian_blur(&mut c, -1.0).is_err());
}
