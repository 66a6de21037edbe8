use crate::assets::decode::PreparedImage;
use crate::foundation::core::{Canvas, Rgba8};
use crate::foundation::error::{BannerError, BannerResult};

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Premultiplied source-over: `src + dst * (1 - src_alpha)`.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    match src[3] {
        0 => return dst,
        255 => return src,
        _ => {}
    }
    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255(u16::from(dst[i]), inv));
    }
    out
}

/// Composite `src` over `dst`; both must be premultiplied RGBA8 of equal length.
pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> BannerResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(BannerError::composite(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Composite one solid straight-alpha color over the whole canvas.
pub fn fill_over(canvas: &mut Canvas, color: Rgba8) {
    let src = color.premultiplied();
    for d in canvas.data.chunks_exact_mut(4) {
        let out = over([d[0], d[1], d[2], d[3]], src);
        d.copy_from_slice(&out);
    }
}

/// Place the canvas over an opaque backdrop so no pixel keeps residual transparency.
pub fn flatten_onto(canvas: &mut Canvas, backdrop: [u8; 3]) {
    let [r, g, b] = backdrop;
    for d in canvas.data.chunks_exact_mut(4) {
        let out = over([r, g, b, 255], [d[0], d[1], d[2], d[3]]);
        d.copy_from_slice(&out);
    }
}

/// Composite `src` with its own alpha onto `dst` with its top-left corner at `(x, y)`.
///
/// The offset may be negative or overflow the canvas; only the intersection is touched.
pub fn over_at(dst: &mut Canvas, src: &PreparedImage, x: i64, y: i64) -> BannerResult<()> {
    let expected = (src.width as usize) * (src.height as usize) * 4;
    if src.rgba8_premul.len() != expected {
        return Err(BannerError::composite("source image byte length mismatch"));
    }
    let (dw, dh) = (i64::from(dst.width), i64::from(dst.height));
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + i64::from(src.width)).min(dw);
    let y1 = (y + i64::from(src.height)).min(dh);
    if x0 >= x1 || y0 >= y1 {
        return Ok(());
    }

    let span = ((x1 - x0) as usize) * 4;
    for dy in y0..y1 {
        let sy = dy - y;
        let s_start = ((sy * i64::from(src.width) + (x0 - x)) as usize) * 4;
        let d_start = ((dy * dw + x0) as usize) * 4;
        let s_row = &src.rgba8_premul[s_start..s_start + span];
        let d_row = &mut dst.data[d_start..d_start + span];
        over_in_place(d_row, s_row)?;
    }
    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
