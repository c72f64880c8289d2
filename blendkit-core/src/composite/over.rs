//! Straight-alpha "over" compositing of a foreground image onto a background.

use std::ops::Range;

use crate::foundation::core::{Image, Offset, Size};
use crate::foundation::error::BlendkitResult;
use crate::foundation::math::{u8_from_unit, unit_from_u8};

/// Blend one straight-alpha foreground pixel over one background pixel.
///
/// The foreground alpha is scaled by `opacity` before blending. Only the
/// color channels of the result are blended; the returned alpha byte is the
/// background's alpha, unchanged. A zero (or NaN) effective foreground alpha
/// returns `bg` as-is.
///
/// The blend runs in `f64` and rounds exact halves up.
pub fn over_straight(bg: [u8; 4], fg: [u8; 4], opacity: f32) -> [u8; 4] {
    let fa = unit_from_u8(fg[3]) * f64::from(opacity);
    if fa == 0.0 || fa.is_nan() {
        return bg;
    }

    let ba = unit_from_u8(bg[3]);
    let out_a = fa + ba * (1.0 - fa);
    if out_a.abs() < f64::MIN_POSITIVE {
        return bg;
    }

    let mut out = bg;
    for c in 0..3 {
        let v = (unit_from_u8(fg[c]) * fa + unit_from_u8(bg[c]) * ba * (1.0 - fa)) / out_a;
        out[c] = u8_from_unit(v);
    }
    out
}

/// Composite `foreground` over `background` in place.
///
/// `offset` places the foreground's top-left pixel on the background; pixels
/// that land outside the background are skipped, so a foreground that misses
/// the background entirely is a no-op. `opacity` multiplies the foreground's
/// own alpha and is not clamped: values outside `[0, 1]` extrapolate the blend
/// and the written channels are clamped to `[0, 255]`.
///
/// The background alpha channel is left untouched.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(bg = ?background.size(), fg = ?foreground.size(), opacity = opacity, offset = ?offset)
)]
pub fn composite(background: &mut Image, foreground: &Image, opacity: f32, offset: Offset) {
    let bg_size = background.size();
    composite_unchecked(
        background.data_mut(),
        bg_size,
        foreground.data(),
        foreground.size(),
        opacity,
        offset,
    );
}

/// Same as [`composite`] over raw RGBA8 buffers.
///
/// Both buffers are validated against their sizes before any byte is written.
pub fn composite_rgba8(
    background: &mut [u8],
    bg_size: Size,
    foreground: &[u8],
    fg_size: Size,
    opacity: f32,
    offset: Offset,
) -> BlendkitResult<()> {
    bg_size.validate_rgba8_len(background.len())?;
    fg_size.validate_rgba8_len(foreground.len())?;
    composite_unchecked(background, bg_size, foreground, fg_size, opacity, offset);
    Ok(())
}

fn composite_unchecked(
    background: &mut [u8],
    bg_size: Size,
    foreground: &[u8],
    fg_size: Size,
    opacity: f32,
    offset: Offset,
) {
    let (Some(cols), Some(rows)) = (
        overlap_axis(bg_size.width, fg_size.width, offset.x),
        overlap_axis(bg_size.height, fg_size.height, offset.y),
    ) else {
        tracing::debug!("foreground does not overlap background; nothing to do");
        return;
    };

    let bg_w = bg_size.width as usize;
    let fg_w = fg_size.width as usize;
    for fy in rows {
        let by = shift(fy, offset.y);
        for fx in cols.clone() {
            let bx = shift(fx, offset.x);
            let fi = (fy * fg_w + fx) * 4;
            let bi = (by * bg_w + bx) * 4;

            let fg_px = [
                foreground[fi],
                foreground[fi + 1],
                foreground[fi + 2],
                foreground[fi + 3],
            ];
            let bg_px = [
                background[bi],
                background[bi + 1],
                background[bi + 2],
                background[bi + 3],
            ];
            let out = over_straight(bg_px, fg_px, opacity);
            background[bi..bi + 3].copy_from_slice(&out[..3]);
        }
    }
}

/// Foreground coordinates `f` along one axis with `0 <= f + offset < bg_len`.
fn overlap_axis(bg_len: u32, fg_len: u32, offset: i32) -> Option<Range<usize>> {
    let offset = i64::from(offset);
    let start = (-offset).max(0);
    let end = (i64::from(bg_len) - offset).min(i64::from(fg_len));
    (start < end).then(|| start as usize..end as usize)
}

// Only called on coordinates inside `overlap_axis`, so the result is in range.
fn shift(f: usize, offset: i32) -> usize {
    (f as i64 + i64::from(offset)) as usize
}

#[cfg(test)]
#[path = "../../tests/unit/composite/over.rs"]
mod tests;
