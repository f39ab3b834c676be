//! Rendering abstraction layer.
//!
//! *The engine never touches a pixel buffer directly.* Render passes call
//! the primitive operations of [`Canvas`] and a backend rasterises them.
//!
//! * `Software` is the only backend today; the trait keeps the engine
//!   portable to others without changing game logic.
//! * `end_frame` **loans** the finished buffer to a caller-supplied
//!   closure, so window presentation stays outside the library.

/// Pixel format of the frame-buffer (0x00RRGGBB).
pub type Rgba = u32;

/// Pack 8-bit channels into an [`Rgba`] pixel.
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgba {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Scale every channel of `color` by `factor`, saturating at white.
///
/// Returns a new value; colors are never mutated in place.
#[inline]
pub fn scale_rgb(color: Rgba, factor: f32) -> Rgba {
    let f = factor.max(0.0);
    let scale = |c: u32| -> u32 { ((c as f32 * f).min(255.0)) as u32 };
    let r = scale((color >> 16) & 0xFF);
    let g = scale((color >> 8) & 0xFF);
    let b = scale(color & 0xFF);
    (r << 16) | (g << 8) | b
}

/// A render target exposing the primitive operations the passes draw with.
///
/// All coordinates are integer pixels; every primitive clips itself against
/// the current frame, so callers never pre-clamp.
pub trait Canvas {
    /// (Re)allocate internal scratch for the requested resolution and clear it.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Dimensions of the frame opened by [`Canvas::begin_frame`].
    fn size(&self) -> (usize, usize);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba);

    /// Vertical strip from `y0` to `y1` inclusive in column `x`.
    fn vline(&mut self, x: i32, y0: i32, y1: i32, color: Rgba);

    /// Line segment between two points.
    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba);

    /// Filled circle of radius `r` around (`cx`, `cy`).
    fn circle(&mut self, cx: i32, cy: i32, r: i32, color: Rgba);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// * `submit(&[Rgba], w, h)` is run exactly once per frame.
    /// * Window callers pass `|fb, w, h| window.update_with_buffer(fb, w, h)`.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

pub mod software;

pub use software::Software;

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_packs_channels() {
        assert_eq!(rgb(0x12, 0x34, 0x56), 0x00_12_34_56);
        assert_eq!(rgb(255, 255, 255), 0x00_FF_FF_FF);
    }

    #[test]
    fn scale_rgb_darkens_per_channel() {
        let half = scale_rgb(rgb(200, 100, 50), 0.5);
        assert_eq!(half, rgb(100, 50, 25));
    }

    #[test]
    fn scale_rgb_saturates_at_white() {
        assert_eq!(scale_rgb(rgb(200, 200, 200), 2.0), rgb(255, 255, 255));
    }

    #[test]
    fn scale_rgb_leaves_input_untouched() {
        let c = rgb(180, 180, 180);
        let _ = scale_rgb(c, 1.0 / 1.2);
        assert_eq!(c, rgb(180, 180, 180));
    }
}
