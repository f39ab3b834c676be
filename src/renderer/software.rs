//! CPU rasteriser backing the [`Canvas`] trait.
//!
//! Owns one scratch buffer for the whole frame; primitives clip themselves
//! so the render passes can draw with unclamped coordinates.

use crate::renderer::{Canvas, Rgba, rgb};

/// Clear color between frames (near-black blue-grey).
const CLEAR: Rgba = rgb(15, 15, 22);

#[derive(Default)]
pub struct Software {
    pub scratch: Vec<Rgba>,
    pub width: usize,
    pub height: usize,
}

impl Software {
    #[inline]
    fn put(&mut self, x: i32, y: i32, color: Rgba) {
        if (0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y) {
            self.scratch[y as usize * self.width + x as usize] = color;
        }
    }
}

impl Canvas for Software {
    fn begin_frame(&mut self, w: usize, h: usize) {
        if w != self.width || h != self.height {
            self.width = w;
            self.height = h;
            self.scratch.resize(w * h, 0);
        }
        self.scratch.fill(CLEAR);
    }

    #[inline]
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w).min(self.width as i32);
        let y1 = (y + h).min(self.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        for row in y0..y1 {
            let start = row as usize * self.width;
            self.scratch[start + x0 as usize..start + x1 as usize].fill(color);
        }
    }

    fn vline(&mut self, x: i32, y0: i32, y1: i32, color: Rgba) {
        if !(0..self.width as i32).contains(&x) {
            return;
        }
        let top = y0.min(y1).max(0);
        let bottom = y0.max(y1).min(self.height as i32 - 1);
        for y in top..=bottom {
            self.scratch[y as usize * self.width + x as usize] = color;
        }
    }

    /// Integer Bresenham line.
    fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
        let mut x0 = x0;
        let mut y0 = y0;
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.put(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                if x0 == x1 {
                    break;
                }
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                if y0 == y1 {
                    break;
                }
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Filled disc, one horizontal span per scanline.
    fn circle(&mut self, cx: i32, cy: i32, r: i32, color: Rgba) {
        for dy in -r..=r {
            let half = ((r * r - dy * dy) as f32).sqrt() as i32;
            self.fill_rect(cx - half, cy + dy, 2 * half + 1, 1, color);
        }
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(&self.scratch, self.width, self.height);
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
