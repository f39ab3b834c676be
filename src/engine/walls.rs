use super::raycast::{RayHit, Side};
use crate::renderer::{Canvas, Rgba, rgb, scale_rgb};

pub const CEILING: Rgba = rgb(25, 25, 35);
pub const FLOOR: Rgba = rgb(18, 18, 24);

const WALL_GREY: Rgba = rgb(180, 180, 180);
const WALL_RED: Rgba = rgb(150, 0, 0);
const WALL_GREEN: Rgba = rgb(0, 150, 0);
const WALL_BLUE: Rgba = rgb(0, 0, 150);

/// Side-Y strips render at this fraction of the base color.
const SIDE_SHADE: f32 = 1.0 / 1.2;

/// Base color for a wall tile code; codes past the palette cycle.
pub fn variant_color(tile: u8) -> Rgba {
    match (tile.max(1) - 1) % 4 {
        0 => WALL_GREY,
        1 => WALL_RED,
        2 => WALL_GREEN,
        _ => WALL_BLUE,
    }
}

/// Ceiling above the horizon, floor below.
pub fn draw_backdrop(canvas: &mut impl Canvas) {
    let (w, h) = canvas.size();
    let half = (h / 2) as i32;
    canvas.fill_rect(0, 0, w as i32, half, CEILING);
    canvas.fill_rect(0, half, w as i32, h as i32 - half, FLOOR);
}

/// One vertical strip per column hit.  Strip height is `focal / dist`
/// (walls are one tile high), centered on the horizon.  Misses and
/// at-max-depth columns stay backdrop.
pub fn draw_walls(
    canvas: &mut impl Canvas,
    hits: &[RayHit],
    focal: f32,
    max_depth: f32,
    shade_sides: bool,
) {
    let (_, h) = canvas.size();
    let half = (h / 2) as i32;

    for (col, hit) in hits.iter().enumerate() {
        if hit.tile == 0 || hit.dist >= max_depth {
            continue;
        }
        let strip = ((1.0 / hit.dist) * focal) as i32;
        let mut color = variant_color(hit.tile);
        if shade_sides && hit.side == Side::Y {
            color = scale_rgb(color, SIDE_SHADE);
        }
        canvas.vline(col as i32, half - strip / 2, half + strip / 2, color);
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
