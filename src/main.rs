//! Minimal top-down map preview.
//!
//! ```bash
//! cargo run -- [map.txt]
//! ```

use minifb::{Key, Window, WindowOptions};
use std::error::Error;

use tilecast::{
    mapfile,
    renderer::{Canvas, Software, rgb},
};

const WIDTH: usize = 640;
const HEIGHT: usize = 640;

fn main() -> Result<(), Box<dyn Error>> {
    // ─────────── parse CLI ────────────
    let map = match std::env::args().nth(1) {
        Some(path) => mapfile::load(&path)?,
        None => mapfile::parse(mapfile::DEFAULT_MAP),
    };
    let grid = &map.grid;

    // ─────────── map-space → screen-space transform ────────────
    let scale = (WIDTH as f32 / grid.width() as f32).min(HEIGHT as f32 / grid.height() as f32)
        * 0.9; // 10 % margin
    let offset_x = (WIDTH as f32 - grid.width() as f32 * scale) / 2.0;
    let offset_y = (HEIGHT as f32 - grid.height() as f32 * scale) / 2.0;

    // ─────────── rasterise tiles ────────────
    let mut canvas = Software::default();
    canvas.begin_frame(WIDTH, HEIGHT);

    let wall = rgb(60, 60, 80);
    let free = rgb(25, 25, 30);
    for cy in 0..grid.height() as i32 {
        for cx in 0..grid.width() as i32 {
            let color = if grid.tile(cx, cy) != 0 { wall } else { free };
            canvas.fill_rect(
                (cx as f32 * scale + offset_x) as i32,
                (cy as f32 * scale + offset_y) as i32,
                scale.ceil() as i32,
                scale.ceil() as i32,
                color,
            );
        }
    }

    canvas.circle(
        (map.spawn.x * scale + offset_x) as i32,
        (map.spawn.y * scale + offset_y) as i32,
        (scale * 0.3) as i32,
        rgb(120, 200, 255),
    );

    // ─────────── show window ────────────
    let mut window = Window::new("tilecast map", WIDTH, HEIGHT, WindowOptions::default())?;
    while window.is_open() && !window.is_key_down(Key::Escape) {
        canvas.end_frame(|fb, w, h| window.update_with_buffer(fb, w, h).unwrap());
    }
    Ok(())
}
