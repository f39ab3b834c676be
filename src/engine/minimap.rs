use glam::Vec2;
use hecs::World;

use super::raycast::{RayHit, camera_x};
use crate::renderer::{Canvas, Rgba, rgb};
use crate::sim::{Billboard, Position};
use crate::world::{Camera, TileGrid};

pub const SCALE: i32 = 8; // px per tile
pub const PADDING: i32 = 10;

/// At most this many rays are traced onto the map.
const RAY_BUDGET: usize = 120;

const BACKING: Rgba = rgb(12, 12, 16);
const WALL: Rgba = rgb(60, 60, 80);
const FREE: Rgba = rgb(25, 25, 30);
const RAY: Rgba = rgb(255, 220, 90);
const PLAYER: Rgba = rgb(120, 200, 255);
const NPC: Rgba = rgb(255, 140, 120);

/// Top-down overlay in the corner: tiles, a budgeted subset of the
/// frame's rays out to their exact hit points, the player dot with a
/// facing tick, and one dot per billboard entity.
pub fn draw_minimap(
    canvas: &mut impl Canvas,
    grid: &TileGrid,
    camera: &Camera,
    world: &World,
    hits: &[RayHit],
) {
    let w = grid.width() as i32 * SCALE;
    let h = grid.height() as i32 * SCALE;
    canvas.fill_rect(PADDING - 2, PADDING - 2, w + 4, h + 4, BACKING);

    for cy in 0..grid.height() as i32 {
        for cx in 0..grid.width() as i32 {
            let color = if grid.tile(cx, cy) != 0 { WALL } else { FREE };
            canvas.fill_rect(
                PADDING + cx * SCALE,
                PADDING + cy * SCALE,
                SCALE,
                SCALE,
                color,
            );
        }
    }

    let to_px = |p: Vec2| -> (i32, i32) {
        (
            PADDING + (p.x * SCALE as f32) as i32,
            PADDING + (p.y * SCALE as f32) as i32,
        )
    };
    let (px, py) = to_px(camera.pos());

    // a ray's direction has forward component 1, so origin + dir * dist
    // is the wall intersection itself
    let step = (hits.len() / RAY_BUDGET).max(1);
    for (col, hit) in hits.iter().enumerate().step_by(step) {
        let end = camera.pos() + camera.ray_dir(camera_x(col, hits.len())) * hit.dist;
        let (ex, ey) = to_px(end);
        canvas.line(px, py, ex, ey, RAY);
    }

    canvas.circle(px, py, 3, PLAYER);
    let f = camera.forward();
    canvas.line(
        px,
        py,
        px + (f.x * 8.0) as i32,
        py + (f.y * 8.0) as i32,
        PLAYER,
    );

    for (_, (pos, _)) in world.query::<(&Position, &Billboard)>().iter() {
        let (nx, ny) = to_px(pos.0);
        canvas.circle(nx, ny, 3, NPC);
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::raycast::Side;
    use crate::renderer::Software;
    use crate::sim::spawn_npc;
    use glam::vec2;

    fn frame(w: usize, h: usize) -> Software {
        let mut c = Software::default();
        c.begin_frame(w, h);
        c
    }

    fn at(c: &Software, x: i32, y: i32) -> Rgba {
        c.scratch[y as usize * c.width + x as usize]
    }

    /*---*/
    /* 1. backing border, wall and free tiles land where expected */
    #[test]
    fn tiles_and_backing() {
        let grid = TileGrid::new(3, 2, vec![1, 0, 1, 1, 0, 1]);
        let cam = Camera::new(vec2(1.5, 0.5), 0.0, 70f32.to_radians());
        let world = World::new();
        let mut c = frame(64, 48);
        draw_minimap(&mut c, &grid, &cam, &world, &[]);

        assert_eq!(at(&c, PADDING - 2, PADDING - 2), BACKING);
        assert_eq!(at(&c, PADDING + 2, PADDING + 2), WALL); // cell (0,0)
        assert_eq!(at(&c, PADDING + SCALE + 2, PADDING + SCALE + 2), FREE); // cell (1,1)
    }

    /*---*/
    /* 2. player dot sits at the scaled position, npc dot at its own */
    #[test]
    fn dots_land_on_positions() {
        let grid = TileGrid::new(4, 4, vec![0; 16]);
        let cam = Camera::new(vec2(1.0, 1.0), 0.0, 70f32.to_radians());
        let mut world = World::new();
        spawn_npc(&mut world, vec2(3.0, 3.0));
        let mut c = frame(64, 64);
        draw_minimap(&mut c, &grid, &cam, &world, &[]);

        assert_eq!(at(&c, PADDING + SCALE, PADDING + SCALE), PLAYER);
        assert_eq!(at(&c, PADDING + 3 * SCALE, PADDING + 3 * SCALE), NPC);
    }

    /*---*/
    /* 3. a ray segment reaches its hit point */
    #[test]
    fn ray_reaches_hit() {
        let grid = TileGrid::new(5, 1, vec![0, 0, 0, 0, 1]);
        let cam = Camera::new(vec2(1.5, 0.5), 0.0, 70f32.to_radians());
        let world = World::new();
        let hits = [RayHit {
            dist: 2.0,
            side: Side::X,
            tile: 1,
        }];
        let mut c = frame(64, 32);
        draw_minimap(&mut c, &grid, &cam, &world, &hits);

        // segment runs from x=22 to x=38 in row 14; sample past the
        // player dot and facing tick
        assert_eq!(at(&c, 35, 14), RAY);
        assert_eq!(at(&c, 39, 14), FREE);
    }
}
