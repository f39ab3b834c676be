use glam::Vec2;
use hecs::World;

use super::raycast::MIN_DIST;
use super::zbuffer::ZBuffer;
use crate::renderer::{Canvas, Rgba, rgb};
use crate::sim::{Billboard, Position};
use crate::world::Camera;

/// Flat placeholder color for billboard squares.
const SPRITE_COLOR: Rgba = rgb(235, 120, 110);
/// World-space edge length of the billboard.
const SPRITE_WORLD_SIZE: f32 = 0.8;

/// A billboard after projection, ready for the z-tested pass.
#[derive(Debug, Clone, Copy)]
pub struct VisSprite {
    pub left: i32,
    pub top: i32,
    pub size: i32,
    pub depth: f32,
}

/// Project one world point into a screen square centered on the horizon.
/// `None` when behind the camera, vanishing, or fully off-screen.
pub fn project_sprite(
    camera: &Camera,
    world: Vec2,
    width: usize,
    height: usize,
) -> Option<VisSprite> {
    let cam = camera.to_cam(world);
    let depth = cam.y;
    if depth <= MIN_DIST {
        return None;
    }

    let focal = camera.screen_scale(width);
    let screen_x = (width as f32 * 0.5 + cam.x * focal / depth) as i32;
    let size = ((SPRITE_WORLD_SIZE / depth) * focal) as i32;
    if size <= 0 {
        return None;
    }

    // the casts above saturate for near-clip depths; span math stays saturating
    let left = screen_x.saturating_sub(size / 2);
    if left >= width as i32 || left.saturating_add(size) <= 0 {
        return None;
    }
    Some(VisSprite {
        left,
        top: (height / 2) as i32 - size / 2,
        size,
        depth,
    })
}

/// Project every billboard entity and order the survivors far to near,
/// so nearer strips win the overdraw.
pub fn collect_sprites(
    world: &World,
    camera: &Camera,
    width: usize,
    height: usize,
) -> Vec<VisSprite> {
    let mut out = Vec::new();
    for (_, (pos, _)) in world.query::<(&Position, &Billboard)>().iter() {
        if let Some(vis) = project_sprite(camera, pos.0, width, height) {
            out.push(vis);
        }
    }
    out.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    out
}

/// Draw each sprite as per-column strips, only where it is strictly
/// nearer than the wall already in the depth buffer.
pub fn draw_sprites(canvas: &mut impl Canvas, sprites: &[VisSprite], zbuffer: &ZBuffer) {
    let (w, _) = canvas.size();
    for s in sprites {
        let y1 = s.top.saturating_add(s.size) - 1;
        for x in s.left.max(0)..s.left.saturating_add(s.size).min(w as i32) {
            if s.depth < zbuffer.depth(x as usize) {
                canvas.vline(x, s.top, y1, SPRITE_COLOR);
            }
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
