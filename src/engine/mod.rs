//! The render passes and their frame-level orchestration.
//!
//! A frame is: column sweep (walls + depth), backdrop, wall strips,
//! z-tested billboard sprites, optional minimap.  Sprites strictly
//! after the sweep; the depth buffer is read-only once written.

use bitflags::bitflags;
use hecs::World;

use crate::renderer::{Canvas, Rgba};
use crate::world::{Camera, TileGrid};

pub mod minimap;
pub mod raycast;
pub mod sprites;
pub mod walls;
pub mod zbuffer;

pub use raycast::{ColumnSweep, MAX_DEPTH, RayHit, Side, cast_ray, camera_x, sweep_columns};
pub use sprites::VisSprite;
pub use zbuffer::ZBuffer;

bitflags! {
    /// Togglable view layers.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ViewFlags: u32 {
        const MINIMAP = 1 << 0;
        const SHADING = 1 << 1;
    }
}

impl Default for ViewFlags {
    fn default() -> Self {
        Self::MINIMAP | Self::SHADING
    }
}

/// Per-frame rendering knobs.
#[derive(Debug, Clone, Copy)]
pub struct RenderOpts {
    pub flags: ViewFlags,
    /// Cast one ray per this many columns, replicating across the span.
    pub stride: usize,
    pub max_depth: f32,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            flags: ViewFlags::default(),
            stride: 1,
            max_depth: MAX_DEPTH,
        }
    }
}

/// Draw one complete frame and hand the finished buffer to `submit`.
#[allow(clippy::too_many_arguments)]
pub fn render_frame<C, F>(
    canvas: &mut C,
    grid: &TileGrid,
    camera: &Camera,
    world: &World,
    width: usize,
    height: usize,
    opts: &RenderOpts,
    submit: F,
) where
    C: Canvas,
    F: FnOnce(&[Rgba], usize, usize),
{
    canvas.begin_frame(width, height);

    let sweep = sweep_columns(grid, camera, width, opts.stride, opts.max_depth);

    walls::draw_backdrop(canvas);
    walls::draw_walls(
        canvas,
        &sweep.hits,
        camera.screen_scale(width),
        opts.max_depth,
        opts.flags.contains(ViewFlags::SHADING),
    );

    let vis = sprites::collect_sprites(world, camera, width, height);
    sprites::draw_sprites(canvas, &vis, &sweep.zbuffer);

    if opts.flags.contains(ViewFlags::MINIMAP) {
        minimap::draw_minimap(canvas, grid, camera, world, &sweep.hits);
    }

    canvas.end_frame(submit);
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
