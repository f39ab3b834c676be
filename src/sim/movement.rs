use glam::Vec2;

use crate::world::TileGrid;

/// Apply `delta` to `pos` one axis at a time.
///
/// The x step is taken only if the destination column is free at the
/// current row; the y step then tests against the already-resolved x.
/// Blocking one axis never cancels the other, so entities slide along
/// walls instead of sticking to them.
pub fn resolve_move(grid: &TileGrid, pos: Vec2, delta: Vec2) -> Vec2 {
    let mut out = pos;
    if !grid.is_blocked(pos.x + delta.x, pos.y) {
        out.x = pos.x + delta.x;
    }
    if !grid.is_blocked(out.x, pos.y + delta.y) {
        out.y = pos.y + delta.y;
    }
    out
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
