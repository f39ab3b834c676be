use glam::Vec2;

use super::zbuffer::ZBuffer;
use crate::world::{Camera, TileGrid};

pub const MAX_DEPTH: f32 = 20.0;
pub const MIN_DIST: f32 = 1e-4;

/// DDA never walks more cells than this, whatever the map looks like.
const STEP_CAP: usize = 1024;
/// Stands in for 1/0 so a zero direction component never advances its axis.
const INV_SENTINEL: f32 = 1e30;

/// Which grid line the ray stopped on: `X` = vertical (east/west face),
/// `Y` = horizontal (north/south face).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    X,
    Y,
}

#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    pub dist: f32,
    pub side: Side,
    pub tile: u8,
}

/// Walk the grid from `origin` along `dir` until a wall tile or a miss.
///
/// The returned parameter is `sideDist - deltaDist` of the last-stepped
/// axis, clamped to `[MIN_DIST, max_depth]`.  For a view-plane ray
/// (`forward + plane * cameraX`, forward component 1) that is directly
/// the perpendicular distance; for a unit `dir` it is the Euclidean
/// distance along the ray.  Leaving the grid or exhausting the step cap
/// is a miss: `max_depth` and tile 0.
pub fn cast_ray(grid: &TileGrid, origin: Vec2, dir: Vec2, max_depth: f32) -> RayHit {
    let mut map_x = origin.x.floor() as i32;
    let mut map_y = origin.y.floor() as i32;

    let delta_dist_x = if dir.x != 0.0 {
        (1.0 / dir.x).abs()
    } else {
        INV_SENTINEL
    };
    let delta_dist_y = if dir.y != 0.0 {
        (1.0 / dir.y).abs()
    } else {
        INV_SENTINEL
    };

    let (step_x, mut side_dist_x) = if dir.x < 0.0 {
        (-1, (origin.x - map_x as f32) * delta_dist_x)
    } else {
        (1, (map_x as f32 + 1.0 - origin.x) * delta_dist_x)
    };
    let (step_y, mut side_dist_y) = if dir.y < 0.0 {
        (-1, (origin.y - map_y as f32) * delta_dist_y)
    } else {
        (1, (map_y as f32 + 1.0 - origin.y) * delta_dist_y)
    };

    let mut side = Side::X;
    for _ in 0..STEP_CAP {
        if side_dist_x < side_dist_y {
            side_dist_x += delta_dist_x;
            map_x += step_x;
            side = Side::X;
        } else {
            side_dist_y += delta_dist_y;
            map_y += step_y;
            side = Side::Y;
        }
        if !grid.in_bounds(map_x, map_y) {
            break;
        }
        let tile = grid.tile(map_x, map_y);
        if tile != 0 {
            let raw = match side {
                Side::X => side_dist_x - delta_dist_x,
                Side::Y => side_dist_y - delta_dist_y,
            };
            return RayHit {
                dist: raw.clamp(MIN_DIST, max_depth),
                side,
                tile,
            };
        }
    }

    RayHit {
        dist: max_depth,
        side,
        tile: 0,
    }
}

/// Linear screen-x in `[-1, 1]`; a single column maps to the center.
#[inline]
pub fn camera_x(col: usize, columns: usize) -> f32 {
    if columns <= 1 {
        0.0
    } else {
        2.0 * col as f32 / (columns as f32 - 1.0) - 1.0
    }
}

/// One frame's worth of wall intersections, one entry per screen column.
pub struct ColumnSweep {
    pub hits: Vec<RayHit>,
    pub zbuffer: ZBuffer,
}

/// Cast one ray every `stride` columns and replicate the hit across the
/// strided span.  Always yields `columns` entries in both the hit list
/// and the depth buffer.
pub fn sweep_columns(
    grid: &TileGrid,
    camera: &Camera,
    columns: usize,
    stride: usize,
    max_depth: f32,
) -> ColumnSweep {
    let stride = stride.max(1);
    let mut hits = Vec::with_capacity(columns);
    let mut zbuffer = ZBuffer::filled(columns, max_depth);

    let mut col = 0;
    while col < columns {
        let dir = camera.ray_dir(camera_x(col, columns));
        let hit = cast_ray(grid, camera.pos(), dir, max_depth);
        let span = stride.min(columns - col);
        for i in 0..span {
            hits.push(hit);
            zbuffer.set(col + i, hit.dist);
        }
        col += span;
    }

    ColumnSweep { hits, zbuffer }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapfile;
    use glam::vec2;

    fn bordered(w: usize, h: usize) -> TileGrid {
        let mut tiles = vec![0u8; w * h];
        for x in 0..w {
            tiles[x] = 1;
            tiles[(h - 1) * w + x] = 1;
        }
        for y in 0..h {
            tiles[y * w] = 1;
            tiles[y * w + w - 1] = 1;
        }
        TileGrid::new(w, h, tiles)
    }

    /*---*/
    /* 1. center of a 3x3 box, facing east: half a tile to the wall */
    #[test]
    fn corridor_east_hits_at_half() {
        let g = bordered(3, 3);
        let hit = cast_ray(&g, vec2(1.5, 1.5), vec2(1.0, 0.0), MAX_DEPTH);
        assert!((hit.dist - 0.5).abs() < 1e-6);
        assert_eq!(hit.side, Side::X);
        assert_eq!(hit.tile, 1);
    }

    /*---*/
    /* 2. vertical ray (zero dir.x) stops on a horizontal line */
    #[test]
    fn vertical_ray_hits_south_wall() {
        let g = bordered(3, 3);
        let hit = cast_ray(&g, vec2(1.5, 1.5), vec2(0.0, 1.0), MAX_DEPTH);
        assert!((hit.dist - 0.5).abs() < 1e-6);
        assert_eq!(hit.side, Side::Y);
    }

    /*---*/
    /* 3. a sweep across the built-in map stays inside (0, max] */
    #[test]
    fn default_map_sweep_is_bounded() {
        let map = mapfile::parse(mapfile::DEFAULT_MAP);
        let cam = Camera::new(map.spawn, 0.9, 70f32.to_radians());
        let sweep = sweep_columns(&map.grid, &cam, 320, 1, MAX_DEPTH);
        assert_eq!(sweep.hits.len(), 320);
        assert_eq!(sweep.zbuffer.len(), 320);
        for (col, hit) in sweep.hits.iter().enumerate() {
            assert!(hit.dist > 0.0 && hit.dist <= MAX_DEPTH);
            assert_eq!(sweep.zbuffer.depth(col), hit.dist);
        }
    }

    /*---*/
    /* 4. view-plane parameter equals Euclidean distance times cos(offset) */
    #[test]
    fn plane_form_matches_unit_form_times_cosine() {
        let g = bordered(8, 8);
        let cam = Camera::new(vec2(4.3, 4.6), 0.7, 70f32.to_radians());
        for col in [0usize, 37, 80, 159] {
            let u = camera_x(col, 160);
            let plane_dir = cam.ray_dir(u);
            let unit_dir = plane_dir.normalize();
            let cos_off = unit_dir.dot(cam.forward());

            let plane_hit = cast_ray(&g, cam.pos(), plane_dir, MAX_DEPTH);
            let unit_hit = cast_ray(&g, cam.pos(), unit_dir, MAX_DEPTH);
            assert!(
                (plane_hit.dist - unit_hit.dist * cos_off).abs() < 2e-3,
                "col {col}: {} vs {}",
                plane_hit.dist,
                unit_hit.dist * cos_off
            );
        }
    }

    /*---*/
    /* 5. leaving the grid is a miss: max depth, tile 0 */
    #[test]
    fn escaping_ray_is_a_miss() {
        let mut tiles = vec![0u8; 9];
        // open east edge
        for i in [0, 1, 2, 3, 6, 7, 8] {
            tiles[i] = 1;
        }
        tiles[5] = 0;
        let g = TileGrid::new(3, 3, tiles);
        let hit = cast_ray(&g, vec2(1.5, 1.5), vec2(1.0, 0.0), MAX_DEPTH);
        assert_eq!(hit.dist, MAX_DEPTH);
        assert_eq!(hit.tile, 0);
    }

    /*---*/
    /* 6. the step cap turns an endless corridor into a miss */
    #[test]
    fn step_cap_bounds_the_walk() {
        let mut tiles = vec![0u8; 1300];
        tiles[1299] = 1; // a wall the cap never reaches
        let g = TileGrid::new(1300, 1, tiles);
        let hit = cast_ray(&g, vec2(0.5, 0.5), vec2(1.0, 0.0), MAX_DEPTH);
        assert_eq!(hit.dist, MAX_DEPTH);
        assert_eq!(hit.tile, 0);
    }

    /*---*/
    /* 7. a camera flush against the wall still reports a positive depth */
    #[test]
    fn near_zero_distance_clamps() {
        let g = bordered(3, 3);
        let hit = cast_ray(&g, vec2(1.999999, 1.5), vec2(1.0, 0.0), MAX_DEPTH);
        assert_eq!(hit.dist, MIN_DIST);
    }

    /*---*/
    /* 8. stride 4 replicates one hit across its span */
    #[test]
    fn stride_replicates_hits() {
        let g = bordered(5, 5);
        let cam = Camera::new(vec2(2.5, 2.5), 0.4, 70f32.to_radians());
        let sweep = sweep_columns(&g, &cam, 10, 4, MAX_DEPTH);
        assert_eq!(sweep.hits.len(), 10);
        for chunk in [&sweep.hits[0..4], &sweep.hits[4..8], &sweep.hits[8..10]] {
            for h in chunk {
                assert_eq!(h.dist, chunk[0].dist);
            }
        }
    }

    /*---*/
    /* 9. a single column casts straight along the facing */
    #[test]
    fn single_column_is_the_center_ray() {
        let g = bordered(3, 3);
        let cam = Camera::new(vec2(1.5, 1.5), 0.0, 70f32.to_radians());
        let sweep = sweep_columns(&g, &cam, 1, 1, MAX_DEPTH);
        assert!((sweep.hits[0].dist - 0.5).abs() < 1e-5);
        assert_eq!(sweep.hits[0].side, Side::X);
    }
}
