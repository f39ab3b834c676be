use glam::{Vec2, vec2};

/// Runtime snapshot of one map's tile layout (immutable after load).
///
/// Row-major cells; code 0 is walkable, anything else is a wall variant.
/// Every access is bounds-checked and out-of-bounds counts as solid.
#[derive(Clone, Debug)]
pub struct TileGrid {
    width: usize,
    height: usize,
    tiles: Vec<u8>,
}

impl TileGrid {
    pub fn new(width: usize, height: usize, tiles: Vec<u8>) -> Self {
        assert_eq!(tiles.len(), width * height, "tile count must match dimensions");
        Self {
            width,
            height,
            tiles,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, cx: i32, cy: i32) -> bool {
        cx >= 0 && cy >= 0 && (cx as usize) < self.width && (cy as usize) < self.height
    }

    /// Tile code at cell (`cx`, `cy`); out-of-bounds reads as a wall.
    #[inline]
    pub fn tile(&self, cx: i32, cy: i32) -> u8 {
        if self.in_bounds(cx, cy) {
            self.tiles[cy as usize * self.width + cx as usize]
        } else {
            1
        }
    }

    /// Collision test in world coordinates (fractional tile units).
    ///
    /// Floors toward negative infinity first, so a coordinate just left of
    /// the map lands in cell -1 and reads as blocked.
    #[inline]
    pub fn is_blocked(&self, x: f32, y: f32) -> bool {
        self.tile(x.floor() as i32, y.floor() as i32) != 0
    }

    #[inline]
    pub fn is_free_cell(&self, cx: i32, cy: i32) -> bool {
        self.in_bounds(cx, cy) && self.tile(cx, cy) == 0
    }

    /// Centers of all walkable cells, row by row.
    pub fn free_cell_centers(&self) -> Vec<Vec2> {
        let mut out = Vec::new();
        for cy in 0..self.height as i32 {
            for cx in 0..self.width as i32 {
                if self.is_free_cell(cx, cy) {
                    out.push(vec2(cx as f32 + 0.5, cy as f32 + 0.5));
                }
            }
        }
        out
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
