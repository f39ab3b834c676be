//! Text map loader.
//!
//! ### Format
//! * One row per line, one tile per character.
//! * `0` = walkable, `1`–`9` = wall variants, `P` = player spawn
//!   (replaced by a walkable tile), anything else = generic wall.
//!
//! Parsing never fails: blank lines are skipped, short rows are padded
//! with wall, an empty file falls back to the built-in layout and a
//! missing spawn marker falls back to a fixed cell.

use std::{fs, io, path::Path};

use glam::{Vec2, vec2};
use thiserror::Error;

use crate::world::TileGrid;

/// Spawn cell used when the map carries no `P` marker.
const FALLBACK_SPAWN: Vec2 = Vec2::new(2.5, 2.5);

/// Built-in layout used when no map file is given (or the file is empty).
pub const DEFAULT_MAP: &str = "\
111111111111
1P0000000001
100100011000
100100000001
100111110001
100000010001
101110010001
100010010001
100010000001
100011111001
100000000001
111111111111
";

/// Errors that can be encountered while reading a map file.
#[derive(Error, Debug)]
pub enum MapError {
    /// Underlying I/O failure, propagated unchanged.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// A parsed map: the tile layout plus the camera start position.
#[derive(Clone, Debug)]
pub struct MapData {
    pub grid: TileGrid,
    pub spawn: Vec2,
}

/// Read and parse a map file.
pub fn load<P: AsRef<Path>>(path: P) -> Result<MapData, MapError> {
    Ok(parse(&fs::read_to_string(path)?))
}

/// Parse map text. Infallible; see the module header for the fallbacks.
pub fn parse(text: &str) -> MapData {
    let rows: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if rows.is_empty() {
        return parse(DEFAULT_MAP);
    }

    let height = rows.len();
    let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);

    let mut tiles = vec![1u8; width * height];
    let mut spawn = None;

    for (cy, row) in rows.iter().enumerate() {
        for (cx, ch) in row.chars().enumerate() {
            tiles[cy * width + cx] = match ch {
                '0' => 0,
                'P' => {
                    spawn = Some(vec2(cx as f32 + 0.5, cy as f32 + 0.5));
                    0
                }
                '1'..='9' => ch as u8 - b'0',
                _ => 1,
            };
        }
    }

    MapData {
        grid: TileGrid::new(width, height, tiles),
        spawn: spawn.unwrap_or(FALLBACK_SPAWN),
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    /*------------------------------------------------------------------*/
    /* 1. Built-in layout sanity                                        */
    /*------------------------------------------------------------------*/
    #[test]
    fn default_map_parses() {
        let map = parse(DEFAULT_MAP);
        assert_eq!(map.grid.width(), 12);
        assert_eq!(map.grid.height(), 12);
        // marker row: spawn at the center of cell (1, 1), tile now walkable
        assert_eq!(map.spawn, vec2(1.5, 1.5));
        assert_eq!(map.grid.tile(1, 1), 0);
        assert_eq!(map.grid.tile(0, 0), 1);
    }

    /*------------------------------------------------------------------*/
    /* 2. Spawn fallback                                                */
    /*------------------------------------------------------------------*/
    #[test]
    fn missing_marker_uses_fallback_spawn() {
        let map = parse("111\n101\n111\n");
        assert_eq!(map.spawn, FALLBACK_SPAWN);
    }

    /*------------------------------------------------------------------*/
    /* 3. Malformed input never fails                                   */
    /*------------------------------------------------------------------*/
    #[test]
    fn ragged_rows_pad_with_wall() {
        let map = parse("1111\n1P\n1111\n");
        assert_eq!(map.grid.width(), 4);
        assert_eq!(map.grid.tile(1, 1), 0);
        // the two missing cells of row 1 read as wall
        assert_ne!(map.grid.tile(2, 1), 0);
        assert_ne!(map.grid.tile(3, 1), 0);
    }

    #[test]
    fn empty_input_falls_back_to_builtin() {
        let map = parse("\n  \n");
        assert_eq!(map.grid.width(), 12);
        assert_eq!(map.grid.height(), 12);
    }

    /*------------------------------------------------------------------*/
    /* 4. Tile codes                                                    */
    /*------------------------------------------------------------------*/
    #[test]
    fn digit_codes_and_unknown_chars() {
        let map = parse("123\n0#0\n111\n");
        assert_eq!(map.grid.tile(0, 0), 1);
        assert_eq!(map.grid.tile(1, 0), 2);
        assert_eq!(map.grid.tile(2, 0), 3);
        // unknown glyphs become generic walls
        assert_eq!(map.grid.tile(1, 1), 1);
        assert_eq!(map.grid.tile(0, 1), 0);
    }

    /*------------------------------------------------------------------*/
    /* 5. Last marker wins                                              */
    /*------------------------------------------------------------------*/
    #[test]
    fn later_marker_overrides_earlier() {
        let map = parse("P0\n0P\n");
        assert_eq!(map.spawn, vec2(1.5, 1.5));
        assert_eq!(map.grid.tile(0, 0), 0);
    }
}
