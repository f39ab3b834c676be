//! Grid-based raycasting engine.
//!
//! A per-column DDA sweep over a 2-D tile grid produces perpendicular wall
//! distances and a z-buffer; billboard sprites are composited against that
//! buffer, a minimap is overlaid, and NPCs steer themselves with a tiny
//! online-learning action brain persisted as JSON.

pub mod brain;
pub mod engine;
pub mod mapfile;
pub mod renderer;
pub mod sim;
pub mod world;
