use glam::Vec2;

use crate::brain::SteerAction;

/// World-space position in fractional tile units.
#[derive(Debug, Clone, Copy)]
pub struct Position(pub Vec2);

/// Displacement applied on the next tic (already scaled by DT).
#[derive(Debug, Clone, Copy, Default)]
pub struct Velocity(pub Vec2);

/// Facing angle in radians (0 = east, y-down world).
#[derive(Debug, Clone, Copy)]
pub struct Heading(pub f32);

/// Movement speed in tiles per second.
#[derive(Debug, Clone, Copy)]
pub struct Speed(pub f32);

/// Marks the one player-controlled entity.
#[derive(Debug, Clone, Copy)]
pub struct Player;

/// Marks entities the sprite pass draws.
#[derive(Debug, Clone, Copy)]
pub struct Billboard;

/// Per-NPC steering memory: what was chosen this tic and how far the
/// player was when it was chosen.
#[derive(Debug, Clone, Copy)]
pub struct Steering {
    pub action: SteerAction,
    pub dist_before: f32,
}

impl Default for Steering {
    fn default() -> Self {
        Self {
            action: SteerAction::Stay,
            dist_before: f32::MAX,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct InputCmd {
    pub forward: f32, // –1 … +1
    pub strafe: f32,  // –1 … +1  (left / right)
    pub turn: f32,    // –1 … +1  (+1 = clockwise on screen)
}
