use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand::seq::SliceRandom;

use super::components::{Billboard, Heading, Player, Position, Speed, Steering, Velocity};
use super::systems::NPC_SPEED;
use crate::world::TileGrid;

/// NPCs never spawn inside this radius (squared) around the player.
const SPAWN_CLEARANCE_SQ: f32 = 9.0;

pub fn spawn_player(world: &mut World, pos: Vec2, yaw: f32) -> Entity {
    world.spawn((Position(pos), Velocity::default(), Heading(yaw), Player))
}

pub fn spawn_npc(world: &mut World, pos: Vec2) -> Entity {
    world.spawn((
        Position(pos),
        Velocity::default(),
        Speed(NPC_SPEED),
        Steering::default(),
        Billboard,
    ))
}

/// Pick a random free cell center at least 3 tiles from the player.
/// `None` when every free cell is inside the clearance radius.
pub fn pick_npc_spawn(grid: &TileGrid, player_pos: Vec2, rng: &mut impl Rng) -> Option<Vec2> {
    let mut centers = grid.free_cell_centers();
    centers.shuffle(rng);
    centers
        .into_iter()
        .find(|c| c.distance_squared(player_pos) > SPAWN_CLEARANCE_SQ)
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
