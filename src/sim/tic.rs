use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use std::time::{Duration, Instant};

use super::components::{InputCmd, Position};
use super::{mob, systems};
use crate::brain::SteeringBrain;
use crate::world::TileGrid;

pub const SIM_FPS: u32 = 60;
pub const DT: f32 = 1.0 / SIM_FPS as f32;
const TIC: Duration = Duration::from_micros(1_000_000 / SIM_FPS as u64);

/// Owns the ECS world and drives all game-logic systems.
pub struct TicRunner {
    world: World,
    last: Instant,
}

impl Default for TicRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl TicRunner {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            last: Instant::now(),
        }
    }

    #[inline]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[inline]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[inline]
    pub fn spawn_player(&mut self, pos: Vec2, yaw: f32) -> Entity {
        mob::spawn_player(&mut self.world, pos, yaw)
    }

    #[inline]
    pub fn spawn_npc(&mut self, pos: Vec2) -> Entity {
        mob::spawn_npc(&mut self.world, pos)
    }

    /// Write the player's turn and wish-velocity for the coming tics.
    #[inline]
    pub fn apply_input(&mut self, player: Entity, cmd: InputCmd) {
        systems::player_input(&mut self.world, player, cmd);
    }

    /// Advance enough tics to synchronise simulation with real time.
    pub fn pump(
        &mut self,
        grid: &TileGrid,
        brain: &mut SteeringBrain,
        player: Entity,
        rng: &mut impl Rng,
    ) {
        while self.last.elapsed() >= TIC {
            self.tick(grid, brain, player, rng);
            self.last += TIC;
        }
    }

    /* ---------------------------------------------------------------- */
    /* internal: run one fixed-rate game tic                             */
    /* ---------------------------------------------------------------- */
    fn tick(
        &mut self,
        grid: &TileGrid,
        brain: &mut SteeringBrain,
        player: Entity,
        rng: &mut impl Rng,
    ) {
        // one player snapshot per tic, so choose and learn judge the
        // same target even though the player also moves this tic
        let mut player_pos = None;
        if let Ok(mut q) = self.world.query_one::<&Position>(player) {
            if let Some(pos) = q.get() {
                player_pos = Some(pos.0);
            }
        }
        let Some(player_pos) = player_pos else { return };

        systems::steer_choose(&mut self.world, brain, player_pos, rng);
        systems::apply_movement(&mut self.world, grid);
        systems::steer_learn(&mut self.world, brain, player_pos);
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::components::Steering;
    use glam::vec2;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn pump_runs_due_tics() {
        let mut tiles = vec![0u8; 64];
        for i in 0..8 {
            tiles[i] = 1;
            tiles[56 + i] = 1;
            tiles[i * 8] = 1;
            tiles[i * 8 + 7] = 1;
        }
        let grid = TileGrid::new(8, 8, tiles);

        let mut runner = TicRunner::new();
        let player = runner.spawn_player(vec2(1.5, 1.5), 0.0);
        let npc = runner.spawn_npc(vec2(6.5, 6.5));

        let mut brain = SteeringBrain::new();
        let mut rng = StdRng::seed_from_u64(11);
        runner.last = Instant::now() - TIC;
        runner.pump(&grid, &mut brain, player, &mut rng);

        // at least one tic ran: the steering memory was written
        let mut q = runner.world().query_one::<&Steering>(npc).unwrap();
        let steer = q.get().unwrap();
        assert!(steer.dist_before < f32::MAX);
    }
}
