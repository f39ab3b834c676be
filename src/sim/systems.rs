use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;

use super::components::{Heading, InputCmd, Position, Speed, Steering, Velocity};
use super::movement::resolve_move;
use super::tic::DT;
use crate::brain::SteeringBrain;
use crate::world::TileGrid;

pub const MOVE_SPEED: f32 = 3.2; // tiles / second
pub const TURN_RATE: f32 = std::f32::consts::PI * (120.0 / 180.0); // rad / second
pub const NPC_SPEED: f32 = 2.2; // tiles / second

/// Turn the per-frame input axes into the player's heading and per-tic
/// displacement.  Diagonal wishes are normalized so forward+strafe is no
/// faster than either alone.
pub fn player_input(world: &mut World, player: Entity, cmd: InputCmd) {
    if let Ok(mut q) = world.query_one::<(&mut Heading, &mut Velocity)>(player) {
        if let Some((heading, vel)) = q.get() {
            if cmd.turn != 0.0 {
                heading.0 =
                    (heading.0 + cmd.turn * TURN_RATE * DT).rem_euclid(std::f32::consts::TAU);
            }

            if cmd.forward != 0.0 || cmd.strafe != 0.0 {
                let (s, c) = heading.0.sin_cos();
                let fwd = Vec2::new(c, s);
                let right = fwd.perp();
                let wish = (fwd * cmd.forward + right * cmd.strafe).normalize_or_zero();
                vel.0 = wish * MOVE_SPEED * DT;
            } else {
                vel.0 = Vec2::ZERO;
            }
        }
    }
}

/// Every steering entity rolls its next action and converts it into a
/// per-tic displacement.  `player_pos` is the tic-start snapshot; the
/// distance recorded here is what `steer_learn` judges against.
pub fn steer_choose(
    world: &mut World,
    brain: &SteeringBrain,
    player_pos: Vec2,
    rng: &mut impl Rng,
) {
    for (_, (pos, vel, speed, steer)) in
        world.query_mut::<(&Position, &mut Velocity, &Speed, &mut Steering)>()
    {
        steer.dist_before = pos.0.distance(player_pos);
        steer.action = brain.choose(rng);
        vel.0 = steer.action.vector().normalize_or_zero() * speed.0 * DT;
    }
}

/// Advance every mover by its pending displacement, sliding along walls.
pub fn apply_movement(world: &mut World, grid: &TileGrid) {
    for (_, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        if vel.0 != Vec2::ZERO {
            pos.0 = resolve_move(grid, pos.0, vel.0);
        }
    }
}

/// Reward or punish each entity's last action by whether it closed
/// distance to the same `player_pos` snapshot `steer_choose` used.
pub fn steer_learn(world: &mut World, brain: &mut SteeringBrain, player_pos: Vec2) {
    for (_, (pos, steer)) in world.query_mut::<(&Position, &Steering)>() {
        let improved = pos.0.distance(player_pos) < steer.dist_before;
        brain.learn(steer.action, improved);
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
