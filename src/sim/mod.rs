mod components;
mod mob;
mod movement;
mod systems;
mod tic;

pub use components::{Billboard, Heading, InputCmd, Player, Position, Speed, Steering, Velocity};
pub use mob::{pick_npc_spawn, spawn_npc, spawn_player};
pub use movement::resolve_move;
pub use systems::{
    MOVE_SPEED, NPC_SPEED, TURN_RATE, apply_movement, player_input, steer_choose, steer_learn,
};
pub use tic::{DT, SIM_FPS, TicRunner};
