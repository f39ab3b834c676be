//! Online-learning steering brain for NPCs.
//!
//! Keeps one weight per movement action, shared by every NPC. Actions that
//! close the distance to the player get rewarded, the rest decay, and a
//! mild pull toward the neutral weight keeps any action from permanently
//! dominating or starving. Intentionally tiny and transparent.

mod store;

pub use store::{BrainStore, StoreError};

use glam::Vec2;
use rand::Rng;

/// Reward added to an action's weight when it closed the distance.
pub const LEARN_RATE: f32 = 0.08;
/// Multiplicative penalty when it did not.
pub const DECAY: f32 = 0.995;
/// Hard bounds every stored weight is clamped into.
pub const WEIGHT_MIN: f32 = 0.1;
pub const WEIGHT_MAX: f32 = 5.0;
/// Neutral starting weight.
pub const DEFAULT_WEIGHT: f32 = 1.0;

/// Selection floor so no action ever reaches zero probability.
const CHOICE_FLOOR: f32 = 1e-3;
/// Fraction of the old weight kept by the regularization step.
const KEEP: f32 = 0.98;

/// One movement action: stay put or step toward a compass direction.
///
/// Declaration order fixes the weight-array index and the roulette walk
/// order, so it never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SteerAction {
    Stay,
    East,
    West,
    South,
    North,
    SouthEast,
    NorthEast,
    SouthWest,
    NorthWest,
}

impl SteerAction {
    pub const COUNT: usize = 9;

    pub const ALL: [SteerAction; Self::COUNT] = [
        SteerAction::Stay,
        SteerAction::East,
        SteerAction::West,
        SteerAction::South,
        SteerAction::North,
        SteerAction::SouthEast,
        SteerAction::NorthEast,
        SteerAction::SouthWest,
        SteerAction::NorthWest,
    ];

    /// Raw grid step for this action; south is +y (down-screen).
    /// Diagonals are unit squares, not unit length; callers normalize.
    pub fn vector(self) -> Vec2 {
        match self {
            SteerAction::Stay => Vec2::ZERO,
            SteerAction::East => Vec2::new(1.0, 0.0),
            SteerAction::West => Vec2::new(-1.0, 0.0),
            SteerAction::South => Vec2::new(0.0, 1.0),
            SteerAction::North => Vec2::new(0.0, -1.0),
            SteerAction::SouthEast => Vec2::new(1.0, 1.0),
            SteerAction::NorthEast => Vec2::new(1.0, -1.0),
            SteerAction::SouthWest => Vec2::new(-1.0, 1.0),
            SteerAction::NorthWest => Vec2::new(-1.0, -1.0),
        }
    }

    /// Stable identifier used in the persisted weight file.
    pub fn name(self) -> &'static str {
        match self {
            SteerAction::Stay => "stay",
            SteerAction::East => "east",
            SteerAction::West => "west",
            SteerAction::South => "south",
            SteerAction::North => "north",
            SteerAction::SouthEast => "se",
            SteerAction::NorthEast => "ne",
            SteerAction::SouthWest => "sw",
            SteerAction::NorthWest => "nw",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.name() == name)
    }
}

/// Per-action weights, indexed by [`SteerAction`].
#[derive(Clone, Debug, PartialEq)]
pub struct ActionWeights([f32; SteerAction::COUNT]);

impl Default for ActionWeights {
    fn default() -> Self {
        Self([DEFAULT_WEIGHT; SteerAction::COUNT])
    }
}

impl ActionWeights {
    #[inline]
    pub fn get(&self, action: SteerAction) -> f32 {
        self.0[action as usize]
    }

    /// Store a weight; every write passes through the clamp.
    #[inline]
    pub fn set(&mut self, action: SteerAction, weight: f32) {
        self.0[action as usize] = weight.clamp(WEIGHT_MIN, WEIGHT_MAX);
    }

    pub fn iter(&self) -> impl Iterator<Item = (SteerAction, f32)> + '_ {
        SteerAction::ALL.iter().map(|&a| (a, self.get(a)))
    }
}

/// The shared brain: weights plus the choose/learn rules.
#[derive(Clone, Debug, Default)]
pub struct SteeringBrain {
    weights: ActionWeights,
}

impl SteeringBrain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_weights(weights: ActionWeights) -> Self {
        Self { weights }
    }

    #[inline]
    pub fn weights(&self) -> &ActionWeights {
        &self.weights
    }

    /// Weighted roulette over all actions.
    ///
    /// Draws `r` uniformly in `[0, total)` and walks the fixed action
    /// order accumulating floored weights until the sum reaches `r`.
    pub fn choose(&self, rng: &mut impl Rng) -> SteerAction {
        let mut floored = [0.0f32; SteerAction::COUNT];
        for (i, &a) in SteerAction::ALL.iter().enumerate() {
            floored[i] = self.weights.get(a).max(CHOICE_FLOOR);
        }
        let total: f32 = floored.iter().sum();
        let r = rng.gen_range(0.0..total);

        let mut acc = 0.0;
        for (i, w) in floored.iter().enumerate() {
            acc += w;
            if r <= acc {
                return SteerAction::ALL[i];
            }
        }
        SteerAction::ALL[0]
    }

    /// Update one action's weight from this frame's distance signal.
    pub fn learn(&mut self, action: SteerAction, improved: bool) {
        let mut cur = self.weights.get(action);
        if improved {
            cur += LEARN_RATE;
        } else {
            cur *= DECAY;
        }
        // pull slightly toward neutral to avoid runaway
        cur = KEEP * cur + (1.0 - KEEP) * DEFAULT_WEIGHT;
        self.weights.set(action, cur);
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
