//! Configuration errors
//!
//! The simulation itself has no failure modes; a match can only be refused
//! because its configuration would break the combat invariants.

use thiserror::Error;

use crate::animation::AnimationKind;
use crate::player::PlayerId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("frame period must be positive, got {0}")]
    NonPositiveFramePeriod(f32),

    #[error("{0} animation needs at least one frame")]
    EmptyAnimation(AnimationKind),

    #[error("max health must be at least 1")]
    ZeroMaxHealth,

    #[error("attack damage must be at least 1")]
    ZeroAttackDamage,

    #[error("arena must have positive size, got {width}x{height}")]
    NonPositiveArena { width: f32, height: f32 },

    #[error("frame size must be positive, got {width}x{height}")]
    NonPositiveFrameSize { width: u32, height: u32 },

    #[error("platform must have positive size, got {width}x{height}")]
    NonPositivePlatform { width: f32, height: f32 },

    #[error("{name} must be a finite non-negative number, got {value}")]
    InvalidConstant { name: &'static str, value: f32 },

    #[error("{player} spawns at ({x}, {y}), outside the arena")]
    SpawnOutsideArena { player: PlayerId, x: f32, y: f32 },
}
