//! PIRATE COVE - Combat core for a two-player local duel
//!
//! Two pirates share one platform: they walk, jump and swing at each other
//! until one runs out of health, plays a death animation and loses the match.
//! This crate is the simulation only. A presentation layer feeds it inputs
//! and elapsed time, then draws from [`MatchSnapshot`] and plays cues from
//! [`MatchEvent`]s.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod animation;
pub mod collision;
pub mod combat;
pub mod error;
pub mod events;
pub mod flow;
pub mod game_state;
pub mod match_loop;
pub mod player;
pub mod snapshot;
pub mod stage;

pub use animation::{Animation, AnimationKind, AnimationSet, FrameCursor, Keyframe, TextureRef};
pub use combat::CombatState;
pub use error::ConfigError;
pub use events::MatchEvent;
pub use flow::{DelayedTransition, MenuCommand, Screen, ScreenFlow};
pub use game_state::{FrameSize, GamePhase, MatchConfig, Skin};
pub use match_loop::Match;
pub use player::{Player, PlayerAction, PlayerId};
pub use snapshot::{MatchSnapshot, PlayerView};
pub use stage::Platform;
