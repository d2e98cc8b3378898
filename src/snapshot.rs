//! Render snapshot
//!
//! Copies out what the presentation layer needs to draw one frame.

use serde::{Deserialize, Serialize};

use crate::animation::{AnimationKind, TextureRef};
use crate::game_state::GamePhase;
use crate::player::{Player, PlayerId};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub x: f32,
    pub y: f32,
    pub facing_right: bool,
    pub animation: AnimationKind,
    pub frame_index: usize,
    pub texture: Option<TextureRef>,
    pub health: u32,
    pub max_health: u32,
    pub alive: bool,
}

impl From<&Player> for PlayerView {
    fn from(p: &Player) -> Self {
        Self {
            id: p.id,
            x: p.x,
            y: p.y,
            facing_right: p.facing_right,
            animation: p.animation,
            frame_index: p.frame_index(),
            texture: p.current_frame().map(|f| f.texture.clone()),
            health: p.health,
            max_health: p.max_health,
            alive: p.is_alive(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub players: [PlayerView; 2],
    pub phase: GamePhase,
    pub game_over: bool,
    pub winner: Option<PlayerId>,
}
