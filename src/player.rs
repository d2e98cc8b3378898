//! Player state and movement
//!
//! Contains the Player struct, input actions, and per-tick physics helpers.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::animation::{AnimationKind, AnimationSet, FrameCursor, Keyframe};
use crate::collision::Aabb;
use crate::combat::CombatState;
use crate::game_state::MatchConfig;

// =============================================================================
// IDENTITY + INPUT
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    Player1,
    Player2,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::Player1, PlayerId::Player2];

    pub fn index(self) -> usize {
        match self {
            PlayerId::Player1 => 0,
            PlayerId::Player2 => 1,
        }
    }

    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::Player1 => PlayerId::Player2,
            PlayerId::Player2 => PlayerId::Player1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.index() + 1)
    }
}

/// Discrete input addressed to one fighter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    MoveLeft,
    MoveRight,
    /// Movement key released
    StopMoving,
    Jump,
    Attack,
}

// =============================================================================
// DATA STRUCTURES
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub id: PlayerId,

    // Position (sprite centre, y up) and velocity per tick
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,

    // Hit-box size
    pub width: f32,
    pub height: f32,
    pub facing_right: bool,

    pub health: u32,
    pub max_health: u32,
    pub combat: CombatState,

    pub animation: AnimationKind,
    pub cursor: FrameCursor,
    pub frames: AnimationSet,
}

impl Player {
    pub fn new(id: PlayerId, config: &MatchConfig) -> Self {
        let (x, y) = config.spawns[id.index()];
        Self {
            id,
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            width: config.frame_size.width as f32,
            height: config.frame_size.height as f32,
            facing_right: id == PlayerId::Player1,
            health: config.max_health,
            max_health: config.max_health,
            combat: CombatState::Idle,
            animation: AnimationKind::Walk,
            cursor: FrameCursor::default(),
            frames: config.animation_set(id),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.combat != CombatState::Dead
    }

    pub fn is_dead(&self) -> bool {
        self.combat == CombatState::Dead
    }

    pub fn is_attacking(&self) -> bool {
        matches!(self.combat, CombatState::Attacking { .. })
    }

    pub fn is_moving(&self) -> bool {
        libm::fabsf(self.vx) > f32::EPSILON
    }

    pub fn hitbox(&self) -> Aabb {
        (
            self.x - self.width / 2.0,
            self.y - self.height / 2.0,
            self.width,
            self.height,
        )
    }

    pub fn bottom(&self) -> f32 {
        self.y - self.height / 2.0
    }

    pub fn set_bottom(&mut self, bottom: f32) {
        self.y = bottom + self.height / 2.0;
    }

    // =========================================================================
    // MOVEMENT
    // =========================================================================

    /// Start walking. Ignored mid-swing.
    pub fn walk(&mut self, vx: f32) {
        if !self.is_alive() || self.is_attacking() {
            return;
        }
        self.vx = vx;
        if self.is_moving() {
            self.facing_right = vx > 0.0;
        }
    }

    pub fn stop(&mut self) {
        self.vx = 0.0;
    }

    /// Jump from rest. Returns whether the jump happened.
    pub fn jump(&mut self, speed: f32) -> bool {
        if !self.is_alive() || self.vy != 0.0 {
            return false;
        }
        self.vy = speed;
        true
    }

    pub fn apply_gravity(&mut self, gravity: f32) {
        if self.is_alive() {
            self.vy -= gravity;
        }
    }

    pub fn integrate(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
    }

    pub fn clamp_to_arena(&mut self, width: f32) {
        self.x = self.x.clamp(0.0, width);
    }

    // =========================================================================
    // ANIMATION
    // =========================================================================

    /// Switch strips, restarting from frame 0.
    pub fn select_animation(&mut self, kind: AnimationKind) {
        self.animation = kind;
        self.cursor.reset();
    }

    pub fn advance_animation(&mut self, dt: f32) {
        let strip = self.frames.get(self.animation);
        self.cursor.advance(strip, dt, self.animation.playback());
    }

    pub fn frame_index(&self) -> usize {
        self.cursor.index
    }

    pub fn current_frame(&self) -> Option<&Keyframe> {
        self.frames.get(self.animation).frame(self.cursor.index)
    }

    /// Dead and showing the last death frame.
    pub fn death_animation_finished(&self) -> bool {
        self.is_dead()
            && self.animation == AnimationKind::Death
            && self
                .cursor
                .is_finished(&self.frames.death, AnimationKind::Death.playback())
    }
}
