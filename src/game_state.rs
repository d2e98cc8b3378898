//! Game state management
//!
//! Contains the GamePhase enum and the MatchConfig every match is built from.

use alloc::string::String;

use serde::{Deserialize, Serialize};

use crate::animation::{Animation, AnimationKind, AnimationSet};
use crate::error::ConfigError;
use crate::player::PlayerId;
use crate::stage::Platform;

/// Represents the current phase of a match
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,  // Active gameplay
    FinalKo,  // Match decided, loser's death animation playing
    MatchEnd, // Death animation done, everything frozen
}

impl GamePhase {
    pub fn is_over(self) -> bool {
        self != GamePhase::Playing
    }
}

// =============================================================================
// CONFIG
// =============================================================================

/// Sprite sheet names for one fighter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skin {
    pub walk_sheet: String,
    pub attack_sheet: String,
    pub death_sheet: String,
}

impl Skin {
    pub fn captain() -> Self {
        Self {
            walk_sheet: "Captain_walk.png".into(),
            attack_sheet: "Captain_attack1.png".into(),
            death_sheet: "Captain_death.png".into(),
        }
    }

    pub fn pirate() -> Self {
        Self {
            walk_sheet: "Pirate1_walk_flip.png".into(),
            attack_sheet: "Pirate1_attack.png".into(),
            death_sheet: "Pirate1_death.png".into(),
        }
    }
}

/// Sprite cell size; also the hit-box size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSize {
    pub width: u32,
    pub height: u32,
}

/// Everything tunable about a match. Physics values are per tick, timing
/// values in seconds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub arena_width: f32,
    pub arena_height: f32,
    pub gravity: f32,
    pub jump_speed: f32,
    pub move_speed: f32,
    pub max_health: u32,
    pub attack_damage: u32,
    pub frame_period: f32,
    pub walk_frames: u32,
    pub attack_frames: u32,
    pub death_frames: u32,
    pub frame_size: FrameSize,
    pub platform: Platform,
    pub spawns: [(f32, f32); 2],
    pub skins: [Skin; 2],
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            arena_width: 1000.0,
            arena_height: 500.0,
            gravity: 0.5,
            jump_speed: 10.0,
            move_speed: 5.0,
            max_health: 5,
            attack_damage: 1,
            frame_period: 0.1,
            walk_frames: 6,
            attack_frames: 6,
            death_frames: 6,
            frame_size: FrameSize {
                width: 48,
                height: 48,
            },
            platform: Platform::shoreline(),
            spawns: [(100.0, 200.0), (200.0, 200.0)],
            skins: [Skin::captain(), Skin::pirate()],
        }
    }
}

impl MatchConfig {
    /// How long one attack activation lasts.
    pub fn attack_duration(&self) -> f32 {
        self.attack_frames as f32 * self.frame_period
    }

    pub fn animation_set(&self, id: PlayerId) -> AnimationSet {
        let skin = &self.skins[id.index()];
        let FrameSize { width, height } = self.frame_size;
        let strip = |sheet: &str, count| {
            Animation::from_strip(sheet, count, width, height, self.frame_period)
        };
        AnimationSet {
            walk: strip(&skin.walk_sheet, self.walk_frames),
            attack: strip(&skin.attack_sheet, self.attack_frames),
            death: strip(&skin.death_sheet, self.death_frames),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.arena_width > 0.0 && self.arena_height > 0.0) {
            return Err(ConfigError::NonPositiveArena {
                width: self.arena_width,
                height: self.arena_height,
            });
        }
        for (name, value) in [
            ("gravity", self.gravity),
            ("jump_speed", self.jump_speed),
            ("move_speed", self.move_speed),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidConstant { name, value });
            }
        }
        if self.max_health == 0 {
            return Err(ConfigError::ZeroMaxHealth);
        }
        if self.attack_damage == 0 {
            return Err(ConfigError::ZeroAttackDamage);
        }
        if !(self.frame_period > 0.0 && self.frame_period.is_finite()) {
            return Err(ConfigError::NonPositiveFramePeriod(self.frame_period));
        }
        for (kind, count) in [
            (AnimationKind::Walk, self.walk_frames),
            (AnimationKind::Attack, self.attack_frames),
            (AnimationKind::Death, self.death_frames),
        ] {
            if count == 0 {
                return Err(ConfigError::EmptyAnimation(kind));
            }
        }
        let FrameSize { width, height } = self.frame_size;
        if width == 0 || height == 0 {
            return Err(ConfigError::NonPositiveFrameSize { width, height });
        }
        let platform = &self.platform;
        if !(platform.width > 0.0 && platform.height > 0.0) {
            return Err(ConfigError::NonPositivePlatform {
                width: platform.width,
                height: platform.height,
            });
        }
        for id in PlayerId::ALL {
            let (x, y) = self.spawns[id.index()];
            let inside = (0.0..=self.arena_width).contains(&x)
                && (0.0..=self.arena_height).contains(&y);
            if !inside {
                return Err(ConfigError::SpawnOutsideArena { player: id, x, y });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = MatchConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert!((config.attack_duration() - 0.6).abs() < 1e-6);
    }

    #[test]
    fn rejects_zero_frame_period() {
        let config = MatchConfig {
            frame_period: 0.0,
            ..MatchConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositiveFramePeriod(0.0))
        );
    }

    #[test]
    fn rejects_empty_death_strip() {
        let config = MatchConfig {
            death_frames: 0,
            ..MatchConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyAnimation(AnimationKind::Death))
        );
    }

    #[test]
    fn rejects_zero_health_and_damage() {
        let no_health = MatchConfig {
            max_health: 0,
            ..MatchConfig::default()
        };
        assert_eq!(no_health.validate(), Err(ConfigError::ZeroMaxHealth));

        let no_damage = MatchConfig {
            attack_damage: 0,
            ..MatchConfig::default()
        };
        assert_eq!(no_damage.validate(), Err(ConfigError::ZeroAttackDamage));
    }

    #[test]
    fn rejects_negative_gravity() {
        let config = MatchConfig {
            gravity: -0.5,
            ..MatchConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidConstant {
                name: "gravity",
                value: -0.5
            })
        );
    }

    #[test]
    fn rejects_nan_move_speed() {
        let config = MatchConfig {
            move_speed: f32::NAN,
            ..MatchConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidConstant {
                name: "move_speed",
                ..
            })
        ));
    }

    #[test]
    fn rejects_spawn_outside_arena() {
        let config = MatchConfig {
            spawns: [(100.0, 200.0), (1200.0, 200.0)],
            ..MatchConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::SpawnOutsideArena {
                player: PlayerId::Player2,
                x: 1200.0,
                y: 200.0
            })
        );
    }

    #[test]
    fn rejects_degenerate_geometry() {
        let flat = MatchConfig {
            frame_size: FrameSize {
                width: 48,
                height: 0,
            },
            ..MatchConfig::default()
        };
        assert!(matches!(
            flat.validate(),
            Err(ConfigError::NonPositiveFrameSize { .. })
        ));

        let no_arena = MatchConfig {
            arena_width: 0.0,
            ..MatchConfig::default()
        };
        assert!(matches!(
            no_arena.validate(),
            Err(ConfigError::NonPositiveArena { .. })
        ));

        let flat_arena = MatchConfig {
            arena_height: -1.0,
            ..MatchConfig::default()
        };
        assert_eq!(
            flat_arena.validate(),
            Err(ConfigError::NonPositiveArena {
                width: 1000.0,
                height: -1.0
            })
        );

        let no_platform = MatchConfig {
            platform: Platform {
                width: 0.0,
                ..Platform::shoreline()
            },
            ..MatchConfig::default()
        };
        assert_eq!(
            no_platform.validate(),
            Err(ConfigError::NonPositivePlatform {
                width: 0.0,
                height: 128.0
            })
        );
    }

    #[test]
    fn rejects_negative_jump_speed() {
        let config = MatchConfig {
            jump_speed: -10.0,
            ..MatchConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidConstant {
                name: "jump_speed",
                value: -10.0
            })
        );
    }

    #[test]
    fn rejects_spawn_above_arena() {
        let config = MatchConfig {
            spawns: [(100.0, 600.0), (200.0, 200.0)],
            ..MatchConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::SpawnOutsideArena {
                player: PlayerId::Player1,
                x: 100.0,
                y: 600.0
            })
        );
    }

    #[test]
    fn animation_set_uses_each_skin() {
        let config = MatchConfig::default();
        let captain = config.animation_set(PlayerId::Player1);
        let pirate = config.animation_set(PlayerId::Player2);
        assert_eq!(captain.attack.frames[0].texture.sheet, "Captain_attack1.png");
        assert_eq!(pirate.walk.frames[2].texture.x, 96);
        assert_eq!(pirate.death.len(), 6);
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: MatchConfig =
            serde_json::from_str(r#"{ "max_health": 100, "attack_damage": 10 }"#).unwrap();
        assert_eq!(config.max_health, 100);
        assert_eq!(config.attack_damage, 10);
        assert_eq!(config.arena_width, 1000.0);
        assert_eq!(config.validate(), Ok(()));
    }
}
