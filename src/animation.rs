//! Sprite animation
//!
//! Each fighter carries three frame strips (walk, attack, death) cut from
//! horizontal sprite sheets, and a cursor that walks the active strip by
//! elapsed time.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};

/// Which strip is currently shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationKind {
    Walk,
    Attack,
    Death,
}

impl fmt::Display for AnimationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AnimationKind::Walk => "walk",
            AnimationKind::Attack => "attack",
            AnimationKind::Death => "death",
        };
        f.write_str(name)
    }
}

/// Cell of a sprite sheet. Resolved to a texture by the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureRef {
    pub sheet: String,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub index: u32,
    /// Seconds this frame stays on screen
    pub duration: f32,
    pub texture: TextureRef,
}

/// Ordered frames of one strip.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    pub frames: Vec<Keyframe>,
}

impl Animation {
    /// Cut `count` cells of `width`x`height` from the top row of `sheet`.
    pub fn from_strip(sheet: &str, count: u32, width: u32, height: u32, duration: f32) -> Self {
        let frames = (0..count)
            .map(|i| Keyframe {
                index: i,
                duration,
                texture: TextureRef {
                    sheet: String::from(sheet),
                    x: i * width,
                    y: 0,
                    width,
                    height,
                },
            })
            .collect();
        Self { frames }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frame(&self, index: usize) -> Option<&Keyframe> {
        self.frames.get(index)
    }

    pub fn last_index(&self) -> usize {
        self.frames.len().saturating_sub(1)
    }

    /// Seconds for one pass through the strip.
    pub fn cycle_duration(&self) -> f32 {
        self.frames.iter().map(|f| f.duration.max(0.0)).sum()
    }
}

/// The three strips of one fighter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationSet {
    pub walk: Animation,
    pub attack: Animation,
    pub death: Animation,
}

impl AnimationSet {
    pub fn get(&self, kind: AnimationKind) -> &Animation {
        match kind {
            AnimationKind::Walk => &self.walk,
            AnimationKind::Attack => &self.attack,
            AnimationKind::Death => &self.death,
        }
    }
}

/// What happens after the last frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    Loop,
    /// Stop on the last frame
    Hold,
}

impl AnimationKind {
    pub fn playback(self) -> Playback {
        match self {
            AnimationKind::Walk | AnimationKind::Attack => Playback::Loop,
            AnimationKind::Death => Playback::Hold,
        }
    }
}

/// Position inside the active strip.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameCursor {
    pub index: usize,
    pub time_in_frame: f32,
}

impl FrameCursor {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// A held strip sitting on its final frame.
    pub fn is_finished(&self, animation: &Animation, playback: Playback) -> bool {
        playback == Playback::Hold && self.index >= animation.last_index()
    }

    /// Move forward by `dt` seconds, crossing as many frames as the time covers.
    pub fn advance(&mut self, animation: &Animation, dt: f32, playback: Playback) {
        if animation.is_empty() || self.is_finished(animation, playback) {
            return;
        }
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.time_in_frame += dt;

        // Whole laps land back on the same frame; drop them so the walk
        // below crosses at most one lap.
        let cycle = animation.cycle_duration();
        if playback == Playback::Loop && cycle > 0.0 && self.time_in_frame >= cycle {
            let laps = libm::floorf(self.time_in_frame / cycle);
            self.time_in_frame -= laps * cycle;
            if !(0.0..cycle).contains(&self.time_in_frame) {
                self.time_in_frame = 0.0;
            }
        }

        while let Some(frame) = animation.frame(self.index) {
            if frame.duration <= 0.0 || self.time_in_frame < frame.duration {
                break;
            }
            self.time_in_frame -= frame.duration;
            self.index += 1;

            if self.index >= animation.len() {
                match playback {
                    Playback::Loop => self.index = 0,
                    Playback::Hold => self.index = animation.last_index(),
                }
            }
            if self.is_finished(animation, playback) {
                self.time_in_frame = 0.0;
                break;
            }
        }
    }
}
