//! Stage
//!
//! The single static platform both fighters stand on.

use serde::{Deserialize, Serialize};

use crate::collision::Aabb;

/// Static platform, positioned by its centre.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Platform {
    /// Grass strip spanning the whole 1000-wide arena (128px tile, centre at y=50).
    pub const fn shoreline() -> Self {
        Self {
            x: 500.0,
            y: 50.0,
            width: 1000.0,
            height: 128.0,
        }
    }

    pub fn top(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn bounds(&self) -> Aabb {
        (
            self.x - self.width / 2.0,
            self.y - self.height / 2.0,
            self.width,
            self.height,
        )
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::shoreline()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shoreline_top_sits_above_centre() {
        let p = Platform::shoreline();
        assert_eq!(p.top(), 114.0);
        assert_eq!(p.bounds(), (0.0, -14.0, 1000.0, 128.0));
    }
}
