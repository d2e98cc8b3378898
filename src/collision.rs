//! Collision checks
//!
//! Axis-aligned overlap between the two fighters' hit-boxes (gates attack
//! damage) and between a fighter and the platform (vertical rest only).
//! Evaluated once per tick; no swept detection.

use crate::player::Player;
use crate::stage::Platform;

/// Axis-aligned box as (left, bottom, width, height).
pub type Aabb = (f32, f32, f32, f32);

/// Strict overlap: boxes that only touch along an edge do not collide.
pub fn aabb_overlap(a: Aabb, b: Aabb) -> bool {
    let (x1, y1, w1, h1) = a;
    let (x2, y2, w2, h2) = b;
    x1 < x2 + w2 && x1 + w1 > x2 && y1 < y2 + h2 && y1 + h1 > y2
}

pub fn players_overlap(a: &Player, b: &Player) -> bool {
    aabb_overlap(a.hitbox(), b.hitbox())
}

/// Stop a fighter that sank into the platform and stand it on the top edge.
///
/// Returns whether a correction happened.
pub fn rest_on_platform(player: &mut Player, platform: &Platform) -> bool {
    if !aabb_overlap(player.hitbox(), platform.bounds()) {
        return false;
    }
    player.vy = 0.0;
    player.set_bottom(platform.top());
    true
}
