//! Combat system
//!
//! Per-fighter attack state machine: Idle -> Attacking -> Idle, and the
//! one-way transition into Dead. One activation lands at most one hit.

use crate::animation::AnimationKind;
use crate::collision::players_overlap;
use crate::player::{Player, PlayerId};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CombatState {
    Idle,
    Attacking {
        /// Seconds since the swing started
        elapsed: f32,
        dealt_damage: bool,
    },
    /// Terminal
    Dead,
}

/// A landed attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hit {
    pub attacker: PlayerId,
    pub victim: PlayerId,
    pub health_left: u32,
    pub killed: bool,
}

/// Begin a swing. Returns false (and changes nothing) when the fighter is
/// already swinging or dead.
pub fn start_attack(p: &mut Player) -> bool {
    if p.combat != CombatState::Idle {
        return false;
    }
    p.combat = CombatState::Attacking {
        elapsed: 0.0,
        dealt_damage: false,
    };
    p.select_animation(AnimationKind::Attack);
    log::debug!("{} starts an attack", p.id);
    true
}

/// Irreversible switch to Dead. Returns false if already dead.
pub fn kill(p: &mut Player) -> bool {
    if p.combat == CombatState::Dead {
        return false;
    }
    p.combat = CombatState::Dead;
    p.health = 0;
    p.vx = 0.0;
    p.vy = 0.0;
    p.select_animation(AnimationKind::Death);
    log::info!("{} is down", p.id);
    true
}

/// Take `amount` health from `victim`, flooring at zero. Reaching zero kills.
///
/// Returns the health left, or `None` when the victim was already dead.
pub fn apply_damage(victim: &mut Player, amount: u32) -> Option<u32> {
    if victim.is_dead() || victim.health == 0 {
        return None;
    }
    victim.health = victim.health.saturating_sub(amount);
    if victim.health == 0 {
        kill(victim);
    }
    Some(victim.health)
}

/// Advance `attacker`'s swing by `dt` and land it on `defender` if their
/// hit-boxes overlap and this activation has not hit yet.
pub fn update_attack(
    attacker: &mut Player,
    defender: &mut Player,
    dt: f32,
    attack_duration: f32,
    damage: u32,
) -> Option<Hit> {
    let CombatState::Attacking {
        mut elapsed,
        mut dealt_damage,
    } = attacker.combat
    else {
        return None;
    };

    elapsed += dt;
    attacker.advance_animation(dt);

    let mut hit = None;
    if !dealt_damage && defender.is_alive() && players_overlap(attacker, defender) {
        dealt_damage = true;
        if let Some(health_left) = apply_damage(defender, damage) {
            log::info!("{} hit! Health: {}", defender.id, health_left);
            hit = Some(Hit {
                attacker: attacker.id,
                victim: defender.id,
                health_left,
                killed: defender.is_dead(),
            });
        }
    }

    if elapsed > attack_duration {
        attacker.combat = CombatState::Idle;
        attacker.select_animation(AnimationKind::Walk);
        log::debug!("{} attack finished", attacker.id);
    } else {
        attacker.combat = CombatState::Attacking {
            elapsed,
            dealt_damage,
        };
    }
    hit
}
