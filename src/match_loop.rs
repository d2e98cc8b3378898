//! Match loop
//!
//! Owns both fighters and the platform and advances them one tick at a
//! time: gravity and movement, attacks, platform rest, arena clamping, and
//! the win check.

use alloc::vec::Vec;

use crate::animation::AnimationKind;
use crate::collision::rest_on_platform;
use crate::combat::{self, Hit};
use crate::error::ConfigError;
use crate::events::MatchEvent;
use crate::game_state::{GamePhase, MatchConfig};
use crate::player::{Player, PlayerAction, PlayerId};
use crate::snapshot::{MatchSnapshot, PlayerView};
use crate::stage::Platform;

#[derive(Clone, Debug)]
pub struct Match {
    config: MatchConfig,
    players: [Player; 2],
    platform: Platform,
    phase: GamePhase,
    winner: Option<PlayerId>,
    tick: u64,
    /// Seconds spent in MatchEnd, for the victory screen's own animations
    end_time: f32,
    events: Vec<MatchEvent>,
}

impl Match {
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: MatchConfig) -> Self {
        let players = PlayerId::ALL.map(|id| Player::new(id, &config));
        Self {
            platform: config.platform,
            config,
            players,
            phase: GamePhase::Playing,
            winner: None,
            tick: 0,
            end_time: 0.0,
            events: Vec::new(),
        }
    }

    /// Fresh match with the same configuration.
    pub fn restart(&self) -> Self {
        log::debug!("restarting match");
        Self::build(self.config.clone())
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase.is_over()
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn time_since_end(&self) -> f32 {
        self.end_time
    }

    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        core::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            players: [
                PlayerView::from(&self.players[0]),
                PlayerView::from(&self.players[1]),
            ],
            phase: self.phase,
            game_over: self.is_game_over(),
            winner: self.winner,
        }
    }

    // =========================================================================
    // INPUT
    // =========================================================================

    pub fn handle_input(&mut self, id: PlayerId, action: PlayerAction) {
        if self.phase != GamePhase::Playing {
            log::trace!("match decided, ignoring {:?} from {}", action, id);
            return;
        }
        let move_speed = self.config.move_speed;
        let jump_speed = self.config.jump_speed;
        let player = &mut self.players[id.index()];
        if player.is_dead() {
            return;
        }

        match action {
            PlayerAction::MoveLeft => player.walk(-move_speed),
            PlayerAction::MoveRight => player.walk(move_speed),
            PlayerAction::StopMoving => player.stop(),
            PlayerAction::Jump => {
                if player.jump(jump_speed) {
                    self.events.push(MatchEvent::Jumped { player: id });
                }
            }
            PlayerAction::Attack => {
                if combat::start_attack(player) {
                    self.events.push(MatchEvent::AttackStarted { player: id });
                }
            }
        }
    }

    // =========================================================================
    // UPDATE
    // =========================================================================

    /// Advance the match by one frame that took `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            log::warn!("ignoring invalid frame time {}", dt);
            0.0
        };
        self.tick += 1;
        log::trace!("tick {} dt={} phase={:?}", self.tick, dt, self.phase);

        if self.phase == GamePhase::MatchEnd {
            self.end_time += dt;
            return;
        }

        // Physics
        let gravity = self.config.gravity;
        for p in &mut self.players {
            p.apply_gravity(gravity);
            p.integrate();
        }

        // Death animations of fighters who fell on earlier ticks
        for p in &mut self.players {
            if p.is_dead() {
                p.advance_animation(dt);
            }
        }

        if self.phase == GamePhase::Playing {
            self.update_combat(dt);
        }

        for p in &mut self.players {
            rest_on_platform(p, &self.platform);
            p.clamp_to_arena(self.config.arena_width);
        }

        self.check_win();
        self.check_match_end();
    }

    fn update_combat(&mut self, dt: f32) {
        let duration = self.config.attack_duration();
        let damage = self.config.attack_damage;

        // Player 1 resolves first; a fighter felled here cannot answer this tick
        let [p1, p2] = &mut self.players;
        let first = combat::update_attack(p1, p2, dt, duration, damage);
        let second = combat::update_attack(p2, p1, dt, duration, damage);
        for hit in [first, second].into_iter().flatten() {
            self.record_hit(hit);
        }

        for p in &mut self.players {
            if p.animation == AnimationKind::Walk && p.is_moving() && p.is_alive() {
                p.advance_animation(dt);
            }
        }
    }

    fn record_hit(&mut self, hit: Hit) {
        self.events.push(hit.into());
        if hit.killed {
            self.events.push(MatchEvent::Died { player: hit.victim });
        }
    }

    fn check_win(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let Some(loser) = self.players.iter().find(|p| p.health == 0).map(|p| p.id) else {
            return;
        };
        let winner = loser.opponent();
        self.phase = GamePhase::FinalKo;
        self.winner = Some(winner);
        self.players[winner.index()].stop();
        self.events.push(MatchEvent::MatchDecided { winner });
        log::info!("{} wins", winner);
    }

    fn check_match_end(&mut self) {
        if self.phase != GamePhase::FinalKo {
            return;
        }
        if !self.players.iter().any(Player::death_animation_finished) {
            return;
        }
        self.phase = GamePhase::MatchEnd;
        if let Some(winner) = self.winner {
            self.events.push(MatchEvent::MatchEnded { winner });
        }
        log::debug!("death animation finished, match frozen");
    }
}
