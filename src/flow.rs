//! Screen flow
//!
//! Which screen is up (menu, how-to-play, match, victory) and the short
//! delay between picking a menu entry and the switch, during which the
//! picked entry is shown highlighted. Drawing and key handling stay with
//! the presentation layer.

use serde::{Deserialize, Serialize};

/// Delay between a menu choice and the screen switch (seconds)
pub const TRANSITION_DELAY: f32 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    MainMenu,
    HowToPlay,
    Playing,
    Victory,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuCommand {
    StartGame,
    ShowHowToPlay,
    /// Escape: back to the main menu
    Back,
}

/// One-shot timer that switches to `target` when it runs out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DelayedTransition {
    pub target: Screen,
    pub remaining: f32,
}

impl DelayedTransition {
    pub fn new(target: Screen, delay: f32) -> Self {
        Self {
            target,
            remaining: delay,
        }
    }

    /// Count down by `dt`. Returns true once the timer has run out.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.remaining = (self.remaining - dt).max(0.0);
        self.remaining <= 0.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScreenFlow {
    screen: Screen,
    pending: Option<DelayedTransition>,
    highlighted: Option<MenuCommand>,
    delay: f32,
}

impl Default for ScreenFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenFlow {
    pub fn new() -> Self {
        Self::with_delay(TRANSITION_DELAY)
    }

    pub fn with_delay(delay: f32) -> Self {
        Self {
            screen: Screen::MainMenu,
            pending: None,
            highlighted: None,
            delay: delay.max(0.0),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&DelayedTransition> {
        self.pending.as_ref()
    }

    /// Menu entry to draw in the "selected" colour.
    pub fn highlighted(&self) -> Option<MenuCommand> {
        self.highlighted
    }

    fn target(&self, command: MenuCommand) -> Option<Screen> {
        match (self.screen, command) {
            (Screen::MainMenu, MenuCommand::StartGame) => Some(Screen::Playing),
            (Screen::MainMenu, MenuCommand::ShowHowToPlay) => Some(Screen::HowToPlay),
            (_, MenuCommand::Back) => Some(Screen::MainMenu),
            _ => None,
        }
    }

    /// Arm a transition. Ignored while another one is pending or when the
    /// command means nothing on the current screen.
    pub fn request(&mut self, command: MenuCommand) -> bool {
        if self.pending.is_some() {
            log::debug!("transition pending, ignoring {:?}", command);
            return false;
        }
        let Some(target) = self.target(command) else {
            return false;
        };
        log::debug!("{:?} -> {:?} in {}s", self.screen, target, self.delay);
        self.highlighted = Some(command);
        self.pending = Some(DelayedTransition::new(target, self.delay));
        true
    }

    /// Run the pending timer. Returns the new screen on the tick it switches.
    pub fn tick(&mut self, dt: f32) -> Option<Screen> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let pending = self.pending.as_mut()?;
        if !pending.advance(dt) {
            return None;
        }
        let target = pending.target;
        self.enter(target);
        Some(target)
    }

    /// The match on screen reached its end: show the victory screen now.
    pub fn match_over(&mut self) -> bool {
        if self.screen != Screen::Playing {
            return false;
        }
        self.enter(Screen::Victory);
        true
    }

    fn enter(&mut self, screen: Screen) {
        log::info!("showing {:?}", screen);
        self.screen = screen;
        self.pending = None;
        self.highlighted = None;
    }
}
