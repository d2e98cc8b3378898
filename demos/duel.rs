//! Headless scripted duel: the captain walks up to the pirate and swings
//! until the match ends.
//!
//! Usage:
//!   RUST_LOG=debug cargo run --example duel

use std::error::Error;

use pirate_cove::{
    GamePhase, Match, MatchConfig, MatchEvent, MenuCommand, PlayerAction, PlayerId, Screen,
    ScreenFlow,
};

const FRAME: f32 = 1.0 / 60.0;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut flow = ScreenFlow::new();
    flow.request(MenuCommand::StartGame);
    while flow.tick(FRAME) != Some(Screen::Playing) {}

    let mut game = Match::new(MatchConfig::default())?;
    let captain = PlayerId::Player1;
    let pirate = PlayerId::Player2;

    game.handle_input(captain, PlayerAction::MoveRight);
    while game.phase() != GamePhase::MatchEnd {
        let close = {
            let (a, b) = (game.player(captain), game.player(pirate));
            (b.x - a.x).abs() < a.width * 0.75
        };
        if close {
            game.handle_input(captain, PlayerAction::StopMoving);
            game.handle_input(captain, PlayerAction::Attack);
        }
        game.tick(FRAME);

        for event in game.drain_events() {
            if let MatchEvent::Hit { victim, health_left, .. } = event {
                println!("tick {:>4}: {} down to {}", game.tick_count(), victim, health_left);
            }
        }
    }

    flow.match_over();
    println!("screen: {:?}", flow.screen());
    println!("{}", serde_json::to_string_pretty(&game.snapshot())?);
    Ok(())
}
