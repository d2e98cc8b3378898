//! Match events
//!
//! Things that happened during a tick, in order. The presentation layer
//! drains them to play sounds and effects.

use serde::{Deserialize, Serialize};

use crate::combat::Hit;
use crate::player::PlayerId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    AttackStarted { player: PlayerId },
    Jumped { player: PlayerId },
    Hit {
        attacker: PlayerId,
        victim: PlayerId,
        health_left: u32,
    },
    Died { player: PlayerId },
    /// Loser's death animation starts
    MatchDecided { winner: PlayerId },
    /// Death animation done, match frozen
    MatchEnded { winner: PlayerId },
}

impl From<Hit> for MatchEvent {
    fn from(hit: Hit) -> Self {
        MatchEvent::Hit {
            attacker: hit.attacker,
            victim: hit.victim,
            health_left: hit.health_left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landed_hit_becomes_hit_event() {
        let hit = Hit {
            attacker: PlayerId::Player2,
            victim: PlayerId::Player1,
            health_left: 0,
            killed: true,
        };
        assert_eq!(
            MatchEvent::from(hit),
            MatchEvent::Hit {
                attacker: PlayerId::Player2,
                victim: PlayerId::Player1,
                health_left: 0,
            }
        );
    }
}
