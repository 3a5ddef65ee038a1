use rand::rngs::SmallRng;

use crate::{ai, coord::Coord, field::Field};

use super::Player;

/// Automated player: finishes wounded ships, otherwise fires at random.
#[derive(Debug, Default)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn select_target(&mut self, rng: &mut SmallRng, view: &Field) -> anyhow::Result<Coord> {
        ai::suggest_target(view, rng)
            .ok_or_else(|| anyhow::anyhow!("no unknown cells left to fire at"))
    }
}
