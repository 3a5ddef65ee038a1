#![cfg(feature = "std")]

use rand::rngs::SmallRng;

use crate::{
    player::Player,
    session::{Outcome, SessionState, TurnSession},
    transport::Transport,
};

/// One side of a networked game: a player, its turn session and the connection.
pub struct GameNode {
    player: Box<dyn Player>,
    session: TurnSession,
    transport: Box<dyn Transport>,
    shots_fired: usize,
}

impl GameNode {
    pub fn new(player: Box<dyn Player>, session: TurnSession, transport: Box<dyn Transport>) -> Self {
        Self {
            player,
            session,
            transport,
            shots_fired: 0,
        }
    }

    /// Play until one fleet is gone.
    ///
    /// Any failed send or receive, or a malformed message from the peer, ends
    /// the game immediately with an error and no verdict.
    pub async fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<Outcome> {
        loop {
            let state = self.session.state();
            if let SessionState::GameOver(outcome) = state {
                log::info!("game over: {:?} after {} shot(s)", outcome, self.shots_fired);
                self.player.handle_game_over(
                    outcome,
                    self.session.own_field(),
                    self.session.opponent_view(),
                );
                return Ok(outcome);
            }

            self.player
                .show_fields(self.session.own_field(), self.session.opponent_view());
            match state {
                SessionState::MyTurn => self.fire(rng).await?,
                SessionState::OpponentTurn => self.take_fire().await?,
                SessionState::GameOver(_) => {}
            }
        }
    }

    async fn fire(&mut self, rng: &mut SmallRng) -> anyhow::Result<()> {
        let target = self.player.select_target(rng, self.session.opponent_view())?;
        self.transport.send_move(target).await?;
        let result = self.transport.recv_result().await.map_err(|e| {
            log::warn!("no valid result for our shot at {}: {}", target, e);
            e
        })?;
        self.shots_fired += 1;
        log::debug!("shot at {} -> {:?}", target, result);
        self.session.record_my_shot(target, result)?;
        self.player.handle_shot_result(target, result);
        Ok(())
    }

    async fn take_fire(&mut self) -> anyhow::Result<()> {
        self.player.await_opponent();
        let target = self.transport.recv_move().await.map_err(|e| {
            log::warn!("no valid move from opponent: {}", e);
            e
        })?;
        let result = self.session.receive_shot(target)?;
        self.transport.send_result(result).await?;
        log::debug!("opponent shot at {} -> {:?}", target, result);
        self.player.handle_opponent_shot(target, result);
        Ok(())
    }

    /// Current session, including both fields.
    pub fn session(&self) -> &TurnSession {
        &self.session
    }

    /// Total number of shots this player has fired and had answered.
    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }
}
