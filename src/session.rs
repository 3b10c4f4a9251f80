//! The game loop: drives a [`Player`] and the automated opponent through the phases
//! of one game.

use log::{debug, trace};
use rand::Rng;

use crate::core::{
    generate_fleet, AttackError, Coordinate, GameState, Phase, Placement, PlacementError,
    PlacementSource, ShipLayout, Winner,
};
use crate::player::{AiPlayer, Player};

/// Adapts a [`Player`] into a [`PlacementSource`], parsing the raw text it returns.
struct HumanPlacement<'a, P: Player> {
    player: &'a mut P,
}

impl<P: Player> PlacementSource for HumanPlacement<'_, P> {
    type Error = anyhow::Error;

    fn next_attempt(
        &mut self,
        length: usize,
        layout: &ShipLayout,
    ) -> anyhow::Result<Result<Placement, PlacementError>> {
        let raw = self.player.request_placement(length, layout)?;
        Ok(Placement::parse(length, &raw.row, &raw.col, &raw.orientation)
            .map_err(PlacementError::Malformed))
    }

    fn rejected(&mut self, length: usize, reason: &PlacementError) -> anyhow::Result<()> {
        self.player.placement_rejected(length, reason)
    }
}

/// One game between a human-side [`Player`] and the automated opponent.
pub struct Session<P: Player, R: Rng> {
    state: GameState,
    human: P,
    opponent: AiPlayer,
    rng: R,
}

impl<P: Player, R: Rng> Session<P, R> {
    pub fn new(human: P, rng: R) -> Self {
        Self {
            state: GameState::new(),
            human,
            opponent: AiPlayer::new(),
            rng,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_human(self) -> P {
        self.human
    }

    /// Run every phase until the game ends and return the winner.
    pub fn run(&mut self) -> anyhow::Result<Winner> {
        loop {
            match self.state.phase() {
                Phase::PlacingPlayerFleet => self.place_human_fleet()?,
                Phase::PlacingOpponentFleet => self.place_opponent_fleet()?,
                Phase::Playing => self.play_round()?,
                Phase::Ended(winner) => {
                    self.human.game_ended(&self.state, winner)?;
                    return Ok(winner);
                }
            }
        }
    }

    fn place_human_fleet(&mut self) -> anyhow::Result<()> {
        let fleet = generate_fleet(&mut HumanPlacement {
            player: &mut self.human,
        })?;
        self.state.install_human_fleet(fleet.into_layout())?;
        Ok(())
    }

    fn place_opponent_fleet(&mut self) -> anyhow::Result<()> {
        let layout = self.opponent.place_fleet(&mut self.rng);
        self.state.install_opponent_fleet(layout)?;
        Ok(())
    }

    /// Ask the player for targets until one is accepted.
    fn human_target(&mut self) -> anyhow::Result<Coordinate> {
        loop {
            let raw = self.human.request_attack(&self.state)?;
            let checked = Coordinate::parse(&raw.row, &raw.col)
                .map_err(AttackError::Malformed)
                .and_then(|c| self.state.check_human_target(c).map(|()| c));
            match checked {
                Ok(coord) => return Ok(coord),
                Err(reason) => {
                    trace!("attack rejected: {}", reason);
                    self.human.attack_rejected(&reason)?;
                }
            }
        }
    }

    /// Human attack, opponent attack, then evaluate both boards.
    fn play_round(&mut self) -> anyhow::Result<()> {
        self.human.show(&self.state)?;

        let target = self.human_target()?;
        let mark = self.state.human_attack(target)?;
        self.human.attack_resolved(target, mark)?;

        let target = self.opponent.select_target(&mut self.rng);
        let mark = self.state.opponent_attack(target)?;
        self.human.opponent_attack_resolved(target, mark)?;

        if let Some(winner) = self.state.end_round()? {
            debug!("round {} ended the game: {:?}", self.state.rounds(), winner);
        }
        Ok(())
    }
}
