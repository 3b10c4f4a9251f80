use std::fmt;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{
    board::{ShipLayout, TrackingBoard},
    common::{AttackError, Coordinate, Mark},
    config::TOTAL_SHIP_CELLS,
};

/// Record the outcome of an attack on `coord` against `opponent` in `tracking`.
/// Returns the mark that was written.
pub fn resolve(coord: Coordinate, opponent: &ShipLayout, tracking: &mut TrackingBoard) -> Mark {
    let mark = if opponent.get(coord) { Mark::Hit } else { Mark::Miss };
    tracking.set(coord, mark);
    mark
}

/// `true` once every cell of the opponent's fleet has been hit.
pub fn has_won(tracking: &TrackingBoard) -> bool {
    tracking.count(&Mark::Hit) == TOTAL_SHIP_CELLS
}

/// Which side won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Human,
    Opponent,
    /// Both fleets were sunk in the same round.
    Both,
}

/// Stage of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    PlacingPlayerFleet,
    PlacingOpponentFleet,
    Playing,
    Ended(Winner),
}

/// Errors returned when a transition is requested out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The transition is not valid in the current phase.
    WrongPhase { expected: Phase, actual: Phase },
    /// A fleet handed to the game does not hold the full number of ship cells.
    IncompleteFleet { cells: usize },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::WrongPhase { expected, actual } => {
                write!(f, "Expected phase {:?}, game is in {:?}", expected, actual)
            }
            GameError::IncompleteFleet { cells } => write!(
                f,
                "Fleet holds {} cells, expected {}",
                cells, TOTAL_SHIP_CELLS
            ),
        }
    }
}

impl std::error::Error for GameError {}

/// One player's boards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Side {
    /// Where this player's ships sit.
    pub ships: ShipLayout,
    /// This player's attacks against the other side.
    pub tracking: TrackingBoard,
}

impl Side {
    fn new() -> Self {
        Self {
            ships: ShipLayout::new(false),
            tracking: TrackingBoard::new(Mark::Unknown),
        }
    }

    /// Number of hits this side has scored.
    pub fn hits(&self) -> usize {
        self.tracking.count(&Mark::Hit)
    }
}

/// Everything the game loop mutates, owned by a single loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    phase: Phase,
    human: Side,
    opponent: Side,
    rounds: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            phase: Phase::PlacingPlayerFleet,
            human: Side::new(),
            opponent: Side::new(),
            rounds: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn human(&self) -> &Side {
        &self.human
    }

    pub fn opponent(&self) -> &Side {
        &self.opponent
    }

    /// Completed attack rounds.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn winner(&self) -> Option<Winner> {
        match self.phase {
            Phase::Ended(w) => Some(w),
            _ => None,
        }
    }

    fn expect_phase(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn check_fleet(layout: &ShipLayout) -> Result<(), GameError> {
        let cells = layout.count(&true);
        if cells == TOTAL_SHIP_CELLS {
            Ok(())
        } else {
            Err(GameError::IncompleteFleet { cells })
        }
    }

    /// Freeze the human's completed layout.
    pub fn install_human_fleet(&mut self, layout: ShipLayout) -> Result<(), GameError> {
        self.expect_phase(Phase::PlacingPlayerFleet)?;
        Self::check_fleet(&layout)?;
        self.human.ships = layout;
        self.phase = Phase::PlacingOpponentFleet;
        debug!("human fleet placed");
        Ok(())
    }

    /// Freeze the opponent's completed layout and start play.
    pub fn install_opponent_fleet(&mut self, layout: ShipLayout) -> Result<(), GameError> {
        self.expect_phase(Phase::PlacingOpponentFleet)?;
        Self::check_fleet(&layout)?;
        self.opponent.ships = layout;
        self.phase = Phase::Playing;
        debug!("opponent fleet placed, game on");
        Ok(())
    }

    /// Check that the human may attack `coord` without resolving it.
    pub fn check_human_target(&self, coord: Coordinate) -> Result<(), AttackError> {
        if self.phase != Phase::Playing {
            return Err(AttackError::NotPlaying);
        }
        if self.human.tracking.get(coord) != Mark::Unknown {
            return Err(AttackError::AlreadyAttacked(coord));
        }
        Ok(())
    }

    /// Resolve the human's attack. Cells already marked are refused.
    pub fn human_attack(&mut self, coord: Coordinate) -> Result<Mark, AttackError> {
        self.check_human_target(coord)?;
        let mark = resolve(coord, &self.opponent.ships, &mut self.human.tracking);
        debug!("human attacks {} -> {:?}", coord, mark);
        Ok(mark)
    }

    /// Resolve the opponent's attack. Repeated cells simply re-record the outcome.
    pub fn opponent_attack(&mut self, coord: Coordinate) -> Result<Mark, GameError> {
        self.expect_phase(Phase::Playing)?;
        let mark = resolve(coord, &self.human.ships, &mut self.opponent.tracking);
        debug!("opponent attacks {} -> {:?}", coord, mark);
        Ok(mark)
    }

    /// Close the round: evaluate both tracking boards and end the game if either
    /// side has sunk the other's fleet.
    pub fn end_round(&mut self) -> Result<Option<Winner>, GameError> {
        self.expect_phase(Phase::Playing)?;
        self.rounds += 1;
        let winner = match (has_won(&self.human.tracking), has_won(&self.opponent.tracking)) {
            (true, true) => Some(Winner::Both),
            (true, false) => Some(Winner::Human),
            (false, true) => Some(Winner::Opponent),
            (false, false) => None,
        };
        if let Some(w) = winner {
            info!("game over after {} rounds: {:?}", self.rounds, w);
            self.phase = Phase::Ended(w);
        }
        Ok(winner)
    }

    /// Final report, available once the game has ended.
    pub fn summary(&self) -> Option<GameSummary> {
        self.winner().map(|winner| GameSummary {
            winner,
            rounds: self.rounds,
            human_hits: self.human.hits(),
            opponent_hits: self.opponent.hits(),
        })
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub winner: Winner,
    pub rounds: u32,
    pub human_hits: usize,
    pub opponent_hits: usize,
}
