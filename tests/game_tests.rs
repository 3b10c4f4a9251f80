use std::collections::VecDeque;

use broadside::{
    validate, AttackError, Coordinate, GameError, GameState, Mark, Orientation, Phase, Placement,
    PlacementError, Player, RawCoordinate, RawPlacement, Session, ShipLayout, Winner, FLEET,
    TOTAL_SHIP_CELLS,
};
use rand::{rngs::SmallRng, SeedableRng};

fn at(row: usize, col: usize) -> Coordinate {
    Coordinate::new(row, col).unwrap()
}

/// Ships stacked in rows 0..4, each starting at column 0.
fn stacked_fleet() -> ShipLayout {
    let mut layout = ShipLayout::new(false);
    for (row, len) in FLEET.into_iter().enumerate() {
        layout = validate(&layout, &Placement::new(at(row, 0), len, Orientation::Horizontal)).unwrap();
    }
    layout
}

fn fleet_cells() -> Vec<Coordinate> {
    FLEET
        .into_iter()
        .enumerate()
        .flat_map(|(row, len)| (0..len).map(move |col| at(row, col)))
        .collect()
}

#[test]
fn test_phase_order_enforced() {
    let mut state = GameState::new();
    assert_eq!(state.phase(), Phase::PlacingPlayerFleet);
    assert_eq!(
        state.install_opponent_fleet(stacked_fleet()),
        Err(GameError::WrongPhase {
            expected: Phase::PlacingOpponentFleet,
            actual: Phase::PlacingPlayerFleet
        })
    );
    assert_eq!(state.human_attack(at(0, 0)), Err(AttackError::NotPlaying));

    assert_eq!(
        state.install_human_fleet(ShipLayout::new(false)),
        Err(GameError::IncompleteFleet { cells: 0 })
    );
    state.install_human_fleet(stacked_fleet()).unwrap();
    assert_eq!(state.phase(), Phase::PlacingOpponentFleet);
    state.install_opponent_fleet(stacked_fleet()).unwrap();
    assert_eq!(state.phase(), Phase::Playing);
}

#[test]
fn test_duplicate_human_attack_rejected() {
    let mut state = GameState::new();
    state.install_human_fleet(stacked_fleet()).unwrap();
    state.install_opponent_fleet(stacked_fleet()).unwrap();

    assert_eq!(state.human_attack(at(0, 0)), Ok(Mark::Hit));
    assert_eq!(
        state.human_attack(at(0, 0)),
        Err(AttackError::AlreadyAttacked(at(0, 0)))
    );
    assert_eq!(state.human_attack(at(9, 9)), Ok(Mark::Miss));

    // the opponent may hit the same cell again
    assert_eq!(state.opponent_attack(at(5, 5)), Ok(Mark::Miss));
    assert_eq!(state.opponent_attack(at(5, 5)), Ok(Mark::Miss));
    assert_eq!(state.opponent().tracking.count(&Mark::Miss), 1);
}

#[test]
fn test_simultaneous_win_is_both() {
    let mut state = GameState::new();
    state.install_human_fleet(stacked_fleet()).unwrap();
    state.install_opponent_fleet(stacked_fleet()).unwrap();

    let cells = fleet_cells();
    assert_eq!(cells.len(), TOTAL_SHIP_CELLS);
    for (i, coord) in cells.iter().enumerate() {
        state.human_attack(*coord).unwrap();
        state.opponent_attack(*coord).unwrap();
        let winner = state.end_round().unwrap();
        if i + 1 < cells.len() {
            assert_eq!(winner, None);
        } else {
            assert_eq!(winner, Some(Winner::Both));
        }
    }
    assert_eq!(state.phase(), Phase::Ended(Winner::Both));
    let summary = state.summary().unwrap();
    assert_eq!(summary.rounds, 14);
    assert_eq!(summary.human_hits, 14);
    assert_eq!(summary.opponent_hits, 14);
    assert!(state.end_round().is_err());
}

#[test]
fn test_human_only_win() {
    let mut state = GameState::new();
    state.install_human_fleet(stacked_fleet()).unwrap();
    state.install_opponent_fleet(stacked_fleet()).unwrap();
    for coord in fleet_cells() {
        state.human_attack(coord).unwrap();
        state.opponent_attack(at(9, 9)).unwrap();
        state.end_round().unwrap();
    }
    assert_eq!(state.winner(), Some(Winner::Human));
}

/// Player fed from fixed queues. Once the attack queue is empty it sweeps the board.
#[derive(Default)]
struct ScriptedPlayer {
    placements: VecDeque<RawPlacement>,
    attacks: VecDeque<RawCoordinate>,
    placement_rejections: Vec<PlacementError>,
    attack_rejections: Vec<AttackError>,
    ended: Option<Winner>,
}

impl Player for ScriptedPlayer {
    fn request_placement(
        &mut self,
        _length: usize,
        _layout: &ShipLayout,
    ) -> anyhow::Result<RawPlacement> {
        self.placements
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("out of placements"))
    }

    fn placement_rejected(&mut self, _length: usize, reason: &PlacementError) -> anyhow::Result<()> {
        self.placement_rejections.push(*reason);
        Ok(())
    }

    fn request_attack(&mut self, state: &GameState) -> anyhow::Result<RawCoordinate> {
        if let Some(raw) = self.attacks.pop_front() {
            return Ok(raw);
        }
        let (coord, _) = state
            .human()
            .tracking
            .cells()
            .find(|(_, mark)| *mark == Mark::Unknown)
            .ok_or_else(|| anyhow::anyhow!("board exhausted"))?;
        Ok(RawCoordinate::new(coord.row().to_string(), coord.col().to_string()))
    }

    fn attack_rejected(&mut self, reason: &AttackError) -> anyhow::Result<()> {
        self.attack_rejections.push(*reason);
        Ok(())
    }

    fn game_ended(&mut self, _state: &GameState, winner: Winner) -> anyhow::Result<()> {
        self.ended = Some(winner);
        Ok(())
    }
}

#[test]
fn test_session_retries_bad_input() {
    let mut player = ScriptedPlayer::default();
    player.placements.extend([
        RawPlacement::new("a", "0", "h"),
        RawPlacement::new("6", "0", "h"),
        RawPlacement::new("0", "0", "x"),
        RawPlacement::new("0", "0", "h"),
        RawPlacement::new("0", "0", "v"),
        RawPlacement::new("1", "0", "H"),
        RawPlacement::new("2", "0", "horizontal"),
        RawPlacement::new("3", "0", "h"),
    ]);
    player.attacks.extend([
        RawCoordinate::new("x", "1"),
        RawCoordinate::new("10", "1"),
        RawCoordinate::new("0", "0"),
        RawCoordinate::new("0", "0"),
    ]);

    let mut session = Session::new(player, SmallRng::seed_from_u64(7));
    let winner = session.run().unwrap();
    let state = session.state().clone();
    let player = session.into_human();

    assert_eq!(
        player.placement_rejections,
        vec![
            PlacementError::Malformed(broadside::InputError::NotANumber),
            PlacementError::Malformed(broadside::InputError::OutOfRange { value: 6, max: 5 }),
            PlacementError::Malformed(broadside::InputError::BadOrientation),
            PlacementError::Overlap,
        ]
    );
    assert_eq!(state.human().ships, stacked_fleet());
    assert_eq!(
        player.attack_rejections[..3],
        [
            AttackError::Malformed(broadside::InputError::NotANumber),
            AttackError::Malformed(broadside::InputError::OutOfRange { value: 10, max: 9 }),
            AttackError::AlreadyAttacked(at(0, 0)),
        ]
    );
    assert_eq!(player.ended, Some(winner));
    assert_eq!(state.phase(), Phase::Ended(winner));
    match winner {
        Winner::Human => assert_eq!(state.human().hits(), TOTAL_SHIP_CELLS),
        Winner::Opponent => assert_eq!(state.opponent().hits(), TOTAL_SHIP_CELLS),
        Winner::Both => {
            assert_eq!(state.human().hits(), TOTAL_SHIP_CELLS);
            assert_eq!(state.opponent().hits(), TOTAL_SHIP_CELLS);
        }
    }
}
