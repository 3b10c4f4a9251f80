use broadside::{AiPlayer, AutoPlayer, Phase, Session, Winner, TOTAL_SHIP_CELLS};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_auto_vs_ai_game() {
    let human = AutoPlayer::new(SmallRng::seed_from_u64(123));
    let mut session = Session::new(human, SmallRng::seed_from_u64(124));
    let winner = session.run().unwrap();

    let state = session.state().clone();
    assert_eq!(state.phase(), Phase::Ended(winner));
    assert!(state.rounds() >= TOTAL_SHIP_CELLS as u32);
    // the human never repeats a target, so it wins within a full sweep
    assert!(state.rounds() <= 100);
    assert_eq!(state.human().ships.count(&true), TOTAL_SHIP_CELLS);
    assert_eq!(state.opponent().ships.count(&true), TOTAL_SHIP_CELLS);

    // random anchors on an empty board always fit, so only overlaps are refused
    let human = session.into_human();
    assert!(human.rejected_placements() < 1000);
}

#[test]
fn test_reproducible_rng() {
    let mut ai1 = AiPlayer::new();
    let mut ai2 = AiPlayer::new();
    let mut rng1 = SmallRng::seed_from_u64(42);
    let mut rng2 = SmallRng::seed_from_u64(42);

    assert_eq!(ai1.place_fleet(&mut rng1), ai2.place_fleet(&mut rng2));
    for _ in 0..20 {
        assert_eq!(ai1.select_target(&mut rng1), ai2.select_target(&mut rng2));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn every_game_ends_consistently(seed in any::<u64>()) {
        let human = AutoPlayer::new(SmallRng::seed_from_u64(seed));
        let mut session = Session::new(human, SmallRng::seed_from_u64(seed ^ 0x5eed));
        let winner = session.run().unwrap();
        let summary = session.state().summary().unwrap();

        prop_assert_eq!(summary.winner, winner);
        let human_won = summary.human_hits == TOTAL_SHIP_CELLS;
        let opponent_won = summary.opponent_hits == TOTAL_SHIP_CELLS;
        let expected = match (human_won, opponent_won) {
            (true, true) => Winner::Both,
            (true, false) => Winner::Human,
            (false, true) => Winner::Opponent,
            (false, false) => return Err(TestCaseError::fail("game ended without a winner")),
        };
        prop_assert_eq!(winner, expected);
    }
}
