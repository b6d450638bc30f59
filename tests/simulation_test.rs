//! Tests for headless simulation.

use tic_tac_toe::{Difficulty, simulate};

#[test]
fn test_hard_never_loses_to_random_play() {
    let tally = simulate(60, Difficulty::Hard, Some(2024));
    assert_eq!(tally.games, 60);
    assert_eq!(tally.losses, 0);
}

#[test]
fn test_same_seed_same_tally() {
    let a = simulate(100, Difficulty::Medium, Some(11));
    let b = simulate(100, Difficulty::Medium, Some(11));
    assert_eq!(a, b);
}

#[test]
fn test_tally_serializes() {
    let tally = simulate(10, Difficulty::Easy, Some(5));
    let json = serde_json::to_value(tally).unwrap();
    assert_eq!(json["difficulty"], "easy");
    assert_eq!(json["games"], 10);
}
