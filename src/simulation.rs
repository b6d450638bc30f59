//! Headless computer-versus-random play.
//!
//! Used by the `simulate` command to show how a difficulty tier fares
//! over many games, and by tests to exercise the strategies end to end.

use crate::games::tictactoe::{Game, Mark, Outcome};
use crate::opponent::{Difficulty, RandomStrategy, choose_move};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Results of a batch of simulated games, from the computer's side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Tier the computer played at.
    pub difficulty: Difficulty,
    /// Games played.
    pub games: u32,
    /// Games the computer won.
    pub wins: u32,
    /// Drawn games.
    pub draws: u32,
    /// Games the computer lost.
    pub losses: u32,
}

impl Tally {
    fn record(&mut self, outcome: Outcome, computer: Mark) {
        self.games += 1;
        match outcome.winner() {
            Some(mark) if mark == computer => self.wins += 1,
            Some(_) => self.losses += 1,
            None => self.draws += 1,
        }
    }
}

/// Plays one game between `difficulty` and a uniformly random opponent.
///
/// X always moves first; `computer` decides which side the computer takes.
pub fn play_game(difficulty: Difficulty, computer: Mark, rng: &mut dyn RngCore) -> Outcome {
    let mut game = Game::new();
    loop {
        let outcome = game.outcome();
        if outcome.is_decided() {
            return outcome;
        }
        let board = *game.board();
        let choice = if game.to_move() == computer {
            choose_move(difficulty, &board, computer, rng)
        } else {
            RandomStrategy::pick(&board, rng)
        };
        let Some(pos) = choice else {
            return game.outcome();
        };
        if let Err(e) = game.place(pos) {
            debug!(error = %e, "Simulated move rejected");
            return game.outcome();
        }
    }
}

/// Plays `games` games, alternating the computer between O and X.
#[instrument]
pub fn simulate(games: u32, difficulty: Difficulty, seed: Option<u64>) -> Tally {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut tally = Tally {
        difficulty,
        ..Tally::default()
    };
    for round in 0..games {
        let computer = if round % 2 == 0 { Mark::O } else { Mark::X };
        let outcome = play_game(difficulty, computer, &mut rng);
        tally.record(outcome, computer);
    }
    info!(
        wins = tally.wins,
        draws = tally.draws,
        losses = tally.losses,
        "Simulation finished"
    );
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts_every_game() {
        let tally = simulate(20, Difficulty::Easy, Some(7));
        assert_eq!(tally.games, 20);
        assert_eq!(tally.wins + tally.draws + tally.losses, 20);
    }

    #[test]
    fn test_hard_never_loses() {
        let tally = simulate(40, Difficulty::Hard, Some(42));
        assert_eq!(tally.losses, 0);
    }

    #[test]
    fn test_play_game_reaches_a_decision() {
        let mut rng = StdRng::seed_from_u64(1);
        let outcome = play_game(Difficulty::Medium, Mark::O, &mut rng);
        assert!(outcome.is_decided());
    }
}
