//! Tests for the session task and its handle.
//!
//! The tokio clock starts paused, so sleeps advance virtual time
//! instantly and timer behaviour is deterministic.

use std::time::Duration;
use tic_tac_toe::{
    Board, Difficulty, Mark, Outcome, Position, SessionConfig, SessionError, SessionHandle,
    spawn_session,
};
use tokio::time::sleep;

fn play(handle: &SessionHandle, moves: &[usize]) {
    for &index in moves {
        handle.apply_move(index).unwrap();
    }
}

#[tokio::test(start_paused = true)]
async fn test_moves_reach_the_session() {
    let (handle, _task) = spawn_session(&SessionConfig::default());
    play(&handle, &[4, 0]);

    let snap = handle.snapshot().await.unwrap();
    assert_eq!(snap.board.get(Position::Center).mark(), Some(Mark::X));
    assert_eq!(snap.board.get(Position::TopLeft).mark(), Some(Mark::O));
    assert_eq!(snap.turn, Mark::X);
}

#[tokio::test(start_paused = true)]
async fn test_auto_reset_after_one_second() {
    let (handle, _task) = spawn_session(&SessionConfig::default());
    play(&handle, &[0, 3, 1, 4, 2]);

    let snap = handle.snapshot().await.unwrap();
    assert_eq!(snap.outcome, Outcome::Winner(Mark::X));

    sleep(Duration::from_millis(900)).await;
    let snap = handle.snapshot().await.unwrap();
    assert_eq!(snap.outcome, Outcome::Winner(Mark::X));

    sleep(Duration::from_millis(200)).await;
    let snap = handle.snapshot().await.unwrap();
    assert_eq!(snap.board, Board::new());
    assert_eq!(snap.scores.x, 1);
}

#[tokio::test(start_paused = true)]
async fn test_reset_before_timer_cancels_auto_reset() {
    let (handle, _task) = spawn_session(&SessionConfig::default());
    play(&handle, &[0, 3, 1, 4, 2]);
    handle.reset_game().unwrap();
    handle.apply_move(4).unwrap();

    sleep(Duration::from_secs(2)).await;
    let snap = handle.snapshot().await.unwrap();
    assert_eq!(snap.board.get(Position::Center).mark(), Some(Mark::X));
    assert_eq!(snap.scores.x, 0);
}

#[tokio::test(start_paused = true)]
async fn test_computer_replies_after_half_second() {
    let config = SessionConfig::default()
        .with_opponent_enabled(true)
        .with_difficulty(Difficulty::Hard);
    let (handle, _task) = spawn_session(&config);
    handle.apply_move(0).unwrap();

    let snap = handle.snapshot().await.unwrap();
    assert!(snap.computer_thinking);
    assert_eq!(snap.board.count(Mark::O), 0);

    sleep(Duration::from_millis(600)).await;
    let snap = handle.snapshot().await.unwrap();
    assert!(!snap.computer_thinking);
    assert_eq!(snap.board.get(Position::Center).mark(), Some(Mark::O));
    assert_eq!(snap.turn, Mark::X);
}

#[tokio::test(start_paused = true)]
async fn test_invalid_index_rejected_by_handle() {
    let (handle, _task) = spawn_session(&SessionConfig::default());
    assert_eq!(handle.apply_move(9), Err(SessionError::InvalidIndex(9)));
}

#[tokio::test(start_paused = true)]
async fn test_closed_after_shutdown() {
    let (handle, task) = spawn_session(&SessionConfig::default());
    handle.shutdown().unwrap();
    task.await.unwrap();

    assert_eq!(handle.apply_move(0), Err(SessionError::Closed));
    assert_eq!(handle.snapshot().await, Err(SessionError::Closed));
}

#[tokio::test(start_paused = true)]
async fn test_subscribers_are_notified() {
    let (handle, _task) = spawn_session(&SessionConfig::default());
    let mut updates = handle.subscribe();
    let _ = updates.borrow_and_update();

    handle.apply_move(8).unwrap();
    updates.changed().await.unwrap();
    assert_eq!(updates.borrow().last_move, Some(Position::BottomRight));
    assert_eq!(handle.current().last_move, Some(Position::BottomRight));
}
