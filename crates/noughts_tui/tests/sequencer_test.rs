//! End-to-end tests for the sequencer: the click-to-mark flow, computer
//! replies, and the auto-reset timer.

use noughts_core::{Actor, Cell, CellSet, OpponentPolicy, Outcome};
use noughts_tui::{BoardMsg, Sequencer, UiMsg};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

fn cell(index: usize) -> Cell {
    Cell::from_index(index).expect("index in range")
}

/// An opponent that plays a fixed script instead of rolling dice.
struct ScriptedPolicy(Vec<Cell>);

impl ScriptedPolicy {
    fn new(indices: &[usize]) -> Self {
        Self(indices.iter().map(|&i| cell(i)).collect())
    }
}

impl OpponentPolicy for ScriptedPolicy {
    fn choose(&mut self, available: CellSet) -> Option<Cell> {
        if self.0.is_empty() {
            return None;
        }
        let next = self.0.remove(0);
        assert!(available.contains(next), "script plays an available cell");
        Some(next)
    }
}

fn spawn(
    policy: ScriptedPolicy,
    reset_delay_ms: u64,
) -> (
    mpsc::UnboundedSender<UiMsg>,
    mpsc::UnboundedReceiver<BoardMsg>,
    JoinHandle<()>,
) {
    let (ui_tx, ui_rx) = mpsc::unbounded_channel();
    let (board_tx, board_rx) = mpsc::unbounded_channel();
    let sequencer = Sequencer::new(
        policy,
        Duration::from_millis(reset_delay_ms),
        ui_rx,
        board_tx,
    );
    let handle = tokio::spawn(async move {
        let _ = sequencer.run().await;
    });
    (ui_tx, board_rx, handle)
}

/// Drives the user through a top-row win against a scripted opponent,
/// simulating the renderer's settle notifications, and leaves the game
/// just after the `GameOver` message.
async fn drive_top_row_win(
    ui_tx: &mpsc::UnboundedSender<UiMsg>,
    board_rx: &mut mpsc::UnboundedReceiver<BoardMsg>,
) -> (Outcome, CellSet) {
    ui_tx.send(UiMsg::IntroFinished).unwrap();
    assert_eq!(board_rx.recv().await, Some(BoardMsg::GameStarted));

    for user_cell in [0usize, 1, 2] {
        ui_tx.send(UiMsg::CellClicked(cell(user_cell))).unwrap();
        assert_eq!(
            board_rx.recv().await,
            Some(BoardMsg::MarkPlaced {
                cell: cell(user_cell),
                actor: Actor::User
            })
        );
        ui_tx.send(UiMsg::PlacementSettled(Actor::User)).unwrap();

        if user_cell < 2 {
            assert_eq!(
                board_rx.recv().await,
                Some(BoardMsg::TurnChanged(Actor::Computer))
            );
            let Some(BoardMsg::MarkPlaced {
                actor: Actor::Computer,
                ..
            }) = board_rx.recv().await
            else {
                panic!("expected the computer's mark");
            };
            ui_tx.send(UiMsg::PlacementSettled(Actor::Computer)).unwrap();
            assert_eq!(
                board_rx.recv().await,
                Some(BoardMsg::TurnChanged(Actor::User))
            );
        }
    }

    match board_rx.recv().await {
        Some(BoardMsg::GameOver { outcome, highlight }) => (outcome, highlight),
        other => panic!("expected game over, got {other:?}"),
    }
}

#[tokio::test]
async fn test_user_win_flows_to_game_over_and_auto_reset() {
    let (ui_tx, mut board_rx, _handle) = spawn(ScriptedPolicy::new(&[4, 8]), 20);

    let (outcome, highlight) = drive_top_row_win(&ui_tx, &mut board_rx).await;
    assert_eq!(outcome, Outcome::Won(Actor::User));
    assert_eq!(highlight, CellSet::from([cell(0), cell(1), cell(2)]));

    // The outcome lingers, then the board clears on its own.
    assert_eq!(board_rx.recv().await, Some(BoardMsg::BoardCleared));
}

#[tokio::test]
async fn test_explicit_restart_disarms_the_auto_reset() {
    let (ui_tx, mut board_rx, _handle) = spawn(ScriptedPolicy::new(&[4, 8]), 50);

    drive_top_row_win(&ui_tx, &mut board_rx).await;

    ui_tx.send(UiMsg::RestartRequested).unwrap();
    assert_eq!(board_rx.recv().await, Some(BoardMsg::BoardCleared));

    // The armed timer must not produce a second clear.
    let extra = tokio::time::timeout(Duration::from_millis(150), board_rx.recv()).await;
    assert!(extra.is_err(), "stale auto-reset fired: {extra:?}");
}

#[tokio::test]
async fn test_out_of_contract_events_are_silent() {
    let (ui_tx, mut board_rx, _handle) = spawn(ScriptedPolicy::new(&[]), 20);

    // Before the intro: clicks, settles, and restarts all go nowhere.
    ui_tx.send(UiMsg::CellClicked(cell(0))).unwrap();
    ui_tx.send(UiMsg::PlacementSettled(Actor::User)).unwrap();
    ui_tx.send(UiMsg::RestartRequested).unwrap();

    let quiet = tokio::time::timeout(Duration::from_millis(100), board_rx.recv()).await;
    assert!(quiet.is_err(), "unexpected message: {quiet:?}");

    // The game still starts normally afterwards.
    ui_tx.send(UiMsg::IntroFinished).unwrap();
    assert_eq!(board_rx.recv().await, Some(BoardMsg::GameStarted));
}

#[tokio::test]
async fn test_new_game_plays_after_an_auto_reset() {
    let (ui_tx, mut board_rx, _handle) = spawn(ScriptedPolicy::new(&[4, 8, 4]), 10);

    drive_top_row_win(&ui_tx, &mut board_rx).await;
    assert_eq!(board_rx.recv().await, Some(BoardMsg::BoardCleared));

    // The cleared board accepts moves again, including cells from the
    // previous game.
    ui_tx.send(UiMsg::CellClicked(cell(0))).unwrap();
    assert_eq!(
        board_rx.recv().await,
        Some(BoardMsg::MarkPlaced {
            cell: cell(0),
            actor: Actor::User
        })
    );
    ui_tx.send(UiMsg::PlacementSettled(Actor::User)).unwrap();
    assert_eq!(
        board_rx.recv().await,
        Some(BoardMsg::TurnChanged(Actor::Computer))
    );
    assert_eq!(
        board_rx.recv().await,
        Some(BoardMsg::MarkPlaced {
            cell: cell(4),
            actor: Actor::Computer
        })
    );
}
