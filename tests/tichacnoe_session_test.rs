//! Session-level scenarios for Tic-Hac-Noe.

use tic_hac_noe::{
    Cell, CellIndex, EndState, LineKind, MoveError, Player, ScriptedRandom, Session, SessionEvent,
    TurnState,
};

type TestSession = Session<ScriptedRandom, Vec<SessionEvent>>;

fn session_opening_with(player: Player) -> TestSession {
    Session::new(ScriptedRandom::always(player), Vec::new())
}

/// Orders placements two per turn, starting with `first`.
fn interleave(first: Player, ones: &[usize], twos: &[usize]) -> Vec<usize> {
    let (mut ones, mut twos) = (ones.iter(), twos.iter());
    let mut state = TurnState::opening(first);
    let mut order = Vec::new();
    loop {
        let next = match state.player() {
            Some(Player::PlayerOne) => ones.next(),
            _ => twos.next(),
        };
        match next {
            Some(&cell) => order.push(cell),
            None => return order,
        }
        state = state.next();
    }
}

fn place_all(session: &mut TestSession, cells: &[usize]) {
    for &i in cells {
        session
            .try_place(CellIndex::from_raw(i))
            .unwrap_or_else(|e| panic!("placement at {i} rejected: {e}"));
    }
}

#[test]
fn test_scenario_a_player_one_takes_top_row() {
    let mut session = session_opening_with(Player::PlayerOne);
    let order = interleave(Player::PlayerOne, &[0, 1, 2, 3, 4, 5], &[30, 31, 32, 33]);
    let (last, earlier) = order.split_last().unwrap();

    place_all(&mut session, earlier);
    assert_eq!(session.evaluate_end_of_turn(), EndState::Continue);
    assert_eq!(session.score_player_one(), 0);

    let accepted = session.try_place(CellIndex::from_raw(*last)).unwrap();
    assert_eq!(accepted.end, EndState::Player1Wins);
    assert_eq!(session.evaluate_end_of_turn(), EndState::Player1Wins);
    assert_eq!(session.score_player_one(), 1);
    assert_eq!(session.score_player_two(), 0);
    assert_eq!(session.state(), TurnState::GameOver);
    assert_eq!(session.winning_line().map(|l| l.kind), Some(LineKind::Row(0)));
    assert_eq!(session.message(), Some("Player 1 wins!"));
}

#[test]
fn test_scenario_b_full_board_without_line_is_draw() {
    let rows = ["XXOOXX", "OOXXOO", "XXOOXX", "OOXXOO", "XXOOXX", "OOXXOO"];
    let mut ones = Vec::new();
    let mut twos = Vec::new();
    for (r, row) in rows.iter().enumerate() {
        for (c, ch) in row.chars().enumerate() {
            match ch {
                'X' => ones.push(r * 6 + c),
                _ => twos.push(r * 6 + c),
            }
        }
    }

    let mut session = session_opening_with(Player::PlayerOne);
    let order = interleave(Player::PlayerOne, &ones, &twos);
    assert_eq!(order.len(), 36);
    place_all(&mut session, &order);

    assert_eq!(session.evaluate_end_of_turn(), EndState::Draw);
    assert_eq!(session.state(), TurnState::GameOver);
    assert_eq!(session.spaces_remaining(), 0);
    assert_eq!(session.score_player_one(), 0);
    assert_eq!(session.score_player_two(), 0);
    assert!(session.winning_line().is_none());
    assert_eq!(session.message(), Some("We have a draw..."));

    let highlight = session.presenter().iter().find_map(|e| match e {
        SessionEvent::Highlight { cells } => Some(cells.len()),
        _ => None,
    });
    assert_eq!(highlight, Some(36));
}

#[test]
fn test_scenario_c_occupied_cell_rejected() {
    let mut session = session_opening_with(Player::PlayerTwo);
    place_all(&mut session, &[5]);
    let spaces = session.spaces_remaining();
    let turn = session.game().turn();

    let err = session.try_place(CellIndex::from_raw(5)).unwrap_err();
    assert_eq!(err, MoveError::CellOccupied(CellIndex::from_raw(5)));
    assert_eq!(session.spaces_remaining(), spaces);
    assert_eq!(session.game().turn(), turn);
    assert_eq!(
        session.board().get(CellIndex::from_raw(5)),
        Cell::Occupied(Player::PlayerTwo)
    );
}

#[test]
fn test_scenario_d_restart_mid_game() {
    let mut session = Session::new(ScriptedRandom::new([0.2, 0.7]), Vec::new());
    // Bank a win, then start a second game and abandon it.
    place_all(
        &mut session,
        &interleave(Player::PlayerOne, &[0, 1, 2, 3, 4, 5], &[30, 31, 32, 33]),
    );
    assert_eq!(session.score_player_one(), 1);
    session.restart();
    assert_eq!(session.score_player_one(), 1);

    place_all(&mut session, &[10, 11]);
    assert!(session.state().is_active());
    let restarted = session.restart();

    assert!(restarted.scores_reset);
    assert!(session.board().cells().iter().all(|c| *c == Cell::Empty));
    assert_eq!(session.spaces_remaining(), 36);
    assert_eq!(session.score_player_one(), 0);
    assert_eq!(session.score_player_two(), 0);
    assert!(matches!(session.state(), TurnState::P1Move1 | TurnState::P2Move1));
}

#[test]
fn test_restart_with_thread_rng_opens_turn_one() {
    let mut session = Session::with_thread_rng(());
    for _ in 0..20 {
        assert!(matches!(session.state(), TurnState::P1Move1 | TurnState::P2Move1));
        session.restart();
    }
}

#[test]
fn test_win_on_last_cell_is_a_draw() {
    // Player 2 completes row 5 with the 36th token. The full-board check
    // runs first, so the game is a draw and nobody scores.
    let ones = [0, 1, 3, 4, 7, 8, 10, 11, 12, 14, 15, 17, 19, 21, 23, 24, 26, 28];
    let twos = [2, 5, 6, 9, 13, 16, 18, 20, 22, 25, 27, 29, 30, 31, 32, 33, 34, 35];
    let order = interleave(Player::PlayerOne, &ones, &twos);
    assert_eq!(order.last(), Some(&35));

    let mut session = session_opening_with(Player::PlayerOne);
    let (last, earlier) = order.split_last().unwrap();
    place_all(&mut session, earlier);
    assert_eq!(session.state(), TurnState::P2Move2);

    let accepted = session.try_place(CellIndex::from_raw(*last)).unwrap();
    assert_eq!(accepted.end, EndState::Draw);
    assert!(accepted.line.is_none());
    assert!(tic_hac_noe::rules::winning_line(session.board(), Player::PlayerTwo).is_some());
    assert_eq!(session.score_player_two(), 0);
    assert_eq!(session.state(), TurnState::GameOver);
}

#[test]
fn test_idempotent_rejection() {
    let mut session = session_opening_with(Player::PlayerOne);
    place_all(&mut session, &[12]);
    let cell = CellIndex::from_raw(12);

    assert!(session.try_place(cell).is_err());
    let board = session.board().clone();
    let game = session.game().clone();
    assert!(session.try_place(cell).is_err());
    assert_eq!(session.board(), &board);
    assert_eq!(session.game(), &game);
}

#[test]
fn test_game_over_blocks_until_restart() {
    let mut session = session_opening_with(Player::PlayerOne);
    place_all(
        &mut session,
        &interleave(Player::PlayerOne, &[0, 1, 2, 3, 4, 5], &[30, 31, 32, 33]),
    );
    assert_eq!(session.acknowledge(), TurnState::GameOver);
    assert_eq!(session.try_place(CellIndex::from_raw(20)), Err(MoveError::GameOver));
    assert_eq!(session.state(), TurnState::GameOver);

    let restarted = session.restart();
    assert!(!restarted.scores_reset);
    assert_eq!(restarted.state, TurnState::P1Move1);
    assert!(session.try_place(CellIndex::from_raw(20)).is_ok());
}

#[test]
fn test_click_after_win_keeps_result_popup() {
    let mut session = session_opening_with(Player::PlayerOne);
    place_all(
        &mut session,
        &interleave(Player::PlayerOne, &[0, 1, 2, 3, 4, 5], &[30, 31, 32, 33]),
    );
    let before = session.game().clone();

    assert_eq!(session.try_place(CellIndex::from_raw(20)), Err(MoveError::GameOver));
    assert_eq!(session.game(), &before);
    assert_eq!(session.message(), Some("Player 1 wins!"));
    assert_eq!(session.state(), TurnState::GameOver);
}

#[test]
fn test_click_during_popup_keeps_rejection_message() {
    let mut session = session_opening_with(Player::PlayerTwo);
    place_all(&mut session, &[9]);
    assert!(session.try_place(CellIndex::from_raw(9)).is_err());
    let before = session.game().clone();

    assert_eq!(
        session.try_place(CellIndex::from_raw(10)),
        Err(MoveError::AwaitingAcknowledgement)
    );
    assert_eq!(session.game(), &before);
    assert_eq!(session.acknowledge(), TurnState::P2Move2);
}

#[test]
#[should_panic(expected = "outside the board")]
fn test_out_of_range_index_fails_fast() {
    let mut session = session_opening_with(Player::PlayerOne);
    let _ = session.try_place(CellIndex::from_raw(36));
}
