//! End-to-end games driven through the public controller API.

use std::cell::RefCell;
use std::rc::Rc;

use gomoku::{Board, GameController, GameSettings, GameState, Pos, Stone};

fn started(size: i32, win_count: i32) -> GameController {
    let mut game = GameController::new(GameSettings::new(size, win_count)).unwrap();
    game.start_game();
    game
}

fn play(game: &mut GameController, moves: &[(i32, i32)]) {
    for &(row, col) in moves {
        assert!(game.make_move(row, col), "move ({row}, {col}) rejected");
    }
}

#[test]
fn test_five_in_a_row_on_standard_board() {
    let mut game = started(15, 5);
    play(
        &mut game,
        &[(7, 0), (8, 0), (7, 1), (8, 1), (7, 2), (8, 2), (7, 3), (8, 3), (7, 4)],
    );

    assert_eq!(game.game_state(), GameState::BlackWin);
    let result = game.game_result().unwrap();
    assert_eq!(result.winner, Stone::Black);
    assert_eq!(result.total_moves, 9);
    assert!(!result.is_draw);
    assert_eq!(
        result.winning_line,
        (0..5).map(|col| Pos::new(7, col)).collect::<Vec<_>>()
    );
}

#[test]
fn test_three_in_a_row_on_small_board() {
    let mut game = started(5, 3);
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    assert_eq!(game.game_state(), GameState::BlackWin);
    assert_eq!(game.game_result().unwrap().winning_line.len(), 3);
}

#[test]
fn test_white_can_win() {
    let mut game = started(5, 3);
    play(&mut game, &[(4, 4), (0, 0), (4, 2), (1, 1), (3, 0), (2, 2)]);

    assert_eq!(game.game_state(), GameState::WhiteWin);
    let result = game.game_result().unwrap();
    assert_eq!(result.winner, Stone::White);
    assert_eq!(
        result.winning_line,
        vec![Pos::new(0, 0), Pos::new(1, 1), Pos::new(2, 2)]
    );
}

#[test]
fn test_full_board_without_line_is_draw() {
    let layout = ["BBWWB", "WWBBW", "BBWWB", "WWBBW", "BBWWB"];
    let mut black = Vec::new();
    let mut white = Vec::new();
    for (row, line) in layout.iter().enumerate() {
        for (col, cell) in line.chars().enumerate() {
            let pos = (row as i32, col as i32);
            if cell == 'B' {
                black.push(pos);
            } else {
                white.push(pos);
            }
        }
    }
    assert_eq!((black.len(), white.len()), (13, 12));

    let mut game = started(5, 3);
    for i in 0..black.len() {
        play(&mut game, &[black[i]]);
        if let Some(&pos) = white.get(i) {
            play(&mut game, &[pos]);
        }
    }

    assert_eq!(game.game_state(), GameState::Draw);
    let result = game.game_result().unwrap();
    assert!(result.is_draw);
    assert_eq!(result.winner, Stone::Empty);
    assert!(result.winning_line.is_empty());
    assert_eq!(result.total_moves, 25);
    assert!(game.available_moves().is_empty());
}

#[test]
fn test_undo_gives_the_turn_back() {
    let mut game = started(15, 5);
    play(&mut game, &[(7, 7), (7, 8)]);
    assert_eq!(game.current_player(), Stone::Black);

    assert!(game.undo_move());
    assert_eq!(game.get_cell(7, 8), Ok(Stone::Empty));
    assert_eq!(game.current_player(), Stone::White);
    assert_eq!(game.move_history().len(), 1);
    assert_eq!(game.game_state(), GameState::Playing);
}

#[test]
fn test_no_moves_after_win() {
    let mut game = started(5, 3);
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let grid = game.board_state();

    assert!(!game.make_move(4, 4));
    assert!(!game.undo_move());
    assert_eq!(game.board_state(), grid);
    assert_eq!(game.game_state(), GameState::BlackWin);
}

#[test]
fn test_moves_rejected_before_start() {
    let mut game = GameController::new(GameSettings::default()).unwrap();
    assert_eq!(game.game_state(), GameState::NotStarted);
    assert!(!game.make_move(7, 7));
    assert!(game.move_history().is_empty());
}

#[test]
fn test_restart_after_draw_or_win() {
    let mut game = started(5, 3);
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    game.restart_game();

    assert_eq!(game.game_state(), GameState::Playing);
    assert_eq!(game.current_player(), Stone::Black);
    assert_eq!(game.available_moves().len(), 25);
    assert!(game.last_move().is_none());
    assert!(game.game_result().is_none());
}

#[test]
fn test_out_of_range_is_soft_for_moves_hard_for_reads() {
    let mut game = started(5, 3);
    assert!(!game.make_move(5, 0));
    assert!(!game.make_move(0, -1));
    assert!(!game.is_position_valid(-1, -1));
    assert!(game.get_cell(9, 9).is_err());
    assert_eq!(game.current_player(), Stone::Black);
}

#[test]
fn test_events_follow_a_full_game() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut game = GameController::new(GameSettings::new(5, 3)).unwrap();

    let l = Rc::clone(&log);
    game.on_state_change(move |state| l.borrow_mut().push(format!("state {state}")));
    let l = Rc::clone(&log);
    game.on_move_made(move |player, pos| l.borrow_mut().push(format!("move {player} {pos}")));
    let l = Rc::clone(&log);
    game.on_game_over(move |result| l.borrow_mut().push(format!("over {result}")));

    game.start_game();
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

    let log = log.borrow();
    assert_eq!(log.first().map(String::as_str), Some("state PLAYING"));
    assert_eq!(
        &log[log.len() - 3..],
        &[
            "move BLACK (0, 2)".to_string(),
            "state BLACK_WIN".to_string(),
            "over BLACK wins after 5 moves".to_string(),
        ]
    );
    assert_eq!(log.iter().filter(|line| line.starts_with("move")).count(), 5);
}

#[test]
fn test_board_undo_after_win_restores_play() {
    let mut board = Board::new(GameSettings::new(5, 3)).unwrap();
    for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        assert!(board.make_move(row, col));
    }
    assert!(board.is_over());

    assert!(board.undo_move());
    assert!(!board.is_over());
    assert!(board.make_move(4, 4));
    assert_eq!(board.current_player(), Stone::White);
}

#[test]
fn test_history_matches_board() {
    let mut game = started(9, 4);
    play(&mut game, &[(4, 4), (4, 5), (3, 3), (2, 2), (5, 5)]);
    game.undo_move();
    play(&mut game, &[(6, 6)]);

    let history = game.move_history();
    assert_eq!(history.len(), 5);
    for (i, mv) in history.iter().enumerate() {
        assert_eq!(mv.number, i + 1);
        let expected = if i % 2 == 0 { Stone::Black } else { Stone::White };
        assert_eq!(mv.player, expected);
        assert_eq!(game.get_cell(mv.pos.row as i32, mv.pos.col as i32), Ok(mv.player));
    }
    let stones = game
        .board_state()
        .iter()
        .flatten()
        .filter(|s| s.is_player())
        .count();
    assert_eq!(stones, history.len());
}
