//! Tests for win evaluation over whole matches.

use gridmark::{Grid, LineKind, Lines, Match, Outcome, Player};

fn play(size: usize, moves: &[usize]) -> Match {
    let mut game = Match::new(size).unwrap();
    for &index in moves {
        assert!(game.apply_move(index).unwrap().accepted, "move {index} rejected");
    }
    game
}

#[test]
fn test_line_count_is_two_n_plus_two() {
    for size in 1..=12 {
        let lines = Lines::new(size).unwrap();
        assert_eq!(lines.len(), 2 * size + 2);
        assert!(lines.iter().all(|line| line.cells().len() == size));
    }
}

#[test]
fn test_every_line_is_a_row_column_or_diagonal() {
    let size = 5;
    let lines = Lines::new(size).unwrap();
    for line in &lines {
        let cells = line.cells();
        match line.kind() {
            LineKind::Row(r) => assert!(cells.iter().all(|i| i / size == r)),
            LineKind::Column(c) => assert!(cells.iter().all(|i| i % size == c)),
            LineKind::MainDiagonal => assert!(cells.iter().all(|i| i / size == i % size)),
            LineKind::AntiDiagonal => {
                assert!(cells.iter().all(|i| i / size + i % size == size - 1))
            }
        }
    }
}

#[test]
fn test_left_column_wins_for_x() {
    let game = play(3, &[0, 1, 3, 4, 6]);
    let grid = game.grid();
    assert_eq!(grid.get(0).and_then(|s| s.player()), Some(Player::X));
    assert_eq!(grid.get(1).and_then(|s| s.player()), Some(Player::O));
    assert_eq!(grid.get(3).and_then(|s| s.player()), Some(Player::X));
    assert_eq!(grid.get(4).and_then(|s| s.player()), Some(Player::O));
    assert_eq!(grid.get(6).and_then(|s| s.player()), Some(Player::X));

    assert_eq!(game.evaluate(), Outcome::Player1Wins);
    let line = game.winning_line().unwrap();
    assert_eq!(line.kind(), LineKind::Column(0));
    assert_eq!(line.cells(), [0, 3, 6]);
}

#[test]
fn test_mixed_rows_stay_in_progress() {
    let game = play(3, &[0, 1, 2, 3, 4, 5]);
    assert_eq!(game.evaluate(), Outcome::InProgress);
    assert!(game.winning_line().is_none());
}

#[test]
fn test_main_diagonal_on_four_by_four() {
    // X takes the diagonal, O fills in off-diagonal cells between.
    let game = play(4, &[0, 1, 5, 2, 10, 3, 15]);
    assert_eq!(game.evaluate(), Outcome::Player1Wins);
    assert_eq!(game.winning_line().unwrap().kind(), LineKind::MainDiagonal);
}

#[test]
fn test_anti_diagonal_win_for_o() {
    // X: 0, 1, 8; O: 2, 4, 6.
    let game = play(3, &[0, 2, 1, 4, 8, 6]);
    assert_eq!(game.evaluate(), Outcome::Player2Wins);
    assert_eq!(game.winning_line().unwrap().kind(), LineKind::AntiDiagonal);
}

#[test]
fn test_evaluate_is_pure() {
    let game = play(3, &[4, 0, 8]);
    let first = game.evaluate();
    let second = game.evaluate();
    assert_eq!(first, second);

    let won = play(3, &[0, 1, 3, 4, 6]);
    assert_eq!(won.evaluate(), won.evaluate());
}

#[test]
fn test_single_cell_grid_is_won_by_first_move() {
    let mut game = Match::new(1).unwrap();
    assert_eq!(game.evaluate(), Outcome::InProgress);
    game.apply_move(0).unwrap();
    assert_eq!(game.evaluate(), Outcome::Player1Wins);
}

#[test]
fn test_match_keeps_accepting_moves_after_a_win() {
    // Locking play after a win is left to the caller.
    let mut game = play(3, &[0, 1, 3, 4, 6]);
    assert!(game.evaluate().is_over());
    assert!(game.apply_move(8).unwrap().accepted);
}

#[test]
fn test_scan_order_decides_when_both_players_hold_lines() {
    // X completes row 0, then O completes row 1 because nothing locked play.
    let game = play(3, &[0, 3, 1, 4, 2, 5]);
    assert_eq!(game.evaluate(), Outcome::Player2Wins);
    assert_eq!(game.winning_line().unwrap().kind(), LineKind::Row(1));
}

#[test]
fn test_lines_evaluate_standalone_grid() {
    let mut grid = Grid::new(3).unwrap();
    let lines = Lines::for_grid(&grid);
    for index in [2, 0, 5, 1, 8] {
        grid.apply_move(index).unwrap();
    }
    assert_eq!(lines.evaluate(&grid), Outcome::Player1Wins);
    assert_eq!(lines.winning_line(&grid).unwrap().kind(), LineKind::Column(2));
}
