//! Board model tests - pure grid operations

use blockfall::core::Board;
use blockfall::types::{BOARD_HEIGHT, BOARD_WIDTH};

const RED: &str = "#f00000";
const CYAN: &str = "#00f0f0";

/// Board with row `y` fully occupied except the given columns.
fn board_with_row_filled_except(y: i8, gaps: &[i8]) -> Board {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 {
        if !gaps.contains(&x) {
            board.set(x, y, Some(RED));
        }
    }
    board
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None), "cell ({}, {})", x, y);
            assert!(board.admits(x, y));
        }
    }
}

#[test]
fn test_admits_rejects_out_of_bounds_columns_and_bottom() {
    let board = Board::new();

    assert!(!board.admits(-1, 0));
    assert!(!board.admits(BOARD_WIDTH as i8, 0));
    assert!(!board.admits(0, BOARD_HEIGHT as i8));
    assert!(!board.admits(5, 127));
}

#[test]
fn test_admits_allows_rows_above_the_board() {
    let board = Board::new();

    // Off-board-top is always admitted, whatever sits below.
    assert!(board.admits(0, -1));
    assert!(board.admits(9, -4));

    let mut stacked = Board::new();
    stacked.set(3, 0, Some(RED));
    assert!(stacked.admits(3, -1));
    assert!(!stacked.admits(3, 0));
}

#[test]
fn test_admits_rejects_occupied_cells() {
    let mut board = Board::new();
    board.set(5, 10, Some(CYAN));

    assert!(!board.admits(5, 10));
    assert!(board.admits(5, 9));
    assert!(board.admits(4, 10));
}

#[test]
fn test_place_writes_color_and_leaves_original_untouched() {
    let board = Board::new();
    let placed = board.place([(3, 5), (4, 5), (3, 6), (4, 6)], CYAN);

    assert_eq!(placed.get(3, 5), Some(Some(CYAN)));
    assert_eq!(placed.get(4, 6), Some(Some(CYAN)));

    // Purity: the input board did not change.
    assert_eq!(board.get(3, 5), Some(None));
}

#[test]
fn test_place_drops_cells_above_the_top_edge() {
    let board = Board::new();
    let placed = board.place([(4, -2), (4, -1), (4, 0), (4, 1)], CYAN);

    assert_eq!(placed.get(4, 0), Some(Some(CYAN)));
    assert_eq!(placed.get(4, 1), Some(Some(CYAN)));

    // Negative rows were silently discarded; nothing else changed.
    let expected = Board::new().place([(4, 0), (4, 1)], CYAN);
    assert_eq!(placed, expected);
}

#[test]
fn test_is_row_full() {
    let board = board_with_row_filled_except(5, &[]);
    assert!(board.is_row_full(5));

    let board = board_with_row_filled_except(6, &[9]);
    assert!(!board.is_row_full(6));

    // Out-of-range rows are never full.
    assert!(!board.is_row_full(20));
}

#[test]
fn test_clear_lines_removes_full_rows_and_pads_top() {
    let mut board = board_with_row_filled_except(19, &[]);
    board.set(2, 18, Some(CYAN));

    let (cleared_board, cleared) = board.clear_lines();

    assert_eq!(cleared.as_slice(), &[19]);
    // The surviving cell moved down one row; the top is fresh.
    assert_eq!(cleared_board.get(2, 19), Some(Some(CYAN)));
    assert_eq!(cleared_board.get(2, 18), Some(None));
    for x in 0..BOARD_WIDTH as i8 {
        assert_eq!(cleared_board.get(x, 0), Some(None));
    }
}

#[test]
fn test_clear_lines_keeps_partial_rows_in_order() {
    let mut board = Board::new();
    // Full rows at 10 and 15, markers above each.
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 10, Some(RED));
        board.set(x, 15, Some(RED));
    }
    board.set(0, 9, Some(CYAN));
    board.set(1, 14, Some("#f0a000"));

    let (compacted, cleared) = board.clear_lines();
    assert_eq!(cleared.as_slice(), &[10, 15]);

    // Marker above row 10 drops past both cleared rows; marker between the
    // two drops past one. Relative order is preserved.
    assert_eq!(compacted.get(0, 11), Some(Some(CYAN)));
    assert_eq!(compacted.get(1, 15), Some(Some("#f0a000")));
}

#[test]
fn test_clear_lines_handles_four_at_once() {
    let mut board = Board::new();
    for y in 16..20 {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, Some(RED));
        }
    }
    board.set(7, 15, Some(CYAN));

    let (compacted, cleared) = board.clear_lines();
    assert_eq!(cleared.as_slice(), &[16, 17, 18, 19]);
    assert_eq!(compacted.get(7, 19), Some(Some(CYAN)));
}

#[test]
fn test_clear_lines_always_returns_twenty_rows() {
    let boards = [
        Board::new(),
        board_with_row_filled_except(19, &[]),
        board_with_row_filled_except(0, &[]),
        board_with_row_filled_except(19, &[4]),
    ];

    for board in boards {
        let (compacted, _) = board.clear_lines();
        let grid = compacted.grid();
        assert_eq!(grid.len(), BOARD_HEIGHT as usize);
        for row in grid.iter() {
            assert_eq!(row.len(), BOARD_WIDTH as usize);
        }
    }
}

#[test]
fn test_clear_lines_noop_without_full_rows() {
    let board = board_with_row_filled_except(19, &[0]);
    let (compacted, cleared) = board.clear_lines();

    assert!(cleared.is_empty());
    assert_eq!(compacted, board);
}

#[test]
fn test_single_gap_fill_clears_the_row() {
    // Row 19 complete except one cell; writing exactly that cell clears it.
    let board = board_with_row_filled_except(19, &[9]);
    let filled = board.place([(9, 19)], CYAN);

    let (compacted, cleared) = filled.clear_lines();
    assert_eq!(cleared.as_slice(), &[19]);
    assert_eq!(compacted, Board::new());
}
