//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Moves the cursor one cell in the arrow's direction on a `size` x `size`
/// grid. Stops at the edges; other keys leave the cursor where it is.
pub fn move_cursor(cursor: usize, size: usize, key: KeyCode) -> usize {
    let (row, col) = (cursor / size, cursor % size);

    let (row, col) = match key {
        KeyCode::Right if col + 1 < size => (row, col + 1),
        KeyCode::Left if col > 0 => (row, col - 1),
        KeyCode::Down if row + 1 < size => (row + 1, col),
        KeyCode::Up if row > 0 => (row - 1, col),
        _ => (row, col),
    };

    row * size + col
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_grid() {
        assert_eq!(move_cursor(4, 3, KeyCode::Right), 5);
        assert_eq!(move_cursor(4, 3, KeyCode::Left), 3);
        assert_eq!(move_cursor(4, 3, KeyCode::Up), 1);
        assert_eq!(move_cursor(4, 3, KeyCode::Down), 7);
    }

    #[test]
    fn test_stops_at_edges() {
        assert_eq!(move_cursor(0, 3, KeyCode::Left), 0);
        assert_eq!(move_cursor(0, 3, KeyCode::Up), 0);
        assert_eq!(move_cursor(2, 3, KeyCode::Right), 2);
        assert_eq!(move_cursor(15, 4, KeyCode::Down), 15);
        assert_eq!(move_cursor(3, 4, KeyCode::Right), 3);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(move_cursor(4, 3, KeyCode::Char('x')), 4);
        assert_eq!(move_cursor(0, 1, KeyCode::Down), 0);
    }
}
