use super::*;
use proptest::prelude::*;

#[test]
fn test_pos_new() {
    let pos = Pos::new(2, 1);
    assert_eq!(pos.row, 2);
    assert_eq!(pos.col, 1);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(3, 5);
    assert_eq!(pos.to_index(), 3 * 8 + 5);

    let pos2 = Pos::from_index(29);
    assert_eq!(pos2, pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0, 3));
    assert!(Pos::is_valid(2, 2, 3));
    assert!(!Pos::is_valid(3, 0, 3));
    assert!(!Pos::is_valid(-1, 0, 3));
    assert!(Pos::is_valid(7, 7, 8));
    assert!(!Pos::is_valid(0, 8, 8));
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_board_size_limits() {
    assert!(matches!(Board::new(2), Err(crate::Error::InvalidSize { size: 2, .. })));
    assert!(matches!(Board::new(9), Err(crate::Error::InvalidSize { size: 9, .. })));
    for size in MIN_SIZE..=MAX_SIZE {
        let board = Board::new(size).unwrap();
        assert_eq!(board.size(), size);
        assert_eq!(board.available_count(), size * size);
    }
}

#[test]
fn test_clamp_size() {
    assert_eq!(clamp_size(0), 3);
    assert_eq!(clamp_size(5), 5);
    assert_eq!(clamp_size(9), 8);
}

#[test]
fn test_available_moves_row_major() {
    let mut board = Board::new(3).unwrap();
    board.apply(Pos::new(0, 1), Mark::X);
    board.apply(Pos::new(1, 1), Mark::O);

    let moves: Vec<Pos> = board.available_moves().collect();
    assert_eq!(
        moves,
        vec![
            Pos::new(0, 0),
            Pos::new(0, 2),
            Pos::new(1, 0),
            Pos::new(1, 2),
            Pos::new(2, 0),
            Pos::new(2, 1),
            Pos::new(2, 2),
        ]
    );
}

#[test]
fn test_available_moves_stay_inside_board() {
    let board = Board::new(4).unwrap();
    assert!(board.available_moves().all(|p| board.contains(p)));
    assert!(!board.contains(Pos::new(0, 4)));
}

#[test]
fn test_apply_get_undo() {
    let mut board = Board::new(3).unwrap();
    let pos = Pos::new(2, 2);
    board.apply(pos, Mark::Y);
    assert_eq!(board.get(pos), Mark::Y);
    assert!(!board.is_empty(pos));
    assert_eq!(board.mark_count(), 1);

    board.undo(pos);
    assert_eq!(board.get(pos), Mark::Empty);
    assert!(board.is_board_empty());
}

#[test]
fn test_cells_cover_board() {
    let mut board = Board::new(5).unwrap();
    board.apply(Pos::new(4, 4), Mark::O);
    let cells: Vec<(Pos, Mark)> = board.cells().collect();
    assert_eq!(cells.len(), 25);
    assert_eq!(cells[24], (Pos::new(4, 4), Mark::O));
    assert_eq!(cells[0], (Pos::new(0, 0), Mark::Empty));
}

fn arb_board() -> impl Strategy<Value = Board> {
    (MIN_SIZE..=MAX_SIZE).prop_flat_map(|size| {
        prop::collection::vec(0u8..4, size * size).prop_map(move |cells| {
            let mut board = Board::new(size).unwrap();
            for (i, cell) in cells.into_iter().enumerate() {
                let pos = Pos::new((i / size) as u8, (i % size) as u8);
                match cell {
                    1 => board.apply(pos, Mark::X),
                    2 => board.apply(pos, Mark::O),
                    3 => board.apply(pos, Mark::Y),
                    _ => {}
                }
            }
            board
        })
    })
}

proptest! {
    #[test]
    fn prop_available_plus_marked_is_area(board in arb_board()) {
        let n = board.size();
        prop_assert_eq!(board.available_moves().count() + board.mark_count(), n * n);
        prop_assert_eq!(board.available_count(), board.available_moves().count());
    }

    #[test]
    fn prop_apply_then_undo_restores(board in arb_board(), pick in any::<prop::sample::Index>(), mark_idx in 0usize..3) {
        let empties: Vec<Pos> = board.available_moves().collect();
        prop_assume!(!empties.is_empty());
        let pos = empties[pick.index(empties.len())];

        let mut scratch = board;
        scratch.apply(pos, Mark::PLAYERS[mark_idx]);
        prop_assert_ne!(scratch, board);
        scratch.undo(pos);
        prop_assert_eq!(scratch, board);
    }
}
