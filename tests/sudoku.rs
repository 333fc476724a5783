use alien_order::sudoku::{Board, Conflict, Group, Zone, BLANK};
use alien_order::SudokuError;

fn sample() -> [[char; 9]; 9] {
    let rows = [
        "53..7....",
        "6..195...",
        ".98....6.",
        "8...6...3",
        "4..8.3..1",
        "7...2...6",
        ".6....28.",
        "...419..5",
        "....8..79",
    ];
    let mut cells = [[BLANK; 9]; 9];
    for (r, row) in rows.iter().enumerate() {
        for (c, ch) in row.chars().enumerate() {
            cells[r][c] = ch;
        }
    }
    cells
}

fn valid_zones() -> Vec<Zone> {
    vec![
        vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1), (3, 0), (3, 1), (4, 0)],
        vec![(0, 2), (0, 3), (1, 2), (1, 3), (2, 2), (2, 3), (3, 2), (3, 3), (4, 2)],
    ]
}

#[test]
fn test_valid_board_with_valid_zones() {
    let board = Board::from(sample());
    assert_eq!(board.validate(&valid_zones()), Ok(true));
    assert_eq!(board.validate(&[]), Ok(true));
    assert_eq!(board.conflicts(&valid_zones()), Ok(vec![]));
}

#[test]
fn test_zone_with_duplicate_eight() {
    let board = Board::from(sample());
    let zones = vec![vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1), (3, 0), (3, 1), (2, 2)]];
    assert_eq!(board.validate(&zones), Ok(false));
    assert_eq!(
        board.conflicts(&zones),
        Ok(vec![Conflict { group: Group::Zone(0), value: '8' }])
    );
}

#[test]
fn test_duplicate_in_row() {
    let mut cells = sample();
    cells[0][1] = '5';
    let board = Board::new(cells);
    assert_eq!(board.validate(&[]), Ok(false));
    let conflicts = board.conflicts(&[]).unwrap();
    assert!(conflicts.contains(&Conflict { group: Group::Row(0), value: '5' }));
}

#[test]
fn test_duplicate_in_column() {
    let mut cells = sample();
    cells[1][0] = '5';
    let board = Board::new(cells);
    assert_eq!(board.validate(&[]), Ok(false));
    let conflicts = board.conflicts(&[]).unwrap();
    assert_eq!(
        conflicts,
        vec![
            Conflict { group: Group::Row(1), value: '5' },
            Conflict { group: Group::Column(0), value: '5' },
            Conflict { group: Group::Box(0), value: '5' },
        ]
    );
}

#[test]
fn test_duplicate_in_box_only() {
    let mut cells = sample();
    // (0, 1) holds a 3; neither row 1 nor column 2 does.
    cells[1][2] = '3';
    let board = Board::new(cells);
    assert_eq!(
        board.conflicts(&[]),
        Ok(vec![Conflict { group: Group::Box(0), value: '3' }])
    );
}

#[test]
fn test_short_zone_is_an_error() {
    let board = Board::from(sample());
    let mut zones = valid_zones();
    zones[1].pop();
    assert_eq!(
        board.validate(&zones),
        Err(SudokuError::ZoneSize { zone: 1, len: 8 })
    );
}

#[test]
fn test_zone_error_wins_over_duplicates() {
    let mut cells = sample();
    cells[0][1] = '5';
    let board = Board::new(cells);
    let zones: Vec<Zone> = vec![vec![(0, 0); 10]];
    assert_eq!(
        board.validate(&zones),
        Err(SudokuError::ZoneSize { zone: 0, len: 10 })
    );
}

#[test]
fn test_empty_board() {
    let board = Board::new([[BLANK; 9]; 9]);
    assert_eq!(board.validate(&[]), Ok(true));
}
