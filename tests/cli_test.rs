use salvo::{coord_to_string, outcome_message, parse_coord, CoordError, ShotOutcome, BOARD_SIZE};

#[test]
fn test_parse_valid_coordinates() {
    assert_eq!(parse_coord("A1", BOARD_SIZE), Ok((0, 0)));
    assert_eq!(parse_coord("g7", BOARD_SIZE), Ok((6, 6)));
    assert_eq!(parse_coord("c5", BOARD_SIZE), Ok((4, 2)));
    assert_eq!(coord_to_string(4, 2), "C5");
}

#[test]
fn test_parse_rejects_bad_shapes() {
    assert_eq!(parse_coord("", BOARD_SIZE), Err(CoordError::Empty));
    assert_eq!(parse_coord("H9", BOARD_SIZE), Err(CoordError::InvalidColumn('H')));
    assert_eq!(parse_coord("15", BOARD_SIZE), Err(CoordError::InvalidColumn('1')));
    assert!(matches!(parse_coord("A8", BOARD_SIZE), Err(CoordError::InvalidRow(_))));
    assert!(matches!(parse_coord("A0", BOARD_SIZE), Err(CoordError::InvalidRow(_))));
    assert!(matches!(parse_coord("A", BOARD_SIZE), Err(CoordError::InvalidRow(_))));
    assert!(matches!(parse_coord("A05", BOARD_SIZE), Err(CoordError::InvalidRow(_))));
    assert!(matches!(parse_coord("A5x", BOARD_SIZE), Err(CoordError::InvalidRow(_))));
    assert!(matches!(parse_coord("A 5", BOARD_SIZE), Err(CoordError::InvalidRow(_))));
    assert!(matches!(parse_coord(" a5 ", BOARD_SIZE), Err(CoordError::InvalidColumn(' '))));
    assert!(matches!(parse_coord("a5 ", BOARD_SIZE), Err(CoordError::InvalidRow(_))));
    assert!(matches!(parse_coord("a5\n", BOARD_SIZE), Err(CoordError::InvalidRow(_))));
}

#[test]
fn test_parse_follows_board_size() {
    assert_eq!(parse_coord("J10", 10), Ok((9, 9)));
    assert!(parse_coord("K1", 10).is_err());
    assert!(parse_coord("J10", BOARD_SIZE).is_err());
}

#[test]
fn test_outcome_messages() {
    assert_eq!(outcome_message(ShotOutcome::Miss), ["Miss!"]);
    assert_eq!(
        outcome_message(ShotOutcome::Sunk { length: 2 }),
        ["Hit!", "You sunk a ship!"]
    );
    assert_eq!(
        outcome_message(ShotOutcome::Repeat),
        ["You've already shot at this location. Try again."]
    );
}
