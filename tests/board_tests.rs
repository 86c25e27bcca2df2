use salvo::{
    BoardError, BoardGenerator, Cell, FleetEntry, GameConfig, GameSession, Orientation, Ship, ShipId,
    ShotOutcome, TruthBoard, VisibleBoard, BOARD_SIZE, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn session_with(ships: &[(usize, Orientation, usize, usize)]) -> GameSession {
    let mut truth = TruthBoard::new(BOARD_SIZE);
    for &(len, orient, r, c) in ships {
        truth
            .place(Ship::new(len, orient, r, c, BOARD_SIZE).unwrap())
            .unwrap();
    }
    GameSession::new("tester", truth, VisibleBoard::new(BOARD_SIZE)).unwrap()
}

#[test]
fn test_generated_board_has_full_fleet() {
    let generator = BoardGenerator::new(GameConfig::default()).unwrap();
    let mut rng = SmallRng::seed_from_u64(42);
    let (truth, visible) = generator.generate(&mut rng).unwrap();

    assert_eq!(truth.grid().count(|&c| c == Cell::Ship), TOTAL_SHIP_CELLS);
    assert_eq!(truth.segment_count(), TOTAL_SHIP_CELLS);
    let mut lengths: Vec<usize> = truth.ships().iter().map(Ship::length).collect();
    lengths.sort_unstable();
    assert_eq!(lengths, vec![1, 1, 1, 1, 2, 2, 3]);
    assert_eq!(visible.grid().count(|&c| c == Cell::Water), 49);
}

#[test]
fn test_owner_matches_ship_cells() {
    let generator = BoardGenerator::new(GameConfig::default()).unwrap();
    let (truth, _) = generator.generate(&mut SmallRng::seed_from_u64(9)).unwrap();
    for (i, ship) in truth.ships().iter().enumerate() {
        for (r, c) in ship.cells() {
            assert_eq!(truth.owner(r, c).unwrap(), Some(ShipId(i)));
        }
    }
    let owned = truth
        .grid()
        .iter()
        .filter(|&(r, c, _)| truth.owner(r, c).unwrap().is_some())
        .count();
    assert_eq!(owned, TOTAL_SHIP_CELLS);
}

#[test]
fn test_manual_placement_rules() {
    let mut board = TruthBoard::new(BOARD_SIZE);
    board
        .place(Ship::new(3, Orientation::Horizontal, 3, 2, BOARD_SIZE).unwrap())
        .unwrap();
    // directly below the middle segment
    let below = Ship::new(1, Orientation::Horizontal, 4, 3, BOARD_SIZE).unwrap();
    assert_eq!(board.place(below), Err(BoardError::ShipTooClose));
    // diagonal to the last segment
    let diagonal = Ship::new(2, Orientation::Vertical, 4, 5, BOARD_SIZE).unwrap();
    assert_eq!(board.place(diagonal), Err(BoardError::ShipTooClose));
    assert_eq!(
        Ship::new(2, Orientation::Vertical, 6, 0, BOARD_SIZE),
        Err(BoardError::ShipOutOfBounds)
    );
    assert_eq!(board.ships().len(), 1);
}

#[test]
fn test_isolated_single_segment_is_hit_and_sunk() {
    let mut session = session_with(&[(1, Orientation::Horizontal, 0, 0)]);
    let outcome = session.fire(0, 0).unwrap();
    assert!(outcome.is_hit());
    assert!(outcome.is_sunk());
    assert_eq!(outcome, ShotOutcome::Sunk { length: 1 });
    assert_eq!(session.visible().cell(0, 0).unwrap(), Cell::Hit);
    assert_eq!(session.truth().cell(0, 0).unwrap(), Cell::Hit);
    assert!(session.is_complete());
}

#[test]
fn test_middle_hit_of_long_ship_is_not_sunk() {
    let mut session = session_with(&[(3, Orientation::Horizontal, 3, 2)]);
    assert_eq!(session.fire(3, 2).unwrap(), ShotOutcome::Hit);
    let second = session.fire(3, 3).unwrap();
    assert!(second.is_hit());
    assert!(!second.is_sunk());
    assert_eq!(session.fire(3, 4).unwrap(), ShotOutcome::Sunk { length: 3 });
    assert_eq!(session.shots(), 3);
}

#[test]
fn test_sunk_uses_ship_identity_not_neighbours() {
    // After rows 1, 2, 4 the shot at row 5 has no un-hit neighbour, yet the
    // middle segment at row 3 is still afloat.
    let mut session = session_with(&[(5, Orientation::Vertical, 1, 1)]);
    for r in [1, 2, 4, 5] {
        assert_eq!(session.fire(r, 1).unwrap(), ShotOutcome::Hit);
    }
    assert_eq!(session.fire(3, 1).unwrap(), ShotOutcome::Sunk { length: 5 });
}

#[test]
fn test_repeat_shot_is_free() {
    let mut session = session_with(&[(2, Orientation::Horizontal, 5, 5)]);
    assert_eq!(session.fire(0, 0).unwrap(), ShotOutcome::Miss);
    assert_eq!(session.fire(5, 5).unwrap(), ShotOutcome::Hit);
    let truth_before = session.truth().clone();
    let visible_before = session.visible().clone();

    assert_eq!(session.fire(0, 0).unwrap(), ShotOutcome::Repeat);
    assert_eq!(session.fire(5, 5).unwrap(), ShotOutcome::Repeat);
    assert_eq!(session.shots(), 2);
    assert_eq!(session.hits(), 1);
    assert_eq!(session.truth(), &truth_before);
    assert_eq!(session.visible(), &visible_before);
}

#[test]
fn test_custom_config_board() {
    let config = GameConfig {
        board_size: 10,
        fleet: vec![FleetEntry::new(5, 1), FleetEntry::new(4, 1), FleetEntry::new(3, 2)],
        ..GameConfig::default()
    };
    let generator = BoardGenerator::new(config).unwrap();
    let (truth, visible) = generator.generate(&mut SmallRng::seed_from_u64(3)).unwrap();
    assert_eq!(truth.size(), 10);
    assert_eq!(visible.size(), 10);
    assert_eq!(truth.segment_count(), 15);
}

#[test]
fn test_invalid_config_rejected() {
    let config = GameConfig {
        board_size: 0,
        ..GameConfig::default()
    };
    assert!(matches!(
        BoardGenerator::new(config),
        Err(BoardError::InvalidConfig(_))
    ));
}

#[test]
fn test_session_rejects_boards_already_shot() {
    let mut truth = TruthBoard::new(BOARD_SIZE);
    truth
        .place(Ship::new(1, Orientation::Horizontal, 0, 0, BOARD_SIZE).unwrap())
        .unwrap();
    let mut struck = truth.clone();
    assert_eq!(struck.strike(0, 0), Ok(ShotOutcome::Sunk { length: 1 }));
    assert!(matches!(
        GameSession::new("tester", struck, VisibleBoard::new(BOARD_SIZE)),
        Err(BoardError::InvalidConfig(_))
    ));

    let mut played = session_with(&[(1, Orientation::Horizontal, 0, 0)]);
    played.fire(3, 3).unwrap();
    assert!(matches!(
        GameSession::new("tester", truth.clone(), played.visible().clone()),
        Err(BoardError::InvalidConfig(_))
    ));

    let mut session = GameSession::new("tester", truth, VisibleBoard::new(BOARD_SIZE)).unwrap();
    assert_eq!(session.fire(0, 0), Ok(ShotOutcome::Sunk { length: 1 }));
    assert_eq!(session.fire(0, 0), Ok(ShotOutcome::Repeat));
    assert_eq!(session.shots(), 1);
    assert!(session.is_complete());
}
