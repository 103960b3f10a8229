//! Game flow tests - drop, lock, clear, score, top-out and restart

use gridfall::core::{GameConfig, GameState, Grid, Piece, PieceSource, ScriptedPieceSource};
use gridfall::types::{Command, Coordinate, LockEvent, PieceKind, Status, StepOutcome};

fn scripted(kinds: &[PieceKind]) -> GameState<ScriptedPieceSource> {
    GameState::with_source(GameConfig::default(), ScriptedPieceSource::new(kinds.to_vec()))
}

fn on_grid(rows: &[&str], kinds: &[PieceKind]) -> GameState<ScriptedPieceSource> {
    let grid = Grid::from_ascii(rows).expect("valid grid rows");
    GameState::with_grid(grid, GameConfig::default(), ScriptedPieceSource::new(kinds.to_vec()))
}

/// Tick until the active piece locks.
fn drop_to_lock<S: PieceSource>(state: &mut GameState<S>) -> LockEvent {
    for _ in 0..64 {
        match state.tick() {
            StepOutcome::Moved => continue,
            StepOutcome::Locked(event) => return event,
            other => panic!("unexpected outcome while dropping: {:?}", other),
        }
    }
    panic!("piece never locked");
}

#[test]
fn test_i_piece_falls_and_locks() {
    let mut state = scripted(&[PieceKind::I, PieceKind::T]);

    for _ in 0..16 {
        assert_eq!(state.tick(), StepOutcome::Moved);
    }
    match state.tick() {
        StepOutcome::Locked(event) => {
            assert_eq!(event.kind, PieceKind::I);
            assert_eq!(event.lines_cleared, 0);
            assert_eq!(event.score_delta, 0);
            assert!(!event.game_over);
        }
        other => panic!("expected lock, got {:?}", other),
    }

    for row in 16..20 {
        assert_eq!(state.grid().get(Coordinate::new(row, 5)), Some(Some(PieceKind::I)));
    }
    assert_eq!(state.grid().occupied_count(), 4);
    assert_eq!(state.score(), 0);
    assert_eq!(state.active(), &Piece::spawn(PieceKind::T));
    assert_eq!(state.pieces_spawned(), 2);
    assert_eq!(state.status(), Status::Running);
}

#[test]
fn test_single_line_clear_shifts_rows_down() {
    let mut state = on_grid(&["JJJJJ.JJJJ"], &[PieceKind::I]);

    let event = drop_to_lock(&mut state);
    assert_eq!(event.lines_cleared, 1);
    assert_eq!(event.score_delta, 40);
    assert_eq!(state.score(), 40);
    assert_eq!(state.lines(), 1);
    assert_eq!(state.lines_toward_next_level(), 1);

    // Rows 16-18 of the I moved down one row.
    for row in 17..20 {
        assert_eq!(state.grid().get(Coordinate::new(row, 5)), Some(Some(PieceKind::I)));
    }
    assert_eq!(state.grid().get(Coordinate::new(16, 5)), Some(None));
    assert_eq!(state.grid().occupied_count(), 3);
}

#[test]
fn test_line_clear_scores() {
    for (rows, expected) in [(1usize, 40u32), (2, 100), (3, 300), (4, 1200)] {
        let grid_rows = vec!["SSSSS.SSSS"; rows];
        let mut state = on_grid(&grid_rows, &[PieceKind::I]);

        let event = drop_to_lock(&mut state);
        assert_eq!(event.lines_cleared, rows as u32);
        assert_eq!(event.score_delta, expected, "{} rows", rows);
        assert_eq!(state.score(), expected);
        assert_eq!(state.lines(), rows as u32);
        assert_eq!(state.grid().occupied_count(), 4 - rows);
    }
}

#[test]
fn test_three_tetrises_reach_level_two() {
    let mut state = on_grid(&["ZZZZZ.ZZZZ"; 12], &[PieceKind::I]);

    let events: Vec<LockEvent> = (0..3).map(|_| drop_to_lock(&mut state)).collect();
    assert!(events.iter().all(|e| e.lines_cleared == 4));
    assert!(!events[0].leveled_up);
    assert!(!events[1].leveled_up);
    assert!(events[2].leveled_up);

    assert_eq!(state.score(), 3600);
    assert_eq!(state.lines(), 12);
    assert_eq!(state.level(), 2);
    assert_eq!(state.lines_toward_next_level(), 0);
    assert_eq!(state.gravity_ms(), 370);
    assert_eq!(state.grid().occupied_count(), 0);
}

#[test]
fn test_top_out_ends_game() {
    let mut grid = Grid::new();
    grid.set(Coordinate::new(3, 5), PieceKind::L).unwrap();
    let mut state = GameState::with_grid(
        grid,
        GameConfig::default(),
        ScriptedPieceSource::new([PieceKind::O, PieceKind::I]),
    );

    assert_eq!(state.tick(), StepOutcome::Moved);
    let event = drop_to_lock(&mut state);
    assert_eq!(event.kind, PieceKind::O);
    assert!(event.game_over);

    assert_eq!(state.status(), Status::GameOver);
    assert!(state.game_over());
    assert_eq!(state.active().kind(), PieceKind::I);
    assert!(state.snapshot().active.is_none());

    let frozen = state.clone();
    for command in Command::ALL {
        assert_eq!(state.apply_command(command), StepOutcome::Ignored);
    }
    assert_eq!(state.tick(), StepOutcome::Ignored);
    assert_eq!(state, frozen);
}

#[test]
fn test_blocked_first_spawn_starts_in_game_over() {
    let state = on_grid(&["..........", ".....T....", "LLLLL.LLLL"], &[PieceKind::I]);
    assert_eq!(state.status(), Status::Running);

    let mut rows = vec![".....T...."; 20];
    rows[19] = "..........";
    let state = on_grid(&rows, &[PieceKind::I]);
    assert_eq!(state.status(), Status::GameOver);
    assert_eq!(state.pieces_spawned(), 0);
}

#[test]
fn test_restart_after_game_over() {
    let mut grid = Grid::new();
    grid.set(Coordinate::new(3, 5), PieceKind::L).unwrap();
    let mut state = GameState::with_grid(
        grid,
        GameConfig::default(),
        ScriptedPieceSource::new([PieceKind::O, PieceKind::I]),
    );
    drop_to_lock(&mut state);
    assert!(state.game_over());

    state.start();
    assert_eq!(state.status(), Status::Running);
    assert_eq!(state.grid().occupied_count(), 0);
    assert_eq!(state.score(), 0);
    assert_eq!(state.level(), 1);
    assert_eq!(state.gravity_ms(), 400);
    assert_eq!(state.active(), &Piece::spawn(PieceKind::O));
    assert_eq!(state.apply_command(Command::MoveLeft), StepOutcome::Moved);
}

#[test]
fn test_move_left_at_wall_is_idempotent() {
    let mut state = scripted(&[PieceKind::O]);
    for _ in 0..4 {
        assert_eq!(state.apply_command(Command::MoveLeft), StepOutcome::Moved);
    }
    assert_eq!(state.active().pivot(), Coordinate::new(0, 0));

    let at_wall = state.clone();
    for _ in 0..3 {
        assert_eq!(state.apply_command(Command::MoveLeft), StepOutcome::Rejected);
        assert_eq!(state, at_wall);
    }
}

#[test]
fn test_rotate_then_move() {
    let mut state = scripted(&[PieceKind::T]);
    assert_eq!(state.apply_command(Command::RotateCw), StepOutcome::Moved);
    assert_eq!(state.apply_command(Command::MoveRight), StepOutcome::Moved);
    assert_eq!(state.apply_command(Command::RotateCcw), StepOutcome::Moved);

    let expected = Piece::spawn(PieceKind::T).translate(0, 1);
    assert_eq!(state.active(), &expected);
}

#[test]
fn test_snapshot_matches_state() {
    let mut state = scripted(&[PieceKind::L]);
    state.apply_command(Command::SoftDrop);

    let snap = state.snapshot();
    assert_eq!(snap.status, state.status());
    assert_eq!(snap.score, state.score());
    assert_eq!(snap.level, state.level());
    assert_eq!(snap.gravity_ms, state.gravity_ms());
    let active = snap.active.expect("running game has an active piece");
    assert_eq!(active.kind, PieceKind::L);
    assert_eq!(&active.cells, state.active().cells());
    assert_eq!(snap.cell_at(state.active().pivot()), Some(PieceKind::L));
}

#[test]
fn test_seeded_games_are_identical() {
    let config = GameConfig {
        seed: Some(42),
        ..GameConfig::default()
    };
    let mut a = GameState::new(config.clone());
    let mut b = GameState::new(config);

    for _ in 0..10 {
        if a.game_over() {
            break;
        }
        assert_eq!(drop_to_lock(&mut a), drop_to_lock(&mut b));
        assert_eq!(a.active(), b.active());
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_closure_piece_source() {
    let mut state = GameState::with_source(GameConfig::default(), || PieceKind::Z);
    assert_eq!(state.active().kind(), PieceKind::Z);
    drop_to_lock(&mut state);
    assert_eq!(state.active().kind(), PieceKind::Z);
}
