use blockfall::core::{GameConfig, GameState, MemoryLedger, ScriptedSource, Session};
use blockfall::term::{AnchorY, FrameBuffer, GameView, Rgb, Viewport};
use blockfall::types::{GameAction, PieceKind};

fn scripted(kinds: &[PieceKind]) -> GameState {
    GameState::with_config(
        GameConfig::default(),
        Box::new(ScriptedSource::new(kinds.to_vec())),
    )
    .unwrap()
}

fn screen_contains(fb: &FrameBuffer, needle: &str) -> bool {
    (0..fb.height()).any(|y| fb.row_text(y).contains(needle))
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // 10 cells of 2 columns plus the border => 22 wide, 20 rows + border => 22 tall
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_draws_spawned_piece_and_ghost() {
    let game = scripted(&[PieceKind::I, PieceKind::O]);
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&game.snapshot(), Viewport::new(22, 22));

    // I bar on row 1, columns 3..=6; ghost on row 19
    for x in 3..7u16 {
        assert_eq!(fb.get(1 + x * 2, 2).unwrap().ch, '█');
        assert_eq!(fb.get(1 + x * 2, 20).unwrap().ch, '░');
    }
    assert_eq!(fb.get(1, 20).unwrap().ch, '·');
}

#[test]
fn term_view_shows_locked_colors_after_hard_drop() {
    let mut game = scripted(&[PieceKind::Z, PieceKind::O]);
    game.hard_drop();

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&game.snapshot(), Viewport::new(22, 22));

    // Z rests with its lower pair in columns 4 and 5 of row 19
    let cell = fb.get(1 + 4 * 2, 20).unwrap();
    assert_eq!(cell.ch, '█');
    assert_eq!(cell.style.fg, Rgb::from(PieceKind::Z.color()));
}

#[test]
fn term_view_renders_session_hud() {
    let mut session =
        Session::new(scripted(&[PieceKind::T]), MemoryLedger::new()).with_player("ada");
    session.apply_action(GameAction::SoftDrop);
    session.apply_action(GameAction::Pause);

    let fb = GameView::default().render(&session.snapshot(), Viewport::new(80, 24));

    assert!(screen_contains(&fb, "ada"));
    assert!(screen_contains(&fb, "SCORE"));
    assert!(screen_contains(&fb, "NEXT"));
    assert!(screen_contains(&fb, "PAUSED"));
}

#[test]
fn term_view_renders_game_over_prompt() {
    let mut game = GameState::with_config(
        GameConfig::with_board(7, 4),
        Box::new(ScriptedSource::new([PieceKind::O])),
    )
    .unwrap();
    while !game.game_over() {
        game.hard_drop();
    }

    let fb = GameView::default().render(&game.snapshot(), Viewport::new(80, 24));
    assert!(screen_contains(&fb, "GAME OVER"));
    assert!(screen_contains(&fb, "Press R"));
}

#[test]
fn term_view_render_into_reuses_buffer_across_sizes() {
    let snap = GameState::new(3).snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&snap, Viewport::new(80, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (80, 24));

    view.render_into(&snap, Viewport::new(40, 30), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 30));
    assert_eq!(fb.cells().len(), 40 * 30);
}
