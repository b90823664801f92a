//! GameView tests - cell-level render checks, no terminal required

use blockfall::core::GameState;
use blockfall::term::{GameView, Viewport};
use blockfall::types::PieceKind;

fn render_text(game: &GameState, width: u16, height: u16) -> String {
    let fb = GameView::default().render(game, Viewport::new(width, height));
    (0..height)
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn game_over_state() -> GameState {
    let mut game = GameState::new(3);
    game.start();
    for _ in 0..5 {
        game.spawn(Some(PieceKind::I));
        game.rotate();
        game.hard_drop();
        if game.game_over() {
            return game;
        }
    }
    panic!("expected a blocked spawn");
}

#[test]
fn renders_panel_labels_and_border() {
    let mut game = GameState::new(1);
    game.start();

    let text = render_text(&game, 80, 30);
    assert!(text.contains("SCORE"));
    assert!(text.contains("HOLD"));
    assert!(text.contains('┌'));
    assert!(text.contains('┘'));
}

#[test]
fn renders_active_piece_and_ghost() {
    let mut game = GameState::new(1);
    game.start();
    game.spawn(Some(PieceKind::O));

    let text = render_text(&game, 80, 30);
    assert!(text.contains('█'), "active piece glyph missing");
    assert!(text.contains('░'), "ghost glyph missing");
}

#[test]
fn ghost_glyph_disappears_when_the_piece_rests() {
    let mut game = GameState::new(1);
    game.start();
    game.spawn(Some(PieceKind::O));
    for _ in 0..18 {
        game.try_move(0, 1);
    }

    let text = render_text(&game, 80, 30);
    assert!(!text.contains('░'));
}

#[test]
fn held_piece_letter_shows_in_the_panel() {
    let mut game = GameState::new(1);
    game.start();
    game.spawn(Some(PieceKind::T));
    game.hold();

    let text = render_text(&game, 80, 30);
    let hold_line = text
        .lines()
        .skip_while(|line| !line.contains("HOLD"))
        .nth(1)
        .expect("line under HOLD label");
    assert!(hold_line.contains('T'));
}

#[test]
fn game_over_overlay_shows_the_final_score() {
    let game = game_over_state();
    let text = render_text(&game, 80, 30);
    assert!(text.contains("GAME OVER"));
    assert!(text.contains("score 0"));
}

#[test]
fn tiny_viewports_do_not_panic() {
    let mut game = GameState::new(1);
    game.start();
    let _ = render_text(&game, 5, 3);
    let _ = render_text(&game, 0, 0);
}
