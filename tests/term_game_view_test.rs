use blockfall::core::{ActiveSnapshot, Engine, Snapshot};
use blockfall::term::{AnchorY, FrameBuffer, GameView, HudView, Viewport};
use blockfall::types::{ShapeKind, BOARD_ROWS};

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = Engine::seeded(1).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&snap, &HudView::default(), Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
    assert_eq!(fb.get(5, 0).unwrap().ch, '─');
    assert_eq!(fb.get(0, 5).unwrap().ch, '│');
}

#[test]
fn term_view_renders_settled_cell_two_chars_wide() {
    let mut snap = Snapshot::default();
    snap.board[19][0] = true;

    let fb = GameView::default().render(&snap, &HudView::default(), Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let y = 1 + 19;
    assert_eq!(fb.get(1, y).unwrap().ch, '█');
    assert_eq!(fb.get(2, y).unwrap().ch, '█');
    assert_eq!(fb.get(3, y).unwrap().ch, '·');
}

#[test]
fn term_view_renders_active_piece_in_its_own_color() {
    let mut snap = Snapshot::default();
    snap.board[19][0] = true;
    snap.active = Some(ActiveSnapshot {
        shape: ShapeKind::I,
        cells: ShapeKind::I.template(),
    });

    let fb = GameView::default().render(&snap, &HudView::default(), Viewport::new(22, 22));

    // Line spawns at column 4, rows 0-3.
    let x = 1 + 4 * 2;
    for row in 0..4u16 {
        assert_eq!(fb.get(x, 1 + row).unwrap().ch, '█');
        assert_eq!(fb.get(x + 1, 1 + row).unwrap().ch, '█');
    }
    let active = fb.get(x, 1).unwrap().style;
    let settled = fb.get(1, 20).unwrap().style;
    assert_ne!(active.fg, settled.fg);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = Snapshot::default();
    snap.score = 1200;
    snap.lines = 12;

    let hud = HudView {
        high_score: 4500,
        paused: false,
    };
    let fb = GameView::default().render(&snap, &hud, Viewport::new(60, 22));
    let all = screen_text(&fb);

    assert!(all.contains("SCORE"));
    assert!(all.contains("1200"));
    assert!(all.contains("HIGH"));
    assert!(all.contains("4500"));
    assert!(all.contains("LINES"));
    assert!(all.contains("12"));
}

#[test]
fn term_view_high_score_tracks_live_score() {
    let mut snap = Snapshot::default();
    snap.score = 900;
    let hud = HudView {
        high_score: 300,
        paused: false,
    };

    let fb = GameView::default().render(&snap, &hud, Viewport::new(60, 22));
    // Panel starts at x = 19 + 22 + 2; HIGH value is on the fifth panel line.
    assert!(fb.row_text(4).contains("900"));
    assert!(!screen_text(&fb).contains("300"));
}

#[test]
fn term_view_overlays() {
    let view = GameView::default();
    let vp = Viewport::new(40, 24);

    let paused = view.render(
        &Snapshot::default(),
        &HudView {
            high_score: 0,
            paused: true,
        },
        vp,
    );
    assert!(screen_text(&paused).contains("PAUSED"));

    let mut over = Snapshot::default();
    over.game_over = true;
    let fb = view.render(&over, &HudView::default(), vp);
    let text = screen_text(&fb);
    assert!(text.contains("GAME OVER"));
    assert!(!text.contains("PAUSED"));

    let fb = view.render(&Snapshot::default(), &HudView::default(), vp);
    assert!(!screen_text(&fb).contains("GAME OVER"));
}

#[test]
fn term_view_anchor_top_pins_frame_to_first_row() {
    let snap = Snapshot::default();
    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, &HudView::default(), Viewport::new(22, 40));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(0, BOARD_ROWS as u16 + 1).unwrap().ch, '└');
}

#[test]
fn term_view_render_into_reuses_buffer_across_sizes() {
    let snap = Snapshot::default();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&snap, &HudView::default(), Viewport::new(22, 22), &mut fb);
    assert_eq!((fb.width(), fb.height()), (22, 22));

    view.render_into(&snap, &HudView::default(), Viewport::new(50, 30), &mut fb);
    assert_eq!((fb.width(), fb.height()), (50, 30));
    assert_eq!(fb, view.render(&snap, &HudView::default(), Viewport::new(50, 30)));
}
