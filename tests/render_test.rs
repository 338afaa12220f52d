//! Frame encoding: full redraws versus diffs of consecutive game frames.

use blockfall::core::Engine;
use blockfall::term::{encode_diff_into, encode_full_into, GameView, HudView, Viewport};

#[test]
fn diff_of_one_tick_is_smaller_than_full_redraw() {
    let mut engine = Engine::seeded(12345);
    let view = GameView::default();
    let vp = Viewport::new(60, 24);

    let before = view.render(&engine.snapshot(), &HudView::default(), vp);
    engine.tick();
    let after = view.render(&engine.snapshot(), &HudView::default(), vp);
    assert_ne!(before, after);

    let mut full = Vec::new();
    encode_full_into(&after, &mut full).unwrap();
    let mut diff = Vec::new();
    encode_diff_into(&before, &after, &mut diff).unwrap();

    assert!(!diff.is_empty());
    assert!(diff.len() * 4 < full.len(), "diff {} vs full {}", diff.len(), full.len());
}

#[test]
fn unchanged_frame_diff_has_no_glyphs() {
    let engine = Engine::seeded(7);
    let view = GameView::default();
    let fb = view.render(&engine.snapshot(), &HudView::default(), Viewport::new(40, 24));

    let mut diff = Vec::new();
    encode_diff_into(&fb, &fb.clone(), &mut diff).unwrap();
    let text = String::from_utf8_lossy(&diff);
    assert!(!text.contains('█'));
    assert!(!text.contains('·'));
}

#[test]
fn pause_overlay_shows_up_in_diff() {
    let engine = Engine::seeded(3);
    let view = GameView::default();
    let vp = Viewport::new(40, 24);
    let snap = engine.snapshot();

    let running = view.render(&snap, &HudView::default(), vp);
    let paused = view.render(
        &snap,
        &HudView {
            high_score: 0,
            paused: true,
        },
        vp,
    );

    let mut diff = Vec::new();
    encode_diff_into(&running, &paused, &mut diff).unwrap();
    let text = String::from_utf8_lossy(&diff);
    assert!(text.contains("PAUSED"));
}
