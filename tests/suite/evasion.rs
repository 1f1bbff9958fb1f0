//! The decline button must stay out of reach no matter how it is chased.

use std::time::Duration;

use valentine_engine::{App, CardConfig, RevealStage};
use valentine_types::{CellRect, EvadePosition, UiOptions};

fn app_at_prompt() -> App {
    let mut app = App::with_config(&CardConfig::default(), UiOptions::default());
    app.advance(Duration::from_secs(5));
    app.advance(Duration::from_secs(5));
    assert_eq!(app.stage(), RevealStage::Prompt);
    app
}

#[test]
fn every_evasion_lands_inside_the_viewport_band() {
    let mut app = app_at_prompt();
    for _ in 0..500 {
        app.decline_attempt();
        let pos = app.decline_position().expect("evaded at least once");
        assert!((0.0..=80.0).contains(&pos.top_pct()));
        assert!((0.0..=80.0).contains(&pos.left_pct()));
    }
    assert_eq!(app.decline_evasions(), 500);
}

#[test]
fn chasing_the_button_never_declines_the_card() {
    let mut app = app_at_prompt();

    // A determined chase: hover the button, it jumps, re-layout, click where
    // it used to be, repeat. The card must never leave the prompt.
    let mut rect = CellRect::new(40, 12, 14, 3);
    for _ in 0..100 {
        app.update_prompt_layout(CellRect::new(10, 12, 14, 3), rect);
        let (col, row) = (rect.x + 1, rect.y + 1);
        app.pointer_moved(col, row);

        let pos = app.decline_position().expect("hover evades");
        let (x, y) = pos.resolve(120, 40, 14, 3);
        rect = CellRect::new(x, y, 14, 3);
        app.update_prompt_layout(CellRect::new(10, 12, 14, 3), rect);

        // Click the stale spot. At worst it hits the new rect, which only
        // makes the button jump again.
        app.pointer_clicked(col, row);
        assert_eq!(app.stage(), RevealStage::Prompt);
    }
    assert!(app.decline_evasions() >= 100);
}

#[test]
fn resolved_position_fits_any_terminal() {
    for (width, height) in [(20u16, 6u16), (80, 24), (240, 70), (15, 3)] {
        for step in 0..=10 {
            let unit = f64::from(step) / 10.0;
            let pos = EvadePosition::from_unit(unit, 1.0 - unit);
            let (x, y) = pos.resolve(width, height, 14, 3);
            assert!(x.saturating_add(14) <= width.max(14));
            assert!(y.saturating_add(3) <= height.max(3));
        }
    }
}

#[test]
fn evasion_only_applies_at_the_prompt() {
    let mut app = App::with_config(&CardConfig::default(), UiOptions::default());
    app.decline_attempt();
    assert!(app.decline_position().is_none());

    let mut app = app_at_prompt();
    app.confirm();
    app.decline_attempt();
    assert_eq!(app.decline_evasions(), 0);
}
