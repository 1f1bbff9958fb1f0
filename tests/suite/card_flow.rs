//! End-to-end card scenarios driven through the public engine API.

use std::time::Duration;

use valentine_engine::{App, CardConfig, MAX_SPARKS, RevealStage};
use valentine_types::UiOptions;

const FRAME: Duration = Duration::from_millis(16);

fn default_app() -> App {
    App::with_config(&CardConfig::default(), UiOptions::default())
}

fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.advance(FRAME);
    }
}

#[test]
fn reveal_sequence_advances_on_schedule() {
    let mut app = default_app();
    assert_eq!(app.stage(), RevealStage::Greeting);

    // Just under five seconds of frames: still on the greeting.
    run_frames(&mut app, 310);
    assert_eq!(app.stage(), RevealStage::Greeting);

    run_frames(&mut app, 10);
    assert_eq!(app.stage(), RevealStage::Question);

    // Another full dwell reaches the prompt, where the card waits.
    run_frames(&mut app, 320);
    assert_eq!(app.stage(), RevealStage::Prompt);
    run_frames(&mut app, 10_000);
    assert_eq!(app.stage(), RevealStage::Prompt);
}

#[test]
fn celebration_starts_playback_and_fireworks() {
    let mut app = default_app();
    app.advance(Duration::from_secs(5));
    app.advance(Duration::from_secs(5));
    app.confirm();

    assert_eq!(app.stage(), RevealStage::Celebration);
    assert!(app.fireworks_active());

    let first = app.playback_frame();
    // Frames step at 250ms by default; one step later the art changed.
    app.advance(Duration::from_millis(250));
    assert_ne!(app.playback_frame(), first);
}

#[test]
fn spark_population_stays_bounded() {
    let mut app = default_app();
    app.advance(Duration::from_secs(5));
    app.advance(Duration::from_secs(5));
    app.confirm();

    // Run the celebration for a full minute of frames.
    for _ in 0..3_750 {
        app.advance(FRAME);
        assert!(app.sparks().len() <= MAX_SPARKS);
    }
}

#[test]
fn oversized_frame_delta_cannot_skip_a_stage() {
    let mut app = default_app();
    // A laptop waking from sleep can hand the loop a huge delta.
    app.advance(Duration::from_secs(3600));
    assert_eq!(app.stage(), RevealStage::Question);
    app.advance(Duration::from_secs(3600));
    assert_eq!(app.stage(), RevealStage::Prompt);
}

#[test]
fn configured_text_flows_through_resolution() {
    let config: CardConfig = toml::from_str(
        r#"
        [card]
        recipient = "Sam"
        question = "Dinner on Friday?"
        yes_label = "Absolutely"
        "#,
    )
    .expect("valid config");
    let app = App::with_config(&config, UiOptions::default());

    assert!(app.text().greeting.contains("Sam"));
    assert_eq!(app.text().question, "Dinner on Friday?");
    assert_eq!(app.text().yes_label, "Absolutely");
    // Unset fields keep their defaults.
    assert_eq!(app.text().no_label, "No, I won't");
}
