//! End-to-end picker scenarios through the public Engine API
//!
//! Run with: cargo test --test picker_scenarios

use std::time::Duration;

use timepick::{Engine, HostInput, PickerOptions};
use timepick_app::config::{load_options, parse_options_json, parse_options_toml};
use timepick_app::{InputKey, InteractionKind, InteractionTarget, Message};
use timepick_core::Time;

// ─────────────────────────────────────────────────────────
// Test Data Helpers
// ─────────────────────────────────────────────────────────

fn appointment_options() -> PickerOptions {
    parse_options_toml(include_str!("fixtures/appointment_picker.toml"))
        .expect("fixture should parse")
}

fn picker(value: &str, options: PickerOptions) -> Engine {
    Engine::create(&[HostInput::new("appointment", value)], options)
}

fn time_of(engine: &Engine) -> Option<Time> {
    engine.get_time().time()
}

// ─────────────────────────────────────────────────────────
// Fixtures
// ─────────────────────────────────────────────────────────

#[test]
fn test_fixture_options() {
    let options = appointment_options();
    assert_eq!(options.interval, 30);
    assert_eq!(options.max_time, 18);
    assert_eq!(options.disabled.len(), 3);
    assert_eq!(options.title, "Pick a time");
    // Unset fields keep their defaults
    assert!(options.allow_reset);
    assert_eq!(options.time_format_12, "H:M apm");
}

#[test]
fn test_load_options_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("picker.toml");
    std::fs::write(&path, include_str!("fixtures/appointment_picker.toml")).unwrap();

    assert_eq!(load_options(&path), appointment_options());
}

#[test]
fn test_load_options_missing_file_defaults() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(
        load_options(&dir.path().join("absent.toml")),
        PickerOptions::default()
    );
}

#[test]
fn test_json_options_match_toml() {
    let json = r#"{
        "interval": 30,
        "mode": "12h",
        "maxTime": 18,
        "startTime": 9,
        "endTime": 21,
        "disabled": ["1:30 pm", "2:00 pm", "5:30 pm"],
        "title": "Pick a time"
    }"#;
    assert_eq!(parse_options_json(json).unwrap(), appointment_options());
}

// ─────────────────────────────────────────────────────────
// Scenarios
// ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_pm_suffix_without_space() {
    let mut engine = picker("", appointment_options());

    engine.set_time("1:00pm");

    assert_eq!(time_of(&engine), Some(Time::new(13, 0)));
    assert_eq!(engine.get_time().display_text, "1:00 pm");
}

#[tokio::test]
async fn test_past_max_hour_keeps_previous() {
    let mut engine = picker("", appointment_options());
    engine.set_time("18:00");
    assert_eq!(time_of(&engine), Some(Time::new(18, 0)));

    engine.set_time("20:00");

    assert_eq!(time_of(&engine), Some(Time::new(18, 0)));
    assert_eq!(engine.render().input_text, "6:00 pm");
}

#[tokio::test]
async fn test_rejections_keep_previous() {
    let mut engine = picker("18:00", appointment_options());

    for text in ["20:00", "8:30 pm", "1:30 PM", "2:00PM", "dh4kj6"] {
        engine.set_time(text);
        assert_eq!(time_of(&engine), Some(Time::new(18, 0)), "input {text:?}");
    }
}

#[tokio::test]
async fn test_midnight_in_12h_mode() {
    let mut engine = picker("", appointment_options());

    engine.set_time("12:00am");

    assert_eq!(time_of(&engine), Some(Time::new(0, 0)));
    assert_eq!(engine.get_time().display_text, "12:00 am");
}

#[tokio::test]
async fn test_empty_without_reset_keeps_display() {
    let mut engine = picker(
        "",
        PickerOptions {
            interval: 15,
            allow_reset: false,
            ..Default::default()
        },
    );
    engine.set_time("10:15");
    assert_eq!(engine.get_time().display_text, "10:15");

    engine.set_time("");

    assert_eq!(engine.get_time().display_text, "10:15");
    assert_eq!(engine.render().input_text, "10:15");
}

#[tokio::test]
async fn test_keyboard_navigation_skips_disabled() {
    let mut engine = picker("12:00", appointment_options());
    engine.send(Message::Focus);

    engine.send(Message::Key(InputKey::Down));
    assert_eq!(time_of(&engine), Some(Time::new(12, 30)));

    engine.send(Message::Key(InputKey::Down));
    engine.send(Message::Key(InputKey::Down));
    assert_eq!(time_of(&engine), Some(Time::new(14, 30)));

    let view = engine.render();
    let selected = view.selected.expect("a slot is highlighted");
    assert_eq!(view.slots[selected].label, "2:30 pm");
    assert!(!view.slots[selected].disabled);
}

#[tokio::test]
async fn test_navigation_never_lands_on_disabled() {
    let mut engine = picker("", appointment_options());
    engine.open();

    for _ in 0..30 {
        engine.send(Message::Key(InputKey::Down));
        let view = engine.render();
        let selected = view.selected.expect("a slot is highlighted");
        assert!(!view.slots[selected].disabled);
    }
    // Clamped at the last enabled slot
    assert_eq!(time_of(&engine), Some(Time::new(18, 0)));
}

// ─────────────────────────────────────────────────────────
// Lifecycle
// ─────────────────────────────────────────────────────────

#[tokio::test(start_paused = true)]
async fn test_click_slot_then_outside_lifecycle() {
    let mut engine = picker("", appointment_options());
    let mut events = engine.subscribe();

    engine.send(Message::InputClicked);
    tokio::time::sleep(Duration::from_millis(150)).await;
    engine.drain_pending_messages();

    // Clicks inside the surface keep it open
    engine.send(Message::OutsideInteraction {
        target: InteractionTarget::PickerSurface,
        kind: InteractionKind::Click,
    });
    assert!(engine.is_open());

    engine.send(Message::SlotActivated { index: 2 });
    engine.settle().await;
    assert!(!engine.is_open());
    assert_eq!(engine.get_time().display_text, "10:00 am");

    let types: Vec<_> = std::iter::from_fn(|| events.try_recv().ok())
        .map(|e| e.event_type())
        .collect();
    assert_eq!(types, vec!["open", "change", "close"]);
}

#[tokio::test(start_paused = true)]
async fn test_tab_away_closes() {
    let mut engine = picker("", appointment_options());
    engine.send(Message::Focus);
    engine.settle().await;

    engine.send(Message::OutsideInteraction {
        target: InteractionTarget::Outside,
        kind: InteractionKind::Focus,
    });

    assert!(!engine.is_open());
}

#[tokio::test]
async fn test_inert_when_misconfigured() {
    let mut engine = picker(
        "10:00",
        PickerOptions {
            interval: 120,
            ..Default::default()
        },
    );

    engine.open();
    engine.set_time("11:00");

    assert!(engine.is_inert());
    assert!(!engine.is_open());
    assert_eq!(time_of(&engine), None);
}

#[tokio::test]
async fn test_destroy_then_everything_is_noop() {
    let mut engine = picker("10:00", appointment_options());
    engine.open();
    engine.destroy();

    engine.open();
    engine.set_time("11:00");
    engine.destroy();

    assert!(engine.is_destroyed());
    assert_eq!(time_of(&engine), Some(Time::new(10, 0)));
    assert!(!engine.render().mounted);
}
