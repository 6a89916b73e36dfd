//! The JSON shape of a snapshot is what headless consumers parse.

use tui_dice::core::GameState;

#[test]
fn snapshot_json_has_stable_fields() {
    let mut state = GameState::new(5);
    state.roll_dice();
    let v = serde_json::to_value(state.snapshot()).expect("serialize snapshot");

    for key in [
        "game_id",
        "seed",
        "dice",
        "current_roll",
        "max_rolls",
        "score",
        "rolling",
        "roll_elapsed_ms",
        "options",
    ] {
        assert!(v.get(key).is_some(), "missing {}", key);
    }
    for key in ["id", "value", "frozen", "dragging", "drag_over"] {
        assert!(v["dice"][0].get(key).is_some(), "missing dice[].{}", key);
    }
    for key in ["num_dice", "limit_enabled", "max_rolls_selection", "custom_max_rolls"] {
        assert!(v["options"].get(key).is_some(), "missing options.{}", key);
    }
    assert_eq!(v["rolling"], true);
    assert_eq!(v["options"]["max_rolls_selection"], "three");
}

#[test]
fn snapshot_fingerprint_tracks_visible_changes() {
    let mut state = GameState::new(5);
    let a = state.snapshot().fingerprint();
    assert_eq!(a, state.snapshot().fingerprint());
    state.drag_start(0);
    assert_ne!(a, state.snapshot().fingerprint());
}
