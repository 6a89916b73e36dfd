//! Headless runs through the facade crate.

use tui_dice::core::GameOptions;
use tui_dice::engine::AppConfig;
use tui_dice::headless;

fn lines(config: &AppConfig, rolls: u32, freeze: &[u8]) -> Vec<serde_json::Value> {
    let mut out = Vec::new();
    headless::run(config, rolls, freeze, &mut out).expect("headless run");
    String::from_utf8(out)
        .expect("utf-8 output")
        .lines()
        .map(|l| serde_json::from_str(l).expect("one JSON object per line"))
        .collect()
}

fn seeded(options: GameOptions) -> AppConfig {
    AppConfig {
        options,
        seed: Some(2024),
        ..AppConfig::default()
    }
}

#[test]
fn headless_output_is_reproducible_for_a_seed() {
    let config = seeded(GameOptions::default());
    assert_eq!(lines(&config, 5, &[2]), lines(&config, 5, &[2]));
}

#[test]
fn headless_scores_match_dice() {
    for snap in lines(&seeded(GameOptions::default()), 6, &[]) {
        let sum: u64 = snap["dice"]
            .as_array()
            .expect("dice array")
            .iter()
            .map(|d| d["value"].as_u64().expect("value") + 1)
            .sum();
        assert_eq!(snap["score"].as_u64(), Some(sum));
    }
}

#[test]
fn headless_respects_custom_limit() {
    let options = GameOptions {
        num_dice: 2,
        limit_enabled: true,
        max_rolls_selection: tui_dice::types::MaxRollsSelection::Other,
        custom_max_rolls: "2".to_string(),
    };
    let snaps = lines(&seeded(options), 9, &[]);
    assert_eq!(snaps.len(), 2);
    assert_eq!(snaps[1]["max_rolls"], 2);
    assert_eq!(snaps[1]["dice"].as_array().map(|d| d.len()), Some(2));
}

#[test]
fn headless_unbounded_serializes_null_ceiling() {
    let snaps = lines(&seeded(GameOptions::default()), 1, &[]);
    assert!(snaps[0]["max_rolls"].is_null());
}

#[test]
fn headless_ignores_positions_past_the_row() {
    let options = GameOptions {
        num_dice: 2,
        ..GameOptions::default()
    };
    let snaps = lines(&seeded(options), 1, &[2, 6]);
    assert_eq!(snaps[0]["dice"][1]["frozen"], true);
    assert_eq!(snaps[0]["dice"][0]["frozen"], false);
}
