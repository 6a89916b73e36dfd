//! Headless runner: plays a game with simulated time and writes one JSON
//! snapshot per completed roll.

use std::io::Write;

use anyhow::Result;
use tracing::{debug, info};

use crate::core::GameState;
use crate::engine::AppConfig;
use crate::types::TICK_MS;

/// Perform up to `rolls` rolls and write each completed snapshot to `out`.
///
/// `freeze` holds 1-based positions frozen right after the first roll, so
/// the first line already shows them. Stops early when the roll limit is
/// reached. Returns the number of lines written.
pub fn run<W: Write>(config: &AppConfig, rolls: u32, freeze: &[u8], out: &mut W) -> Result<u32> {
    let mut game = GameState::with_rng(config.options.clone(), config.rng());
    info!(
        seed = game.seed(),
        num_dice = game.options().num_dice,
        max_rolls = %game.max_rolls(),
        "headless game started"
    );

    let mut written = 0;
    for i in 0..rolls {
        if !game.roll_dice() {
            info!(current_roll = game.current_roll(), "roll limit reached");
            break;
        }
        while game.rolling() {
            game.tick(TICK_MS);
        }
        if i == 0 {
            for &pos in freeze {
                let Some(die) = game.die_at(usize::from(pos.saturating_sub(1))) else {
                    debug!(pos, "no die at position");
                    continue;
                };
                if !game.is_frozen(die.id) {
                    game.toggle_freeze(die.id);
                }
            }
        }

        serde_json::to_writer(&mut *out, &game.snapshot())?;
        writeln!(out)?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameOptions;

    fn config(options: GameOptions) -> AppConfig {
        AppConfig {
            options,
            seed: Some(11),
            ..AppConfig::default()
        }
    }

    #[test]
    fn writes_one_line_per_roll() {
        let mut out = Vec::new();
        let n = run(&config(GameOptions::default()), 4, &[], &mut out).unwrap();
        assert_eq!(n, 4);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 4);
        for (i, line) in text.lines().enumerate() {
            let v: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(v["current_roll"], (i + 1) as u64);
            assert_eq!(v["rolling"], false);
        }
    }

    #[test]
    fn stops_at_roll_limit() {
        let options = GameOptions {
            limit_enabled: true,
            ..GameOptions::default()
        };
        let mut out = Vec::new();
        assert_eq!(run(&config(options), 10, &[], &mut out).unwrap(), 3);
    }

    #[test]
    fn frozen_positions_keep_their_values() {
        let mut out = Vec::new();
        run(&config(GameOptions::default()), 3, &[1, 5], &mut out).unwrap();
        let snaps: Vec<serde_json::Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        let first = &snaps[0]["dice"];
        assert_eq!(first[0]["frozen"], true);
        assert_eq!(first[4]["frozen"], true);
        assert_eq!(first[1]["frozen"], false);
        for snap in &snaps[1..] {
            assert_eq!(snap["dice"][0]["value"], first[0]["value"]);
            assert_eq!(snap["dice"][4]["value"], first[4]["value"]);
        }
    }

    #[test]
    fn repeated_position_stays_frozen() {
        let mut out = Vec::new();
        run(&config(GameOptions::default()), 1, &[1, 1, 3, 1], &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let snap: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(snap["dice"][0]["frozen"], true);
        assert_eq!(snap["dice"][2]["frozen"], true);
        assert_eq!(snap["dice"][1]["frozen"], false);
    }
}
