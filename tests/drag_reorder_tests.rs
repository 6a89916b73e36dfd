use tui_dice::core::{move_item, GameState};
use tui_dice::types::TICK_MS;

fn ids(state: &GameState) -> Vec<u8> {
    state.dice().iter().map(|d| d.id).collect()
}

fn drag(state: &mut GameState, from: u8, to: u8) -> bool {
    state.drag_start(from);
    state.drag_enter(to);
    state.drop_on(to)
}

#[test]
fn drag_right_inserts_at_target_index() {
    let mut state = GameState::new(1);
    assert!(drag(&mut state, 0, 3));
    assert_eq!(ids(&state), vec![1, 2, 3, 0, 4]);
}

#[test]
fn drag_left_inserts_at_target_index() {
    let mut state = GameState::new(1);
    assert!(drag(&mut state, 4, 1));
    assert_eq!(ids(&state), vec![0, 4, 1, 2, 3]);
}

#[test]
fn dropping_on_self_is_a_no_op() {
    let mut state = GameState::new(1);
    assert!(!drag(&mut state, 2, 2));
    assert_eq!(ids(&state), vec![0, 1, 2, 3, 4]);
    assert!(!state.drag().is_active());
}

#[test]
fn drop_without_source_is_a_no_op() {
    let mut state = GameState::new(1);
    assert!(!state.drop_on(3));
    assert_eq!(ids(&state), vec![0, 1, 2, 3, 4]);
}

#[test]
fn drag_enter_ignores_source_and_requires_drag() {
    let mut state = GameState::new(1);
    assert!(!state.drag_enter(1), "no drag in progress");
    state.drag_start(1);
    assert!(!state.drag_enter(1));
    assert_eq!(state.drag().over, None);
    assert!(state.drag_enter(2));
    assert_eq!(state.drag().over, Some(2));
    state.drag_end();
    assert!(!state.drag().is_active());
}

#[test]
fn values_and_frozen_flags_travel_with_the_die() {
    let mut state = GameState::new(3);
    state.roll_dice();
    state.finish_roll();
    state.toggle_freeze(0);
    let value = state.dice()[0].value;

    drag(&mut state, 0, 4);
    assert_eq!(state.dice()[4].id, 0);
    assert_eq!(state.dice()[4].value, value);
    assert!(state.is_frozen(0));
    assert_eq!(state.snapshot().dice[4].frozen, true);
}

#[test]
fn reorder_during_roll_is_kept_on_completion() {
    let mut state = GameState::new(8);
    state.roll_dice();
    state.tick(TICK_MS * 3);
    drag(&mut state, 1, 3);
    state.finish_roll();
    assert_eq!(ids(&state), vec![0, 2, 3, 1, 4]);
}

#[test]
fn move_item_preserves_relative_order() {
    let mut v = ['a', 'b', 'c', 'd', 'e'];
    assert!(move_item(&mut v, 1, 3));
    assert_eq!(v, ['a', 'c', 'd', 'b', 'e']);
    assert!(!move_item(&mut v, 2, 2));
    assert!(!move_item(&mut v, 0, 9));
}
