//! Mouse gestures resolved through the rendered layout, the way the binary
//! does it.

use tui_dice::core::GameState;
use tui_dice::engine::App;
use tui_dice::term::{GameView, Layout, Rect, Viewport};
use tui_dice::types::{GameAction, PointerKind, SelectId, Target, Theme};

const VP: Viewport = Viewport {
    width: 90,
    height: 32,
};

fn app() -> App {
    App::with_game(GameState::new(42), Theme::Ocean)
}

fn layout(app: &App) -> Layout {
    GameView::default().render_into(&app.view(), VP, &mut tui_dice::term::FrameBuffer::new(0, 0))
}

fn center(r: Rect) -> (u16, u16) {
    (r.x + r.w / 2, r.y + r.h / 2)
}

fn send(app: &mut App, kind: PointerKind, at: (u16, u16)) -> bool {
    let target = layout(app).hit_test(at.0, at.1);
    app.pointer(kind, target)
}

fn click(app: &mut App, at: (u16, u16)) {
    send(app, PointerKind::Down, at);
    send(app, PointerKind::Up, at);
}

fn ids(app: &App) -> Vec<u8> {
    app.game().dice().iter().map(|d| d.id).collect()
}

#[test]
fn clicking_roll_button_rolls() {
    let mut app = app();
    let roll = center(layout(&app).roll_button);
    click(&mut app, roll);
    assert_eq!(app.game().current_roll(), 1);
    assert!(app.game().rolling());
}

#[test]
fn clicking_a_die_freezes_it_after_a_roll() {
    let mut app = app();
    app.apply(GameAction::Roll);
    while app.game().rolling() {
        app.tick(16);
    }
    let die = center(layout(&app).dice[2]);
    click(&mut app, die);
    assert!(app.game().is_frozen(2));
    assert!(app.view().game.dice[2].frozen);
}

#[test]
fn dragging_between_dice_reorders() {
    let mut app = app();
    let l = layout(&app);
    let from = center(l.dice[0]);
    let to = center(l.dice[3]);

    send(&mut app, PointerKind::Down, from);
    // Moving within the source die does not start a drag.
    send(&mut app, PointerKind::Drag, (from.0 + 1, from.1));
    assert!(!app.game().drag().is_active());

    send(&mut app, PointerKind::Drag, to);
    let view = app.view();
    assert!(view.game.dice[0].dragging);
    assert!(view.game.dice[3].drag_over);

    send(&mut app, PointerKind::Up, to);
    assert_eq!(ids(&app), vec![1, 2, 3, 0, 4]);
    assert!(!app.game().drag().is_active());
    assert_eq!(app.game().current_roll(), 0, "a drop is not a click");
}

#[test]
fn dropdown_choice_by_mouse_changes_dice_count() {
    let mut app = app();
    let options = center(layout(&app).options_button);
    click(&mut app, options);
    assert!(app.show_options());

    let select = layout(&app)
        .control(Target::SelectButton(SelectId::NumDice))
        .expect("dice select shown");
    click(&mut app, center(select));
    assert!(app.is_select_open(SelectId::NumDice));

    let l = layout(&app);
    let item = l.dropdown.as_ref().expect("list open").items[2];
    click(&mut app, center(item));
    assert!(!app.is_select_open(SelectId::NumDice));
    assert_eq!(app.game().dice().len(), 3);
}

#[test]
fn clicking_empty_space_closes_dropdown() {
    let mut app = app();
    app.apply(GameAction::ToggleOptions);
    let select = layout(&app)
        .control(Target::SelectButton(SelectId::Theme))
        .expect("theme select shown");
    click(&mut app, center(select));
    assert!(app.is_select_open(SelectId::Theme));

    click(&mut app, (0, 0));
    assert!(!app.is_select_open(SelectId::Theme));
    assert_eq!(app.theme(), Theme::Ocean);
}

#[test]
fn limit_toggle_reveals_max_rolls_select() {
    let mut app = app();
    app.apply(GameAction::ToggleOptions);
    assert!(layout(&app).control(Target::SelectButton(SelectId::MaxRolls)).is_none());

    let toggle = layout(&app).control(Target::LimitToggle).expect("toggle shown");
    click(&mut app, center(toggle));
    assert!(app.game().options().limit_enabled);
    assert!(layout(&app).control(Target::SelectButton(SelectId::MaxRolls)).is_some());
}
