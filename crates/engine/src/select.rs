//! Dropdown selector state.
//!
//! A select owns only its open/closed flag. While open it listens for pointer
//! presses elsewhere and closes itself; once closed it ignores them.

use std::fmt::Display;

use arrayvec::ArrayVec;

use crate::types::{MaxRollsSelection, SelectId, Target, Theme};

/// One entry of a dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption<T: 'static> {
    pub value: T,
    pub label: &'static str,
}

pub static NUM_DICE_OPTIONS: [SelectOption<u8>; 6] = [
    SelectOption { value: 1, label: "1" },
    SelectOption { value: 2, label: "2" },
    SelectOption { value: 3, label: "3" },
    SelectOption { value: 4, label: "4" },
    SelectOption { value: 5, label: "5" },
    SelectOption { value: 6, label: "6" },
];

const fn max_rolls_option(value: MaxRollsSelection) -> SelectOption<MaxRollsSelection> {
    SelectOption {
        value,
        label: value.label(),
    }
}

const fn theme_option(value: Theme) -> SelectOption<Theme> {
    SelectOption {
        value,
        label: value.label(),
    }
}

pub static MAX_ROLLS_OPTIONS: [SelectOption<MaxRollsSelection>; 2] = [
    max_rolls_option(MaxRollsSelection::ALL[0]),
    max_rolls_option(MaxRollsSelection::ALL[1]),
];

pub static THEME_OPTIONS: [SelectOption<Theme>; 5] = [
    theme_option(Theme::ALL[0]),
    theme_option(Theme::ALL[1]),
    theme_option(Theme::ALL[2]),
    theme_option(Theme::ALL[3]),
    theme_option(Theme::ALL[4]),
];

/// Most entries any dropdown carries.
pub const MAX_SELECT_ITEMS: usize = 8;

/// Render-ready description of a dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectView {
    pub id: SelectId,
    pub open: bool,
    pub current_label: String,
    pub items: ArrayVec<&'static str, MAX_SELECT_ITEMS>,
    pub selected: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct SelectState<T: 'static> {
    id: SelectId,
    options: &'static [SelectOption<T>],
    open: bool,
}

impl<T> SelectState<T>
where
    T: Copy + PartialEq + Display + 'static,
{
    /// The option list is assumed non-empty.
    pub fn new(id: SelectId, options: &'static [SelectOption<T>]) -> Self {
        debug_assert!(!options.is_empty());
        Self {
            id,
            options,
            open: false,
        }
    }

    pub fn id(&self) -> SelectId {
        self.id
    }

    pub fn options(&self) -> &'static [SelectOption<T>] {
        self.options
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn index_of(&self, current: T) -> Option<usize> {
        self.options.iter().position(|o| o.value == current)
    }

    /// Label matching `current`, or the raw value when nothing matches.
    pub fn label_for(&self, current: T) -> String {
        match self.index_of(current) {
            Some(i) => self.options[i].label.to_string(),
            None => current.to_string(),
        }
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Pick entry `index`. Closes the list and returns the chosen value.
    pub fn choose(&mut self, index: usize) -> Option<T> {
        let value = self.options.get(index).map(|o| o.value)?;
        self.open = false;
        Some(value)
    }

    /// Whether `target` is part of this control.
    pub fn owns(&self, target: Target) -> bool {
        target.select_id() == Some(self.id)
    }

    /// Pointer pressed somewhere. Closes the list when the press landed
    /// outside it. Returns whether it closed.
    pub fn on_pointer_down(&mut self, target: Option<Target>) -> bool {
        if !self.open {
            return false;
        }
        match target {
            Some(t) if self.owns(t) => false,
            _ => self.close(),
        }
    }

    pub fn view(&self, current: T) -> SelectView {
        SelectView {
            id: self.id,
            open: self.open,
            current_label: self.label_for(current),
            items: self
                .options
                .iter()
                .take(MAX_SELECT_ITEMS)
                .map(|o| o.label)
                .collect(),
            selected: self.index_of(current),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_tables_follow_enum_order() {
        let selections: Vec<_> = MAX_ROLLS_OPTIONS.iter().map(|o| o.value).collect();
        assert_eq!(selections, MaxRollsSelection::ALL);
        assert_eq!(MAX_ROLLS_OPTIONS[1].label, "Other");

        let themes: Vec<_> = THEME_OPTIONS.iter().map(|o| o.value).collect();
        assert_eq!(themes, Theme::ALL);
        for opt in THEME_OPTIONS.iter() {
            assert_eq!(opt.label, opt.value.label());
        }
    }

    fn dice_select() -> SelectState<u8> {
        SelectState::new(SelectId::NumDice, &NUM_DICE_OPTIONS)
    }

    #[test]
    fn label_falls_back_to_raw_value() {
        let s = dice_select();
        assert_eq!(s.label_for(4), "4");
        assert_eq!(s.label_for(9), "9");

        let m = SelectState::new(SelectId::MaxRolls, &MAX_ROLLS_OPTIONS);
        assert_eq!(m.label_for(MaxRollsSelection::Other), "Other");
    }

    #[test]
    fn choose_returns_value_and_closes() {
        let mut s = dice_select();
        s.toggle_open();
        assert!(s.is_open());
        assert_eq!(s.choose(2), Some(3));
        assert!(!s.is_open());
    }

    #[test]
    fn choose_out_of_range_keeps_open() {
        let mut s = dice_select();
        s.toggle_open();
        assert_eq!(s.choose(10), None);
        assert!(s.is_open());
    }

    #[test]
    fn outside_press_closes_only_when_open() {
        let mut s = dice_select();
        assert!(!s.on_pointer_down(Some(Target::RollButton)));

        s.toggle_open();
        assert!(!s.on_pointer_down(Some(Target::SelectItem(SelectId::NumDice, 1))));
        assert!(s.is_open());
        assert!(!s.on_pointer_down(Some(Target::SelectButton(SelectId::NumDice))));
        assert!(s.is_open());

        assert!(s.on_pointer_down(Some(Target::SelectButton(SelectId::Theme))));
        assert!(!s.is_open());

        s.toggle_open();
        assert!(s.on_pointer_down(None));
        assert!(!s.is_open());
    }

    #[test]
    fn view_lists_labels_and_selection() {
        let s = SelectState::new(SelectId::Theme, &THEME_OPTIONS);
        let v = s.view(Theme::Forest);
        assert_eq!(v.current_label, "Forest");
        assert_eq!(v.items.len(), 5);
        assert_eq!(v.selected, Some(2));
        assert!(!v.open);
    }
}
