use std::collections::HashSet;
use std::rc::Rc;

use yew::Reducible;

use crate::models::Category;

/// Everything the landing page remembers for the lifetime of one page load.
///
/// Unlock progress is monotonic: `unlocked_item_ids` only grows and
/// `all_unlocked` only ever flips from false to true.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    selected_category: Option<Category>,
    unlocked_item_ids: HashSet<String>,
    all_unlocked: bool,
    dark_mode: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionAction {
    SelectCategory(Category),
    ToggleDarkMode,
    UnlockItem(String),
    UnlockAll,
}

impl SessionState {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            dark_mode,
            ..Self::default()
        }
    }

    pub fn selected_category(&self) -> Option<Category> {
        self.selected_category
    }

    pub fn is_item_unlocked(&self, item_id: &str) -> bool {
        self.unlocked_item_ids.contains(item_id)
    }

    pub fn all_unlocked(&self) -> bool {
        self.all_unlocked
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Selecting the active category again clears the selection.
    pub fn select_category(&mut self, category: Category) {
        self.selected_category = if self.selected_category == Some(category) {
            None
        } else {
            Some(category)
        };
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Returns false if the item was already unlocked.
    pub fn unlock_item(&mut self, item_id: &str) -> bool {
        if self.unlocked_item_ids.contains(item_id) {
            return false;
        }
        self.unlocked_item_ids.insert(item_id.to_string())
    }

    /// Returns false if the latch was already set.
    pub fn unlock_all(&mut self) -> bool {
        let changed = !self.all_unlocked;
        self.all_unlocked = true;
        changed
    }
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            SessionAction::SelectCategory(category) => {
                next.select_category(category);
                true
            }
            SessionAction::ToggleDarkMode => {
                next.toggle_dark_mode();
                true
            }
            SessionAction::UnlockItem(item_id) => next.unlock_item(&item_id),
            SessionAction::UnlockAll => next.unlock_all(),
        };

        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: SessionState, action: SessionAction) -> SessionState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn test_new_session_is_empty() {
        let state = SessionState::new(true);
        assert_eq!(state.selected_category(), None);
        assert!(!state.all_unlocked());
        assert!(!state.is_item_unlocked("marketing-1"));
        assert!(state.dark_mode());
    }

    #[test]
    fn test_select_twice_clears_selection() {
        for category in Category::ALL {
            let mut state = SessionState::default();
            state.select_category(category);
            assert_eq!(state.selected_category(), Some(category));
            state.select_category(category);
            assert_eq!(state.selected_category(), None);
        }
    }

    #[test]
    fn test_select_other_category_replaces_selection() {
        let mut state = SessionState::default();
        state.select_category(Category::Marketing);
        state.select_category(Category::Content);
        assert_eq!(state.selected_category(), Some(Category::Content));
    }

    #[test]
    fn test_unlocked_items_only_grow() {
        let mut state = SessionState::default();
        assert!(state.unlock_item("m1"));
        assert!(!state.unlock_item("m1"));
        assert!(state.unlock_item("b1"));

        state.select_category(Category::Branding);
        state.toggle_dark_mode();
        state.unlock_all();

        assert!(state.is_item_unlocked("m1"));
        assert!(state.is_item_unlocked("b1"));
    }

    #[test]
    fn test_unlock_all_is_a_latch() {
        let mut state = SessionState::default();
        assert!(state.unlock_all());
        assert!(!state.unlock_all());
        state.toggle_dark_mode();
        state.select_category(Category::Marketing);
        assert!(state.all_unlocked());
    }

    #[test]
    fn test_dark_mode_toggle_is_independent() {
        let mut state = SessionState::new(false);
        state.unlock_item("m1");
        state.toggle_dark_mode();
        assert!(state.dark_mode());
        state.toggle_dark_mode();
        assert!(!state.dark_mode());
        assert!(state.is_item_unlocked("m1"));
    }

    #[test]
    fn test_reducer_applies_actions() {
        let state = SessionState::default();
        let state = reduce(state, SessionAction::SelectCategory(Category::Branding));
        let state = reduce(state, SessionAction::UnlockItem("b1".to_string()));
        let state = reduce(state, SessionAction::ToggleDarkMode);
        assert_eq!(state.selected_category(), Some(Category::Branding));
        assert!(state.is_item_unlocked("b1"));
        assert!(state.dark_mode());

        let state = reduce(state, SessionAction::SelectCategory(Category::Branding));
        assert_eq!(state.selected_category(), None);
        let state = reduce(state, SessionAction::UnlockAll);
        assert!(state.all_unlocked());
    }

    #[test]
    fn test_reducer_reuses_state_when_nothing_changes() {
        let mut state = SessionState::default();
        state.unlock_item("m1");
        let before = Rc::new(state);
        let after = before.clone().reduce(SessionAction::UnlockItem("m1".to_string()));
        assert!(Rc::ptr_eq(&before, &after));
    }
}
