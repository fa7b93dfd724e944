//! Access decisions for content items.
//!
//! Verification lives here, bookkeeping lives in [`crate::session`]: the gate
//! compares codes and reports what a click should do, the session records
//! which items have been opened.

use crate::catalog::Catalog;
use crate::config;
use crate::models::ContentItem;
use crate::presenter;
use crate::session::{SessionAction, SessionState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    OpenNoLink,
    OpenWithLink,
    Locked,
    UnlockedThisSession,
    GloballyUnlocked,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickAction {
    Navigate(String),
    PromptCode,
    Ignore,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodeCheck {
    Accepted,
    Rejected,
}

/// What the open code prompt is asking for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PromptTarget {
    Item(String),
    Master,
}

#[derive(Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Dispatch `action`, show `message` and close the prompt.
    Unlocked { action: SessionAction, message: String },
    /// State stays as it is and the prompt stays open.
    Rejected,
    /// The prompt points at an item the catalog does not have.
    UnknownItem,
}

/// The single visibility rule every render path goes through.
pub fn is_accessible(item: &ContentItem, session: &SessionState) -> bool {
    !item.is_locked || session.is_item_unlocked(&item.id) || session.all_unlocked()
}

pub fn gate_state(item: &ContentItem, session: &SessionState) -> GateState {
    if !is_accessible(item, session) {
        GateState::Locked
    } else if !item.is_locked {
        if item.link.is_some() {
            GateState::OpenWithLink
        } else {
            GateState::OpenNoLink
        }
    } else if session.all_unlocked() {
        GateState::GloballyUnlocked
    } else {
        GateState::UnlockedThisSession
    }
}

pub fn click_action(item: &ContentItem, session: &SessionState) -> ClickAction {
    match gate_state(item, session) {
        GateState::Locked => ClickAction::PromptCode,
        GateState::OpenNoLink => ClickAction::Ignore,
        GateState::OpenWithLink | GateState::UnlockedThisSession | GateState::GloballyUnlocked => {
            match &item.link {
                Some(link) => ClickAction::Navigate(link.clone()),
                None => ClickAction::Ignore,
            }
        }
    }
}

/// Exact, case-sensitive comparison. Items without a code never match.
pub fn check_item_code(item: &ContentItem, submitted: &str) -> CodeCheck {
    match &item.code {
        Some(code) if code == submitted => CodeCheck::Accepted,
        _ => CodeCheck::Rejected,
    }
}

pub fn check_master_code(submitted: &str) -> CodeCheck {
    if submitted == config::MASTER_CODE {
        CodeCheck::Accepted
    } else {
        CodeCheck::Rejected
    }
}

/// Verifies a submitted code against whatever the prompt was opened for.
pub fn submit_code(catalog: &Catalog, target: &PromptTarget, code: &str) -> SubmitOutcome {
    match target {
        PromptTarget::Item(item_id) => {
            let Some(item) = catalog.item(item_id) else {
                return SubmitOutcome::UnknownItem;
            };
            match check_item_code(item, code) {
                CodeCheck::Accepted => SubmitOutcome::Unlocked {
                    action: SessionAction::UnlockItem(item.id.clone()),
                    message: presenter::unlock_message(item),
                },
                CodeCheck::Rejected => SubmitOutcome::Rejected,
            }
        }
        PromptTarget::Master => match check_master_code(code) {
            CodeCheck::Accepted => SubmitOutcome::Unlocked {
                action: SessionAction::UnlockAll,
                message: presenter::master_unlock_message(),
            },
            CodeCheck::Rejected => SubmitOutcome::Rejected,
        },
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::models::Category;
    use yew::Reducible;

    fn item(id: &str, is_locked: bool, code: Option<&str>, link: Option<&str>) -> ContentItem {
        ContentItem {
            id: id.to_string(),
            kit_number: 1,
            title: format!("title {}", id),
            description: "description".to_string(),
            tags: vec!["tag".to_string()],
            category: Category::Marketing,
            link: link.map(str::to_string),
            is_locked,
            code: code.map(str::to_string),
        }
    }

    /// Submits through `submit_code` and applies any resulting action
    /// through the session reducer.
    fn submit(
        session: &mut SessionState,
        catalog: &Catalog,
        target: PromptTarget,
        code: &str,
    ) -> SubmitOutcome {
        let outcome = submit_code(catalog, &target, code);
        if let SubmitOutcome::Unlocked { action, .. } = &outcome {
            *session = (*Rc::new(session.clone()).reduce(action.clone())).clone();
        }
        outcome
    }

    fn target(id: &str) -> PromptTarget {
        PromptTarget::Item(id.to_string())
    }

    #[test]
    fn test_open_items_are_accessible() {
        let session = SessionState::default();
        let with_link = item("o1", false, None, Some("https://example.com"));
        let without_link = item("o2", false, None, None);
        assert!(is_accessible(&with_link, &session));
        assert_eq!(gate_state(&with_link, &session), GateState::OpenWithLink);
        assert_eq!(gate_state(&without_link, &session), GateState::OpenNoLink);
    }

    #[test]
    fn test_wrong_then_right_code_for_m1() {
        let m1 = item("m1", true, Some("abc"), Some("https://example.com"));
        let catalog = Catalog::with_items(vec![m1.clone()]);
        let mut session = SessionState::default();
        let before = session.clone();

        assert_eq!(submit(&mut session, &catalog, target("m1"), "xyz"), SubmitOutcome::Rejected);
        assert_eq!(session, before);
        assert_eq!(gate_state(&m1, &session), GateState::Locked);
        assert_eq!(click_action(&m1, &session), ClickAction::PromptCode);

        match submit(&mut session, &catalog, target("m1"), "abc") {
            SubmitOutcome::Unlocked { action, message } => {
                assert_eq!(action, SessionAction::UnlockItem("m1".to_string()));
                assert!(message.contains("M-KIT1"), "{}", message);
            }
            other => panic!("expected unlock, got {:?}", other),
        }
        assert!(is_accessible(&m1, &session));
        assert_eq!(gate_state(&m1, &session), GateState::UnlockedThisSession);
        assert_eq!(
            click_action(&m1, &session),
            ClickAction::Navigate("https://example.com".to_string())
        );

        // A later wrong attempt never takes the unlock back.
        assert_eq!(submit(&mut session, &catalog, target("m1"), "nope"), SubmitOutcome::Rejected);
        assert!(is_accessible(&m1, &session));
    }

    #[test]
    fn test_code_comparison_is_exact() {
        let m1 = item("m1", true, Some("abc"), None);
        assert_eq!(check_item_code(&m1, "ABC"), CodeCheck::Rejected);
        assert_eq!(check_item_code(&m1, "abc "), CodeCheck::Rejected);
        assert_eq!(check_item_code(&m1, ""), CodeCheck::Rejected);
        assert_eq!(check_item_code(&m1, "abc"), CodeCheck::Accepted);
    }

    #[test]
    fn test_item_without_code_only_opens_with_master() {
        let b3 = item("b3", true, None, None);
        let catalog = Catalog::with_items(vec![b3.clone()]);
        let mut session = SessionState::default();

        assert_eq!(submit(&mut session, &catalog, target("b3"), ""), SubmitOutcome::Rejected);
        assert_eq!(submit(&mut session, &catalog, target("b3"), "beautyxedu"), SubmitOutcome::Rejected);
        assert!(!is_accessible(&b3, &session));

        let outcome = submit(&mut session, &catalog, PromptTarget::Master, "beautyxedu");
        assert!(matches!(
            outcome,
            SubmitOutcome::Unlocked { action: SessionAction::UnlockAll, .. }
        ));
        assert!(is_accessible(&b3, &session));
    }

    #[test]
    fn test_unknown_item_target() {
        let catalog = Catalog::with_items(vec![item("m1", true, Some("abc"), None)]);
        let mut session = SessionState::default();
        assert_eq!(
            submit(&mut session, &catalog, target("gone"), "abc"),
            SubmitOutcome::UnknownItem
        );
        assert_eq!(session, SessionState::default());
    }

    #[test]
    fn test_unlock_is_per_item() {
        let m1 = item("m1", true, Some("abc"), None);
        let m2 = item("m2", true, Some("abc"), None);
        let catalog = Catalog::with_items(vec![m1.clone(), m2.clone()]);
        let mut session = SessionState::default();
        submit(&mut session, &catalog, target("m1"), "abc");
        assert!(is_accessible(&m1, &session));
        assert!(!is_accessible(&m2, &session));
    }

    #[test]
    fn test_master_code_unlocks_whole_catalog() {
        let catalog = Catalog::load().unwrap();
        let mut session = SessionState::default();
        assert!(catalog.items().iter().any(|i| !is_accessible(i, &session)));

        assert_eq!(
            submit(&mut session, &catalog, PromptTarget::Master, "BeautyXedu"),
            SubmitOutcome::Rejected
        );
        assert!(!session.all_unlocked());

        match submit(&mut session, &catalog, PromptTarget::Master, "beautyxedu") {
            SubmitOutcome::Unlocked { action, message } => {
                assert_eq!(action, SessionAction::UnlockAll);
                assert_eq!(message, presenter::master_unlock_message());
            }
            other => panic!("expected unlock, got {:?}", other),
        }
        for item in catalog.items() {
            assert!(is_accessible(item, &session), "{} should be open", item.id);
            if item.is_locked {
                assert_eq!(gate_state(item, &session), GateState::GloballyUnlocked);
            }
        }
    }

    #[test]
    fn test_global_unlock_takes_precedence() {
        let mut session = SessionState::default();
        let m1 = item("m1", true, Some("abc"), None);
        session.unlock_item("m1");
        session.unlock_all();
        assert_eq!(gate_state(&m1, &session), GateState::GloballyUnlocked);
    }

    #[test]
    fn test_click_on_open_item_without_link_is_ignored() {
        let mut session = SessionState::default();
        let o1 = item("o1", false, None, None);
        assert_eq!(click_action(&o1, &session), ClickAction::Ignore);

        let m1 = item("m1", true, Some("abc"), None);
        session.unlock_item("m1");
        assert_eq!(click_action(&m1, &session), ClickAction::Ignore);
    }

    #[test]
    fn test_gate_state_agrees_with_visibility_rule() {
        let catalog = Catalog::load().unwrap();
        let mut sessions = vec![SessionState::default()];
        let mut partial = SessionState::default();
        partial.unlock_item(&catalog.items()[1].id);
        sessions.push(partial);
        let mut global = SessionState::default();
        global.unlock_all();
        sessions.push(global);

        for session in &sessions {
            for item in catalog.items() {
                let locked = gate_state(item, session) == GateState::Locked;
                assert_eq!(is_accessible(item, session), !locked, "{}", item.id);
            }
        }
    }
}
