use crate::gate::{self, GateState};
use crate::models::{Category, ContentItem};
use crate::session::SessionState;

/// How a card should look given the gate's decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Affordance {
    Plain,
    Open,
    Obscured,
}

/// Items of the selected category in catalog order; nothing when no
/// category is selected.
pub fn filter_by_category(items: &[ContentItem], selection: Option<Category>) -> Vec<&ContentItem> {
    match selection {
        Some(category) => items.iter().filter(|item| item.category == category).collect(),
        None => Vec::new(),
    }
}

pub fn kit_label(category: Category, kit_number: u32) -> String {
    match (category, kit_number) {
        (Category::Marketing, 1) => "M-KIT1".to_string(),
        (Category::Branding, n) => format!("BX-CLASS{}", n),
        (_, n) => format!("BX-KIT{}", n),
    }
}

pub fn item_label(item: &ContentItem) -> String {
    kit_label(item.category, item.kit_number)
}

pub fn affordance(item: &ContentItem, session: &SessionState) -> Affordance {
    match gate::gate_state(item, session) {
        GateState::Locked => Affordance::Obscured,
        GateState::OpenNoLink => Affordance::Plain,
        GateState::OpenWithLink | GateState::UnlockedThisSession | GateState::GloballyUnlocked => {
            if item.link.is_some() {
                Affordance::Open
            } else {
                Affordance::Plain
            }
        }
    }
}

pub fn unlock_message(item: &ContentItem) -> String {
    format!("🔓 {} 잠금 해제 완료!", item_label(item))
}

pub fn master_unlock_message() -> String {
    "🔓 모든 콘텐츠의 잠금이 해제되었습니다!".to_string()
}
