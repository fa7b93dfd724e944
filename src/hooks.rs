use yew::prelude::*;

use crate::config;
use crate::notifier::{Notifier, NotifierAction};
use crate::timer::{self, SharedTimeoutSlot, TimeoutSlot};

/// A timeout slot owned by the calling component. Any pending timer is
/// cancelled when the component unmounts.
#[hook]
pub fn use_timeout_slot() -> SharedTimeoutSlot {
    let slot = use_mut_ref(TimeoutSlot::default);
    {
        let slot = slot.clone();
        use_effect_with_deps(
            move |_| move || slot.borrow_mut().cancel(),
            (),
        );
    }
    slot
}

/// Becomes true `delay_ms` after every change of `deps`. Used for the
/// fade-in transitions.
#[hook]
pub fn use_reveal_on_change<D>(delay_ms: u32, deps: D) -> bool
where
    D: PartialEq + 'static,
{
    let visible = use_state(|| false);
    let slot = use_timeout_slot();
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                visible.set(false);
                timer::schedule(&slot, delay_ms, move |_| visible.set(true));
                || ()
            },
            deps,
        );
    }
    *visible
}

#[hook]
pub fn use_reveal_after(delay_ms: u32) -> bool {
    use_reveal_on_change(delay_ms, ())
}

#[derive(Clone)]
pub struct NotifierHandle {
    state: UseReducerHandle<Notifier>,
    slot: SharedTimeoutSlot,
}

impl NotifierHandle {
    pub fn message(&self) -> Option<String> {
        self.state.message().map(str::to_string)
    }

    /// Shows `message` and restarts the dismiss countdown.
    pub fn notify(&self, message: impl Into<String>) {
        let state = self.state.clone();
        let token = timer::schedule(&self.slot, config::NOTIFY_DURATION_MS, move |token| {
            state.dispatch(NotifierAction::Expire(token));
        });
        self.state.dispatch(NotifierAction::Show {
            message: message.into(),
            token,
        });
    }

    pub fn dismiss(&self) {
        self.slot.borrow_mut().cancel();
        self.state.dispatch(NotifierAction::Dismiss);
    }
}

#[hook]
pub fn use_notifier() -> NotifierHandle {
    let state = use_reducer(Notifier::default);
    let slot = use_timeout_slot();
    NotifierHandle { state, slot }
}
