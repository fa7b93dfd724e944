use std::rc::Rc;

use yew::Reducible;

use crate::timer::TaskToken;

#[derive(Clone, Debug, PartialEq)]
struct Notice {
    message: String,
    token: TaskToken,
}

/// At most one transient message. A newer message replaces the current one;
/// nothing is queued.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notifier {
    current: Option<Notice>,
}

pub enum NotifierAction {
    Show { message: String, token: TaskToken },
    Expire(TaskToken),
    Dismiss,
}

impl Notifier {
    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|notice| notice.message.as_str())
    }

    pub fn show(&mut self, message: String, token: TaskToken) {
        self.current = Some(Notice { message, token });
    }

    /// Clears the message only if it was shown under `token`.
    pub fn expire(&mut self, token: TaskToken) -> bool {
        match &self.current {
            Some(notice) if notice.token == token => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn dismiss(&mut self) -> bool {
        self.current.take().is_some()
    }
}

impl Reducible for Notifier {
    type Action = NotifierAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            NotifierAction::Show { message, token } => {
                next.show(message, token);
                true
            }
            NotifierAction::Expire(token) => next.expire(token),
            NotifierAction::Dismiss => next.dismiss(),
        };

        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}
