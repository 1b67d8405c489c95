use std::rc::Rc;

use shared::Player;
use yew::prelude::*;

/// Which of the two roster screens is showing
#[derive(Debug, Clone, PartialEq)]
pub enum RosterView {
    List(Vec<Player>),
    Detail(Player),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RosterAction {
    /// Fresh start: list view plus a newly rendered creation form
    Initialized(Vec<Player>),
    ShowList(Vec<Player>),
    ShowDetail(Player),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RosterState {
    pub view: RosterView,
    /// Keys the creation form; bumping it discards whatever was typed
    pub form_epoch: u32,
}

impl Default for RosterState {
    fn default() -> Self {
        Self {
            view: RosterView::List(Vec::new()),
            form_epoch: 0,
        }
    }
}

impl RosterState {
    pub fn apply(&self, action: RosterAction) -> Self {
        match action {
            RosterAction::Initialized(players) => Self {
                view: RosterView::List(players),
                form_epoch: self.form_epoch.wrapping_add(1),
            },
            RosterAction::ShowList(players) => Self {
                view: RosterView::List(players),
                form_epoch: self.form_epoch,
            },
            RosterAction::ShowDetail(player) => Self {
                view: RosterView::Detail(player),
                form_epoch: self.form_epoch,
            },
        }
    }
}

impl Reducible for RosterState {
    type Action = RosterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}
