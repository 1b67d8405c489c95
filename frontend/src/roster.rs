pub mod flows;
pub mod state;

pub use state::{RosterAction, RosterState, RosterView};
