//! Custom widgets for game display

mod dialog;
mod menu;
mod round;

pub use dialog::{OutcomeDialog, OutcomeWidget};
pub use menu::{MenuEntry, MenuWidget};
pub use round::RoundWidget;
