//! Bypass core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, Outcome, PageMetadata, Phase, Resolution};
pub use update::update;
pub use view_model::{AppViewModel, ResultView, SUBMIT_BUSY_LABEL, SUBMIT_LABEL};
