pub mod menu;
pub mod reveal;
pub mod scroll;

pub use menu::MenuState;
pub use reveal::{Entrance, RevealState};
pub use scroll::{HeaderTone, ScrollState};
