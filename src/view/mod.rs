//! Navigation state, the rendered document and the controller tying them together.

pub mod controller;
pub mod document;
pub mod event;
pub mod state;

pub use controller::{Applied, Controller};
pub use document::{Document, Region};
pub use event::{Command, Event};
pub use state::{transition, NavigationState, Page};
