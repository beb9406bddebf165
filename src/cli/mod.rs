//! Console controller
//!
//! Bridges user input on the terminal with the directory layer.

pub mod menu;
pub mod prompt;

pub use menu::MenuSession;
pub use prompt::Prompter;
