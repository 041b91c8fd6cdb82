pub mod terminal;

pub use terminal::{TerminalRenderer, format_screen};
