pub mod terminal;

pub use terminal::{HELP, TerminalInput, TerminalInputError, parse_command};
