//! Host board support for the tasbih counter: JSON file storage, terminal
//! input and output, and the system clock and capability backends.

pub mod input;
pub mod platform;
pub mod render;
pub mod storage;
