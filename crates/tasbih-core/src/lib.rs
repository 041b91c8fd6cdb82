//! Platform-independent core of the tasbih counter.
//!
//! Everything here is host-testable: the board/host crate supplies a
//! [`store::KeyValueStore`], an [`input::InputProvider`] and the optional
//! [`capability`] backends, then drives [`app::TasbihApp::tick`].

pub mod app;
pub mod calendar;
pub mod capability;
pub mod content;
pub mod input;
pub mod language;
pub mod model;
pub mod reminder;
pub mod render;
pub mod settings;
pub mod stats;
pub mod store;
pub mod text_policy;
pub mod tracker;
