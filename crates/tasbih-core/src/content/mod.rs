//! Static content catalogs: built-in packages, duas, quotes and completion messages.
//!
//! Every lookup is a pure function of [`Language`](crate::language::Language);
//! random selection takes the caller's RNG so it stays reproducible in tests.

pub mod duas;
pub mod presets;
pub mod quotes;

pub use duas::{DuaItem, DuaPart, find_dua, list_duas};
pub use presets::{default_package, default_package_id, find_package, list_packages};
pub use quotes::{Quote, random_motivation, random_quote};
