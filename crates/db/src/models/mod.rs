//! Database row structs.

pub mod content;
