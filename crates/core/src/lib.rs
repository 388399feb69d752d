//! Domain layer for the VELA landing page.
//!
//! Holds the site content model, its hardcoded defaults, the stored
//! document shape, and the editor state machine. Nothing in here performs
//! I/O; the db and api crates do that.

pub mod content;
pub mod document;
pub mod editor;
pub mod error;
pub mod media;
pub mod types;
