//! Server-rendered HTML, built with maud.

pub mod admin;
pub mod href;
pub mod layout;
pub mod site;
