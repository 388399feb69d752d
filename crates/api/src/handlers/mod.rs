//! Request handlers.
//!
//! `content` serves the JSON API; `site` and `admin` render HTML pages from
//! the same stored document.

pub mod admin;
pub mod content;
pub mod site;
