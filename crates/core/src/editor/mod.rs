//! Admin editor state machine.
//!
//! ```text
//! Loading --loaded/load_failed--> Ready --apply--> Editing --apply--> Editing
//!                                   |                 |
//!                                   +---begin_save----+--> Saving
//! Saving --save_succeeded/save_failed--> Ready
//! ```
//!
//! The session owns one [`SiteContent`] value. Edits replace it with a new
//! value built by [`edit::apply`]; nothing is written anywhere until the
//! caller takes the payload from [`EditorSession::begin_save`].

pub mod edit;
pub mod field;
pub mod form;

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::content::{default_content, merge_over_defaults, SiteContent};
use crate::error::CoreError;

pub use edit::Edit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    Loading,
    Ready,
    Editing,
    Saving,
}

/// Editor tabs, one per page section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Hero,
    About,
    Parallax,
    Features,
    Footer,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Hero, Tab::About, Tab::Parallax, Tab::Features, Tab::Footer];

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Hero => "hero",
            Tab::About => "about",
            Tab::Parallax => "parallax",
            Tab::Features => "features",
            Tab::Footer => "footer",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Hero => "Hero",
            Tab::About => "About",
            Tab::Parallax => "Parallax",
            Tab::Features => "Features",
            Tab::Footer => "Footer",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("Unknown editor tab '{s}'")))
    }
}

/// Transient message shown after a load or save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Saved,
    SaveFailed,
    LoadFailed,
}

impl Notice {
    pub fn message(self) -> &'static str {
        match self {
            Notice::Saved => "Content saved successfully!",
            Notice::SaveFailed => "Failed to save content. Please try again.",
            Notice::LoadFailed => "Failed to fetch content. Using default content.",
        }
    }

    pub fn is_error(self) -> bool {
        !matches!(self, Notice::Saved)
    }
}

#[derive(Debug, Clone)]
pub struct EditorSession {
    phase: EditorPhase,
    content: SiteContent,
    tab: Tab,
    notice: Option<Notice>,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::start()
    }
}

impl EditorSession {
    /// A fresh session waiting for the stored document.
    pub fn start() -> Self {
        Self {
            phase: EditorPhase::Loading,
            content: default_content(),
            tab: Tab::default(),
            notice: None,
        }
    }

    /// Pick up a session whose local content came back from the client.
    pub fn resume(content: SiteContent, tab: Tab) -> Self {
        Self {
            phase: EditorPhase::Ready,
            content,
            tab,
            notice: None,
        }
    }

    pub fn phase(&self) -> EditorPhase {
        self.phase
    }

    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// The stored document arrived (`None` when nothing is stored yet).
    ///
    /// A malformed document is returned as an error and leaves the session
    /// in `Loading`, so the caller can follow up with [`Self::load_failed`].
    pub fn loaded(&mut self, document: Option<&Value>) -> Result<(), CoreError> {
        self.expect(&[EditorPhase::Loading], "load content")?;
        self.content = match document {
            Some(doc) => merge_over_defaults(doc)?,
            None => default_content(),
        };
        self.phase = EditorPhase::Ready;
        Ok(())
    }

    /// The fetch failed; continue with defaults and tell the operator.
    pub fn load_failed(&mut self) -> Result<(), CoreError> {
        self.expect(&[EditorPhase::Loading], "fail loading")?;
        self.content = default_content();
        self.notice = Some(Notice::LoadFailed);
        self.phase = EditorPhase::Ready;
        Ok(())
    }

    /// Apply one edit to the local content.
    pub fn apply(&mut self, edit: &Edit) -> Result<(), CoreError> {
        self.expect(&[EditorPhase::Ready, EditorPhase::Editing], "edit")?;
        self.content = edit::apply(&self.content, edit)?;
        self.notice = None;
        self.phase = EditorPhase::Editing;
        Ok(())
    }

    pub fn switch_tab(&mut self, tab: Tab) -> Result<(), CoreError> {
        self.expect(&[EditorPhase::Ready, EditorPhase::Editing], "switch tab")?;
        self.tab = tab;
        Ok(())
    }

    /// Enter `Saving` and hand out the full local content as the payload.
    pub fn begin_save(&mut self) -> Result<SiteContent, CoreError> {
        self.expect(&[EditorPhase::Ready, EditorPhase::Editing], "save")?;
        self.notice = None;
        self.phase = EditorPhase::Saving;
        Ok(self.content.clone())
    }

    pub fn save_succeeded(&mut self) -> Result<(), CoreError> {
        self.expect(&[EditorPhase::Saving], "finish saving")?;
        self.notice = Some(Notice::Saved);
        self.phase = EditorPhase::Ready;
        Ok(())
    }

    /// The save failed. Local edits are kept so the operator can retry.
    pub fn save_failed(&mut self) -> Result<(), CoreError> {
        self.expect(&[EditorPhase::Saving], "fail saving")?;
        self.notice = Some(Notice::SaveFailed);
        self.phase = EditorPhase::Ready;
        Ok(())
    }

    fn expect(&self, allowed: &[EditorPhase], action: &str) -> Result<(), CoreError> {
        if allowed.contains(&self.phase) {
            Ok(())
        } else {
            Err(CoreError::InvalidTransition(format!(
                "cannot {action} while {:?}",
                self.phase
            )))
        }
    }
}
