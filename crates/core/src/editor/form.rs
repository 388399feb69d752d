//! Round-tripping editor state through an HTML form.
//!
//! The admin page keeps no server-side session: every input is named by its
//! [`FieldPath`], so a submission carries the complete local content back,
//! together with the active tab and the button that was pressed.

use crate::content::SiteContent;
use crate::editor::edit::Edit;
use crate::editor::field::FieldPath;
use crate::editor::Tab;
use crate::error::CoreError;
use crate::media::MediaSlot;

pub const ACTION_FIELD: &str = "action";
pub const TAB_FIELD: &str = "tab";
pub const UPLOAD_SLOT_FIELD: &str = "upload_slot";
pub const UPLOAD_URL_FIELD: &str = "upload_url";

/// Action value posted by the upload widget callback.
pub const UPLOAD_ACTION: &str = "upload";

/// What a form submission asks the editor to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    /// No button value (e.g. Enter pressed in a field): just show the form again.
    Redisplay,
    Save,
    SwitchTab(Tab),
    Edit(Edit),
}

impl FormAction {
    /// Parse the `action` value. Upload actions also need the slot and URL
    /// written by the widget callback.
    pub fn parse(
        raw: &str,
        upload_slot: Option<&str>,
        upload_url: Option<&str>,
    ) -> Result<Self, CoreError> {
        if let Some(tab) = raw.strip_prefix("tab:") {
            return Ok(FormAction::SwitchTab(tab.parse()?));
        }
        if let Some(index) = raw.strip_prefix("remove-feature:") {
            let index = index.parse().map_err(|_| {
                CoreError::Validation(format!("Invalid feature index in action '{raw}'"))
            })?;
            return Ok(FormAction::Edit(Edit::RemoveFeature(index)));
        }

        match raw {
            "save" => Ok(FormAction::Save),
            "add-feature" => Ok(FormAction::Edit(Edit::AddFeature)),
            UPLOAD_ACTION => {
                let slot = upload_slot
                    .filter(|s| !s.is_empty())
                    .ok_or_else(|| CoreError::Validation("Upload is missing its slot".into()))?;
                let url = upload_url
                    .filter(|u| !u.is_empty())
                    .ok_or_else(|| CoreError::Validation("Upload is missing its URL".into()))?;
                Ok(FormAction::Edit(Edit::MediaUploaded {
                    slot: MediaSlot::new(slot.parse()?)?,
                    url: url.to_string(),
                }))
            }
            other => Err(CoreError::Validation(format!("Unknown editor action '{other}'"))),
        }
    }

    /// Button value that submits this action.
    pub fn button_value(&self) -> String {
        match self {
            FormAction::Redisplay => String::new(),
            FormAction::Save => "save".into(),
            FormAction::SwitchTab(tab) => format!("tab:{tab}"),
            FormAction::Edit(Edit::AddFeature) => "add-feature".into(),
            FormAction::Edit(Edit::RemoveFeature(index)) => format!("remove-feature:{index}"),
            FormAction::Edit(Edit::MediaUploaded { .. }) => UPLOAD_ACTION.into(),
            // Field edits travel as input values, never as a button.
            FormAction::Edit(Edit::SetField { .. }) => String::new(),
        }
    }
}

/// A decoded editor form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorForm {
    pub content: SiteContent,
    pub tab: Tab,
    pub action: FormAction,
}

impl EditorForm {
    /// Rebuild the editor state from urlencoded `name=value` pairs.
    ///
    /// Content starts empty and every named leaf is filled in; indexed
    /// leaves grow their list as needed. Unknown names are rejected.
    pub fn decode(pairs: &[(String, String)]) -> Result<Self, CoreError> {
        let mut content = SiteContent::default();
        let mut tab = Tab::default();
        let mut action = None;
        let mut upload_slot = None;
        let mut upload_url = None;

        for (name, value) in pairs {
            match name.as_str() {
                ACTION_FIELD => action = Some(value.as_str()),
                TAB_FIELD => tab = value.parse()?,
                UPLOAD_SLOT_FIELD => upload_slot = Some(value.as_str()),
                UPLOAD_URL_FIELD => upload_url = Some(value.as_str()),
                other => {
                    let path: FieldPath = other.parse()?;
                    path.ensure_slot(&mut content);
                    if let Some(leaf) = path.get_mut(&mut content) {
                        *leaf = value.clone();
                    }
                }
            }
        }

        let action = match action {
            Some(raw) if !raw.is_empty() => FormAction::parse(raw, upload_slot, upload_url)?,
            _ => FormAction::Redisplay,
        };

        Ok(Self {
            content,
            tab,
            action,
        })
    }
}

/// Every leaf of `content` as `(input name, value)` pairs.
pub fn encode(content: &SiteContent) -> Vec<(String, String)> {
    FieldPath::all_for(content)
        .into_iter()
        .filter_map(|path| {
            path.get(content)
                .map(|value| (path.to_string(), value.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::content::default_content;
    use crate::editor::field::{CardField, HeroField, StatField};

    fn pair(name: &str, value: &str) -> (String, String) {
        (name.to_string(), value.to_string())
    }

    #[test]
    fn test_decode_restores_encoded_content() {
        let content = default_content();
        let mut pairs = encode(&content);
        pairs.push(pair(TAB_FIELD, "about"));

        let form = EditorForm::decode(&pairs).unwrap();
        assert_eq!(form.content, content);
        assert_eq!(form.tab, Tab::About);
        assert_eq!(form.action, FormAction::Redisplay);
    }

    #[test]
    fn test_decode_grows_lists_from_indices() {
        let pairs = vec![
            pair("about.stats.1.label", "FLOORS"),
            pair("features.0.title", "Pool"),
        ];
        let form = EditorForm::decode(&pairs).unwrap();

        assert_eq!(form.content.about.stats.len(), 2);
        assert_eq!(form.content.about.stats[0].value, "");
        assert_eq!(form.content.about.stats[1].label, "FLOORS");
        assert_eq!(form.content.features.len(), 1);
        assert_eq!(form.content.features[0].title, "Pool");
    }

    #[test]
    fn test_decode_rejects_unknown_names() {
        let pairs = vec![pair("hero.colour", "red")];
        assert_matches!(EditorForm::decode(&pairs), Err(CoreError::Validation(_)));
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!(FormAction::parse("save", None, None).unwrap(), FormAction::Save);
        assert_eq!(
            FormAction::parse("tab:footer", None, None).unwrap(),
            FormAction::SwitchTab(Tab::Footer)
        );
        assert_eq!(
            FormAction::parse("add-feature", None, None).unwrap(),
            FormAction::Edit(Edit::AddFeature)
        );
        assert_eq!(
            FormAction::parse("remove-feature:3", None, None).unwrap(),
            FormAction::Edit(Edit::RemoveFeature(3))
        );
        assert_matches!(
            FormAction::parse("remove-feature:x", None, None),
            Err(CoreError::Validation(_))
        );
        assert_matches!(FormAction::parse("publish", None, None), Err(CoreError::Validation(_)));
    }

    #[test]
    fn test_parse_upload_action() {
        let action = FormAction::parse(
            "upload",
            Some("features.1.image"),
            Some("https://res.example.com/f.jpg"),
        )
        .unwrap();

        let expected_slot =
            MediaSlot::new(FieldPath::Feature { index: 1, field: CardField::Image }).unwrap();
        assert_eq!(
            action,
            FormAction::Edit(Edit::MediaUploaded {
                slot: expected_slot,
                url: "https://res.example.com/f.jpg".into(),
            })
        );
    }

    #[test]
    fn test_upload_requires_media_slot_and_url() {
        assert_matches!(
            FormAction::parse("upload", Some("hero.title"), Some("https://x")),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            FormAction::parse("upload", Some("hero.backgroundImage"), Some("")),
            Err(CoreError::Validation(_))
        );
        assert_matches!(
            FormAction::parse("upload", None, Some("https://x")),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn test_button_values_parse_back() {
        let actions = [
            FormAction::Save,
            FormAction::SwitchTab(Tab::Parallax),
            FormAction::Edit(Edit::AddFeature),
            FormAction::Edit(Edit::RemoveFeature(4)),
        ];
        for action in actions {
            assert_eq!(FormAction::parse(&action.button_value(), None, None).unwrap(), action);
        }
    }

    #[test]
    fn test_encode_names_leaves_by_path() {
        let pairs = encode(&default_content());
        let title = pairs
            .iter()
            .find(|(name, _)| name == &FieldPath::Hero(HeroField::Title).to_string())
            .unwrap();
        assert_eq!(title.1, "LUXURY LIVING REDEFINED");

        let stat = FieldPath::Stat { index: 3, field: StatField::Value }.to_string();
        assert!(pairs.iter().any(|(name, value)| name == &stat && value == "24/7"));
    }
}
