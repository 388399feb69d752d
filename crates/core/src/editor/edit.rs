//! Pure edit operations on [`SiteContent`].
//!
//! [`apply`] never mutates its input: it returns a new value with exactly
//! one leaf (or one list entry) replaced.

use crate::content::{Feature, SiteContent};
use crate::editor::field::FieldPath;
use crate::error::CoreError;
use crate::media::MediaSlot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Replace one text or URL leaf.
    SetField { path: FieldPath, value: String },
    /// Append a feature with every field empty.
    AddFeature,
    /// Remove the feature at this index; later entries shift down.
    RemoveFeature(usize),
    /// The hosted widget finished an upload into this slot.
    MediaUploaded { slot: MediaSlot, url: String },
}

/// Apply one edit, returning the updated content.
pub fn apply(content: &SiteContent, edit: &Edit) -> Result<SiteContent, CoreError> {
    let mut next = content.clone();

    match edit {
        Edit::SetField { path, value } => set_leaf(&mut next, *path, value)?,
        Edit::AddFeature => next.features.push(Feature::blank()),
        Edit::RemoveFeature(index) => {
            if *index >= next.features.len() {
                return Err(CoreError::Validation(format!(
                    "Feature {index} does not exist ({} features)",
                    next.features.len()
                )));
            }
            next.features.remove(*index);
        }
        Edit::MediaUploaded { slot, url } => set_leaf(&mut next, slot.path(), url)?,
    }

    Ok(next)
}

fn set_leaf(content: &mut SiteContent, path: FieldPath, value: &str) -> Result<(), CoreError> {
    let slot = path
        .get_mut(content)
        .ok_or_else(|| CoreError::Validation(format!("Field '{path}' does not exist")))?;
    *slot = value.to_string();
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::content::default_content;
    use crate::editor::field::{CardField, HeroField, StatField};

    #[test]
    fn test_add_feature_appends_blank_entry() {
        let before = default_content();
        let after = apply(&before, &Edit::AddFeature).unwrap();

        assert_eq!(after.features.len(), before.features.len() + 1);
        let added = after.features.last().unwrap();
        assert_eq!(added.title, "");
        assert_eq!(added.description, "");
        assert_eq!(added.image, "");
        assert_eq!(before.features.len(), 2, "input must not change");
    }

    #[test]
    fn test_remove_feature_shifts_later_entries() {
        let mut content = default_content();
        content.features.push(Feature {
            title: "Third".into(),
            ..Feature::blank()
        });

        let after = apply(&content, &Edit::RemoveFeature(0)).unwrap();

        assert_eq!(after.features.len(), 2);
        assert_eq!(after.features[0].title, "World-Class Amenities");
        assert_eq!(after.features[1].title, "Third");
    }

    #[test]
    fn test_remove_feature_out_of_range() {
        let result = apply(&default_content(), &Edit::RemoveFeature(2));
        assert_matches!(result, Err(CoreError::Validation(_)));
    }

    #[test]
    fn test_stat_value_edit_leaves_everything_else() {
        let before = default_content();
        let edit = Edit::SetField {
            path: FieldPath::Stat { index: 1, field: StatField::Value },
            value: "250".into(),
        };
        let after = apply(&before, &edit).unwrap();

        assert_eq!(after.about.stats[1].value, "250");
        assert_eq!(after.about.stats[1].label, before.about.stats[1].label);
        assert_eq!(after.about.stats[0], before.about.stats[0]);
        assert_eq!(after.about.stats[2], before.about.stats[2]);
        assert_eq!(after.about.stats[3], before.about.stats[3]);
        assert_eq!(after.hero, before.hero);
    }

    #[test]
    fn test_set_field_out_of_range() {
        let edit = Edit::SetField {
            path: FieldPath::Parallax { index: 5, field: CardField::Title },
            value: "x".into(),
        };
        assert_matches!(apply(&default_content(), &edit), Err(CoreError::Validation(_)));
    }

    #[test]
    fn test_media_upload_writes_url() {
        let slot = MediaSlot::new(FieldPath::Hero(HeroField::BackgroundVideo)).unwrap();
        let edit = Edit::MediaUploaded {
            slot,
            url: "https://res.example.com/video/upload/v1/intro.webm".into(),
        };
        let after = apply(&default_content(), &edit).unwrap();
        assert_eq!(
            after.hero.background_video,
            "https://res.example.com/video/upload/v1/intro.webm"
        );
    }
}
