//! Media upload slots and hosted-widget options.
//!
//! Uploads happen entirely in the hosted widget. This module only decides
//! which leaves accept media, what the widget is allowed to upload into
//! each of them, and where it uploads to.

use serde::Serialize;

use crate::editor::field::{FieldPath, HeroField};
use crate::error::CoreError;

/// Formats the widget accepts for video slots.
pub const VIDEO_FORMATS: &[&str] = &["mp4", "mov", "webm"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// A content leaf that holds a hosted media URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaSlot(FieldPath);

impl MediaSlot {
    /// Wrap a field path, rejecting leaves that are not media.
    pub fn new(path: FieldPath) -> Result<Self, CoreError> {
        if path.is_media() {
            Ok(Self(path))
        } else {
            Err(CoreError::Validation(format!(
                "Field '{path}' does not accept media uploads"
            )))
        }
    }

    pub fn path(self) -> FieldPath {
        self.0
    }

    pub fn kind(self) -> MediaKind {
        match self.0 {
            FieldPath::Hero(HeroField::BackgroundVideo) => MediaKind::Video,
            _ => MediaKind::Image,
        }
    }
}

/// Where the hosted widget uploads to.
///
/// `upload_preset` is the upload-destination identifier; without it the
/// widget cannot be opened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadTarget {
    pub cloud_name: Option<String>,
    pub upload_preset: Option<String>,
}

impl UploadTarget {
    pub fn is_configured(&self) -> bool {
        self.cloud_name.is_some() && self.upload_preset.is_some()
    }

    /// Widget options for one slot, or `None` when no destination is set.
    pub fn widget_options(&self, slot: MediaSlot) -> Option<UploadWidgetOptions> {
        let cloud_name = self.cloud_name.clone()?;
        let upload_preset = self.upload_preset.clone()?;

        let options = match slot.kind() {
            MediaKind::Image => UploadWidgetOptions {
                cloud_name,
                upload_preset,
                resource_type: None,
                sources: None,
                max_files: None,
                client_allowed_formats: None,
            },
            MediaKind::Video => UploadWidgetOptions {
                cloud_name,
                upload_preset,
                resource_type: Some("video"),
                sources: Some(vec!["local"]),
                max_files: Some(1),
                client_allowed_formats: Some(VIDEO_FORMATS.to_vec()),
            },
        };
        Some(options)
    }
}

/// Options object handed to the hosted upload widget, serialized as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadWidgetOptions {
    pub cloud_name: String,
    pub upload_preset: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_files: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_allowed_formats: Option<Vec<&'static str>>,
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::editor::field::{CardField, FooterField};

    fn target() -> UploadTarget {
        UploadTarget {
            cloud_name: Some("vela".into()),
            upload_preset: Some("landing".into()),
        }
    }

    #[test]
    fn test_slot_rejects_text_leaves() {
        let title = FieldPath::Hero(HeroField::Title);
        assert_matches!(MediaSlot::new(title), Err(CoreError::Validation(_)));
    }

    #[test]
    fn test_slot_kinds() {
        let video = MediaSlot::new(FieldPath::Hero(HeroField::BackgroundVideo)).unwrap();
        let logo = MediaSlot::new(FieldPath::Footer(FooterField::Logo)).unwrap();
        assert_eq!(video.kind(), MediaKind::Video);
        assert_eq!(logo.kind(), MediaKind::Image);
    }

    #[test]
    fn test_image_options_are_minimal() {
        let slot =
            MediaSlot::new(FieldPath::Feature { index: 0, field: CardField::Image }).unwrap();
        let json = serde_json::to_value(target().widget_options(slot).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "cloudName": "vela", "uploadPreset": "landing" })
        );
    }

    #[test]
    fn test_video_options_restrict_formats() {
        let slot = MediaSlot::new(FieldPath::Hero(HeroField::BackgroundVideo)).unwrap();
        let json = serde_json::to_value(target().widget_options(slot).unwrap()).unwrap();
        assert_eq!(json["resourceType"], "video");
        assert_eq!(json["sources"], serde_json::json!(["local"]));
        assert_eq!(json["maxFiles"], 1);
        assert_eq!(json["clientAllowedFormats"], serde_json::json!(["mp4", "mov", "webm"]));
    }

    #[test]
    fn test_unconfigured_target_has_no_options() {
        let slot = MediaSlot::new(FieldPath::Footer(FooterField::Logo)).unwrap();
        let partial = UploadTarget {
            cloud_name: Some("vela".into()),
            upload_preset: None,
        };
        assert!(!partial.is_configured());
        assert!(partial.widget_options(slot).is_none());
        assert!(UploadTarget::default().widget_options(slot).is_none());
    }
}
