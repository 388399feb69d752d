//! The admin editor form.
//!
//! Every tab panel is always rendered so that a submission carries the
//! complete local content; inactive panels are only hidden.

use maud::{html, Markup, PreEscaped};
use vela_core::content::{SiteContent, SocialNetwork};
use vela_core::editor::edit::Edit;
use vela_core::editor::field::{AboutField, CardField, FieldPath, FooterField, HeroField, StatField};
use vela_core::editor::form::{
    FormAction, ACTION_FIELD, TAB_FIELD, UPLOAD_ACTION, UPLOAD_SLOT_FIELD, UPLOAD_URL_FIELD,
};
use vela_core::editor::{EditorSession, Tab};
use vela_core::media::{MediaKind, MediaSlot, UploadTarget};

use crate::views::layout::{self, BRAND};

const WIDGET_SCRIPT_SRC: &str = "https://upload-widget.cloudinary.com/global/all.js";

/// Opens the hosted widget for a clicked upload button and, on success,
/// submits the form with the `upload` action.
const UPLOAD_SCRIPT: &str = r#"
document.querySelectorAll('button.upload[data-upload-options]').forEach(function (button) {
  button.addEventListener('click', function () {
    var options = JSON.parse(button.dataset.uploadOptions);
    var widget = cloudinary.createUploadWidget(options, function (error, result) {
      if (error || !result || result.event !== 'success') return;
      document.getElementById('upload-slot').value = button.dataset.slot;
      document.getElementById('upload-url').value = result.info.secure_url;
      button.form.requestSubmit(document.getElementById('upload-submit'));
    });
    widget.open();
  });
});
"#;

#[derive(Clone, Copy)]
enum Input {
    Line,
    Text,
}

pub fn editor_page(session: &EditorSession, upload: &UploadTarget) -> Markup {
    let content = session.content();
    let active = session.tab();
    let editor = Editor { content, upload };

    layout::page(
        &format!("{BRAND} Editor"),
        "/admin.css",
        html! {
            form.editor method="post" action="/admin" {
                // Default button for implicit submission: no action.
                button hidden tabindex="-1" type="submit" name=(ACTION_FIELD) value="" {}
                input type="hidden" name=(TAB_FIELD) value=(active.as_str());
                input #upload-slot type="hidden" name=(UPLOAD_SLOT_FIELD) value="";
                input #upload-url type="hidden" name=(UPLOAD_URL_FIELD) value="";
                button #upload-submit hidden tabindex="-1" type="submit" name=(ACTION_FIELD) value=(UPLOAD_ACTION) {}

                header.editor-header {
                    h1 { "Content Editor" }
                    div.editor-actions {
                        a.button href="/" { "Go to Site" }
                        button.button.primary type="submit" name=(ACTION_FIELD) value=(FormAction::Save.button_value()) {
                            "Save Changes"
                        }
                    }
                }

                @if let Some(notice) = session.notice() {
                    div.notice.error[notice.is_error()] role="status" { (notice.message()) }
                }

                nav.tabs {
                    @for tab in Tab::ALL {
                        button.tab.active[tab == active] type="submit" name=(ACTION_FIELD)
                            value=(FormAction::SwitchTab(tab).button_value()) {
                            (tab.label())
                        }
                    }
                }

                @for tab in Tab::ALL {
                    section.panel id={ "panel-" (tab.as_str()) } hidden[tab != active] {
                        (editor.panel(tab))
                    }
                }
            }

            @if upload.is_configured() {
                script src=(WIDGET_SCRIPT_SRC) {}
                script { (PreEscaped(UPLOAD_SCRIPT)) }
            }
        },
    )
}

struct Editor<'a> {
    content: &'a SiteContent,
    upload: &'a UploadTarget,
}

impl Editor<'_> {
    fn panel(&self, tab: Tab) -> Markup {
        match tab {
            Tab::Hero => self.hero_panel(),
            Tab::About => self.about_panel(),
            Tab::Parallax => self.parallax_panel(),
            Tab::Features => self.features_panel(),
            Tab::Footer => self.footer_panel(),
        }
    }

    fn hero_panel(&self) -> Markup {
        html! {
            (self.field(FieldPath::Hero(HeroField::Title), "Title", Input::Line))
            (self.field(FieldPath::Hero(HeroField::Subtitle), "Subtitle", Input::Text))
            (self.media(FieldPath::Hero(HeroField::BackgroundImage), "Background Image"))
            (self.media(FieldPath::Hero(HeroField::BackgroundVideo), "Background Video"))
        }
    }

    fn about_panel(&self) -> Markup {
        html! {
            (self.field(FieldPath::About(AboutField::Heading), "Heading", Input::Line))
            (self.field(FieldPath::About(AboutField::Subheading), "Subheading", Input::Line))
            (self.field(FieldPath::About(AboutField::Description), "Description", Input::Text))
            (self.media(FieldPath::About(AboutField::Image), "Image"))
            fieldset.stats {
                legend { "Stats" }
                @for index in 0..self.content.about.stats.len() {
                    div.stat-row {
                        (self.field(FieldPath::Stat { index, field: StatField::Value }, "Value", Input::Line))
                        (self.field(FieldPath::Stat { index, field: StatField::Label }, "Label", Input::Line))
                    }
                }
            }
        }
    }

    fn parallax_panel(&self) -> Markup {
        html! {
            @for index in 0..self.content.parallax_sections.len() {
                fieldset.card {
                    legend { "Section " (index + 1) }
                    (self.field(FieldPath::Parallax { index, field: CardField::Title }, "Title", Input::Line))
                    (self.field(FieldPath::Parallax { index, field: CardField::Description }, "Description", Input::Text))
                    (self.media(FieldPath::Parallax { index, field: CardField::Image }, "Image"))
                }
            }
        }
    }

    fn features_panel(&self) -> Markup {
        html! {
            @for index in 0..self.content.features.len() {
                fieldset.card {
                    legend { "Feature " (index + 1) }
                    button.button.danger type="submit" name=(ACTION_FIELD)
                        value=(FormAction::Edit(Edit::RemoveFeature(index)).button_value()) {
                        "Remove"
                    }
                    (self.field(FieldPath::Feature { index, field: CardField::Title }, "Title", Input::Line))
                    (self.field(FieldPath::Feature { index, field: CardField::Description }, "Description", Input::Text))
                    (self.media(FieldPath::Feature { index, field: CardField::Image }, "Image"))
                }
            }
            button.button type="submit" name=(ACTION_FIELD) value=(FormAction::Edit(Edit::AddFeature).button_value()) {
                "Add Feature"
            }
        }
    }

    fn footer_panel(&self) -> Markup {
        html! {
            (self.media(FieldPath::Footer(FooterField::Logo), "Logo"))
            (self.field(FieldPath::Footer(FooterField::Tagline), "Tagline", Input::Line))
            (self.field(FieldPath::Footer(FooterField::Description), "Description", Input::Text))
            fieldset.social {
                legend { "Social Links" }
                @for network in SocialNetwork::ALL {
                    (self.field(FieldPath::Social(network), network.label(), Input::Line))
                }
            }
        }
    }

    fn field(&self, path: FieldPath, label: &str, kind: Input) -> Markup {
        let name = path.to_string();
        let value = path.get(self.content).unwrap_or_default();
        html! {
            label.field {
                span { (label) }
                @match kind {
                    Input::Line => {
                        input type="text" name=(name) value=(value);
                    }
                    Input::Text => {
                        // Browsers drop one newline right after the start tag.
                        textarea name=(name) rows="4" { "\n" (value) }
                    }
                }
            }
        }
    }

    /// A URL input with an upload button and a preview of the current media.
    fn media(&self, path: FieldPath, label: &str) -> Markup {
        let name = path.to_string();
        let value = path.get(self.content).unwrap_or_default();
        let slot = MediaSlot::new(path).ok();
        let is_video = slot.is_some_and(|s| s.kind() == MediaKind::Video);
        let options = slot
            .and_then(|s| self.upload.widget_options(s))
            .and_then(|o| serde_json::to_string(&o).ok());

        html! {
            div.field.media {
                label {
                    span { (label) }
                    input type="text" name=(name) value=(value);
                }
                button.button.upload type="button" data-slot=(name)
                    data-upload-options=[options.as_deref()] disabled[options.is_none()] {
                    @if is_video { "Upload Video" } @else { "Upload Image" }
                }
                @if !value.is_empty() {
                    @if is_video {
                        video.preview src=(value) controls muted {}
                    } @else {
                        img.preview src=(value) alt=(label);
                    }
                }
            }
        }
    }
}
