//! Field paths: dotted names for every editable leaf of [`SiteContent`].
//!
//! Paths use the same camelCase segments as the stored JSON, e.g.
//! `hero.backgroundImage`, `about.stats.2.label`,
//! `footer.socialLinks.twitter`. The admin form names its inputs with them.

use std::fmt;
use std::str::FromStr;

use crate::content::{SiteContent, SocialNetwork};
use crate::error::CoreError;

/// Upper bound on any list index accepted from a path.
pub const MAX_LIST_LEN: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeroField {
    Title,
    Subtitle,
    BackgroundImage,
    BackgroundVideo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AboutField {
    Heading,
    Subheading,
    Description,
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatField {
    Value,
    Label,
}

/// Leaves shared by parallax sections and features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardField {
    Title,
    Description,
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FooterField {
    Logo,
    Tagline,
    Description,
}

/// Mapping between a leaf enum and its path segment.
trait Segment: Copy + 'static {
    /// Every variant, in form order.
    const ALL: &'static [Self];

    fn segment(self) -> &'static str;

    fn from_segment(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.segment() == s)
    }
}

impl Segment for HeroField {
    const ALL: &'static [Self] = &[
        HeroField::Title,
        HeroField::Subtitle,
        HeroField::BackgroundImage,
        HeroField::BackgroundVideo,
    ];

    fn segment(self) -> &'static str {
        match self {
            HeroField::Title => "title",
            HeroField::Subtitle => "subtitle",
            HeroField::BackgroundImage => "backgroundImage",
            HeroField::BackgroundVideo => "backgroundVideo",
        }
    }
}

impl Segment for AboutField {
    const ALL: &'static [Self] = &[
        AboutField::Heading,
        AboutField::Subheading,
        AboutField::Description,
        AboutField::Image,
    ];

    fn segment(self) -> &'static str {
        match self {
            AboutField::Heading => "heading",
            AboutField::Subheading => "subheading",
            AboutField::Description => "description",
            AboutField::Image => "image",
        }
    }
}

impl Segment for StatField {
    const ALL: &'static [Self] = &[StatField::Value, StatField::Label];

    fn segment(self) -> &'static str {
        match self {
            StatField::Value => "value",
            StatField::Label => "label",
        }
    }
}

impl Segment for CardField {
    const ALL: &'static [Self] = &[CardField::Title, CardField::Description, CardField::Image];

    fn segment(self) -> &'static str {
        match self {
            CardField::Title => "title",
            CardField::Description => "description",
            CardField::Image => "image",
        }
    }
}

impl Segment for FooterField {
    const ALL: &'static [Self] = &[
        FooterField::Logo,
        FooterField::Tagline,
        FooterField::Description,
    ];

    fn segment(self) -> &'static str {
        match self {
            FooterField::Logo => "logo",
            FooterField::Tagline => "tagline",
            FooterField::Description => "description",
        }
    }
}

/// One editable leaf of [`SiteContent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPath {
    Hero(HeroField),
    About(AboutField),
    Stat { index: usize, field: StatField },
    Parallax { index: usize, field: CardField },
    Feature { index: usize, field: CardField },
    Footer(FooterField),
    Social(SocialNetwork),
}

impl FieldPath {
    /// Every leaf path present in `content`, in form order.
    pub fn all_for(content: &SiteContent) -> Vec<FieldPath> {
        let mut paths: Vec<FieldPath> =
            HeroField::ALL.iter().copied().map(FieldPath::Hero).collect();
        paths.extend(AboutField::ALL.iter().copied().map(FieldPath::About));
        for index in 0..content.about.stats.len() {
            paths.extend(
                StatField::ALL
                    .iter()
                    .map(|&field| FieldPath::Stat { index, field }),
            );
        }
        for index in 0..content.parallax_sections.len() {
            paths.extend(
                CardField::ALL
                    .iter()
                    .map(|&field| FieldPath::Parallax { index, field }),
            );
        }
        for index in 0..content.features.len() {
            paths.extend(
                CardField::ALL
                    .iter()
                    .map(|&field| FieldPath::Feature { index, field }),
            );
        }
        paths.extend(FooterField::ALL.iter().copied().map(FieldPath::Footer));
        paths.extend(SocialNetwork::ALL.into_iter().map(FieldPath::Social));
        paths
    }

    /// Whether the leaf holds a media URL filled by the upload widget.
    pub fn is_media(self) -> bool {
        matches!(
            self,
            FieldPath::Hero(HeroField::BackgroundImage | HeroField::BackgroundVideo)
                | FieldPath::About(AboutField::Image)
                | FieldPath::Parallax { field: CardField::Image, .. }
                | FieldPath::Feature { field: CardField::Image, .. }
                | FieldPath::Footer(FooterField::Logo)
        )
    }

    /// Read the leaf. `None` when the index is out of range.
    pub fn get(self, content: &SiteContent) -> Option<&str> {
        let value = match self {
            FieldPath::Hero(field) => {
                let hero = &content.hero;
                match field {
                    HeroField::Title => &hero.title,
                    HeroField::Subtitle => &hero.subtitle,
                    HeroField::BackgroundImage => &hero.background_image,
                    HeroField::BackgroundVideo => &hero.background_video,
                }
            }
            FieldPath::About(field) => {
                let about = &content.about;
                match field {
                    AboutField::Heading => &about.heading,
                    AboutField::Subheading => &about.subheading,
                    AboutField::Description => &about.description,
                    AboutField::Image => &about.image,
                }
            }
            FieldPath::Stat { index, field } => {
                let stat = content.about.stats.get(index)?;
                match field {
                    StatField::Value => &stat.value,
                    StatField::Label => &stat.label,
                }
            }
            FieldPath::Parallax { index, field } => {
                let section = content.parallax_sections.get(index)?;
                match field {
                    CardField::Title => &section.title,
                    CardField::Description => &section.description,
                    CardField::Image => &section.image,
                }
            }
            FieldPath::Feature { index, field } => {
                let feature = content.features.get(index)?;
                match field {
                    CardField::Title => &feature.title,
                    CardField::Description => &feature.description,
                    CardField::Image => &feature.image,
                }
            }
            FieldPath::Footer(field) => {
                let footer = &content.footer;
                match field {
                    FooterField::Logo => &footer.logo,
                    FooterField::Tagline => &footer.tagline,
                    FooterField::Description => &footer.description,
                }
            }
            FieldPath::Social(network) => return Some(content.footer.social_links.get(network)),
        };
        Some(value.as_str())
    }

    /// Mutable access to the leaf. `None` when the index is out of range.
    pub fn get_mut(self, content: &mut SiteContent) -> Option<&mut String> {
        let slot = match self {
            FieldPath::Hero(field) => {
                let hero = &mut content.hero;
                match field {
                    HeroField::Title => &mut hero.title,
                    HeroField::Subtitle => &mut hero.subtitle,
                    HeroField::BackgroundImage => &mut hero.background_image,
                    HeroField::BackgroundVideo => &mut hero.background_video,
                }
            }
            FieldPath::About(field) => {
                let about = &mut content.about;
                match field {
                    AboutField::Heading => &mut about.heading,
                    AboutField::Subheading => &mut about.subheading,
                    AboutField::Description => &mut about.description,
                    AboutField::Image => &mut about.image,
                }
            }
            FieldPath::Stat { index, field } => {
                let stat = content.about.stats.get_mut(index)?;
                match field {
                    StatField::Value => &mut stat.value,
                    StatField::Label => &mut stat.label,
                }
            }
            FieldPath::Parallax { index, field } => {
                let section = content.parallax_sections.get_mut(index)?;
                match field {
                    CardField::Title => &mut section.title,
                    CardField::Description => &mut section.description,
                    CardField::Image => &mut section.image,
                }
            }
            FieldPath::Feature { index, field } => {
                let feature = content.features.get_mut(index)?;
                match field {
                    CardField::Title => &mut feature.title,
                    CardField::Description => &mut feature.description,
                    CardField::Image => &mut feature.image,
                }
            }
            FieldPath::Footer(field) => {
                let footer = &mut content.footer;
                match field {
                    FooterField::Logo => &mut footer.logo,
                    FooterField::Tagline => &mut footer.tagline,
                    FooterField::Description => &mut footer.description,
                }
            }
            FieldPath::Social(network) => content.footer.social_links.get_mut(network),
        };
        Some(slot)
    }

    /// Grow the list this path points into so that its index exists.
    ///
    /// Used when rebuilding content from form fields, where entries arrive
    /// one leaf at a time.
    pub fn ensure_slot(self, content: &mut SiteContent) {
        match self {
            FieldPath::Stat { index, .. } => grow(&mut content.about.stats, index),
            FieldPath::Parallax { index, .. } => grow(&mut content.parallax_sections, index),
            FieldPath::Feature { index, .. } => grow(&mut content.features, index),
            _ => {}
        }
    }
}

fn grow<T: Default>(list: &mut Vec<T>, index: usize) {
    if list.len() <= index {
        list.resize_with(index + 1, T::default);
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldPath::Hero(field) => write!(f, "hero.{}", field.segment()),
            FieldPath::About(field) => write!(f, "about.{}", field.segment()),
            FieldPath::Stat { index, field } => {
                write!(f, "about.stats.{index}.{}", field.segment())
            }
            FieldPath::Parallax { index, field } => {
                write!(f, "parallaxSections.{index}.{}", field.segment())
            }
            FieldPath::Feature { index, field } => {
                write!(f, "features.{index}.{}", field.segment())
            }
            FieldPath::Footer(field) => write!(f, "footer.{}", field.segment()),
            FieldPath::Social(network) => write!(f, "footer.socialLinks.{}", network.as_str()),
        }
    }
}

impl FromStr for FieldPath {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s.split('.').collect();
        let parsed = match segments.as_slice() {
            ["hero", leaf] => HeroField::from_segment(leaf).map(FieldPath::Hero),
            ["about", "stats", index, leaf] => {
                let index = parse_index(index, s)?;
                StatField::from_segment(leaf).map(|field| FieldPath::Stat { index, field })
            }
            ["about", leaf] => AboutField::from_segment(leaf).map(FieldPath::About),
            ["parallaxSections", index, leaf] => {
                let index = parse_index(index, s)?;
                CardField::from_segment(leaf).map(|field| FieldPath::Parallax { index, field })
            }
            ["features", index, leaf] => {
                let index = parse_index(index, s)?;
                CardField::from_segment(leaf).map(|field| FieldPath::Feature { index, field })
            }
            ["footer", "socialLinks", network] => {
                SocialNetwork::parse(network).map(FieldPath::Social)
            }
            ["footer", leaf] => FooterField::from_segment(leaf).map(FieldPath::Footer),
            _ => None,
        };

        parsed.ok_or_else(|| CoreError::Validation(format!("Unknown field path '{s}'")))
    }
}

fn parse_index(segment: &str, path: &str) -> Result<usize, CoreError> {
    let index: usize = segment
        .parse()
        .map_err(|_| CoreError::Validation(format!("Invalid list index in field path '{path}'")))?;
    if index >= MAX_LIST_LEN {
        return Err(CoreError::Validation(format!(
            "List index {index} in '{path}' exceeds the maximum of {}",
            MAX_LIST_LEN - 1
        )));
    }
    Ok(index)
}
