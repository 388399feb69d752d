//! Site content model and its hardcoded defaults.
//!
//! [`SiteContent`] is the whole editable landing page. The JSON shape uses
//! camelCase keys, matching the documents the `/api/content` endpoint
//! accepts and returns.
//!
//! Every loader goes through [`merge_over_defaults`]: the stored document is
//! deep-merged over [`default_content`] section by section, so a partially
//! filled document never produces a half-empty page.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Model
// ---------------------------------------------------------------------------

/// All editable landing-page content.
///
/// `Default` is the *empty* content (empty strings, empty lists). The
/// hardcoded page content lives in [`default_content`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteContent {
    pub hero: HeroSection,
    pub about: AboutSection,
    pub parallax_sections: Vec<ParallaxSection>,
    pub features: Vec<Feature>,
    pub footer: FooterSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroSection {
    pub title: String,
    pub subtitle: String,
    pub background_image: String,
    /// Optional; empty means "no video".
    pub background_video: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AboutSection {
    pub heading: String,
    pub subheading: String,
    pub description: String,
    pub image: String,
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxSection {
    pub image: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feature {
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterSection {
    pub logo: String,
    pub tagline: String,
    pub description: String,
    pub social_links: SocialLinks,
}

/// Footer social links. Each one is optional; empty means "not shown".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub facebook: String,
    pub instagram: String,
    pub linkedin: String,
    pub twitter: String,
}

/// The social networks the footer knows about, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialNetwork {
    Facebook,
    Instagram,
    Linkedin,
    Twitter,
}

impl SocialNetwork {
    pub const ALL: [SocialNetwork; 4] = [
        SocialNetwork::Facebook,
        SocialNetwork::Instagram,
        SocialNetwork::Linkedin,
        SocialNetwork::Twitter,
    ];

    /// JSON key and field-path segment.
    pub fn as_str(self) -> &'static str {
        match self {
            SocialNetwork::Facebook => "facebook",
            SocialNetwork::Instagram => "instagram",
            SocialNetwork::Linkedin => "linkedin",
            SocialNetwork::Twitter => "twitter",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SocialNetwork::Facebook => "Facebook",
            SocialNetwork::Instagram => "Instagram",
            SocialNetwork::Linkedin => "LinkedIn",
            SocialNetwork::Twitter => "Twitter",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.as_str() == s)
    }
}

impl SocialLinks {
    pub fn get(&self, network: SocialNetwork) -> &str {
        match network {
            SocialNetwork::Facebook => &self.facebook,
            SocialNetwork::Instagram => &self.instagram,
            SocialNetwork::Linkedin => &self.linkedin,
            SocialNetwork::Twitter => &self.twitter,
        }
    }

    pub fn get_mut(&mut self, network: SocialNetwork) -> &mut String {
        match network {
            SocialNetwork::Facebook => &mut self.facebook,
            SocialNetwork::Instagram => &mut self.instagram,
            SocialNetwork::Linkedin => &mut self.linkedin,
            SocialNetwork::Twitter => &mut self.twitter,
        }
    }

    /// Non-empty links in display order.
    pub fn present(&self) -> impl Iterator<Item = (SocialNetwork, &str)> + '_ {
        SocialNetwork::ALL
            .into_iter()
            .map(move |n| (n, self.get(n)))
            .filter(|(_, url)| !url.is_empty())
    }
}

impl FooterSection {
    /// Footer with empty logo, tagline, and description replaced by the
    /// default footer's values. Social links are left as they are.
    pub fn with_fallbacks(&self) -> FooterSection {
        let defaults = default_content().footer;
        let pick = |value: &str, fallback: String| {
            if value.is_empty() {
                fallback
            } else {
                value.to_string()
            }
        };

        FooterSection {
            logo: pick(&self.logo, defaults.logo),
            tagline: pick(&self.tagline, defaults.tagline),
            description: pick(&self.description, defaults.description),
            social_links: self.social_links.clone(),
        }
    }
}

impl Feature {
    /// A new feature entry with every field empty.
    pub fn blank() -> Self {
        Self::default()
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Title shown in the hero when nothing else is available.
pub const DEFAULT_HERO_TITLE: &str = "LUXURY LIVING REDEFINED";

const DEFAULT_DESCRIPTION: &str = "Nestled in the most prestigious location, our development stands \
     as a testament to architectural excellence and luxurious living.";

/// The hardcoded page content served before anything has been saved.
pub fn default_content() -> SiteContent {
    SiteContent {
        hero: HeroSection {
            title: DEFAULT_HERO_TITLE.into(),
            subtitle: "Experience the epitome of sophistication in the heart of the city".into(),
            background_image: "/default-hero.jpg".into(),
            background_video: "/intro_video.mp4".into(),
        },
        about: AboutSection {
            heading: "A LEGACY OF LUXURY".into(),
            subheading: "Creating Timeless Experiences".into(),
            description: DEFAULT_DESCRIPTION.into(),
            image: "/about.jpg".into(),
            stats: vec![
                stat("45+", "FLOORS"),
                stat("200", "RESIDENCES"),
                stat("5★", "AMENITIES"),
                stat("24/7", "CONCIERGE"),
            ],
        },
        parallax_sections: vec![
            ParallaxSection {
                image: "/parallax1.jpg".into(),
                title: "LUXURIOUS INTERIORS".into(),
                description: "Step into a world where every detail has been meticulously \
                     crafted to create an atmosphere of unparalleled luxury and sophistication."
                    .into(),
            },
            ParallaxSection {
                image: "/parallax2.jpg".into(),
                title: "PANORAMIC VIEWS".into(),
                description: "Experience breathtaking vistas that stretch as far as the eye \
                     can see, offering a daily reminder of the extraordinary life that awaits."
                    .into(),
            },
        ],
        features: vec![
            Feature {
                title: "Luxurious Living Spaces".into(),
                description: "Experience the epitome of comfort and style in our meticulously \
                     designed living spaces."
                    .into(),
                image: "/feature1.jpg".into(),
            },
            Feature {
                title: "World-Class Amenities".into(),
                description: "Indulge in our extensive range of amenities, from \
                     state-of-the-art fitness centers to serene spa facilities."
                    .into(),
                image: "/feature2.jpg".into(),
            },
        ],
        footer: FooterSection {
            logo: "/logo.png".into(),
            tagline: "Experience Luxury Living".into(),
            description: DEFAULT_DESCRIPTION.into(),
            social_links: SocialLinks {
                facebook: "https://facebook.com/luxuryliving".into(),
                instagram: "https://instagram.com/luxuryliving".into(),
                linkedin: "https://linkedin.com/company/luxuryliving".into(),
                twitter: "https://twitter.com/luxuryliving".into(),
            },
        },
    }
}

fn stat(value: &str, label: &str) -> Stat {
    Stat {
        value: value.into(),
        label: label.into(),
    }
}

// ---------------------------------------------------------------------------
// Merge
// ---------------------------------------------------------------------------

/// Deep-merge a stored document over [`default_content`].
///
/// Objects merge key by key; a present, non-null stored value wins. Arrays
/// and scalars replace the default wholesale. Keys the model does not know
/// (such as `_id`) are ignored.
///
/// Returns [`CoreError::MalformedDocument`] when a leaf has the wrong type.
pub fn merge_over_defaults(document: &Value) -> Result<SiteContent, CoreError> {
    let mut merged = serde_json::to_value(default_content())
        .map_err(|e| CoreError::MalformedDocument(e.to_string()))?;
    deep_merge(&mut merged, document);
    serde_json::from_value(merged).map_err(|e| CoreError::MalformedDocument(e.to_string()))
}

fn deep_merge(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (_, Value::Null) => {}
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(key) {
                    Some(slot) => deep_merge(slot, value),
                    None if !value.is_null() => {
                        base_map.insert(key.clone(), scrub_nulls(value));
                    }
                    None => {}
                }
            }
        }
        (slot, value) => *slot = scrub_nulls(value),
    }
}

/// Drop null object members and turn null list entries into empty objects,
/// so missing leaves decode as empty strings.
fn scrub_nulls(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k.clone(), scrub_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| match item {
                    Value::Null => Value::Object(Map::new()),
                    other => scrub_nulls(other),
                })
                .collect(),
        ),
        other => other.clone(),
    }
}
