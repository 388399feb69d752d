//! The public landing page.

use maud::{html, Markup};
use vela_core::content::{
    AboutSection, Feature, FooterSection, HeroSection, ParallaxSection, SiteContent,
    SocialNetwork,
};

use crate::views::href::{css_url, safe_href};
use crate::views::layout::{self, BRAND};

const NAV_ITEMS: [&str; 4] = ["Home", "About", "Residences", "Amenities"];

/// Render the whole page from merged content.
///
/// Parallax sections beyond the second are not shown; missing ones are
/// skipped.
pub fn landing_page(content: &SiteContent) -> Markup {
    let first_parallax = content.parallax_sections.first();
    let second_parallax = content.parallax_sections.get(1);

    layout::page(
        BRAND,
        "/site.css",
        html! {
            (header())
            main {
                (hero(&content.hero))
                (about(&content.about))
                @if let Some(section) = first_parallax {
                    (parallax(section, "residences"))
                }
                (features(&content.features))
                @if let Some(section) = second_parallax {
                    (parallax(section, "lifestyle"))
                }
            }
            (footer(&content.footer.with_fallbacks()))
            a.edit-button href="/admin" title="Edit content" { "Edit" }
        },
    )
}

fn header() -> Markup {
    html! {
        header.site-header {
            a.brand href="#home" { (BRAND) }
            nav {
                @for item in NAV_ITEMS {
                    a href={ "#" (item.to_lowercase()) } { (item) }
                }
            }
        }
    }
}

fn hero(hero: &HeroSection) -> Markup {
    html! {
        section #home .hero {
            @if !hero.background_video.is_empty() {
                video.hero-media autoplay muted loop playsinline poster=(hero.background_image) {
                    source src=(hero.background_video) type="video/mp4";
                    img src=(hero.background_image) alt="Luxury Property";
                }
            } @else if !hero.background_image.is_empty() {
                img.hero-media src=(hero.background_image) alt="Luxury Property";
            }
            div.hero-overlay {}
            div.hero-content {
                h1 { (hero.title) }
                div.rule {}
                p { (hero.subtitle) }
                div.hero-actions {
                    a.outline-button href="#about" { "DISCOVER MORE" }
                    a.outline-button href="#contact" { "CONTACT US" }
                }
            }
        }
    }
}

fn about(about: &AboutSection) -> Markup {
    html! {
        section #about .about {
            div.about-text {
                h2 { (about.heading) }
                div.rule {}
                h3 { (about.subheading) }
                p { (about.description) }
                div.stats {
                    @for stat in &about.stats {
                        div.stat {
                            div.stat-value { (stat.value) }
                            div.stat-label { (stat.label) }
                        }
                    }
                }
            }
            @if !about.image.is_empty() {
                img.about-image src=(about.image) alt=(about.heading);
            }
        }
    }
}

fn parallax(section: &ParallaxSection, anchor: &str) -> Markup {
    html! {
        section.parallax id=(anchor) style={ "background-image: " (css_url(&section.image)) } {
            div.parallax-content {
                h2 { (section.title) }
                p { (section.description) }
            }
        }
    }
}

fn features(features: &[Feature]) -> Markup {
    html! {
        section #amenities .features {
            h2 { "EXCEPTIONAL FEATURES" }
            p.features-lead { "Discover Our Unique Offerings" }
            div.feature-grid {
                @for feature in features {
                    article.feature-card {
                        @if !feature.image.is_empty() {
                            img src=(feature.image) alt=(feature.title);
                        }
                        h3 { (feature.title) }
                        p { (feature.description) }
                    }
                }
            }
        }
    }
}

/// Expects a footer that already has its fallbacks applied.
fn footer(footer: &FooterSection) -> Markup {
    html! {
        footer #contact .site-footer {
            img.footer-logo src=(footer.logo) alt=(BRAND);
            h2 { (footer.tagline) }
            p { (footer.description) }
            nav.social {
                @for (network, url) in social_links(footer) {
                    a href=(url) target="_blank" rel="noopener noreferrer" aria-label=(network.label()) {
                        (network.label())
                    }
                }
            }
        }
    }
}

/// Present social links whose URL is safe to follow.
fn social_links(footer: &FooterSection) -> impl Iterator<Item = (SocialNetwork, &str)> {
    footer
        .social_links
        .present()
        .filter_map(|(network, url)| safe_href(url).map(|url| (network, url)))
}

#[cfg(test)]
mod tests {
    use vela_core::content::{default_content, DEFAULT_HERO_TITLE};

    use super::*;

    #[test]
    fn test_defaults_render_every_section() {
        let html = landing_page(&default_content()).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(DEFAULT_HERO_TITLE));
        assert!(html.contains("EXCEPTIONAL FEATURES"));
        assert!(html.contains("Discover Our Unique Offerings"));
        assert!(html.contains(r#"href="/admin""#));
        for item in NAV_ITEMS {
            assert!(html.contains(item));
        }
    }

    #[test]
    fn test_video_replaces_image_when_present() {
        let mut content = default_content();
        content.hero.background_video = "/intro.mp4".into();
        let html = landing_page(&content).into_string();
        assert!(html.contains(r#"<source src="/intro.mp4" type="video/mp4">"#));

        content.hero.background_video.clear();
        let html = landing_page(&content).into_string();
        assert!(!html.contains("<video"));
    }

    #[test]
    fn test_footer_falls_back_and_hides_empty_links() {
        let mut content = default_content();
        let defaults = content.footer.clone();
        content.footer.tagline.clear();
        content.footer.social_links.instagram.clear();

        let html = landing_page(&content).into_string();
        assert!(html.contains(&defaults.tagline));
        assert!(!html.contains(r#"aria-label="Instagram""#));
        assert!(html.contains(r#"aria-label="Facebook""#));
    }

    #[test]
    fn test_missing_parallax_sections_are_skipped() {
        let mut content = default_content();
        content.parallax_sections.truncate(1);
        let html = landing_page(&content).into_string();
        assert!(html.contains(r#"id="residences""#));
        assert!(!html.contains(r#"id="lifestyle""#));
    }

    #[test]
    fn test_parallax_image_stays_inside_url() {
        let mut content = default_content();
        content.parallax_sections[0].image = "/a.jpg'); background: red; ('".into();
        let html = landing_page(&content).into_string();
        assert!(html.contains("background-image: url('/a.jpg%27%29;%20background:%20red;%20%28%27')"));
        assert!(!html.contains("background: red"));
    }

    #[test]
    fn test_script_social_links_are_dropped() {
        let mut content = default_content();
        content.footer.social_links.facebook = "javascript:alert(1)".into();
        let html = landing_page(&content).into_string();
        assert!(!html.contains("javascript:"));
        assert!(!html.contains(r#"aria-label="Facebook""#));
        assert!(html.contains(r#"aria-label="Instagram""#));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut content = default_content();
        content.hero.title = "<script>alert(1)</script>".into();
        let html = landing_page(&content).into_string();
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
