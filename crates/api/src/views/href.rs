//! Making editor-supplied URLs safe to place in `href` and `style`.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::{ParseError, Url};

/// Characters that could end a quoted CSS `url('...')` token early.
const CSS_URL: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'\\');

const LINK_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

/// A CSS `url(...)` value for an image address.
pub fn css_url(raw: &str) -> String {
    format!("url('{}')", utf8_percent_encode(raw, CSS_URL))
}

/// The URL if it is relative or uses a link scheme, `None` otherwise.
pub fn safe_href(raw: &str) -> Option<&str> {
    match Url::parse(raw) {
        Ok(url) if LINK_SCHEMES.contains(&url.scheme()) => Some(raw),
        Ok(_) => None,
        Err(ParseError::RelativeUrlWithoutBase) => Some(raw),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_url_cannot_close_the_token() {
        assert_eq!(css_url("/img/a.jpg"), "url('/img/a.jpg')");
        assert_eq!(
            css_url("x.jpg'); color: red; ('"),
            "url('x.jpg%27%29;%20color:%20red;%20%28%27')"
        );
        assert_eq!(css_url("a\\b\nc"), "url('a%5Cb%0Ac')");
    }

    #[test]
    fn test_safe_href_keeps_web_and_relative_links() {
        assert_eq!(safe_href("https://facebook.com/vela"), Some("https://facebook.com/vela"));
        assert_eq!(safe_href("mailto:hello@vela.com"), Some("mailto:hello@vela.com"));
        assert_eq!(safe_href("/contact"), Some("/contact"));
        assert_eq!(safe_href("#contact"), Some("#contact"));
    }

    #[test]
    fn test_safe_href_rejects_script_schemes() {
        assert_eq!(safe_href("javascript:alert(1)"), None);
        assert_eq!(safe_href(" JavaScript:alert(1)"), None);
        assert_eq!(safe_href("java\tscript:alert(1)"), None);
        assert_eq!(safe_href("data:text/html,<b>x</b>"), None);
    }
}
