use maud::{html, Markup, DOCTYPE};

/// Site name, used as the brand and the document title.
pub const BRAND: &str = "VELA";

/// Wrap a page body in the shared document shell.
pub fn page(title: &str, stylesheet: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                link rel="stylesheet" href=(stylesheet);
            }
            body { (body) }
        }
    }
}
