//! Full HTML documents around a page shell.
use maud::{DOCTYPE, Markup, Render, html};

use crate::GENERATOR;

/// Can be used to create a generator tag in the output HTML. See [`GENERATOR`](crate::GENERATOR).
pub fn generator() -> Markup {
    html! {
        meta name="generator" content=(GENERATOR);
    }
}

/// Wraps `body` in a complete HTML document titled `page_title`.
///
/// ## Example
/// ```rust
/// use folio::{document::document, layout};
/// use maud::html;
///
/// let page = document("About", layout("/about", "My Blog", html! { p { "Hi" } }));
/// assert!(page.into_string().starts_with("<!DOCTYPE html>"));
/// ```
pub fn document(page_title: &str, body: impl Render) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                (generator())
                title { (page_title) }
            }
            body {
                (body)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document() {
        let page = document("Hello & goodbye", html! { p { "Body" } }).into_string();

        assert!(page.starts_with("<!DOCTYPE html><html lang=\"en\"><head>"));
        assert!(page.contains("<meta charset=\"utf-8\">"));
        assert!(page.contains(&format!(
            "<meta name=\"generator\" content=\"{}\">",
            GENERATOR
        )));
        assert!(page.contains("<title>Hello &amp; goodbye</title>"));
        assert!(page.ends_with("<body><p>Body</p></body></html>"));
    }
}
