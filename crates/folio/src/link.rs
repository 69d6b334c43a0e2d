use maud::{Markup, html};

use crate::style::Style;

/// Renders navigation links. Sites with client-side routing can swap in their own element here.
pub trait LinkRenderer: Send + Sync {
    fn link(&self, to: &str, style: &Style, label: Markup) -> Markup;
}

/// Plain `<a>` element.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anchor;

impl LinkRenderer for Anchor {
    fn link(&self, to: &str, style: &Style, label: Markup) -> Markup {
        html! {
            @if style.is_empty() {
                a href=(to) { (label) }
            } @else {
                a href=(to) style=(style) { (label) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_link() {
        let style = Style::new().set("color", "inherit");
        let markup = Anchor.link("/", &style, html! { "Home" });

        assert_eq!(
            markup.into_string(),
            "<a href=\"/\" style=\"color: inherit\">Home</a>"
        );
    }

    #[test]
    fn test_anchor_link_without_style() {
        let markup = Anchor.link("/about", &Style::new(), html! { "About" });
        assert_eq!(markup.into_string(), "<a href=\"/about\">About</a>");
    }
}
