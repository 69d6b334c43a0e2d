//! Inline CSS declarations.
use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

use maud::{Markup, Render, html};

/// An ordered list of CSS declarations, rendered as the value of a `style` attribute.
///
/// Declarations keep their insertion order. Setting a property that is already present replaces its value in place,
/// which mirrors how spreading one style object into another behaves.
///
/// ## Example
/// ```rust
/// use folio::style::Style;
///
/// let style = Style::new().set("margin-top", "0").set("color", "inherit");
/// assert_eq!(style.to_string(), "margin-top: 0; color: inherit");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    declarations: Vec<(Cow<'static, str>, String)>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn set(mut self, property: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        let property = property.into();
        let value = value.into();

        match self.declarations.iter_mut().find(|(p, _)| *p == property) {
            Some((_, existing)) => *existing = value,
            None => self.declarations.push((property, value)),
        }

        self
    }

    /// Merges every declaration of `other` into this style, `other` winning on conflicts.
    #[must_use]
    pub fn extend(self, other: impl Into<Style>) -> Self {
        other
            .into()
            .declarations
            .into_iter()
            .fold(self, |style, (property, value)| style.set(property, value))
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, (property, value)) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", property, value)?;
        }
        Ok(())
    }
}

impl Render for Style {
    fn render(&self) -> Markup {
        html! { (self.to_string()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_keeps_insertion_order() {
        let style = Style::new()
            .set("box-shadow", "none")
            .set("text-decoration", "none")
            .set("color", "inherit");

        assert_eq!(
            style.to_string(),
            "box-shadow: none; text-decoration: none; color: inherit"
        );
    }

    #[test]
    fn test_style_set_replaces_in_place() {
        let style = Style::new()
            .set("margin-top", "1rem")
            .set("color", "red")
            .set("margin-top", "0");

        assert_eq!(style.to_string(), "margin-top: 0; color: red");
        assert_eq!(style.get("margin-top"), Some("0"));
        assert_eq!(style.get("padding"), None);
    }

    #[test]
    fn test_style_extend() {
        let base = Style::new().set("font-size", "1rem").set("margin-top", "2rem");
        let merged = base.extend(Style::new().set("margin-top", "0").set("color", "inherit"));

        assert_eq!(
            merged.to_string(),
            "font-size: 1rem; margin-top: 0; color: inherit"
        );
    }

    #[test]
    fn test_style_empty() {
        assert!(Style::new().is_empty());
        assert_eq!(Style::new().to_string(), "");
    }

    #[test]
    fn test_style_render_escapes_attribute() {
        let style = Style::new().set("font-family", "\"Merriweather\", serif");
        let markup = html! { p style=(style) {} };

        assert_eq!(
            markup.into_string(),
            "<p style=\"font-family: &quot;Merriweather&quot;, serif\"></p>"
        );
    }
}
