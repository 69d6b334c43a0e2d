use log::debug;
use maud::{Markup, Render, html};

use crate::{
    clock::{Clock, SystemClock},
    link::{Anchor, LinkRenderer},
    options::SiteOptions,
    style::Style,
    typography::{Typography, VerticalRhythm},
};

/// Which header a page gets. Only the root path is considered the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderVariant {
    /// Site title as the page's main heading, at a larger size.
    Home,
    /// Site title as a smaller heading, in the heading font.
    Page,
}

impl HeaderVariant {
    /// Picks the header for `current_path`, comparing it exactly with `root_path`.
    pub fn for_path(current_path: &str, root_path: &str) -> Self {
        if current_path == root_path {
            HeaderVariant::Home
        } else {
            HeaderVariant::Page
        }
    }

    /// Whether this is the home page header.
    pub fn is_home(&self) -> bool {
        matches!(self, HeaderVariant::Home)
    }
}

/// The page shell shared by every page of the blog: a header with the site title, the page content and a copyright footer.
///
/// A layout only holds immutable collaborators, so the same instance can render any number of pages, from any thread.
/// Everything that varies between pages is passed to [`render`](Layout::render).
///
/// ## Example
/// ```rust
/// use folio::{Layout, SiteOptions, clock::FixedClock};
/// use maud::html;
///
/// let layout = Layout::new(SiteOptions::default()).with_clock(FixedClock::in_year(2020));
/// let page = layout.render("/about", "My Blog", html! { p { "Hello!" } });
///
/// assert!(page.into_string().contains("Copyright © 2020"));
/// ```
pub struct Layout {
    options: SiteOptions,
    typography: Box<dyn Typography>,
    links: Box<dyn LinkRenderer>,
    clock: Box<dyn Clock>,
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(SiteOptions::default())
    }
}

impl Layout {
    /// Creates a layout using the options' typography, plain anchors and the system clock.
    pub fn new(options: SiteOptions) -> Self {
        let typography = VerticalRhythm::new(options.typography.clone());

        Self {
            options,
            typography: Box::new(typography),
            links: Box::new(Anchor),
            clock: Box::new(SystemClock),
        }
    }

    /// Replaces the typography the header and container sizes come from.
    pub fn with_typography(mut self, typography: impl Typography + 'static) -> Self {
        self.typography = Box::new(typography);
        self
    }

    /// Replaces how the title link to the root path is rendered.
    pub fn with_links(mut self, links: impl LinkRenderer + 'static) -> Self {
        self.links = Box::new(links);
        self
    }

    /// Replaces the clock the footer reads the current year from.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn options(&self) -> &SiteOptions {
        &self.options
    }

    pub fn render(&self, current_path: &str, title: &str, content: impl Render) -> Markup {
        let variant = HeaderVariant::for_path(current_path, &self.options.root_path);
        debug!(target: "layout", "Rendering {} with {:?} header", current_path, variant);

        html! {
            div style=(self.container_style()) {
                header { (self.header(variant, title)) }
                main { (content) }
                (self.footer())
            }
        }
    }

    pub fn header(&self, variant: HeaderVariant, title: &str) -> Markup {
        let link = self
            .links
            .link(&self.options.root_path, &title_link_style(), html! { (title) });

        match variant {
            HeaderVariant::Home => {
                let style = Style::from(self.typography.scale(1.5))
                    .set("margin-bottom", self.typography.rhythm(1.5))
                    .set("margin-top", "0");

                html! { h1 style=(style) { (link) } }
            }
            HeaderVariant::Page => {
                let style = Style::new()
                    .set("font-family", self.options.heading_font_family.clone())
                    .set("margin-top", "0");

                html! { h3 style=(style) { (link) } }
            }
        }
    }

    pub fn footer(&self) -> Markup {
        let license = &self.options.license;

        html! {
            footer style=(Style::new().set("bottom", "0")) {
                "Copyright © " (self.copyright_years()) " ("
                a href=(license.url) target="_blank" rel="noopener noreferrer" { (license.name) }
                ")"
            }
        }
    }

    fn copyright_years(&self) -> String {
        let year = self.clock.year();

        match self.options.copyright_start_year {
            Some(start) if start < year => format!("{}–{}", start, year),
            _ => year.to_string(),
        }
    }

    fn container_style(&self) -> Style {
        let typography = &self.typography;

        Style::new()
            .set("background-color", self.options.background_color.clone())
            .set("margin-left", "auto")
            .set("margin-right", "auto")
            .set("max-width", typography.rhythm(32.0))
            .set("min-height", "100vh")
            .set(
                "padding",
                format!("{} {}", typography.rhythm(1.5), typography.rhythm(7.0 / 4.0)),
            )
    }
}

fn title_link_style() -> Style {
    Style::new()
        .set("box-shadow", "none")
        .set("text-decoration", "none")
        .set("color", "inherit")
}

/// Renders `content` in the default layout, reading the year from the system clock.
pub fn layout(current_path: &str, title: &str, content: impl Render) -> Markup {
    Layout::default().render(current_path, title, content)
}
