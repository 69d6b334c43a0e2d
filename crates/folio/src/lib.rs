//! Folio renders the page shell of a static blog with [Maud](https://maud.lambda.xyz): the site title as a header,
//! the page content, and a copyright footer.
//!
//! The home page gets a large title, every other page a smaller one in the heading font. Sizes come from an
//! injectable [`Typography`](typography::Typography), links from a [`LinkRenderer`](link::LinkRenderer) and the
//! footer's year from a [`Clock`](clock::Clock), so rendering stays a pure function of its inputs.
//!
//! ## Example
//! ```rust
//! use folio::layout;
//! use maud::html;
//!
//! let page = layout("/", "My Blog", html! { p { "Welcome!" } });
//! assert!(page.into_string().contains("<h1"));
//! ```

pub mod clock;
pub mod document;
pub mod errors;
pub mod link;
pub mod options;
pub mod style;
pub mod typography;

// Expose the layout module.
pub mod layouts {
    mod layout;
    pub use layout::{HeaderVariant, Layout, layout};
}

mod logging;

pub use layouts::{HeaderVariant, Layout, layout};
pub use logging::init_logging;
pub use options::{License, SiteOptions, TypographyOptions};

/// Name and version of Folio, as used in the generator meta tag of [`document`](document::document).
///
/// ## Example
/// ```rust
/// use folio::GENERATOR;
///
/// assert!(GENERATOR.starts_with("Folio v"));
/// ```
pub const GENERATOR: &str = concat!("Folio v", env!("CARGO_PKG_VERSION"));
