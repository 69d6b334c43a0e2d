//! Typographic helpers: a modular type scale and a vertical rhythm.
//!
//! The layout never computes sizes itself, it asks a [`Typography`] for them. [`VerticalRhythm`] is the default,
//! but any implementation (or a pair of closures through [`FnTypography`]) can be injected instead.
use crate::options::TypographyOptions;
use crate::style::Style;

/// A font size with the line height that keeps it on the rhythm grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontScale {
    pub font_size: String,
    pub line_height: String,
}

impl From<FontScale> for Style {
    fn from(scale: FontScale) -> Self {
        Style::new()
            .set("font-size", scale.font_size)
            .set("line-height", scale.line_height)
    }
}

pub trait Typography: Send + Sync {
    /// Font size and line height for the given step of the type scale. Step `0` is the base font size.
    fn scale(&self, step: f64) -> FontScale;

    /// A CSS length spanning `lines` lines of the rhythm, e.g. `rhythm(1.5)` for a line and a half.
    fn rhythm(&self, lines: f64) -> String;
}

/// Typography built from a base font size, a base line height and a scale ratio.
#[derive(Debug, Clone, Default)]
pub struct VerticalRhythm {
    options: TypographyOptions,
}

impl VerticalRhythm {
    pub fn new(options: TypographyOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TypographyOptions {
        &self.options
    }

    fn line_height_px(&self) -> f64 {
        self.options.base_font_size * self.options.base_line_height
    }

    /// Number of rhythm lines a font of `font_size_px` occupies, padding included.
    ///
    /// Options that don't describe a usable grid (unvalidated, non-positive or non-finite) fall back to one step.
    fn lines_for_font_size(&self, font_size_px: f64) -> f64 {
        let line_height = self.line_height_px();
        let step = if self.options.round_to_nearest_half_line {
            0.5
        } else {
            1.0
        };

        let needed_px = font_size_px + self.options.min_line_padding * 2.0;
        let lines = (needed_px / (line_height * step)).ceil() * step;

        if lines.is_finite() && lines > 0.0 {
            lines
        } else {
            step
        }
    }
}

impl Typography for VerticalRhythm {
    fn scale(&self, step: f64) -> FontScale {
        let font_size_px = self.options.base_font_size * self.options.scale_ratio.powf(step);

        FontScale {
            font_size: format_length(font_size_px / self.options.base_font_size, "rem"),
            line_height: self.rhythm(self.lines_for_font_size(font_size_px)),
        }
    }

    fn rhythm(&self, lines: f64) -> String {
        format_length(lines * self.options.base_line_height, "rem")
    }
}

/// Adapts two plain functions into a [`Typography`].
///
/// ## Example
/// ```rust
/// use folio::typography::{FnTypography, FontScale, Typography};
///
/// let typography = FnTypography::new(
///     |step| FontScale {
///         font_size: format!("{}em", 1.0 + step),
///         line_height: "1.5".into(),
///     },
///     |lines| format!("{}px", lines * 24.0),
/// );
/// assert_eq!(typography.rhythm(2.0), "48px");
/// ```
pub struct FnTypography<S, R> {
    scale: S,
    rhythm: R,
}

impl<S, R> FnTypography<S, R>
where
    S: Fn(f64) -> FontScale + Send + Sync,
    R: Fn(f64) -> String + Send + Sync,
{
    pub fn new(scale: S, rhythm: R) -> Self {
        Self { scale, rhythm }
    }
}

impl<S, R> Typography for FnTypography<S, R>
where
    S: Fn(f64) -> FontScale + Send + Sync,
    R: Fn(f64) -> String + Send + Sync,
{
    fn scale(&self, step: f64) -> FontScale {
        (self.scale)(step)
    }

    fn rhythm(&self, lines: f64) -> String {
        (self.rhythm)(lines)
    }
}

/// Formats a length with at most 5 decimals and no trailing zeros, e.g. `2.625rem` or `56rem`.
pub fn format_length(value: f64, unit: &str) -> String {
    let rounded = (value * 100_000.0).round() / 100_000.0;
    // Avoid printing `-0`.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };

    format!("{}{}", rounded, unit)
}
