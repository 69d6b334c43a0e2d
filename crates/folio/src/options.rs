use std::{fs, path::Path};

use log::debug;
use serde::Deserialize;

use crate::errors::ConfigError;

pub const DEFAULT_LICENSE_URL: &str = "https://creativecommons.org/licenses/by-sa/4.0/";

/// Site-wide options for the [`Layout`](crate::layouts::Layout).
///
/// Every field has a default, so an options file only needs to list what it changes.
///
/// ## Examples
/// Default values:
/// ```rust
/// use folio::SiteOptions;
///
/// let options = SiteOptions::default();
/// assert_eq!(options.root_path, "/");
/// assert_eq!(options.license.name, "CC BY-SA 4.0");
/// ```
/// From YAML:
/// ```rust
/// use folio::SiteOptions;
///
/// let options = SiteOptions::from_yaml_str(
///     "heading_font_family: Georgia, serif\ncopyright_start_year: 2018\n",
/// )
/// .unwrap();
/// assert_eq!(options.heading_font_family, "Georgia, serif");
/// assert_eq!(options.copyright_start_year, Some(2018));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteOptions {
    /// Path of the home page. The header uses its larger variant only on this exact path.
    pub root_path: String,

    /// Font family of the site title on every page except the home page.
    pub heading_font_family: String,

    pub background_color: String,

    pub license: License,

    /// First year of the copyright notice. When set and earlier than the current year, the footer shows a range
    /// such as `2018–2024` instead of the current year alone.
    pub copyright_start_year: Option<i32>,

    pub typography: TypographyOptions,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            root_path: "/".into(),
            heading_font_family: "Montserrat, sans-serif".into(),
            background_color: "#ffffff".into(),
            license: License::default(),
            copyright_start_year: None,
            typography: TypographyOptions::default(),
        }
    }
}

impl SiteOptions {
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let options: SiteOptions = serde_yaml::from_str(source)?;
        options.validate()?;
        Ok(options)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(target: "options", "Loaded options from {}", path.display());

        Self::from_yaml_str(&source)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.root_path.starts_with('/') {
            return Err(ConfigError::InvalidRootPath {
                path: self.root_path.clone(),
            });
        }

        self.typography.validate()
    }
}

/// License the site's content is published under, linked from the footer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct License {
    pub name: String,
    pub url: String,
}

impl Default for License {
    fn default() -> Self {
        Self {
            name: "CC BY-SA 4.0".into(),
            url: DEFAULT_LICENSE_URL.into(),
        }
    }
}

/// Settings of the default [`VerticalRhythm`](crate::typography::VerticalRhythm) typography.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypographyOptions {
    /// Root font size, in pixels.
    pub base_font_size: f64,
    /// Line height as a multiple of the base font size. One rhythm line is this many rem.
    pub base_line_height: f64,
    /// Ratio between two consecutive steps of the type scale.
    pub scale_ratio: f64,
    /// Minimum space above and below a scaled font inside its lines, in pixels.
    pub min_line_padding: f64,
    pub round_to_nearest_half_line: bool,
}

impl Default for TypographyOptions {
    fn default() -> Self {
        Self {
            base_font_size: 16.0,
            base_line_height: 1.75,
            scale_ratio: 2.5,
            min_line_padding: 2.0,
            round_to_nearest_half_line: true,
        }
    }
}

impl TypographyOptions {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("base_font_size", self.base_font_size),
            ("base_line_height", self.base_line_height),
            ("scale_ratio", self.scale_ratio),
        ];

        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidTypography { field, value });
            }
        }

        if !self.min_line_padding.is_finite() || self.min_line_padding < 0.0 {
            return Err(ConfigError::InvalidTypography {
                field: "min_line_padding",
                value: self.min_line_padding,
            });
        }

        Ok(())
    }
}
