//! Immutable presentation settings for the card view.
//!
//! | option | default | effect |
//! |---|---|---|
//! | `platform` | `ios` | picks the default font |
//! | `font_family` | platform font | font of every front-face text slot |
//! | `scale` | `1.0` | container height and transform |
//! | `placeholder.*` | dotted masks, `NAME`, `MONTH/YEAR` | shown for empty values |
//! | `expiry_title` | unset | label above the expiry, uppercased |
//! | `images.front` / `images.back` | bundled card art | face backgrounds |
//! | `custom_icons` | empty | brand icons that replace the defaults |

use std::collections::BTreeMap;

use cardview_core::Brand;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const DEFAULT_FRONT_IMAGE: &str = "assets/images/card-front.png";
const DEFAULT_BACK_IMAGE: &str = "assets/images/card-back.png";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    #[default]
    Ios,
    Android,
}

impl Platform {
    pub const fn default_font(self) -> &'static str {
        match self {
            Platform::Ios => "Courier",
            Platform::Android => "monospace",
        }
    }
}

/// Text shown in place of empty values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Placeholders {
    pub number: String,
    pub name: String,
    pub expiry_title: String,
    pub expiry: String,
    pub cvc: String,
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            number: "•••• •••• •••• ••••".into(),
            name: "NAME".into(),
            expiry_title: "MONTH/YEAR".into(),
            expiry: "••/••".into(),
            cvc: "•••".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardImages {
    pub front: String,
    pub back: String,
}

impl Default for CardImages {
    fn default() -> Self {
        Self {
            front: DEFAULT_FRONT_IMAGE.into(),
            back: DEFAULT_BACK_IMAGE.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardViewConfig {
    pub platform: Platform,
    /// Overrides the platform font when set.
    pub font_family: Option<String>,
    pub scale: f64,
    pub placeholder: Placeholders,
    pub expiry_title: Option<String>,
    pub images: CardImages,
    pub custom_icons: BTreeMap<Brand, String>,
}

impl Default for CardViewConfig {
    fn default() -> Self {
        Self::for_platform(Platform::default())
    }
}

impl CardViewConfig {
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            platform,
            font_family: None,
            scale: 1.0,
            placeholder: Placeholders::default(),
            expiry_title: None,
            images: CardImages::default(),
            custom_icons: BTreeMap::new(),
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = Some(font_family.into());
        self
    }

    pub fn with_expiry_title(mut self, title: impl Into<String>) -> Self {
        self.expiry_title = Some(title.into());
        self
    }

    pub fn with_custom_icon(mut self, brand: Brand, asset: impl Into<String>) -> Self {
        self.custom_icons.insert(brand, asset.into());
        self
    }

    /// Font applied to the front-face text.
    pub fn font_family(&self) -> &str {
        self.font_family
            .as_deref()
            .unwrap_or_else(|| self.platform.default_font())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ValidationError::invalid(
                "scale",
                format!("scale must be a positive number (got {})", self.scale),
            ));
        }

        if let Some(font) = self.font_family.as_deref() {
            if font.trim().is_empty() {
                return Err(ValidationError::invalid(
                    "font_family",
                    "font family must not be empty",
                ));
            }
        }

        for (label, value) in [
            ("images.front", &self.images.front),
            ("images.back", &self.images.back),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::invalid(label, "image path must not be empty"));
            }
        }

        for (brand, asset) in &self.custom_icons {
            if asset.trim().is_empty() {
                return Err(ValidationError::invalid(
                    format!("custom_icons.{brand}"),
                    "icon path must not be empty",
                ));
            }
        }

        Ok(())
    }
}
