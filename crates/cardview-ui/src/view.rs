//! Renderer-agnostic description of both card faces.

use cardview_core::{
    Brand, BrandDetector, CardFace, CardField, CardInput, StandardDetector, visible_face,
};
use serde::Serialize;
use tracing::debug;

use crate::config::CardViewConfig;
use crate::error::ValidationError;
use crate::icons::IconSet;

pub const BASE_WIDTH: f64 = 300.0;
pub const BASE_HEIGHT: f64 = 190.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transform {
    pub scale: f64,
    pub translate_y: f64,
}

/// Faces are laid out at the base size and scaled; the container grows in height only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Geometry {
    pub base: Size,
    pub container: Size,
    pub transform: Transform,
}

impl Geometry {
    pub fn for_scale(scale: f64) -> Self {
        Self {
            base: Size {
                width: BASE_WIDTH,
                height: BASE_HEIGHT,
            },
            container: Size {
                width: BASE_WIDTH,
                height: BASE_HEIGHT * scale,
            },
            transform: Transform {
                scale,
                translate_y: BASE_HEIGHT * (scale - 1.0) / 2.0,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotRole {
    Number,
    Name,
    ExpiryTitle,
    Expiry,
    Cvc,
}

impl SlotRole {
    pub const fn label(self) -> &'static str {
        match self {
            SlotRole::Number => "number",
            SlotRole::Name => "name",
            SlotRole::ExpiryTitle => "expiry_title",
            SlotRole::Expiry => "expiry",
            SlotRole::Cvc => "cvc",
        }
    }

    /// Form field whose focus highlights this slot.
    pub const fn field(self) -> CardField {
        match self {
            SlotRole::Number => CardField::Number,
            SlotRole::Name => CardField::Name,
            SlotRole::ExpiryTitle | SlotRole::Expiry => CardField::Expiry,
            SlotRole::Cvc => CardField::Cvc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextSlot {
    pub role: SlotRole,
    pub text: String,
    /// The value was empty and `text` holds the placeholder.
    pub placeholder: bool,
    pub focused: bool,
    /// `None` renders with the platform's default font.
    pub font_family: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrontFace {
    pub background: String,
    pub icon: Option<String>,
    pub number: TextSlot,
    pub name: TextSlot,
    pub expiry_title: TextSlot,
    pub expiry: TextSlot,
    /// Present only for brands that print the code on the front.
    pub amex_cvc: Option<TextSlot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BackFace {
    pub background: String,
    pub cvc: TextSlot,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardViewModel {
    pub brand: Brand,
    pub face: CardFace,
    pub flipped: bool,
    pub geometry: Geometry,
    pub front: FrontFace,
    pub back: BackFace,
}

pub struct CardView {
    config: CardViewConfig,
    icons: IconSet,
}

impl CardView {
    /// Validates the config and layers its custom icons over the manifest defaults.
    pub fn new(config: CardViewConfig) -> Result<Self, ValidationError> {
        let icons = IconSet::defaults();
        Self::with_icons(config, icons)
    }

    pub fn with_icons(config: CardViewConfig, icons: IconSet) -> Result<Self, ValidationError> {
        config.validate()?;
        let icons = icons.with_overrides(&config.custom_icons);
        Ok(Self { config, icons })
    }

    pub fn config(&self) -> &CardViewConfig {
        &self.config
    }

    pub fn icons(&self) -> &IconSet {
        &self.icons
    }

    pub fn render<D: BrandDetector + ?Sized>(
        &self,
        input: &CardInput,
        detector: &D,
    ) -> CardViewModel {
        let brand = input.brand(detector);
        let face = visible_face(input.focused, brand);
        let font = Some(self.config.font_family().to_owned());
        let placeholder = &self.config.placeholder;

        let slot = |role: SlotRole, value: &str, fallback: &str, font: Option<String>| {
            let is_placeholder = value.is_empty();
            TextSlot {
                role,
                text: if is_placeholder {
                    fallback.to_owned()
                } else {
                    value.to_owned()
                },
                placeholder: is_placeholder,
                focused: input.is_focused(role.field()),
                font_family: font,
            }
        };

        let name = input.name.to_uppercase();
        let expiry_title = self
            .config
            .expiry_title
            .as_deref()
            .map(str::to_uppercase)
            .unwrap_or_default();

        let front = FrontFace {
            background: self.config.images.front.clone(),
            icon: self.icons.resolve(brand).map(str::to_owned),
            number: slot(SlotRole::Number, &input.number, &placeholder.number, font.clone()),
            name: slot(SlotRole::Name, &name, &placeholder.name, font.clone()),
            expiry_title: slot(
                SlotRole::ExpiryTitle,
                &expiry_title,
                &placeholder.expiry_title,
                font.clone(),
            ),
            expiry: slot(SlotRole::Expiry, &input.expiry, &placeholder.expiry, font.clone()),
            amex_cvc: brand
                .prints_code_on_front()
                .then(|| slot(SlotRole::Cvc, &input.cvc, &placeholder.cvc, font.clone())),
        };
        let back = BackFace {
            background: self.config.images.back.clone(),
            cvc: slot(SlotRole::Cvc, &input.cvc, &placeholder.cvc, None),
        };

        debug!(brand = brand.id(), face = %face, "rendered card view");

        CardViewModel {
            brand,
            face,
            flipped: face.is_back(),
            geometry: Geometry::for_scale(self.config.scale),
            front,
            back,
        }
    }

    /// Render with the standard issuer catalog.
    pub fn render_standard(&self, input: &CardInput) -> CardViewModel {
        self.render(input, &StandardDetector)
    }
}
