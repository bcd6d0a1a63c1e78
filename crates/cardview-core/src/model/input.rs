use serde::{Deserialize, Serialize};

use crate::detect::BrandDetector;
use crate::flip::{CardFace, visible_face};
use crate::model::brand::Brand;
use crate::model::field::CardField;

/// Raw values from the surrounding form, recreated on every change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInput {
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub expiry: String,
    #[serde(default)]
    pub cvc: String,
    #[serde(default)]
    pub focused: Option<CardField>,
}

impl CardInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_expiry(mut self, expiry: impl Into<String>) -> Self {
        self.expiry = expiry.into();
        self
    }

    pub fn with_cvc(mut self, cvc: impl Into<String>) -> Self {
        self.cvc = cvc.into();
        self
    }

    pub fn with_focus(mut self, focused: Option<CardField>) -> Self {
        self.focused = focused;
        self
    }

    pub fn value(&self, field: CardField) -> &str {
        match field {
            CardField::Number => &self.number,
            CardField::Name => &self.name,
            CardField::Expiry => &self.expiry,
            CardField::Cvc => &self.cvc,
        }
    }

    pub fn is_focused(&self, field: CardField) -> bool {
        self.focused == Some(field)
    }

    /// Brand derived from `number` alone.
    pub fn brand<D: BrandDetector + ?Sized>(&self, detector: &D) -> Brand {
        detector.detect(&self.number)
    }

    pub fn face<D: BrandDetector + ?Sized>(&self, detector: &D) -> CardFace {
        visible_face(self.focused, self.brand(detector))
    }
}
