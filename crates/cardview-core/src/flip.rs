use core::fmt;
use serde::{Deserialize, Serialize};

use crate::model::brand::Brand;
use crate::model::field::CardField;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardFace {
    Front,
    Back,
}

impl CardFace {
    pub const fn is_back(self) -> bool {
        matches!(self, CardFace::Back)
    }
}

impl fmt::Display for CardFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CardFace::Front => "front",
            CardFace::Back => "back",
        })
    }
}

/// True when the CVC field has focus and the brand keeps its code on the back.
pub fn should_show_back(focused: Option<CardField>, brand: Brand) -> bool {
    focused == Some(CardField::Cvc) && !brand.prints_code_on_front()
}

pub fn visible_face(focused: Option<CardField>, brand: Brand) -> CardFace {
    if should_show_back(focused, brand) {
        CardFace::Back
    } else {
        CardFace::Front
    }
}
