use core::fmt;
use serde::{Deserialize, Serialize};

/// Form field that can hold input focus. Absence of focus is `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardField {
    Number,
    Name,
    Expiry,
    Cvc,
}

impl CardField {
    pub const ALL: [CardField; 4] = [
        CardField::Number,
        CardField::Name,
        CardField::Expiry,
        CardField::Cvc,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            CardField::Number => "number",
            CardField::Name => "name",
            CardField::Expiry => "expiry",
            CardField::Cvc => "cvc",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        CardField::ALL.into_iter().find(|field| field.id() == id)
    }
}

impl fmt::Display for CardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::CardField;

    #[test]
    fn from_id_maps_valid_values() {
        assert_eq!(CardField::from_id("cvc"), Some(CardField::Cvc));
        assert_eq!(CardField::from_id("none"), None);
        assert_eq!(CardField::from_id("CVC"), None);
    }
}
