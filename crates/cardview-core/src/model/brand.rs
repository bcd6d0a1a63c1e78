use core::fmt;
use serde::{Deserialize, Serialize};

/// Card issuer network. `Unknown` covers empty, ambiguous and unmatched numbers.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Brand {
    Visa,
    Mastercard,
    AmericanExpress,
    DinersClub,
    Discover,
    Jcb,
    #[serde(rename = "unionpay")]
    UnionPay,
    Maestro,
    Elo,
    Mir,
    Hiper,
    Hipercard,
    #[default]
    Unknown,
}

impl Brand {
    pub const ALL: [Brand; 13] = [
        Brand::Visa,
        Brand::Mastercard,
        Brand::AmericanExpress,
        Brand::DinersClub,
        Brand::Discover,
        Brand::Jcb,
        Brand::UnionPay,
        Brand::Maestro,
        Brand::Elo,
        Brand::Mir,
        Brand::Hiper,
        Brand::Hipercard,
        Brand::Unknown,
    ];

    /// Stable identifier, also used as the key in icon manifests.
    pub const fn id(self) -> &'static str {
        match self {
            Brand::Visa => "visa",
            Brand::Mastercard => "mastercard",
            Brand::AmericanExpress => "american-express",
            Brand::DinersClub => "diners-club",
            Brand::Discover => "discover",
            Brand::Jcb => "jcb",
            Brand::UnionPay => "unionpay",
            Brand::Maestro => "maestro",
            Brand::Elo => "elo",
            Brand::Mir => "mir",
            Brand::Hiper => "hiper",
            Brand::Hipercard => "hipercard",
            Brand::Unknown => "unknown",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Brand::Visa => "Visa",
            Brand::Mastercard => "Mastercard",
            Brand::AmericanExpress => "American Express",
            Brand::DinersClub => "Diners Club",
            Brand::Discover => "Discover",
            Brand::Jcb => "JCB",
            Brand::UnionPay => "UnionPay",
            Brand::Maestro => "Maestro",
            Brand::Elo => "Elo",
            Brand::Mir => "Mir",
            Brand::Hiper => "Hiper",
            Brand::Hipercard => "Hipercard",
            Brand::Unknown => "Unknown",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Brand::ALL.into_iter().find(|brand| brand.id() == id)
    }

    pub const fn is_known(self) -> bool {
        !matches!(self, Brand::Unknown)
    }

    /// American Express prints the security code on the front face.
    pub const fn prints_code_on_front(self) -> bool {
        matches!(self, Brand::AmericanExpress)
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::Brand;

    #[test]
    fn ids_round_trip_through_lookup() {
        for brand in Brand::ALL {
            assert_eq!(Brand::from_id(brand.id()), Some(brand));
        }
        assert_eq!(Brand::from_id("amex"), None);
    }

    #[test]
    fn serde_uses_catalog_ids() {
        let json = serde_json::to_string(&Brand::AmericanExpress).unwrap();
        assert_eq!(json, "\"american-express\"");
        let parsed: Brand = serde_json::from_str("\"unionpay\"").unwrap();
        assert_eq!(parsed, Brand::UnionPay);
    }

    #[test]
    fn only_amex_prints_code_on_front() {
        let front: Vec<Brand> = Brand::ALL
            .into_iter()
            .filter(|brand| brand.prints_code_on_front())
            .collect();
        assert_eq!(front, vec![Brand::AmericanExpress]);
    }

    #[test]
    fn display_matches_id() {
        assert_eq!(Brand::DinersClub.to_string(), "diners-club");
        assert_eq!(Brand::Unknown.display_name(), "Unknown");
    }
}
