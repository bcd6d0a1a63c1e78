use serde::{Deserialize, Serialize};

use super::BrandDetector;
use super::matcher;
use crate::model::brand::Brand;

use IinPattern::{Prefix, Range};

/// A single leading-digit rule for a brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IinPattern {
    Prefix(u32),
    /// Inclusive range; both bounds are compared at the input's length.
    Range(u32, u32),
}

impl IinPattern {
    /// Digits the input needs before this pattern is fully matched.
    pub const fn len(self) -> usize {
        match self {
            Prefix(value) | Range(value, _) => digit_len(value),
        }
    }

    /// Whether `digits` agrees with the pattern on their common leading digits.
    pub fn matches(self, digits: &str) -> bool {
        let k = digits.len().min(self.len());
        let Some(lead) = leading(digits, k) else {
            return false;
        };
        match self {
            Prefix(value) => truncate(value, k) == lead,
            Range(lo, hi) => (truncate(lo, k)..=truncate(hi, k)).contains(&lead),
        }
    }

    /// Pattern length when the input covers the whole pattern.
    pub fn strength(self, digits: &str) -> Option<usize> {
        let len = self.len();
        (digits.len() >= len).then_some(len)
    }
}

const fn digit_len(mut value: u32) -> usize {
    let mut len = 1;
    while value >= 10 {
        value /= 10;
        len += 1;
    }
    len
}

fn truncate(value: u32, k: usize) -> u32 {
    let len = digit_len(value);
    if k >= len {
        value
    } else {
        value / 10u32.pow((len - k) as u32)
    }
}

fn leading(digits: &str, k: usize) -> Option<u32> {
    digits.get(..k)?.parse().ok()
}

/// Brand with its patterns in priority order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub brand: Brand,
    pub patterns: Vec<IinPattern>,
}

impl CatalogEntry {
    pub fn new(brand: Brand, patterns: impl Into<Vec<IinPattern>>) -> Self {
        Self {
            brand,
            patterns: patterns.into(),
        }
    }
}

/// Ordered issuer catalog. Entry order breaks ties between equally strong matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IinCatalog {
    entries: Vec<CatalogEntry>,
}

impl IinCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn standard() -> Self {
        Self {
            entries: STANDARD
                .iter()
                .map(|(brand, patterns)| CatalogEntry::new(*brand, *patterns))
                .collect(),
        }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn entry(&self, brand: Brand) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.brand == brand)
    }

    /// Append an entry, or extend the patterns of an existing one.
    pub fn push(&mut self, entry: CatalogEntry) {
        match self.entries.iter_mut().find(|e| e.brand == entry.brand) {
            Some(existing) => existing.patterns.extend(entry.patterns),
            None => self.entries.push(entry),
        }
    }

    pub fn with_entry(mut self, entry: CatalogEntry) -> Self {
        self.push(entry);
        self
    }

    pub fn remove(&mut self, brand: Brand) -> Option<CatalogEntry> {
        let index = self.entries.iter().position(|e| e.brand == brand)?;
        Some(self.entries.remove(index))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl BrandDetector for IinCatalog {
    fn detect(&self, number: &str) -> Brand {
        let Some(digits) = matcher::normalize(number) else {
            return Brand::Unknown;
        };
        matcher::resolve(
            self.entries
                .iter()
                .map(|entry| (entry.brand, entry.patterns.as_slice())),
            &digits,
        )
    }
}

pub(crate) const STANDARD: &[(Brand, &[IinPattern])] = &[
    (Brand::Visa, &[Prefix(4)]),
    (
        Brand::Mastercard,
        &[
            Range(51, 55),
            Range(2221, 2229),
            Range(223, 229),
            Range(23, 26),
            Range(270, 271),
            Prefix(2720),
        ],
    ),
    (Brand::AmericanExpress, &[Prefix(34), Prefix(37)]),
    (
        Brand::DinersClub,
        &[Range(300, 305), Prefix(36), Prefix(38), Prefix(39)],
    ),
    (
        Brand::Discover,
        &[Prefix(6011), Range(644, 649), Prefix(65)],
    ),
    (
        Brand::Jcb,
        &[Prefix(2131), Prefix(1800), Range(3528, 3589)],
    ),
    (
        Brand::UnionPay,
        &[
            Prefix(620),
            Range(62100, 62182),
            Range(62184, 62187),
            Range(62185, 62197),
            Range(62200, 62205),
            Range(622010, 622999),
            Prefix(622018),
            Range(62207, 62209),
            Range(623, 626),
            Prefix(6270),
            Prefix(6272),
            Prefix(6276),
            Range(627700, 627779),
            Range(627781, 627799),
            Range(6282, 6289),
            Prefix(6291),
            Prefix(6292),
            Prefix(810),
            Range(8110, 8131),
            Range(8132, 8151),
            Range(8152, 8163),
            Range(8164, 8171),
        ],
    ),
    (
        Brand::Maestro,
        &[
            Prefix(493698),
            Range(500000, 504174),
            Range(504176, 506698),
            Range(506779, 508999),
            Range(56, 59),
            Prefix(63),
            Prefix(67),
            Prefix(6),
        ],
    ),
    (
        Brand::Elo,
        &[
            Prefix(401178),
            Prefix(401179),
            Prefix(438935),
            Prefix(457631),
            Prefix(457632),
            Prefix(431274),
            Prefix(451416),
            Prefix(457393),
            Prefix(504175),
            Range(506699, 506778),
            Range(509000, 509999),
            Prefix(627780),
            Prefix(636297),
            Prefix(636368),
            Range(650031, 650033),
            Range(650035, 650051),
            Range(650405, 650439),
            Range(650485, 650538),
            Range(650541, 650598),
            Range(650700, 650718),
            Range(650720, 650727),
            Range(650901, 650978),
            Range(651652, 651679),
            Range(655000, 655019),
            Range(655021, 655058),
        ],
    ),
    (Brand::Mir, &[Range(2200, 2204)]),
    (
        Brand::Hiper,
        &[
            Prefix(637095),
            Prefix(63737423),
            Prefix(63743358),
            Prefix(637568),
            Prefix(637599),
            Prefix(637609),
            Prefix(637612),
        ],
    ),
    (Brand::Hipercard, &[Prefix(606282)]),
];
