//! Card brand detection from issuer identification number (IIN) prefixes.
//!
//! Detection is total: empty, malformed, ambiguous or unmatched input yields
//! [`Brand::Unknown`]. The pattern catalog sits behind [`BrandDetector`] so it
//! can be replaced or extended without touching the flip logic.

pub mod catalog;
mod matcher;

pub use catalog::{CatalogEntry, IinCatalog, IinPattern};

use crate::model::brand::Brand;

pub trait BrandDetector: Send + Sync {
    /// Classify a possibly partial card number.
    fn detect(&self, number: &str) -> Brand;
}

impl<T: BrandDetector + ?Sized> BrandDetector for &T {
    fn detect(&self, number: &str) -> Brand {
        (**self).detect(number)
    }
}

impl<T: BrandDetector + ?Sized> BrandDetector for Box<T> {
    fn detect(&self, number: &str) -> Brand {
        (**self).detect(number)
    }
}

/// Zero-sized detector over the built-in catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardDetector;

impl BrandDetector for StandardDetector {
    fn detect(&self, number: &str) -> Brand {
        detect_brand(number)
    }
}

/// Detect against the standard issuer catalog.
pub fn detect_brand(number: &str) -> Brand {
    let Some(digits) = matcher::normalize(number) else {
        return Brand::Unknown;
    };
    matcher::resolve(
        catalog::STANDARD
            .iter()
            .map(|(brand, patterns)| (*brand, *patterns)),
        &digits,
    )
}
