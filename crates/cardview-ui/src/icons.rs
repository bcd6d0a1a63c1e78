use std::collections::BTreeMap;

use cardview_core::Brand;

use crate::resource::IconManifest;

/// Brand → icon asset lookup. Later layers replace earlier ones per brand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconSet {
    icons: BTreeMap<Brand, String>,
}

impl IconSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_manifest(manifest: &IconManifest) -> Self {
        Self {
            icons: manifest
                .brand_icons()
                .map(|(brand, path)| (brand, path.to_owned()))
                .collect(),
        }
    }

    /// Defaults from the process-wide manifest.
    pub fn defaults() -> Self {
        Self::from_manifest(IconManifest::current())
    }

    pub fn with_overrides<'a, I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (&'a Brand, &'a String)>,
    {
        for (brand, path) in overrides {
            self.icons.insert(*brand, path.clone());
        }
        self
    }

    pub fn insert(&mut self, brand: Brand, path: impl Into<String>) {
        self.icons.insert(brand, path.into());
    }

    /// `Unknown` never has an icon.
    pub fn resolve(&self, brand: Brand) -> Option<&str> {
        if !brand.is_known() {
            return None;
        }
        self.icons.get(&brand).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}
