use std::collections::BTreeMap;
use std::path::Path;

use cardview_core::Brand;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ManifestError;

pub const MANIFEST_ENV: &str = "CARDVIEW_ICON_MANIFEST";

/// Brand icon assets keyed by brand id (`visa`, `american-express`, ...).
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq, Default)]
pub struct IconManifest {
    #[serde(default)]
    pub icons: BTreeMap<String, String>,
}

static MANIFEST: Lazy<IconManifest> = Lazy::new(load_manifest);

fn load_manifest() -> IconManifest {
    let path = std::env::var(MANIFEST_ENV).ok();
    load_from(path.as_deref())
}

/// Manifest at `path`, or the built-in set when unset, unreadable or malformed.
pub(crate) fn load_from(path: Option<&str>) -> IconManifest {
    if let Some(path) = path {
        match IconManifest::from_path(path) {
            Ok(manifest) => return manifest,
            Err(err) => warn!(%err, "falling back to built-in icon manifest"),
        }
    }

    IconManifest::placeholder()
}

impl IconManifest {
    pub fn placeholder() -> Self {
        let icons = [
            (Brand::Visa, "icons/stp_card_visa.png"),
            (Brand::Mastercard, "icons/stp_card_mastercard.png"),
            (Brand::AmericanExpress, "icons/stp_card_amex.png"),
            (Brand::DinersClub, "icons/stp_card_diners.png"),
            (Brand::Discover, "icons/stp_card_discover.png"),
            (Brand::Jcb, "icons/stp_card_jcb.png"),
        ]
        .into_iter()
        .map(|(brand, path)| (brand.id().to_owned(), path.to_owned()))
        .collect();
        Self { icons }
    }

    pub fn current() -> &'static IconManifest {
        &MANIFEST
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
            source,
            path: path.to_path_buf(),
        })?;
        serde_json::from_str(&content).map_err(|source| ManifestError::Parse {
            source,
            path: path.to_path_buf(),
        })
    }

    /// Entries whose key names a catalog brand; others are logged and skipped.
    pub fn brand_icons(&self) -> impl Iterator<Item = (Brand, &str)> + '_ {
        self.icons.iter().filter_map(|(key, path)| match Brand::from_id(key) {
            Some(brand) => Some((brand, path.as_str())),
            None => {
                warn!(key = key.as_str(), "ignoring icon for unrecognised brand");
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn placeholder_manifest_contains_data() {
        let manifest = IconManifest::placeholder();
        assert!(!manifest.icons.is_empty());
        assert!(manifest.icons.contains_key("american-express"));
    }

    #[test]
    fn loads_manifest_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"icons": {{"visa": "custom/visa.png", "bogus": "x.png"}}}}"#)
            .expect("write manifest");

        let manifest = IconManifest::from_path(file.path()).expect("manifest loads");
        let icons: Vec<(Brand, &str)> = manifest.brand_icons().collect();
        assert_eq!(icons, vec![(Brand::Visa, "custom/visa.png")]);
    }

    #[test]
    fn reports_parse_errors_with_path() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "not json").expect("write");
        let err = IconManifest::from_path(file.path()).expect_err("invalid json");
        assert!(matches!(err, ManifestError::Parse { .. }));
    }

    #[test]
    fn load_from_prefers_a_readable_manifest() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"icons": {{"jcb": "custom/jcb.png"}}}}"#).expect("write manifest");
        let path = file.path().to_str().expect("utf-8 temp path");

        let manifest = load_from(Some(path));
        assert_eq!(
            manifest.icons.get("jcb").map(String::as_str),
            Some("custom/jcb.png")
        );
        assert!(!manifest.icons.contains_key("visa"));
    }

    #[test]
    fn load_from_falls_back_on_malformed_manifest() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{{ icons: ").expect("write");
        let path = file.path().to_str().expect("utf-8 temp path");

        assert_eq!(load_from(Some(path)), IconManifest::placeholder());
    }

    #[test]
    fn load_from_falls_back_on_missing_file() {
        assert_eq!(
            load_from(Some("/definitely/not/here.json")),
            IconManifest::placeholder()
        );
    }

    #[test]
    fn load_from_without_path_uses_built_in_icons() {
        assert_eq!(load_from(None), IconManifest::placeholder());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = IconManifest::from_path("/definitely/not/here.json").expect_err("missing");
        assert!(matches!(err, ManifestError::Read { .. }));
    }
}
