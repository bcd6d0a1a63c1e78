#![deny(warnings)]
pub mod config;
pub mod error;
pub mod icons;
pub mod resource;
pub mod view;

pub use config::{CardImages, CardViewConfig, Placeholders, Platform};
pub use error::{ManifestError, ValidationError};
pub use icons::IconSet;
pub use resource::IconManifest;
pub use view::{BackFace, CardView, CardViewModel, FrontFace, Geometry, SlotRole, TextSlot};
