#![deny(warnings)]
pub mod detect;
pub mod flip;
pub mod model;

pub use detect::{BrandDetector, StandardDetector, detect_brand};
pub use flip::{CardFace, should_show_back, visible_face};
pub use model::brand::Brand;
pub use model::field::CardField;
pub use model::input::CardInput;
