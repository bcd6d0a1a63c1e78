pub mod brand;
pub mod field;
pub mod input;
