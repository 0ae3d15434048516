pub mod common;
pub mod medicine;
pub mod nutrition;
pub mod recognition;
pub mod scan;
pub mod session;
pub mod suitability;
