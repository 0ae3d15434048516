pub mod condition;
pub mod food;
pub mod health;
pub mod image_upload;
pub mod medicine;
pub mod prescription;
pub mod server;
