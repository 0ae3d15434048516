pub mod entities;
pub mod policies;
pub mod services;

pub use entities::*;
pub use policies::*;
pub use services::*;
