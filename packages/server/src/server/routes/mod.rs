// HTTP routes
pub mod health;
pub mod lead;

pub use health::*;
pub use lead::*;
