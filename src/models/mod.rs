pub mod direction;
pub mod value;

pub use direction::*;
