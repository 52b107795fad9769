pub mod input;
pub mod movement;

pub use input::*;
pub use movement::*;
