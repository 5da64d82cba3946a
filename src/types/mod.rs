mod jump_point;
mod vec2;

pub use jump_point::*;
pub use vec2::*;
