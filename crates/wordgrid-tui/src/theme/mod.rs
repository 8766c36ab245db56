pub mod palette;
pub mod styles;

pub use palette::Palette;
pub use styles::*;
